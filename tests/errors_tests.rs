use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
use portfolio_api::{errors::AppError, utils::valid_id::valid_id};
use serde_json::Value;

async fn body_of(err: &AppError) -> Value {
    let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_rt::test]
async fn storage_errors_are_opaque_500s() {
    let err = AppError::StorageError("password authentication failed for user admin".into());

    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_of(&err).await;
    assert_eq!(body["error"], "Internal server error");
    assert!(!body.to_string().contains("password"));
}

#[actix_rt::test]
async fn not_found_is_a_generic_404() {
    let err = AppError::NotFound("Experience not found".into());

    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_of(&err).await["error"], "Experience not found");
}

#[actix_rt::test]
async fn invalid_input_is_a_400_with_reason() {
    let err = valid_id("abc").unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    let body = body_of(&err).await;
    assert!(body["error"].as_str().unwrap().contains("abc"));
}

#[test]
fn valid_id_accepts_positive_integers_only() {
    assert_eq!(valid_id("42").unwrap(), 42);
    assert_eq!(valid_id(" 7 ").unwrap(), 7);
    assert!(valid_id("0").is_err());
    assert!(valid_id("-1").is_err());
    assert!(valid_id("9223372036854775808").is_err());
    assert!(valid_id("").is_err());
}

#[test]
fn sqlx_row_not_found_maps_to_not_found() {
    match AppError::from(sqlx::Error::RowNotFound) {
        AppError::NotFound(message) => assert_eq!(message, "Experience not found"),
        other => panic!("expected not found, got {:?}", other),
    }
    assert!(matches!(AppError::from(sqlx::Error::PoolTimedOut), AppError::StorageError(_)));
}
