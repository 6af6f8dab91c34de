use actix_web::web;

use crate::handlers::experiences;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experiences")
            .service(
                web::resource("")
                    .route(web::post().to(experiences::create_experience))
                    .route(web::get().to(experiences::list_experiences))
            )
            // Registered ahead of "/{experience_id}" so it is not read as an id
            .service(
                web::resource("/deleted")
                    .route(web::get().to(experiences::list_deleted_experiences))
            )
            .service(
                web::resource("/{experience_id}")
                    .route(web::get().to(experiences::get_experience))
                    .route(web::put().to(experiences::update_experience))
                    .route(web::delete().to(experiences::delete_experience))
            )
            .service(
                web::resource("/{experience_id}/restore")
                    .route(web::post().to(experiences::restore_experience))
            )
    );
}
