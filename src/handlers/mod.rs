pub mod auth_handler;
pub mod content_handler;
pub mod health_handler;
pub mod question_handler;
pub mod statistics_handler;

use actix_web::web;

use crate::errors::AppError;

/// Registers every route plus the JSON body error handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        AppError::ValidationError(err.to_string()).into()
    });

    cfg.app_data(json_config)
        .service(health_handler::health_check)
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(auth_handler::profile)
        .service(question_handler::create_question)
        .service(question_handler::list_questions)
        .service(question_handler::get_question)
        .service(question_handler::update_question)
        .service(question_handler::delete_question)
        .service(statistics_handler::get_statistics)
        .service(statistics_handler::save_statistics)
        .service(statistics_handler::update_statistics)
        .service(statistics_handler::delete_statistics)
        .service(content_handler::create_module)
        .service(content_handler::list_modules)
        .service(content_handler::get_module)
        .service(content_handler::update_module)
        .service(content_handler::delete_module)
        .service(content_handler::create_submodule)
        .service(content_handler::list_submodules)
        .service(content_handler::get_submodule)
        .service(content_handler::update_submodule)
        .service(content_handler::delete_submodule)
        .service(content_handler::create_video)
        .service(content_handler::list_videos)
        .service(content_handler::get_video)
        .service(content_handler::update_video)
        .service(content_handler::delete_video);
}
