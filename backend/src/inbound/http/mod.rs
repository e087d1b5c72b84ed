//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod journals;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

use validation::{invalid_body_error, invalid_query_error};

/// Register the journal and user routes together with extractor settings
/// that report malformed JSON bodies and query strings as domain errors.
///
/// Callers supply [`state::HttpState`] through `App::app_data`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| invalid_body_error(err).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| invalid_query_error(err).into()),
    )
    .service(journals::create_journal)
    .service(journals::list_journals)
    .service(journals::get_journal)
    .service(journals::delete_journal)
    .service(users::signup)
    .service(users::signin);
}
