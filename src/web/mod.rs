
pub mod graphql;
mod mw_res_map;
mod mw_security;
mod routes_static;

use crate::model::ModelManager;
use axum::{middleware, Router};

use self::mw_res_map::mw_response_map;
use self::mw_security::{cors_layer, with_security_headers};

/// Full application router. The static front-end is the fallback, so
/// the middleware below applies to it as well as to `/graphql`.
pub fn routes(mm: ModelManager, web_folder: &str) -> Router {
    let routes_all = Router::new()
        .merge(graphql::routes(mm))
        .fallback_service(routes_static::serve_dir(web_folder))
        .layer(middleware::map_response(mw_response_map))
        .layer(cors_layer());

    with_security_headers(routes_all)
}
