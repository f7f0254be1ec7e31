
use axum::http::{HeaderValue, Method, Uri};
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn mw_response_map(uri: Uri, req_method: Method, mut res: Response) -> Response {
    let uuid = Uuid::new_v4();

    info!(
        "{:<12} - {req_method} {uri} -> {} - {uuid}",
        "RES_MAPPER",
        res.status()
    );

    if let Ok(value) = HeaderValue::from_str(&uuid.to_string()) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    res
}
