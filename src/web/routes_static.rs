use tower_http::services::ServeDir;

/// Prebuilt front-end. Directory requests resolve to their `index.html`.
pub fn serve_dir(web_folder: &str) -> ServeDir {
    ServeDir::new(web_folder)
}
