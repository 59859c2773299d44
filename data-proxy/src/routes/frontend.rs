use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Static files from the web bundle. Unknown paths get `index.html` so the
/// client-side router can handle `/results`.
pub fn serve_frontend(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
