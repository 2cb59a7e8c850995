use std::io;
use std::path::{Component, Path};

use axum::{
    extract::State,
    http::{
        Method, Uri,
        header::{CACHE_CONTROL, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::{ServerState, rejections::AppError};

pub(super) const INDEX_FILE: &str = "index.html";
/// Served in place of plant images that are missing from the build.
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder.jpg";

const STATIC_CACHE_CONTROL: &str = "max-age=3600, must-revalidate";
const INDEX_CACHE_CONTROL: &str = "no-cache";
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "svg"];

/// Fallback handler: a file from the static directory, the placeholder for
/// missing images, or `index.html` so client-side routes resolve.
pub(super) async fn serve(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
) -> Result<Response, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed);
    }

    let decoded = urlencoding::decode(uri.path()).map_err(|_| AppError::NotFound)?;
    let requested = decoded.trim_start_matches('/');

    if requested == "api" || requested.starts_with("api/") {
        return Err(AppError::NotFound);
    }

    let relative = if requested.is_empty() {
        Path::new(INDEX_FILE)
    } else {
        Path::new(requested)
    };
    if !is_safe(relative) {
        debug!(path = requested, "rejected unsafe static path");
        return Err(AppError::NotFound);
    }

    let root = state.static_dir.as_path();
    let candidate = root.join(relative);
    if is_file(&candidate).await {
        return send_file(&candidate, &state).await;
    }

    if is_image(relative) {
        let placeholder = root.join(PLACEHOLDER_IMAGE);
        if is_file(&placeholder).await {
            warn!(path = requested, "image not found, serving placeholder");
            return send_file(&placeholder, &state).await;
        }
        return Err(AppError::NotFound);
    }

    let index = root.join(INDEX_FILE);
    if is_file(&index).await {
        return send_file(&index, &state).await;
    }

    Err(AppError::NotFound)
}

async fn send_file(path: &Path, state: &ServerState) -> Result<Response, AppError> {
    let contents = match tokio::fs::read(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(AppError::NotFound),
        Err(err) => {
            return Err(AppError::internal(
                format!("failed to read {}: {err}", path.display()),
                state.mode,
            ));
        }
    };

    let cache_control = if path.file_name().is_some_and(|name| name == INDEX_FILE) {
        INDEX_CACHE_CONTROL
    } else {
        STATIC_CACHE_CONTROL
    };

    Ok((
        [
            (CONTENT_TYPE, content_type(path)),
            (CACHE_CONTROL, cache_control),
        ],
        contents,
    )
        .into_response())
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_file())
}

/// Only plain relative components; no `..`, roots or prefixes.
fn is_safe(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_)))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_image(path: &Path) -> bool {
    extension(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn content_type(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("txt") => "text/plain; charset=utf-8",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
