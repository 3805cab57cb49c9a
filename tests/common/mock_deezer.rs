//! Local stand-ins for the Deezer API and CDN, served by axum on an
//! ephemeral loopback port.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::extract::Path;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;

/// Audio body served by the mock CDN.
pub const PREVIEW_BYTES: &[u8] = b"ID3...";

/// Serve `app` on 127.0.0.1 and return its address. The server lives until
/// the test runtime shuts down.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// Loopback tcpmux port; nothing serves it, so connections are refused.
pub fn refused_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 1))
}

/// Mock of `GET /track/{id}` on api.deezer.com.
///
/// - `3135556`: preview `https://cdn.example/preview.mp3`
/// - `500`, `404404`: that HTTP status
/// - `nopreview`, `nullpreview`, `emptypreview`: 200 without a usable preview
/// - `dzerror`: Deezer's in-body error object with status 200
/// - `garbage`: 200 with a non-JSON body
/// - `upload`: user-uploaded track, negative id and numeric title
/// - anything else: preview `https://cdn.example/{id}.mp3`
pub fn deezer_api() -> Router {
    Router::new().route("/track/{id}", get(track))
}

async fn track(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "3135556" => Json(json!({
            "id": 3135556,
            "title": "Harder, Better, Faster, Stronger",
            "preview": "https://cdn.example/preview.mp3"
        }))
        .into_response(),
        "500" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        "404404" => (
            StatusCode::NOT_FOUND,
            Json(json!({ "preview": "https://cdn.example/ignored.mp3" })),
        )
            .into_response(),
        "nopreview" => Json(json!({ "id": 1, "title": "Silence" })).into_response(),
        "nullpreview" => Json(json!({ "id": 2, "preview": null })).into_response(),
        "emptypreview" => Json(json!({ "id": 3, "preview": "" })).into_response(),
        "dzerror" => Json(json!({
            "error": {
                "type": "DataException",
                "message": "no data",
                "code": 800
            }
        }))
        .into_response(),
        "garbage" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "upload" => Json(json!({
            "id": -1876543210,
            "title": 2024,
            "preview": "https://cdn.example/u.mp3"
        }))
        .into_response(),
        other => Json(json!({
            "title": other,
            "preview": format!("https://cdn.example/{}.mp3", other)
        }))
        .into_response(),
    }
}

/// Mock of the preview CDN.
///
/// `/preview.mp3` answers [`PREVIEW_BYTES`] only to requests carrying
/// `user_agent`. `/expired.mp3` is always a 403.
pub fn preview_cdn(user_agent: &'static str) -> Router {
    Router::new()
        .route(
            "/preview.mp3",
            get(move |headers: HeaderMap| async move {
                let ua = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if ua == user_agent {
                    ([(header::CONTENT_TYPE, "audio/mpeg")], PREVIEW_BYTES).into_response()
                } else {
                    (StatusCode::FORBIDDEN, "bad user agent").into_response()
                }
            }),
        )
        .route(
            "/expired.mp3",
            get(|| async { (StatusCode::FORBIDDEN, "Access denied: token expired") }),
        )
}

/// Preview CDN that promises `declared_len` bytes, sends [`PREVIEW_BYTES`]
/// and hangs up. Raw socket so the short body is not corrected by hyper.
pub async fn truncating_cdn(declared_len: usize) -> SocketAddr {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = [0u8; 8192];
            if stream.read(&mut buf).await.unwrap_or(0) == 0 {
                continue;
            }
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: audio/mpeg\r\nContent-Length: {}\r\n\r\n",
                declared_len
            );
            let _ = stream.write_all(head.as_bytes()).await;
            let _ = stream.write_all(PREVIEW_BYTES).await;
            let _ = stream.shutdown().await;
        }
    });
    addr
}
