//! HTTP surface: gallery, save endpoint and the editor-facing preset list.

use crate::catalog::CATALOG;
use crate::client::ADMIN_KEY_HEADER;
use crate::endpoint::{self, Envelope, SaveError, SaveOutcome, SavePolicy, SaveRequest, Verdicts};
use crate::gallery::{self, GalleryPage};
use crate::nonce::{self, NonceIssuer};
use crate::storage::{self, OptionStore, Preset};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ServerState {
    pub store: Arc<dyn OptionStore>,
    pub nonces: Arc<NonceIssuer>,
    pub admin_user: String,
    pub admin_key: String,
    pub policy: SavePolicy,
}

impl ServerState {
    fn is_admin(&self, headers: &HeaderMap) -> bool {
        if self.admin_key.is_empty() {
            return false;
        }
        headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|key| nonce::constant_time_eq(key, &self.admin_key))
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/gallery", get(gallery))
        .route("/admin-ajax", post(admin_ajax))
        .route("/presets", get(presets))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: ServerState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    info!("  GET  /health     - Health check");
    info!("  GET  /gallery    - Gallery controls + save nonce (admin)");
    info!("  POST /admin-ajax - Save selected gradients (admin)");
    info!("  GET  /presets    - Saved presets for the editor");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;
    Ok(())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn gallery(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    if !state.is_admin(&headers) {
        warn!("gallery requested without admin key");
        return (StatusCode::FORBIDDEN, Json(Envelope::failure())).into_response();
    }

    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || storage::load_selection(store.as_ref())).await {
        Ok(Ok(saved)) => Json(GalleryPage {
            nonce: state.nonces.create(endpoint::NONCE_ACTION, &state.admin_user),
            gradients: gallery::render(CATALOG, &saved),
        })
        .into_response(),
        Ok(Err(e)) => {
            error!("load selection: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failure())).into_response()
        }
        Err(e) => {
            error!("spawn error: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failure())).into_response()
        }
    }
}

pub async fn admin_ajax(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Result<Json<SaveRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(body) => body,
        Err(e) => {
            warn!("malformed save request: {e}");
            return (StatusCode::BAD_REQUEST, Json(Envelope::failure())).into_response();
        }
    };
    if req.action != endpoint::SAVE_ACTION {
        warn!(action = %req.action, "unknown action");
        return (StatusCode::BAD_REQUEST, Json(Envelope::failure())).into_response();
    }

    let verdicts = Verdicts {
        token_valid: state
            .nonces
            .verify(&req.nonce, endpoint::NONCE_ACTION, &state.admin_user),
        authorized: state.is_admin(&headers),
    };

    let store = state.store.clone();
    let policy = state.policy;
    let result = tokio::task::spawn_blocking(move || {
        endpoint::save_gradients(store.as_ref(), verdicts, req.gradients.as_ref(), policy)
    })
    .await;

    match result {
        Ok(Ok(SaveOutcome::Cleared)) => {
            info!("gradient selection cleared");
            Json(Envelope::success()).into_response()
        }
        Ok(Ok(SaveOutcome::Saved(count))) => {
            info!(count, "gradient selection saved");
            Json(Envelope::success()).into_response()
        }
        Ok(Err(SaveError::Store(e))) => {
            error!("save selection: {e:#}");
            Json(Envelope::failure()).into_response()
        }
        Ok(Err(e)) => {
            warn!("save rejected: {e}");
            Json(Envelope::failure()).into_response()
        }
        Err(e) => {
            error!("spawn error: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failure())).into_response()
        }
    }
}

pub async fn presets(State(state): State<ServerState>) -> Response {
    let store = state.store.clone();
    match tokio::task::spawn_blocking(move || storage::load_selection(store.as_ref())).await {
        Ok(Ok(saved)) => Json::<Vec<Preset>>(saved.presets()).into_response(),
        Ok(Err(e)) => {
            error!("load selection: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failure())).into_response()
        }
        Err(e) => {
            error!("spawn error: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Envelope::failure())).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, GRADIENTS_OPTION};
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const KEY: &str = "test-admin-key";

    fn state() -> (ServerState, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = ServerState {
            store: store.clone(),
            nonces: Arc::new(NonceIssuer::new("secret", 86_400)),
            admin_user: "admin".into(),
            admin_key: KEY.into(),
            policy: SavePolicy::default(),
        };
        (state, store)
    }

    async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_req(uri: &str, key: Option<&str>) -> Request<Body> {
        let mut b = Request::builder().uri(uri);
        if let Some(k) = key {
            b = b.header(ADMIN_KEY_HEADER, k);
        }
        b.body(Body::empty()).unwrap()
    }

    fn save_req(body: Value, key: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/admin-ajax")
            .header(header::CONTENT_TYPE, "application/json")
            .header(ADMIN_KEY_HEADER, key)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = state();
        let (status, body) = call(&router(state), get_req("/health", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_gallery_requires_admin() {
        let (state, _) = state();
        let app = router(state);
        let (status, body) = call(&app, get_req("/gallery", None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({"success": false}));

        let (status, _) = call(&app, get_req("/gallery", Some("wrong"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_save_then_render_and_presets() {
        let (state, _) = state();
        let app = router(state);

        let (_, page) = call(&app, get_req("/gallery", Some(KEY))).await;
        let nonce = page["nonce"].as_str().unwrap().to_string();
        assert_eq!(page["gradients"].as_array().unwrap().len(), CATALOG.len());

        let (status, body) = call(
            &app,
            save_req(
                json!({
                    "action": "geg_save_gradients",
                    "nonce": nonce,
                    "gradients": {"warm-flame": {"name": "Warm Flame", "gradient": CATALOG[0].css}},
                }),
                KEY,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true}));

        let (_, page) = call(&app, get_req("/gallery", Some(KEY))).await;
        assert_eq!(page["gradients"][0]["checked"], json!(true));
        assert_eq!(page["gradients"][1]["checked"], json!(false));

        let (_, presets) = call(&app, get_req("/presets", None)).await;
        assert_eq!(presets, json!([{"name": "Warm Flame", "gradient": CATALOG[0].css}]));
    }

    #[tokio::test]
    async fn test_bad_nonce_is_generic_failure() {
        let (state, store) = state();
        let app = router(state);

        let (status, body) = call(
            &app,
            save_req(
                json!({"action": "geg_save_gradients", "nonce": "deadbeef00", "gradients": {}}),
                KEY,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false}));
        assert!(store.get(GRADIENTS_OPTION).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_gradients_clears() {
        let (state, store) = state();
        let nonce = state.nonces.create(endpoint::NONCE_ACTION, "admin");
        store
            .set(GRADIENTS_OPTION, r#"{"a":{"name":"A","gradient":"g","slug":"a"}}"#)
            .unwrap();
        let app = router(state);

        let (_, body) = call(
            &app,
            save_req(json!({"action": "geg_save_gradients", "nonce": nonce}), KEY),
        )
        .await;
        assert_eq!(body, json!({"success": true}));
        assert_eq!(store.get(GRADIENTS_OPTION).unwrap().as_deref(), Some("{}"));

        let (_, presets) = call(&app, get_req("/presets", None)).await;
        assert_eq!(presets, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_gets_failure_envelope() {
        let (state, store) = state();
        let app = router(state);

        let garbage = Request::builder()
            .method("POST")
            .uri("/admin-ajax")
            .header(header::CONTENT_TYPE, "application/json")
            .header(ADMIN_KEY_HEADER, KEY)
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = call(&app, garbage).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false}));

        let (status, body) = call(&app, save_req(json!({"nonce": "x"}), KEY)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false}));
        assert!(store.get(GRADIENTS_OPTION).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let (state, _) = state();
        let (status, body) = call(
            &router(state),
            save_req(json!({"action": "something_else", "nonce": ""}), KEY),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"success": false}));
    }
}
