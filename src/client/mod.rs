use crate::endpoint::{Envelope, SaveRequest, SAVE_ACTION};
use crate::gallery::GalleryPage;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Map, Value};
use std::time::Duration;

/// Header carrying the admin key.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// HTTP client for the gallery server.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: &str, admin_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ADMIN_KEY_HEADER,
            HeaderValue::from_str(admin_key).context("admin key is not a valid header value")?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("gradients/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the gallery controls and a fresh save nonce.
    pub async fn fetch_gallery(&self) -> anyhow::Result<GalleryPage> {
        let page = self
            .http
            .get(format!("{}/gallery", self.base_url))
            .send()
            .await
            .context("send gallery request")?
            .error_for_status()
            .context("gallery http status")?
            .json::<GalleryPage>()
            .await
            .context("parse gallery json")?;
        Ok(page)
    }

    /// Submit the checked gradients. A failure envelope is an error.
    pub async fn save(&self, gradients: Map<String, Value>, nonce: &str) -> anyhow::Result<()> {
        let body = SaveRequest {
            action: SAVE_ACTION.to_string(),
            gradients: Some(Value::Object(gradients)),
            nonce: nonce.to_string(),
        };

        let envelope: Envelope = self
            .http
            .post(format!("{}/admin-ajax", self.base_url))
            .json(&body)
            .send()
            .await
            .context("send save request")?
            .error_for_status()
            .context("save http status")?
            .json()
            .await
            .context("parse save response")?;

        if !envelope.success {
            anyhow::bail!("server rejected the save");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::SavePolicy;
    use crate::nonce::NonceIssuer;
    use crate::server::{self, ServerState};
    use crate::storage::{self, MemoryStore};
    use serde_json::json;
    use std::sync::Arc;

    const KEY: &str = "client-test-key";

    async fn spawn_server(store: Arc<MemoryStore>) -> String {
        let state = ServerState {
            store,
            nonces: Arc::new(NonceIssuer::new("secret", 86_400)),
            admin_user: "admin".into(),
            admin_key: KEY.into(),
            policy: SavePolicy::default(),
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, server::router(state)).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_fetch_then_save() {
        let store = Arc::new(MemoryStore::new());
        let base = spawn_server(store.clone()).await;
        let client = GalleryClient::new(&base, KEY, Duration::from_secs(5)).unwrap();

        let page = client.fetch_gallery().await.unwrap();
        assert!(!page.nonce.is_empty());
        assert!(page.gradients.iter().all(|c| !c.checked));

        let mut payload = Map::new();
        payload.insert(
            page.gradients[0].slug.clone(),
            json!({"name": page.gradients[0].name, "gradient": page.gradients[0].gradient}),
        );
        client.save(payload, &page.nonce).await.unwrap();

        let saved = storage::load_selection(store.as_ref()).unwrap();
        assert_eq!(saved.slugs(), vec!["warm-flame"]);
    }

    #[tokio::test]
    async fn test_rejected_save_is_error() {
        let base = spawn_server(Arc::new(MemoryStore::new())).await;
        let client = GalleryClient::new(&base, KEY, Duration::from_secs(5)).unwrap();
        assert!(client.save(Map::new(), "0000000000").await.is_err());
    }

    #[tokio::test]
    async fn test_wrong_key_cannot_load() {
        let base = spawn_server(Arc::new(MemoryStore::new())).await;
        let client = GalleryClient::new(&base, "nope", Duration::from_secs(5)).unwrap();
        assert!(client.fetch_gallery().await.is_err());
    }
}
