use crate::client::{ClientError, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

/// Read access to the backend API.
///
/// Components receive a transport instead of reaching for a shared client, so they can be
/// exercised against an in-memory implementation.
#[async_trait]
pub trait Transport {
    /// Send `GET {base}{path}?{params}` and return the JSON body as is.
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value>;
}

pub struct HttpTransport {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::new();
        Ok(HttpTransport {
            base_url,
            token: token.map(String::from),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {} params={:?}", url, params);

        let mut request = self.client.get(url).query(params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!("unexpected status [{}] cause [{}]", status, body);
            return Err(ClientError::UnexpectedStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = res.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
