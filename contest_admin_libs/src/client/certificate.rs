use crate::{
    api::ToQueryParameter,
    client::{transport::Transport, ClientError, Result},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;
use validator::Validate;

/// Collection path the certificate templates are read from.
///
/// The backend serves them under the round collection; the resource name has not been confirmed,
/// so the path is kept in this one place.
pub const CERTIFICATE_COLLECTION_PATH: &str = "/rounds";

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateQuery {
    pub contest_id_search: Option<String>,
    pub id_search: Option<String>,
    #[validate(range(min = 1, message = "Page number must be at least 1"))]
    pub page_number: u32,
    #[validate(range(min = 1, message = "Page size must be at least 1"))]
    pub page_size: u32,
}

impl Default for CertificateQuery {
    fn default() -> Self {
        Self {
            contest_id_search: None,
            id_search: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ToQueryParameter for CertificateQuery {
    fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(4);
        if let Some(contest_id) = &self.contest_id_search {
            params.push((String::from("contestIdSearch"), contest_id.clone()));
        }
        if let Some(id) = &self.id_search {
            params.push((String::from("idSearch"), id.clone()));
        }
        params.push((String::from("pageNumber"), self.page_number.to_string()));
        params.push((String::from("pageSize"), self.page_size.to_string()));
        params
    }
}

pub struct CertificateClient<T> {
    transport: T,
}

impl<T: Transport + Send + Sync> CertificateClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch one page of certificate templates. `None` requests the first page with the default
    /// page size and no filters.
    ///
    /// Exactly one request is sent; paging is left to the caller.
    pub async fn get_all(&self, query: Option<&CertificateQuery>) -> Result<Value> {
        let query = query.cloned().unwrap_or_default();
        query.validate().map_err(|e| {
            tracing::error!("invalid certificate query {:?}: {}", query, e);
            ClientError::InvalidQueryError(e.into())
        })?;

        self.transport
            .get(CERTIFICATE_COLLECTION_PATH, &query.to_query())
            .await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    type Call = (String, Vec<(String, String)>);

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
            self.calls
                .lock()
                .unwrap()
                .push((String::from(path), params.to_vec()));
            Ok(json!({"items": [], "total": 0}))
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn get(&self, _path: &str, _params: &[(String, String)]) -> Result<Value> {
            Err(ClientError::UnexpectedStatusError {
                status: 503,
                body: String::from("unavailable"),
            })
        }
    }

    fn pairs(params: &[(&str, &str)]) -> Vec<(String, String)> {
        params
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn get_all_with_defaults() {
        let client = CertificateClient::new(RecordingTransport::default());
        let body = client.get_all(None).await.unwrap();

        assert_eq!(body, json!({"items": [], "total": 0}));

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "/rounds");
        assert_eq!(calls[0].1, pairs(&[("pageNumber", "1"), ("pageSize", "10")]));
    }

    #[tokio::test]
    async fn get_all_forwards_filters() {
        let client = CertificateClient::new(RecordingTransport::default());
        let query = CertificateQuery {
            contest_id_search: Some(String::from("42")),
            id_search: Some(String::from("7")),
            page_number: 3,
            page_size: 25,
        };
        client.get_all(Some(&query)).await.unwrap();

        let calls = client.transport.calls.lock().unwrap();
        assert_eq!(
            calls[0].1,
            pairs(&[
                ("contestIdSearch", "42"),
                ("idSearch", "7"),
                ("pageNumber", "3"),
                ("pageSize", "25"),
            ])
        );
    }

    #[tokio::test]
    async fn reject_zero_page_size() {
        let client = CertificateClient::new(RecordingTransport::default());
        let query = CertificateQuery {
            page_size: 0,
            ..Default::default()
        };

        match client.get_all(Some(&query)).await {
            Err(ClientError::InvalidQueryError(errors)) => {
                assert_eq!(errors.get("page_size"), Some("Page size must be at least 1"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(client.transport.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn propagate_transport_error() {
        let client = CertificateClient::new(FailingTransport);
        let result = client.get_all(None).await;

        assert!(matches!(
            result,
            Err(ClientError::UnexpectedStatusError { status: 503, .. })
        ));
    }

    #[test]
    fn deserialize_partial_query() {
        let query: CertificateQuery = serde_json::from_str(r#"{"contestIdSearch":"5"}"#).unwrap();

        let expected = CertificateQuery {
            contest_id_search: Some(String::from("5")),
            ..Default::default()
        };
        assert_eq!(query, expected);
    }

    #[test]
    fn serialize_skips_missing_filters() {
        let query = CertificateQuery::default();
        assert_eq!(
            serde_json::to_string(&query).unwrap(),
            r#"{"pageNumber":1,"pageSize":10}"#
        );
    }
}
