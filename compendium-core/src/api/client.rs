//! HTTP record source for the catalog REST API.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use compendium_model::{
    Character, CharactersResponse, ClassesResponse, Item, ItemsResponse,
    Monster, MonstersResponse, RacesResponse, Record, RecordPage,
};
use reqwest::{Client, RequestBuilder, header};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

use crate::api::source::{MetadataSource, RecordSource};
use crate::error::{CompendiumError, Result};
use crate::query::types::PageQuery;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const API_VERSION: &str = "v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A record kind served under `/api/v1/<segment>`.
pub trait ApiRecord: Record + DeserializeOwned {
    type ListResponse: DeserializeOwned + Into<RecordPage<Self>> + Send;

    /// API parameters for one URL filter value.
    fn filter_params(param: &str, value: &str) -> Vec<(String, String)> {
        vec![(param.to_string(), value.to_string())]
    }
}

impl ApiRecord for Character {
    type ListResponse = CharactersResponse;
}

impl ApiRecord for Item {
    type ListResponse = ItemsResponse;
}

impl ApiRecord for Monster {
    type ListResponse = MonstersResponse;

    /// A selected challenge rating is an exact range on the server.
    fn filter_params(param: &str, value: &str) -> Vec<(String, String)> {
        match param {
            "cr" => vec![
                ("min_cr".to_string(), value.to_string()),
                ("max_cr".to_string(), value.to_string()),
            ],
            other => vec![(other.to_string(), value.to_string())],
        }
    }
}

/// Query parameters for a list request of kind `R`.
pub fn list_params<R: ApiRecord>(query: &PageQuery) -> Vec<(String, String)> {
    let mut params = vec![
        ("skip".to_string(), query.skip.to_string()),
        ("limit".to_string(), query.limit.to_string()),
    ];
    if let Some(text) = &query.text {
        params.push(("name".to_string(), text.clone()));
    }
    for (param, value) in &query.exact {
        params.extend(R::filter_params(param, value));
    }
    params
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    token_store: Arc<RwLock<Option<String>>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field(
                "has_token",
                &self
                    .token_store
                    .try_read()
                    .map(|t| t.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CompendiumError::Internal(err.to_string()))?;

        info!(base_url = %base_url, ?timeout, "creating API client");

        Ok(Self {
            client,
            base_url,
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token_store.write().await = token;
    }

    /// Resolve `path` against the base URL and append the non-empty query
    /// values. Paths without an `api/` prefix are placed under `/api/v1/`.
    pub fn build_url(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Url> {
        let path = path.trim_start_matches('/');
        let mut url = if path.starts_with("api/") {
            self.base_url.join(path)?
        } else {
            self.base_url.join(&format!("api/{API_VERSION}/{path}"))?
        };

        let mut present = query.iter().filter(|(_, value)| !value.is_empty()).peekable();
        if present.peek().is_some() {
            url.query_pairs_mut().extend_pairs(present);
        }
        Ok(url)
    }

    async fn build_request(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(header::ACCEPT, "application/json");
        match self.token_store.read().await.as_ref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        let url = self.build_url(path, query)?;
        debug!(%url, "GET");

        let request = self.build_request(self.client.get(url.clone())).await;
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_owned));

        warn!(%url, status = status.as_u16(), "request failed");
        Err(CompendiumError::api(status.as_u16(), detail))
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    if with_scheme != raw {
        debug!(from = raw, to = %with_scheme, "normalized base URL");
    }
    // Trailing slash so `join` appends instead of replacing the last segment.
    Ok(Url::parse(&format!("{with_scheme}/"))?)
}

#[async_trait]
impl<R: ApiRecord> RecordSource<R> for ApiClient {
    async fn fetch_page(&self, query: &PageQuery) -> Result<RecordPage<R>> {
        let params = list_params::<R>(query);
        let response: R::ListResponse =
            self.get_json(R::KIND.segment(), &params).await?;
        Ok(response.into())
    }

    async fn fetch_one(&self, id: u32) -> Result<R> {
        self.get_json(&format!("{}/{id}", R::KIND.segment()), &[]).await
    }
}

#[async_trait]
impl MetadataSource for ApiClient {
    async fn classes(&self) -> Result<Vec<String>> {
        let response: ClassesResponse = self.get_json("classes", &[]).await?;
        Ok(response.classes)
    }

    async fn races(&self) -> Result<Vec<String>> {
        let response: RacesResponse = self.get_json("races", &[]).await?;
        Ok(response.races)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base).expect("client")
    }

    #[test]
    fn base_url_gains_scheme_and_versioned_paths() {
        let api = client("localhost:8000/");
        let url = api.build_url("/monsters", &[]).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/api/v1/monsters");

        let explicit = api.build_url("api/v1/classes", &[]).expect("url");
        assert_eq!(explicit.as_str(), "http://localhost:8000/api/v1/classes");
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let api = client("https://example.test/compendium");
        let url = api.build_url("items/3", &[]).expect("url");
        assert_eq!(url.as_str(), "https://example.test/compendium/api/v1/items/3");
    }

    #[test]
    fn empty_query_values_are_omitted() {
        let api = client(DEFAULT_API_BASE_URL);
        let query = vec![
            ("skip".to_string(), "0".to_string()),
            ("class".to_string(), String::new()),
            ("race".to_string(), "Half Elf".to_string()),
        ];
        let url = api.build_url("characters", &query).expect("url");
        assert_eq!(url.query(), Some("skip=0&race=Half+Elf"));

        let bare = api
            .build_url("characters", &[("name".to_string(), String::new())])
            .expect("url");
        assert_eq!(bare.query(), None);
    }

    #[test]
    fn search_maps_to_name_and_cr_to_a_range() {
        let query = PageQuery {
            skip: 0,
            limit: 50,
            text: Some("dragon".into()),
            exact: BTreeMap::from([
                ("cr".to_string(), "8".to_string()),
                ("type".to_string(), "Dragon".to_string()),
            ]),
        };
        let params = list_params::<Monster>(&query);
        let pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("skip", "0"),
                ("limit", "50"),
                ("name", "dragon"),
                ("min_cr", "8"),
                ("max_cr", "8"),
                ("type", "Dragon"),
            ]
        );
    }
}
