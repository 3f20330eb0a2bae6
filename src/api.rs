//! Shared API client plumbing: URL building, bearer auth, query
//! conventions and the typed fetch helpers the per-game clients sit on.

use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::response::{materialize, Decoded, Entity, Page, PAGE_SHAPE};

/// Ordered query parameters for one request.
///
/// Optional parameters that are `None` are omitted entirely, never sent
/// as empty values.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one parameter.
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Append a parameter when a value is present; drop it otherwise.
    pub fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// True when no parameters were set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The accumulated pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Pagination parameters shared by every list endpoint: a page size limit
/// and the opaque `after`/`before` cursors lifted from a previous
/// [`Page`](crate::response::Page).
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    limit: Option<u32>,
    after: Option<String>,
    before: Option<String>,
}

impl PageRequest {
    /// Create an empty page request (vendor defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of items to fetch.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume after this cursor.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Resume before this cursor.
    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    pub(crate) fn apply(&self, query: &mut Query) {
        query.push_opt("limit", self.limit);
        query.push_opt("after", self.after.as_deref());
        query.push_opt("before", self.before.as_deref());
    }
}

/// Authenticated client for one vendor API: a validated base URL plus the
/// retrying HTTP transport. The per-game clients wrap this with one
/// method per endpoint.
#[derive(Debug)]
pub struct ApiClient {
    http: HttpClient,
    base: Url,
}

impl ApiClient {
    /// Build a client for `base_url` at `version`, authenticating every
    /// request with `Bearer <token>`.
    pub fn new(base_url: &str, version: &str, token: &str) -> Result<Self> {
        Self::with_config(base_url, version, token, HttpClientConfig::default())
    }

    /// Build a client with custom transport configuration.
    pub fn with_config(
        base_url: &str,
        version: &str,
        token: &str,
        mut config: HttpClientConfig,
    ) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::config("API token must not be empty"));
        }
        let mut base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL cannot carry path segments: {base_url}"
            )));
        }
        base.path_segments_mut()
            .expect("base URL validated above")
            .pop_if_empty()
            .push(version);
        config
            .default_headers
            .insert("authorization".to_string(), format!("Bearer {token}"));
        Ok(Self {
            http: HttpClient::with_config(config),
            base,
        })
    }

    /// Build the full URL for a request. Each path segment is
    /// percent-encoded on its own, so tags like `#ABC123` become
    /// `%23ABC123` in the path.
    pub fn url_for(&self, segments: &[&str], query: &Query) -> Url {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("base URL validated at construction")
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs());
        }
        url
    }

    /// Raw GET: the status and optional JSON body, untouched.
    pub async fn get(&self, segments: &[&str], query: &Query) -> Result<(u16, Option<Value>)> {
        self.http.get(&self.url_for(segments, query)).await
    }

    /// Raw POST with a JSON body.
    pub async fn post(&self, segments: &[&str], body: Value) -> Result<(u16, Option<Value>)> {
        self.http
            .post(&self.url_for(segments, &Query::new()), body)
            .await
    }

    /// GET one entity.
    pub(crate) async fn fetch_object<T: Entity>(&self, segments: &[&str]) -> Result<T> {
        let (status, body) = self.get(segments, &Query::new()).await?;
        Self::into_entity(status, body, "object")
    }

    /// GET a top-level JSON array of entities.
    pub(crate) async fn fetch_list<T: Entity>(
        &self,
        segments: &[&str],
        query: &Query,
    ) -> Result<Vec<T>> {
        let (status, body) = self.get(segments, query).await?;
        match materialize(status, body, Some(T::SHAPE), None)? {
            Decoded::Objects(objects) => Ok(objects.into_iter().map(T::from_object).collect()),
            other => Err(unexpected_body("array", &other)),
        }
    }

    /// GET one page of entities.
    pub(crate) async fn fetch_page<T: Entity>(
        &self,
        segments: &[&str],
        query: &Query,
    ) -> Result<Page<T>> {
        let (status, body) = self.get(segments, query).await?;
        match materialize(status, body, Some(&PAGE_SHAPE), Some(T::SHAPE))? {
            Decoded::Object(object) => Page::from_object(object),
            other => Err(unexpected_body("page object", &other)),
        }
    }

    /// POST a JSON body and decode the response as one entity.
    pub(crate) async fn post_object<T: Entity>(
        &self,
        segments: &[&str],
        body: Value,
    ) -> Result<T> {
        let (status, body) = self
            .http
            .request(Method::POST, &self.url_for(segments, &Query::new()), Some(body))
            .await?;
        Self::into_entity(status, body, "object")
    }

    fn into_entity<T: Entity>(status: u16, body: Option<Value>, expected: &str) -> Result<T> {
        match materialize(status, body, Some(T::SHAPE), None)? {
            Decoded::Object(object) => Ok(T::from_object(object)),
            other => Err(unexpected_body(expected, &other)),
        }
    }
}

fn unexpected_body(expected: &str, got: &Decoded) -> Error {
    Error::decode(format!(
        "expected {expected} body, got {}",
        match got {
            Decoded::Object(_) => "object",
            Decoded::Objects(_) => "array",
            Decoded::Raw(_) => "scalar",
        }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client() -> ApiClient {
        ApiClient::new("https://api.clashofclans.com", "v1", "token").unwrap()
    }

    #[test]
    fn base_url_gains_the_version_segment() {
        let client = client();
        let url = client.url_for(&["clans"], &Query::new());
        assert_eq!(url.as_str(), "https://api.clashofclans.com/v1/clans");
    }

    #[test]
    fn tag_segments_are_percent_encoded() {
        let client = client();
        let url = client.url_for(&["clans", "#2PP0VVLL"], &Query::new());
        assert_eq!(
            url.as_str(),
            "https://api.clashofclans.com/v1/clans/%232PP0VVLL"
        );
    }

    #[test]
    fn query_pairs_keep_insertion_order() {
        let client = client();
        let mut query = Query::new();
        query.push("name", "the order");
        query.push("limit", 10);
        let url = client.url_for(&["clans"], &query);
        assert_eq!(
            url.as_str(),
            "https://api.clashofclans.com/v1/clans?name=the+order&limit=10"
        );
    }

    #[test]
    fn none_parameters_are_omitted() {
        let mut query = Query::new();
        query.push_opt("minMembers", None::<u32>);
        query.push_opt("maxMembers", Some(50));
        assert_eq!(query.pairs(), &[("maxMembers".to_string(), "50".to_string())]);
    }

    #[test]
    fn page_request_applies_only_set_fields() {
        let mut query = Query::new();
        PageRequest::new().limit(25).after("CURSOR").apply(&mut query);
        assert_eq!(
            query.pairs(),
            &[
                ("limit".to_string(), "25".to_string()),
                ("after".to_string(), "CURSOR".to_string()),
            ]
        );

        let mut empty = Query::new();
        PageRequest::new().apply(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn empty_token_is_a_config_error() {
        let err = ApiClient::new("https://api.clashofclans.com", "v1", "").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url", "v1", "token").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ApiClient::new("mailto:x@y.z", "v1", "token").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
