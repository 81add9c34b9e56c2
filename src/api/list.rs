//! Paginated list endpoints.
//!
//! [`ListQuery`] turns a [`PaginationState`] and [`TableFilters`] into a
//! request; [`PaginatedList`] owns the state for one table and feeds each
//! server total back into it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::client::ApiClient;
use crate::error::{DashError, DashResult, ErrorContext, ResultExt};
use crate::filters::TableFilters;
use crate::models::Resource;
use crate::pagination::{PaginationState, PaginationView};
use crate::request::RequestConfig;
use crate::traits::{CredentialsProvider, HttpClient};

/// Query-parameter names the backend uses for paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub page_key: String,
    pub page_size_key: String,
    /// Send `page - 1` instead of `page`.
    pub zero_based: bool,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_key: "page".to_string(),
            page_size_key: "pageSize".to_string(),
            zero_based: false,
        }
    }
}

impl PageParams {
    /// The `(page, page size)` query pairs for `state`.
    pub fn pairs(&self, state: &PaginationState) -> [(String, String); 2] {
        let page = if self.zero_based {
            state.page() - 1
        } else {
            state.page()
        };
        [
            (self.page_key.clone(), page.to_string()),
            (self.page_size_key.clone(), state.page_size().to_string()),
        ]
    }
}

/// One page of a list endpoint.
///
/// Accepts an envelope object (`items`, `data`, `results` or `content` next
/// to `total`, `totalItems`, `total_items`, `count` or `totalElements`) or a
/// bare JSON array. A missing total falls back to the number of items.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    /// Total as reported by the server, possibly negative or stale.
    pub total: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPage<T> {
    Bare(Vec<T>),
    Envelope(Envelope<T>),
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(alias = "data", alias = "results", alias = "content")]
    items: Vec<T>,
    #[serde(
        default,
        alias = "totalItems",
        alias = "total_items",
        alias = "count",
        alias = "totalElements"
    )]
    total: Option<i64>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PageResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (items, total) = match RawPage::<T>::deserialize(deserializer)? {
            RawPage::Bare(items) => (items, None),
            RawPage::Envelope(envelope) => (envelope.items, envelope.total),
        };
        let total = total.unwrap_or_else(|| i64::try_from(items.len()).unwrap_or(i64::MAX));
        Ok(Self { items, total })
    }
}

/// A list endpoint plus the filters to send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub endpoint: String,
    pub filters: TableFilters,
    pub params: PageParams,
}

impl ListQuery {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            filters: TableFilters::default(),
            params: PageParams::default(),
        }
    }

    pub fn for_resource<R: Resource>() -> Self {
        Self::new(R::ENDPOINT)
    }

    pub fn with_filters(mut self, filters: TableFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_params(mut self, params: PageParams) -> Self {
        self.params = params;
        self
    }

    /// `GET endpoint?<page>&<pageSize>&<filters>` for the current state.
    pub fn request_for(&self, state: &PaginationState) -> RequestConfig {
        RequestConfig::get(self.endpoint.as_str())
            .with_query_pairs(self.params.pairs(state))
            .with_query_pairs(self.filters.to_query())
    }

    pub async fn fetch<T, C, P>(
        &self,
        client: &ApiClient<C, P>,
        state: &PaginationState,
    ) -> DashResult<PageResponse<T>>
    where
        T: DeserializeOwned,
        C: HttpClient,
        P: CredentialsProvider,
    {
        client
            .execute(self.request_for(state))
            .await
            .with_context(|| {
                ErrorContext::new("fetch_page").with_resource(self.endpoint.as_str())
            })
    }
}

/// One table's worth of list state: pagination, filters, the current page
/// of items and the outcome of the last fetch.
///
/// Navigation methods only touch local state and return `true` when the
/// visible page changed and [`refresh`](Self::refresh) should be called.
#[derive(Debug, Clone)]
pub struct PaginatedList<T> {
    state: PaginationState,
    query: ListQuery,
    items: Vec<T>,
    loading: bool,
    last_error: Option<DashError>,
}

impl<T: Resource> PaginatedList<T> {
    /// A list over `T`'s endpoint starting at page 1.
    pub fn for_resource(page_size: i64) -> Self {
        Self::new(ListQuery::for_resource::<T>(), PaginationState::new(1, page_size))
    }
}

impl<T: DeserializeOwned> PaginatedList<T> {
    pub fn new(query: ListQuery, state: PaginationState) -> Self {
        Self {
            state,
            query,
            items: Vec::new(),
            loading: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn view(&self) -> PaginationView {
        self.state.view()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn filters(&self) -> &TableFilters {
        &self.query.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&DashError> {
        self.last_error.as_ref()
    }

    /// Fetch the current page and record the server's total.
    ///
    /// When the new total no longer reaches the requested page, the state is
    /// clamped and the clamped page is fetched once more. On failure the
    /// previous items are kept and the error is stored in
    /// [`last_error`](Self::last_error).
    pub async fn refresh<C, P>(&mut self, client: &ApiClient<C, P>) -> DashResult<PaginationView>
    where
        C: HttpClient,
        P: CredentialsProvider,
    {
        self.loading = true;
        let result = self.load(client).await;
        self.loading = false;

        match result {
            Ok(view) => {
                self.last_error = None;
                Ok(view)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    async fn load<C, P>(&mut self, client: &ApiClient<C, P>) -> DashResult<PaginationView>
    where
        C: HttpClient,
        P: CredentialsProvider,
    {
        // Work on a copy so a failed refetch leaves the shown page untouched.
        let mut state = self.state.clone();
        let requested = state.page();
        let mut page: PageResponse<T> = self.query.fetch(client, &state).await?;
        state.set_total_items(page.total);

        if state.page() != requested {
            debug!(
                endpoint = %self.query.endpoint,
                requested,
                clamped = state.page(),
                "Requested page is past the end, refetching"
            );
            page = self.query.fetch(client, &state).await?;
            state.set_total_items(page.total);
        }

        self.state = state;
        self.items = page.items;
        Ok(self.state.view())
    }

    pub fn next_page(&mut self) -> bool {
        self.state.next_page().is_some()
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page().is_some()
    }

    pub fn first_page(&mut self) -> bool {
        self.state.first_page().is_some()
    }

    pub fn last_page(&mut self) -> bool {
        self.state.last_page().is_some()
    }

    pub fn set_page(&mut self, page: i64) -> bool {
        self.state.set_page(page).is_some()
    }

    pub fn set_page_size(&mut self, page_size: i64) -> bool {
        self.state.set_page_size(page_size).is_some()
    }

    /// Replace the filters and return to page 1.
    pub fn set_filters(&mut self, filters: TableFilters) -> bool {
        let filters_changed = self.query.filters != filters;
        self.query.filters = filters;
        let page_changed = self.state.set_page(1).is_some();
        filters_changed || page_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCredentials, MockHttpClient, MockResponse};
    use crate::error::NetworkError;
    use crate::filters::SortOrder;
    use crate::models::Project;
    use serde_json::json;

    const BASE: &str = "http://campus.test/api";

    fn api(http: &MockHttpClient) -> ApiClient<MockHttpClient, InMemoryCredentials> {
        ApiClient::new(http.clone(), InMemoryCredentials::new(), BASE)
    }

    fn projects(ids: std::ops::RangeInclusive<u32>) -> serde_json::Value {
        serde_json::Value::Array(
            ids.map(|id| json!({"id": id, "title": format!("Project {}", id)}))
                .collect(),
        )
    }

    #[test]
    fn test_page_params_one_based() {
        let state = PaginationState::new(3, 10);
        let pairs = PageParams::default().pairs(&state);
        assert_eq!(pairs[0], ("page".to_string(), "3".to_string()));
        assert_eq!(pairs[1], ("pageSize".to_string(), "10".to_string()));
    }

    #[test]
    fn test_page_params_zero_based() {
        let params = PageParams {
            page_key: "p".to_string(),
            page_size_key: "size".to_string(),
            zero_based: true,
        };
        let pairs = params.pairs(&PaginationState::new(1, 20));
        assert_eq!(pairs[0], ("p".to_string(), "0".to_string()));
        assert_eq!(pairs[1], ("size".to_string(), "20".to_string()));
    }

    #[test]
    fn test_request_for_includes_filters() {
        let query = ListQuery::for_resource::<Project>().with_filters(
            TableFilters::new()
                .with_search("soil")
                .with_sort("title", SortOrder::Asc),
        );
        let config = query.request_for(&PaginationState::new(2, 5));
        assert_eq!(
            config.resolve_url(BASE),
            "http://campus.test/api/projects?page=2&pageSize=5&search=soil&sortBy=title&sortOrder=asc"
        );
    }

    #[test]
    fn test_page_response_envelope_aliases() {
        for body in [
            r#"{"items": [1, 2], "total": 9}"#,
            r#"{"data": [1, 2], "totalItems": 9}"#,
            r#"{"results": [1, 2], "count": 9}"#,
            r#"{"content": [1, 2], "totalElements": 9}"#,
            r#"{"items": [1, 2], "total_items": 9, "page": 1}"#,
        ] {
            let page: PageResponse<u32> = serde_json::from_str(body).unwrap();
            assert_eq!(page.items, vec![1, 2], "{}", body);
            assert_eq!(page.total, 9, "{}", body);
        }
    }

    #[test]
    fn test_page_response_bare_array_and_missing_total() {
        let page: PageResponse<u32> = serde_json::from_str("[4, 5, 6]").unwrap();
        assert_eq!(page.total, 3);

        let page: PageResponse<u32> = serde_json::from_str(r#"{"items": [4]}"#).unwrap();
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_page_response_rejects_unknown_shape() {
        assert!(serde_json::from_str::<PageResponse<u32>>(r#"{"rows": []}"#).is_err());
    }

    #[tokio::test]
    async fn test_refresh_feeds_total_into_state() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(
            200,
            json!({"items": projects(1..=5), "total": 12}),
        ));

        let mut list = PaginatedList::<Project>::for_resource(5);
        let view = list.refresh(&api(&http)).await.unwrap();

        assert_eq!(view.total_items, 12);
        assert_eq!(view.total_pages, 3);
        assert_eq!(list.items().len(), 5);
        assert!(!list.is_loading());
        assert!(list.last_error().is_none());
        assert_eq!(
            http.last_request().unwrap().url,
            "http://campus.test/api/projects?page=1&pageSize=5"
        );
    }

    #[tokio::test]
    async fn test_refresh_refetches_when_total_shrinks() {
        let http = MockHttpClient::new();
        http.push_response(MockResponse::json(200, json!({"items": [], "total": 7})));
        http.push_response(MockResponse::json(
            200,
            json!({"items": projects(6..=7), "total": 7}),
        ));

        let mut list = PaginatedList::<Project>::for_resource(5);
        assert!(list.set_page(4));
        let view = list.refresh(&api(&http)).await.unwrap();

        assert_eq!(view.page, 2);
        assert_eq!(list.items().len(), 2);

        let urls: Vec<_> = http.get_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "http://campus.test/api/projects?page=4&pageSize=5",
                "http://campus.test/api/projects?page=2&pageSize=5",
            ]
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_items_and_records_error() {
        let http = MockHttpClient::new();
        http.push_response(MockResponse::json(
            200,
            json!({"items": projects(1..=2), "total": 2}),
        ));
        http.push_response(MockResponse::json(500, json!({"message": "boom"})));

        let client = api(&http);
        let mut list = PaginatedList::<Project>::for_resource(5);
        list.refresh(&client).await.unwrap();

        let err = list.refresh(&client).await.unwrap_err();
        assert!(matches!(
            err.inner(),
            DashError::Network(NetworkError::HttpStatus { status: 500, .. })
        ));
        assert_eq!(
            err.context().and_then(|c| c.resource.as_deref()),
            Some("/projects")
        );
        assert_eq!(list.items().len(), 2);
        assert!(list.last_error().is_some());
        assert_eq!(list.view().total_items, 2);
    }

    #[tokio::test]
    async fn test_failed_clamp_refetch_leaves_page_untouched() {
        let http = MockHttpClient::new();
        http.push_response(MockResponse::json(
            200,
            json!({"items": projects(1..=5), "total": 30}),
        ));
        http.push_response(MockResponse::json(200, json!({"items": [], "total": 7})));
        http.push_response(MockResponse::json(500, json!({"message": "boom"})));

        let client = api(&http);
        let mut list = PaginatedList::<Project>::for_resource(5);
        list.refresh(&client).await.unwrap();
        assert!(list.set_page(6));
        let before = list.view();

        let err = list.refresh(&client).await.unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(http.get_requests().len(), 3);
        assert_eq!(list.view(), before);
        assert_eq!(list.state().page(), 6);
        assert_eq!(list.state().total_items(), 30);
        assert_eq!(list.items().len(), 5);
        assert!(list.last_error().is_some());
    }

    #[test]
    fn test_navigation_reports_refetch() {
        let mut list = PaginatedList::<Project>::for_resource(5);
        list.state.set_total_items(12);

        assert!(!list.previous_page());
        assert!(list.next_page());
        assert!(list.last_page());
        assert!(!list.next_page());
        assert!(list.first_page());
        assert!(!list.set_page_size(5));
        assert!(list.set_page_size(10));
    }

    #[test]
    fn test_set_filters_returns_to_first_page() {
        let mut list = PaginatedList::<Project>::for_resource(5);
        list.state.set_total_items(30);
        list.set_page(4);

        assert!(list.set_filters(TableFilters::new().with_search("nlp")));
        assert_eq!(list.state().page(), 1);
        assert_eq!(list.filters().search.as_deref(), Some("nlp"));

        assert!(!list.set_filters(TableFilters::new().with_search("nlp")));
    }
}
