// src/query/mod.rs - Cached resource queries

//! The generic list/detail interaction pattern shared by every screen:
//! paginated fetches keyed by `(resource, page, filter signature)`, cached
//! with a staleness window, kept visible (flagged stale) while a newer key
//! loads, and invalidated wholesale by resource after a mutation succeeds.
//!
//! The cache bookkeeping (`CacheState`) is plain data so it can be tested
//! without a UI runtime; the hooks below wrap it in signals.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ApiClient, Paginated};
use crate::error::Error;

pub mod debounce;
pub mod mutation;

pub use debounce::{use_debounced, Debounced};
pub use mutation::{use_mutation, Mutation};

/// Server resources the cache can be invalidated by. One mutation names the
/// resources it touches; every cached page and detail entry for those
/// resources is dropped on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Products,
    Orders,
    OrderKpi,
    Inventory,
    Customers,
    Promotions,
    Coupons,
    TeamMembers,
    Roles,
    Profile,
    /// Lookup data; cached for the whole session.
    Reference,
}

/// Cache key: the resource plus the full request path (which already
/// encodes page and settled filters).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: ResourceKind,
    pub path: String,
}

impl QueryKey {
    pub fn new(resource: ResourceKind, path: impl Into<String>) -> Self {
        Self {
            resource,
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: serde_json::Value,
    pub fetched_at: DateTime<Utc>,
}

/// Pure cache bookkeeping. `stale_secs == None` means entries never go
/// stale (reference data).
#[derive(Debug, Default)]
pub struct CacheState {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl CacheState {
    pub fn get_fresh(
        &self,
        key: &QueryKey,
        now: DateTime<Utc>,
        stale_secs: Option<i64>,
    ) -> Option<&serde_json::Value> {
        let entry = self.entries.get(key)?;
        match stale_secs {
            Some(secs) if now - entry.fetched_at > Duration::seconds(secs) => None,
            _ => Some(&entry.value),
        }
    }

    pub fn insert(&mut self, key: QueryKey, value: serde_json::Value, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Drops every entry for the resource (list pages and detail keys
    /// alike). Returns how many were removed.
    pub fn invalidate(&mut self, resource: ResourceKind) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.resource != resource);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shared cache handle provided once at the app root.
#[derive(Clone, Copy)]
pub struct QueryCache {
    state: Signal<CacheState>,
    /// Per-resource invalidation counters; hooks subscribe to these so a
    /// mutation's invalidation re-runs every mounted query for the resource.
    epochs: Signal<HashMap<ResourceKind, u64>>,
}

impl QueryCache {
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            state: Signal::new(CacheState::default()),
            epochs: Signal::new(HashMap::new()),
        })
    }

    /// Current epoch for a resource; reading this inside an effect
    /// subscribes the effect to invalidations.
    pub fn epoch(&self, resource: ResourceKind) -> u64 {
        self.epochs
            .read()
            .get(&resource)
            .copied()
            .unwrap_or_default()
    }

    pub fn get_fresh(&self, key: &QueryKey, stale_secs: Option<i64>) -> Option<serde_json::Value> {
        self.state
            .peek()
            .get_fresh(key, Utc::now(), stale_secs)
            .cloned()
    }

    pub fn insert(&self, key: QueryKey, value: serde_json::Value) {
        let mut state = self.state;
        state.write().insert(key, value, Utc::now());
    }

    /// Invalidation is issued only after a mutation's success response,
    /// never optimistically.
    pub fn invalidate(&self, resource: ResourceKind) {
        let mut state = self.state;
        let removed = state.write().invalidate(resource);
        let mut epochs = self.epochs;
        *epochs.write().entry(resource).or_default() += 1;
        debug!(?resource, removed, "invalidated cached queries");
    }
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>()
}

/// Write token for one mounted query hook. Every effect run that settles a
/// key takes a fresh token, including runs answered entirely from cache, so
/// a response still in flight for the previous key can never apply over
/// newer data.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct FetchGeneration(u64);

impl FetchGeneration {
    fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Page to request once the settled filters are observed: any change in the
/// filter signature lands back on page 1; paging within an unchanged
/// signature keeps the requested page.
fn page_after_filter_change(requested: u32, previous: &str, settled: &str) -> u32 {
    if previous == settled {
        requested
    } else {
        1
    }
}

/// Resets a list page to 1 whenever the settled filter signature changes.
/// Build `signature` from `ListQuery::filter_signature` so it covers the
/// search text and every extra filter, but never the page number.
pub fn use_filter_reset(mut page: Signal<u32>, signature: impl Fn() -> String + 'static) {
    let mut previous = use_signal(String::new);
    use_effect(move || {
        let settled = signature();
        let before = previous.peek().clone();
        let next = page_after_filter_change(*page.peek(), &before, &settled);
        if before != settled {
            previous.set(settled);
        }
        if *page.peek() != next {
            page.set(next);
        }
    });
}

/// Result handle of a paginated query.
pub struct PageQuery<T: 'static> {
    /// The current (or previous, while refetching) page.
    pub data: Signal<Option<Paginated<T>>>,
    /// True only while nothing has ever been shown for this hook.
    pub is_loading: Signal<bool>,
    /// True while any fetch is in flight; callers dim rather than unmount.
    pub is_fetching: Signal<bool>,
    pub error: Signal<Option<Error>>,
}

impl<T: 'static> Clone for PageQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: 'static> Copy for PageQuery<T> {}

/// Fetches one page of a resource. `path` is re-evaluated reactively, so it
/// should read the page signal and the settled filter signals. A later
/// request for a new key supersedes an earlier in-flight one; late
/// responses for superseded keys are discarded.
pub fn use_page_query<T>(
    resource: ResourceKind,
    path: impl Fn() -> String + 'static,
) -> PageQuery<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let api = use_context::<ApiClient>();
    let cache = use_query_cache();
    let data = use_signal(|| None::<Paginated<T>>);
    let is_loading = use_signal(|| false);
    let is_fetching = use_signal(|| false);
    let error = use_signal(|| None::<Error>);
    let generation = use_signal(FetchGeneration::default);

    let stale_secs = Some(api.config().list_stale_secs);
    let retry_limit = api.config().retry_limit;

    use_effect(move || {
        // Subscriptions: the path closure (page + settled filters) and the
        // resource epoch. Everything else is peeked.
        let key = QueryKey::new(resource, path());
        let _epoch = cache.epoch(resource);

        let mut data = data;
        let mut is_loading = is_loading;
        let mut is_fetching = is_fetching;
        let mut error = error;
        let mut generation = generation;

        if let Some(hit) = cache.get_fresh(&key, stale_secs) {
            if let Ok(page) = serde_json::from_value::<Paginated<T>>(hit) {
                // The hit settles this key; a fetch still in flight for the
                // previous key must not apply over it.
                generation.write().advance();
                data.set(Some(page));
                error.set(None);
                is_loading.set(false);
                is_fetching.set(false);
                return;
            }
        }

        let token = generation.write().advance();
        is_fetching.set(true);
        if data.peek().is_none() {
            is_loading.set(true);
        }
        error.set(None);

        let api = api.clone();
        spawn(async move {
            let result = fetch_with_retry(&api, &key.path, retry_limit).await;

            // A newer key superseded this request while it was in flight.
            if !generation.peek().is_current(token) {
                return;
            }

            match result {
                Ok(value) => match serde_json::from_value::<Paginated<T>>(value.clone()) {
                    Ok(page) => {
                        cache.insert(key, value);
                        data.set(Some(page));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(Error::from(e))),
                },
                Err(e) => error.set(Some(e)),
            }
            is_loading.set(false);
            is_fetching.set(false);
        });
    });

    PageQuery {
        data,
        is_loading,
        is_fetching,
        error,
    }
}

async fn fetch_with_retry(
    api: &ApiClient,
    path: &str,
    retry_limit: u32,
) -> Result<serde_json::Value, Error> {
    let mut attempt = 0;
    loop {
        match api.get_list::<serde_json::Value>(path).await {
            Ok(page) => return Ok(serde_json::to_value(page)?),
            Err(e) if e.is_retryable() && attempt < retry_limit => {
                attempt += 1;
                debug!(%path, attempt, "retrying list fetch");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Result handle of a single-entity query.
pub struct DetailQuery<T: 'static> {
    pub data: Signal<Option<T>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<Error>>,
}

impl<T: 'static> Clone for DetailQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: 'static> Copy for DetailQuery<T> {}

/// Fetches one entity through an item envelope. `stale_secs == None` caches
/// for the whole session (reference data).
pub fn use_detail_query<T>(
    resource: ResourceKind,
    stale_secs: Option<i64>,
    path: impl Fn() -> String + 'static,
) -> DetailQuery<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let api = use_context::<ApiClient>();
    let cache = use_query_cache();
    let data = use_signal(|| None::<T>);
    let is_loading = use_signal(|| false);
    let error = use_signal(|| None::<Error>);
    let generation = use_signal(FetchGeneration::default);

    let retry_limit = api.config().retry_limit;

    use_effect(move || {
        let key = QueryKey::new(resource, path());
        let _epoch = cache.epoch(resource);

        let mut data = data;
        let mut is_loading = is_loading;
        let mut error = error;
        let mut generation = generation;

        if let Some(hit) = cache.get_fresh(&key, stale_secs) {
            if let Ok(item) = serde_json::from_value::<T>(hit) {
                generation.write().advance();
                data.set(Some(item));
                error.set(None);
                is_loading.set(false);
                return;
            }
        }

        let token = generation.write().advance();
        is_loading.set(true);
        error.set(None);

        let api = api.clone();
        spawn(async move {
            let mut attempt = 0;
            let result = loop {
                match api.get_item::<serde_json::Value>(&key.path).await {
                    Ok(value) => break Ok(value),
                    Err(e) if e.is_retryable() && attempt < retry_limit => attempt += 1,
                    Err(e) => break Err(e),
                }
            };

            if !generation.peek().is_current(token) {
                return;
            }

            match result {
                Ok(value) => match serde_json::from_value::<T>(value.clone()) {
                    Ok(item) => {
                        cache.insert(key, value);
                        data.set(Some(item));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(Error::from(e))),
                },
                Err(e) => error.set(Some(e)),
            }
            is_loading.set(false);
        });
    });

    DetailQuery {
        data,
        is_loading,
        error,
    }
}

/// Reference data: fetched once, fresh for the whole session.
pub fn use_reference_query<T>(path: &'static str) -> DetailQuery<Vec<T>>
where
    T: DeserializeOwned + Clone + 'static,
{
    use_detail_query(ResourceKind::Reference, None, move || path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(resource: ResourceKind, path: &str) -> QueryKey {
        QueryKey::new(resource, path)
    }

    #[test]
    fn test_fresh_hit_within_window() {
        let mut state = CacheState::default();
        let now = Utc::now();
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=1"),
            serde_json::json!({"items": []}),
            now,
        );

        let hit = state.get_fresh(
            &key(ResourceKind::Products, "/seller/products?page=1"),
            now + Duration::seconds(10),
            Some(30),
        );
        assert!(hit.is_some());
    }

    #[test]
    fn test_stale_entry_misses() {
        let mut state = CacheState::default();
        let now = Utc::now();
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=1"),
            serde_json::json!({}),
            now,
        );

        let hit = state.get_fresh(
            &key(ResourceKind::Products, "/seller/products?page=1"),
            now + Duration::seconds(31),
            Some(30),
        );
        assert!(hit.is_none());
    }

    #[test]
    fn test_infinite_staleness_for_reference_data() {
        let mut state = CacheState::default();
        let now = Utc::now();
        state.insert(
            key(ResourceKind::Reference, "/public/colors"),
            serde_json::json!([]),
            now,
        );

        let hit = state.get_fresh(
            &key(ResourceKind::Reference, "/public/colors"),
            now + Duration::days(7),
            None,
        );
        assert!(hit.is_some());
    }

    #[test]
    fn test_different_keys_do_not_collide() {
        let mut state = CacheState::default();
        let now = Utc::now();
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=1"),
            serde_json::json!(1),
            now,
        );
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=2"),
            serde_json::json!(2),
            now,
        );
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=1&search=tea"),
            serde_json::json!(3),
            now,
        );

        assert_eq!(state.len(), 3);
        let hit = state
            .get_fresh(
                &key(ResourceKind::Products, "/seller/products?page=2"),
                now,
                Some(30),
            )
            .unwrap();
        assert_eq!(hit, &serde_json::json!(2));
    }

    #[test]
    fn test_late_response_for_superseded_key_is_discarded() {
        let mut generation = FetchGeneration::default();
        let first = generation.advance();
        let second = generation.advance();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_cache_hit_supersedes_in_flight_fetch() {
        // A fetch for the first key is in flight when the user moves to a
        // key answered from cache; the cache hit takes a token too, so the
        // late response may not apply.
        let mut generation = FetchGeneration::default();
        let in_flight = generation.advance();
        generation.advance();

        assert!(!generation.is_current(in_flight));
    }

    #[test]
    fn test_filter_change_resets_to_first_page() {
        assert_eq!(page_after_filter_change(4, "search=tea", "search=teapot"), 1);
        assert_eq!(page_after_filter_change(4, "search=tea", "search=tea"), 4);
        // Mount with no filters applied keeps the initial page.
        assert_eq!(page_after_filter_change(1, "", ""), 1);
    }

    #[test]
    fn test_invalidate_drops_only_that_resource() {
        let mut state = CacheState::default();
        let now = Utc::now();
        state.insert(
            key(ResourceKind::Products, "/seller/products?page=1"),
            serde_json::json!(1),
            now,
        );
        state.insert(
            key(ResourceKind::Products, "/seller/products/7"),
            serde_json::json!(2),
            now,
        );
        state.insert(
            key(ResourceKind::Orders, "/seller/orders?page=1"),
            serde_json::json!(3),
            now,
        );

        let removed = state.invalidate(ResourceKind::Products);
        assert_eq!(removed, 2);
        assert_eq!(state.len(), 1);
        assert!(state
            .get_fresh(
                &key(ResourceKind::Orders, "/seller/orders?page=1"),
                now,
                Some(30)
            )
            .is_some());
    }
}
