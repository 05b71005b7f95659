//! Shared client state and the hooks that read it.

use api::{ApiClient, ApiConfig, ApiError, AuthApi, User};
use cache::{QueryCache, QueryKey};
use dioxus::prelude::*;

use crate::toast::{ToastContainer, Toasts};

/// The query cache plus a revision counter components subscribe to.
///
/// Invalidating bumps the revision, so every resource that read it reruns and
/// goes back to the cache, which now refetches the stale key.
#[derive(Clone, Copy, PartialEq)]
pub struct QueryClient {
    cache: Signal<QueryCache>,
    revision: Signal<u64>,
}

impl QueryClient {
    pub fn cache(&self) -> QueryCache {
        self.cache.peek().clone()
    }

    /// Subscribes the caller to invalidations.
    pub fn revision(&self) -> u64 {
        (self.revision)()
    }

    pub fn invalidate(&self, key: &QueryKey) {
        self.cache.peek().invalidate(key);
        self.bump();
    }

    /// Drop `key` without counting it as an invalidation; readers refetch.
    pub fn remove(&self, key: &QueryKey) {
        self.cache.peek().remove(key);
        self.bump();
    }

    fn bump(&self) {
        let mut revision = self.revision;
        *revision.write() += 1;
    }
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// The signed-in user, served from the `["user"]` query.
pub fn use_current_user() -> Resource<Result<User, ApiError>> {
    let api = use_api();
    let queries = use_query_client();

    use_resource(move || {
        let api = api.clone();
        let cache = queries.cache();
        let revision = queries.revision();
        async move {
            tracing::debug!("Reading current user (revision {})", revision);
            cache.fetch(&QueryKey::user(), || api.get_user()).await
        }
    })
}

/// Provides the API client, the query cache and the toast stack to everything
/// below it. Wrap the router with this component.
#[component]
pub fn AppProvider(config: ApiConfig, children: Element) -> Element {
    use_context_provider(|| {
        tracing::info!("Using backend at {}", config.base_url);
        ApiClient::new(config.clone())
    });
    use_context_provider(|| QueryClient {
        cache: Signal::new(QueryCache::new()),
        revision: Signal::new(0),
    });
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastContainer {}
    }
}
