//! A single product list load, as the products page sees it.

use std::sync::Arc;

use storefront_cart::catalog::Product;
use storefront_cart::ProductId;
use tracing::{info, warn};

use crate::error::CatalogError;
use crate::source::ProductSource;

/// Which products a listing shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    /// The whole catalog.
    All,
    /// Products with this category label.
    Category(String),
}

impl ListingQuery {
    /// Message shown to the visitor when this query cannot be loaded.
    pub fn failure_message(&self) -> String {
        match self {
            Self::All => "Failed to fetch products. Please try again later.".to_string(),
            Self::Category(category) => format!(
                "Failed to fetch products for category {}. Please try again later.",
                category
            ),
        }
    }
}

/// Where a load attempt stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// Products are available; shared with the cart by reference.
    Loaded(Vec<Arc<Product>>),
    /// The attempt failed. Stays here until the visitor retries.
    Failed {
        message: String,
        error: CatalogError,
    },
}

/// Product list for one page view.
///
/// Each load or retry re-runs the whole fetch; nothing from a failed attempt
/// is kept.
pub struct ProductListing<S> {
    source: S,
    query: ListingQuery,
    state: LoadState,
    attempts: u32,
}

impl<S: ProductSource> ProductListing<S> {
    /// Create an idle listing.
    pub fn new(source: S, query: ListingQuery) -> Self {
        Self {
            source,
            query,
            state: LoadState::Idle,
            attempts: 0,
        }
    }

    /// Fetch the products.
    pub async fn load(&mut self) -> &LoadState {
        self.attempts += 1;
        self.state = LoadState::Loading;

        let result = match &self.query {
            ListingQuery::All => self.source.list_products().await,
            ListingQuery::Category(category) => self.source.products_in_category(category).await,
        };

        self.state = match result {
            Ok(products) => {
                info!(attempt = self.attempts, count = products.len(), "product listing loaded");
                LoadState::Loaded(products.into_iter().map(Arc::new).collect())
            }
            Err(error) => {
                warn!(attempt = self.attempts, %error, "product listing failed");
                LoadState::Failed {
                    message: self.query.failure_message(),
                    error,
                }
            }
        };

        &self.state
    }

    /// Try again after a failure. A full re-fetch.
    pub async fn retry(&mut self) -> &LoadState {
        self.load().await
    }

    /// Current state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Number of load attempts so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The loaded products, if the last attempt succeeded.
    pub fn products(&self) -> Option<&[Arc<Product>]> {
        match &self.state {
            LoadState::Loaded(products) => Some(products.as_slice()),
            _ => None,
        }
    }

    /// Shared handle to a loaded product.
    pub fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products()?.iter().find(|p| p.id == id).cloned()
    }

    /// Visitor-facing failure message, if the last attempt failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::StaticCatalog;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails a fixed number of times, then serves the built-in catalog.
    struct FlakySource {
        failures_left: AtomicU32,
        catalog: StaticCatalog,
    }

    impl FlakySource {
        fn failing(times: u32) -> Self {
            Self {
                failures_left: AtomicU32::new(times),
                catalog: StaticCatalog::builtin(),
            }
        }

        fn check(&self) -> Result<(), CatalogError> {
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                return Err(CatalogError::Http {
                    status: 500,
                    url: "http://catalog.test/products".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductSource for FlakySource {
        async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
            self.check()?;
            self.catalog.list_products().await
        }

        async fn product_by_id(&self, id: ProductId) -> Result<Product, CatalogError> {
            self.check()?;
            self.catalog.product_by_id(id).await
        }

        async fn categories(&self) -> Result<Vec<String>, CatalogError> {
            self.check()?;
            self.catalog.categories().await
        }

        async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
            self.check()?;
            self.catalog.products_in_category(category).await
        }
    }

    #[tokio::test]
    async fn test_listing_starts_idle() {
        let listing = ProductListing::new(StaticCatalog::builtin(), ListingQuery::All);
        assert_eq!(listing.state(), &LoadState::Idle);
        assert!(listing.products().is_none());
        assert_eq!(listing.attempts(), 0);
    }

    #[tokio::test]
    async fn test_successful_load() {
        let mut listing = ProductListing::new(StaticCatalog::builtin(), ListingQuery::All);
        listing.load().await;

        assert_eq!(listing.products().map(|p| p.len()), Some(8));
        assert_eq!(
            listing.find(ProductId::new(7)).map(|p| p.name.clone()),
            Some("Coffee Mug".to_string())
        );
        assert!(listing.error_message().is_none());
    }

    #[tokio::test]
    async fn test_failure_then_manual_retry() {
        let mut listing = ProductListing::new(FlakySource::failing(1), ListingQuery::All);

        let state = listing.load().await;
        assert!(matches!(state, LoadState::Failed { .. }));
        assert_eq!(
            listing.error_message(),
            Some("Failed to fetch products. Please try again later.")
        );
        assert!(listing.find(ProductId::new(1)).is_none());

        listing.retry().await;
        assert_eq!(listing.attempts(), 2);
        assert_eq!(listing.products().map(|p| p.len()), Some(8));
    }

    #[tokio::test]
    async fn test_failure_is_terminal_until_retry() {
        let mut listing = ProductListing::new(FlakySource::failing(1), ListingQuery::All);
        listing.load().await;

        // The source would succeed now, but nothing re-fetches on its own.
        tokio::task::yield_now().await;
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        assert!(matches!(listing.state(), LoadState::Failed { .. }));
        assert!(listing.products().is_none());
        assert_eq!(listing.attempts(), 1);

        listing.retry().await;
        assert_eq!(listing.attempts(), 2);
        assert!(matches!(listing.state(), LoadState::Loaded(_)));
    }

    #[tokio::test]
    async fn test_category_listing() {
        let mut listing = ProductListing::new(
            FlakySource::failing(1),
            ListingQuery::Category("Sports".to_string()),
        );

        listing.load().await;
        assert_eq!(
            listing.error_message(),
            Some("Failed to fetch products for category Sports. Please try again later.")
        );

        listing.retry().await;
        let names: Vec<_> = listing
            .products()
            .unwrap_or_default()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Yoga Mat".to_string()]);
    }
}
