//! Catalog queries. Filtering happens here over a snapshot of the catalog store, which
//! keeps products in the order they were added.

use crate::clients::{ActorClient, CatalogClient};
use crate::lifecycle::config::LatencyConfig;
use crate::model::{Product, ProductCreate, ProductId};
use crate::services::latency::simulate_latency;
use crate::services::Envelope;
use tracing::instrument;

#[derive(Clone)]
pub struct CatalogService {
    catalog: CatalogClient,
    latency: LatencyConfig,
}

impl CatalogService {
    pub fn new(catalog: CatalogClient, latency: LatencyConfig) -> Self {
        Self { catalog, latency }
    }

    async fn products_where(&self, keep: impl Fn(&Product) -> bool) -> Envelope<Vec<Product>> {
        simulate_latency(self.latency.catalog_read()).await;
        Envelope::from(self.catalog.list().await)
            .map(|products| products.into_iter().filter(|p| keep(p)).collect())
    }

    /// Distinct category labels in first-seen order.
    #[instrument(skip(self))]
    pub async fn get_categories(&self) -> Envelope<Vec<String>> {
        simulate_latency(self.latency.catalog_read()).await;
        Envelope::from(self.catalog.list().await).map(|products| {
            let mut categories: Vec<String> = Vec::new();
            for product in products {
                if !categories.contains(&product.category) {
                    categories.push(product.category);
                }
            }
            categories
        })
    }

    #[instrument(skip(self))]
    pub async fn get_all_products(&self) -> Envelope<Vec<Product>> {
        self.products_where(|_| true).await
    }

    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: ProductId) -> Envelope<Product> {
        simulate_latency(self.latency.catalog_read()).await;
        self.catalog.find_product(id).await.into()
    }

    #[instrument(skip(self))]
    pub async fn get_products_by_category(&self, category: &str) -> Envelope<Vec<Product>> {
        self.products_where(|p| p.category == category).await
    }

    #[instrument(skip(self))]
    pub async fn get_featured_products(&self) -> Envelope<Vec<Product>> {
        self.products_where(|p| p.featured).await
    }

    /// Case-insensitive substring search. A blank query returns the whole catalog.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> Envelope<Vec<Product>> {
        let query = query.trim();
        self.products_where(|p| query.is_empty() || p.matches(query)).await
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn add_product(&self, params: ProductCreate) -> Envelope<Product> {
        simulate_latency(self.latency.catalog_write()).await;
        self.catalog.add_product(params).await.into()
    }
}
