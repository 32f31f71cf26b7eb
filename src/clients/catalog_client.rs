//! # Catalog Client
//!
//! High-level API for the product catalog. Wraps a `ResourceClient<Product>`.

use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::{entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name, category = %params.category))]
    pub async fn add_product(&self, params: ProductCreate) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The product with the given id, or [`CatalogError::NotFound`].
    #[instrument(skip(self))]
    pub async fn find_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        entity_error(e, CatalogError::NotFound)
    }
}
