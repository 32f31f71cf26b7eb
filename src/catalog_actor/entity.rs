//! Entity trait implementation for catalog products.

use super::error::CatalogError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, CatalogError> {
        if params.name.trim().is_empty() {
            return Err(CatalogError::Rejected("product name is empty".into()));
        }
        Ok(Product::new(id, params))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), CatalogError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), CatalogError> {
        match action {}
    }
}
