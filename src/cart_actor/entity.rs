//! Entity trait implementation for cart lines.
//!
//! Quantities are validated here rather than in the client, so every path into the store
//! (create, merge, update, increment) enforces the same rule: a stored line holds at least one
//! unit.

use super::actions::CartAction;
use super::error::CartError;
use crate::framework::ActorEntity;
use crate::model::{CartLine, CartLineCreate, CartLineId, CartLineUpdate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for CartLine {
    type Id = CartLineId;
    type Create = CartLineCreate;
    type Update = CartLineUpdate;
    type Action = CartAction;
    type ActionResult = CartLine;
    type Context = ();
    type Error = CartError;

    fn id(&self) -> &CartLineId {
        &self.id
    }

    fn from_create_params(id: CartLineId, params: CartLineCreate) -> Result<Self, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        Ok(Self {
            id,
            product_id: params.product_id,
            name: params.name,
            unit_price: params.unit_price,
            quantity: params.quantity,
        })
    }

    /// A second add of the same product lands on the product's existing line.
    fn merges_with(&self, params: &CartLineCreate) -> bool {
        self.product_id == params.product_id
    }

    async fn on_merge(&mut self, params: CartLineCreate, ctx: &()) -> Result<(), CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        self.handle_action(CartAction::Increment(params.quantity), ctx)
            .await
            .map(|_| ())
    }

    /// Replaces the quantity. Zero is rejected; removing a line is a delete.
    async fn on_update(&mut self, update: CartLineUpdate, _ctx: &()) -> Result<(), CartError> {
        if update.quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        self.quantity = update.quantity;
        Ok(())
    }

    async fn handle_action(&mut self, action: CartAction, _ctx: &()) -> Result<CartLine, CartError> {
        match action {
            CartAction::Increment(extra) => {
                self.quantity = self
                    .quantity
                    .checked_add(extra)
                    .ok_or(CartError::InvalidQuantity(u64::from(self.quantity) + u64::from(extra)))?;
                Ok(self.clone())
            }
        }
    }
}
