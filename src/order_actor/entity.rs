//! Entity trait implementation for the Order domain type.
//!
//! Orders are append-only: `Update` and `Action` are uninhabited and `Delete` is refused,
//! so the only requests that change the store are `Create` and a full `Clear`. The order number is stamped in `on_create` from
//! the [`OrderNumbering`] the actor was started with.

use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderId, OrderRequest};
use crate::services::ids::OrderNumbering;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderRequest;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = OrderNumbering;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderRequest) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }

    async fn on_create(&mut self, numbering: &OrderNumbering) -> Result<(), OrderError> {
        self.order_number = numbering.format(self.id);
        Ok(())
    }

    async fn on_delete(&self, _ctx: &OrderNumbering) -> Result<(), OrderError> {
        Err(OrderError::Rejected("orders are append-only".into()))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderNumbering) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &OrderNumbering) -> Result<(), OrderError> {
        match action {}
    }
}
