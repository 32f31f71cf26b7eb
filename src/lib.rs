//! # Storefront Services
//!
//! > **An in-process stand-in for a storefront's commerce backend.**
//!
//! The storefront talks to [`services::StorefrontApi`] as if it were a remote API. This
//! crate answers it from memory: every call waits out a simulated network delay, reads or
//! writes an in-memory store, and resolves to a uniform success or failure
//! [`Envelope`](services::Envelope). Payments fail on purpose some of the time so the
//! storefront's error paths get exercised.
//!
//! ## 🏗️ Design
//!
//! ### Single-writer stores
//! Orders, cart lines and catalog products each live in a [`ResourceActor`](framework::ResourceActor):
//! one Tokio task that owns an insertion-ordered `Vec` and handles requests one at a time.
//! Callers hold a cloneable client and never see a half-applied change.
//!
//! ### Typed errors, flat envelopes
//! Each store has its own `thiserror` enum (`OrderError`, `CartError`, `CatalogError`). At the
//! service boundary they collapse into [`ServiceError`](services::ServiceError) and from there
//! into an envelope whose serialized form carries only the message:
//! `{"success": false, "error": "Order not found"}`.
//!
//! ### Injected context
//! Stores receive their dependencies when they start running: the order store gets its
//! [`OrderNumbering`](services::ids::OrderNumbering) through `run()`, and identifier
//! allocation is passed in as a closure over a shared [`IdGenerator`](services::ids::IdGenerator).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic actor plumbing: [`ActorEntity`](framework::ActorEntity),
//! [`ResourceActor`](framework::ResourceActor), [`ResourceClient`](framework::ResourceClient),
//! and [`MockClient`](framework::mock::MockClient) for testing without actors.
//!
//! ### 2. The Data ([`model`])
//! Orders, payments, products and cart lines, serialized in the storefront's camelCase shape.
//!
//! ### 3. The Stores ([`order_actor`], [`cart_actor`], [`catalog_actor`])
//! `ActorEntity` implementations and per-store error types.
//!
//! ### 4. The Interface ([`clients`])
//! Domain wrappers over `ResourceClient` (`OrderClient`, `CartClient`, `CatalogClient`).
//!
//! ### 5. The Services ([`services`])
//! Latency, identifiers, the payment simulator, envelopes and the
//! [`SimulatedBackend`](services::SimulatedBackend).
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! Configuration, tracing setup and [`StorefrontSystem`](lifecycle::StorefrontSystem), which
//! starts the stores and shuts them down.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Demo checkout with info logs
//! RUST_LOG=info cargo run
//!
//! # Skip the simulated delays
//! STOREFRONT_LATENCY__CREATE_ORDER_MS=0 STOREFRONT_LATENCY__PAYMENT_MS=0 cargo run
//!
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod services;
