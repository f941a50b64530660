//! # dinetab-service: Checkout Orchestration
//!
//! The async boundary of dinetab. This crate owns the shared cart and order
//! state, talks to the external collaborators through gateway traits, and
//! publishes the lifecycle events the UI routes on. All business rules live
//! in `dinetab-core`; this crate only sequences them around I/O.
//!
//! ## Module Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        dinetab-service                                  │
//! │                                                                         │
//! │  checkout.rs   CheckoutService: cart → order → payment sequencing      │
//! │  gateway.rs    CatalogGateway / OrderGateway / PaymentGateway traits   │
//! │  events.rs     LifecycleEvent + broadcast EventBus                      │
//! │  error.rs      GatewayError (transport) and ApiError (frontend-facing)  │
//! │  telemetry.rs  tracing subscriber setup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```no_run
//! use dinetab_service::{CheckoutService, InMemoryCatalog};
//! use dinetab_core::types::PaymentMethod;
//! # use dinetab_service::{GatewayResult, OrderGateway, PaymentGateway};
//! # use dinetab_core::types::{Order, PaymentTransaction};
//! # struct Noop;
//! # impl OrderGateway for Noop {
//! #     async fn record_order(&self, _: &Order) -> GatewayResult<()> { Ok(()) }
//! # }
//! # impl PaymentGateway for Noop {
//! #     async fn record_payment(&self, _: &PaymentTransaction) -> GatewayResult<()> { Ok(()) }
//! # }
//!
//! # async fn demo() -> Result<(), dinetab_service::ApiError> {
//! let svc = CheckoutService::new(InMemoryCatalog::new(), Noop, Noop);
//!
//! svc.add_to_cart("5", "burger", None).await?;
//! let order = svc.submit_order("5").await?;
//! let txn = svc
//!     .submit_payment(&order.order_id, "20.00", PaymentMethod::Cash)
//!     .await?;
//! println!("change due: {}", txn.change);
//! # Ok(())
//! # }
//! ```

pub mod checkout;
pub mod error;
pub mod events;
pub mod gateway;
pub mod telemetry;

pub use checkout::{CartView, CheckoutService};
pub use error::{ApiError, ErrorCode, GatewayError, GatewayResult};
pub use events::{EventBus, LifecycleEvent};
pub use gateway::{CatalogGateway, InMemoryCatalog, OrderGateway, PaymentGateway};
