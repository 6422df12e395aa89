// core/src/lib.rs

//! Justo: domain core of a small food-ordering marketplace.
//!
//! - [`Catalog`] holds restaurants and menu items.
//! - [`Cart`] and [`checkout`] turn a customer's picks into a validated request.
//! - [`Ledger`] records orders, assigns per-restaurant queue numbers and keeps
//!   status and ratings.
//! - [`Session`] is the credential-free demo sign-in.
//! - [`Dashboard`] derives the per-role views.
//! - [`Marketplace`] bundles all of the above into one owned demo store.
//! - [`flow`] is the step engine the backend builds its workflows on.

pub mod catalog;
pub mod checkout;
pub mod dashboard;
pub mod error;
pub mod flow;
pub mod ledger;
pub mod marketplace;
pub mod models;
pub mod reports;
pub mod seed;
pub mod session;

pub use crate::catalog::Catalog;
pub use crate::checkout::{Cart, CartLineRequest, CheckoutRequest};
pub use crate::dashboard::{Dashboard, Snapshot};
pub use crate::error::{FlowError, JustoError, JustoResult};
pub use crate::flow::{Flow, FlowControl, FlowOutcome, FlowRegistry, Shared};
pub use crate::ledger::{Ledger, OrderFilter, OrderQuery};
pub use crate::marketplace::Marketplace;
pub use crate::session::Session;
