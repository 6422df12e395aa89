// core/src/flow/mod.rs

//! A small step-flow engine used to orchestrate multi-step workflows such as
//! registration, sign-in and checkout.
//!
//! A [`Flow`] is an ordered list of named steps. Each step has one or more
//! async handlers that receive a clone of the flow's [`Shared`] context and
//! answer with [`FlowControl::Continue`] or [`FlowControl::Stop`]. Flows are
//! registered in a [`FlowRegistry`] keyed by their context type so callers only
//! need to build a context and hand it over.

pub mod control;
pub mod definition;
pub mod execution;
pub mod registry;
pub mod shared;
pub mod step;

pub use control::{FlowControl, FlowOutcome};
pub use definition::{Flow, StepHandler};
pub use registry::FlowRegistry;
pub use shared::Shared;
pub use step::{SkipCondition, StepDef};
