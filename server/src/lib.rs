// server/src/lib.rs

//! REST backend of the Justo marketplace.

pub mod config;
pub mod errors;
pub mod flows;
pub mod repositories;
pub mod services;
pub mod state;
pub mod storage;
pub mod web;
