//! # gatehouse-core
//!
//! Core crate for the Gatehouse authentication gateway. Contains the
//! configuration schemas, tracing initialization, and the unified error
//! system shared by every other crate.
//!
//! This crate has **no** internal dependencies on other Gatehouse crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
