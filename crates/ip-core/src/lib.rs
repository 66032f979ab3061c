//! # ip-core
//!
//! Core types and utilities shared by every Infra Projects RS crate:
//! - Error taxonomy and validation error collection
//! - Result type alias
//! - Project identifier newtype
//! - Configuration loading

pub mod config;
pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
