//! Shared types for the scoped-settings tree.
//!
//! Payload crates only need this crate: it defines how a settings type is
//! identified (`TypeKey`), what a type must provide to be stored
//! (`Payload`), the per-tree policy (`TreeConfig`) and the error type
//! returned by every tree operation.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod payload;
pub mod prelude;
pub mod type_key;
pub mod types;

pub use config::{TreeConfig, TreeConfigBuilder};
pub use error::{Error, StResult};
pub use payload::{ErasedPayload, Payload};
pub use type_key::TypeKey;
pub use types::NodeId;

// vim: ts=4
