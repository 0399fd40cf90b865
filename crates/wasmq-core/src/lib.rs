//! Core data model for contract-facing chain queries.
//!
//! This crate provides:
//! - Ledger types: arbitrary-precision amounts, decimals, coins, addresses (`types` module)
//! - Staking registry records (`staking` module)
//! - Contract-facing response schemas (`wire` module)
//! - Ledger-to-wire conversions (`convert` module)
//! - Chain configuration (`config` module), loadable from disk with the
//!   `persistence` feature

pub mod config;
pub mod convert;
pub mod staking;
pub mod types;
pub mod wire;

pub use config::{ChainConfig, ConfigError};
pub use convert::*;
pub use staking::*;
pub use types::*;
pub use wire::*;
