//! Query dispatch for contract-facing chain queries.
//!
//! A contract asks for ledger balances, staking state, other contracts'
//! state, or something chain specific. [`QueryHandler`] picks the handler
//! for the requested domain out of a [`QueryPlugins`] registry, and the
//! default handlers in [`queries`] translate the answer from the stores'
//! native types into the contract-facing JSON schemas.

pub mod address;
pub mod error;
pub mod handler;
pub mod memory;
pub mod plugins;
pub mod queries;
pub mod request;
pub mod store;

pub use address::{AddressCodec, AddressError, Bech32Codec};
pub use error::*;
pub use handler::QueryHandler;
pub use memory::{MemoryState, Snapshot, SnapshotError};
pub use plugins::{
    ContractHandler, CustomHandler, LedgerHandler, QueryPlugins, StakingHandler, no_custom_querier,
};
pub use queries::contract::ContractQuerier;
pub use queries::ledger::LedgerQuerier;
pub use queries::staking::StakingQuerier;
pub use request::*;
pub use store::*;
