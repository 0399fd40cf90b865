//! Read-only views over the backing stores.
//!
//! The query layer never owns chain state. Each domain querier holds one of
//! these views and every call against it is a plain lookup in the current
//! snapshot.

use thiserror::Error;
use wasmq_core::{Address, Coin, Delegation, Model, Validator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No such contract: {0}")]
    NoSuchContract(String),

    #[error("Contract query failed: {0}")]
    Contract(String),

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Account balances.
pub trait BankView: Send + Sync {
    /// All balances held by `address`, in store order.
    fn all_balances(&self, address: &Address) -> Result<Vec<Coin>, StoreError>;

    /// Balance of one denomination; zero when the account holds none.
    fn balance(&self, address: &Address, denom: &str) -> Result<Coin, StoreError>;
}

/// Validator registry and delegations.
pub trait StakingView: Send + Sync {
    fn bond_denom(&self) -> String;

    /// Bonded validators ordered by descending voting power.
    fn bonded_validators(&self) -> Result<Vec<Validator>, StoreError>;

    fn delegation(
        &self,
        delegator: &Address,
        validator: &Address,
    ) -> Result<Option<Delegation>, StoreError>;

    fn all_delegations(&self, delegator: &Address) -> Result<Vec<Delegation>, StoreError>;

    fn validator(&self, operator: &Address) -> Result<Option<Validator>, StoreError>;
}

/// Contract engine entry points.
pub trait ContractView: Send + Sync {
    /// Runs a read-only smart query and returns the contract's raw response.
    fn query_smart(&self, contract: &Address, msg: &[u8]) -> Result<Vec<u8>, StoreError>;

    /// Reads raw storage entries matching `key`.
    fn query_raw(&self, contract: &Address, key: &[u8]) -> Result<Vec<Model>, StoreError>;
}
