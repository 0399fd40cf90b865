//! Pluggable per-domain query handlers.
//!
//! A [`QueryPlugins`] value holds one optional handler per domain. The
//! defaults answer ledger, staking and contract queries from the backing
//! stores and reject custom queries. Embedders usually start from the
//! defaults and [`merge`](QueryPlugins::merge) in a value carrying only the
//! handlers they want to replace, most often `custom`.

use std::fmt;
use std::sync::Arc;

use crate::address::AddressCodec;
use crate::error::QueryError;
use crate::queries::contract::ContractQuerier;
use crate::queries::ledger::LedgerQuerier;
use crate::queries::staking::StakingQuerier;
use crate::request::{ContractQuery, LedgerQuery, StakingQuery};
use crate::store::{BankView, ContractView, StakingView};

pub type LedgerHandler = Arc<dyn Fn(&LedgerQuery) -> Result<Vec<u8>, QueryError> + Send + Sync>;
pub type CustomHandler =
    Arc<dyn Fn(&serde_json::Value) -> Result<Vec<u8>, QueryError> + Send + Sync>;
pub type StakingHandler = Arc<dyn Fn(&StakingQuery) -> Result<Vec<u8>, QueryError> + Send + Sync>;
pub type ContractHandler =
    Arc<dyn Fn(&ContractQuery) -> Result<Vec<u8>, QueryError> + Send + Sync>;

#[derive(Clone, Default)]
pub struct QueryPlugins {
    pub ledger: Option<LedgerHandler>,
    pub custom: Option<CustomHandler>,
    pub staking: Option<StakingHandler>,
    pub contract: Option<ContractHandler>,
}

/// Custom handler used when the embedder registers none.
pub fn no_custom_querier(_request: &serde_json::Value) -> Result<Vec<u8>, QueryError> {
    Err(QueryError::unsupported("custom"))
}

/// Override slot wins when set.
fn pick<T: Clone>(base: Option<T>, over: &Option<T>) -> Option<T> {
    over.clone().or(base)
}

impl QueryPlugins {
    /// Default handlers backed by the given stores. Every slot is set.
    pub fn with_defaults(
        bank: Arc<dyn BankView>,
        staking: Arc<dyn StakingView>,
        contracts: Arc<dyn ContractView>,
        codec: Arc<dyn AddressCodec>,
    ) -> Self {
        let ledger = LedgerQuerier::new(bank, codec.clone());
        let staking = StakingQuerier::new(staking, codec.clone());
        let contract = ContractQuerier::new(contracts, codec);

        Self::default()
            .with_ledger(move |q| ledger.query(q))
            .with_custom(no_custom_querier)
            .with_staking(move |q| staking.query(q))
            .with_contract(move |q| contract.query(q))
    }

    pub fn with_ledger<F>(mut self, handler: F) -> Self
    where
        F: Fn(&LedgerQuery) -> Result<Vec<u8>, QueryError> + Send + Sync + 'static,
    {
        self.ledger = Some(Arc::new(handler));
        self
    }

    pub fn with_custom<F>(mut self, handler: F) -> Self
    where
        F: Fn(&serde_json::Value) -> Result<Vec<u8>, QueryError> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(handler));
        self
    }

    pub fn with_staking<F>(mut self, handler: F) -> Self
    where
        F: Fn(&StakingQuery) -> Result<Vec<u8>, QueryError> + Send + Sync + 'static,
    {
        self.staking = Some(Arc::new(handler));
        self
    }

    pub fn with_contract<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ContractQuery) -> Result<Vec<u8>, QueryError> + Send + Sync + 'static,
    {
        self.contract = Some(Arc::new(handler));
        self
    }

    /// Returns `self` with every handler set in `overrides` replaced.
    ///
    /// Slots are chosen independently. `overrides` is only read, so the same
    /// override value can be merged into several bases.
    pub fn merge(self, overrides: Option<&QueryPlugins>) -> QueryPlugins {
        let Some(o) = overrides else {
            return self;
        };
        QueryPlugins {
            ledger: pick(self.ledger, &o.ledger),
            custom: pick(self.custom, &o.custom),
            staking: pick(self.staking, &o.staking),
            contract: pick(self.contract, &o.contract),
        }
    }

    /// True when every domain has a handler.
    pub fn is_complete(&self) -> bool {
        self.ledger.is_some()
            && self.custom.is_some()
            && self.staking.is_some()
            && self.contract.is_some()
    }
}

impl fmt::Debug for QueryPlugins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryPlugins")
            .field("ledger", &self.ledger.is_some())
            .field("custom", &self.custom.is_some())
            .field("staking", &self.staking.is_some())
            .field("contract", &self.contract.is_some())
            .finish()
    }
}
