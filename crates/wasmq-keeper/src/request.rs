//! Query requests.
//!
//! Requests arrive as JSON objects with one optional field per variant.
//! The wire structs below accept that shape as-is; [`QueryRequest`] and the
//! per-domain enums are the strict form every handler works with. When a
//! caller sets more than one field, the first populated field in
//! declaration order wins.

use serde::{Deserialize, Serialize};
use wasmq_core::Binary;

use crate::error::QueryError;

/// Payload of variants that take no arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllBalancesQuery {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub address: String,
    pub denom: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationsQuery {
    pub delegator: String,
    /// Restricts the result to one validator when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartQuery {
    pub contract_addr: String,
    pub msg: Binary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuery {
    pub contract_addr: String,
    pub key: Binary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<WireLedgerQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking: Option<WireStakingQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<WireContractQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireLedgerQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_balances: Option<AllBalancesQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<BalanceQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireStakingQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonded_denom: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validators: Option<Empty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delegations: Option<DelegationsQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireContractQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smart: Option<SmartQuery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<RawQuery>,
}

/// A query with exactly one domain selected.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    Ledger(LedgerQuery),
    Custom(serde_json::Value),
    Staking(StakingQuery),
    Contract(ContractQuery),
}

impl QueryRequest {
    /// Domain name, used in logs.
    pub fn domain(&self) -> &'static str {
        match self {
            QueryRequest::Ledger(_) => "ledger",
            QueryRequest::Custom(_) => "custom",
            QueryRequest::Staking(_) => "staking",
            QueryRequest::Contract(_) => "contract",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerQuery {
    AllBalances(AllBalancesQuery),
    Balance(BalanceQuery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StakingQuery {
    BondedDenom,
    Validators,
    Delegations(DelegationsQuery),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractQuery {
    Smart(SmartQuery),
    Raw(RawQuery),
}

impl TryFrom<WireQueryRequest> for QueryRequest {
    type Error = QueryError;

    fn try_from(wire: WireQueryRequest) -> Result<Self, Self::Error> {
        if let Some(ledger) = wire.ledger {
            return Ok(QueryRequest::Ledger(ledger.try_into()?));
        }
        if let Some(custom) = wire.custom {
            return Ok(QueryRequest::Custom(custom));
        }
        if let Some(staking) = wire.staking {
            return Ok(QueryRequest::Staking(staking.try_into()?));
        }
        if let Some(contract) = wire.contract {
            return Ok(QueryRequest::Contract(contract.try_into()?));
        }
        Err(QueryError::UnknownRequest)
    }
}

impl TryFrom<WireLedgerQuery> for LedgerQuery {
    type Error = QueryError;

    fn try_from(wire: WireLedgerQuery) -> Result<Self, Self::Error> {
        if let Some(query) = wire.all_balances {
            return Ok(LedgerQuery::AllBalances(query));
        }
        if let Some(query) = wire.balance {
            return Ok(LedgerQuery::Balance(query));
        }
        Err(QueryError::unsupported("unknown ledger query variant"))
    }
}

impl TryFrom<WireStakingQuery> for StakingQuery {
    type Error = QueryError;

    fn try_from(wire: WireStakingQuery) -> Result<Self, Self::Error> {
        if wire.bonded_denom.is_some() {
            return Ok(StakingQuery::BondedDenom);
        }
        if wire.validators.is_some() {
            return Ok(StakingQuery::Validators);
        }
        if let Some(mut query) = wire.delegations {
            // Older clients send "" instead of omitting the validator.
            query.validator = query.validator.filter(|v| !v.is_empty());
            return Ok(StakingQuery::Delegations(query));
        }
        Err(QueryError::unsupported("unknown staking query variant"))
    }
}

impl TryFrom<WireContractQuery> for ContractQuery {
    type Error = QueryError;

    fn try_from(wire: WireContractQuery) -> Result<Self, Self::Error> {
        if let Some(query) = wire.smart {
            return Ok(ContractQuery::Smart(query));
        }
        if let Some(query) = wire.raw {
            return Ok(ContractQuery::Raw(query));
        }
        Err(QueryError::unsupported("unknown contract query variant"))
    }
}
