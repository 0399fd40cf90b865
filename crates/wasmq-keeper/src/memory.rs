//! In-memory chain snapshot.
//!
//! [`MemoryState`] implements every store view over plain collections. It
//! can be assembled in code or loaded from a JSON [`Snapshot`] whose
//! addresses are bech32 text.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasmq_core::{Address, Coin, Commission, Dec, Delegation, Model, Uint, Validator};

use crate::address::{AddressCodec, AddressError};
use crate::store::{BankView, ContractView, StakingView, StoreError};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Invalid address {value:?} in {field}: {source}")]
    Address {
        field: &'static str,
        value: String,
        #[source]
        source: AddressError,
    },

    #[error("Duplicate address {value:?} in {field}")]
    DuplicateAddress { field: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub bond_denom: Option<String>,
    /// Account address to balances, in the order they are reported.
    #[serde(default)]
    pub balances: BTreeMap<String, Vec<Coin>>,
    /// Validators in descending voting power.
    #[serde(default)]
    pub validators: Vec<SnapshotValidator>,
    #[serde(default)]
    pub delegations: Vec<SnapshotDelegation>,
    #[serde(default)]
    pub contracts: BTreeMap<String, SnapshotContract>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotValidator {
    pub operator: String,
    pub tokens: Uint,
    pub delegator_shares: Dec,
    pub commission: SnapshotCommission,
    #[serde(default = "bonded_default")]
    pub bonded: bool,
}

fn bonded_default() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCommission {
    pub rate: Dec,
    pub max_rate: Dec,
    pub max_change_rate: Dec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDelegation {
    pub delegator: String,
    pub validator: String,
    pub shares: Dec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotContract {
    #[serde(default)]
    pub storage: Vec<Model>,
    #[serde(default)]
    pub smart: Vec<SmartResponse>,
}

/// Canned smart-query answer: `response` is returned for `msg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartResponse {
    pub msg: serde_json::Value,
    pub response: serde_json::Value,
}

#[derive(Debug, Clone, Default)]
struct ContractState {
    storage: BTreeMap<Vec<u8>, Vec<u8>>,
    smart: Vec<(serde_json::Value, Vec<u8>)>,
}

#[derive(Debug, Clone)]
struct StoredValidator {
    validator: Validator,
    bonded: bool,
}

/// Immutable chain state held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    bond_denom: String,
    balances: HashMap<Address, Vec<Coin>>,
    validators: Vec<StoredValidator>,
    delegations: Vec<Delegation>,
    contracts: HashMap<Address, ContractState>,
}

impl MemoryState {
    pub fn new(bond_denom: impl Into<String>) -> Self {
        Self {
            bond_denom: bond_denom.into(),
            ..Default::default()
        }
    }

    /// Loads a JSON snapshot. `default_bond_denom` applies when the
    /// snapshot does not name one.
    pub fn from_json(
        json: &str,
        codec: &dyn AddressCodec,
        default_bond_denom: &str,
    ) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, codec, default_bond_denom)
    }

    pub fn from_snapshot(
        snapshot: Snapshot,
        codec: &dyn AddressCodec,
        default_bond_denom: &str,
    ) -> Result<Self, SnapshotError> {
        let account = |field: &'static str, value: &str| {
            codec
                .decode_account(value)
                .map_err(|source| SnapshotError::Address {
                    field,
                    value: value.to_string(),
                    source,
                })
        };
        let operator = |field: &'static str, value: &str| {
            codec
                .decode_validator(value)
                .map_err(|source| SnapshotError::Address {
                    field,
                    value: value.to_string(),
                    source,
                })
        };

        let mut state = Self::new(
            snapshot
                .bond_denom
                .unwrap_or_else(|| default_bond_denom.to_string()),
        );

        // Different spellings of one address (e.g. upper and lower case)
        // decode to the same key.
        for (addr, coins) in snapshot.balances {
            if !insert_unique(&mut state.balances, account("balances", &addr)?, coins) {
                return Err(duplicate("balances", addr));
            }
        }

        for v in snapshot.validators {
            state.validators.push(StoredValidator {
                validator: Validator {
                    operator: operator("validators", &v.operator)?,
                    tokens: v.tokens,
                    delegator_shares: v.delegator_shares,
                    commission: Commission {
                        rate: v.commission.rate,
                        max_rate: v.commission.max_rate,
                        max_change_rate: v.commission.max_change_rate,
                    },
                },
                bonded: v.bonded,
            });
        }

        for d in snapshot.delegations {
            state.delegations.push(Delegation {
                delegator: account("delegations", &d.delegator)?,
                validator: operator("delegations", &d.validator)?,
                shares: d.shares,
            });
        }

        for (addr, contract) in snapshot.contracts {
            let mut contract_state = ContractState::default();
            for model in contract.storage {
                contract_state.storage.insert(model.key, model.value);
            }
            for canned in contract.smart {
                let response = serde_json::to_vec(&canned.response)?;
                contract_state.smart.push((canned.msg, response));
            }
            let key = account("contracts", &addr)?;
            if !insert_unique(&mut state.contracts, key, contract_state) {
                return Err(duplicate("contracts", addr));
            }
        }

        tracing::debug!(
            "Loaded snapshot: {} accounts, {} validators, {} delegations, {} contracts",
            state.balances.len(),
            state.validators.len(),
            state.delegations.len(),
            state.contracts.len()
        );

        Ok(state)
    }

    /// Appends a balance to an account.
    pub fn with_balance(mut self, address: Address, coin: Coin) -> Self {
        self.balances.entry(address).or_default().push(coin);
        self
    }

    /// Adds a bonded validator after the existing ones.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(StoredValidator {
            validator,
            bonded: true,
        });
        self
    }

    /// Adds a validator outside the bonded set.
    pub fn with_unbonded_validator(mut self, validator: Validator) -> Self {
        self.validators.push(StoredValidator {
            validator,
            bonded: false,
        });
        self
    }

    pub fn with_delegation(mut self, delegation: Delegation) -> Self {
        self.delegations.push(delegation);
        self
    }

    /// Sets a raw storage entry, registering the contract if needed.
    pub fn with_contract_entry(
        mut self,
        contract: Address,
        key: impl Into<Vec<u8>>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        self.contracts
            .entry(contract)
            .or_default()
            .storage
            .insert(key.into(), value.into());
        self
    }

    /// Registers the answer a contract gives to a smart query.
    pub fn with_smart_response(
        mut self,
        contract: Address,
        msg: serde_json::Value,
        response: impl Into<Vec<u8>>,
    ) -> Self {
        self.contracts
            .entry(contract)
            .or_default()
            .smart
            .push((msg, response.into()));
        self
    }

    /// Drops a validator from the registry, leaving its delegations behind.
    pub fn remove_validator(&mut self, operator: &Address) {
        self.validators.retain(|v| &v.validator.operator != operator);
    }

    fn contract(&self, address: &Address) -> Result<&ContractState, StoreError> {
        self.contracts
            .get(address)
            .ok_or_else(|| StoreError::NoSuchContract(address.to_string()))
    }
}

/// Inserts unless the key is already taken.
fn insert_unique<V>(map: &mut HashMap<Address, V>, key: Address, value: V) -> bool {
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

fn duplicate(field: &'static str, value: String) -> SnapshotError {
    SnapshotError::DuplicateAddress { field, value }
}

impl BankView for MemoryState {
    fn all_balances(&self, address: &Address) -> Result<Vec<Coin>, StoreError> {
        Ok(self.balances.get(address).cloned().unwrap_or_default())
    }

    fn balance(&self, address: &Address, denom: &str) -> Result<Coin, StoreError> {
        let coin = self
            .balances
            .get(address)
            .and_then(|coins| coins.iter().find(|c| c.denom == denom))
            .cloned()
            .unwrap_or_else(|| Coin::zero(denom));
        Ok(coin)
    }
}

impl StakingView for MemoryState {
    fn bond_denom(&self) -> String {
        self.bond_denom.clone()
    }

    fn bonded_validators(&self) -> Result<Vec<Validator>, StoreError> {
        Ok(self
            .validators
            .iter()
            .filter(|v| v.bonded)
            .map(|v| v.validator.clone())
            .collect())
    }

    fn delegation(
        &self,
        delegator: &Address,
        validator: &Address,
    ) -> Result<Option<Delegation>, StoreError> {
        Ok(self
            .delegations
            .iter()
            .find(|d| &d.delegator == delegator && &d.validator == validator)
            .cloned())
    }

    fn all_delegations(&self, delegator: &Address) -> Result<Vec<Delegation>, StoreError> {
        Ok(self
            .delegations
            .iter()
            .filter(|d| &d.delegator == delegator)
            .cloned()
            .collect())
    }

    fn validator(&self, operator: &Address) -> Result<Option<Validator>, StoreError> {
        Ok(self
            .validators
            .iter()
            .find(|v| &v.validator.operator == operator)
            .map(|v| v.validator.clone()))
    }
}

impl ContractView for MemoryState {
    fn query_smart(&self, contract: &Address, msg: &[u8]) -> Result<Vec<u8>, StoreError> {
        let state = self.contract(contract)?;
        let msg: serde_json::Value = serde_json::from_slice(msg)
            .map_err(|e| StoreError::Contract(format!("Invalid query message: {e}")))?;

        state
            .smart
            .iter()
            .find(|(known, _)| known == &msg)
            .map(|(_, response)| response.clone())
            .ok_or_else(|| StoreError::Contract(format!("Unsupported query: {msg}")))
    }

    fn query_raw(&self, contract: &Address, key: &[u8]) -> Result<Vec<Model>, StoreError> {
        let state = self.contract(contract)?;
        Ok(state
            .storage
            .get(key)
            .map(|value| Model {
                key: key.to_vec(),
                value: value.clone(),
            })
            .into_iter()
            .collect())
    }
}
