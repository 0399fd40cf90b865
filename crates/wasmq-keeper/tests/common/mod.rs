//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use wasmq_core::{ADDRESS_LEN, Address, Coin, Delegation, Model, Validator};
use wasmq_keeper::{
    AddressCodec, AddressError, BankView, ContractView, MemoryState, QueryHandler, QueryPlugins,
    StakingView, StoreError,
};

/// Codec for readable test addresses such as `addr1` or `val2`.
///
/// The label bytes are zero-padded to a full address. Validator labels
/// start with `val`, account labels must not.
pub struct LabelCodec;

impl LabelCodec {
    fn decode(text: &str) -> Result<Address, AddressError> {
        if text.is_empty()
            || text.len() > ADDRESS_LEN
            || !text.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(AddressError::Bech32(format!("bad label {text:?}")));
        }
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Address::new(bytes))
    }

    fn encode(address: &Address) -> String {
        let bytes = address.as_bytes();
        let end = bytes.iter().position(|b| *b == 0).unwrap_or(ADDRESS_LEN);
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }
}

impl AddressCodec for LabelCodec {
    fn decode_account(&self, text: &str) -> Result<Address, AddressError> {
        if text.starts_with("val") {
            return Err(AddressError::WrongPrefix {
                expected: "account".into(),
                actual: "val".into(),
            });
        }
        Self::decode(text)
    }

    fn decode_validator(&self, text: &str) -> Result<Address, AddressError> {
        if !text.starts_with("val") {
            return Err(AddressError::WrongPrefix {
                expected: "val".into(),
                actual: text.into(),
            });
        }
        Self::decode(text)
    }

    fn encode_account(&self, address: &Address) -> Result<String, AddressError> {
        Ok(Self::encode(address))
    }

    fn encode_validator(&self, address: &Address) -> Result<String, AddressError> {
        Ok(Self::encode(address))
    }
}

pub fn addr(label: &str) -> Address {
    LabelCodec::decode(label).unwrap()
}

/// Wraps a [`MemoryState`] and counts every store call.
pub struct Spy {
    inner: MemoryState,
    calls: AtomicUsize,
}

impl Spy {
    pub fn new(inner: MemoryState) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl BankView for Spy {
    fn all_balances(&self, address: &Address) -> Result<Vec<Coin>, StoreError> {
        self.hit();
        self.inner.all_balances(address)
    }

    fn balance(&self, address: &Address, denom: &str) -> Result<Coin, StoreError> {
        self.hit();
        self.inner.balance(address, denom)
    }
}

impl StakingView for Spy {
    fn bond_denom(&self) -> String {
        self.hit();
        self.inner.bond_denom()
    }

    fn bonded_validators(&self) -> Result<Vec<Validator>, StoreError> {
        self.hit();
        self.inner.bonded_validators()
    }

    fn delegation(
        &self,
        delegator: &Address,
        validator: &Address,
    ) -> Result<Option<Delegation>, StoreError> {
        self.hit();
        self.inner.delegation(delegator, validator)
    }

    fn all_delegations(&self, delegator: &Address) -> Result<Vec<Delegation>, StoreError> {
        self.hit();
        self.inner.all_delegations(delegator)
    }

    fn validator(&self, operator: &Address) -> Result<Option<Validator>, StoreError> {
        self.hit();
        self.inner.validator(operator)
    }
}

impl ContractView for Spy {
    fn query_smart(&self, contract: &Address, msg: &[u8]) -> Result<Vec<u8>, StoreError> {
        self.hit();
        self.inner.query_smart(contract, msg)
    }

    fn query_raw(&self, contract: &Address, key: &[u8]) -> Result<Vec<Model>, StoreError> {
        self.hit();
        self.inner.query_raw(contract, key)
    }
}

/// Default plugins over `state`, with the spy handed back for inspection.
pub fn spied_handler(state: MemoryState) -> (QueryHandler, Arc<Spy>) {
    let spy = Arc::new(Spy::new(state));
    let plugins =
        QueryPlugins::with_defaults(spy.clone(), spy.clone(), spy.clone(), Arc::new(LabelCodec));
    (QueryHandler::new(plugins), spy)
}

pub fn handler(state: MemoryState) -> QueryHandler {
    spied_handler(state).0
}

pub fn query_str(handler: &QueryHandler, json: &str) -> Result<String, wasmq_keeper::QueryError> {
    handler
        .query_json(json.as_bytes())
        .map(|bytes| String::from_utf8(bytes).unwrap())
}
