//! Ledger balance queries.

use std::sync::Arc;

use wasmq_core::{AllBalancesResponse, BalanceResponse, WireCoin, to_wire_coins};

use super::{decode_account, to_bytes};
use crate::address::AddressCodec;
use crate::error::QueryError;
use crate::request::LedgerQuery;
use crate::store::BankView;

/// Answers ledger queries from a [`BankView`].
#[derive(Clone)]
pub struct LedgerQuerier {
    bank: Arc<dyn BankView>,
    codec: Arc<dyn AddressCodec>,
}

impl LedgerQuerier {
    pub fn new(bank: Arc<dyn BankView>, codec: Arc<dyn AddressCodec>) -> Self {
        Self { bank, codec }
    }

    pub fn query(&self, request: &LedgerQuery) -> Result<Vec<u8>, QueryError> {
        match request {
            LedgerQuery::AllBalances(q) => to_bytes(&self.all_balances(&q.address)?),
            LedgerQuery::Balance(q) => to_bytes(&self.balance(&q.address, &q.denom)?),
        }
    }

    /// All balances of an account, in store order.
    pub fn all_balances(&self, address: &str) -> Result<AllBalancesResponse, QueryError> {
        let addr = decode_account(self.codec.as_ref(), address)?;
        let coins = self.bank.all_balances(&addr)?;
        Ok(AllBalancesResponse {
            amount: to_wire_coins(&coins),
        })
    }

    /// Balance of one denomination. Accounts without that denomination
    /// report a zero amount.
    pub fn balance(&self, address: &str, denom: &str) -> Result<BalanceResponse, QueryError> {
        let addr = decode_account(self.codec.as_ref(), address)?;
        let coin = self.bank.balance(&addr, denom)?;
        Ok(BalanceResponse {
            amount: WireCoin {
                denom: denom.to_string(),
                amount: coin.amount.to_string(),
            },
        })
    }
}
