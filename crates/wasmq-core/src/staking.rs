//! Staking records as held by the validator registry.

use crate::types::{Address, Dec, Uint};

/// Validator commission parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Commission {
    pub rate: Dec,
    pub max_rate: Dec,
    pub max_change_rate: Dec,
}

/// A validator in the staking registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    pub operator: Address,
    /// Tokens bonded to this validator.
    pub tokens: Uint,
    /// Total shares issued to delegators.
    pub delegator_shares: Dec,
    pub commission: Commission,
}

impl Validator {
    /// Token value of `shares` at the validator's current exchange rate.
    ///
    /// Computed as `shares * tokens / delegator_shares` and truncated at
    /// 18 decimals. A validator without issued shares values everything at
    /// zero.
    pub fn tokens_from_shares(&self, shares: &Dec) -> Dec {
        shares.mul_ratio(&self.tokens, &self.delegator_shares)
    }
}

/// A delegator's bond to one validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegation {
    pub delegator: Address,
    pub validator: Address,
    pub shares: Dec,
}
