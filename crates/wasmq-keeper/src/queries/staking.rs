//! Staking queries: bonding denom, bonded validators and delegations.

use std::sync::Arc;

use wasmq_core::{
    BondedDenomResponse, Coin, Delegation, DelegationsResponse, ValidatorsResponse, WireDelegation,
    WireValidator, to_wire_coin,
};

use super::{decode_account, decode_validator, to_bytes};
use crate::address::AddressCodec;
use crate::error::QueryError;
use crate::request::StakingQuery;
use crate::store::StakingView;

/// Answers staking queries from a [`StakingView`].
#[derive(Clone)]
pub struct StakingQuerier {
    staking: Arc<dyn StakingView>,
    codec: Arc<dyn AddressCodec>,
}

impl StakingQuerier {
    pub fn new(staking: Arc<dyn StakingView>, codec: Arc<dyn AddressCodec>) -> Self {
        Self { staking, codec }
    }

    pub fn query(&self, request: &StakingQuery) -> Result<Vec<u8>, QueryError> {
        match request {
            StakingQuery::BondedDenom => to_bytes(&self.bonded_denom()),
            StakingQuery::Validators => to_bytes(&self.validators()?),
            StakingQuery::Delegations(q) => {
                to_bytes(&self.delegations(&q.delegator, q.validator.as_deref())?)
            }
        }
    }

    pub fn bonded_denom(&self) -> BondedDenomResponse {
        BondedDenomResponse {
            denom: self.staking.bond_denom(),
        }
    }

    /// Bonded validators in the order the registry returns them.
    pub fn validators(&self) -> Result<ValidatorsResponse, QueryError> {
        let validators = self
            .staking
            .bonded_validators()?
            .into_iter()
            .map(|v| {
                Ok(WireValidator {
                    address: self
                        .codec
                        .encode_validator(&v.operator)
                        .map_err(QueryError::AddressEncoding)?,
                    commission: v.commission.rate.to_string(),
                    max_commission: v.commission.max_rate.to_string(),
                    max_change_rate: v.commission.max_change_rate.to_string(),
                })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(ValidatorsResponse { validators })
    }

    /// Delegations of `delegator`, optionally restricted to one validator.
    ///
    /// Both addresses are decoded before the registry is touched. A
    /// delegation whose validator is missing from the registry fails the
    /// whole query.
    pub fn delegations(
        &self,
        delegator: &str,
        validator: Option<&str>,
    ) -> Result<DelegationsResponse, QueryError> {
        let delegator_addr = decode_account(self.codec.as_ref(), delegator)?;
        let validator_addr = validator
            .map(|v| decode_validator(self.codec.as_ref(), v))
            .transpose()?;

        let records = match validator_addr {
            None => self.staking.all_delegations(&delegator_addr)?,
            Some(validator_addr) => self
                .staking
                .delegation(&delegator_addr, &validator_addr)?
                .into_iter()
                .collect(),
        };

        let bond_denom = self.staking.bond_denom();
        let delegations = records
            .iter()
            .map(|d| self.convert_delegation(d, &bond_denom))
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(DelegationsResponse { delegations })
    }

    fn convert_delegation(
        &self,
        delegation: &Delegation,
        bond_denom: &str,
    ) -> Result<WireDelegation, QueryError> {
        let validator_text = self
            .codec
            .encode_validator(&delegation.validator)
            .map_err(QueryError::AddressEncoding)?;

        let Some(validator) = self.staking.validator(&delegation.validator)? else {
            tracing::warn!(
                "Delegation references missing validator {}",
                validator_text
            );
            return Err(QueryError::ValidatorNotFound(validator_text));
        };

        let amount = Coin::new(
            validator.tokens_from_shares(&delegation.shares).truncate(),
            bond_denom,
        );

        Ok(WireDelegation {
            delegator: self
                .codec
                .encode_account(&delegation.delegator)
                .map_err(QueryError::AddressEncoding)?,
            validator: validator_text,
            amount: to_wire_coin(&amount),
            // Reward accounting and redelegation state are not queried yet.
            accumulated_rewards: to_wire_coin(&Coin::zero(bond_denom)),
            can_redelegate: false,
        })
    }
}
