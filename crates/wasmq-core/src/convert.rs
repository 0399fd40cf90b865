//! Conversions from ledger coins to their contract-facing form.

use crate::types::{Coin, TypeError};
use crate::wire::WireCoin;

pub fn to_wire_coin(coin: &Coin) -> WireCoin {
    WireCoin {
        denom: coin.denom.clone(),
        amount: coin.amount.to_string(),
    }
}

/// Converts a coin list, keeping its order.
pub fn to_wire_coins(coins: &[Coin]) -> Vec<WireCoin> {
    coins.iter().map(to_wire_coin).collect()
}

/// Parses a contract-facing coin back into a ledger coin.
pub fn from_wire_coin(coin: &WireCoin) -> Result<Coin, TypeError> {
    Ok(Coin {
        denom: coin.denom.clone(),
        amount: coin.amount.parse()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Uint;
    use proptest::prelude::*;

    #[test]
    fn test_zero_amount() {
        let wire = to_wire_coin(&Coin::zero("stake"));
        assert_eq!(wire.amount, "0");
        assert_eq!(wire.denom, "stake");
    }

    #[test]
    fn test_large_amount_keeps_every_digit() {
        let amount: Uint = "123456789012345678901234567890".parse().unwrap();
        let coin = Coin::new(amount, "uatom");
        let wire = to_wire_coin(&coin);
        assert_eq!(wire.amount, "123456789012345678901234567890");
        assert_eq!(from_wire_coin(&wire).unwrap(), coin);
    }

    #[test]
    fn test_list_order_preserved() {
        let coins = vec![
            Coin::new(5u64, "zeta"),
            Coin::new(0u64, "alpha"),
            Coin::new(7u64, "mid"),
        ];
        let denoms: Vec<_> = to_wire_coins(&coins)
            .into_iter()
            .map(|c| c.denom)
            .collect();
        assert_eq!(denoms, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_wire_rejects_scientific_notation() {
        let wire = WireCoin {
            denom: "stake".into(),
            amount: "1e3".into(),
        };
        assert!(from_wire_coin(&wire).is_err());
    }

    proptest! {
        #[test]
        fn prop_u128_roundtrip(amount in any::<u128>()) {
            let coin = Coin::new(amount, "stake");
            let wire = to_wire_coin(&coin);
            prop_assert_eq!(&wire.amount, &amount.to_string());
            prop_assert_eq!(from_wire_coin(&wire).unwrap(), coin);
        }

        #[test]
        fn prop_big_roundtrip(digits in "0|[1-9][0-9]{0,120}") {
            let coin = Coin::new(digits.parse::<Uint>().unwrap(), "stake");
            let wire = to_wire_coin(&coin);
            prop_assert_eq!(&wire.amount, &digits);
            prop_assert_eq!(from_wire_coin(&wire).unwrap(), coin);
        }
    }
}
