//! Queries against the bundled snapshot fixture.

use std::sync::Arc;

use wasmq_core::ChainConfig;
use wasmq_keeper::{Bech32Codec, MemoryState, QueryErrorKind, QueryHandler, QueryPlugins};

const SNAPSHOT: &str = include_str!("../fixtures/snapshot.json");
const ALICE: &str = "cosmos1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";
const CONTRACT: &str = "cosmos1qvpsxqcrqvpsxqcrqvpsxqcrqvpsxqcrz8x6vt";

fn handler() -> QueryHandler {
    let config = ChainConfig::default();
    let codec = Bech32Codec::from_config(&config).unwrap();
    let state = Arc::new(MemoryState::from_json(SNAPSHOT, &codec, &config.bond_denom).unwrap());
    QueryHandler::new(QueryPlugins::with_defaults(
        state.clone(),
        state.clone(),
        state,
        Arc::new(codec),
    ))
}

fn query(request: serde_json::Value) -> serde_json::Value {
    let out = handler().query_json(request.to_string().as_bytes()).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn fixture_balances() {
    let res = query(serde_json::json!({"ledger": {"all_balances": {"address": ALICE}}}));
    assert_eq!(
        res,
        serde_json::json!({"amount": [
            {"denom": "stake", "amount": "1000"},
            {"denom": "uatom", "amount": "123456789012345678901234567890"}
        ]})
    );
}

#[test]
fn fixture_delegations() {
    let res = query(serde_json::json!({"staking": {"delegations": {"delegator": ALICE}}}));
    let amounts: Vec<&str> = res["delegations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["amount"]["amount"].as_str().unwrap())
        .collect();
    assert_eq!(amounts, ["400", "299"]);
}

#[test]
fn fixture_contract_queries() {
    // base64 of {"count":{}}
    let res = query(serde_json::json!({
        "contract": {"smart": {"contract_addr": CONTRACT, "msg": "eyJjb3VudCI6e319"}}
    }));
    assert_eq!(res, serde_json::json!({"count": 7}));

    // base64 of "config"
    let res = query(serde_json::json!({
        "contract": {"raw": {"contract_addr": CONTRACT, "key": "Y29uZmln"}}
    }));
    assert_eq!(
        res,
        serde_json::json!([{"key": "636F6E666967", "val": "eyJvd25lciI6ImFsaWNlIn0="}])
    );
}

#[test]
fn fixture_rejects_validator_prefix_for_account() {
    let err = handler()
        .query_json(
            serde_json::json!({"ledger": {"all_balances": {
                "address": "cosmosvaloper1zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3yfrh7u"
            }}})
            .to_string()
            .as_bytes(),
        )
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::InvalidAddress);
}

#[test]
fn fixture_rejects_bech32m_checksum() {
    // 20 bytes of 0x11 under the bech32m checksum
    let err = handler()
        .query_json(
            serde_json::json!({"ledger": {"balance": {
                "address": "cosmos1zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyg35p8whd",
                "denom": "stake"
            }}})
            .to_string()
            .as_bytes(),
        )
        .unwrap_err();
    assert_eq!(err.kind(), QueryErrorKind::InvalidAddress);
}
