//! End-to-end token ledger scenarios
//!
//! Drives the engine through full lifecycles against the in-memory host
//! context: initialize, mint, transfer, and the failure paths that must
//! leave state untouched.

use lib_chaincode::MemoryContext;
use lib_tokens::{IssuerPolicy, TokenContract, TokenError, TransferEvent, MINT_SOURCE};

const ISSUER: &str = "Org1MSP";

fn setup() -> (MemoryContext, TokenContract) {
    let ctx = MemoryContext::with_caller(ISSUER);
    let contract = TokenContract::new(IssuerPolicy::single(ISSUER));
    contract.initialize(&ctx, "TokenX", "TKX", "2").unwrap();
    (ctx, contract)
}

#[test]
fn full_lifecycle() {
    let (ctx, contract) = setup();

    // Fresh ledger: everything reads zero.
    assert_eq!(contract.balance_of(&ctx, "alice").unwrap(), 0);
    assert_eq!(contract.total_supply(&ctx).unwrap(), 0);

    // Mint 100 to alice.
    contract.claim(&ctx, 100, "alice").unwrap();
    assert_eq!(contract.balance_of(&ctx, "alice").unwrap(), 100);
    assert_eq!(contract.total_supply(&ctx).unwrap(), 100);

    // Move 40 to bob; supply unchanged.
    contract.transfer_from(&ctx, "alice", "bob", 40).unwrap();
    assert_eq!(contract.balance_of(&ctx, "alice").unwrap(), 60);
    assert_eq!(contract.balance_of(&ctx, "bob").unwrap(), 40);
    assert_eq!(contract.total_supply(&ctx).unwrap(), 100);

    // Overdraw fails and changes nothing.
    assert!(matches!(
        contract.transfer_from(&ctx, "alice", "bob", 1000),
        Err(TokenError::InsufficientFunds { .. })
    ));
    assert_eq!(contract.balance_of(&ctx, "alice").unwrap(), 60);
    assert_eq!(contract.balance_of(&ctx, "bob").unwrap(), 40);
}

#[test]
fn supply_is_sum_of_successful_claims() {
    let (ctx, contract) = setup();

    contract.claim(&ctx, 100, "alice").unwrap();
    contract.claim(&ctx, 250, "bob").unwrap();
    contract.claim(&ctx, 7, "alice").unwrap();

    // Failed claims contribute nothing.
    assert!(contract.claim(&ctx, 0, "carol").is_err());
    assert!(contract.claim(&ctx, -3, "carol").is_err());

    assert_eq!(contract.total_supply(&ctx).unwrap(), 357);
    assert_eq!(contract.balance_of(&ctx, "alice").unwrap(), 107);
    assert_eq!(contract.balance_of(&ctx, "bob").unwrap(), 250);
    assert_eq!(contract.balance_of(&ctx, "carol").unwrap(), 0);
}

#[test]
fn transfers_conserve_total_balance() {
    let (ctx, contract) = setup();
    contract.claim(&ctx, 500, "alice").unwrap();

    for value in [1, 99, 250] {
        contract.transfer_from(&ctx, "alice", "bob", value).unwrap();
        let total = contract.balance_of(&ctx, "alice").unwrap()
            + contract.balance_of(&ctx, "bob").unwrap();
        assert_eq!(total, 500);
    }
    assert_eq!(contract.total_supply(&ctx).unwrap(), 500);
}

#[test]
fn audit_log_records_mints_and_transfers_in_order() {
    let (ctx, contract) = setup();

    contract.claim(&ctx, 100, "alice").unwrap();
    contract.transfer_from(&ctx, "alice", "bob", 40).unwrap();
    contract.claim(&ctx, 5, "bob").unwrap();

    let log = contract.transactions();
    assert_eq!(
        log,
        vec![
            TransferEvent {
                from: MINT_SOURCE.to_string(),
                to: "alice".to_string(),
                value: 100,
            },
            TransferEvent {
                from: "alice".to_string(),
                to: "bob".to_string(),
                value: 40,
            },
            TransferEvent {
                from: MINT_SOURCE.to_string(),
                to: "bob".to_string(),
                value: 5,
            },
        ]
    );
}

#[test]
fn emitted_events_match_the_audit_log() {
    let (ctx, contract) = setup();

    contract.claim(&ctx, 100, "alice").unwrap();
    contract.transfer_from(&ctx, "alice", "bob", 40).unwrap();

    let events = ctx.events();
    let log = contract.transactions();
    assert_eq!(events.len(), log.len());

    for (emitted, recorded) in events.iter().zip(log.iter()) {
        assert_eq!(emitted.0, "Transfer");
        let parsed: TransferEvent = serde_json::from_slice(&emitted.1).unwrap();
        assert_eq!(&parsed, recorded);
    }
}

#[test]
fn audit_log_is_per_instance_not_per_ledger() {
    let (ctx, contract) = setup();
    contract.claim(&ctx, 100, "alice").unwrap();

    // A second engine over the same world state sees the balances but has
    // its own, empty audit log: the log is process-local by contract.
    let restarted = TokenContract::new(IssuerPolicy::single(ISSUER));
    assert_eq!(restarted.balance_of(&ctx, "alice").unwrap(), 100);
    assert!(restarted.transactions().is_empty());
}

#[test]
fn uninitialized_ledger_rejects_every_operation() {
    let ctx = MemoryContext::with_caller(ISSUER);
    let contract = TokenContract::new(IssuerPolicy::single(ISSUER));

    assert!(matches!(
        contract.claim(&ctx, 1, "alice"),
        Err(TokenError::NotInitialized)
    ));
    assert!(matches!(
        contract.transfer_from(&ctx, "alice", "bob", 1),
        Err(TokenError::NotInitialized)
    ));
    assert!(matches!(
        contract.balance_of(&ctx, "alice"),
        Err(TokenError::NotInitialized)
    ));
    assert!(matches!(
        contract.total_supply(&ctx),
        Err(TokenError::NotInitialized)
    ));
    assert!(matches!(
        contract.metadata(&ctx),
        Err(TokenError::NotInitialized)
    ));
}

#[test]
fn host_context_failures_surface_unchanged() {
    // A context with no bound identity models a host identity failure.
    let ctx = MemoryContext::new();
    let contract = TokenContract::new(IssuerPolicy::single(ISSUER));
    assert!(matches!(
        contract.initialize(&ctx, "TokenX", "TKX", "2"),
        Err(TokenError::Context(_))
    ));
}
