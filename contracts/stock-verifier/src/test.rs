#![cfg(test)]
use super::*;
use soroban_sdk::testutils::{MockAuth, MockAuthInvoke};
use soroban_sdk::{Env, IntoVal, String};
use stock_token::StockError;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn setup() -> (StockFixture, VerifierConfig) {
    init_tracing();
    let config = VerifierConfig::default();
    let fixture = StockFixture::deploy_fresh(&config.deploy);
    (fixture, config)
}

// ════════════════════════════════════════════════════════════════════
//  Fixture
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_fixture_deploys_with_operator_as_owner() {
    let (fixture, _config) = setup();
    assert_eq!(fixture.client.owner(), fixture.accounts.operator.address);
    assert_eq!(fixture.client.name(), String::from_str(&fixture.env, "someStock"));
    assert_eq!(fixture.client.symbol(), String::from_str(&fixture.env, "SST"));
}

#[test]
fn test_accounts_are_distinct() {
    let env = Env::default();
    let accounts = Accounts::generate(&env);
    let [operator, dummy, third] = accounts.all();
    assert_ne!(operator.address, dummy.address);
    assert_ne!(operator.address, third.address);
    assert_ne!(dummy.address, third.address);
    assert_eq!(
        accounts.all().map(|a| a.label),
        ["operator", "dummy", "acc3"]
    );
}

#[test]
fn test_ledger_state_tracks_issuance() {
    let (fixture, _config) = setup();
    let operator = &fixture.accounts.operator.address;
    fixture.client.issue(operator, &42);

    let state = fixture.ledger_state();
    assert_eq!(state.total_supply, 42);
    assert_eq!(state.balances, [("operator", 42), ("dummy", 0), ("acc3", 0)]);
    assert_eq!(state.to_string(), "supply=42 operator=42 dummy=0 acc3=0");
}

#[test]
fn test_two_fixtures_do_not_share_state() {
    let (first, config) = setup();
    let second = StockFixture::deploy_fresh(&config.deploy);

    first.client.issue(&first.accounts.operator.address, &5000);
    assert_eq!(first.client.total_supply(), 5000);
    assert_eq!(second.client.total_supply(), 0);
}

// ════════════════════════════════════════════════════════════════════
//  Failure-path suite
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_failure_path_runs_all_steps_in_order() {
    let (fixture, config) = setup();
    let report = FailurePathVerifier::new(&fixture, &config).run().unwrap();

    assert_eq!(report.suite, "failure-path");
    assert_eq!(
        report.step_names(),
        [
            "issue from non-owner",
            "transfer to unidentified operator",
            "transfer to unidentified dummy",
            "transfer to unidentified acc3",
            "issue base supply",
            "overdraft to identified dummy",
            "overdraft to identified acc3",
            "transfer while paused",
            "schedule snapshot from non-holder",
        ]
    );
}

#[test]
fn test_failure_path_leaves_known_state() {
    let (fixture, config) = setup();
    FailurePathVerifier::new(&fixture, &config).run().unwrap();

    let accounts = &fixture.accounts;
    let client = &fixture.client;
    assert_eq!(client.total_supply(), 5000);
    assert_eq!(client.balance_of(&accounts.operator.address), 5000);
    assert_eq!(client.balance_of(&accounts.dummy.address), 0);
    assert_eq!(client.identity_of(&accounts.dummy.address), 0x9876_5432_1098_7654);
    assert_eq!(client.identity_of(&accounts.third.address), 0x1234_5678_9012_3456);
    assert_eq!(client.identity_of(&accounts.operator.address), 0);
    assert!(client.is_paused());
    assert_eq!(client.scheduled_snapshots().len(), 0);
}

#[test]
fn test_failure_path_state_is_reusable_after_unpause() {
    let (fixture, config) = setup();
    FailurePathVerifier::new(&fixture, &config).run().unwrap();

    let accounts = &fixture.accounts;
    fixture.client.unpause(&accounts.operator.address);
    fixture
        .client
        .transfer(&accounts.operator.address, &accounts.dummy.address, &1);
    assert_eq!(fixture.client.balance_of(&accounts.dummy.address), 1);
}

#[test]
fn test_failure_path_detects_issue_by_former_non_owner() {
    let (fixture, config) = setup();
    let accounts = &fixture.accounts;
    fixture
        .client
        .transfer_ownership(&accounts.operator.address, &accounts.dummy.address);

    let err = FailurePathVerifier::new(&fixture, &config).run().unwrap_err();
    assert!(matches!(
        err,
        VerifyError::UnexpectedSuccess { ref step, expected }
            if step == "issue from non-owner" && expected == "Ownable: caller is not the owner"
    ));
}

#[test]
fn test_failure_path_detects_preregistered_identity() {
    let (fixture, config) = setup();
    let accounts = &fixture.accounts;
    fixture
        .client
        .set_identity(&accounts.operator.address, &accounts.dummy.address, &7);

    let err = FailurePathVerifier::new(&fixture, &config).run().unwrap_err();
    match err {
        VerifyError::WrongRevert { step, expected, actual } => {
            assert_eq!(step, "transfer to unidentified dummy");
            assert_eq!(expected, "Receiver not identified");
            assert_eq!(actual, "0x54");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failure_path_detects_early_pause() {
    let (fixture, config) = setup();
    fixture.client.pause(&fixture.accounts.operator.address);

    let err = FailurePathVerifier::new(&fixture, &config).run().unwrap_err();
    assert_eq!(
        err.to_string(),
        "transfer to unidentified operator: expected revert \"Receiver not identified\" but got \"0x42\""
    );
}

#[test]
fn test_snapshot_step_detects_granted_role() {
    let (fixture, config) = setup();
    let accounts = &fixture.accounts;
    fixture
        .client
        .grant_snapshot_role(&accounts.operator.address, &accounts.dummy.address);

    let mut report = VerificationReport::new(failure_path::SUITE);
    let err = FailurePathVerifier::new(&fixture, &config)
        .schedule_snapshot_from_non_holder(&mut report)
        .unwrap_err();
    assert!(matches!(err, VerifyError::UnexpectedSuccess { .. }));
    assert!(report.is_empty());
}

#[test]
fn test_overdraft_step_needs_base_supply_below_overdraft() {
    let (fixture, config) = setup();
    let verifier = FailurePathVerifier::new(&fixture, &config);
    let mut report = VerificationReport::new(failure_path::SUITE);

    // Issued twice: 10_000 covers the 5001 transfer, which then succeeds.
    verifier.issue_base_supply(&mut report).unwrap();
    verifier.issue_base_supply(&mut report).unwrap();
    let err = verifier
        .overdraft_to_identified_receivers(&mut report)
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::UnexpectedSuccess { expected: "0x54", .. }
    ));
    assert_eq!(fixture.client.balance_of(&fixture.accounts.dummy.address), 5001);
}

#[test]
fn test_failure_path_rejects_invalid_config() {
    let (fixture, _config) = setup();
    let config = VerifierConfig {
        overdraft_amount: 5000,
        ..VerifierConfig::default()
    };
    let err = FailurePathVerifier::new(&fixture, &config).run().unwrap_err();
    assert!(matches!(err, VerifyError::Config(_)));
    // Nothing was sent to the contract.
    assert_eq!(fixture.client.total_supply(), 0);
}

// ════════════════════════════════════════════════════════════════════
//  Invariant suite
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_invariants_run_passes_on_fresh_instance() {
    let (fixture, config) = setup();
    let report = InvariantVerifier::new(&fixture, &config).run().unwrap();

    assert_eq!(
        report.step_names(),
        [
            "total supply",
            "owner",
            "pauser",
            "snapshotter",
            "contact information",
            "name",
            "symbol",
            "issue property at 0",
            "issue property at 100",
        ]
    );
    assert_eq!(
        report.steps[4].detail,
        "(jeremiah, www.MyURL.ch)"
    );
}

#[test]
fn test_invariants_detect_nonzero_supply() {
    let (fixture, config) = setup();
    fixture.client.issue(&fixture.accounts.operator.address, &1);

    let err = InvariantVerifier::new(&fixture, &config)
        .verify_post_deployment()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "total supply: total supply mismatch: expected 0, got 1"
    );
}

#[test]
fn test_invariants_detect_moved_roles() {
    let (fixture, config) = setup();
    let accounts = &fixture.accounts;
    fixture
        .client
        .grant_pauser_role(&accounts.operator.address, &accounts.third.address);

    let err = InvariantVerifier::new(&fixture, &config)
        .verify_post_deployment()
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Mismatch { what: "pauser role holder", .. }
    ));
}

#[test]
fn test_invariants_detect_contact_order() {
    let (fixture, _config) = setup();
    let swapped = VerifierConfig {
        deploy: DeployArgs {
            url: "jeremiah",
            contact_name: "www.MyURL.ch",
            ..DeployArgs::default()
        },
        ..VerifierConfig::default()
    };

    let err = InvariantVerifier::new(&fixture, &swapped)
        .verify_post_deployment()
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Mismatch { what: "contact information", .. }
    ));
}

#[test]
fn test_invariants_detect_wrong_metadata() {
    let (fixture, _config) = setup();
    let renamed = VerifierConfig {
        deploy: DeployArgs {
            name: "otherStock",
            ..DeployArgs::default()
        },
        ..VerifierConfig::default()
    };
    let err = InvariantVerifier::new(&fixture, &renamed)
        .verify_post_deployment()
        .unwrap_err();
    assert!(matches!(err, VerifyError::Mismatch { what: "name", .. }));

    let resymboled = VerifierConfig {
        deploy: DeployArgs {
            symbol: "OST",
            ..DeployArgs::default()
        },
        ..VerifierConfig::default()
    };
    let err = InvariantVerifier::new(&fixture, &resymboled)
        .verify_post_deployment()
        .unwrap_err();
    assert!(matches!(
        err,
        VerifyError::Mismatch { ref step, what: "symbol", .. } if step == "symbol"
    ));
}

#[test]
fn test_suites_are_independent() {
    let (first, config) = setup();
    let second = StockFixture::deploy_fresh(&config.deploy);

    FailurePathVerifier::new(&first, &config).run().unwrap();
    InvariantVerifier::new(&second, &config).run().unwrap();
}

// ════════════════════════════════════════════════════════════════════
//  Outcome classification
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_from_try_classification() {
    let reverted: CallOutcome<()> = CallOutcome::from_try::<&str, &str>(Err(Ok(StockError::Paused)));
    assert_eq!(reverted, CallOutcome::Reverted(StockError::Paused));

    let ok: CallOutcome<i128> = CallOutcome::from_try::<&str, &str>(Ok(Ok(5)));
    assert_eq!(ok, CallOutcome::Success(5));

    let aborted: CallOutcome<()> = CallOutcome::from_try::<&str, &str>(Err(Err("auth")));
    assert_eq!(aborted, CallOutcome::Aborted("\"auth\"".to_string()));
}

#[test]
fn test_unsigned_owner_claim_is_aborted_not_reverted() {
    let (fixture, _config) = setup();
    let accounts = &fixture.accounts;
    let env = &fixture.env;

    // `dummy` signs a call that names the operator as caller.
    env.mock_auths(&[MockAuth {
        address: &accounts.dummy.address,
        invoke: &MockAuthInvoke {
            contract: &fixture.client.address,
            fn_name: "issue",
            args: (accounts.operator.address.clone(), 10_i128).into_val(env),
            sub_invokes: &[],
        },
    }]);
    let outcome = CallOutcome::from_try(
        fixture.client.try_issue(&accounts.operator.address, &10),
    );
    assert!(matches!(outcome, CallOutcome::Aborted(_)), "got {outcome:?}");

    let err = expect_revert("impersonated issue", outcome, StockError::NotOwner).unwrap_err();
    assert!(matches!(err, VerifyError::Aborted { .. }));

    env.mock_all_auths();
    assert_eq!(fixture.client.total_supply(), 0);
}

#[test]
fn test_expect_revert_reports_unexpected_outcomes() {
    assert!(expect_revert("s", CallOutcome::<()>::Reverted(StockError::NotOwner), StockError::NotOwner).is_ok());

    let err = expect_revert("s", CallOutcome::Success(()), StockError::NotAuthorized).unwrap_err();
    assert_eq!(
        err.to_string(),
        "s: expected revert \"not authorized\" but the call succeeded"
    );

    let err = expect_revert(
        "s",
        CallOutcome::<()>::Aborted("host".to_string()),
        StockError::Paused,
    )
    .unwrap_err();
    assert!(matches!(err, VerifyError::Aborted { .. }));
}

#[test]
fn test_expect_success_reports_revert_reason() {
    let err = expect_success("s", CallOutcome::<()>::Reverted(StockError::InsufficientBalance)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "s: expected success but the call reverted with \"0x54\""
    );
    assert_eq!(expect_success("s", CallOutcome::Success(3)).unwrap(), 3);
}
