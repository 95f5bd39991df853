use basket::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address, Vec, U256 };

use super::setup::{ FreezableTokenClient, VaultTest, ONE_UNIT, ONE_XLM };
use crate::storage::Operation;

fn dollars(test: &VaultTest, amount: u128) -> U256 {
    U256::from_u128(&test.env, amount).mul(&U256::from_u128(&test.env, 10u128.pow(27)))
}

#[test]
fn first_issue_prices_units_at_one_dollar() {
    let test = VaultTest::setup();
    let user = test.user_with_collateral(ONE_XLM);

    let units = test.vault.issue(&user, &ONE_XLM);

    // $4500 less the 0.5% mint fee
    assert_eq!(units, 4_477 * ONE_UNIT + ONE_UNIT / 2);
    assert_eq!(test.unit_token.balance(&user), units);
    assert_eq!(test.unit_token.total_supply(), units);
    assert_eq!(test.collateral.balance(&user), 0);
    assert_eq!(test.collateral.balance(&test.vault.address), ONE_XLM);

    let state = test.vault.query_state();
    assert_eq!(state.aggregate_value, dollars(&test, 44_775).div(&U256::from_u32(&test.env, 10)));
    assert_eq!(state.total_issued, units);
    assert_eq!(state.total_redeemed, 0);
}

#[test]
fn later_issues_use_value_per_unit() {
    let test = VaultTest::setup();
    let first = test.user_with_collateral(ONE_XLM);
    let second = test.user_with_collateral(2 * ONE_XLM);

    let first_units = test.vault.issue(&first, &ONE_XLM);

    // value per unit is still exactly one dollar
    assert_eq!(
        test.vault.query_value_per_unit(),
        U256::from_u128(&test.env, 10u128.pow(27))
    );

    // collateral doubles in price: second deposit buys four times the units
    test.collateral_feed.set_price(&(9_000 * 100_000_000));
    let second_units = test.vault.issue(&second, &(2 * ONE_XLM));
    assert_eq!(second_units, 4 * first_units);

    assert_eq!(test.unit_token.total_supply(), first_units + second_units);
    assert_eq!(test.vault.query_state().total_issued, first_units + second_units);
    assert_eq!(test.collateral.balance(&test.vault.address), 3 * ONE_XLM);
}

#[test]
fn issue_rejects_non_positive_collateral() {
    let test = VaultTest::setup();
    let user = test.user_with_collateral(ONE_XLM);

    assert_eq!(test.vault.try_issue(&user, &0), Err(Ok(ErrorCode::ZeroCollateral)));
    assert_eq!(test.vault.try_issue(&user, &-1), Err(Ok(ErrorCode::ZeroCollateral)));
    assert_eq!(test.unit_token.total_supply(), 0);
}

#[test]
fn issue_fails_without_collateral_to_pull() {
    let test = VaultTest::setup();
    let user = Address::generate(&test.env);

    assert_eq!(test.vault.try_issue(&user, &ONE_XLM), Err(Ok(ErrorCode::TransferFailed)));
    assert_eq!(test.unit_token.balance(&user), 0);
    assert_eq!(test.unit_token.total_supply(), 0);
    assert_eq!(test.vault.query_state().aggregate_value, U256::from_u32(&test.env, 0));
}

#[test]
fn failed_collateral_transfer_rolls_back_issue() {
    let test = VaultTest::setup_with_freezable_collateral();
    let user = test.user_with_collateral(ONE_XLM);
    FreezableTokenClient::new(&test.env, &test.collateral.address).set_frozen(&true);

    assert_eq!(test.vault.try_issue(&user, &ONE_XLM), Err(Ok(ErrorCode::TransferFailed)));

    assert_eq!(test.unit_token.balance(&user), 0);
    assert_eq!(test.unit_token.total_supply(), 0);
    assert_eq!(test.collateral.balance(&user), ONE_XLM);
    let state = test.vault.query_state();
    assert_eq!(state.aggregate_value, U256::from_u32(&test.env, 0));
    assert_eq!(state.total_issued, 0);
}

#[test]
fn issue_rejects_heavy_rounding_loss() {
    let test = VaultTest::setup();
    let first = test.user_with_collateral(ONE_XLM);
    let second = test.user_with_collateral(2 * ONE_XLM);

    // leave a single raw unit backed by the whole aggregate
    let units = test.vault.issue(&first, &ONE_XLM);
    test.unit_token.burn(&first, &(units - 1));
    assert_eq!(test.unit_token.total_supply(), 1);

    assert_eq!(
        test.vault.try_issue(&second, &(ONE_XLM + ONE_XLM / 2)),
        Err(Ok(ErrorCode::PrecisionLoss))
    );
    assert_eq!(test.collateral.balance(&second), 2 * ONE_XLM);
}

#[test]
fn paused_issue() {
    let test = VaultTest::setup();
    let user = test.user_with_collateral(ONE_XLM);

    test.vault.update_paused_operations(
        &test.admin,
        &vec![&test.env, Operation::Issue],
        &Vec::new(&test.env)
    );
    assert_eq!(test.vault.try_issue(&user, &ONE_XLM), Err(Ok(ErrorCode::OperationPaused)));

    test.vault.update_paused_operations(
        &test.admin,
        &Vec::new(&test.env),
        &vec![&test.env, Operation::Issue]
    );
    assert_eq!(test.vault.issue(&user, &ONE_XLM), 4_477 * ONE_UNIT + ONE_UNIT / 2);
}

#[test]
fn issue_fails_on_unavailable_collateral_price() {
    let test = VaultTest::setup();
    let user = test.user_with_collateral(ONE_XLM);
    let silent = super::setup::deploy_feed(&test.env, &test.admin, "XLM / USD", None);

    let mut feeds = test.feeds();
    feeds.collateral = silent.address;
    test.vault.update_price_feeds(&test.admin, &feeds);

    assert_eq!(test.vault.try_issue(&user, &ONE_XLM), Err(Ok(ErrorCode::OracleUnavailable)));
}

#[test]
fn issue_fails_on_negative_collateral_price() {
    let test = VaultTest::setup();
    let user = test.user_with_collateral(ONE_XLM);

    test.collateral_feed.set_price(&-1);

    assert_eq!(test.vault.try_issue(&user, &ONE_XLM), Err(Ok(ErrorCode::InvalidPrice)));
}
