extern crate std;

use basket::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{ Address as _, AuthorizedFunction, AuthorizedInvocation },
    vec,
    Address,
    Env,
    IntoVal,
    Symbol,
    Vec,
};
use test_case::test_case;

use super::setup::{
    default_fees,
    default_weights,
    deploy_feed,
    deploy_unit_token,
    deploy_vault,
    VaultTest,
    COLLATERAL_DECIMALS,
    MAX_PRICE_AGE,
    MIN_COLLATERAL_RATIO_BPS,
};
use crate::storage::{ BasketWeights, FeeConfig, Operation, PriceFeeds };

#[test]
fn initialize_stores_config_and_empty_state() {
    let test = VaultTest::setup();

    let config = test.vault.query_config();
    assert_eq!(config.collateral_token, test.collateral.address);
    assert_eq!(config.collateral_decimals, COLLATERAL_DECIMALS);
    assert_eq!(config.unit_token, test.unit_token.address);
    assert_eq!(config.feeds, test.feeds());
    assert_eq!(config.weights, default_weights());
    assert_eq!(config.fees, default_fees());
    assert_eq!(config.min_collateral_ratio_bps, MIN_COLLATERAL_RATIO_BPS);
    assert_eq!(config.max_price_age, MAX_PRICE_AGE);
    assert_eq!(config.paused_operations, Vec::new(&test.env));

    let state = test.vault.query_state();
    assert_eq!(state.aggregate_value, soroban_sdk::U256::from_u32(&test.env, 0));
    assert_eq!(state.total_issued, 0);
    assert_eq!(state.total_redeemed, 0);

    assert_eq!(test.vault.query_admin(), test.admin);
}

#[test]
fn initialize_only_once() {
    let test = VaultTest::setup();

    let result = test.vault.try_initialize(
        &test.admin,
        &test.collateral.address,
        &test.unit_token.address,
        &test.feeds(),
        &default_weights(),
        &default_fees(),
        &MIN_COLLATERAL_RATIO_BPS,
        &MAX_PRICE_AGE
    );
    assert_eq!(result, Err(Ok(ErrorCode::AlreadyInitialized)));
}

#[test]
fn queries_fail_before_initialize() {
    let env = Env::default();
    let vault = deploy_vault(&env);

    assert_eq!(vault.try_query_config(), Err(Ok(ErrorCode::NotInitialized)));
    assert_eq!(vault.try_query_state(), Err(Ok(ErrorCode::NotInitialized)));
    assert_eq!(vault.try_query_admin(), Err(Ok(ErrorCode::NotInitialized)));
}

#[test]
fn initialize_validates_parameters() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let vault = deploy_vault(&env);
    let unit_token = deploy_unit_token(&env, &vault.address);
    let collateral = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let feed = deploy_feed(&env, &admin, "XAU / USD", None).address;
    let feeds = PriceFeeds {
        gold: feed.clone(),
        bitcoin: feed.clone(),
        dollar: feed.clone(),
        collateral: feed,
    };

    let initialize = |weights: BasketWeights, fees: FeeConfig, ratio: u32| {
        vault.try_initialize(
            &admin,
            &collateral,
            &unit_token.address,
            &feeds,
            &weights,
            &fees,
            &ratio,
            &0
        )
    };

    let bad_weights = BasketWeights { gold_bps: 4_000, bitcoin_bps: 4_000, dollar_bps: 3_000 };
    assert_eq!(
        initialize(bad_weights, default_fees(), 15_000),
        Err(Ok(ErrorCode::InvalidComposition))
    );
    let bad_fees = FeeConfig { mint_fee_bps: 600, burn_fee_bps: 50 };
    assert_eq!(initialize(default_weights(), bad_fees, 15_000), Err(Ok(ErrorCode::FeeTooHigh)));
    assert_eq!(
        initialize(default_weights(), default_fees(), 9_000),
        Err(Ok(ErrorCode::CollateralRatioTooLow))
    );

    assert_eq!(initialize(default_weights(), default_fees(), 15_000), Ok(Ok(())));
}

#[test]
fn initialize_requires_standard_precision_units() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let vault = deploy_vault(&env);
    let collateral = env.register_stellar_asset_contract_v2(admin.clone()).address();
    // seven-decimal asset standing in for the unit ledger
    let unit_token = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let feed = deploy_feed(&env, &admin, "XAU / USD", None).address;
    let feeds = PriceFeeds {
        gold: feed.clone(),
        bitcoin: feed.clone(),
        dollar: feed.clone(),
        collateral: feed,
    };

    let result = vault.try_initialize(
        &admin,
        &collateral,
        &unit_token,
        &feeds,
        &default_weights(),
        &default_fees(),
        &15_000,
        &0
    );
    assert_eq!(result, Err(Ok(ErrorCode::InvalidDecimals)));
}

#[test]
fn update_fees_requires_admin_auth() {
    let test = VaultTest::setup();

    test.vault.update_fees(&test.admin, &100, &25);

    assert_eq!(
        test.env.auths(),
        std::vec![(
            test.admin.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    test.vault.address.clone(),
                    Symbol::new(&test.env, "update_fees"),
                    (&test.admin, 100_u32, 25_u32).into_val(&test.env),
                )),
                sub_invocations: std::vec![],
            },
        )]
    );
    assert_eq!(test.vault.query_config().fees, FeeConfig { mint_fee_bps: 100, burn_fee_bps: 25 });
}

#[test_case(600, 50; "mint fee over maximum")]
#[test_case(50, 501; "burn fee over maximum")]
fn update_fees_rejects_high_fees(mint_fee_bps: u32, burn_fee_bps: u32) {
    let test = VaultTest::setup();

    assert_eq!(
        test.vault.try_update_fees(&test.admin, &mint_fee_bps, &burn_fee_bps),
        Err(Ok(ErrorCode::FeeTooHigh))
    );
    assert_eq!(test.vault.query_config().fees, default_fees());
}

#[test]
fn update_collateral_ratio() {
    let test = VaultTest::setup();

    assert_eq!(
        test.vault.try_update_collateral_ratio(&test.admin, &9_000),
        Err(Ok(ErrorCode::CollateralRatioTooLow))
    );

    test.vault.update_collateral_ratio(&test.admin, &10_000);
    assert_eq!(test.vault.query_config().min_collateral_ratio_bps, 10_000);
}

#[test]
fn update_basket_weights() {
    let test = VaultTest::setup();

    assert_eq!(
        test.vault.try_update_basket_weights(&test.admin, &4_000, &4_000, &3_000),
        Err(Ok(ErrorCode::InvalidComposition))
    );
    assert_eq!(test.vault.query_config().weights, default_weights());

    test.vault.update_basket_weights(&test.admin, &4_000, &4_000, &2_000);
    assert_eq!(
        test.vault.query_config().weights,
        BasketWeights { gold_bps: 4_000, bitcoin_bps: 4_000, dollar_bps: 2_000 }
    );
}

#[test]
fn admin_operations_reject_strangers() {
    let test = VaultTest::setup();
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.vault.try_update_basket_weights(&stranger, &10_000, &0, &0),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(test.vault.try_update_fees(&stranger, &0, &0), Err(Ok(ErrorCode::NotAuthorized)));
    assert_eq!(
        test.vault.try_update_collateral_ratio(&stranger, &20_000),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.vault.try_update_paused_operations(
            &stranger,
            &vec![&test.env, Operation::Issue],
            &Vec::new(&test.env)
        ),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.vault.try_update_price_feeds(&stranger, &test.feeds()),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.vault.try_update_max_price_age(&stranger, &0),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    assert_eq!(
        test.vault.try_set_admin(&stranger, &stranger),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

#[test]
fn update_paused_operations_adds_and_removes() {
    let test = VaultTest::setup();
    let env = &test.env;

    test.vault.update_paused_operations(
        &test.admin,
        &vec![env, Operation::Issue, Operation::Redeem, Operation::Issue],
        &Vec::new(env)
    );
    assert_eq!(
        test.vault.query_config().paused_operations,
        vec![env, Operation::Issue, Operation::Redeem]
    );

    test.vault.update_paused_operations(
        &test.admin,
        &Vec::new(env),
        &vec![env, Operation::Issue]
    );
    assert_eq!(test.vault.query_config().paused_operations, vec![env, Operation::Redeem]);
}

#[test]
fn update_price_feeds_and_age() {
    let test = VaultTest::setup();
    let replacement = deploy_feed(&test.env, &test.admin, "XAU / USD", Some(2_100 * 100_000_000));

    let mut feeds = test.feeds();
    feeds.gold = replacement.address.clone();
    test.vault.update_price_feeds(&test.admin, &feeds);
    test.vault.update_max_price_age(&test.admin, &60);

    let config = test.vault.query_config();
    assert_eq!(config.feeds.gold, replacement.address);
    assert_eq!(config.max_price_age, 60);
}

#[test]
fn set_admin_hands_over_control() {
    let test = VaultTest::setup();
    let new_admin = Address::generate(&test.env);

    test.vault.set_admin(&test.admin, &new_admin);
    assert_eq!(test.vault.query_admin(), new_admin);

    assert_eq!(test.vault.try_update_fees(&test.admin, &0, &0), Err(Ok(ErrorCode::NotAuthorized)));
    test.vault.update_fees(&new_admin, &0, &0);
    assert_eq!(test.vault.query_config().fees, FeeConfig { mint_fee_bps: 0, burn_fee_bps: 0 });
}
