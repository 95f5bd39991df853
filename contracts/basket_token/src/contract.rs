use basket::constants::{
    INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
    STANDARD_PRECISION_DECIMALS,
};
use soroban_sdk::token::{ self, Interface as _ };
use soroban_sdk::{ contract, contractimpl, contractmeta, log, panic_with_error, Address, Env, String };
use soroban_token_sdk::{ metadata::TokenMetadata, TokenUtils };

use crate::{
    errors::TokenError,
    storage::{
        adjust_total_supply,
        credit,
        debit,
        get_admin,
        get_allowance,
        get_balance,
        get_total_supply,
        save_admin,
        save_allowance,
        spend_allowance,
        Allowance,
    },
};

contractmeta!(key = "Description", val = "Unit ledger for a basket-pegged token");

#[contract]
pub struct BasketToken;

fn check_amount(env: &Env, amount: i128) {
    if amount < 0 {
        log!(env, "Basket Token: negative amount", amount);
        panic_with_error!(env, TokenError::NegativeAmount);
    }
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

#[contractimpl]
impl BasketToken {
    pub fn __constructor(env: Env, admin: Address, decimal: u32, name: String, symbol: String) {
        if decimal > STANDARD_PRECISION_DECIMALS {
            log!(&env, "Basket Token: Constructor: decimals too large", decimal);
            panic_with_error!(&env, TokenError::InvalidDecimals);
        }

        save_admin(&env, &admin);
        TokenUtils::new(&env).metadata().set_metadata(&TokenMetadata { decimal, name, symbol });
    }

    // ################################################################
    //                             ADMIN
    // ################################################################

    pub fn mint(env: Env, to: Address, amount: i128) {
        let admin = get_admin(&env);
        admin.require_auth();
        check_amount(&env, amount);

        credit(&env, &to, amount);
        adjust_total_supply(&env, amount);

        TokenUtils::new(&env).events().mint(admin, to, amount);
    }

    /// Burn `amount` from `from` without its consent. The vault uses this on redemption.
    pub fn clawback(env: Env, from: Address, amount: i128) {
        let admin = get_admin(&env);
        admin.require_auth();
        check_amount(&env, amount);

        debit(&env, &from, amount);
        adjust_total_supply(&env, -amount);

        TokenUtils::new(&env).events().clawback(admin, from, amount);
    }

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin = get_admin(&env);
        admin.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        save_admin(&env, &new_admin);

        TokenUtils::new(&env).events().set_admin(admin, new_admin);
    }

    // ################################################################
    //                             QUERIES
    // ################################################################

    pub fn admin(env: Env) -> Address {
        get_admin(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }
}

#[contractimpl]
impl token::Interface for BasketToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender).amount
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_amount(&env, amount);

        save_allowance(&env, &from, &spender, &Allowance { amount, expiration_ledger });

        TokenUtils::new(&env).events().approve(from, spender, amount, expiration_ledger);
    }

    fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_amount(&env, amount);

        debit(&env, &from, amount);
        credit(&env, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_amount(&env, amount);

        spend_allowance(&env, &from, &spender, amount);
        debit(&env, &from, amount);
        credit(&env, &to, amount);

        TokenUtils::new(&env).events().transfer(from, to, amount);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_amount(&env, amount);

        debit(&env, &from, amount);
        adjust_total_supply(&env, -amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_amount(&env, amount);

        spend_allowance(&env, &from, &spender, amount);
        debit(&env, &from, amount);
        adjust_total_supply(&env, -amount);

        TokenUtils::new(&env).events().burn(from, amount);
    }

    fn decimals(env: Env) -> u32 {
        TokenUtils::new(&env).metadata().get_metadata().decimal
    }

    fn name(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().name
    }

    fn symbol(env: Env) -> String {
        TokenUtils::new(&env).metadata().get_metadata().symbol
    }
}
