use basket::constants::{ BALANCE_BUMP_AMOUNT, BALANCE_LIFETIME_THRESHOLD };
use soroban_sdk::{ contracttype, log, panic_with_error, Address, Env };

use crate::errors::TokenError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    TotalSupply,
    Balance(Address),
    /// (owner, spender)
    Allowance(Address, Address),
}

/// Spendable amount granted by an owner, live until `expiration_ledger`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Allowance {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ################################################################
//                             ADMIN
// ################################################################

pub fn get_admin(env: &Env) -> Address {
    match env.storage().instance().get(&DataKey::Admin) {
        Some(admin) => admin,
        None => panic!("Basket Token: Admin not set"),
    }
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

// ################################################################
//                            BALANCES
// ################################################################

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    match env.storage().persistent().get::<DataKey, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

fn save_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn credit(env: &Env, id: &Address, amount: i128) {
    let Some(balance) = get_balance(env, id).checked_add(amount) else {
        panic_with_error!(env, TokenError::Overflow);
    };
    save_balance(env, id, balance);
}

pub fn debit(env: &Env, id: &Address, amount: i128) {
    let balance = get_balance(env, id);
    if balance < amount {
        log!(env, "Basket Token: balance below debit", balance, amount);
        panic_with_error!(env, TokenError::InsufficientBalance);
    }
    save_balance(env, id, balance - amount);
}

// ################################################################
//                          TOTAL SUPPLY
// ################################################################

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

/// Apply a signed change to the outstanding supply
pub fn adjust_total_supply(env: &Env, delta: i128) {
    let supply = match get_total_supply(env).checked_add(delta) {
        Some(supply) if supply >= 0 => supply,
        _ => panic_with_error!(env, TokenError::Overflow),
    };
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

// ################################################################
//                           ALLOWANCES
// ################################################################

/// Current allowance; expired allowances read as zero
pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> Allowance {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    match env.storage().temporary().get::<DataKey, Allowance>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => Allowance { amount: 0, expiration_ledger: allowance.expiration_ledger },
        None => Allowance { amount: 0, expiration_ledger: 0 },
    }
}

pub fn save_allowance(env: &Env, owner: &Address, spender: &Address, allowance: &Allowance) {
    let sequence = env.ledger().sequence();
    if allowance.amount > 0 && allowance.expiration_ledger < sequence {
        log!(env, "Basket Token: allowance expires before current ledger", sequence);
        panic_with_error!(env, TokenError::InvalidExpiration);
    }

    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance.expiration_ledger - sequence;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let mut allowance = get_allowance(env, owner, spender);
    if allowance.amount < amount {
        log!(env, "Basket Token: allowance below spend", allowance.amount, amount);
        panic_with_error!(env, TokenError::InsufficientAllowance);
    }
    if amount > 0 {
        allowance.amount -= amount;
        save_allowance(env, owner, spender, &allowance);
    }
}
