use basket::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    oracle::PriceObservation,
};
use soroban_sdk::{ contracttype, Address, Env, String };

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Admin = 1,
    Decimals = 2,
    Description = 3,
    LatestPrice = 4,
}

pub fn read_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).expect("Price Feed: Admin not set")
}

pub fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_decimals(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::Decimals).unwrap_or(0)
}

pub fn write_decimals(env: &Env, decimals: u32) {
    env.storage().instance().set(&DataKey::Decimals, &decimals);
}

pub fn read_description(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::Description)
        .unwrap_or(String::from_str(env, ""))
}

pub fn write_description(env: &Env, description: &String) {
    env.storage().instance().set(&DataKey::Description, description);
}

pub fn get_latest_price(env: &Env) -> Option<PriceObservation> {
    let key = DataKey::LatestPrice;
    let observation = env.storage().persistent().get(&key);
    if observation.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }

    observation
}

pub fn save_latest_price(env: &Env, observation: &PriceObservation) {
    let key = DataKey::LatestPrice;
    env.storage().persistent().set(&key, observation);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
