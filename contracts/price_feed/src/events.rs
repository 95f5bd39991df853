use soroban_sdk::{ Address, Env, Symbol };

pub struct PriceFeedEvents {}

impl PriceFeedEvents {
    /// Emitted when the admin publishes a new answer
    ///
    /// - topics - `["price", admin: Address]`
    /// - data - `[price: i128, timestamp: u64]`
    pub fn price(env: &Env, admin: Address, price: i128, timestamp: u64) {
        let topics = (Symbol::new(env, "price"), admin);
        env.events().publish(topics, (price, timestamp));
    }

    /// Emitted when the feed changes hands
    ///
    /// - topics - `["set_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn set_admin(env: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(env, "set_admin"), admin);
        env.events().publish(topics, new_admin);
    }
}
