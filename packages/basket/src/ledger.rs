use soroban_sdk::{ contractclient, Address, Env };

/// The fungible unit ledger the vault issues into. The vault must be its admin.
#[contractclient(name = "UnitLedgerClient")]
pub trait UnitLedgerInterface {
    fn total_supply(env: Env) -> i128;

    fn balance(env: Env, id: Address) -> i128;

    fn mint(env: Env, to: Address, amount: i128);

    fn clawback(env: Env, from: Address, amount: i128);
}
