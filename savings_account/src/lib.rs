#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod ledger;
pub mod storage;
pub mod strategy;

use common_errors::{ERROR_STRATEGY_ALREADY_APPROVED, ERROR_STRATEGY_NOT_APPROVED};

/// Savings ledger: per-(account, asset, strategy) share balances, with all
/// share/token conversion delegated to the strategy contracts. Pools and
/// credit lines keep their collateral and idle liquidity here.
///
/// Pausing blocks new inflows (deposits and strategy switches); withdrawals
/// keep working so funds are never stranded.
#[multiversx_sc::contract]
pub trait SavingsAccount:
    storage::StorageModule
    + strategy::StrategyModule
    + ledger::LedgerModule
    + common_events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Registers a yield strategy. Only approved strategies can receive
    /// deposits; withdrawals from a de-listed strategy keep working so funds
    /// are never stranded.
    #[only_owner]
    #[endpoint(addStrategy)]
    fn add_strategy(&self, strategy: ManagedAddress) {
        require!(
            !self.approved_strategies().contains(&strategy),
            ERROR_STRATEGY_ALREADY_APPROVED
        );
        self.approved_strategies().insert(strategy);
    }

    #[only_owner]
    #[endpoint(removeStrategy)]
    fn remove_strategy(&self, strategy: ManagedAddress) {
        require!(
            self.approved_strategies().contains(&strategy),
            ERROR_STRATEGY_NOT_APPROVED
        );
        self.approved_strategies().swap_remove(&strategy);
    }
}
