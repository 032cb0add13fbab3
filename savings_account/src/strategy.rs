multiversx_sc::imports!();

use common_errors::ERROR_STRATEGY_NOT_APPROVED;
use common_proxies::proxy_yield_strategy;

use crate::storage;

/// Thin wrappers around the yield strategy port. A failing strategy call
/// panics and reverts the caller's whole operation, which is the intended
/// all-or-nothing behavior for external dependency failures.
#[multiversx_sc::module]
pub trait StrategyModule: storage::StorageModule {
    fn require_approved_strategy(&self, strategy: &ManagedAddress) {
        require!(
            self.approved_strategies().contains(strategy),
            ERROR_STRATEGY_NOT_APPROVED
        );
    }

    fn deposit_into_strategy(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_yield_strategy::YieldStrategyProxy)
            .deposit_and_get_shares()
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Burns strategy shares; the strategy sends the underlying tokens back
    /// to this contract during the call.
    fn withdraw_from_strategy(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_yield_strategy::YieldStrategyProxy)
            .withdraw_shares(asset, shares)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn strategy_tokens_to_shares(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_yield_strategy::YieldStrategyProxy)
            .tokens_to_shares(asset, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn strategy_shares_to_tokens(
        &self,
        strategy: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
    ) -> BigUint {
        self.tx()
            .to(strategy)
            .typed(proxy_yield_strategy::YieldStrategyProxy)
            .shares_to_tokens(asset, shares)
            .returns(ReturnsResult)
            .sync_call()
    }
}
