multiversx_sc::imports!();

use common_errors::{ERROR_AMOUNT_ZERO, ERROR_INSUFFICIENT_PAYMENT};

use crate::{storage, utils};

#[multiversx_sc::module]
pub trait CollateralModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Borrower tops up pool collateral. Converted to strategy shares and
    /// added to the base collateral; allowed any time before a terminal
    /// state, so a borrower can defend the ratio proactively.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(&self, amount: BigUint, from_savings: bool) {
        let caller = self.blockchain().get_caller();
        self.require_borrower(&caller);
        self.require_not_terminal();
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let shares = self.collect_collateral_shares(&caller, &amount, from_savings);
        self.base_liquidity_shares().update(|b| *b += &shares);

        self.collateral_deposited_event(&caller, &shares, &self.base_liquidity_shares().get());
    }

    /// Takes `amount` of collateral asset from the caller (payment or
    /// savings allowance) and parks it in the pool's savings entry under the
    /// pool strategy.
    ///
    /// # Returns
    /// - Strategy shares credited to the pool.
    fn collect_collateral_shares(
        &self,
        caller: &ManagedAddress,
        amount: &BigUint,
        from_savings: bool,
    ) -> BigUint {
        let constants = self.pool_constants().get();
        if from_savings {
            self.savings_pull(
                caller,
                &constants.collateral_asset,
                &constants.pool_savings_strategy,
                amount,
                true,
            )
        } else {
            let payment = self.collect_collateral_payment();
            require!(payment == *amount, ERROR_INSUFFICIENT_PAYMENT);
            self.savings_deposit(
                &constants.collateral_asset,
                amount,
                &constants.pool_savings_strategy,
            )
        }
    }

    /// Moves `shares` of pool collateral to the borrower's savings entry.
    fn return_collateral_to_borrower(&self, shares: &BigUint) {
        if *shares == BigUint::zero() {
            return;
        }
        let constants = self.pool_constants().get();
        self.savings_transfer_shares(
            &constants.collateral_asset,
            shares,
            &constants.pool_savings_strategy,
            &constants.borrower,
        );
    }
}
