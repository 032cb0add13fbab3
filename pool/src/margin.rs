multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_COLLATERAL_RATIO_BREACHED, ERROR_COLLATERAL_RATIO_HEALTHY,
    ERROR_INSUFFICIENT_PAYMENT, ERROR_INSUFFICIENT_SHARES, ERROR_MARGIN_CALL_ALREADY_OPEN,
    ERROR_MARGIN_CALL_EXPIRED, ERROR_MARGIN_CALL_NOT_EXPIRED, ERROR_NOT_ACTIVE,
    ERROR_NO_MARGIN_CALL, ERROR_ONLY_LENDER,
};
use common_structs::LoanStatus;

use crate::{collateral, lend, storage, utils};

/// Per-lender margin calls: a lender flags an under-collateralized pool, the
/// borrower gets a cure window to top up that lender's slice, and failing
/// that, anyone may buy the lender out at the reward discount.
#[multiversx_sc::module]
pub trait MarginModule:
    storage::StorageModule
    + utils::UtilsModule
    + collateral::CollateralModule
    + lend::LendModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Opens a margin call for the calling lender while the pool-wide
    /// collateral ratio sits below the ideal ratio. The lender's shares are
    /// transfer-frozen until the call resolves.
    #[endpoint(requestMarginCall)]
    fn request_margin_call(&self) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);

        let caller = self.blockchain().get_caller();
        require!(
            self.lender_shares(&caller).get() > BigUint::zero(),
            ERROR_ONLY_LENDER
        );
        require!(
            self.margin_call_end_time(&caller).get() == 0,
            ERROR_MARGIN_CALL_ALREADY_OPEN
        );

        let constants = self.pool_constants().get();
        require!(
            self.current_collateral_ratio() < constants.ideal_collateral_ratio,
            ERROR_COLLATERAL_RATIO_HEALTHY
        );

        let config = self.pool_config().get();
        let end_time = self.now() + config.margin_call_duration;
        self.margin_call_end_time(&caller).set(end_time);

        self.margin_call_requested_event(&caller, end_time);
    }

    /// Tops up collateral attributed to a margin-called lender. Anyone may
    /// pay (normally the borrower). The call closes as soon as the lender's
    /// effective ratio is back at or above the ideal ratio.
    #[payable("*")]
    #[endpoint(addCollateralInMarginCall)]
    fn add_collateral_in_margin_call(
        &self,
        lender: ManagedAddress,
        amount: BigUint,
        from_savings: bool,
    ) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);

        let end_time = self.margin_call_end_time(&lender).get();
        require!(end_time > 0, ERROR_NO_MARGIN_CALL);
        require!(self.now() <= end_time, ERROR_MARGIN_CALL_EXPIRED);
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        let shares = self.collect_collateral_shares(&caller, &amount, from_savings);

        self.extra_liquidity_shares().update(|e| *e += &shares);
        self.lender_extra_collateral(&lender).update(|e| *e += &shares);

        let constants = self.pool_constants().get();
        let resolved =
            self.lender_collateral_ratio(&lender) >= constants.ideal_collateral_ratio;
        if resolved {
            self.margin_call_end_time(&lender).clear();
        }

        self.margin_call_collateral_added_event(&lender, &shares, resolved);
    }

    /// After an uncured margin call, the caller pays the lender their share
    /// balance minus the liquidator reward discount and takes over the claim.
    /// Pool collateral and principal are untouched; the shares (with their
    /// repayment bookkeeping) move to the caller.
    #[payable("*")]
    #[endpoint(liquidateForLender)]
    fn liquidate_for_lender(&self, lender: ManagedAddress, from_savings: bool) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);

        let end_time = self.margin_call_end_time(&lender).get();
        require!(end_time > 0, ERROR_NO_MARGIN_CALL);
        require!(self.now() > end_time, ERROR_MARGIN_CALL_NOT_EXPIRED);

        let constants = self.pool_constants().get();
        require!(
            self.lender_collateral_ratio(&lender) < constants.ideal_collateral_ratio,
            ERROR_COLLATERAL_RATIO_BREACHED
        );

        let balance = self.lender_shares(&lender).get();
        require!(balance > BigUint::zero(), ERROR_INSUFFICIENT_SHARES);

        let config = self.pool_config().get();
        let required = self.after_fraction(&balance, &config.liquidator_reward_fraction);

        let caller = self.blockchain().get_caller();
        if from_savings {
            self.savings_pull(
                &caller,
                &constants.borrow_asset,
                &constants.pool_savings_strategy,
                &required,
                false,
            );
        } else {
            let payment = self.collect_borrow_asset_payment();
            require!(payment >= required, ERROR_INSUFFICIENT_PAYMENT);
            let excess = payment - &required;
            self.send_borrow_asset(&caller, &excess);
        }
        self.send_borrow_asset(&lender, &required);

        self.margin_call_end_time(&lender).clear();

        // the claim moves whole: shares, repayment counters and the
        // collateral attributed during the call
        self.move_lender_shares(&lender, &caller, &balance);
        let attributed = self.lender_extra_collateral(&lender).take();
        if attributed > BigUint::zero() {
            self.lender_extra_collateral(&caller)
                .update(|e| *e += &attributed);
        }

        self.lender_liquidated_event(&lender, &caller, &required);
        self.pool_shares_transferred_event(&lender, &caller, &balance);
    }
}
