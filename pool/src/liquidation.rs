multiversx_sc::imports!();

use common_constants::{DUST_SHARE_UNITS, SECONDS_PER_YEAR};
use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_INSUFFICIENT_PAYMENT, ERROR_NOT_ACTIVE, ERROR_NOT_CANCELLED,
    ERROR_NOT_IN_COLLECTION, ERROR_NOT_LIQUIDABLE, ERROR_ONLY_BORROWER,
    ERROR_PENALTY_ALREADY_LIQUIDATED,
};
use common_structs::LoanStatus;

use crate::{collateral, repayments, storage, utils};

/// Terminal transitions: cancellation (with the time-based penalty), the
/// cancel-penalty auction, default liquidation and the owner's emergency
/// stop. Each one is mutually exclusive with the others through the status
/// guard, and each freezes the pro-rata denominator before any share burns.
#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::StorageModule
    + utils::UtilsModule
    + collateral::CollateralModule
    + repayments::RepaymentsModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Cancels a pool that never reached Active. The borrower may cancel
    /// before the withdrawal deadline; once the deadline passes without a
    /// borrow withdrawal, anyone may. Cancels after `loan_start_time` pay a
    /// penalty carved out of the base collateral:
    /// `base * cancel_fraction * borrow_rate * elapsed / year / SCALE^2`,
    /// elapsed capped at the withdrawal deadline.
    #[endpoint(cancelPool)]
    fn cancel_pool(&self) {
        self.require_status(LoanStatus::Collection, ERROR_NOT_IN_COLLECTION);

        let constants = self.pool_constants().get();
        let now = self.now();
        let caller = self.blockchain().get_caller();
        if now <= constants.loan_withdrawal_deadline {
            require!(caller == constants.borrower, ERROR_ONLY_BORROWER);
        }

        let base = self.base_liquidity_shares().take();
        let extra = self.extra_liquidity_shares().take();

        let penalty_shares = if now > constants.loan_start_time {
            let elapsed = core::cmp::min(now, constants.loan_withdrawal_deadline)
                - constants.loan_start_time;
            let config = self.pool_config().get();
            let with_fraction = self.mul_scale(&base, &config.pool_cancel_penalty_fraction);
            let with_rate = self.mul_scale(&with_fraction, &constants.borrow_rate);
            let penalty = with_rate * BigUint::from(elapsed) / BigUint::from(SECONDS_PER_YEAR);
            self.min_biguint(penalty, base.clone())
        } else {
            BigUint::zero()
        };

        self.penalty_liquidity_shares().set(&penalty_shares);
        let returned = base + extra - &penalty_shares;
        self.return_collateral_to_borrower(&returned);

        // lenders are refunded from the contract balance from here on
        self.recall_lent_liquidity();
        self.snapshot_supply().set(&self.total_supply().get());
        self.loan_status().set(LoanStatus::Cancelled);

        self.pool_cancelled_event(&caller, &penalty_shares);
    }

    /// Single-shot auction of the reserved cancel penalty: the caller pays
    /// the penalty collateral's borrow-asset value minus the liquidator
    /// reward discount, and takes the collateral. Two share units stay
    /// behind as the rounding buffer. The proceeds become the pot lenders
    /// draw on in `withdrawLiquidity`.
    #[payable("*")]
    #[endpoint(liquidateCancelPenalty)]
    fn liquidate_cancel_penalty(&self, to_savings: bool, receive_liquidity_share: bool) {
        self.require_status(LoanStatus::Cancelled, ERROR_NOT_CANCELLED);
        require!(
            !self.cancel_penalty_liquidated().get(),
            ERROR_PENALTY_ALREADY_LIQUIDATED
        );

        let penalty_shares = self.penalty_liquidity_shares().get();
        let dust = BigUint::from(DUST_SHARE_UNITS);
        require!(penalty_shares > dust, ERROR_AMOUNT_ZERO);
        let claimable = &penalty_shares - &dust;

        let value = self.collateral_value_in_borrow_asset(&claimable);
        let config = self.pool_config().get();
        let required = self.after_fraction(&value, &config.liquidator_reward_fraction);

        let payment = self.collect_borrow_asset_payment();
        require!(payment >= required, ERROR_INSUFFICIENT_PAYMENT);

        let caller = self.blockchain().get_caller();
        let excess = payment - &required;
        self.send_borrow_asset(&caller, &excess);

        self.cancel_penalty_liquidated().set(true);
        self.penalty_liquidity_shares().set(&dust);
        self.penalty_liquidity_amount().set(&required);

        self.seize_collateral_to(&claimable, &caller, receive_liquidity_share, to_savings);

        self.cancel_penalty_liquidated_event(&caller, &required, &claimable);
    }

    /// Default liquidation of an Active pool whose current instalment ran
    /// past its grace period. The caller pays the seized collateral's value
    /// minus the reward discount and takes all collateral but the dust
    /// buffer; the pool moves to Defaulted and the payment becomes the
    /// lenders' pot.
    #[payable("*")]
    #[endpoint(liquidatePool)]
    fn liquidate_pool(&self, receive_liquidity_share: bool, to_savings: bool, from_savings: bool) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);
        require!(self.is_pool_liquidable(), ERROR_NOT_LIQUIDABLE);

        let collateral = self.base_liquidity_shares().take() + self.extra_liquidity_shares().take();
        let dust = BigUint::from(DUST_SHARE_UNITS);
        let seized = if collateral > dust {
            &collateral - &dust
        } else {
            BigUint::zero()
        };

        let value = self.collateral_value_in_borrow_asset(&seized);
        let config = self.pool_config().get();
        let constants = self.pool_constants().get();
        let required = self.after_fraction(&value, &config.liquidator_reward_fraction);

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

        self.penalty_liquidity_amount().set(&required);
        self.snapshot_supply().set(&self.total_supply().get());
        self.loan_status().set(LoanStatus::Defaulted);

        self.seize_collateral_to(&seized, &caller, receive_liquidity_share, to_savings);

        self.pool_liquidated_event(&caller, &required, &seized);
    }

    /// Owner-only emergency stop. Sweeps collateral and every borrow-asset
    /// token the pool holds to the owner and freezes the pool in Terminated.
    #[only_owner]
    #[endpoint(terminatePool)]
    fn terminate_pool(&self) {
        self.require_not_terminal();

        let owner = self.blockchain().get_owner_address();
        let constants = self.pool_constants().get();

        self.recall_lent_liquidity();

        let collateral =
            self.base_liquidity_shares().take() + self.extra_liquidity_shares().take();
        if collateral > BigUint::zero() {
            self.savings_transfer_shares(
                &constants.collateral_asset,
                &collateral,
                &constants.pool_savings_strategy,
                &owner,
            );
        }

        let balance = self
            .blockchain()
            .get_sc_balance(&constants.borrow_asset, 0);
        self.send_borrow_asset(&owner, &balance);

        self.snapshot_supply().set(&self.total_supply().get());
        self.loan_status().set(LoanStatus::Terminated);

        self.pool_terminated_event(&owner);
    }
}
