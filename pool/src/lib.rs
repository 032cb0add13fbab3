#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod collateral;
pub mod extension;
pub mod lend;
pub mod liquidation;
pub mod margin;
pub mod repayments;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_structs::*;

use common_constants::{MAX_REPAYMENT_INTERVALS, SCALE};
use common_errors::{ERROR_INVALID_DURATION, ERROR_INVALID_FRACTION, ERROR_INVALID_INTERVALS};

/// A single borrow/lend pool: lenders collect principal during the
/// collection window, the borrower draws it against collateral, repays in
/// instalments and either closes cleanly or is liquidated. One contract
/// instance per pool; the factory deploying instances lives outside this
/// crate.
#[multiversx_sc::contract]
pub trait BorrowPool:
    storage::StorageModule
    + utils::UtilsModule
    + lend::LendModule
    + collateral::CollateralModule
    + margin::MarginModule
    + liquidation::LiquidationModule
    + repayments::RepaymentsModule
    + extension::ExtensionModule
    + views::ViewModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Fixes the pool terms. `loan_start_time` is the end of the collection
    /// window; the borrow withdrawal must happen within
    /// `loan_withdrawal_duration` after it.
    #[allow(clippy::too_many_arguments)]
    #[init]
    fn init(
        &self,
        borrower: ManagedAddress,
        borrow_asset: EgldOrEsdtTokenIdentifier,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        pool_savings_strategy: ManagedAddress,
        pool_size: BigUint,
        min_borrow_fraction: BigUint,
        borrow_rate: BigUint,
        ideal_collateral_ratio: BigUint,
        collection_period: u64,
        loan_withdrawal_duration: u64,
        repayment_interval: u64,
        no_of_repayment_intervals: u64,
        savings_account: ManagedAddress,
        price_oracle: ManagedAddress,
        config: PoolConfig<Self::Api>,
    ) {
        require!(
            collection_period > 0 && loan_withdrawal_duration > 0 && repayment_interval > 0,
            ERROR_INVALID_DURATION
        );
        require!(
            no_of_repayment_intervals > 0 && no_of_repayment_intervals <= MAX_REPAYMENT_INTERVALS,
            ERROR_INVALID_INTERVALS
        );

        let scale = BigUint::from(SCALE);
        require!(min_borrow_fraction <= scale, ERROR_INVALID_FRACTION);
        require!(config.protocol_fee_fraction <= scale, ERROR_INVALID_FRACTION);
        require!(
            config.pool_cancel_penalty_fraction <= scale,
            ERROR_INVALID_FRACTION
        );
        require!(
            config.liquidator_reward_fraction <= scale,
            ERROR_INVALID_FRACTION
        );
        require!(config.grace_period_fraction <= scale, ERROR_INVALID_FRACTION);
        require!(config.voting_pass_ratio <= scale, ERROR_INVALID_FRACTION);

        let now = self.blockchain().get_block_timestamp();
        let loan_start_time = now + collection_period;
        let loan_withdrawal_deadline = loan_start_time + loan_withdrawal_duration;

        self.pool_constants().set(&PoolConstants {
            borrower,
            borrow_asset,
            collateral_asset,
            pool_savings_strategy,
            pool_size,
            min_borrow_fraction,
            borrow_rate,
            ideal_collateral_ratio,
            collection_period,
            loan_withdrawal_duration,
            repayment_interval,
            no_of_repayment_intervals,
            loan_start_time,
            loan_withdrawal_deadline,
        });
        self.pool_config().set(&config);
        self.savings_account().set(&savings_account);
        self.price_oracle().set(&price_oracle);
        self.loan_status().set(LoanStatus::Collection);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
