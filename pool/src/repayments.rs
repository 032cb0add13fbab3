multiversx_sc::imports!();

use common_constants::SECONDS_PER_YEAR;
use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_INSUFFICIENT_PAYMENT, ERROR_LOAN_DEFAULTED, ERROR_NOT_ACTIVE,
    ERROR_PRINCIPAL_REPAY_MISMATCH, ERROR_REPAY_EXCEEDS_INTEREST,
};
use common_structs::LoanStatus;

use crate::{collateral, storage, utils};

/// Instalment interest and grace-penalty accounting.
///
/// The single piece of repayment state is `loan_duration_covered`: the
/// SCALE-scaled number of seconds of borrowing the borrower has paid interest
/// for. Everything else (current instalment, deadlines, amounts due) derives
/// from it, so partial repayments, prepayments and the extension all reduce
/// to moving this one cursor.
#[multiversx_sc::module]
pub trait RepaymentsModule:
    storage::StorageModule
    + utils::UtilsModule
    + collateral::CollateralModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Interest accrued per second on the outstanding principal, as a
    /// SCALE-scaled borrow-asset amount.
    fn interest_per_second(&self) -> BigUint {
        let constants = self.pool_constants().get();
        self.mul_div(
            &self.total_supply().get(),
            &constants.borrow_rate,
            &BigUint::from(SECONDS_PER_YEAR),
        )
    }

    fn repayment_interval_scaled(&self) -> BigUint {
        BigUint::from(self.pool_constants().get().repayment_interval) * self.scale()
    }

    /// 1-indexed instalment the loan is currently in, uncapped: one past the
    /// last interval once all interest is covered.
    #[view(getCurrentInstalmentInterval)]
    fn get_current_instalment_interval(&self) -> u64 {
        let covered = self.loan_duration_covered().get();
        let interval_scaled = self.repayment_interval_scaled();
        let intervals_covered = (covered / interval_scaled).to_u64().unwrap_or_default();
        intervals_covered + 1
    }

    fn capped_instalment_interval(&self) -> u64 {
        let constants = self.pool_constants().get();
        core::cmp::min(
            self.get_current_instalment_interval(),
            constants.no_of_repayment_intervals,
        )
    }

    /// Wall-clock deadline of instalment `interval`, shifted out by one
    /// repayment interval from the granted extension onwards.
    fn instalment_deadline(&self, interval: u64) -> u64 {
        let constants = self.pool_constants().get();
        let mut deadline = constants.loan_start_time + interval * constants.repayment_interval;
        if self.is_loan_extension_active().get()
            && interval >= self.extension_granted_interval().get()
        {
            deadline += constants.repayment_interval;
        }
        deadline
    }

    #[view(getNextInstalmentDeadline)]
    fn get_next_instalment_deadline(&self) -> u64 {
        self.instalment_deadline(self.capped_instalment_interval())
    }

    fn grace_period_seconds(&self) -> u64 {
        let constants = self.pool_constants().get();
        let config = self.pool_config().get();
        self.mul_scale(
            &BigUint::from(constants.repayment_interval),
            &config.grace_period_fraction,
        )
        .to_u64()
        .unwrap_or_default()
    }

    /// Interest owed for the current instalment only: what accrues between
    /// the covered cursor and the instalment's end.
    #[view(getInterestDueTillInstalmentDeadline)]
    fn get_interest_due_till_instalment_deadline(&self) -> BigUint {
        if self.loan_status().get() != LoanStatus::Active {
            return BigUint::zero();
        }
        let interval_end_scaled =
            BigUint::from(self.capped_instalment_interval()) * self.repayment_interval_scaled();
        self.interest_for_covered_span(&interval_end_scaled)
    }

    /// Total interest remaining over the life of the loan.
    #[view(getInterestLeft)]
    fn get_interest_left(&self) -> BigUint {
        if self.loan_status().get() != LoanStatus::Active {
            return BigUint::zero();
        }
        let constants = self.pool_constants().get();
        let total_scaled =
            BigUint::from(constants.no_of_repayment_intervals) * self.repayment_interval_scaled();
        self.interest_for_covered_span(&total_scaled)
    }

    /// Interest for the span between the covered cursor and `end_scaled`
    /// (SCALE-scaled seconds), in raw borrow-asset units.
    fn interest_for_covered_span(&self, end_scaled: &BigUint) -> BigUint {
        let covered = self.loan_duration_covered().get();
        if *end_scaled <= covered {
            return BigUint::zero();
        }
        let scale_squared = self.scale() * self.scale();
        self.mul_div(
            &self.interest_per_second(),
            &(end_scaled - &covered),
            &scale_squared,
        )
    }

    /// True once the current instalment's grace window has elapsed without
    /// the instalment's interest being covered.
    #[view(isPoolLiquidable)]
    fn is_pool_liquidable(&self) -> bool {
        if self.loan_status().get() != LoanStatus::Active {
            return false;
        }
        let deadline = self.get_next_instalment_deadline();
        self.now() > deadline + self.grace_period_seconds()
    }

    /// Pays interest. Within the grace window of a missed instalment the
    /// payment must also carry the grace penalty and clear that instalment's
    /// interest in full; prepaying future instalments is allowed. Principal
    /// is never accepted here.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);
        require!(!self.is_pool_liquidable(), ERROR_LOAN_DEFAULTED);

        let payment = self.collect_borrow_asset_payment();
        require!(payment > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let interval = self.capped_instalment_interval();
        let deadline = self.instalment_deadline(interval);
        let interest_due = self.get_interest_due_till_instalment_deadline();

        let (grace_penalty, interest_part) = if self.now() > deadline {
            let config = self.pool_config().get();
            let penalty = self.fraction_of(&interest_due, &config.grace_penalty_rate);
            require!(payment > penalty, ERROR_INSUFFICIENT_PAYMENT);
            let interest_part = &payment - &penalty;
            require!(interest_part >= interest_due, ERROR_INSUFFICIENT_PAYMENT);
            (penalty, interest_part)
        } else {
            (BigUint::zero(), payment.clone())
        };

        require!(
            interest_part <= self.get_interest_left(),
            ERROR_REPAY_EXCEEDS_INTEREST
        );

        self.advance_duration_covered(&interest_part, &interest_due, interval);
        self.total_repaid().update(|t| *t += &payment);

        let caller = self.blockchain().get_caller();
        self.repaid_event(
            &caller,
            &interest_part,
            &grace_penalty,
            &self.loan_duration_covered().get(),
        );
    }

    /// Closes the loan: the payment must be exactly the remaining interest
    /// plus the whole principal. Collateral goes back to the borrower, the
    /// principal stays on the contract for lender exits.
    #[payable("*")]
    #[endpoint(repayPrincipal)]
    fn repay_principal(&self) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);
        require!(!self.is_pool_liquidable(), ERROR_LOAN_DEFAULTED);

        let payment = self.collect_borrow_asset_payment();
        let principal = self.total_supply().get();
        let interest_left = self.get_interest_left();
        require!(
            payment == &principal + &interest_left,
            ERROR_PRINCIPAL_REPAY_MISMATCH
        );

        let constants = self.pool_constants().get();
        let total_scaled =
            BigUint::from(constants.no_of_repayment_intervals) * self.repayment_interval_scaled();
        self.loan_duration_covered().set(&total_scaled);
        self.total_repaid().update(|t| *t += &interest_left);

        let caller = self.blockchain().get_caller();
        self.principal_repaid_event(&caller, &principal, &interest_left);

        self.close_loan();
    }

    /// Advances the covered-duration cursor for a paid interest amount.
    /// When the payment clears the current instalment, the cursor lands
    /// exactly on the interval boundary first so truncation dust cannot
    /// accumulate across instalments.
    fn advance_duration_covered(
        &self,
        interest_part: &BigUint,
        interest_due: &BigUint,
        interval: u64,
    ) {
        let ips = self.interest_per_second();
        let scale_squared = self.scale() * self.scale();

        let new_covered = if *interest_due > BigUint::zero() && interest_part >= interest_due {
            let boundary = BigUint::from(interval) * self.repayment_interval_scaled();
            let beyond = interest_part - interest_due;
            boundary + self.mul_div(&beyond, &scale_squared, &ips)
        } else {
            self.loan_duration_covered().get()
                + self.mul_div(interest_part, &scale_squared, &ips)
        };

        self.loan_duration_covered().set(&new_covered);
    }

    /// Active -> Closed; only reachable through `repayPrincipal`.
    fn close_loan(&self) {
        self.snapshot_supply().set(&self.total_supply().get());
        self.loan_status().set(LoanStatus::Closed);

        let collateral =
            self.base_liquidity_shares().take() + self.extra_liquidity_shares().take();
        self.return_collateral_to_borrower(&collateral);

        let borrower = self.pool_constants().get().borrower;
        self.loan_closed_event(&borrower, &collateral);
    }
}
