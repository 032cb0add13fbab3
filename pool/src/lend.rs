multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_BELOW_MIN_BORROW, ERROR_COLLATERAL_RATIO_BREACHED,
    ERROR_COLLECTION_ENDED, ERROR_INSUFFICIENT_PAYMENT, ERROR_INSUFFICIENT_SHARES,
    ERROR_LIQUIDITY_SHORTFALL, ERROR_LOAN_NOT_STARTED, ERROR_MARGIN_CALL_OPEN,
    ERROR_NOT_IN_COLLECTION, ERROR_POOL_SIZE_EXCEEDED, ERROR_SHARES_FROZEN,
    ERROR_WITHDRAWAL_DEADLINE_PASSED, ERROR_WITHDRAW_NOT_OPEN,
};
use common_structs::LoanStatus;

use crate::{storage, utils};

/// Lender-side flows: joining the pool, the fungible share claim, and the
/// exits (principal, interest, pro-rata pots).
#[multiversx_sc::module]
pub trait LendModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Joins the pool during collection. The lent amount moves into the
    /// savings ledger under the pool's account in the lender-chosen strategy;
    /// pool shares are minted 1:1 to `recipient`.
    ///
    /// # Arguments
    /// - `recipient`: Account credited with the pool shares.
    /// - `strategy`: Approved savings strategy for the lent funds.
    /// - `amount`: Amount lent; must match the attached payment unless
    ///   `from_savings` pulls it out of the caller's savings allowance.
    #[payable("*")]
    #[endpoint(lend)]
    fn lend(
        &self,
        recipient: ManagedAddress,
        strategy: ManagedAddress,
        amount: BigUint,
        from_savings: bool,
    ) {
        self.require_status(LoanStatus::Collection, ERROR_NOT_IN_COLLECTION);
        let constants = self.pool_constants().get();
        require!(self.now() < constants.loan_start_time, ERROR_COLLECTION_ENDED);
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let total_supply = self.total_supply().get();
        require!(
            &total_supply + &amount <= constants.pool_size,
            ERROR_POOL_SIZE_EXCEEDED
        );

        let caller = self.blockchain().get_caller();
        let shares = if from_savings {
            self.savings_pull(&caller, &constants.borrow_asset, &strategy, &amount, true)
        } else {
            let payment = self.collect_borrow_asset_payment();
            require!(payment == amount, ERROR_INSUFFICIENT_PAYMENT);
            self.savings_deposit(&constants.borrow_asset, &amount, &strategy)
        };

        self.lent_strategies().insert(strategy.clone());
        self.lent_shares(&strategy).update(|s| *s += &shares);

        self.lender_shares(&recipient).update(|b| *b += &amount);
        let new_total = total_supply + &amount;
        self.total_supply().set(&new_total);

        self.lend_event(&recipient, &amount, &new_total);
    }

    /// One-shot borrower draw after the collection period. Requires the
    /// minimum borrow threshold and the ideal collateral ratio; transitions
    /// Collection -> Active and routes the protocol fee to the collector.
    #[endpoint(withdrawBorrowedAmount)]
    fn withdraw_borrowed_amount(&self) {
        let caller = self.blockchain().get_caller();
        self.require_borrower(&caller);
        self.require_status(LoanStatus::Collection, ERROR_NOT_IN_COLLECTION);

        let constants = self.pool_constants().get();
        let now = self.now();
        require!(now >= constants.loan_start_time, ERROR_LOAN_NOT_STARTED);
        require!(
            now <= constants.loan_withdrawal_deadline,
            ERROR_WITHDRAWAL_DEADLINE_PASSED
        );

        let total_supply = self.total_supply().get();
        let min_amount = self.fraction_of(&constants.pool_size, &constants.min_borrow_fraction);
        require!(total_supply >= min_amount, ERROR_BELOW_MIN_BORROW);
        require!(
            self.current_collateral_ratio() >= constants.ideal_collateral_ratio,
            ERROR_COLLATERAL_RATIO_BREACHED
        );

        let received = self.recall_lent_liquidity();
        require!(received >= total_supply, ERROR_LIQUIDITY_SHORTFALL);

        self.loan_status().set(LoanStatus::Active);

        let config = self.pool_config().get();
        let fee = self.fraction_of(&total_supply, &config.protocol_fee_fraction);
        let to_borrower = &total_supply - &fee;

        self.send_borrow_asset(&config.protocol_fee_collector, &fee);
        self.send_borrow_asset(&constants.borrower, &to_borrower);

        self.borrowed_amount_withdrawn_event(&caller, &to_borrower, &fee);
    }

    /// Fungible-claim transfer. Frozen for cancelled and terminated pools and
    /// for either side of an open margin call.
    #[endpoint(transferPoolShares)]
    fn transfer_pool_shares(&self, to: ManagedAddress, amount: BigUint) {
        let status = self.loan_status().get();
        require!(
            !matches!(status, LoanStatus::Cancelled | LoanStatus::Terminated),
            ERROR_SHARES_FROZEN
        );
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        require!(
            self.margin_call_end_time(&caller).get() == 0
                && self.margin_call_end_time(&to).get() == 0,
            ERROR_MARGIN_CALL_OPEN
        );

        self.move_lender_shares(&caller, &to, &amount);

        self.pool_shares_transferred_event(&caller, &to, &amount);
    }

    /// Lender exit. Collection pools must have missed their threshold or
    /// deadline; Closed pools return principal; Cancelled and Defaulted pools
    /// pay the pro-rata slice of the reserved borrow-asset pot. Pending
    /// interest entitlement is always settled alongside, then the shares are
    /// burned.
    #[endpoint(withdrawLiquidity)]
    fn withdraw_liquidity(&self) {
        let caller = self.blockchain().get_caller();
        let balance = self.lender_shares(&caller).get();
        require!(balance > BigUint::zero(), ERROR_INSUFFICIENT_SHARES);

        let status = self.loan_status().get();
        let constants = self.pool_constants().get();
        let principal_component = match status {
            LoanStatus::Collection => {
                let now = self.now();
                let min_amount =
                    self.fraction_of(&constants.pool_size, &constants.min_borrow_fraction);
                let threshold_missed = now >= constants.loan_start_time
                    && self.total_supply().get() < min_amount;
                require!(
                    now > constants.loan_withdrawal_deadline || threshold_missed,
                    ERROR_WITHDRAW_NOT_OPEN
                );
                self.recall_lent_liquidity();
                balance.clone()
            }
            LoanStatus::Cancelled | LoanStatus::Closed => balance.clone(),
            LoanStatus::Defaulted => BigUint::zero(),
            LoanStatus::Active | LoanStatus::Terminated => {
                sc_panic!(ERROR_WITHDRAW_NOT_OPEN)
            }
        };

        let supply = self.effective_supply();
        let interest_component = self.pending_repayment_entitlement(&caller, &balance, &supply);
        let pot_component =
            self.mul_div(&self.penalty_liquidity_amount().get(), &balance, &supply);

        // burn
        self.lender_shares(&caller).clear();
        self.total_supply().update(|t| *t -= &balance);
        self.repayment_withdrawn(&caller).clear();

        if interest_component > BigUint::zero() {
            self.repayment_withdrawn_event(&caller, &interest_component);
        }

        let payout = principal_component + pot_component + interest_component;
        self.send_borrow_asset(&caller, &payout);

        self.liquidity_withdrawn_event(&caller, &balance, &payout);
    }

    /// Pulls the caller's share of repaid interest and grace penalties
    /// accumulated so far, without burning pool shares.
    #[endpoint(withdrawRepayment)]
    fn withdraw_repayment(&self) {
        let caller = self.blockchain().get_caller();
        let balance = self.lender_shares(&caller).get();
        require!(balance > BigUint::zero(), ERROR_INSUFFICIENT_SHARES);

        let supply = self.effective_supply();
        let entitled = self.pending_repayment_entitlement(&caller, &balance, &supply);
        require!(entitled > BigUint::zero(), ERROR_AMOUNT_ZERO);

        self.repayment_withdrawn(&caller)
            .update(|w| *w += &entitled);
        self.send_borrow_asset(&caller, &entitled);

        self.repayment_withdrawn_event(&caller, &entitled);
    }

    fn pending_repayment_entitlement(
        &self,
        lender: &ManagedAddress,
        balance: &BigUint,
        supply: &BigUint,
    ) -> BigUint {
        if *supply == BigUint::zero() {
            return BigUint::zero();
        }
        let gross = self.mul_div(&self.total_repaid().get(), balance, supply);
        let withdrawn = self.repayment_withdrawn(lender).get();
        if gross > withdrawn {
            gross - withdrawn
        } else {
            BigUint::zero()
        }
    }

    /// Moves shares together with the proportional slice of the sender's
    /// already-withdrawn repayment counter, so interest entitlements travel
    /// with the claim.
    fn move_lender_shares(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_mapper = self.lender_shares(from);
        let from_balance = from_mapper.get();
        require!(from_balance >= *amount, ERROR_INSUFFICIENT_SHARES);

        let withdrawn = self.repayment_withdrawn(from).get();
        let withdrawn_moved = self.mul_div(&withdrawn, amount, &from_balance);

        from_mapper.set(&(from_balance - amount));
        self.lender_shares(to).update(|b| *b += amount);

        if withdrawn_moved > BigUint::zero() {
            self.repayment_withdrawn(from)
                .update(|w| *w -= &withdrawn_moved);
            self.repayment_withdrawn(to)
                .update(|w| *w += &withdrawn_moved);
        }
    }
}
