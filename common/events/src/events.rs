#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Pool lifecycle

    /// Emitted when a lender joins the pool during collection.
    /// [lender, amount lent, total collected so far]
    #[event("lend")]
    fn lend_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] total_supply: &BigUint,
    );

    /// [borrower, collateral shares added, total base shares]
    #[event("collateral_deposited")]
    fn collateral_deposited_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] base_liquidity_shares: &BigUint,
    );

    /// [borrower, amount transferred, protocol fee taken]
    #[event("borrowed_amount_withdrawn")]
    fn borrowed_amount_withdrawn_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] protocol_fee: &BigUint,
    );

    /// [caller, collateral shares reserved as penalty]
    #[event("pool_cancelled")]
    fn pool_cancelled_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] penalty_shares: &BigUint,
    );

    /// [liquidator, borrow asset paid in for the lenders, collateral shares received]
    #[event("cancel_penalty_liquidated")]
    fn cancel_penalty_liquidated_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] amount_paid: &BigUint,
        #[indexed] shares_received: &BigUint,
    );

    /// [liquidator, borrow asset paid in for the lenders, collateral shares seized]
    #[event("pool_liquidated")]
    fn pool_liquidated_event(
        &self,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] amount_paid: &BigUint,
        #[indexed] shares_seized: &BigUint,
    );

    /// [owner]
    #[event("pool_terminated")]
    fn pool_terminated_event(&self, #[indexed] owner: &ManagedAddress);

    /// [lender, cure deadline]
    #[event("margin_call_requested")]
    fn margin_call_requested_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] end_time: u64,
    );

    /// [lender, collateral shares added for them, margin call closed by this top-up]
    #[event("margin_call_collateral_added")]
    fn margin_call_collateral_added_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] resolved: bool,
    );

    /// [lender liquidated out, liquidator taking over the claim, borrow asset paid to the lender]
    #[event("lender_liquidated")]
    fn lender_liquidated_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] amount_paid: &BigUint,
    );

    /// [from, to, share amount]
    #[event("pool_shares_transferred")]
    fn pool_shares_transferred_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    /// [lender, shares burned, borrow asset paid out]
    #[event("liquidity_withdrawn")]
    fn liquidity_withdrawn_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] shares_burned: &BigUint,
        #[indexed] amount: &BigUint,
    );

    /// [lender, interest/penalty amount paid out]
    #[event("repayment_withdrawn")]
    fn repayment_withdrawn_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    // Repayments

    /// [payer, interest paid, grace penalty paid, loan duration covered after]
    #[event("repaid")]
    fn repaid_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] interest: &BigUint,
        #[indexed] grace_penalty: &BigUint,
        #[indexed] loan_duration_covered: &BigUint,
    );

    /// [payer, principal, interest closing the loan]
    #[event("principal_repaid")]
    fn principal_repaid_event(
        &self,
        #[indexed] payer: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] interest: &BigUint,
    );

    /// [borrower, collateral shares returned]
    #[event("loan_closed")]
    fn loan_closed_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] collateral_returned: &BigUint,
    );

    // Extension

    /// [borrower, vote window end]
    #[event("extension_requested")]
    fn extension_requested_event(
        &self,
        #[indexed] borrower: &ManagedAddress,
        #[indexed] vote_end_time: u64,
    );

    /// [lender, vote weight, cumulative weight]
    #[event("extension_vote_cast")]
    fn extension_vote_cast_event(
        &self,
        #[indexed] lender: &ManagedAddress,
        #[indexed] weight: &BigUint,
        #[indexed] total_weight: &BigUint,
    );

    /// [instalment interval whose deadline moved out]
    #[event("extension_passed")]
    fn extension_passed_event(&self, #[indexed] interval: u64);

    // Savings ledger

    /// [beneficiary, asset, strategy, shares credited]
    #[event("savings_deposit")]
    fn savings_deposit_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    /// [owner, asset, strategy, shares debited, tokens sent (0 for share moves)]
    #[event("savings_withdraw")]
    fn savings_withdraw_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] tokens: &BigUint,
    );

    /// [from, to, asset, strategy, shares moved]
    #[event("savings_transfer")]
    fn savings_transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    /// [owner, spender, asset, allowance after]
    #[event("savings_approval")]
    fn savings_approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] allowance: &BigUint,
    );

    /// [account, asset, old strategy, new strategy, shares credited in the new strategy]
    #[event("strategy_switched")]
    fn strategy_switched_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] from_strategy: &ManagedAddress,
        #[indexed] to_strategy: &ManagedAddress,
        #[indexed] shares: &BigUint,
    );

    // Credit lines

    /// [id, requested by]
    #[event("credit_line_requested")]
    fn credit_line_requested_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] requested_by: &ManagedAddress,
    );

    /// [id, accepted by]
    #[event("credit_line_accepted")]
    fn credit_line_accepted_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] accepted_by: &ManagedAddress,
    );

    /// [id, collateral shares after deposit]
    #[event("credit_line_collateral_deposited")]
    fn credit_line_collateral_deposited_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] collateral_shares: &BigUint,
    );

    /// [id, amount drawn, principal after]
    #[event("credit_line_borrowed")]
    fn credit_line_borrowed_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] amount: &BigUint,
        #[indexed] principal: &BigUint,
    );

    /// [id, interest repaid, principal repaid]
    #[event("credit_line_repaid")]
    fn credit_line_repaid_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] interest: &BigUint,
        #[indexed] principal: &BigUint,
    );

    /// [id]
    #[event("credit_line_closed")]
    fn credit_line_closed_event(&self, #[indexed] id: &ManagedByteArray<Self::Api, 32>);

    /// [id, liquidator, debt extinguished, collateral shares seized]
    #[event("credit_line_liquidated")]
    fn credit_line_liquidated_event(
        &self,
        #[indexed] id: &ManagedByteArray<Self::Api, 32>,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] debt: &BigUint,
        #[indexed] collateral_shares: &BigUint,
    );
}
