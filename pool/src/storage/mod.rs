multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{ExtensionRequest, LoanStatus, PoolConfig, PoolConstants};

#[multiversx_sc::module]
pub trait StorageModule {
    /// Immutable pool parameters, set once at deployment.
    #[view(getPoolConstants)]
    #[storage_mapper("pool_constants")]
    fn pool_constants(&self) -> SingleValueMapper<PoolConstants<Self::Api>>;

    /// Protocol-level parameters handed in by the deployer.
    #[view(getPoolConfig)]
    #[storage_mapper("pool_config")]
    fn pool_config(&self) -> SingleValueMapper<PoolConfig<Self::Api>>;

    #[view(getSavingsAccount)]
    #[storage_mapper("savings_account")]
    fn savings_account(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLoanStatus)]
    #[storage_mapper("loan_status")]
    fn loan_status(&self) -> SingleValueMapper<LoanStatus>;

    /// Fungible claim on principal + interest; minted 1:1 with lent amount.
    /// Invariant: the sum over all lenders equals `total_supply`.
    #[view(getBalanceOf)]
    #[storage_mapper("lender_shares")]
    fn lender_shares(&self, lender: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("total_supply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    /// Supply frozen at the transition out of Active/Collection; all
    /// post-terminal pro-rata math divides by this, not the shrinking live
    /// supply, so exits don't change anyone else's slice.
    #[storage_mapper("snapshot_supply")]
    fn snapshot_supply(&self) -> SingleValueMapper<BigUint>;

    /// Collateral shares from borrower deposits.
    #[view(getBaseLiquidityShares)]
    #[storage_mapper("base_liquidity_shares")]
    fn base_liquidity_shares(&self) -> SingleValueMapper<BigUint>;

    /// Collateral shares added later, margin-call top-ups included.
    #[view(getExtraLiquidityShares)]
    #[storage_mapper("extra_liquidity_shares")]
    fn extra_liquidity_shares(&self) -> SingleValueMapper<BigUint>;

    /// Collateral shares reserved as the cancellation penalty, waiting for
    /// `liquidateCancelPenalty`.
    #[view(getPenaltyLiquidityShares)]
    #[storage_mapper("penalty_liquidity_shares")]
    fn penalty_liquidity_shares(&self) -> SingleValueMapper<BigUint>;

    /// Borrow-asset pot reserved for lenders who have not withdrawn yet:
    /// the cancel-penalty proceeds in a Cancelled pool, or the liquidation
    /// proceeds in a Defaulted one (the two are mutually exclusive states).
    #[view(getPenaltyLiquidityAmount)]
    #[storage_mapper("penalty_liquidity_amount")]
    fn penalty_liquidity_amount(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("cancel_penalty_liquidated")]
    fn cancel_penalty_liquidated(&self) -> SingleValueMapper<bool>;

    /// Set once the lent savings shares have been pulled back into the
    /// contract balance (borrow withdrawal, cancellation or refunds).
    #[storage_mapper("liquidity_recalled")]
    fn liquidity_recalled(&self) -> SingleValueMapper<bool>;

    /// Strategies lenders parked the collected funds in.
    #[storage_mapper("lent_strategies")]
    fn lent_strategies(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("lent_shares")]
    fn lent_shares(&self, strategy: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// End of the cure window for an open margin call; zero when none.
    #[view(getMarginCallEndTime)]
    #[storage_mapper("margin_call_end_time")]
    fn margin_call_end_time(&self, lender: &ManagedAddress) -> SingleValueMapper<u64>;

    /// Collateral shares deposited specifically for one lender during margin
    /// calls. Counted in `extra_liquidity_shares` as well; this mapper only
    /// attributes them for the lender's own ratio.
    #[view(getLenderExtraCollateral)]
    #[storage_mapper("lender_extra_collateral")]
    fn lender_extra_collateral(&self, lender: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// Cumulative borrow-asset repayments (interest + grace penalties) held
    /// for lenders, claimable through `withdrawRepayment`.
    #[view(getTotalRepaid)]
    #[storage_mapper("total_repaid")]
    fn total_repaid(&self) -> SingleValueMapper<BigUint>;

    #[view(getRepaymentWithdrawn)]
    #[storage_mapper("repayment_withdrawn")]
    fn repayment_withdrawn(&self, lender: &ManagedAddress) -> SingleValueMapper<BigUint>;

    /// SCALE-scaled seconds of interest the borrower has paid for.
    #[view(getLoanDurationCovered)]
    #[storage_mapper("loan_duration_covered")]
    fn loan_duration_covered(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("extension_request")]
    fn extension_request(&self) -> SingleValueMapper<ExtensionRequest<Self::Api>>;

    #[view(getExtensionAvailed)]
    #[storage_mapper("extension_availed")]
    fn extension_availed(&self) -> SingleValueMapper<bool>;

    #[view(isLoanExtensionActive)]
    #[storage_mapper("is_loan_extension_active")]
    fn is_loan_extension_active(&self) -> SingleValueMapper<bool>;

    /// Instalment interval whose deadline (and every later one) moved out by
    /// one repayment interval when the extension passed.
    #[storage_mapper("extension_granted_interval")]
    fn extension_granted_interval(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("extension_voted")]
    fn extension_voted(&self, lender: &ManagedAddress) -> SingleValueMapper<bool>;
}
