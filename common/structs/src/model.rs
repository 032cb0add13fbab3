#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Lifecycle of a borrow pool. `Collection` is the decode default for fresh
/// storage; `Closed`, `Cancelled`, `Defaulted` and `Terminated` are terminal.
#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug,
)]
pub enum LoanStatus {
    Collection,
    Active,
    Closed,
    Cancelled,
    Defaulted,
    Terminated,
}

impl LoanStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoanStatus::Collection | LoanStatus::Active)
    }
}

/// Immutable pool parameters, fixed at deployment. Rates and fractions are
/// SCALE-scaled; durations are in seconds; amounts are raw token units.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolConstants<M: ManagedTypeApi> {
    pub borrower: ManagedAddress<M>,
    pub borrow_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub pool_savings_strategy: ManagedAddress<M>,
    pub pool_size: BigUint<M>,
    pub min_borrow_fraction: BigUint<M>,
    pub borrow_rate: BigUint<M>,
    pub ideal_collateral_ratio: BigUint<M>,
    pub collection_period: u64,
    pub loan_withdrawal_duration: u64,
    pub repayment_interval: u64,
    pub no_of_repayment_intervals: u64,
    pub loan_start_time: u64,
    pub loan_withdrawal_deadline: u64,
}

/// Protocol-level parameters handed to each pool at deployment by the factory
/// context. No ambient globals: whatever governance decides travels here.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PoolConfig<M: ManagedTypeApi> {
    pub protocol_fee_fraction: BigUint<M>,
    pub protocol_fee_collector: ManagedAddress<M>,
    pub pool_cancel_penalty_fraction: BigUint<M>,
    pub liquidator_reward_fraction: BigUint<M>,
    pub margin_call_duration: u64,
    pub grace_period_fraction: BigUint<M>,
    pub grace_penalty_rate: BigUint<M>,
    pub voting_pass_ratio: BigUint<M>,
    pub extension_vote_duration: u64,
}

/// A pending deadline-extension vote. At most one per pool, ever.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ExtensionRequest<M: ManagedTypeApi> {
    pub vote_end_time: u64,
    pub total_vote_weight: BigUint<M>,
    pub requested_at_interval: u64,
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, PartialEq, Eq, Clone, Copy, Debug,
)]
pub enum CreditLineStatus {
    Requested,
    Active,
    Closed,
}

/// Immutable terms of a bilateral credit line, fixed at request time.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CreditLineConstants<M: ManagedTypeApi> {
    pub lender: ManagedAddress<M>,
    pub borrower: ManagedAddress<M>,
    pub borrow_limit: BigUint<M>,
    pub borrow_rate: BigUint<M>,
    pub collateral_ratio: BigUint<M>,
    pub auto_liquidation: bool,
    pub borrow_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub savings_strategy: ManagedAddress<M>,
}

/// Mutable credit line accounting. Interest accrues lazily: `interest_accrued`
/// is the amount up to `last_accrual_time`, extended on every touch.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct CreditLineVariables<M: ManagedTypeApi> {
    pub status: CreditLineStatus,
    pub principal: BigUint<M>,
    pub interest_accrued: BigUint<M>,
    pub last_accrual_time: u64,
    pub collateral_shares: BigUint<M>,
    pub total_interest_repaid: BigUint<M>,
}
