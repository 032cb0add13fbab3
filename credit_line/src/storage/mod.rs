multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use common_structs::{CreditLineConstants, CreditLineVariables};

#[multiversx_sc::module]
pub trait StorageModule {
    #[view(getSavingsAccount)]
    #[storage_mapper("savings_account")]
    fn savings_account(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPriceOracle)]
    #[storage_mapper("price_oracle")]
    fn price_oracle(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLiquidatorRewardFraction)]
    #[storage_mapper("liquidator_reward_fraction")]
    fn liquidator_reward_fraction(&self) -> SingleValueMapper<BigUint>;

    #[view(getCreditLineConstants)]
    #[storage_mapper("credit_line_constants")]
    fn credit_line_constants(
        &self,
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<CreditLineConstants<Self::Api>>;

    #[view(getCreditLineVariables)]
    #[storage_mapper("credit_line_variables")]
    fn credit_line_variables(
        &self,
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<CreditLineVariables<Self::Api>>;

    /// Party that opened the request; the other one must accept.
    #[storage_mapper("credit_line_requested_by")]
    fn credit_line_requested_by(
        &self,
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> SingleValueMapper<ManagedAddress>;

    /// Monotone counter mixed into the id hash so repeat requests between
    /// the same parties get distinct ids.
    #[storage_mapper("credit_line_nonce")]
    fn credit_line_nonce(&self) -> SingleValueMapper<u64>;
}
