multiversx_sc::imports!();
multiversx_sc::derive_imports!();

#[multiversx_sc::module]
pub trait StorageModule {
    /// Share balance held by `account` in `strategy` for `asset`. Always in
    /// strategy share units, never raw tokens.
    #[view(getSavingsBalance)]
    #[storage_mapper("savings_balance")]
    fn savings_balance(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    /// Token-denominated allowance `owner` granted `spender` for `asset`,
    /// consumed by `transferFromSavings`.
    #[view(getAllowance)]
    #[storage_mapper("allowance")]
    fn allowance(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getApprovedStrategies)]
    #[storage_mapper("approved_strategies")]
    fn approved_strategies(&self) -> UnorderedSetMapper<ManagedAddress>;
}
