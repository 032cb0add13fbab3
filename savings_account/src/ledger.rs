multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_INSUFFICIENT_ALLOWANCE, ERROR_INSUFFICIENT_SAVINGS,
};

use crate::{storage, strategy};

#[multiversx_sc::module]
pub trait LedgerModule:
    storage::StorageModule
    + strategy::StrategyModule
    + common_events::EventsModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Routes the attached payment through `strategy` and credits the
    /// resulting shares to `beneficiary`.
    ///
    /// # Arguments
    /// - `strategy`: Approved strategy the funds are put to work in.
    /// - `beneficiary`: Account credited with the shares (not necessarily the
    ///   payer; pools deposit on their own behalf out of lender payments).
    ///
    /// # Returns
    /// - Shares credited.
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self, strategy: ManagedAddress, beneficiary: ManagedAddress) -> BigUint {
        self.require_not_paused();

        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);
        self.require_approved_strategy(&strategy);

        let shares = self.deposit_into_strategy(&strategy, &asset, &amount);

        self.savings_balance(&beneficiary, &asset, &strategy)
            .update(|balance| *balance += &shares);

        self.savings_deposit_event(&beneficiary, &asset, &strategy, &shares);

        shares
    }

    /// Debits `shares` from the caller. Either converts them through the
    /// strategy and sends the underlying tokens to `receiver`, or
    /// (`withdraw_as_shares`) moves the share balance to `receiver`'s ledger
    /// entry without touching the strategy.
    ///
    /// # Returns
    /// - Tokens sent, or shares moved when `withdraw_as_shares` is set.
    #[endpoint(withdraw)]
    fn withdraw(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        shares: BigUint,
        strategy: ManagedAddress,
        receiver: ManagedAddress,
        withdraw_as_shares: bool,
    ) -> BigUint {
        require!(shares > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        self.debit_shares(&caller, &asset, &strategy, &shares);

        if withdraw_as_shares {
            self.savings_balance(&receiver, &asset, &strategy)
                .update(|balance| *balance += &shares);

            self.savings_withdraw_event(&caller, &asset, &strategy, &shares, &BigUint::zero());
            return shares;
        }

        let tokens = self.withdraw_from_strategy(&strategy, &asset, &shares);
        self.tx()
            .to(&receiver)
            .egld_or_single_esdt(&asset, 0, &tokens)
            .transfer();

        self.savings_withdraw_event(&caller, &asset, &strategy, &shares, &tokens);

        tokens
    }

    /// Ledger-internal share transfer between accounts, same asset and
    /// strategy on both sides.
    #[endpoint(transferShares)]
    fn transfer_shares(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        strategy: ManagedAddress,
        to: ManagedAddress,
        shares: BigUint,
    ) {
        require!(shares > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        self.debit_shares(&caller, &asset, &strategy, &shares);
        self.savings_balance(&to, &asset, &strategy)
            .update(|balance| *balance += &shares);

        self.savings_transfer_event(&caller, &to, &asset, &strategy, &shares);
    }

    /// Sets the token-denominated allowance of `spender` over the caller's
    /// savings in `asset`. Overwrites any previous value.
    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance(&caller, &spender, &asset).set(&amount);
        self.savings_approval_event(&caller, &spender, &asset, &amount);
    }

    #[endpoint(increaseAllowance)]
    fn increase_allowance(
        &self,
        spender: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        let mapper = self.allowance(&caller, &spender, &asset);
        mapper.update(|allowance| *allowance += &amount);
        self.savings_approval_event(&caller, &spender, &asset, &mapper.get());
    }

    #[endpoint(decreaseAllowance)]
    fn decrease_allowance(
        &self,
        spender: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        let caller = self.blockchain().get_caller();
        let mapper = self.allowance(&caller, &spender, &asset);
        require!(mapper.get() >= amount, ERROR_INSUFFICIENT_ALLOWANCE);
        mapper.update(|allowance| *allowance -= &amount);
        self.savings_approval_event(&caller, &spender, &asset, &mapper.get());
    }

    /// Pull-based transfer out of `owner`'s savings, consuming the caller's
    /// allowance. `amount` is in tokens; the share equivalent at the
    /// strategy's current rate is debited.
    ///
    /// # Returns
    /// - Shares moved when `as_shares`, tokens sent otherwise.
    #[endpoint(transferFromSavings)]
    fn transfer_from_savings(
        &self,
        owner: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        strategy: ManagedAddress,
        amount: BigUint,
        receiver: ManagedAddress,
        as_shares: bool,
    ) -> BigUint {
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        let allowance_mapper = self.allowance(&owner, &caller, &asset);
        require!(allowance_mapper.get() >= amount, ERROR_INSUFFICIENT_ALLOWANCE);
        allowance_mapper.update(|allowance| *allowance -= &amount);

        let shares = self.strategy_tokens_to_shares(&strategy, &asset, &amount);
        self.debit_shares(&owner, &asset, &strategy, &shares);

        if as_shares {
            self.savings_balance(&receiver, &asset, &strategy)
                .update(|balance| *balance += &shares);

            self.savings_transfer_event(&owner, &receiver, &asset, &strategy, &shares);
            return shares;
        }

        let tokens = self.withdraw_from_strategy(&strategy, &asset, &shares);
        self.tx()
            .to(&receiver)
            .egld_or_single_esdt(&asset, 0, &tokens)
            .transfer();

        self.savings_transfer_event(&owner, &receiver, &asset, &strategy, &shares);

        tokens
    }

    /// Atomically withdraws the caller's shares from one strategy and
    /// re-deposits the proceeds into another. Underlying value is preserved
    /// modulo the strategies' own conversion slippage.
    ///
    /// # Returns
    /// - Shares credited in the new strategy.
    #[endpoint(switchStrategy)]
    fn switch_strategy(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        shares: BigUint,
        from_strategy: ManagedAddress,
        to_strategy: ManagedAddress,
    ) -> BigUint {
        self.require_not_paused();
        require!(shares > BigUint::zero(), ERROR_AMOUNT_ZERO);
        self.require_approved_strategy(&to_strategy);

        let caller = self.blockchain().get_caller();
        self.debit_shares(&caller, &asset, &from_strategy, &shares);

        let tokens = self.withdraw_from_strategy(&from_strategy, &asset, &shares);
        let new_shares = self.deposit_into_strategy(&to_strategy, &asset, &tokens);

        self.savings_balance(&caller, &asset, &to_strategy)
            .update(|balance| *balance += &new_shares);

        self.strategy_switched_event(&caller, &asset, &from_strategy, &to_strategy, &new_shares);

        new_shares
    }

    fn debit_shares(
        &self,
        account: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        shares: &BigUint,
    ) {
        let mapper = self.savings_balance(account, asset, strategy);
        let balance = mapper.get();
        require!(balance >= *shares, ERROR_INSUFFICIENT_SAVINGS);
        mapper.set(&(balance - shares));
    }
}
