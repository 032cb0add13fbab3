multiversx_sc::imports!();

use common_constants::SECONDS_PER_YEAR;
use common_errors::{ERROR_CREDIT_LINE_NOT_ACTIVE, ERROR_INVALID_ASSET};
use common_proxies::{proxy_price_oracle, proxy_savings_account, proxy_yield_strategy};
use common_structs::{CreditLineConstants, CreditLineStatus, CreditLineVariables};

use crate::storage;

#[multiversx_sc::module]
pub trait UtilsModule: storage::StorageModule + common_math::SharedMathModule {
    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    fn require_active(&self, variables: &CreditLineVariables<Self::Api>) {
        require!(
            variables.status == CreditLineStatus::Active,
            ERROR_CREDIT_LINE_NOT_ACTIVE
        );
    }

    /// Interest accrued between `last_accrual_time` and now, on top of the
    /// stored amount: `principal * rate * elapsed / year / SCALE`.
    fn pending_interest(
        &self,
        constants: &CreditLineConstants<Self::Api>,
        variables: &CreditLineVariables<Self::Api>,
    ) -> BigUint {
        let elapsed = self.now() - variables.last_accrual_time;
        if elapsed == 0 || variables.principal == BigUint::zero() {
            return BigUint::zero();
        }
        let per_year = self.mul_scale(&variables.principal, &constants.borrow_rate);
        per_year * BigUint::from(elapsed) / BigUint::from(SECONDS_PER_YEAR)
    }

    /// Folds pending interest into the stored accounting, moving the accrual
    /// cursor to now. Callers persist the returned variables.
    fn accrue(
        &self,
        constants: &CreditLineConstants<Self::Api>,
        variables: &mut CreditLineVariables<Self::Api>,
    ) {
        let pending = self.pending_interest(constants, variables);
        variables.interest_accrued += pending;
        variables.last_accrual_time = self.now();
    }

    fn current_debt(&self, variables: &CreditLineVariables<Self::Api>) -> BigUint {
        &variables.principal + &variables.interest_accrued
    }

    /// Borrow-asset value of the line's collateral shares over its debt,
    /// SCALE-scaled. Fails on zero debt.
    fn collateral_ratio(
        &self,
        constants: &CreditLineConstants<Self::Api>,
        variables: &CreditLineVariables<Self::Api>,
        debt: &BigUint,
    ) -> BigUint {
        let tokens = if variables.collateral_shares == BigUint::zero() {
            BigUint::zero()
        } else {
            self.tx()
                .to(&constants.savings_strategy)
                .typed(proxy_yield_strategy::YieldStrategyProxy)
                .shares_to_tokens(&constants.collateral_asset, &variables.collateral_shares)
                .returns(ReturnsResult)
                .sync_call()
        };
        let value = if tokens == BigUint::zero() {
            BigUint::zero()
        } else {
            self.equivalent_tokens(&constants.collateral_asset, &constants.borrow_asset, &tokens)
        };
        self.div_scale(&value, debt)
    }

    fn equivalent_tokens(
        &self,
        from_asset: &EgldOrEsdtTokenIdentifier,
        to_asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let (rate, decimals) = self
            .tx()
            .to(&self.price_oracle().get())
            .typed(proxy_price_oracle::PriceOracleProxy)
            .get_latest_price(from_asset, to_asset)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();

        self.mul_div(amount, &rate, &BigUint::from(10u64).pow(decimals as u32))
    }

    fn collect_payment_in(&self, expected: &EgldOrEsdtTokenIdentifier) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(asset == *expected, ERROR_INVALID_ASSET);
        amount
    }

    fn send_asset(&self, asset: &EgldOrEsdtTokenIdentifier, to: &ManagedAddress, amount: &BigUint) {
        self.tx()
            .to(to)
            .egld_or_single_esdt(asset, 0, amount)
            .transfer_if_not_empty();
    }

    fn savings_deposit_for_self(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        strategy: &ManagedAddress,
    ) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .deposit(strategy, &own_address)
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn savings_pull_shares_for_self(
        &self,
        owner: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        amount: &BigUint,
    ) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .transfer_from_savings(owner, asset, strategy, amount, &own_address, true)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Draws `amount` tokens out of the lender's savings straight to the
    /// borrower, consuming this contract's allowance.
    fn savings_pull_tokens_to(
        &self,
        owner: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        amount: &BigUint,
        receiver: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .transfer_from_savings(owner, asset, strategy, amount, receiver, false)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Moves collateral shares from this contract's ledger entry to
    /// `receiver`'s.
    fn savings_transfer_collateral(
        &self,
        constants: &CreditLineConstants<Self::Api>,
        shares: &BigUint,
        receiver: &ManagedAddress,
    ) {
        if *shares == BigUint::zero() {
            return;
        }
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .withdraw(
                &constants.collateral_asset,
                shares,
                &constants.savings_strategy,
                receiver,
                true,
            )
            .returns(ReturnsResult)
            .sync_call();
    }
}
