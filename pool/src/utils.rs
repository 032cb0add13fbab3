multiversx_sc::imports!();

use common_errors::{ERROR_INVALID_ASSET, ERROR_ONLY_BORROWER, ERROR_POOL_TERMINAL};
use common_proxies::{proxy_price_oracle, proxy_savings_account, proxy_yield_strategy};
use common_structs::LoanStatus;

use crate::storage;

/// Payment validation, savings/oracle/strategy plumbing and the valuation
/// helpers shared by the pool's modules.
#[multiversx_sc::module]
pub trait UtilsModule: storage::StorageModule + common_math::SharedMathModule {
    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    fn require_status(&self, expected: LoanStatus, error: &'static [u8]) {
        require!(self.loan_status().get() == expected, error);
    }

    fn require_not_terminal(&self) {
        require!(!self.loan_status().get().is_terminal(), ERROR_POOL_TERMINAL);
    }

    fn require_borrower(&self, caller: &ManagedAddress) {
        require!(
            *caller == self.pool_constants().get().borrower,
            ERROR_ONLY_BORROWER
        );
    }

    /// Validates that the attached payment is in the pool's borrow asset.
    fn collect_borrow_asset_payment(&self) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            asset == self.pool_constants().get().borrow_asset,
            ERROR_INVALID_ASSET
        );
        amount
    }

    /// Validates that the attached payment is in the pool's collateral asset.
    fn collect_collateral_payment(&self) -> BigUint {
        let (asset, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(
            asset == self.pool_constants().get().collateral_asset,
            ERROR_INVALID_ASSET
        );
        amount
    }

    fn send_borrow_asset(&self, to: &ManagedAddress, amount: &BigUint) {
        let asset = self.pool_constants().get().borrow_asset;
        self.tx()
            .to(to)
            .egld_or_single_esdt(&asset, 0, amount)
            .transfer_if_not_empty();
    }

    // Savings account plumbing. The pool keeps every token it manages in the
    // savings ledger under its own address; only terminal payouts and the
    // repayment pot live on the contract balance.

    fn savings_deposit(
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

    /// Debits the pool's savings shares and sends the underlying tokens to
    /// `receiver`.
    fn savings_withdraw_tokens(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
        strategy: &ManagedAddress,
        receiver: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .withdraw(asset, shares, strategy, receiver, false)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Moves savings shares from the pool's ledger entry to `receiver`'s
    /// without touching the strategy.
    fn savings_transfer_shares(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        shares: &BigUint,
        strategy: &ManagedAddress,
        receiver: &ManagedAddress,
    ) {
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .withdraw(asset, shares, strategy, receiver, true)
            .returns(ReturnsResult)
            .sync_call();
    }

    /// Pulls `amount` tokens out of `owner`'s savings via allowance, either
    /// as tokens into the pool's balance or as shares into the pool's ledger
    /// entry.
    fn savings_pull(
        &self,
        owner: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        strategy: &ManagedAddress,
        amount: &BigUint,
        as_shares: bool,
    ) -> BigUint {
        let own_address = self.blockchain().get_sc_address();
        self.tx()
            .to(&self.savings_account().get())
            .typed(proxy_savings_account::SavingsAccountProxy)
            .transfer_from_savings(owner, asset, strategy, amount, &own_address, as_shares)
            .returns(ReturnsResult)
            .sync_call()
    }

    // Oracle and strategy valuation

    /// `amount` of `from_asset` expressed in `to_asset` units at the oracle's
    /// latest rate. A missing feed aborts the whole operation.
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

        self.mul_div(
            amount,
            &rate,
            &BigUint::from(10u64).pow(decimals as u32),
        )
    }

    fn collateral_shares_to_tokens(&self, shares: &BigUint) -> BigUint {
        if *shares == BigUint::zero() {
            return BigUint::zero();
        }
        let constants = self.pool_constants().get();
        self.tx()
            .to(&constants.pool_savings_strategy)
            .typed(proxy_yield_strategy::YieldStrategyProxy)
            .shares_to_tokens(&constants.collateral_asset, shares)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Borrow-asset value of a collateral share amount, through the strategy
    /// conversion and the price oracle.
    fn collateral_value_in_borrow_asset(&self, shares: &BigUint) -> BigUint {
        let constants = self.pool_constants().get();
        let tokens = self.collateral_shares_to_tokens(shares);
        if tokens == BigUint::zero() {
            return BigUint::zero();
        }
        self.equivalent_tokens(&constants.collateral_asset, &constants.borrow_asset, &tokens)
    }

    /// Pool-wide collateral ratio: collateral value over outstanding
    /// principal, SCALE-scaled.
    fn current_collateral_ratio(&self) -> BigUint {
        let collateral_shares =
            self.base_liquidity_shares().get() + self.extra_liquidity_shares().get();
        let value = self.collateral_value_in_borrow_asset(&collateral_shares);
        self.div_scale(&value, &self.total_supply().get())
    }

    /// A single lender's effective ratio: their pro-rata slice of the pool
    /// collateral plus the top-ups attributed to them in margin calls.
    fn lender_collateral_ratio(&self, lender: &ManagedAddress) -> BigUint {
        let balance = self.lender_shares(lender).get();
        let pool_shares =
            self.base_liquidity_shares().get() + self.extra_liquidity_shares().get();
        let slice = self.mul_div(&pool_shares, &balance, &self.total_supply().get())
            + self.lender_extra_collateral(lender).get();
        let value = self.collateral_value_in_borrow_asset(&slice);
        self.div_scale(&value, &balance)
    }

    /// Supply frozen at the terminal transition when set, live supply before.
    fn effective_supply(&self) -> BigUint {
        let snapshot = self.snapshot_supply().get();
        if snapshot > BigUint::zero() {
            snapshot
        } else {
            self.total_supply().get()
        }
    }

    /// Pulls every lent savings share back into the contract balance. Called
    /// once, on borrow withdrawal, cancellation or the first refund.
    ///
    /// # Returns
    /// - Total borrow-asset tokens received.
    fn recall_lent_liquidity(&self) -> BigUint {
        if self.liquidity_recalled().get() {
            return BigUint::zero();
        }
        self.liquidity_recalled().set(true);

        let constants = self.pool_constants().get();
        let own_address = self.blockchain().get_sc_address();

        let strategies = self.lent_strategies();
        let mut received = BigUint::zero();
        for strategy in strategies.iter() {
            let shares = self.lent_shares(&strategy).take();
            if shares > BigUint::zero() {
                received += self.savings_withdraw_tokens(
                    &constants.borrow_asset,
                    &shares,
                    &strategy,
                    &own_address,
                );
            }
        }
        self.lent_strategies().clear();

        received
    }

    /// Hands seized collateral shares to `receiver` according to the flags:
    /// as a ledger-share move, as raw tokens, or as tokens re-deposited into
    /// the receiver's savings.
    fn seize_collateral_to(
        &self,
        shares: &BigUint,
        receiver: &ManagedAddress,
        receive_liquidity_share: bool,
        to_savings: bool,
    ) {
        if *shares == BigUint::zero() {
            return;
        }
        let constants = self.pool_constants().get();

        if receive_liquidity_share {
            self.savings_transfer_shares(
                &constants.collateral_asset,
                shares,
                &constants.pool_savings_strategy,
                receiver,
            );
            return;
        }

        let own_address = self.blockchain().get_sc_address();
        if to_savings {
            let tokens = self.savings_withdraw_tokens(
                &constants.collateral_asset,
                shares,
                &constants.pool_savings_strategy,
                &own_address,
            );
            self.tx()
                .to(&self.savings_account().get())
                .typed(proxy_savings_account::SavingsAccountProxy)
                .deposit(&constants.pool_savings_strategy, receiver)
                .egld_or_single_esdt(&constants.collateral_asset, 0, &tokens)
                .returns(ReturnsResult)
                .sync_call();
        } else {
            self.savings_withdraw_tokens(
                &constants.collateral_asset,
                shares,
                &constants.pool_savings_strategy,
                receiver,
            );
        }
    }
}
