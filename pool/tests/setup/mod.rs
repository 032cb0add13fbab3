use crate::constants::*;

use common_proxies::{proxy_pool, proxy_price_oracle, proxy_savings_account};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, TestAddress, TestTokenIdentifier,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsNewManagedAddress, ReturnsResult},
    ScenarioTxRun, ScenarioWorld,
};
use pool::{LoanStatus, PoolConfig};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POOL_PATH, pool::ContractBuilder);
    blockchain.register_contract(SAVINGS_ACCOUNT_PATH, savings_account::ContractBuilder);
    blockchain.register_contract(STRATEGY_MOCK_PATH, strategy_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_MOCK_PATH, oracle_mock::ContractBuilder);

    blockchain
}

pub struct PoolTestState {
    pub world: ScenarioWorld,
    pub pool_sc: ManagedAddress<StaticApi>,
    pub savings_sc: ManagedAddress<StaticApi>,
    pub strategy_sc: ManagedAddress<StaticApi>,
    pub oracle_sc: ManagedAddress<StaticApi>,
}

pub fn default_pool_config() -> PoolConfig<StaticApi> {
    PoolConfig {
        protocol_fee_fraction: pct(1),
        protocol_fee_collector: FEE_COLLECTOR_ADDRESS.to_managed_address(),
        pool_cancel_penalty_fraction: pct(10),
        liquidator_reward_fraction: pct(5),
        margin_call_duration: MARGIN_CALL_DURATION,
        grace_period_fraction: pct(10),
        grace_penalty_rate: pct(10),
        voting_pass_ratio: pct(50),
        extension_vote_duration: EXTENSION_VOTE_DURATION,
    }
}

impl PoolTestState {
    /// Deploys savings account, strategy, oracle and a pool with
    /// poolSize = 100 tokens, 10% minimum borrow fraction, 10%/yr borrow
    /// rate and a 200% ideal collateral ratio, at block timestamp 0.
    pub fn new() -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);

        for address in [
            OWNER_ADDRESS,
            BORROWER_ADDRESS,
            LENDER_ADDRESS,
            SECOND_LENDER_ADDRESS,
            LIQUIDATOR_ADDRESS,
            FEE_COLLECTOR_ADDRESS,
        ] {
            world
                .account(address)
                .nonce(1)
                .esdt_balance(BORROW_TOKEN, tokens(1_000))
                .esdt_balance(COLLATERAL_TOKEN, tokens(1_000));
        }

        let savings_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_savings_account::SavingsAccountProxy)
            .init()
            .code(SAVINGS_ACCOUNT_PATH)
            .new_address(SAVINGS_ACCOUNT_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let strategy_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(common_proxies::proxy_yield_strategy::YieldStrategyProxy)
            .init()
            .code(STRATEGY_MOCK_PATH)
            .new_address(STRATEGY_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        let oracle_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .init()
            .code(ORACLE_MOCK_PATH)
            .new_address(ORACLE_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&savings_sc)
            .typed(proxy_savings_account::SavingsAccountProxy)
            .add_strategy(&strategy_sc)
            .run();

        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_exchange_rate(
                collateral_asset(),
                borrow_asset(),
                BigUint::from(COLLATERAL_RATE),
                COLLATERAL_RATE_DECIMALS,
            )
            .run();

        let pool_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pool::BorrowPoolProxy)
            .init(
                BORROWER_ADDRESS.to_managed_address(),
                borrow_asset(),
                collateral_asset(),
                &strategy_sc,
                tokens(100),
                pct(10),
                pct(10),
                pct(200),
                COLLECTION_PERIOD,
                LOAN_WITHDRAWAL_DURATION,
                REPAYMENT_INTERVAL,
                NO_OF_REPAYMENT_INTERVALS,
                &savings_sc,
                &oracle_sc,
                default_pool_config(),
            )
            .code(POOL_PATH)
            .new_address(POOL_ADDRESS)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            pool_sc,
            savings_sc,
            strategy_sc,
            oracle_sc,
        }
    }

    pub fn set_block_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    pub fn set_collateral_rate(&mut self, rate: u64, decimals: u8) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.oracle_sc)
            .typed(proxy_price_oracle::PriceOracleProxy)
            .set_exchange_rate(
                collateral_asset(),
                borrow_asset(),
                BigUint::from(rate),
                decimals,
            )
            .run();
    }

    // Pool actions

    pub fn lend(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .lend(from.to_managed_address(), &self.strategy_sc, &amount, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .run();
    }

    pub fn lend_error(&mut self, from: TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .lend(from.to_managed_address(), &self.strategy_sc, &amount, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn deposit_collateral(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .deposit_collateral(&amount, false)
            .egld_or_single_esdt(&collateral_asset(), 0, &amount)
            .run();
    }

    pub fn withdraw_borrowed_amount(&mut self) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .withdraw_borrowed_amount()
            .run();
    }

    pub fn withdraw_borrowed_amount_error(&mut self, error: &[u8]) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .withdraw_borrowed_amount()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn cancel_pool(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .cancel_pool()
            .run();
    }

    pub fn cancel_pool_error(&mut self, from: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .cancel_pool()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn repay(&mut self, from: TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .repay()
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .run();
    }

    pub fn repay_error(&mut self, from: TestAddress, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .repay()
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn repay_principal(&mut self, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .repay_principal()
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .run();
    }

    pub fn repay_principal_error(&mut self, amount: BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .repay_principal()
            .egld_or_single_esdt(&borrow_asset(), 0, &amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn withdraw_liquidity(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .withdraw_liquidity()
            .run();
    }

    pub fn withdraw_liquidity_error(&mut self, from: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .withdraw_liquidity()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn withdraw_repayment(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .withdraw_repayment()
            .run();
    }

    pub fn transfer_pool_shares(
        &mut self,
        from: TestAddress,
        to: TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .transfer_pool_shares(to.to_managed_address(), &amount)
            .run();
    }

    pub fn transfer_pool_shares_error(
        &mut self,
        from: TestAddress,
        to: TestAddress,
        amount: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .transfer_pool_shares(to.to_managed_address(), &amount)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn liquidate_pool(&mut self, from: TestAddress, payment: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .liquidate_pool(false, false, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &payment)
            .run();
    }

    pub fn liquidate_pool_error(
        &mut self,
        from: TestAddress,
        payment: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .liquidate_pool(false, false, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn liquidate_cancel_penalty(&mut self, from: TestAddress, payment: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .liquidate_cancel_penalty(false, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &payment)
            .run();
    }

    pub fn liquidate_cancel_penalty_error(
        &mut self,
        from: TestAddress,
        payment: BigUint<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .liquidate_cancel_penalty(false, false)
            .egld_or_single_esdt(&borrow_asset(), 0, &payment)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn request_margin_call(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .request_margin_call()
            .run();
    }

    pub fn request_margin_call_error(&mut self, from: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .request_margin_call()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn add_collateral_in_margin_call(
        &mut self,
        from: TestAddress,
        lender: TestAddress,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .add_collateral_in_margin_call(lender.to_managed_address(), &amount, false)
            .egld_or_single_esdt(&collateral_asset(), 0, &amount)
            .run();
    }

    pub fn liquidate_for_lender(
        &mut self,
        from: TestAddress,
        lender: TestAddress,
        payment: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .liquidate_for_lender(lender.to_managed_address(), false)
            .egld_or_single_esdt(&borrow_asset(), 0, &payment)
            .run();
    }

    pub fn request_extension(&mut self) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .request_extension()
            .run();
    }

    pub fn request_extension_error(&mut self, error: &[u8]) {
        self.world
            .tx()
            .from(BORROWER_ADDRESS)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .request_extension()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn vote_on_extension(&mut self, from: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .vote_on_extension()
            .run();
    }

    pub fn vote_on_extension_error(&mut self, from: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .vote_on_extension()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    // Queries

    pub fn loan_status(&mut self) -> LoanStatus {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .loan_status()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .total_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn balance_of(&mut self, lender: TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .balance_of(lender.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_due(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .interest_due_till_instalment_deadline()
            .returns(ReturnsResult)
            .run()
    }

    pub fn interest_left(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .interest_left()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_instalment_interval(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .current_instalment_interval()
            .returns(ReturnsResult)
            .run()
    }

    pub fn next_instalment_deadline(&mut self) -> u64 {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .next_instalment_deadline()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_pool_liquidable(&mut self) -> bool {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .is_pool_liquidable()
            .returns(ReturnsResult)
            .run()
    }

    pub fn penalty_liquidity_shares(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .penalty_liquidity_shares()
            .returns(ReturnsResult)
            .run()
    }

    pub fn penalty_liquidity_amount(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .penalty_liquidity_amount()
            .returns(ReturnsResult)
            .run()
    }

    pub fn current_collateral_ratio(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .current_collateral_ratio()
            .returns(ReturnsResult)
            .run()
    }

    pub fn margin_call_end_time(&mut self, lender: TestAddress) -> u64 {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .margin_call_end_time(lender.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_loan_extension_active(&mut self) -> bool {
        self.world
            .query()
            .to(&self.pool_sc)
            .typed(proxy_pool::BorrowPoolProxy)
            .is_loan_extension_active()
            .returns(ReturnsResult)
            .run()
    }

    pub fn savings_balance_of(
        &mut self,
        account: TestAddress,
        token: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        let asset = EgldOrEsdtTokenIdentifier::esdt(token.to_token_identifier());
        self.world
            .query()
            .to(&self.savings_sc)
            .typed(proxy_savings_account::SavingsAccountProxy)
            .savings_balance(account.to_managed_address(), asset, &self.strategy_sc)
            .returns(ReturnsResult)
            .run()
    }

    /// Collateral 40 tokens + 20 tokens lent, borrow withdrawn at loan
    /// start: an Active pool with principal 20.
    pub fn setup_active_pool(&mut self) {
        self.deposit_collateral(tokens(40));
        self.lend(LENDER_ADDRESS, tokens(20));
        self.set_block_timestamp(LOAN_START_TIME);
        self.withdraw_borrowed_amount();
        assert_eq!(self.loan_status(), LoanStatus::Active);
    }
}
