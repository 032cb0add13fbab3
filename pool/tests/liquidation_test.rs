use common_errors::{
    ERROR_COLLATERAL_RATIO_HEALTHY, ERROR_MARGIN_CALL_ALREADY_OPEN, ERROR_MARGIN_CALL_OPEN,
    ERROR_NOT_LIQUIDABLE, ERROR_PENALTY_ALREADY_LIQUIDATED, ERROR_POOL_TERMINAL,
};
use multiversx_sc_scenario::api::StaticApi;
use multiversx_sc_scenario::imports::BigUint;
use multiversx_sc_scenario::ScenarioTxRun;
use pool::LoanStatus;

pub mod constants;
pub mod setup;

use constants::*;
use setup::*;

/// Mirror of the pool's payout pricing: value of the seized shares at the
/// oracle rate, minus the 5% liquidator reward discount.
fn required_payment(seized_shares: &BigUint<StaticApi>, rate: u64) -> BigUint<StaticApi> {
    let value = seized_shares * &BigUint::from(rate);
    let reward = &value * &pct(5) / scale();
    value - reward
}

#[test]
fn test_default_liquidation_scenario() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    // first instalment missed, grace elapsed
    state.set_block_timestamp(LOAN_START_TIME + REPAYMENT_INTERVAL + GRACE_PERIOD_SECONDS + 1);
    assert!(state.is_pool_liquidable());

    let seized = tokens(40) - 2u64; // dust buffer stays behind
    let required = required_payment(&seized, COLLATERAL_RATE);

    state.liquidate_pool(LIQUIDATOR_ADDRESS, required.clone());

    assert_eq!(state.loan_status(), LoanStatus::Defaulted);
    assert_eq!(state.penalty_liquidity_amount(), required.clone());

    // liquidator paid `required` and took the collateral tokens
    state
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .esdt_balance(BORROW_TOKEN, tokens(1_000) - &required)
        .esdt_balance(COLLATERAL_TOKEN, tokens(1_000) + &seized);

    // the lender's recovery is the liquidation pot
    state.withdraw_liquidity(LENDER_ADDRESS);
    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(BORROW_TOKEN, tokens(1_000) - tokens(20) + &required);
}

#[test]
fn test_liquidation_before_grace_elapses_rejected() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    state.set_block_timestamp(LOAN_START_TIME + REPAYMENT_INTERVAL + GRACE_PERIOD_SECONDS);
    state.liquidate_pool_error(LIQUIDATOR_ADDRESS, tokens(100), ERROR_NOT_LIQUIDABLE);
}

#[test]
fn test_liquidation_payout_bound() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    state.set_block_timestamp(LOAN_START_TIME + REPAYMENT_INTERVAL + GRACE_PERIOD_SECONDS + 1);

    let seized = tokens(40) - 2u64;
    let value = &seized * &BigUint::from(COLLATERAL_RATE);
    let required = required_payment(&seized, COLLATERAL_RATE);

    state.liquidate_pool(LIQUIDATOR_ADDRESS, required.clone());

    // the liquidator's net gain is capped by the reward fraction
    let net_gain = &value - &required;
    assert!(net_gain <= &value * &pct(5) / scale());
    // everything else is attributable to the lenders
    assert_eq!(state.penalty_liquidity_amount(), required);
}

#[test]
fn test_cancel_penalty_liquidation() {
    let mut state = PoolTestState::new();

    state.deposit_collateral(tokens(40));
    state.lend(LENDER_ADDRESS, tokens(20));

    // borrower walks away after the loan start: penalty accrues
    state.set_block_timestamp(LOAN_START_TIME + 2_000);
    state.cancel_pool(BORROWER_ADDRESS);

    let penalty_shares = state.penalty_liquidity_shares();
    assert!(penalty_shares > BigUint::zero());

    let claimable = &penalty_shares - 2u64;
    let required = required_payment(&claimable, COLLATERAL_RATE);

    state.liquidate_cancel_penalty(LIQUIDATOR_ADDRESS, required.clone());

    assert_eq!(state.penalty_liquidity_amount(), required.clone());
    state
        .world
        .check_account(LIQUIDATOR_ADDRESS)
        .esdt_balance(COLLATERAL_TOKEN, tokens(1_000) + &claimable);

    // single shot
    state.liquidate_cancel_penalty_error(
        LIQUIDATOR_ADDRESS,
        required.clone(),
        ERROR_PENALTY_ALREADY_LIQUIDATED,
    );

    // lender recovers principal plus the whole penalty pot
    state.withdraw_liquidity(LENDER_ADDRESS);
    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(BORROW_TOKEN, tokens(1_000) + &required);
}

#[test]
fn test_margin_call_cure_flow() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    // collateral value drops: 40 * 0.9 = 36 against the 2.0 ideal on 20
    state.set_collateral_rate(9, 1);
    state.request_margin_call(LENDER_ADDRESS);
    assert!(state.margin_call_end_time(LENDER_ADDRESS) > 0);

    // no duplicate calls, and the called lender's shares are frozen
    state.request_margin_call_error(LENDER_ADDRESS, ERROR_MARGIN_CALL_ALREADY_OPEN);
    state.transfer_pool_shares_error(
        LENDER_ADDRESS,
        SECOND_LENDER_ADDRESS,
        tokens(1),
        ERROR_MARGIN_CALL_OPEN,
    );

    // borrower tops up 10 tokens for this lender, restoring their ratio
    state.add_collateral_in_margin_call(BORROWER_ADDRESS, LENDER_ADDRESS, tokens(10));
    assert_eq!(state.margin_call_end_time(LENDER_ADDRESS), 0);
}

#[test]
fn test_margin_call_requires_unhealthy_ratio() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    // ratio is 4.0, well above the 2.0 ideal
    state.request_margin_call_error(LENDER_ADDRESS, ERROR_COLLATERAL_RATIO_HEALTHY);
}

#[test]
fn test_liquidate_for_lender_transfers_the_claim() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    state.set_collateral_rate(9, 1);
    state.request_margin_call(LENDER_ADDRESS);
    let end_time = state.margin_call_end_time(LENDER_ADDRESS);

    // cure window expires uncured
    state.set_block_timestamp(end_time + 1);

    let balance = tokens(20);
    let payment = &balance - &(&balance * &pct(5) / scale());
    state.liquidate_for_lender(LIQUIDATOR_ADDRESS, LENDER_ADDRESS, payment.clone());

    // the claim moved whole; principal and collateral are untouched
    assert_eq!(state.balance_of(LENDER_ADDRESS), BigUint::zero());
    assert_eq!(state.balance_of(LIQUIDATOR_ADDRESS), balance);
    assert_eq!(state.total_supply(), tokens(20));
    assert_eq!(state.margin_call_end_time(LENDER_ADDRESS), 0);

    // the bought-out lender was paid at the reward discount
    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(BORROW_TOKEN, tokens(1_000) - tokens(20) + &payment);
}

#[test]
fn test_terminate_pool_is_terminal() {
    let mut state = PoolTestState::new();
    state.setup_active_pool();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.pool_sc)
        .typed(common_proxies::proxy_pool::BorrowPoolProxy)
        .terminate_pool()
        .run();

    assert_eq!(state.loan_status(), LoanStatus::Terminated);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&state.pool_sc)
        .typed(common_proxies::proxy_pool::BorrowPoolProxy)
        .terminate_pool()
        .returns(multiversx_sc_scenario::imports::ExpectMessage(
            core::str::from_utf8(ERROR_POOL_TERMINAL).unwrap(),
        ))
        .run();
}
