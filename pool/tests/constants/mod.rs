use multiversx_sc::types::{BigUint, EgldOrEsdtTokenIdentifier, TestAddress, TestSCAddress};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{MxscPath, TestTokenIdentifier},
};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

// Pool timeline (seconds)
pub const COLLECTION_PERIOD: u64 = 10_000;
pub const LOAN_WITHDRAWAL_DURATION: u64 = 5_000;
pub const REPAYMENT_INTERVAL: u64 = 1_000;
pub const NO_OF_REPAYMENT_INTERVALS: u64 = 10;
pub const LOAN_START_TIME: u64 = COLLECTION_PERIOD;
pub const LOAN_WITHDRAWAL_DEADLINE: u64 = LOAN_START_TIME + LOAN_WITHDRAWAL_DURATION;

// Protocol config
pub const MARGIN_CALL_DURATION: u64 = 1_000;
pub const EXTENSION_VOTE_DURATION: u64 = 500;
pub const GRACE_PERIOD_SECONDS: u64 = 100; // 10% of the repayment interval

pub const BORROW_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const COLLATERAL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");

// 1 collateral token = 2 borrow tokens, at 0 decimals
pub const COLLATERAL_RATE: u64 = 2;
pub const COLLATERAL_RATE_DECIMALS: u8 = 0;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const SECOND_LENDER_ADDRESS: TestAddress = TestAddress::new("second-lender");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const FEE_COLLECTOR_ADDRESS: TestAddress = TestAddress::new("fee-collector");

pub const POOL_ADDRESS: TestSCAddress = TestSCAddress::new("pool");
pub const SAVINGS_ACCOUNT_ADDRESS: TestSCAddress = TestSCAddress::new("savings-account");
pub const STRATEGY_ADDRESS: TestSCAddress = TestSCAddress::new("strategy");
pub const ORACLE_ADDRESS: TestSCAddress = TestSCAddress::new("oracle");

pub const POOL_PATH: MxscPath = MxscPath::new("output/pool.mxsc.json");
pub const SAVINGS_ACCOUNT_PATH: MxscPath =
    MxscPath::new("../savings_account/output/savings-account.mxsc.json");
pub const STRATEGY_MOCK_PATH: MxscPath =
    MxscPath::new("../strategy_mock/output/strategy-mock.mxsc.json");
pub const ORACLE_MOCK_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle-mock.mxsc.json");

pub fn scale() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(30)
}

/// `n` percent as a SCALE-scaled fraction.
pub fn pct(n: u64) -> BigUint<StaticApi> {
    scale() * n / 100u64
}

/// `n` whole tokens at 18 decimals.
pub fn tokens(n: u64) -> BigUint<StaticApi> {
    BigUint::from(n) * BigUint::from(10u64).pow(18)
}

pub fn borrow_asset() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(BORROW_TOKEN.to_token_identifier())
}

pub fn collateral_asset() -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(COLLATERAL_TOKEN.to_token_identifier())
}

/// Mirror of the contract's truncating interest math: SCALE-scaled interest
/// per second on `principal` at `rate`.
pub fn interest_per_second(principal: BigUint<StaticApi>, rate: BigUint<StaticApi>) -> BigUint<StaticApi> {
    principal * rate / BigUint::from(SECONDS_PER_YEAR)
}

/// Raw-token interest for `seconds` of borrowing.
pub fn interest_for(
    principal: BigUint<StaticApi>,
    rate: BigUint<StaticApi>,
    seconds: u64,
) -> BigUint<StaticApi> {
    interest_per_second(principal, rate) * BigUint::from(seconds) / scale()
}
