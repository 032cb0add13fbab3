#![no_std]

// Invalid state

pub static ERROR_NOT_IN_COLLECTION: &[u8] = b"Pool is not collecting.";

pub static ERROR_NOT_ACTIVE: &[u8] = b"Loan is not active.";

pub static ERROR_POOL_TERMINAL: &[u8] = b"Pool already reached a terminal state.";

pub static ERROR_NOT_CANCELLED: &[u8] = b"Pool is not cancelled.";

pub static ERROR_SHARES_FROZEN: &[u8] = b"Pool share transfers are frozen.";

pub static ERROR_WITHDRAW_NOT_OPEN: &[u8] = b"Liquidity withdrawal is not open yet.";

pub static ERROR_NO_MARGIN_CALL: &[u8] = b"No open margin call for this lender.";

pub static ERROR_MARGIN_CALL_OPEN: &[u8] = b"Lender is under an open margin call.";

pub static ERROR_CREDIT_LINE_NOT_REQUESTED: &[u8] = b"Credit line is not in requested state.";

pub static ERROR_CREDIT_LINE_NOT_ACTIVE: &[u8] = b"Credit line is not active.";

pub static ERROR_DEBT_OUTSTANDING: &[u8] = b"Credit line still has outstanding debt.";

// Unauthorized

pub static ERROR_ONLY_BORROWER: &[u8] = b"Only the borrower may call this.";

pub static ERROR_ONLY_LENDER: &[u8] = b"Only a lender may call this.";

pub static ERROR_NOT_COUNTERPARTY: &[u8] = b"Caller is not a party to this credit line.";

pub static ERROR_AUTO_LIQUIDATION_DISABLED: &[u8] =
    b"Only the lender may liquidate this credit line.";

pub static ERROR_SELF_CREDIT_LINE: &[u8] = b"Cannot open a credit line with yourself.";

// Below threshold

pub static ERROR_AMOUNT_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_POOL_SIZE_EXCEEDED: &[u8] = b"Lending above the pool size.";

pub static ERROR_BELOW_MIN_BORROW: &[u8] = b"Collected amount is below the minimum borrow fraction.";

pub static ERROR_INSUFFICIENT_SHARES: &[u8] = b"Insufficient pool shares.";

pub static ERROR_INSUFFICIENT_PAYMENT: &[u8] = b"Payment does not cover the required amount.";

pub static ERROR_COLLATERAL_RATIO_BREACHED: &[u8] = b"Collateral ratio below the ideal ratio.";

pub static ERROR_COLLATERAL_RATIO_HEALTHY: &[u8] = b"Collateral ratio is not below the ideal ratio.";

pub static ERROR_BORROW_LIMIT_EXCEEDED: &[u8] = b"Borrowing above the credit line limit.";

pub static ERROR_REPAY_EXCEEDS_INTEREST: &[u8] =
    b"Repayment exceeds the interest left; principal is repaid separately.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repayment exceeds the outstanding debt.";

pub static ERROR_PRINCIPAL_REPAY_MISMATCH: &[u8] =
    b"Principal repayment must cover the full principal and interest left.";

// Already processed

pub static ERROR_PENALTY_ALREADY_LIQUIDATED: &[u8] = b"Cancel penalty already liquidated.";

pub static ERROR_EXTENSION_ALREADY_AVAILED: &[u8] = b"Extension already availed for this loan.";

pub static ERROR_EXTENSION_PENDING: &[u8] = b"An extension request is already pending.";

pub static ERROR_NO_EXTENSION_PENDING: &[u8] = b"No extension request is pending.";

pub static ERROR_ALREADY_VOTED: &[u8] = b"Lender already voted on this extension.";

pub static ERROR_MARGIN_CALL_ALREADY_OPEN: &[u8] = b"Margin call already requested by this lender.";

pub static ERROR_CREDIT_LINE_EXISTS: &[u8] = b"Credit line id already exists.";

// Deadlines

pub static ERROR_COLLECTION_ENDED: &[u8] = b"Collection period has ended.";

pub static ERROR_LOAN_NOT_STARTED: &[u8] = b"Loan start time not reached.";

pub static ERROR_WITHDRAWAL_DEADLINE_PASSED: &[u8] = b"Loan withdrawal deadline has passed.";

pub static ERROR_NOT_LIQUIDABLE: &[u8] = b"Pool is not liquidable yet.";

pub static ERROR_LOAN_DEFAULTED: &[u8] = b"Grace period elapsed; the pool can only be liquidated.";

pub static ERROR_MARGIN_CALL_NOT_EXPIRED: &[u8] = b"Margin call cure window has not elapsed.";

pub static ERROR_MARGIN_CALL_EXPIRED: &[u8] = b"Margin call cure window has elapsed.";

pub static ERROR_VOTE_WINDOW_CLOSED: &[u8] = b"Extension vote window has closed.";

// External dependencies

pub static ERROR_NO_PRICE_FEED: &[u8] = b"No price feed for this asset pair.";

pub static ERROR_STRATEGY_NOT_APPROVED: &[u8] = b"Strategy not approved.";

pub static ERROR_STRATEGY_ALREADY_APPROVED: &[u8] = b"Strategy already approved.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset provided.";

pub static ERROR_LIQUIDITY_SHORTFALL: &[u8] =
    b"Strategy returned less than the recorded liquidity.";

// Arithmetic guards

pub static ERROR_DIVISION_BY_ZERO: &[u8] = b"Division by zero.";

pub static ERROR_INSUFFICIENT_SAVINGS: &[u8] = b"Insufficient savings balance.";

pub static ERROR_INSUFFICIENT_ALLOWANCE: &[u8] = b"Insufficient savings allowance.";

// Parameter validation

pub static ERROR_INVALID_FRACTION: &[u8] = b"Fraction must not exceed 100%.";

pub static ERROR_INVALID_INTERVALS: &[u8] = b"Invalid number of repayment intervals.";

pub static ERROR_INVALID_DURATION: &[u8] = b"Durations must be greater than zero.";
