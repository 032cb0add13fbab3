#![no_std]

pub mod proxy_credit_line;
pub mod proxy_pool;
pub mod proxy_price_oracle;
pub mod proxy_savings_account;
pub mod proxy_yield_strategy;
