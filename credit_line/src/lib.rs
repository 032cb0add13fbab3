#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod facility;
pub mod storage;
pub mod utils;
pub mod views;

pub use common_structs::*;

use common_constants::SCALE;
use common_errors::ERROR_INVALID_FRACTION;

/// Bilateral credit facility: one lender, one borrower, scalar
/// principal/interest accounting per line. Shares the savings ledger and
/// price oracle with the pools but has no fungible claim tokens.
#[multiversx_sc::contract]
pub trait CreditLine:
    storage::StorageModule
    + utils::UtilsModule
    + facility::FacilityModule
    + views::ViewModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    #[init]
    fn init(
        &self,
        savings_account: ManagedAddress,
        price_oracle: ManagedAddress,
        liquidator_reward_fraction: BigUint,
    ) {
        require!(
            liquidator_reward_fraction <= BigUint::from(SCALE),
            ERROR_INVALID_FRACTION
        );
        self.savings_account().set(&savings_account);
        self.price_oracle().set(&price_oracle);
        self.liquidator_reward_fraction()
            .set(&liquidator_reward_fraction);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
