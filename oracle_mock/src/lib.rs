#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_NO_PRICE_FEED;

/// Settable implementation of the price oracle port. The rate for a pair is
/// expressed as to-asset units per from-asset unit, scaled by 10^decimals.
/// Querying an unset pair fails, which callers treat as an external
/// dependency failure aborting their whole operation.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setExchangeRate)]
    fn set_exchange_rate(
        &self,
        from: EgldOrEsdtTokenIdentifier,
        to: EgldOrEsdtTokenIdentifier,
        rate: BigUint,
        decimals: u8,
    ) {
        self.exchange_rate(&from, &to).set((rate, decimals));
    }

    #[view(getLatestPrice)]
    fn get_latest_price(
        &self,
        from: EgldOrEsdtTokenIdentifier,
        to: EgldOrEsdtTokenIdentifier,
    ) -> MultiValue2<BigUint, u8> {
        let mapper = self.exchange_rate(&from, &to);
        require!(!mapper.is_empty(), ERROR_NO_PRICE_FEED);

        let (rate, decimals) = mapper.get();
        (rate, decimals).into()
    }

    #[storage_mapper("exchange_rate")]
    fn exchange_rate(
        &self,
        from: &EgldOrEsdtTokenIdentifier,
        to: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<(BigUint, u8)>;
}
