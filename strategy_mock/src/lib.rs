#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_AMOUNT_ZERO;

/// No-yield reference implementation of the yield strategy port: shares map
/// 1:1 to tokens and the contract simply holds the deposited funds. The real
/// adapters (Aave/Compound/Yearn style) live outside this workspace and only
/// need to honor the same four endpoints.
#[multiversx_sc::contract]
pub trait StrategyMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(depositAndGetShares)]
    fn deposit_and_get_shares(&self) -> BigUint {
        let (_, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        // 1 share per token, funds stay on the contract
        amount
    }

    #[endpoint(withdrawShares)]
    fn withdraw_shares(&self, asset: EgldOrEsdtTokenIdentifier, shares: BigUint) -> BigUint {
        require!(shares > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&asset, 0, &shares)
            .transfer();

        shares
    }

    #[view(sharesToTokens)]
    fn shares_to_tokens(&self, _asset: EgldOrEsdtTokenIdentifier, shares: BigUint) -> BigUint {
        shares
    }

    #[view(tokensToShares)]
    fn tokens_to_shares(&self, _asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        amount
    }

    #[view(liquidityTokenFor)]
    fn liquidity_token_for(&self, asset: EgldOrEsdtTokenIdentifier) -> EgldOrEsdtTokenIdentifier {
        asset
    }
}
