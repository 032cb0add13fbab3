multiversx_sc::imports!();

use crate::{storage, utils};

#[multiversx_sc::module]
pub trait ViewModule:
    storage::StorageModule + utils::UtilsModule + common_math::SharedMathModule
{
    /// Collateral value over outstanding principal, SCALE-scaled.
    #[view(getCurrentCollateralRatio)]
    fn get_current_collateral_ratio(&self) -> BigUint {
        self.current_collateral_ratio()
    }

    /// A single lender's effective ratio, margin-call top-ups included.
    #[view(getLenderCollateralRatio)]
    fn get_lender_collateral_ratio(&self, lender: ManagedAddress) -> BigUint {
        self.lender_collateral_ratio(&lender)
    }

    /// Oracle-rate conversion between two assets, in `to_asset` units.
    #[view(getEquivalentTokens)]
    fn get_equivalent_tokens(
        &self,
        from_asset: EgldOrEsdtTokenIdentifier,
        to_asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) -> BigUint {
        self.equivalent_tokens(&from_asset, &to_asset, &amount)
    }
}
