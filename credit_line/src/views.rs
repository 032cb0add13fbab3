multiversx_sc::imports!();

use crate::{storage, utils};

#[multiversx_sc::module]
pub trait ViewModule:
    storage::StorageModule + utils::UtilsModule + common_math::SharedMathModule
{
    /// Interest accrued to date, the lazily-stored part plus the live tail.
    #[view(calculateInterestAccrued)]
    fn calculate_interest_accrued(&self, id: ManagedByteArray<Self::Api, 32>) -> BigUint {
        let constants = self.credit_line_constants(&id).get();
        let variables = self.credit_line_variables(&id).get();
        &variables.interest_accrued + &self.pending_interest(&constants, &variables)
    }

    #[view(calculateCurrentDebt)]
    fn calculate_current_debt(&self, id: ManagedByteArray<Self::Api, 32>) -> BigUint {
        let variables = self.credit_line_variables(&id).get();
        &variables.principal + &self.calculate_interest_accrued(id)
    }

    /// SCALE-scaled collateral ratio against the live debt. Fails while the
    /// line carries no debt.
    #[view(calculateCurrentCollateralRatio)]
    fn calculate_current_collateral_ratio(&self, id: ManagedByteArray<Self::Api, 32>) -> BigUint {
        let constants = self.credit_line_constants(&id).get();
        let variables = self.credit_line_variables(&id).get();
        let debt = &variables.principal + &self.pending_interest(&constants, &variables)
            + &variables.interest_accrued;
        self.collateral_ratio(&constants, &variables, &debt)
    }
}
