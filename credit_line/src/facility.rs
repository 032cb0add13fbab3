multiversx_sc::imports!();

use common_errors::{
    ERROR_AMOUNT_ZERO, ERROR_AUTO_LIQUIDATION_DISABLED, ERROR_BORROW_LIMIT_EXCEEDED,
    ERROR_COLLATERAL_RATIO_BREACHED, ERROR_COLLATERAL_RATIO_HEALTHY,
    ERROR_CREDIT_LINE_EXISTS, ERROR_CREDIT_LINE_NOT_ACTIVE, ERROR_CREDIT_LINE_NOT_REQUESTED,
    ERROR_DEBT_OUTSTANDING, ERROR_INSUFFICIENT_PAYMENT, ERROR_NOT_COUNTERPARTY,
    ERROR_ONLY_BORROWER, ERROR_REPAY_EXCEEDS_DEBT, ERROR_SELF_CREDIT_LINE,
};
use common_structs::{CreditLineConstants, CreditLineStatus, CreditLineVariables};

use crate::{storage, utils};

#[multiversx_sc::module]
pub trait FacilityModule:
    storage::StorageModule
    + utils::UtilsModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Opens a credit line request. The caller takes either side
    /// (`as_lender`); the counterparty must `accept` before anything moves.
    /// The id is the hash of the sorted party addresses and a nonce.
    ///
    /// # Returns
    /// - The new credit line id.
    #[endpoint(request)]
    fn request(
        &self,
        counterparty: ManagedAddress,
        as_lender: bool,
        borrow_limit: BigUint,
        borrow_rate: BigUint,
        collateral_ratio: BigUint,
        auto_liquidation: bool,
        borrow_asset: EgldOrEsdtTokenIdentifier,
        collateral_asset: EgldOrEsdtTokenIdentifier,
        savings_strategy: ManagedAddress,
    ) -> ManagedByteArray<Self::Api, 32> {
        let caller = self.blockchain().get_caller();
        require!(caller != counterparty, ERROR_SELF_CREDIT_LINE);
        require!(borrow_limit > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let (lender, borrower) = if as_lender {
            (caller.clone(), counterparty.clone())
        } else {
            (counterparty.clone(), caller.clone())
        };

        let id = self.derive_credit_line_id(&lender, &borrower);
        require!(
            self.credit_line_constants(&id).is_empty(),
            ERROR_CREDIT_LINE_EXISTS
        );

        self.credit_line_constants(&id).set(&CreditLineConstants {
            lender,
            borrower,
            borrow_limit,
            borrow_rate,
            collateral_ratio,
            auto_liquidation,
            borrow_asset,
            collateral_asset,
            savings_strategy,
        });
        self.credit_line_variables(&id).set(&CreditLineVariables {
            status: CreditLineStatus::Requested,
            principal: BigUint::zero(),
            interest_accrued: BigUint::zero(),
            last_accrual_time: self.now(),
            collateral_shares: BigUint::zero(),
            total_interest_repaid: BigUint::zero(),
        });
        self.credit_line_requested_by(&id).set(&caller);

        self.credit_line_requested_event(&id, &caller);

        id
    }

    /// Counterparty activates the requested line.
    #[endpoint(accept)]
    fn accept(&self, id: ManagedByteArray<Self::Api, 32>) {
        let mut variables = self.existing_variables(&id);
        require!(
            variables.status == CreditLineStatus::Requested,
            ERROR_CREDIT_LINE_NOT_REQUESTED
        );

        let caller = self.blockchain().get_caller();
        let constants = self.credit_line_constants(&id).get();
        require!(
            caller == constants.lender || caller == constants.borrower,
            ERROR_NOT_COUNTERPARTY
        );
        require!(
            caller != self.credit_line_requested_by(&id).get(),
            ERROR_NOT_COUNTERPARTY
        );

        variables.status = CreditLineStatus::Active;
        variables.last_accrual_time = self.now();
        self.credit_line_variables(&id).set(&variables);

        self.credit_line_accepted_event(&id, &caller);
    }

    /// Borrower-side collateral top-up, held in the savings ledger under
    /// this contract.
    #[payable("*")]
    #[endpoint(depositCollateral)]
    fn deposit_collateral(
        &self,
        id: ManagedByteArray<Self::Api, 32>,
        amount: BigUint,
        from_savings: bool,
    ) {
        let mut variables = self.existing_variables(&id);
        self.require_active(&variables);
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        let constants = self.credit_line_constants(&id).get();
        require!(caller == constants.borrower, ERROR_ONLY_BORROWER);

        let shares = if from_savings {
            self.savings_pull_shares_for_self(
                &caller,
                &constants.collateral_asset,
                &constants.savings_strategy,
                &amount,
            )
        } else {
            let payment = self.collect_payment_in(&constants.collateral_asset);
            require!(payment == amount, ERROR_INSUFFICIENT_PAYMENT);
            self.savings_deposit_for_self(
                &constants.collateral_asset,
                &amount,
                &constants.savings_strategy,
            )
        };

        variables.collateral_shares += &shares;
        self.credit_line_variables(&id).set(&variables);

        self.credit_line_collateral_deposited_event(&id, &variables.collateral_shares);
    }

    /// Draws funds from the lender's savings (via this contract's allowance)
    /// straight to the borrower. The post-draw debt must stay within the
    /// borrow limit and above the required collateral ratio.
    #[endpoint(borrow)]
    fn borrow(&self, id: ManagedByteArray<Self::Api, 32>, amount: BigUint) {
        let mut variables = self.existing_variables(&id);
        self.require_active(&variables);
        require!(amount > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let caller = self.blockchain().get_caller();
        let constants = self.credit_line_constants(&id).get();
        require!(caller == constants.borrower, ERROR_ONLY_BORROWER);

        self.accrue(&constants, &mut variables);

        let debt_after = self.current_debt(&variables) + &amount;
        require!(
            debt_after <= constants.borrow_limit,
            ERROR_BORROW_LIMIT_EXCEEDED
        );

        variables.principal += &amount;
        let ratio = self.collateral_ratio(&constants, &variables, &debt_after);
        require!(
            ratio >= constants.collateral_ratio,
            ERROR_COLLATERAL_RATIO_BREACHED
        );

        self.savings_pull_tokens_to(
            &constants.lender,
            &constants.borrow_asset,
            &constants.savings_strategy,
            &amount,
            &constants.borrower,
        );

        self.credit_line_variables(&id).set(&variables);

        self.credit_line_borrowed_event(&id, &amount, &variables.principal);
    }

    /// Anyone may repay. Interest is settled before principal; overpaying
    /// the total debt is rejected. Funds go straight to the lender.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, id: ManagedByteArray<Self::Api, 32>) {
        let mut variables = self.existing_variables(&id);
        self.require_active(&variables);

        let constants = self.credit_line_constants(&id).get();
        let payment = self.collect_payment_in(&constants.borrow_asset);
        require!(payment > BigUint::zero(), ERROR_AMOUNT_ZERO);

        self.accrue(&constants, &mut variables);
        let debt = self.current_debt(&variables);
        require!(payment <= debt, ERROR_REPAY_EXCEEDS_DEBT);

        let (interest_part, principal_part) = if payment <= variables.interest_accrued {
            (payment.clone(), BigUint::zero())
        } else {
            let principal_part = &payment - &variables.interest_accrued;
            (variables.interest_accrued.clone(), principal_part)
        };

        variables.interest_accrued -= &interest_part;
        variables.principal -= &principal_part;
        variables.total_interest_repaid += &interest_part;
        self.credit_line_variables(&id).set(&variables);

        self.send_asset(&constants.borrow_asset, &constants.lender, &payment);

        self.credit_line_repaid_event(&id, &interest_part, &principal_part);
    }

    /// Either party may close. A requested line closes unconditionally; an
    /// active one only once the debt is fully repaid. Collateral goes back
    /// to the borrower's savings.
    #[endpoint(close)]
    fn close(&self, id: ManagedByteArray<Self::Api, 32>) {
        let mut variables = self.existing_variables(&id);

        let caller = self.blockchain().get_caller();
        let constants = self.credit_line_constants(&id).get();
        require!(
            caller == constants.lender || caller == constants.borrower,
            ERROR_NOT_COUNTERPARTY
        );

        match variables.status {
            CreditLineStatus::Requested => {}
            CreditLineStatus::Active => {
                self.accrue(&constants, &mut variables);
                require!(
                    self.current_debt(&variables) == BigUint::zero(),
                    ERROR_DEBT_OUTSTANDING
                );
                let collateral = core::mem::replace(
                    &mut variables.collateral_shares,
                    BigUint::zero(),
                );
                self.savings_transfer_collateral(&constants, &collateral, &constants.borrower);
            }
            CreditLineStatus::Closed => {
                sc_panic!(ERROR_CREDIT_LINE_NOT_ACTIVE)
            }
        }

        variables.status = CreditLineStatus::Closed;
        self.credit_line_variables(&id).set(&variables);

        self.credit_line_closed_event(&id);
    }

    /// Liquidates an under-collateralized line. The lender may always call
    /// and simply takes the collateral against the written-off debt. With
    /// auto-liquidation enabled, any caller may instead pay the lender the
    /// debt minus the liquidator reward discount and take the collateral.
    #[payable("*")]
    #[endpoint(liquidate)]
    fn liquidate(&self, id: ManagedByteArray<Self::Api, 32>) {
        let mut variables = self.existing_variables(&id);
        self.require_active(&variables);

        let constants = self.credit_line_constants(&id).get();
        self.accrue(&constants, &mut variables);

        let debt = self.current_debt(&variables);
        require!(debt > BigUint::zero(), ERROR_AMOUNT_ZERO);

        let ratio = self.collateral_ratio(&constants, &variables, &debt);
        require!(
            ratio < constants.collateral_ratio,
            ERROR_COLLATERAL_RATIO_HEALTHY
        );

        let caller = self.blockchain().get_caller();
        if caller != constants.lender {
            require!(constants.auto_liquidation, ERROR_AUTO_LIQUIDATION_DISABLED);

            let required =
                self.after_fraction(&debt, &self.liquidator_reward_fraction().get());
            let payment = self.collect_payment_in(&constants.borrow_asset);
            require!(payment >= required, ERROR_INSUFFICIENT_PAYMENT);

            let excess = payment - &required;
            self.send_asset(&constants.borrow_asset, &caller, &excess);
            self.send_asset(&constants.borrow_asset, &constants.lender, &required);
        }

        let collateral = core::mem::replace(&mut variables.collateral_shares, BigUint::zero());
        self.savings_transfer_collateral(&constants, &collateral, &caller);

        variables.principal = BigUint::zero();
        variables.interest_accrued = BigUint::zero();
        variables.status = CreditLineStatus::Closed;
        self.credit_line_variables(&id).set(&variables);

        self.credit_line_liquidated_event(&id, &caller, &debt, &collateral);
    }

    fn existing_variables(
        &self,
        id: &ManagedByteArray<Self::Api, 32>,
    ) -> CreditLineVariables<Self::Api> {
        let mapper = self.credit_line_variables(id);
        require!(!mapper.is_empty(), ERROR_CREDIT_LINE_NOT_REQUESTED);
        mapper.get()
    }

    /// `keccak256(sorted parties ‖ nonce)`.
    fn derive_credit_line_id(
        &self,
        lender: &ManagedAddress,
        borrower: &ManagedAddress,
    ) -> ManagedByteArray<Self::Api, 32> {
        let nonce = self.credit_line_nonce().get();
        self.credit_line_nonce().set(nonce + 1);

        let lender_bytes = lender.as_managed_byte_array().to_byte_array();
        let borrower_bytes = borrower.as_managed_byte_array().to_byte_array();

        let mut data = ManagedBuffer::new();
        if lender_bytes <= borrower_bytes {
            data.append(lender.as_managed_buffer());
            data.append(borrower.as_managed_buffer());
        } else {
            data.append(borrower.as_managed_buffer());
            data.append(lender.as_managed_buffer());
        }
        data.append(&ManagedBuffer::from(&nonce.to_be_bytes()[..]));

        self.crypto().keccak256(&data)
    }
}
