multiversx_sc::imports!();

use common_errors::{
    ERROR_ALREADY_VOTED, ERROR_EXTENSION_ALREADY_AVAILED, ERROR_EXTENSION_PENDING,
    ERROR_NOT_ACTIVE, ERROR_NO_EXTENSION_PENDING, ERROR_ONLY_LENDER, ERROR_VOTE_WINDOW_CLOSED,
};
use common_structs::{ExtensionRequest, LoanStatus};

use crate::{collateral, repayments, storage, utils};

/// Lender-voted deadline extension: one request per loan, share-weighted
/// votes, immediate pass at the threshold.
#[multiversx_sc::module]
pub trait ExtensionModule:
    storage::StorageModule
    + utils::UtilsModule
    + repayments::RepaymentsModule
    + collateral::CollateralModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Borrower asks the lenders for one extra repayment interval on the
    /// current instalment. Permanently consumes the single extension slot,
    /// whether or not the vote passes.
    #[endpoint(requestExtension)]
    fn request_extension(&self) {
        let caller = self.blockchain().get_caller();
        self.require_borrower(&caller);
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);

        require!(
            !self.extension_availed().get(),
            ERROR_EXTENSION_ALREADY_AVAILED
        );
        require!(self.extension_request().is_empty(), ERROR_EXTENSION_PENDING);

        self.extension_availed().set(true);

        let config = self.pool_config().get();
        let vote_end_time = self.now() + config.extension_vote_duration;
        self.extension_request().set(&ExtensionRequest {
            vote_end_time,
            total_vote_weight: BigUint::zero(),
            requested_at_interval: self.capped_instalment_interval(),
        });

        self.extension_requested_event(&caller, vote_end_time);
    }

    /// One share-weighted vote per lender. The extension passes the moment
    /// cumulative weight reaches `voting_pass_ratio` of the supply; no need
    /// to wait for the window to close.
    #[endpoint(voteOnExtension)]
    fn vote_on_extension(&self) {
        self.require_status(LoanStatus::Active, ERROR_NOT_ACTIVE);
        require!(
            !self.extension_request().is_empty(),
            ERROR_NO_EXTENSION_PENDING
        );

        let mut request = self.extension_request().get();
        require!(self.now() <= request.vote_end_time, ERROR_VOTE_WINDOW_CLOSED);

        let caller = self.blockchain().get_caller();
        let weight = self.lender_shares(&caller).get();
        require!(weight > BigUint::zero(), ERROR_ONLY_LENDER);
        require!(!self.extension_voted(&caller).get(), ERROR_ALREADY_VOTED);

        self.extension_voted(&caller).set(true);
        request.total_vote_weight += &weight;

        self.extension_vote_cast_event(&caller, &weight, &request.total_vote_weight);

        let config = self.pool_config().get();
        let threshold = self.fraction_of(&self.total_supply().get(), &config.voting_pass_ratio);
        if request.total_vote_weight >= threshold {
            self.extension_request().clear();

            let interval = self.capped_instalment_interval();
            self.is_loan_extension_active().set(true);
            self.extension_granted_interval().set(interval);

            self.extension_passed_event(interval);
        } else {
            self.extension_request().set(&request);
        }
    }

    #[view(getExtensionVoteEndTime)]
    fn get_extension_vote_end_time(&self) -> u64 {
        if self.extension_request().is_empty() {
            0
        } else {
            self.extension_request().get().vote_end_time
        }
    }

    #[view(getExtensionTotalVoteWeight)]
    fn get_extension_total_vote_weight(&self) -> BigUint {
        if self.extension_request().is_empty() {
            BigUint::zero()
        } else {
            self.extension_request().get().total_vote_weight
        }
    }
}
