#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod average;
pub mod constants;
pub mod errors;
pub mod events;
pub mod period;
pub mod status;
pub mod storage;
pub mod structs;
pub mod utils;
pub mod views;

#[multiversx_sc::contract]
pub trait CronAggregator:
    multiversx_sc_modules::pause::PauseModule
    + events::EventsModule
    + utils::UtilsModule
    + storage::StorageModule
    + views::ViewsModule
    + admin::AdminModule
{
    /// Submits one reading for the period currently open.
    /// The caller must belong to the authorized pool; the period must be inside its
    /// contribution window and below the pool-size cap.
    /// Publishes a new value once quorum is reached and refines it with every later
    /// contribution of the same period.
    #[endpoint(contribute)]
    fn contribute(&self, value: BigUint) {
        self.require_not_paused();

        let position = self.require_contribution_period();
        let caller = self.blockchain().get_caller();
        self.require_authorized_contributor(&caller);

        let ledger = self.ledger_for_period(position.index);
        self.require_can_contribute(&ledger, &caller);

        self.contribute_unchecked(ledger, value, caller);
    }
}
