use crate::structs::TimeSettings;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait AdminModule:
    crate::storage::StorageModule
    + multiversx_sc_modules::pause::PauseModule
    + crate::utils::UtilsModule
    + crate::views::ViewsModule
    + crate::events::EventsModule
{
    /// Time settings are validated first, then contribution settings.
    /// Deployment is never blocked by the contribution window lock.
    #[init]
    fn init(
        &self,
        initial_value: BigUint,
        time_base: u64,
        frequency: u64,
        window: u64,
        min_contributors: usize,
        only_unique: bool,
        contributors: MultiValueEncoded<ManagedAddress>,
    ) {
        let time_settings = TimeSettings {
            time_base,
            frequency,
            window,
        };
        self.require_valid_time_settings(&time_settings);

        let contributors = self.collect_contributors(contributors);
        self.require_valid_contribution_settings(min_contributors, &contributors);

        self.store_time_settings(&time_settings);
        self.store_contribution_settings(min_contributors, only_unique, &contributors);

        self.current_value().set(initial_value);
        self.is_aggregated().set(false);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Manual override of the published value. Switches the aggregator to manual
    /// mode until the next aggregation publishes a value.
    #[only_owner]
    #[endpoint(setCurrentValue)]
    fn set_current_value(&self, value: BigUint) {
        self.current_value().set(&value);
        self.is_aggregated().set(false);
        self.current_value_set_event(&value);
    }

    /// Replaces quorum, uniqueness flag and contributor pool at once.
    #[only_owner]
    #[endpoint(updateContributionSettings)]
    fn update_contribution_settings(
        &self,
        min_contributors: usize,
        only_unique: bool,
        contributors: MultiValueEncoded<ManagedAddress>,
    ) {
        let contributors = self.collect_contributors(contributors);
        self.require_valid_contribution_settings(min_contributors, &contributors);
        self.require_not_contribution_period();

        self.store_contribution_settings(min_contributors, only_unique, &contributors);
    }

    /// Re-anchors the schedule. The period that just closed keeps its outcome
    /// under the new schedule; see `carry_ledger_over`.
    #[only_owner]
    #[endpoint(updateTimeSettings)]
    fn update_time_settings(&self, time_base: u64, frequency: u64, window: u64) {
        let time_settings = TimeSettings {
            time_base,
            frequency,
            window,
        };
        self.require_valid_time_settings(&time_settings);
        self.require_not_contribution_period();

        let previous_index = self.current_position().map(|position| position.index);
        self.store_time_settings(&time_settings);
        self.carry_ledger_over(previous_index);
    }
}
