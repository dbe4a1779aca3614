multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{
    average,
    constants::MAX_CONTRIBUTORS,
    errors::*,
    period::PeriodPosition,
    structs::{Aggregation, ContributionLedger, TimeSettings},
};

#[multiversx_sc::module]
pub trait UtilsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::views::ViewsModule
    + multiversx_sc_modules::pause::PauseModule
{
    fn require_contribution_period(&self) -> PeriodPosition {
        match self.current_position() {
            Some(position) if position.in_window => position,
            _ => sc_panic!(ERROR_NOT_CONTRIBUTION_PERIOD),
        }
    }

    /// Settings can only change while no contribution window is open.
    fn require_not_contribution_period(&self) {
        require!(
            !self.is_contribution_period(),
            ERROR_ACTIVE_CONTRIBUTION_WINDOW
        );
    }

    fn require_authorized_contributor(&self, caller: &ManagedAddress) {
        require!(
            self.authorized_contributors().contains(caller),
            ERROR_NOT_AUTHORIZED
        );
    }

    /// Pool size caps the contributions of a period, independently of quorum
    /// and uniqueness settings.
    fn require_can_contribute(
        &self,
        ledger: &ContributionLedger<Self::Api>,
        caller: &ManagedAddress,
    ) {
        require!(
            ledger.count() < self.authorized_contributors().len(),
            ERROR_MAX_CONTRIBUTIONS_REACHED
        );

        if self.only_unique_contributors().get() {
            require!(!ledger.has_contributed(caller), ERROR_ALREADY_CONTRIBUTED);
        }
    }

    fn require_valid_time_settings(&self, settings: &TimeSettings) {
        require!(
            settings.time_base < self.get_timestamp(),
            ERROR_TIME_BASE_NOT_PAST
        );
        require!(settings.frequency > 0, ERROR_ZERO_FREQUENCY);
        require!(
            settings.window < settings.frequency,
            ERROR_WINDOW_NOT_LESS_THAN_FREQUENCY
        );
    }

    fn require_valid_contribution_settings(
        &self,
        min_contributors: usize,
        contributors: &ManagedVec<ManagedAddress>,
    ) {
        require!(
            min_contributors <= contributors.len(),
            ERROR_QUORUM_EXCEEDS_POOL
        );
        require!(
            contributors.len() <= MAX_CONTRIBUTORS,
            ERROR_TOO_MANY_CONTRIBUTORS
        );

        let mut seen = ManagedVec::<Self::Api, ManagedAddress>::new();
        for contributor in contributors.iter() {
            require!(!seen.contains(&contributor), ERROR_DUPLICATE_CONTRIBUTOR);
            seen.push(contributor.clone_value());
        }
    }

    fn collect_contributors(
        &self,
        contributors: MultiValueEncoded<ManagedAddress>,
    ) -> ManagedVec<ManagedAddress> {
        let mut result = ManagedVec::new();
        for contributor in contributors {
            result.push(contributor);
        }
        result
    }

    fn store_contribution_settings(
        &self,
        min_contributors: usize,
        only_unique: bool,
        contributors: &ManagedVec<ManagedAddress>,
    ) {
        let mut contributors_mapper = self.authorized_contributors();
        contributors_mapper.clear();
        for contributor in contributors.iter() {
            let _ = contributors_mapper.insert(contributor.clone_value());
        }

        self.min_contributors().set(min_contributors);
        self.only_unique_contributors().set(only_unique);
        self.contribution_settings_updated_event(min_contributors, only_unique, contributors);
    }

    fn store_time_settings(&self, settings: &TimeSettings) {
        self.time_settings().set(settings);
        self.emit_time_settings_event(settings);
    }

    /// Moves the ledger of the period that was current under the old schedule to
    /// the period that is current under the new one, so a closed period keeps
    /// reporting its outcome. Any other ledger is dropped, and nothing is carried
    /// into a window the new schedule opens.
    fn carry_ledger_over(&self, previous_index: Option<u64>) {
        let ledger_mapper = self.ledger();
        if ledger_mapper.is_empty() {
            return;
        }

        let mut ledger = ledger_mapper.get();
        match (previous_index, self.current_position()) {
            (Some(previous_index), Some(position))
                if ledger.period == previous_index && !position.in_window =>
            {
                ledger.period = position.index;
                ledger_mapper.set(&ledger);
            },
            _ => ledger_mapper.clear(),
        }
    }

    /// Records an already validated contribution, then mints or refines the
    /// aggregation of its period.
    fn contribute_unchecked(
        &self,
        mut ledger: ContributionLedger<Self::Api>,
        value: BigUint,
        caller: ManagedAddress,
    ) {
        self.contribution_event(ledger.period, &caller, &value);
        ledger.admit(value.clone(), caller.clone());
        self.total_contributions().update(|total| *total += 1);

        if ledger.has_aggregation() {
            self.extend_aggregation(&ledger, value, caller);
        } else if ledger.count() >= self.min_contributors().get() {
            ledger.aggregation_id = self.create_aggregation(&ledger);
        }

        self.ledger().set(&ledger);
    }

    /// Quorum was just reached: the record starts with every contribution
    /// admitted so far in the period. The ledger is never empty here, since the
    /// contribution that triggered the call was admitted first.
    fn create_aggregation(&self, ledger: &ContributionLedger<Self::Api>) -> u64 {
        let value = average::calculate(&ledger.values)
            .unwrap_or_else(|| sc_panic!(ERROR_NO_CONTRIBUTIONS));
        let aggregation = Aggregation {
            value,
            count: ledger.count(),
            values: ledger.values.clone(),
            contributors: ledger.contributors.clone(),
            period: ledger.period,
            timestamp: self.get_timestamp(),
        };

        let aggregation_id = self.aggregations().push(&aggregation) as u64;
        self.latest_completed_aggregation().set(aggregation_id);
        self.publish_aggregated_value(&aggregation.value);
        self.emit_new_aggregation_event(aggregation_id, &aggregation);

        aggregation_id
    }

    fn extend_aggregation(
        &self,
        ledger: &ContributionLedger<Self::Api>,
        value: BigUint,
        caller: ManagedAddress,
    ) {
        let index = ledger.aggregation_id as usize;
        let mut aggregations = self.aggregations();
        let mut aggregation = aggregations.get(index);

        aggregation.values.push(value);
        aggregation.contributors.push(caller);
        aggregation.count = aggregation.values.len();
        aggregation.value = average::calculate(&aggregation.values)
            .unwrap_or_else(|| sc_panic!(ERROR_NO_CONTRIBUTIONS));
        aggregation.timestamp = self.get_timestamp();

        aggregations.set(index, &aggregation);
        self.publish_aggregated_value(&aggregation.value);
        self.emit_aggregation_updated_event(ledger.aggregation_id, &aggregation);
    }

    fn publish_aggregated_value(&self, value: &BigUint) {
        self.current_value().set(value);
        self.latest_aggregation_value().set(value);
        self.is_aggregated().set(true);
    }
}
