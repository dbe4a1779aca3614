multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{
    errors::*,
    period::PeriodPosition,
    status,
    structs::{Aggregation, AggregatorStatus, ContributionLedger},
};

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    /// Position of the current block timestamp within the configured schedule.
    /// Never `None` once deployed: the time base is always set in the past.
    fn current_position(&self) -> Option<PeriodPosition> {
        PeriodPosition::at(self.get_timestamp(), &self.time_settings().get())
    }

    /// Ledger of `period`, or a fresh one when the stored ledger belongs to an
    /// earlier period.
    fn ledger_for_period(&self, period: u64) -> ContributionLedger<Self::Api> {
        let ledger_mapper = self.ledger();
        if !ledger_mapper.is_empty() {
            let ledger = ledger_mapper.get();
            if ledger.period == period {
                return ledger;
            }
        }

        ContributionLedger::new(period)
    }

    /// Clock reading every period computation is based on.
    #[view(getTimestamp)]
    fn get_timestamp(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    #[view(getStatus)]
    fn get_status(&self) -> AggregatorStatus {
        let position = self.current_position();
        let activity = position
            .map(|position| self.ledger_for_period(position.index).activity())
            .unwrap_or_default();

        status::resolve(
            position.as_ref(),
            activity,
            self.total_contributions().get() > 0,
        )
    }

    /// Returns `(value, count, values, contributors)` of an aggregation record.
    #[view(getAggregation)]
    fn get_aggregation(
        &self,
        aggregation_id: u64,
    ) -> MultiValue4<BigUint, usize, ManagedVec<BigUint>, ManagedVec<ManagedAddress>> {
        let aggregation = self.load_aggregation(aggregation_id);
        (
            aggregation.value,
            aggregation.count,
            aggregation.values,
            aggregation.contributors,
        )
            .into()
    }

    /// Returns `(period, timestamp)`: the period index the record belongs to and
    /// the block timestamp of its last update.
    #[view(getAggregationDetails)]
    fn get_aggregation_details(&self, aggregation_id: u64) -> MultiValue2<u64, u64> {
        let aggregation = self.load_aggregation(aggregation_id);
        (aggregation.period, aggregation.timestamp).into()
    }

    fn load_aggregation(&self, aggregation_id: u64) -> Aggregation<Self::Api> {
        let aggregations = self.aggregations();
        require!(
            aggregation_id > 0 && aggregation_id <= aggregations.len() as u64,
            ERROR_AGGREGATION_NOT_FOUND
        );

        aggregations.get(aggregation_id as usize)
    }

    #[view(getAggregationCounter)]
    fn get_aggregation_counter(&self) -> u64 {
        self.aggregations().len() as u64
    }

    #[view(getAuthorizedContributors)]
    fn get_authorized_contributors(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for contributor in self.authorized_contributors().iter() {
            result.push(contributor);
        }
        result
    }

    /// Zero-based lookup into the ordered contributor pool.
    #[view(getAuthorizedContributor)]
    fn get_authorized_contributor(&self, index: usize) -> ManagedAddress {
        let contributors = self.authorized_contributors();
        require!(
            index < contributors.len(),
            ERROR_CONTRIBUTOR_INDEX_OUT_OF_RANGE
        );
        contributors.get_by_index(index + 1)
    }

    /// Returns `(period_index, offset, in_window, window_start, window_end)`.
    #[view(getCurrentPeriod)]
    fn get_current_period(&self) -> MultiValue5<u64, u64, bool, u64, u64> {
        let settings = self.time_settings().get();
        let position = PeriodPosition::at(self.get_timestamp(), &settings)
            .unwrap_or_else(|| sc_panic!(ERROR_NO_PERIOD_STARTED));

        (
            position.index,
            position.offset,
            position.in_window,
            settings.period_start(position.index),
            settings.window_end(position.index),
        )
            .into()
    }

    #[view(isContributionPeriod)]
    fn is_contribution_period(&self) -> bool {
        self.current_position()
            .is_some_and(|position| position.in_window)
    }

    /// Contributions admitted so far in the period the clock points at.
    #[view(getCurrentContributionCount)]
    fn get_current_contribution_count(&self) -> usize {
        match self.current_position() {
            Some(position) => self.ledger_for_period(position.index).count(),
            None => 0,
        }
    }
}
