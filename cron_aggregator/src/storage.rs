multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{Aggregation, ContributionLedger, TimeSettings};

#[multiversx_sc::module]
pub trait StorageModule {
    /// Last published value, either aggregated or set manually by the owner.
    #[view(getCurrentValue)]
    #[storage_mapper("current_value")]
    fn current_value(&self) -> SingleValueMapper<BigUint>;

    /// True once `current_value` comes from an aggregation rather than a manual override.
    #[view(isAggregated)]
    #[storage_mapper("is_aggregated")]
    fn is_aggregated(&self) -> SingleValueMapper<bool>;

    #[view(getLatestAggregationValue)]
    #[storage_mapper("latest_aggregation_value")]
    fn latest_aggregation_value(&self) -> SingleValueMapper<BigUint>;

    #[view(getLatestCompletedAggregation)]
    #[storage_mapper("latest_completed_aggregation")]
    fn latest_completed_aggregation(&self) -> SingleValueMapper<u64>;

    #[view(getTimeSettings)]
    #[storage_mapper("time_settings")]
    fn time_settings(&self) -> SingleValueMapper<TimeSettings>;

    #[view(getMinContributors)]
    #[storage_mapper("min_contributors")]
    fn min_contributors(&self) -> SingleValueMapper<usize>;

    #[view(onlyUniqueContributors)]
    #[storage_mapper("only_unique_contributors")]
    fn only_unique_contributors(&self) -> SingleValueMapper<bool>;

    /// Ordered pool of addresses allowed to contribute. Its size is also the
    /// per-period contribution cap.
    #[storage_mapper("authorized_contributors")]
    fn authorized_contributors(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Contributions of the most recently active period.
    #[storage_mapper("ledger")]
    fn ledger(&self) -> SingleValueMapper<ContributionLedger<Self::Api>>;

    /// Aggregation records, indexed by aggregation id starting at 1.
    #[storage_mapper("aggregations")]
    fn aggregations(&self) -> VecMapper<Aggregation<Self::Api>>;

    /// Number of contributions admitted since deployment.
    #[view(getTotalContributions)]
    #[storage_mapper("total_contributions")]
    fn total_contributions(&self) -> SingleValueMapper<u64>;
}
