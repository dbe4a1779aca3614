use multiversx_sc::derive_imports::*;
use multiversx_sc::imports::*;

use crate::{constants::NO_AGGREGATION, status::PeriodActivity};

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeSettings {
    pub time_base: u64,
    pub frequency: u64,
    pub window: u64,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum AggregatorStatus {
    Default,
    OpenIdle,
    OpenOngoing,
    ClosedSuccess,
    ClosedFailure,
}

/// Outcome of one period that reached quorum.
/// `values` and `contributors` are aligned by position, in admission order.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct Aggregation<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub count: usize,
    pub values: ManagedVec<M, BigUint<M>>,
    pub contributors: ManagedVec<M, ManagedAddress<M>>,
    pub period: u64,
    pub timestamp: u64,
}

/// Contributions admitted during a single period.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct ContributionLedger<M: ManagedTypeApi> {
    pub period: u64,
    pub values: ManagedVec<M, BigUint<M>>,
    pub contributors: ManagedVec<M, ManagedAddress<M>>,
    pub aggregation_id: u64,
}

impl<M: ManagedTypeApi> ContributionLedger<M> {
    pub fn new(period: u64) -> Self {
        ContributionLedger {
            period,
            values: ManagedVec::new(),
            contributors: ManagedVec::new(),
            aggregation_id: NO_AGGREGATION,
        }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn has_contributed(&self, contributor: &ManagedAddress<M>) -> bool {
        self.contributors.contains(contributor)
    }

    pub fn has_aggregation(&self) -> bool {
        self.aggregation_id != NO_AGGREGATION
    }

    pub fn admit(&mut self, value: BigUint<M>, contributor: ManagedAddress<M>) {
        self.values.push(value);
        self.contributors.push(contributor);
    }

    pub fn activity(&self) -> PeriodActivity {
        PeriodActivity {
            contributions: self.count(),
            aggregated: self.has_aggregation(),
        }
    }
}

#[type_abi]
#[derive(TopEncode)]
pub struct AggregationEvent<M: ManagedTypeApi> {
    pub value: BigUint<M>,
    pub count: usize,
    pub timestamp: u64,
    pub block: u64,
    pub epoch: u64,
}
