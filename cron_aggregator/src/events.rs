multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::structs::{Aggregation, AggregationEvent, TimeSettings};

#[multiversx_sc::module]
pub trait EventsModule {
    fn make_aggregation_event(
        &self,
        aggregation: &Aggregation<Self::Api>,
    ) -> AggregationEvent<Self::Api> {
        AggregationEvent {
            value: aggregation.value.clone(),
            count: aggregation.count,
            timestamp: aggregation.timestamp,
            block: self.blockchain().get_block_nonce(),
            epoch: self.blockchain().get_block_epoch(),
        }
    }

    fn emit_new_aggregation_event(&self, aggregation_id: u64, aggregation: &Aggregation<Self::Api>) {
        self.new_aggregation_event(
            aggregation_id,
            aggregation.period,
            &self.make_aggregation_event(aggregation),
        )
    }

    fn emit_aggregation_updated_event(
        &self,
        aggregation_id: u64,
        aggregation: &Aggregation<Self::Api>,
    ) {
        self.aggregation_updated_event(
            aggregation_id,
            aggregation.period,
            &self.make_aggregation_event(aggregation),
        )
    }

    fn emit_time_settings_event(&self, settings: &TimeSettings) {
        self.time_settings_updated_event(settings.time_base, settings.frequency, settings.window)
    }

    #[event("contribution")]
    fn contribution_event(
        &self,
        #[indexed] period: u64,
        #[indexed] contributor: &ManagedAddress,
        value: &BigUint,
    );

    #[event("new_aggregation")]
    fn new_aggregation_event(
        &self,
        #[indexed] aggregation_id: u64,
        #[indexed] period: u64,
        aggregation_event: &AggregationEvent<Self::Api>,
    );

    #[event("aggregation_updated")]
    fn aggregation_updated_event(
        &self,
        #[indexed] aggregation_id: u64,
        #[indexed] period: u64,
        aggregation_event: &AggregationEvent<Self::Api>,
    );

    #[event("current_value_set")]
    fn current_value_set_event(&self, #[indexed] value: &BigUint);

    #[event("contribution_settings_updated")]
    fn contribution_settings_updated_event(
        &self,
        #[indexed] min_contributors: usize,
        #[indexed] only_unique: bool,
        contributors: &ManagedVec<ManagedAddress>,
    );

    #[event("time_settings_updated")]
    fn time_settings_updated_event(
        &self,
        #[indexed] time_base: u64,
        #[indexed] frequency: u64,
        #[indexed] window: u64,
    );
}
