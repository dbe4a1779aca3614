use crate::{period::PeriodPosition, structs::AggregatorStatus};

/// What happened during the period the clock currently points at.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PeriodActivity {
    pub contributions: usize,
    pub aggregated: bool,
}

/// Derives the lifecycle status from the current position and the activity recorded
/// for that period. `has_history` tells whether any contribution was ever admitted;
/// until then a closed period reports `Default` instead of `ClosedFailure`.
pub fn resolve(
    position: Option<&PeriodPosition>,
    activity: PeriodActivity,
    has_history: bool,
) -> AggregatorStatus {
    let Some(position) = position else {
        return AggregatorStatus::Default;
    };

    if position.in_window {
        return if activity.contributions == 0 {
            AggregatorStatus::OpenIdle
        } else {
            AggregatorStatus::OpenOngoing
        };
    }

    if activity.aggregated {
        AggregatorStatus::ClosedSuccess
    } else if has_history {
        AggregatorStatus::ClosedFailure
    } else {
        AggregatorStatus::Default
    }
}
