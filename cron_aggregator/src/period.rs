use crate::structs::TimeSettings;

/// Where a clock reading falls relative to the configured schedule.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PeriodPosition {
    pub index: u64,
    pub offset: u64,
    pub in_window: bool,
}

impl PeriodPosition {
    /// Locates `now` within the schedule. Returns `None` when `now` precedes the
    /// time base or the frequency is zero, i.e. when no period has started.
    pub fn at(now: u64, settings: &TimeSettings) -> Option<Self> {
        if settings.frequency == 0 {
            return None;
        }

        let elapsed = now.checked_sub(settings.time_base)?;
        let offset = elapsed % settings.frequency;

        Some(PeriodPosition {
            index: elapsed / settings.frequency,
            offset,
            in_window: offset < settings.window,
        })
    }
}

impl TimeSettings {
    pub fn period_start(&self, index: u64) -> u64 {
        self.time_base
            .saturating_add(index.saturating_mul(self.frequency))
    }

    /// First second at which the window of period `index` is closed.
    pub fn window_end(&self, index: u64) -> u64 {
        self.period_start(index).saturating_add(self.window)
    }
}
