pub static ERROR_TOO_MANY_CONTRIBUTORS: &[u8] = b"Cannot have more than 45 contributors";

pub static ERROR_QUORUM_EXCEEDS_POOL: &[u8] =
    b"Must have at least as many contributors as required contributions";

pub static ERROR_DUPLICATE_CONTRIBUTOR: &[u8] = b"Duplicate contributor address";

pub static ERROR_TIME_BASE_NOT_PAST: &[u8] = b"Fixed-time base must be in the past";

pub static ERROR_ZERO_FREQUENCY: &[u8] = b"Time frequency cannot be 0";

pub static ERROR_WINDOW_NOT_LESS_THAN_FREQUENCY: &[u8] = b"Freq must be > than window";

pub static ERROR_ACTIVE_CONTRIBUTION_WINDOW: &[u8] = b"Contribution period";

pub static ERROR_NOT_CONTRIBUTION_PERIOD: &[u8] = b"Not contribution period";

pub static ERROR_NOT_AUTHORIZED: &[u8] = b"Not an authorized address";

pub static ERROR_MAX_CONTRIBUTIONS_REACHED: &[u8] = b"Maximum contributions reached";

pub static ERROR_ALREADY_CONTRIBUTED: &[u8] = b"Address already contributed";

pub static ERROR_AGGREGATION_NOT_FOUND: &[u8] = b"Aggregation not found";

pub static ERROR_CONTRIBUTOR_INDEX_OUT_OF_RANGE: &[u8] = b"Contributor index out of range";

pub static ERROR_NO_PERIOD_STARTED: &[u8] = b"No period has started yet";

pub static ERROR_NO_CONTRIBUTIONS: &[u8] = b"No contributions to aggregate";
