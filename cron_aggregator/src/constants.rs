/// Hard upper bound on the authorized contributor pool.
pub const MAX_CONTRIBUTORS: usize = 45;

/// Ledger marker for a period that has not reached quorum yet.
pub const NO_AGGREGATION: u64 = 0;
