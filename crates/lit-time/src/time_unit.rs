//! `TimeUnit`: fixed-length spans of calendar time.

/// A fixed-length unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
}

impl TimeUnit {
    /// Length of one unit in days.
    pub fn days(&self) -> i32 {
        match self {
            TimeUnit::Days => 1,
            TimeUnit::Weeks => 7,
        }
    }
}
