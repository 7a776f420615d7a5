//! Timestamp 値オブジェクト

/// Unix timestamp in JST (milliseconds), wrapped as a domain value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from JST milliseconds
    pub fn new(millis: i64) -> Self {
        Self(millis)
    }

    /// Get the raw millisecond value
    pub fn value(&self) -> i64 {
        self.0
    }
}
