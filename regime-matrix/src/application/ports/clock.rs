use chrono::{DateTime, Utc};

/// Time source for stamping computed snapshots
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
