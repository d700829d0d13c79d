use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, forced in `main` so uptime is measured from boot.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
