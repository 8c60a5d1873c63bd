use crate::Instant;

use std::time::{SystemTime, UNIX_EPOCH};

lazy_static::lazy_static! {
    static ref ANCHOR: std::time::Instant = std::time::Instant::now();
}

pub fn monotonic() -> Instant {
    Instant {
        ns: ANCHOR.elapsed().as_nanos() as u64,
    }
}

pub fn realtime() -> Instant {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    Instant {
        ns: since_epoch.as_nanos() as u64,
    }
}
