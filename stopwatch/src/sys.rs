#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub(crate) use unix::{monotonic, realtime};

#[cfg(not(unix))]
mod fallback;

#[cfg(not(unix))]
pub(crate) use fallback::{monotonic, realtime};
