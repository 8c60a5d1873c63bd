use thiserror::Error;

/// Errors returned for alarm operations.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("no callable has been bound")]
    Unbound,
}
