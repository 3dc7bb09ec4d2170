//! Error type shared by every stage of the pipeline.

use thiserror::Error;

/// Errors that can abort a batch-building run.
#[derive(Debug, Error)]
pub enum Error {
    /// The RPC session could not be opened or the node did not answer the
    /// identity and metadata requests.
    #[error("failed to connect to {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: subxt::Error,
    },

    /// The CSV file could not be opened or a row could not be read.
    #[error("failed to parse transactions CSV: {0}")]
    Parse(#[from] csv::Error),

    /// Amount with no balance equivalent: non-numeric, infinite, negative,
    /// or too large once scaled to planck.
    #[error("invalid amount {amount} for {address} on row {row}")]
    InvalidAmount {
        row: usize,
        address: String,
        amount: f64,
    },

    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to encode call data: {0}")]
    Encode(#[source] subxt::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
