//! Batched balance transfers for Substrate chains.
//!
//! Reads `(address, amount)` rows from a CSV file, turns each into a
//! `Balances::transfer_keep_alive` call, wraps them all in one
//! `Utility::batch_all` call and prints the hex call data. Nothing is signed
//! or submitted; the call data is meant to be pasted into a signing UI.
//!
//! # Example
//!
//! ```no_run
//! use std::io::stdout;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), batch_transfer::Error> {
//!     batch_transfer::run(&batch_transfer::Config::default(), stdout()).await
//! }
//! ```

use std::io::Write;
use std::path::Path;

mod batch;
mod chain;
mod config;
mod connector;
mod error;
mod loader;
pub mod logging;
mod transfer;
mod units;

pub use batch::{BatchCall, CallBuilder, assemble};
pub use chain::{Chain, parse_account};
pub use config::{Config, DEFAULT_ENDPOINT, DEFAULT_TRANSACTIONS_PATH};
pub use connector::{NodeIdentity, connect};
pub use error::Error;
pub use loader::{load_transfers, read_transfers};
pub use transfer::{TransferInstruction, parse_amount, validate_amounts};
pub use units::{DECIMALS, PLANCK_PER_UNIT, Planck};

/// Connect, load the CSV, build the batch and write the call data block.
///
/// The node is reached before the CSV is opened, so an unreachable endpoint
/// fails without touching the file.
pub async fn run<W: Write>(config: &Config, writer: W) -> Result<(), Error> {
    let chain = connect(&config.endpoint).await?;
    let batch = process_csv_file(&chain, &config.transactions, config.strict_amounts)?;
    write_call_data(&batch, writer)
}

/// Load transfers from `input_path` and assemble them with `builder`.
///
/// With `strict_amounts`, unusable amounts are reported by row
/// before any call is built; otherwise assembly rejects them.
pub fn process_csv_file<C: CallBuilder, P: AsRef<Path>>(
    builder: &C,
    input_path: P,
    strict_amounts: bool,
) -> Result<BatchCall<C::Call>, Error> {
    let transfers = load_transfers(input_path)?;
    if strict_amounts {
        validate_amounts(&transfers)?;
    }
    assemble(builder, &transfers)
}

/// Write the delimited call data block and summary.
pub fn write_call_data<Call, W: Write>(batch: &BatchCall<Call>, mut writer: W) -> Result<(), Error> {
    writeln!(writer)?;
    writeln!(writer, "========== CALL DATA ==========")?;
    writeln!(writer, "{}", batch.call_data)?;
    writeln!(writer, "==============================")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "Generated batch call for {} transactions",
        batch.total_transactions
    )?;
    writeln!(writer, "You can now paste this call data into polkadot.js apps")?;
    writer.flush()?;
    Ok(())
}
