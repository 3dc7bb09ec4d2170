//! CSV loader for transfer instructions.
//!
//! Rows are deserialized one at a time, in file order. The first row that
//! fails to deserialize aborts the whole load.

use std::io;
use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::transfer::TransferInstruction;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All).flexible(true);
    builder
}

/// Load every transfer instruction from the CSV file at `path`.
pub fn load_transfers<P: AsRef<Path>>(path: P) -> Result<Vec<TransferInstruction>, Error> {
    let reader = reader_builder().from_path(path)?;
    collect_transfers(reader)
}

/// Load every transfer instruction from CSV text read from `reader`.
pub fn read_transfers<R: io::Read>(reader: R) -> Result<Vec<TransferInstruction>, Error> {
    collect_transfers(reader_builder().from_reader(reader))
}

fn collect_transfers<R: io::Read>(
    mut reader: csv::Reader<R>,
) -> Result<Vec<TransferInstruction>, Error> {
    let mut transfers = Vec::new();
    for result in reader.deserialize() {
        transfers.push(result?);
    }

    info!("Parsed {} transactions from CSV", transfers.len());
    Ok(transfers)
}
