//! Batch assembly: one keep-alive transfer per instruction, wrapped in a
//! single `batch_all` call and serialized to hex call data.

use tracing::debug;

use crate::error::Error;
use crate::transfer::TransferInstruction;
use crate::units::Planck;

/// Constructs and encodes chain calls.
///
/// Implemented by the live chain handle and by offline doubles in tests.
pub trait CallBuilder {
    type Call;

    /// A `Balances::transfer_keep_alive` call to `dest` for `value` planck.
    fn transfer_keep_alive(&self, dest: &str, value: Planck) -> Result<Self::Call, Error>;

    /// A `Utility::batch_all` call over `calls`, preserving their order.
    fn batch_all(&self, calls: Vec<Self::Call>) -> Result<Self::Call, Error>;

    /// SCALE-encoded bytes of `call`.
    fn encode_call_data(&self, call: &Self::Call) -> Result<Vec<u8>, Error>;
}

/// The assembled batch and its serialized form.
#[derive(Debug)]
pub struct BatchCall<Call> {
    pub call: Call,
    /// `0x`-prefixed hex of the encoded batch call.
    pub call_data: String,
    pub total_transactions: usize,
}

/// Build the batch call for `transfers`, in order.
///
/// Fails on the first amount with no planck equivalent; no partial batch is
/// produced.
pub fn assemble<C: CallBuilder>(
    builder: &C,
    transfers: &[TransferInstruction],
) -> Result<BatchCall<C::Call>, Error> {
    let calls = transfers
        .iter()
        .enumerate()
        .map(|(idx, transfer)| {
            let value = Planck::from_units(transfer.amount).ok_or_else(|| Error::InvalidAmount {
                row: idx + 1,
                address: transfer.address.clone(),
                amount: transfer.amount,
            })?;
            debug!(address = %transfer.address, amount = %value, "transfer_keep_alive");
            builder.transfer_keep_alive(&transfer.address, value)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total_transactions = calls.len();
    let call = builder.batch_all(calls)?;
    let call_data = format!("0x{}", hex::encode(builder.encode_call_data(&call)?));

    Ok(BatchCall {
        call,
        call_data,
        total_transactions,
    })
}
