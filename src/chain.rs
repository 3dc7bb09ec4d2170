//! Chain handle: builds dynamic calls against a runtime's metadata.
//!
//! Connected runs use an `OnlineClient`; any `OfflineClientT` holding the
//! same metadata encodes identical call data.

use std::str::FromStr;

use subxt::client::OfflineClientT;
use subxt::dynamic::Value;
use subxt::tx::DynamicPayload;
use subxt::utils::AccountId32;
use subxt::{OnlineClient, PolkadotConfig};

use crate::batch::CallBuilder;
use crate::error::Error;
use crate::units::Planck;

/// Chain client used to construct and encode calls.
pub struct Chain<Client = OnlineClient<PolkadotConfig>> {
    api: Client,
}

impl<Client: OfflineClientT<PolkadotConfig>> Chain<Client> {
    pub fn new(api: Client) -> Self {
        Self { api }
    }
}

/// Decode an SS58 address into an account id.
pub fn parse_account(address: &str) -> Result<AccountId32, Error> {
    AccountId32::from_str(address).map_err(|e| Error::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

impl<Client: OfflineClientT<PolkadotConfig>> CallBuilder for Chain<Client> {
    type Call = DynamicPayload;

    fn transfer_keep_alive(&self, dest: &str, value: Planck) -> Result<DynamicPayload, Error> {
        let account = parse_account(dest)?;
        Ok(subxt::dynamic::tx(
            "Balances",
            "transfer_keep_alive",
            vec![
                Value::unnamed_variant("Id", [Value::from_bytes(account.0)]),
                Value::u128(value.into()),
            ],
        ))
    }

    fn batch_all(&self, calls: Vec<DynamicPayload>) -> Result<DynamicPayload, Error> {
        let calls: Vec<Value> = calls.into_iter().map(DynamicPayload::into_value).collect();
        Ok(subxt::dynamic::tx(
            "Utility",
            "batch_all",
            vec![Value::unnamed_composite(calls)],
        ))
    }

    fn encode_call_data(&self, call: &DynamicPayload) -> Result<Vec<u8>, Error> {
        self.api.tx().call_data(call).map_err(Error::Encode)
    }
}

#[cfg(test)]
mod tests {
    use subxt::client::RuntimeVersion;
    use subxt::ext::codec::Decode;
    use subxt::utils::H256;
    use subxt::{Metadata, OfflineClient};

    use super::*;
    use crate::batch::assemble;
    use crate::transfer::TransferInstruction;

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const BOB: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    /// Chain backed by a trimmed Polkadot metadata (Balances at index 5,
    /// Utility at index 26).
    fn offline_chain() -> Chain<OfflineClient<PolkadotConfig>> {
        let bytes = include_bytes!("../tests/inputs/polkadot_call_metadata.scale");
        let metadata = Metadata::decode(&mut &bytes[..]).unwrap();
        let runtime_version = RuntimeVersion {
            spec_version: 1_003_000,
            transaction_version: 26,
        };
        Chain::new(OfflineClient::new(H256::zero(), runtime_version, metadata))
    }

    fn transfer(address: &str, amount: f64) -> TransferInstruction {
        TransferInstruction {
            address: address.to_string(),
            amount,
        }
    }

    #[test]
    fn test_empty_batch_encoding() {
        let batch = assemble(&offline_chain(), &[]).unwrap();
        // Utility(26).batch_all(2), compact length 0
        assert_eq!(batch.call_data, "0x1a0200");
        assert_eq!(batch.total_transactions, 0);
    }

    #[test]
    fn test_single_transfer_encoding() {
        let batch = assemble(&offline_chain(), &[transfer(ALICE, 1.5)]).unwrap();
        // batch_all, 1 call, Balances(5).transfer_keep_alive(3), MultiAddress::Id(0),
        // account id, Compact(15_000_000_000)
        assert_eq!(
            batch.call_data,
            "0x1a0204050300\
             d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d\
             0700d6117e03"
        );
    }

    #[test]
    fn test_two_transfers_in_order() {
        let chain = offline_chain();
        let transfers = [transfer(ALICE, 1.5), transfer(BOB, 2.25)];

        let first = assemble(&chain, &transfers).unwrap();
        let second = assemble(&chain, &transfers).unwrap();

        assert_eq!(
            first.call_data,
            "0x1a0208\
             050300d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d0700d6117e03\
             0503008eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a480700c11a3d05"
        );
        assert_eq!(first.call_data, second.call_data);
    }

    #[test]
    fn test_invalid_address_fails_batch() {
        let result = assemble(&offline_chain(), &[transfer(ALICE, 1.0), transfer("nobody", 1.0)]);
        assert!(matches!(result, Err(Error::InvalidAddress { .. })));
    }

    #[test]
    fn test_parse_account_ss58() {
        let account = parse_account("5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY").unwrap();
        assert_eq!(
            hex::encode(account.0),
            "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"
        );
    }

    #[test]
    fn test_parse_account_rejects_garbage() {
        for address in ["", "not-an-address", "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQZ"] {
            match parse_account(address) {
                Err(Error::InvalidAddress { address: reported, .. }) => {
                    assert_eq!(reported, address)
                }
                other => panic!("expected InvalidAddress for {:?}, got {:?}", address, other),
            }
        }
    }
}
