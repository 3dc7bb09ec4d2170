//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Public Polkadot RPC endpoint.
pub const DEFAULT_ENDPOINT: &str = "wss://rpc.polkadot.io";

/// CSV read when no `--file` is given.
pub const DEFAULT_TRANSACTIONS_PATH: &str = "./transactions.csv";

/// Build a `Utility::batch_all` of keep-alive transfers from a CSV file and
/// print its call data.
#[derive(Debug, Clone, Parser)]
#[command(name = "batch-transfer", version)]
pub struct Config {
    /// WebSocket RPC endpoint of the node (`wss://` or `ws://`).
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// CSV file with `address` and `amount` columns.
    #[arg(short = 'f', long = "file", default_value = DEFAULT_TRANSACTIONS_PATH)]
    pub transactions: PathBuf,

    /// Check every amount before building any call, reporting the first
    /// non-numeric, infinite, negative or overflowing one by row.
    #[arg(long)]
    pub strict_amounts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transactions: PathBuf::from(DEFAULT_TRANSACTIONS_PATH),
            strict_amounts: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Config::parse_from(["batch-transfer"]);
        let default = Config::default();
        assert_eq!(parsed.endpoint, default.endpoint);
        assert_eq!(parsed.transactions, default.transactions);
        assert!(!parsed.strict_amounts);
    }

    #[test]
    fn test_overrides() {
        let parsed = Config::parse_from([
            "batch-transfer",
            "--endpoint",
            "ws://127.0.0.1:9944",
            "-f",
            "payroll.csv",
            "--strict-amounts",
        ]);
        assert_eq!(parsed.endpoint, "ws://127.0.0.1:9944");
        assert_eq!(parsed.transactions, PathBuf::from("payroll.csv"));
        assert!(parsed.strict_amounts);
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
