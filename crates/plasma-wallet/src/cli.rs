use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Plasma wallet - select coins and build transfers against a plasma node
#[derive(Parser)]
#[command(name = "plasma-wallet")]
#[command(about = "Coin selection and transfer planning for a plasma chain")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "wallet.json", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "wallet.json")]
        output: PathBuf,
    },

    /// Show node status
    Status,

    /// List unspent outputs of an address
    Unspent {
        #[arg(short, long)]
        address: String,
    },

    /// Sum the unspent value of an address for one color
    Balance {
        #[arg(short, long)]
        address: String,
        /// Token color (defaults to the configured color)
        #[arg(long)]
        color: Option<u32>,
    },

    /// Look up the color of a token contract
    Color {
        #[arg(short, long)]
        token: String,
    },

    /// Plan a fungible transfer and print its inputs and outputs
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Amount as decimal or 0x-prefixed hex
        #[arg(long)]
        amount: String,
        #[arg(long)]
        color: Option<u32>,
    },

    /// Plan a storage-token spend that runs a policy script
    StateTransfer {
        /// Current token holder
        #[arg(long)]
        owner: String,
        /// Token id as decimal or 0x-prefixed hex
        #[arg(long)]
        token_id: String,
        /// Address passed to the policy as message data
        #[arg(long)]
        recipient: String,
        /// Policy script hex
        #[arg(long)]
        policy: String,
        /// Owner of the resulting output (defaults to the current holder)
        #[arg(long)]
        new_owner: Option<String>,
        #[arg(long)]
        color: u32,
    },

    /// Find the input of a transaction whose parent was mined last
    Youngest {
        /// Transaction hash
        #[arg(long)]
        tx: String,
    },
}
