use std::path::Path;

use anyhow::Result;
use clap::Parser;
use plasma_client::{HttpClient, PlasmaClient};
use plasma_core::{Address, Hash, HexBytes, Value};
use plasma_utxo::{StateTransferRequest, TransferRequest};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod wallet;

use cli::{Cli, Commands};
use config::WalletConfig;
use wallet::Wallet;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init { output } = &cli.command {
        return init_config(output);
    }

    let config = WalletConfig::load_or_default(&cli.config)?;

    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = HttpClient::new(config.client_config())?;
    info!("Using node at {}", client.url());
    let wallet = Wallet::new(client, config);

    match cli.command {
        // Written before the client is built
        Commands::Init { .. } => {}
        Commands::Status => {
            println!("{}", wallet.client().status().await?);
        }
        Commands::Unspent { address } => {
            let unspent = wallet.unspent(&Address::new(address)).await?;
            print_json(&unspent)?;
        }
        Commands::Balance { address, color } => {
            let color = wallet.color_or_default(color);
            let balance = wallet.balance(&Address::new(address), color).await?;
            println!("{} (color {})", balance, color);
        }
        Commands::Color { token } => {
            let color = wallet.client().get_color(&Address::new(token)).await?;
            println!("{}", color);
        }
        Commands::Transfer {
            from,
            to,
            amount,
            color,
        } => {
            let request = TransferRequest {
                from: Address::new(from),
                to: Address::new(to),
                amount: Value::parse(&amount)?,
                color: wallet.color_or_default(color),
            };
            let plan = wallet.transfer(&request).await?;
            print_json(&plan)?;
        }
        Commands::StateTransfer {
            owner,
            token_id,
            recipient,
            policy,
            new_owner,
            color,
        } => {
            let owner = Address::new(owner);
            let request = StateTransferRequest {
                new_owner: new_owner.map(Address::from).unwrap_or_else(|| owner.clone()),
                owner,
                token_id: Value::parse(&token_id)?,
                color: color.into(),
                recipient: Address::new(recipient),
                policy: HexBytes::from_hex(&policy)?,
            };
            let plan = wallet.state_transfer(&request).await?;
            print_json(&plan)?;
        }
        Commands::Youngest { tx } => {
            let youngest = wallet.youngest(&Hash::from_hex(&tx)?).await?;
            println!(
                "input #{} spends {} (block {})",
                youngest.index,
                youngest.transaction.hash,
                youngest.transaction.height()
            );
        }
    }

    Ok(())
}

/// Write a default configuration file
fn init_config(output: &Path) -> Result<()> {
    let config = WalletConfig::default();
    config.save(output)?;

    println!("Configuration file created: {}", output.display());
    println!("Edit rpc_url to point at your node.");

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
