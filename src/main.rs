//! Transfer coordinator CLI.
//!
//! Wires real collaborators (signer-backed wallet, registry contract
//! proxy, HTTP document store) into the coordinator and runs one
//! session's worth of workflow: detect/connect, fill the form, send.

use std::path::PathBuf;
use std::sync::Arc;

use alloy::providers::{Provider, ProviderBuilder};
use clap::{Parser, Subcommand};

use transfer_coordinator::config::{load_config, CoordinatorConfig};
use transfer_coordinator::observability::{logging, metrics};
use transfer_coordinator::registry::AlloyRegistry;
use transfer_coordinator::session::FormField;
use transfer_coordinator::store::HttpDocumentStore;
use transfer_coordinator::wallet::{AlloyWallet, WalletProvider};
use transfer_coordinator::TransferCoordinator;

#[derive(Parser)]
#[command(name = "transfer-coordinator", version, about = "Native transfer workflow coordinator")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "coordinator.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a transfer and record it on-chain and in the store.
    Send {
        /// Destination address.
        #[arg(long)]
        to: String,
        /// Decimal amount of native currency.
        #[arg(long)]
        amount: String,
    },
    /// Report whether an authorized account is available.
    Detect,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        CoordinatorConfig::default()
    };

    logging::init(&config.observability);
    if !cli.config.exists() {
        tracing::warn!(path = %cli.config.display(), "Config file not found, using defaults");
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    // The wallet is optional: without a signer key the coordinator still
    // starts and surfaces the install prompt on use.
    let wallet = match AlloyWallet::from_env(&config.chain) {
        Ok(w) => Some(Arc::new(w)),
        Err(e) => {
            tracing::warn!(error = %e, "No wallet provider available");
            None
        }
    };

    // The registry shares the wallet's signer-backed provider when one
    // exists.
    let provider = match &wallet {
        Some(w) => w.provider(),
        None => {
            let rpc_url: url::Url = config.chain.rpc_url.parse()?;
            Arc::new(ProviderBuilder::new().connect_http(rpc_url)) as Arc<dyn Provider + Send + Sync>
        }
    };
    let registry = Arc::new(AlloyRegistry::new(provider, &config.registry, &config.chain)?);
    let store = Arc::new(HttpDocumentStore::from_config(&config.store)?);

    let coordinator = TransferCoordinator::new(
        wallet.map(|w| w as Arc<dyn WalletProvider>),
        registry,
        store,
        &config,
    );

    // Observe session transitions the way a UI layer would.
    let session = coordinator.session();
    let mut session_rx = session.subscribe();
    tokio::spawn(async move {
        while session_rx.changed().await.is_ok() {
            let state = session_rx.borrow_and_update().clone();
            tracing::info!(
                account = ?state.account,
                loading = state.loading,
                "Session state changed"
            );
        }
    });

    match cli.command {
        Command::Detect => match coordinator.detect_existing_connection().await? {
            Some(account) => println!("connected: {account}"),
            None => println!("no authorized account"),
        },
        Command::Send { to, amount } => {
            if coordinator.detect_existing_connection().await?.is_none() {
                coordinator.connect().await?;
            }

            session.update_form(FormField::Recipient, &to);
            session.update_form(FormField::Amount, &amount);

            let tx_hash = coordinator.send().await?;
            println!("{tx_hash}");
        }
    }

    Ok(())
}
