pub mod agent;
pub mod cli;
pub mod llm;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod server;

use agent::ChatRelay;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Provider: {}", args.provider);
    if let Some(model) = &args.chat_model {
        info!("Chat Model: {}", model);
    }
    if let Some(base_url) = &args.chat_base_url {
        info!("Chat Base URL: {}", base_url);
    }
    info!("Log File: {}", args.log_file);
    info!("-------------------------");

    let relay = Arc::new(ChatRelay::from_args(&args)?);
    let addr = args.server_addr.clone();
    info!("Starting server on: {}", addr);
    let server = Server::new(addr, relay);
    server.run().await?;

    Ok(())
}
