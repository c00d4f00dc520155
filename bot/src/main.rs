/// nzbgram - Telegram control bot for NZBGet.
///
/// Receives commands over long polling and relays them to the NZBGet
/// JSON-RPC interface.
use std::sync::Arc;

use anyhow::Context;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

mod commands;
mod config;
mod report;

use commands::{AppState, Command};
use config::Config;
use nzbgram_rpc::client::{NzbgetClient, Url};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nzbgram_bot=info".parse().unwrap())
                .add_directive("nzbgram_rpc=info".parse().unwrap()),
        )
        .init();

    info!("=== NZBGet Control Bot Starting ===");

    let config = Config::from_env()?;
    let endpoint: Url = config
        .nzbget_url
        .parse()
        .context("NZBGET_URL is not a valid URL")?;

    let state = Arc::new(AppState {
        nzbget: NzbgetClient::new(endpoint),
    });

    let bot = Bot::new(config.telegram_token);

    // Drop any stale webhook so long polling can take over.
    bot.delete_webhook()
        .send()
        .await
        .context("Failed to clear webhook")?;

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Could not sync the command menu with Telegram: {}", e);
    }

    let handler = dptree::entry().branch(
        Update::filter_message()
            .filter_command::<Command>()
            .endpoint({
                let state = state.clone();
                move |bot: Bot, msg: Message, cmd: Command| {
                    let state = state.clone();
                    async move { commands::handle_command(bot, msg, cmd, state).await }
                }
            }),
    );

    info!("Starting dispatcher");

    Dispatcher::builder(bot, handler)
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Bot stopped");
    Ok(())
}
