/// Telegram command handlers.
///
/// Every command maps to at most two NZBGet calls. Remote failures collapse
/// into one generic reply; the detail goes to the log.
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::error;

use nzbgram_rpc::client::NzbgetClient;
use nzbgram_rpc::errors::NzbgetResult;
use nzbgram_rpc::protocol::QueueAction;

use crate::report;

/// Reply sent whenever a remote call fails or returns something unusable.
const GENERIC_ERROR_REPLY: &str =
    "An error occurred while processing your request. Please try again later.";

/// Bot command definitions.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "NZBGet bot commands:")]
pub enum Command {
    #[command(description = "Greet the bot")]
    Start,
    #[command(description = "Show this help")]
    Help,
    #[command(description = "Show the queue and current download speed")]
    Status,
    #[command(description = "Cancel a download: /cancel <nzb-id>")]
    Cancel(String),
    #[command(description = "Pause a download: /pause <nzb-id>")]
    Pause(String),
    #[command(description = "Resume a download: /resume <nzb-id>")]
    Resume(String),
}

/// Shared application state passed to every handler.
pub struct AppState {
    pub nzbget: NzbgetClient,
}

/// Handle incoming commands.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => cmd_start(bot, msg).await,
        Command::Help => cmd_help(bot, msg).await,
        Command::Status => cmd_status(bot, msg, state).await,
        Command::Cancel(arg) => {
            cmd_edit_queue(bot, msg, arg, QueueAction::GroupDelete, state).await
        }
        Command::Pause(arg) => cmd_edit_queue(bot, msg, arg, QueueAction::GroupPause, state).await,
        Command::Resume(arg) => {
            cmd_edit_queue(bot, msg, arg, QueueAction::GroupResume, state).await
        }
    }
}

/// /start - Welcome message
async fn cmd_start(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(
        msg.chat.id,
        "Hello! I am your NZBGet bot. Use /status to get the current queue status.",
    )
    .await?;
    Ok(())
}

/// /help - List the available commands
async fn cmd_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// /status - Report server state and every download in the queue
async fn cmd_status(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let text = match fetch_status_report(&state.nzbget).await {
        Ok(report) => report,
        Err(e) => {
            error!("Status command failed: {}", e);
            GENERIC_ERROR_REPLY.to_string()
        }
    };
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Fetch server state, then the queue, and format the combined report.
async fn fetch_status_report(client: &NzbgetClient) -> NzbgetResult<String> {
    let status = client.status().await?;
    let groups = client.list_groups().await?;
    Ok(report::build_status_report(&status, &groups))
}

/// /cancel, /pause, /resume - Apply one queue edit to one group
async fn cmd_edit_queue(
    bot: Bot,
    msg: Message,
    arg: String,
    action: QueueAction,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let nzb_id = match parse_nzb_id(&arg) {
        Some(id) => id,
        None => {
            bot.send_message(msg.chat.id, usage_reply(action)).await?;
            return Ok(());
        }
    };

    let reply = match state.nzbget.edit_queue(action, nzb_id).await {
        Ok(true) => format!("Successfully {} NZB ID {}.", action_done(action), nzb_id),
        Ok(false) => format!("Failed to {} NZB ID {}.", action_verb(action), nzb_id),
        Err(e) => {
            error!("{} failed for NZB ID {}: {}", action, nzb_id, e);
            GENERIC_ERROR_REPLY.to_string()
        }
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Parse the NZB ID argument; `None` for a missing or non-numeric value.
fn parse_nzb_id(arg: &str) -> Option<i64> {
    arg.trim().parse().ok()
}

/// Instructional reply for a missing or unusable NZB ID.
fn usage_reply(action: QueueAction) -> String {
    format!("Please provide an NZB ID to {}.", action_verb(action))
}

fn action_verb(action: QueueAction) -> &'static str {
    match action {
        QueueAction::GroupDelete => "cancel",
        QueueAction::GroupPause => "pause",
        QueueAction::GroupResume => "resume",
    }
}

fn action_done(action: QueueAction) -> &'static str {
    match action {
        QueueAction::GroupDelete => "cancelled",
        QueueAction::GroupPause => "paused",
        QueueAction::GroupResume => "resumed",
    }
}
