//! Telegram chat client for rsvp-bot.
//!
//! Resolves the bot's own identity via `getMe` at construction, then
//! long-polls for updates. Only `/`-prefixed text messages are routed to the
//! command handlers (everything else is ordinary chat), and each command is
//! handled on its own task so a slow provider call never blocks the update
//! loop.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::{
    payloads::SendMessageSetters,
    prelude::*,
    types::{ChatId, ParseMode},
};
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::command_event::{self, CommandEvent},
    service::calendar::CalendarClient,
};

use super::{ChatClient, GenericChatClient};

// Extra methods on `ChatClient` applied by the Telegram implementation.

impl ChatClient {
    /// Creates a new Telegram chat client.
    pub async fn telegram(config: &Config, calendar: CalendarClient) -> Res<Self> {
        let client = TelegramChatClient::new(config, calendar).await?;
        Ok(Self::new(Arc::new(client)))
    }
}

impl From<TelegramChatClient> for ChatClient {
    fn from(client: TelegramChatClient) -> Self {
        Self::new(Arc::new(client))
    }
}

// Structs.

/// Telegram client implementation.
#[derive(Clone)]
pub struct TelegramChatClient {
    bot: Bot,
    bot_name: String,
    calendar: CalendarClient,
}

impl TelegramChatClient {
    /// Create a new Telegram chat client.
    #[instrument(name = "TelegramChatClient::new", skip_all)]
    pub async fn new(config: &Config, calendar: CalendarClient) -> Res<Self> {
        let bot = Bot::new(config.telegram_bot_token.clone());

        // Resolve the bot's own mention name for command parsing.

        let me = bot.get_me().await?;
        let bot_name = format!("@{}", me.username());

        info!("Telegram bot identity: {}", bot_name);

        Ok(Self { bot, bot_name, calendar })
    }
}

#[async_trait]
impl GenericChatClient for TelegramChatClient {
    fn bot_name(&self) -> &str {
        &self.bot_name
    }

    async fn start(&self) -> Void {
        let calendar = self.calendar.clone();
        let chat = ChatClient::from(self.clone());

        // Long-poll for updates, and wait for Ctrl-C to shut down.
        teloxide::repl(self.bot.clone(), move |message: Message| {
            let calendar = calendar.clone();
            let chat = chat.clone();

            async move {
                let (Some(text), Some(sender)) = (message.text(), message.from()) else {
                    return respond(());
                };

                // Ordinary chatter is not the bot's business.
                if !text.starts_with('/') {
                    return respond(());
                }

                let event = CommandEvent {
                    chat_id: message.chat.id.0,
                    text: text.to_string(),
                    sender: sender.full_name(),
                };

                command_event::handle_command_event(event, calendar, chat);

                respond(())
            }
        })
        .await;

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, chat_id: i64, text: &str, formatted: bool) -> Void {
        let request = self.bot.send_message(ChatId(chat_id), text);
        let request = if formatted { request.parse_mode(ParseMode::Markdown) } else { request };

        request.await.map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }
}
