pub mod telegram;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::Void;

// Traits.

/// Generic "chat" trait that clients must implement.
///
/// This trait defines the core functionality for interacting with chat
/// platforms like Telegram. Implementing this trait allows different chat
/// services to be used with the rsvp-bot.
#[async_trait]
pub trait GenericChatClient: Send + Sync + 'static {
    /// Get the bot's mention name.
    ///
    /// Returns the `@name` users may append to a command token
    /// (`/going@SomeBot 1`), used while parsing commands.
    fn bot_name(&self) -> &str;

    /// Start the chat client listener.
    ///
    /// This begins receiving messages from the chat platform and routing
    /// command messages to their handlers.
    async fn start(&self) -> Void;

    /// Send a message to a chat.
    ///
    /// `formatted` selects the platform's rich-text rendering (Markdown for
    /// Telegram); fixed notices go out as plain text.
    async fn send_message(&self, chat_id: i64, text: &str, formatted: bool) -> Void;
}

// Structs.

/// Chat client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<dyn GenericChatClient>,
}

impl Deref for ChatClient {
    type Target = dyn GenericChatClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ChatClient {
    pub fn new(inner: Arc<dyn GenericChatClient>) -> Self {
        Self { inner }
    }
}
