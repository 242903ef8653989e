//! Event handling and user interactions for rsvp-bot.
//!
//! This module provides functionality for handling chat commands:
//! - Parsing incoming messages into commands
//! - Dispatching commands to handlers behind one crash-containment guard
//! - Rendering events and replies for the chat

pub mod command;
pub mod command_event;
pub mod format;
