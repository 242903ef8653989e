//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by the rsvp-bot:
//! - Chat services (e.g., Telegram)
//! - Calendar services (e.g., Google Calendar)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod calendar;
pub mod chat;
