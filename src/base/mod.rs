//! Core components, types, and utilities for the rsvp-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - The attendee status codec for event descriptions.
//! - Fixed user-facing message strings.
//! - Common types and result handling.

pub mod attendees;
pub mod config;
pub mod messages;
pub mod types;
