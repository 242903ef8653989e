//! Library root for `rsvp-bot`.
//!
//! Rsvp-bot is a Telegram assistant for group calendars designed to:
//! - List upcoming Google Calendar events
//! - Record who is going, not going, or undecided about an event
//! - Show event details including recorded attendee information
//! - Quick-create events from natural-language text
//!
//! Attendance is stored inside each event's own description field behind a
//! marker, so the calendar remains the single source of truth and there is
//! no separate database. The architecture is built around extensible traits
//! that allow for different implementations of each service.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the rsvp-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with calendar and chat clients
/// - Starts the update loop for processing commands
pub async fn start(config: Config) -> Void {
    info!("Starting rsvp-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider().install_default().unwrap();

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
