//! Dispatch of parsed commands to their handlers.

use tracing::{Instrument, error, instrument, warn};

use crate::{
    base::{
        attendees, messages,
        types::{Attendance, Event, Res, Void},
    },
    interaction::{command::Command, format},
    service::{calendar::CalendarClient, chat::ChatClient},
};

/// One incoming chat command, as handed over by the chat transport.
#[derive(Debug, Clone)]
pub struct CommandEvent {
    /// Chat the command arrived in (and where the reply goes).
    pub chat_id: i64,
    /// Raw message text.
    pub text: String,
    /// Display name of the invoking user.
    pub sender: String,
}

/// Handles a command event on its own task.
///
/// This is the bot's blanket crash-containment boundary: any unexpected
/// failure during dispatch is logged and answered with a generic notice, so
/// one bad event payload cannot kill the message loop.
#[instrument(skip_all)]
pub fn handle_command_event(event: CommandEvent, calendar: CalendarClient, chat: ChatClient) {
    tokio::spawn(async move {
        // Process the event.
        let result = handle_command(&event, &calendar, &chat).in_current_span().await;

        // Log any errors, and let the chat know something went wrong.
        if let Err(err) = &result {
            error!("Error while handling command: {}", err);
            let _ = chat.send_message(event.chat_id, messages::DISPATCH_FAILURE, false).await;
        }
    });
}

/// Parses the command and runs the matching handler.
#[instrument(skip_all)]
pub async fn handle_command(event: &CommandEvent, calendar: &CalendarClient, chat: &ChatClient) -> Void {
    match Command::parse(&event.text, chat.bot_name()) {
        Command::Upcoming => send_upcoming(event, calendar, chat).await,
        Command::Going(position) => update_attendance(event, calendar, chat, position, Attendance::Going).await,
        Command::NotGoing(position) => update_attendance(event, calendar, chat, position, Attendance::NotGoing).await,
        Command::Undecided(position) => update_attendance(event, calendar, chat, position, Attendance::Undecided).await,
        Command::Details(position) => send_details(event, calendar, chat, position).await,
        Command::Create(text) => quick_create(event, calendar, chat, &text).await,
        Command::Help => chat.send_message(event.chat_id, messages::HELP, false).await,
        Command::Unsupported(raw) => chat.send_message(event.chat_id, &messages::unsupported(&raw), false).await,
    }
}

/// Fetches the listing, degrading a provider failure to an empty one.
///
/// Matches the original behavior: a failed listing is not a crash, the user
/// just sees no events (or the bounds-invalid message).
async fn upcoming_or_empty(calendar: &CalendarClient) -> Vec<Event> {
    match calendar.upcoming_events().await {
        Ok(events) => events,
        Err(err) => {
            warn!("Failed to list upcoming events: {}", err);
            Vec::new()
        }
    }
}

/// Resolves a 1-based position against the listing.
fn resolve(events: &[Event], position: i64) -> Option<&Event> {
    if position < 1 {
        return None;
    }

    events.get(position as usize - 1)
}

async fn send_upcoming(event: &CommandEvent, calendar: &CalendarClient, chat: &ChatClient) -> Void {
    let events = upcoming_or_empty(calendar).await;

    chat.send_message(event.chat_id, &format::upcoming_listing(&events), true).await
}

/// Shared template for the `going` / `not` / `undecided` family.
async fn update_attendance(event: &CommandEvent, calendar: &CalendarClient, chat: &ChatClient, position: i64, attendance: Attendance) -> Void {
    let events = upcoming_or_empty(calendar).await;

    let reply = match resolve(&events, position) {
        None => messages::INVALID_EVENT_NUMBER.to_string(),
        Some(target) => match record_attendance(calendar, target, &event.sender, attendance).await {
            Ok(confirmation) => confirmation,
            Err(err) => {
                error!("Failed to update event {}: {}", target.id, err);
                messages::UPDATE_FAILED.to_string()
            }
        },
    };

    chat.send_message(event.chat_id, &reply, true).await
}

/// Re-fetches the authoritative description, merges the status, and persists.
///
/// The listing copy of the description may be stale, so the merge always
/// runs against a fresh read of the single event. Two concurrent changes to
/// the same event can still lose one update (whole-field last-write-wins);
/// the provider contract offers no conditional write.
async fn record_attendance(calendar: &CalendarClient, target: &Event, sender: &str, attendance: Attendance) -> Res<String> {
    let current = calendar.event(&target.id).await?;
    let description = current.description.unwrap_or_default();

    let updated = attendees::record_status(&description, sender, attendance);
    calendar.patch_description(&target.id, &updated).await?;

    Ok(format!("{sender} is {} {}", attendance.announcement(), format::summary_with_link(target)))
}

async fn send_details(event: &CommandEvent, calendar: &CalendarClient, chat: &ChatClient, position: i64) -> Void {
    let events = upcoming_or_empty(calendar).await;

    let reply = match resolve(&events, position) {
        None => messages::EVENT_NUMBER_REQUIRED.to_string(),
        Some(target) => format::event_details(position as usize, target),
    };

    chat.send_message(event.chat_id, &reply, true).await
}

async fn quick_create(event: &CommandEvent, calendar: &CalendarClient, chat: &ChatClient, text: &str) -> Void {
    // Nothing to create: answer with the usage hint without calling the provider.
    if text.trim().is_empty() {
        return chat.send_message(event.chat_id, messages::CREATE_USAGE, true).await;
    }

    let reply = match calendar.quick_create(text).await {
        Ok(created) => format!("{} created {}", event.sender, format::summary_with_link(&created)),
        Err(err) => {
            error!("Failed to quick create event: {}", err);
            messages::CREATE_FAILED.to_string()
        }
    };

    chat.send_message(event.chat_id, &reply, true).await
}
