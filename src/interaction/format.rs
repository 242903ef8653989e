//! Rendering of events into chat messages.

use crate::base::{attendees, types::Event};

const TIME_FORMAT: &str = "%I:%M:%S%p";

/// Markdown link to the event in the provider's UI, labelled with its summary.
pub fn summary_with_link(event: &Event) -> String {
    format!("[{}]({})", event.summary, event.html_link)
}

/// The `/upcoming` listing: one numbered line per event.
///
/// Positions are 1-based since that carries more meaning in a message.
pub fn upcoming_listing(events: &[Event]) -> String {
    let lines = events
        .iter()
        .enumerate()
        .map(|(index, event)| listing_line(index + 1, event))
        .collect::<Vec<_>>()
        .join("\n");

    format!("Events coming up:\n{lines}")
}

fn listing_line(position: usize, event: &Event) -> String {
    format!(
        "{position}. {} - {}\n\t\t\t\t\t\t\t{}",
        summary_with_link(event),
        event.start.formatted_date(),
        listing_time_range(event)
    )
}

fn listing_time_range(event: &Event) -> String {
    match (event.start.instant(), event.end.instant()) {
        (Some(start), Some(end)) => format!("{} - {}", start.format(TIME_FORMAT), end.format(TIME_FORMAT)),
        _ => "all day".to_string(),
    }
}

/// The `/details` card: linked summary, day and time range, the user-authored
/// description (when present), and the raw attendee block (when recorded).
pub fn event_details(position: usize, event: &Event) -> String {
    let description = event.description.as_deref().unwrap_or_default();
    let (user_text, _) = attendees::split_user_text(description);

    let mut text = format!(
        "{position}. {}\n`{}\n{}`",
        summary_with_link(event),
        event.start.formatted_day(),
        details_time_range(event)
    );

    if !user_text.is_empty() {
        text.push_str(&format!("\nDescription:\n{user_text}"));
    }

    if let Some(block) = attendees::attendee_block(description) {
        text.push_str(&format!("\n\nAttendee Information:\n{block}"));
    }

    text
}

fn details_time_range(event: &Event) -> String {
    match (event.start.instant(), event.end.instant()) {
        (Some(start), Some(end)) => format!("From {} - {}", start.format(TIME_FORMAT), end.format(TIME_FORMAT)),
        _ => "All day".to_string(),
    }
}
