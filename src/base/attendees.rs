//! Attendee status codec for event descriptions.
//!
//! Google Calendar gives this bot exactly one writable free-text field per
//! event, and humans edit that same field in the calendar UI. The codec
//! embeds per-user attendance lines behind a marker so that:
//! - text before the first marker is user-authored and round-trips unchanged;
//! - each user owns at most one line, updated in place (first-seen order);
//! - anything malformed degrades to plain text instead of erroring.
//!
//! Layout of an encoded description:
//!
//! ```text
//! <user text><ATTENDEE_MARKER><name>⠀<status>\n<name>⠀<status>...
//! ```
//!
//! The name/status separator is U+2800 (BRAILLE PATTERN BLANK), a character
//! that never occurs in a legitimate display name, so splitting stays
//! unambiguous even though names contain spaces and punctuation.

use super::types::Attendance;

/// Delimits user-authored description text from the attendee block.
pub const ATTENDEE_MARKER: &str = "\n\nTELEGRAM_BOT_INFO_BELOW_DO_NOT_MODIFY\n";

/// Splits a name from its status within one attendee line.
pub const NAME_STATUS_SEPARATOR: char = '\u{2800}';

/// One recorded attendee: a display name and its status phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeLine {
    pub name: String,
    pub status: String,
}

/// Splits a description at the first marker occurrence.
///
/// Returns the user-authored text and, when the marker is present, the raw
/// attendee block after it. A description without the marker (including the
/// empty string) is entirely user text.
pub fn split_user_text(description: &str) -> (&str, Option<&str>) {
    match description.find(ATTENDEE_MARKER) {
        Some(at) => (&description[..at], Some(&description[at + ATTENDEE_MARKER.len()..])),
        None => (description, None),
    }
}

/// Parses a raw attendee block into ordered lines.
///
/// Best-effort: a line without the separator is treated as an opaque name
/// with an empty status, and empty lines are skipped. The block is shared
/// with humans, so this never errors.
pub fn parse_attendee_lines(raw_block: &str) -> Vec<AttendeeLine> {
    raw_block
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(NAME_STATUS_SEPARATOR) {
            Some((name, status)) => AttendeeLine {
                name: name.to_string(),
                status: status.to_string(),
            },
            None => AttendeeLine {
                name: line.to_string(),
                status: String::new(),
            },
        })
        .collect()
}

/// Records `status` for `name`, replacing an existing line in place or
/// appending a new one. Names match byte-exactly, so exactly one line per
/// name remains afterwards.
pub fn upsert_status(lines: &mut Vec<AttendeeLine>, name: &str, status: &str) {
    for line in lines.iter_mut() {
        if line.name == name {
            line.status = status.to_string();
            return;
        }
    }

    lines.push(AttendeeLine {
        name: name.to_string(),
        status: status.to_string(),
    });
}

/// Reassembles a description from user text and attendee lines.
///
/// The marker is always emitted once a status has been recorded, even for an
/// empty line list; empty user text yields a description that starts with
/// the marker.
pub fn render(user_text: &str, lines: &[AttendeeLine]) -> String {
    let block = lines
        .iter()
        .map(|line| format!("{}{}{}", line.name, NAME_STATUS_SEPARATOR, line.status))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{user_text}{ATTENDEE_MARKER}{block}")
}

/// The raw attendee block for read-only display.
///
/// `None` means no block has been recorded yet, which is not the same as "no
/// attendees".
pub fn attendee_block(description: &str) -> Option<&str> {
    split_user_text(description).1
}

/// The single mutation entry point: merges one user's attendance into a
/// description without disturbing any other content.
pub fn record_status(description: &str, name: &str, attendance: Attendance) -> String {
    let (user_text, raw_block) = split_user_text(description);

    let mut lines = raw_block.map(parse_attendee_lines).unwrap_or_default();
    upsert_status(&mut lines, name, attendance.record_phrase());

    render(user_text, &lines)
}
