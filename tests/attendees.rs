#![cfg(test)]

use rsvp_bot::base::{
    attendees::{self, AttendeeLine, ATTENDEE_MARKER, NAME_STATUS_SEPARATOR},
    types::Attendance,
};

const SEP: char = NAME_STATUS_SEPARATOR;

#[test]
fn first_status_appends_marker_and_line() {
    let updated = attendees::record_status("Party details.", "Alice", Attendance::Going);

    assert_eq!(
        updated,
        format!("Party details.\n\nTELEGRAM_BOT_INFO_BELOW_DO_NOT_MODIFY\nAlice{SEP}is going to this event")
    );
}

#[test]
fn second_status_replaces_in_place_without_duplicates() {
    let first = attendees::record_status("Party details.", "Alice", Attendance::Going);
    let second = attendees::record_status(&first, "Alice", Attendance::NotGoing);

    assert_eq!(
        second,
        format!("Party details.\n\nTELEGRAM_BOT_INFO_BELOW_DO_NOT_MODIFY\nAlice{SEP}is not going to this event")
    );
}

#[test]
fn empty_description_starts_with_marker() {
    let updated = attendees::record_status("", "Alice", Attendance::Undecided);

    assert_eq!(updated, format!("{ATTENDEE_MARKER}Alice{SEP}is undecided about this event"));
}

#[test]
fn user_text_round_trips_across_upserts() {
    let user_text = "Bring snacks!\nAnd drinks, *please*.";

    let mut description = user_text.to_string();
    for (name, attendance) in [
        ("Alice", Attendance::Going),
        ("Bob Smith", Attendance::Undecided),
        ("Alice", Attendance::NotGoing),
        ("Carol (guest)", Attendance::Going),
    ] {
        description = attendees::record_status(&description, name, attendance);
        let (prefix, block) = attendees::split_user_text(&description);
        assert_eq!(prefix, user_text);
        assert!(block.is_some());
    }
}

#[test]
fn repeated_identical_upserts_are_idempotent() {
    let once = attendees::record_status("Notes.", "Alice", Attendance::Going);
    let twice = attendees::record_status(&once, "Alice", Attendance::Going);

    assert_eq!(once, twice);
}

#[test]
fn existing_users_keep_their_line_position() {
    let mut description = attendees::record_status("", "Alice", Attendance::Going);
    description = attendees::record_status(&description, "Bob", Attendance::Going);
    description = attendees::record_status(&description, "Alice", Attendance::Undecided);

    let block = attendees::attendee_block(&description).unwrap();
    let lines = attendees::parse_attendee_lines(block);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "Alice");
    assert_eq!(lines[0].status, "is undecided about this event");
    assert_eq!(lines[1].name, "Bob");
}

#[test]
fn distinct_names_yield_one_line_each() {
    let names = ["Alice", "Bob", "Carol", "Alice", "Bob", "Dave"];

    let mut description = String::new();
    for name in names {
        description = attendees::record_status(&description, name, Attendance::Going);
    }

    let block = attendees::attendee_block(&description).unwrap();
    assert_eq!(attendees::parse_attendee_lines(block).len(), 4);
}

#[test]
fn name_matching_is_byte_exact() {
    let description = attendees::record_status("", "alice", Attendance::Going);
    let updated = attendees::record_status(&description, "Alice", Attendance::NotGoing);

    let block = attendees::attendee_block(&updated).unwrap();
    let lines = attendees::parse_attendee_lines(block);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name, "alice");
    assert_eq!(lines[1].name, "Alice");
}

#[test]
fn description_without_marker_is_all_user_text() {
    let (user_text, block) = attendees::split_user_text("Just some notes, nothing else.");

    assert_eq!(user_text, "Just some notes, nothing else.");
    assert_eq!(block, None);
    assert_eq!(attendees::attendee_block("Just some notes, nothing else."), None);
}

#[test]
fn empty_description_splits_cleanly() {
    assert_eq!(attendees::split_user_text(""), ("", None));
}

#[test]
fn split_uses_first_marker_occurrence() {
    let description = format!("prefix{ATTENDEE_MARKER}Alice{SEP}x{ATTENDEE_MARKER}weird");

    let (user_text, block) = attendees::split_user_text(&description);

    assert_eq!(user_text, "prefix");
    assert_eq!(block, Some(&*format!("Alice{SEP}x{ATTENDEE_MARKER}weird")));
}

#[test]
fn malformed_line_is_kept_as_opaque_name() {
    let description = format!("notes{ATTENDEE_MARKER}hand-edited garbage");
    let updated = attendees::record_status(&description, "Alice", Attendance::Going);

    let block = attendees::attendee_block(&updated).unwrap();
    let lines = attendees::parse_attendee_lines(block);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], AttendeeLine { name: "hand-edited garbage".to_string(), status: String::new() });
    assert_eq!(lines[1].name, "Alice");
}

#[test]
fn render_emits_marker_even_for_empty_lines() {
    assert_eq!(attendees::render("notes", &[]), format!("notes{ATTENDEE_MARKER}"));
}
