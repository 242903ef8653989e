use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Attendance state a user can record against an event.
///
/// Absence of a recorded line for a user is "unknown", which is distinct from
/// an explicit `Undecided` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    Going,
    NotGoing,
    Undecided,
}

impl Attendance {
    /// The status text stored against a user's name in the event description.
    pub fn record_phrase(self) -> &'static str {
        match self {
            Self::Going => "is going to this event",
            Self::NotGoing => "is not going to this event",
            Self::Undecided => "is undecided about this event",
        }
    }

    /// The verb phrase used when confirming the change back to the chat.
    pub fn announcement(self) -> &'static str {
        match self {
            Self::Going => "going to",
            Self::NotGoing => "not going to",
            Self::Undecided => "undecided about",
        }
    }
}

/// A calendar event as returned by the provider.
///
/// Read-only to this bot except for `description`, which carries the embedded
/// attendee block (see [`crate::base::attendees`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub html_link: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

/// Start or end of an event: either a precise instant or an all-day date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl EventTime {
    /// The precise instant, if this is not an all-day time.
    pub fn instant(&self) -> Option<DateTime<FixedOffset>> {
        self.date_time
    }

    /// Short date, e.g. `08/06/2026`.
    pub fn formatted_date(&self) -> String {
        if let Some(instant) = self.date_time {
            return instant.format("%m/%d/%Y").to_string();
        }

        if let Some(date) = self.date {
            return date.format("%m/%d/%Y").to_string();
        }

        String::new()
    }

    /// Long day label, e.g. `Thu. Aug 06, 2026`.
    pub fn formatted_day(&self) -> String {
        if let Some(instant) = self.date_time {
            return instant.format("%a. %b %d, %Y").to_string();
        }

        if let Some(date) = self.date {
            return date.format("%a. %b %d, %Y").to_string();
        }

        String::new()
    }
}
