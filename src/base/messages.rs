//! Fixed user-facing message strings.
//!
//! Every canned reply the bot can send lives here so the wording (and any
//! future localization) stays in one place.

/// Reply to `/help`.
pub const HELP: &str = "I currently support the following commands\
    \n/create - Quickly create an event\
    \n/upcoming - See upcoming events\
    \n/going <number> - Going to event\
    \n\t\t Ex: /going 1\
    \n/not <number> - Not going to specified event\
    \n\t\t Ex: /not 1\
    \n/undecided <number> - Undecided about specified event\
    \n\t\t Ex: /undecided 1\
    \n/details <number> - See additional information about specified event\
    \n\t\t Ex: /details 1";

/// Out-of-range or unparseable position on a status-change command.
pub const INVALID_EVENT_NUMBER: &str = "Invalid Event Number see /upcoming for event numbers";

/// Out-of-range or unparseable position on `/details`.
pub const EVENT_NUMBER_REQUIRED: &str = "Valid Event Number Required \n\t\t For Example: `/details 1`";

/// `/create` with nothing to create.
pub const CREATE_USAGE: &str = "Event Text Required \n\t\t For Example: `/create Lunch tomorrow at noon`";

/// Provider failure while persisting a status change.
pub const UPDATE_FAILED: &str = "Unable to update the Google Calendar, please try again later.";

/// Provider failure while quick-creating an event.
pub const CREATE_FAILED: &str = "Could not quick create event, please try again later.";

/// Blanket notice sent when dispatch fails unexpectedly.
pub const DISPATCH_FAILURE: &str = "An exception occurred while processing command, contact developer(s)";

/// Echo for a command the bot does not recognize.
pub fn unsupported(raw: &str) -> String {
    format!("I do not support the command {raw} yet")
}
