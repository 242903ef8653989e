pub mod google;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Event, Res, Void};

// Traits.

/// Generic "calendar" trait that clients must implement.
///
/// This trait defines the core functionality for talking to a calendar
/// provider. Implementing this trait allows different providers to be used
/// with the rsvp-bot.
#[async_trait]
pub trait GenericCalendarClient: Send + Sync + 'static {
    /// List upcoming events.
    ///
    /// Returns future-or-current events ordered by start time ascending; the
    /// 1-based positions users pass to commands index into this listing.
    async fn upcoming_events(&self) -> Res<Vec<Event>>;

    /// Get a single event by its id.
    ///
    /// Used to read the authoritative current description immediately before
    /// merging a status change into it.
    async fn event(&self, event_id: &str) -> Res<Event>;

    /// Persist a new description for an event.
    ///
    /// The description is the only event field this bot ever writes.
    async fn patch_description(&self, event_id: &str, description: &str) -> Void;

    /// Create an event from natural-language text.
    ///
    /// Delegates entirely to the provider's quick-add parsing.
    async fn quick_create(&self, text: &str) -> Res<Event>;
}

// Structs.

/// Calendar client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct CalendarClient {
    inner: Arc<dyn GenericCalendarClient>,
}

impl Deref for CalendarClient {
    type Target = dyn GenericCalendarClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl CalendarClient {
    pub fn new(inner: Arc<dyn GenericCalendarClient>) -> Self {
        Self { inner }
    }
}
