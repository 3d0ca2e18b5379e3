//! Global Application State
//!
//! Reactive state management using Leptos signals. The whole view derives
//! from one signal holding the last fetched activity collection; every
//! successful refresh replaces it entirely.

use leptos::*;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// How long a transient status message stays visible, in milliseconds.
pub const STATUS_HIDE_MS: u32 = 5_000;

/// An activity as received from the API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    /// Participant emails in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, displayed as-is. Well-formed data never goes
    /// negative, and malformed data is rendered without clamping.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// The full activity collection in server order.
///
/// The wire format is a JSON object keyed by activity name; decoding into a
/// hash map would drop the server's entry order, so this keeps the entries
/// as a list in arrival order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityMap(pub Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for ActivityMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivityMapVisitor;

        impl<'de> Visitor<'de> for ActivityMapVisitor {
            type Value = ActivityMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(ActivityMap(entries))
            }
        }

        deserializer.deserialize_map(ActivityMapVisitor)
    }
}

/// Kind of transient status message
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusKind {
    Success,
    Error,
}

/// A transient status message shown in the status area
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Global board state provided to all components
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Last fetched activity collection, replaced wholesale on refresh
    pub activities: RwSignal<ActivityMap>,
    /// True once the first fetch has completed (success or failure)
    pub loaded: RwSignal<bool>,
    /// True while the last fetch failed; cleared by the next success
    pub load_failed: RwSignal<bool>,
    /// Transient status message, auto-hidden after [`STATUS_HIDE_MS`]
    pub status: RwSignal<Option<StatusMessage>>,
}

/// Provide board state to the component tree
pub fn provide_board_state() {
    let state = BoardState {
        activities: create_rw_signal(ActivityMap::default()),
        loaded: create_rw_signal(false),
        load_failed: create_rw_signal(false),
        status: create_rw_signal(None),
    };

    provide_context(state);
}

impl BoardState {
    /// Fetch the activity collection and replace the board wholesale.
    ///
    /// On failure the previous collection is left in place (the selection
    /// control keeps its stale options) and the list area shows a
    /// persistent failure message until a later refresh succeeds.
    pub async fn refresh(&self) {
        match crate::api::fetch_activities().await {
            Ok(activities) => {
                self.activities.set(activities);
                self.load_failed.set(false);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
                self.load_failed.set(true);
            }
        }
        self.loaded.set(true);
    }

    /// Show a success message (auto-hides after the fixed delay)
    pub fn show_success(&self, message: &str) {
        self.show_status(message, StatusKind::Success);
    }

    /// Show an error message (auto-hides after the fixed delay)
    pub fn show_error(&self, message: &str) {
        self.show_status(message, StatusKind::Error);
    }

    fn show_status(&self, message: &str, kind: StatusKind) {
        self.status.set(Some(StatusMessage {
            text: message.to_string(),
            kind,
        }));

        // The timer is fixed-length and unrelated to any request lifetime.
        let status_signal = self.status;
        gloo_timers::callback::Timeout::new(STATUS_HIDE_MS, move || {
            status_signal.set(None);
        })
        .forget();
    }
}
