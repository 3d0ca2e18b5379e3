//! Activity Registry
//!
//! In-memory store for the activity roster. Activities are kept in seed
//! order and participants in signup order; both orders are meaningful to
//! clients, which render entries exactly as the server lists them.
//!
//! Every change is made through [`ActivityRegistry::signup`] or
//! [`ActivityRegistry::unregister`]; readers take a full snapshot, so there
//! is no partial-update surface.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

/// A named, capacity-bounded activity students can join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Human-readable description
    pub description: String,
    /// Schedule text, e.g. "Mondays and Wednesdays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Maximum number of participants
    pub max_participants: usize,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with no participants.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed an initial participant list.
    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Whether the activity has reached capacity.
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

/// Registry operation errors
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// Activity name is not in the roster
    #[error("Activity not found")]
    UnknownActivity(String),

    /// Email is already on the participant list
    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },

    /// Activity has reached max_participants
    #[error("Activity is already full")]
    ActivityFull(String),

    /// Email is not on the participant list
    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, email: String },
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Thread-safe in-memory activity roster.
pub struct ActivityRegistry {
    /// Entries in seed order; lookups are linear, the roster is small.
    entries: RwLock<Vec<(String, Activity)>>,
}

impl ActivityRegistry {
    /// Create a registry from explicit entries, preserving their order.
    pub fn from_entries(entries: Vec<(String, Activity)>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Create a registry seeded with the default school roster.
    pub fn with_default_roster() -> Self {
        Self::from_entries(default_roster())
    }

    /// Clone the full roster in server order.
    pub async fn snapshot(&self) -> Vec<(String, Activity)> {
        self.entries.read().await.clone()
    }

    /// Number of activities in the roster.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Add `email` to the participant list of `name`.
    ///
    /// Returns the confirmation message shown to the user.
    pub async fn signup(&self, name: &str, email: &str) -> RegistryResult<String> {
        let mut entries = self.entries.write().await;

        let activity = find_mut(&mut entries, name)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.is_full() {
            return Err(RegistryError::ActivityFull(name.to_string()));
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, name))
    }

    /// Remove `email` from the participant list of `name`.
    ///
    /// The order of the remaining participants is unchanged.
    pub async fn unregister(&self, name: &str, email: &str) -> RegistryResult<String> {
        let mut entries = self.entries.write().await;

        let activity = find_mut(&mut entries, name)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, name))
    }
}

fn find_mut<'a>(
    entries: &'a mut [(String, Activity)],
    name: &str,
) -> RegistryResult<&'a mut Activity> {
    entries
        .iter_mut()
        .find(|(n, _)| n == name)
        .map(|(_, activity)| activity)
        .ok_or_else(|| RegistryError::UnknownActivity(name.to_string()))
}

/// Default roster, mirroring the upstream seed data.
fn default_roster() -> Vec<(String, Activity)> {
    vec![
        (
            "Chess Club".to_string(),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class".to_string(),
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class".to_string(),
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Soccer Team".to_string(),
            Activity::new(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
            )
            .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
        ),
        (
            "Basketball Team".to_string(),
            Activity::new(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["ava@mergington.edu", "mia@mergington.edu"]),
        ),
        (
            "Art Club".to_string(),
            Activity::new(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
            )
            .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
        ),
        (
            "Drama Club".to_string(),
            Activity::new(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
            )
            .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
        ),
        (
            "Math Olympiad".to_string(),
            Activity::new(
                "Develop problem-solving skills and prepare for math competitions",
                "Tuesdays and Thursdays, 7:15 AM - 8:00 AM",
                10,
            )
            .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
        (
            "Debate Team".to_string(),
            Activity::new(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            )
            .with_participants(&["charlotte@mergington.edu", "henry@mergington.edu"]),
        ),
    ]
}
