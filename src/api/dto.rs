//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::registry::Activity;

// ============================================
// ACTIVITY DTOs
// ============================================

/// The full activity collection as sent over the wire.
///
/// Serialized as a JSON object keyed by activity name. Entry order is the
/// server order clients render in, so the type is backed by an entry list
/// instead of a hash map: a map would shuffle the roster on every response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityMap(pub Vec<(String, Activity)>);

impl ActivityMap {
    /// Look up an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }
}

impl Serialize for ActivityMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

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

// ============================================
// REGISTRATION DTOs
// ============================================

/// Query parameters for signup and unregister.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Participant email address
    pub email: String,
}

/// Success body for mutations.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Confirmation text shown to the user
    pub message: String,
}

/// Failure body for all API errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetailResponse {
    /// Error text shown to the user
    pub detail: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Number of activities in the roster
    pub activities: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> ActivityMap {
        ActivityMap(vec![
            ("Zebra Club".to_string(), Activity::new("z", "Mon", 5)),
            (
                "Art Club".to_string(),
                Activity::new("a", "Tue", 3).with_participants(&["a@x.com"]),
            ),
        ])
    }

    #[test]
    fn serializes_entries_in_server_order() {
        let json = serde_json::to_string(&sample_map()).unwrap();

        // "Zebra Club" was seeded first and must serialize first, even
        // though it sorts after "Art Club".
        let zebra = json.find("Zebra Club").unwrap();
        let art = json.find("Art Club").unwrap();
        assert!(zebra < art);
    }

    #[test]
    fn deserializes_preserving_order() {
        let json = serde_json::to_string(&sample_map()).unwrap();
        let decoded: ActivityMap = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, sample_map());
        assert_eq!(decoded.0[0].0, "Zebra Club");
    }

    #[test]
    fn get_finds_by_name() {
        let map = sample_map();
        assert_eq!(map.get("Art Club").unwrap().participants, vec!["a@x.com"]);
        assert!(map.get("Chess Club").is_none());
    }
}
