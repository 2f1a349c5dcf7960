//! Geofence registration requests handed to the platform layer.
//!
//! The core only describes the region; registering it with the platform
//! geofencing client and reacting to its callbacks happen outside this crate.

use crate::model::reminder::{ReminderDataItem, ReminderId};
use serde::{Deserialize, Serialize};

pub const GEOFENCE_RADIUS_IN_METERS: f32 = 100.0;

/// Region transition that fires the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceExpiration {
    Never,
}

/// Circular region registration for one saved reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    /// Same value as the reminder id, so a fired geofence maps back to it.
    pub request_id: ReminderId,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    pub expiration: GeofenceExpiration,
    pub transition: GeofenceTransition,
    /// Fire immediately when the device is already inside the region.
    pub initial_trigger: GeofenceTransition,
}

impl GeofenceRequest {
    /// Builds the request for a reminder; `None` when coordinates are missing.
    pub fn for_reminder(reminder: &ReminderDataItem) -> Option<Self> {
        let (latitude, longitude) = reminder.coordinates()?;
        Some(Self {
            request_id: reminder.id.clone(),
            latitude,
            longitude,
            radius_meters: GEOFENCE_RADIUS_IN_METERS,
            expiration: GeofenceExpiration::Never,
            transition: GeofenceTransition::Enter,
            initial_trigger: GeofenceTransition::Enter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{GeofenceRequest, GeofenceTransition, GEOFENCE_RADIUS_IN_METERS};
    use crate::model::reminder::ReminderDataItem;

    #[test]
    fn request_reuses_reminder_id_and_coordinates() {
        let reminder = ReminderDataItem::new(
            Some("Title1".to_string()),
            None,
            Some("California".to_string()),
            Some(36.0),
            Some(119.0),
        );

        let request = GeofenceRequest::for_reminder(&reminder).expect("coordinates are set");
        assert_eq!(request.request_id, reminder.id);
        assert_eq!(request.latitude, 36.0);
        assert_eq!(request.longitude, 119.0);
        assert_eq!(request.radius_meters, GEOFENCE_RADIUS_IN_METERS);
        assert_eq!(request.transition, GeofenceTransition::Enter);
    }

    #[test]
    fn request_serializes_for_platform_bridge() {
        let reminder = ReminderDataItem::new(
            Some("Title1".to_string()),
            None,
            Some("California".to_string()),
            Some(36.0),
            Some(119.0),
        );
        let request = GeofenceRequest::for_reminder(&reminder).expect("coordinates are set");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["request_id"], reminder.id);
        assert_eq!(json["expiration"], "never");
        assert_eq!(json["transition"], "enter");
        assert_eq!(json["initial_trigger"], "enter");
    }

    #[test]
    fn request_requires_both_coordinates() {
        let reminder = ReminderDataItem::new(
            Some("Title1".to_string()),
            None,
            Some("California".to_string()),
            Some(36.0),
            None,
        );
        assert!(GeofenceRequest::for_reminder(&reminder).is_none());
    }
}
