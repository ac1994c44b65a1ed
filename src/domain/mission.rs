// Mission, responder, incident and shelter records supplied by the coordination services
use super::geometry::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    Created,
    Updated,
    Active,
    Completed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepRole {
    Pickup,
    Delivery,
}

/// One point along a mission's path. Order within the mission defines direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub role: Option<StepRole>,
}

impl Step {
    pub fn new(lon: f64, lat: f64, role: Option<StepRole>) -> Self {
        Self { lon, lat, role }
    }

    pub fn pickup(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, Some(StepRole::Pickup))
    }

    pub fn delivery(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat, Some(StepRole::Delivery))
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: String,
    pub responder_id: String,
    pub incident_id: String,
    pub status: MissionStatus,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Mission {
    pub fn is_completed(&self) -> bool {
        self.status == MissionStatus::Completed
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Responder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub person: bool,
}

impl Responder {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.longitude, self.latitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentStatus {
    Reported,
    Assigned,
    PickedUp,
    Rescued,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default = "reported")]
    pub status: IncidentStatus,
}

fn reported() -> IncidentStatus {
    IncidentStatus::Reported
}

impl Incident {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }

    pub fn is_rescued(&self) -> bool {
        self.status == IncidentStatus::Rescued
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub rescued: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_from_json() {
        let json = r#"{
            "id": "M1",
            "responderId": "R1",
            "incidentId": "I1",
            "status": "ACTIVE",
            "steps": [
                {"lon": -77.9, "lat": 34.1, "role": "PICKUP"},
                {"lon": -77.8, "lat": 34.2}
            ]
        }"#;
        let mission: Mission = serde_json::from_str(json).unwrap();

        assert_eq!(mission.responder_id, "R1");
        assert_eq!(mission.status, MissionStatus::Active);
        assert_eq!(mission.steps[0].role, Some(StepRole::Pickup));
        assert_eq!(mission.steps[1].role, None);
        assert!(!mission.is_completed());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"id":"M2","responderId":"R1","incidentId":"I1","status":"ABORTED"}"#;
        let mission: Mission = serde_json::from_str(json).unwrap();
        assert_eq!(mission.status, MissionStatus::Other);
        assert!(mission.steps.is_empty());

        let incident: Incident = serde_json::from_str(r#"{"id":"I1","lat":34.1,"lon":-77.9}"#).unwrap();
        assert_eq!(incident.status, IncidentStatus::Reported);
    }

    #[test]
    fn test_incident_status_names() {
        let incident: Incident =
            serde_json::from_str(r#"{"id":"I1","lat":34.1,"lon":-77.9,"status":"PICKED_UP"}"#).unwrap();
        assert_eq!(incident.status, IncidentStatus::PickedUp);
        assert!(!incident.is_rescued());
    }
}
