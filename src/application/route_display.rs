// Route display - which mission route the map shows and where the viewport fits
use crate::domain::geometry::{ViewportBounds, line_collection};
use crate::domain::mission::Mission;
use crate::domain::route::build_route;
use geojson::FeatureCollection;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// No mission, or a completed one. Display untouched.
    Skipped,
    /// The mission has no steps yet. Lines emptied, bounds unset.
    Cleared,
    Displayed,
}

/// Owns the pickup and deliver line containers the map renders.
///
/// Containers are immutable snapshots behind `Arc`. Every change swaps in a new `Arc`, so a
/// renderer can detect changes with `Arc::ptr_eq` alone.
#[derive(Debug, Clone)]
pub struct RouteDisplay {
    pickup: Arc<FeatureCollection>,
    deliver: Arc<FeatureCollection>,
    bounds: Option<ViewportBounds>,
    mission_id: Option<String>,
}

impl Default for RouteDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteDisplay {
    pub fn new() -> Self {
        Self {
            pickup: Arc::new(line_collection(&[])),
            deliver: Arc::new(line_collection(&[])),
            bounds: None,
            mission_id: None,
        }
    }

    pub fn show_mission_route(&mut self, mission: Option<&Mission>) -> RouteOutcome {
        let Some(mission) = mission.filter(|m| !m.is_completed()) else {
            return RouteOutcome::Skipped;
        };

        let route = build_route(&mission.id, &mission.steps);
        if route.is_empty() {
            tracing::debug!("Mission {} has no route yet", mission.id);
            self.pickup = Arc::new(line_collection(&[]));
            self.deliver = Arc::new(line_collection(&[]));
            self.bounds = None;
            self.mission_id = Some(mission.id.clone());
            return RouteOutcome::Cleared;
        }

        tracing::debug!(
            "Showing mission {}: {} pickup / {} deliver points",
            mission.id,
            route.pickup_path.len(),
            route.deliver_path.len()
        );
        self.pickup = Arc::new(line_collection(&route.pickup_path));
        self.deliver = Arc::new(line_collection(&route.deliver_path));
        self.bounds = route.bounds();
        self.mission_id = Some(mission.id.clone());
        RouteOutcome::Displayed
    }

    pub fn show_responder_route(&mut self, missions: &[Mission], responder_id: &str) -> RouteOutcome {
        self.show_mission_route(responder_mission(missions, responder_id))
    }

    pub fn show_incident_route(&mut self, missions: &[Mission], incident_id: &str) -> RouteOutcome {
        self.show_mission_route(incident_mission(missions, incident_id))
    }

    pub fn pickup(&self) -> Arc<FeatureCollection> {
        Arc::clone(&self.pickup)
    }

    pub fn deliver(&self) -> Arc<FeatureCollection> {
        Arc::clone(&self.deliver)
    }

    pub fn bounds(&self) -> Option<ViewportBounds> {
        self.bounds
    }

    pub fn mission_id(&self) -> Option<&str> {
        self.mission_id.as_deref()
    }
}

/// First mission for the responder that is not completed.
pub fn responder_mission<'a>(missions: &'a [Mission], responder_id: &str) -> Option<&'a Mission> {
    missions
        .iter()
        .find(|m| m.responder_id == responder_id && !m.is_completed())
}

/// First mission for the incident, whatever its status.
pub fn incident_mission<'a>(missions: &'a [Mission], incident_id: &str) -> Option<&'a Mission> {
    missions.iter().find(|m| m.incident_id == incident_id)
}
