// Interactive map surface for field coordination: mission routes and priority zones
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::drawing_tool::{DrawMode, DrawingTool, ModeOptions};
pub use application::route_display::{RouteDisplay, RouteOutcome};
pub use application::zone_drawing::{DrawingMode, HarvestReport, ZoneDrawing};
pub use application::zone_reconciliation::{ZoneReconciler, spawn_zone_writer, zone_channel};
pub use application::zone_repository::{ZoneAck, ZonePayload, ZoneRepository};
pub use domain::error::MapError;
pub use domain::geometry::{Coordinate, ViewportBounds};
pub use domain::mission::{Incident, Mission, MissionStatus, Responder, Shelter, Step, StepRole};
pub use domain::zone::{DrawnFeature, PriorityZone};
pub use infrastructure::config::{MapConfig, load_map_config};
pub use infrastructure::http_zone_repository::HttpZoneRepository;
pub use infrastructure::memory_drawing_tool::InMemoryDrawingTool;
pub use presentation::map_component::{MapComponent, MapInputs, RenderState};
