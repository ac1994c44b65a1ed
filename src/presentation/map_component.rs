// Map component - what the UI shell drives and renders
use crate::application::drawing_tool::DrawingTool;
use crate::application::route_display::{RouteDisplay, RouteOutcome, incident_mission, responder_mission};
use crate::application::zone_drawing::{DrawingMode, HarvestReport, ZoneDrawing};
use crate::application::zone_reconciliation::{ZoneReconciler, ZoneSender};
use crate::domain::geometry::{Coordinate, ViewportBounds};
use crate::domain::mission::{Incident, Mission, Responder, Shelter};
use crate::domain::zone::PriorityZone;
use crate::infrastructure::config::{MapConfig, MapSettings};
use crate::presentation::interaction::{MapInteraction, PointerEvent, ZoneMarker};
use geojson::FeatureCollection;
use std::sync::Arc;

/// Lists pushed in by the coordination services.
#[derive(Debug, Clone, Default)]
pub struct MapInputs {
    pub responders: Vec<Responder>,
    pub incidents: Vec<Incident>,
    pub shelters: Vec<Shelter>,
    pub missions: Vec<Mission>,
    pub priority_zones: Vec<PriorityZone>,
}

/// Everything the map widget binds to. Geometry fields are shared snapshots.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub pickup: Arc<FeatureCollection>,
    pub deliver: Arc<FeatureCollection>,
    pub zones: Arc<FeatureCollection>,
    pub bounds: Option<ViewportBounds>,
    pub fit_padding: u32,
    pub center: Coordinate,
    pub zoom: f64,
    pub drawing_mode: DrawingMode,
    pub button_label: &'static str,
    pub markers: Vec<ZoneMarker>,
}

pub struct MapComponent<D: DrawingTool> {
    settings: MapSettings,
    inputs: MapInputs,
    zone_features: Arc<FeatureCollection>,
    center: Coordinate,
    zoom: f64,
    routes: RouteDisplay,
    drawing: ZoneDrawing<D>,
    interaction: MapInteraction,
}

impl<D: DrawingTool> MapComponent<D> {
    pub fn new(config: &MapConfig, tool: D, zones: ZoneSender) -> Self {
        Self {
            settings: config.map.clone(),
            inputs: MapInputs::default(),
            zone_features: Arc::default(),
            center: config.map.center,
            zoom: config.map.zoom,
            routes: RouteDisplay::new(),
            drawing: ZoneDrawing::new(
                tool,
                config.drawing.mode_options(),
                ZoneReconciler::new(zones.clone()),
            ),
            interaction: MapInteraction::new(zones),
        }
    }

    pub fn set_inputs(&mut self, inputs: MapInputs) {
        self.zone_features = Arc::new(FeatureCollection {
            bbox: None,
            features: inputs.priority_zones.iter().map(PriorityZone::to_feature).collect(),
            foreign_members: None,
        });
        self.inputs = inputs;
    }

    pub fn inputs(&self) -> &MapInputs {
        &self.inputs
    }

    pub fn access_token(&self) -> &str {
        &self.settings.access_token
    }

    /// Incidents still waiting for rescue.
    pub fn current_incidents(&self) -> Vec<&Incident> {
        self.inputs.incidents.iter().filter(|i| !i.is_rescued()).collect()
    }

    pub fn active_responders(&self) -> &[Responder] {
        &self.inputs.responders
    }

    pub fn responder_mission(&self, responder: &Responder) -> Option<&Mission> {
        responder_mission(&self.inputs.missions, &responder.id)
    }

    pub fn incident_mission(&self, incident: &Incident) -> Option<&Mission> {
        incident_mission(&self.inputs.missions, &incident.id)
    }

    pub fn on_responder_popup(&mut self, responder: &Responder) -> RouteOutcome {
        self.routes.show_responder_route(&self.inputs.missions, &responder.id)
    }

    pub fn on_incident_popup(&mut self, incident: &Incident) -> RouteOutcome {
        self.routes.show_incident_route(&self.inputs.missions, &incident.id)
    }

    pub fn on_popup(&mut self, mission: Option<&Mission>) -> RouteOutcome {
        self.routes.show_mission_route(mission)
    }

    pub fn on_draw_priority_zone_button_click(&mut self) -> Option<HarvestReport> {
        self.drawing.toggle()
    }

    pub fn on_select_zones_click(&mut self) -> bool {
        self.drawing.select_existing()
    }

    pub fn on_priority_zone_delete_button_click(&mut self) {
        self.drawing.delete_all_zones();
    }

    pub fn on_map_mouse_down(&self, event: &PointerEvent) {
        self.interaction.on_mouse_down(event);
    }

    pub fn on_map_mouse_up(&self, event: &PointerEvent) {
        self.interaction.on_mouse_up(event);
    }

    pub fn on_map_mouse_move(&self, event: &PointerEvent) {
        self.interaction.on_mouse_move(event);
    }

    pub fn on_map_click(&self, event: &PointerEvent) {
        self.interaction.on_click(event);
    }

    /// Recenter on a clicked marker.
    pub fn marker_click(&mut self, position: Coordinate) {
        self.center = position;
    }

    pub fn place_zone_marker(&mut self, position: Coordinate) {
        self.interaction.place_zone_marker(position);
    }

    pub fn add_priority_zone(&mut self, event: &PointerEvent) -> bool {
        self.interaction.add_priority_zone(event)
    }

    pub fn drawing_mode(&self) -> DrawingMode {
        self.drawing.mode()
    }

    /// The drawing tool, for forwarding authoring gestures.
    pub fn drawing_tool_mut(&mut self) -> &mut D {
        self.drawing.tool_mut()
    }

    pub fn drawing(&self) -> &ZoneDrawing<D> {
        &self.drawing
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            pickup: self.routes.pickup(),
            deliver: self.routes.deliver(),
            zones: Arc::clone(&self.zone_features),
            bounds: self.routes.bounds(),
            fit_padding: self.settings.fit_padding,
            center: self.center,
            zoom: self.zoom,
            drawing_mode: self.drawing.mode(),
            button_label: self.drawing.button_label(),
            markers: self.interaction.markers().to_vec(),
        }
    }
}
