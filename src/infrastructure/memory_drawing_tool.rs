// Headless drawing tool that keeps features in memory
use crate::application::drawing_tool::{DrawMode, DrawingTool, ModeOptions};
use crate::domain::geometry::Coordinate;
use crate::domain::zone::{PriorityZone, feature_id};
use geojson::{Feature, FeatureCollection};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
struct PendingCircle {
    center: Coordinate,
    radius_km: f64,
}

/// Stands in for the map's drawing control: mode switching, circle authoring and a feature store.
#[derive(Debug, Clone)]
pub struct InMemoryDrawingTool {
    mode: DrawMode,
    options: ModeOptions,
    features: Vec<Feature>,
    pending: Option<PendingCircle>,
}

impl Default for InMemoryDrawingTool {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDrawingTool {
    pub fn new() -> Self {
        Self {
            mode: DrawMode::SimpleSelect,
            options: ModeOptions::default(),
            features: Vec::new(),
            pending: None,
        }
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Press on the map in a circle mode. Starts a circle at the initial radius.
    pub fn start_circle(&mut self, center: Coordinate) -> bool {
        if !self.mode.authors_circles() {
            return false;
        }
        self.pending = Some(PendingCircle {
            center,
            radius_km: self.options.initial_radius_km,
        });
        true
    }

    pub fn drag_radius(&mut self, radius_km: f64) {
        if let Some(pending) = self.pending.as_mut() {
            pending.radius_km = radius_km;
        }
    }

    /// Release: the circle becomes a finished feature. Returns its new id.
    pub fn finish_circle(&mut self) -> Option<String> {
        let pending = self.pending.take()?;
        let id = Uuid::new_v4().to_string();
        self.features
            .push(PriorityZone::new(id.clone(), pending.center, pending.radius_km).to_feature());
        Some(id)
    }

    pub fn has_pending_circle(&self) -> bool {
        self.pending.is_some()
    }

    /// Reshape a finished circle. Only allowed while directly selecting.
    pub fn redraw_circle(&mut self, id: &str, center: Coordinate, radius_km: f64) -> bool {
        if self.mode != DrawMode::DirectSelect {
            return false;
        }
        let Some(slot) = self
            .features
            .iter_mut()
            .find(|f| feature_id(f).as_deref() == Some(id))
        else {
            return false;
        };
        *slot = PriorityZone::new(id, center, radius_km).to_feature();
        true
    }

    /// Add any feature as-is, the way the tool accepts features from other draw modes.
    pub fn insert_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl DrawingTool for InMemoryDrawingTool {
    fn set_mode(&mut self, mode: DrawMode, options: ModeOptions) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(
                "Discarding unfinished circle at ({}, {})",
                pending.center.lon, pending.center.lat
            );
        }
        tracing::debug!("Drawing tool mode {} -> {}", self.mode, mode);
        self.mode = mode;
        self.options = options;
    }

    fn get_all_features(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features.clone(),
            foreign_members: None,
        }
    }

    fn delete_all_features(&mut self) {
        self.features.clear();
        self.pending = None;
    }
}
