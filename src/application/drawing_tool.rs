// Drawing-tool trait: the authoring control that owns drawn features
use geojson::FeatureCollection;
use std::fmt;

pub const DEFAULT_INITIAL_RADIUS_KM: f64 = 2.0;

/// Modes the drawing tool can be switched into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    SimpleSelect,
    DirectSelect,
    DragCircle,
    DrawCircle,
}

impl DrawMode {
    pub fn name(&self) -> &'static str {
        match self {
            DrawMode::SimpleSelect => "simple_select",
            DrawMode::DirectSelect => "direct_select",
            DrawMode::DragCircle => "drag_circle",
            DrawMode::DrawCircle => "draw_circle",
        }
    }

    pub fn authors_circles(&self) -> bool {
        matches!(self, DrawMode::DragCircle | DrawMode::DrawCircle)
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeOptions {
    pub initial_radius_km: f64,
}

impl Default for ModeOptions {
    fn default() -> Self {
        Self {
            initial_radius_km: DEFAULT_INITIAL_RADIUS_KM,
        }
    }
}

pub trait DrawingTool {
    /// Switch modes. Any unfinished feature is discarded.
    fn set_mode(&mut self, mode: DrawMode, options: ModeOptions);

    /// Every finished feature, in the order the tool holds them.
    fn get_all_features(&self) -> FeatureCollection;

    fn delete_all_features(&mut self);
}
