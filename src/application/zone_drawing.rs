// Zone-drawing state machine: browse, draw circles, harvest them on exit
use crate::application::drawing_tool::{DrawMode, DrawingTool, ModeOptions};
use crate::application::zone_reconciliation::{BatchSummary, ZoneReconciler};
use crate::domain::zone::DrawnFeature;

pub const CREATE_ZONE_LABEL: &str = "Create Priority Zone";
pub const FINISH_DRAWING_LABEL: &str = "Done Drawing";
pub const FINISH_EDITING_LABEL: &str = "Done Editing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Browsing,
    DrawingCircle,
    SelectingExisting,
}

/// What one harvest saw and sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
    pub circles: usize,
    pub other_features: usize,
    pub malformed: usize,
    pub batch: BatchSummary,
}

pub struct ZoneDrawing<D: DrawingTool> {
    tool: D,
    mode: DrawingMode,
    options: ModeOptions,
    reconciler: ZoneReconciler,
}

impl<D: DrawingTool> ZoneDrawing<D> {
    pub fn new(tool: D, options: ModeOptions, reconciler: ZoneReconciler) -> Self {
        Self {
            tool,
            mode: DrawingMode::Browsing,
            options,
            reconciler,
        }
    }

    /// Enter circle drawing from browsing, or leave drawing/editing and harvest.
    ///
    /// Returns the harvest report when the toggle left an authoring mode.
    pub fn toggle(&mut self) -> Option<HarvestReport> {
        match self.mode {
            DrawingMode::Browsing => {
                self.tool.set_mode(DrawMode::DragCircle, self.options);
                self.mode = DrawingMode::DrawingCircle;
                tracing::debug!("Drawing priority zones (r0={}km)", self.options.initial_radius_km);
                None
            }
            DrawingMode::DrawingCircle | DrawingMode::SelectingExisting => {
                self.tool.set_mode(DrawMode::SimpleSelect, self.options);
                self.mode = DrawingMode::Browsing;
                Some(self.harvest())
            }
        }
    }

    /// Let the operator reshape circles already drawn. Only valid while browsing.
    pub fn select_existing(&mut self) -> bool {
        if self.mode != DrawingMode::Browsing {
            return false;
        }
        self.tool.set_mode(DrawMode::DirectSelect, self.options);
        self.mode = DrawingMode::SelectingExisting;
        true
    }

    /// Clear every drawn feature in any mode. The mode does not change.
    pub fn delete_all_zones(&mut self) {
        tracing::debug!("Deleting all drawn zones ({} submitted)", self.reconciler.len());
        self.tool.delete_all_features();
        self.reconciler.forget_all();
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn button_label(&self) -> &'static str {
        match self.mode {
            DrawingMode::Browsing => CREATE_ZONE_LABEL,
            DrawingMode::DrawingCircle => FINISH_DRAWING_LABEL,
            DrawingMode::SelectingExisting => FINISH_EDITING_LABEL,
        }
    }

    pub fn tool(&self) -> &D {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut D {
        &mut self.tool
    }

    pub fn reconciler(&self) -> &ZoneReconciler {
        &self.reconciler
    }

    fn harvest(&mut self) -> HarvestReport {
        let features = self.tool.get_all_features();
        let mut report = HarvestReport::default();
        let mut circles = Vec::new();

        for feature in &features.features {
            match DrawnFeature::try_from(feature) {
                Ok(DrawnFeature::Circle(circle)) => circles.push(circle),
                Ok(DrawnFeature::Point { .. } | DrawnFeature::LineString { .. } | DrawnFeature::Polygon { .. }) => {
                    report.other_features += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping drawn feature: {}", e);
                    report.malformed += 1;
                }
            }
        }

        report.circles = circles.len();
        report.batch = self.reconciler.reconcile_batch(&circles);

        tracing::debug!(
            "Harvested {} circles ({} submitted, {} other, {} malformed)",
            report.circles,
            report.batch.submitted(),
            report.other_features,
            report.malformed
        );
        report
    }
}
