// Pointer hooks and the click-to-place zone marker path
use crate::application::zone_reconciliation::{ZoneSender, queue_point_zone};
use crate::domain::geometry::Coordinate;

/// A pointer event as the map widget reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Geographic position under the pointer, absent when it is off the map.
    pub lng_lat: Option<Coordinate>,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn at(lng_lat: Coordinate) -> Self {
        Self {
            lng_lat: Some(lng_lat),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneMarker {
    pub position: Coordinate,
    pub draggable: bool,
}

pub struct MapInteraction {
    markers: Vec<ZoneMarker>,
    zones: ZoneSender,
}

impl MapInteraction {
    pub fn new(zones: ZoneSender) -> Self {
        Self {
            markers: Vec::new(),
            zones,
        }
    }

    // Extension points. They borrow immutably and only trace.

    pub fn on_mouse_down(&self, event: &PointerEvent) {
        tracing::trace!("mouse down at {:?}", event.lng_lat);
    }

    pub fn on_mouse_up(&self, event: &PointerEvent) {
        tracing::trace!("mouse up at {:?}", event.lng_lat);
    }

    pub fn on_mouse_move(&self, event: &PointerEvent) {
        tracing::trace!("mouse move at {:?}", event.lng_lat);
    }

    pub fn on_click(&self, event: &PointerEvent) {
        tracing::trace!("click at {:?}", event.lng_lat);
    }

    /// Drop a draggable marker and ask the store to create a zone there.
    pub fn place_zone_marker(&mut self, position: Coordinate) {
        self.markers.push(ZoneMarker {
            position,
            draggable: true,
        });
        queue_point_zone(&self.zones, position);
    }

    /// `place_zone_marker` for a raw click. Clicks off the map do nothing.
    pub fn add_priority_zone(&mut self, event: &PointerEvent) -> bool {
        match event.lng_lat {
            Some(position) => {
                self.place_zone_marker(position);
                true
            }
            None => false,
        }
    }

    pub fn markers(&self) -> &[ZoneMarker] {
        &self.markers
    }
}
