// Zone reconciliation - turns harvested circles into create-or-update requests
use crate::application::zone_repository::{ZonePayload, ZoneRepository};
use crate::domain::geometry::Coordinate;
use crate::domain::zone::{CircleFeature, PriorityZone};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type ZoneSender = mpsc::UnboundedSender<ZoneRequest>;
pub type ZoneReceiver = mpsc::UnboundedReceiver<ZoneRequest>;

/// Queue between the UI thread and the persistence writer.
pub fn zone_channel() -> (ZoneSender, ZoneReceiver) {
    mpsc::unbounded_channel()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertIntent {
    Create,
    Update,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRequest {
    pub intent: UpsertIntent,
    pub payload: ZonePayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub updated: usize,
    pub duplicates: usize,
}

impl BatchSummary {
    pub fn submitted(&self) -> usize {
        self.created + self.updated
    }
}

/// Local ledger of submitted zones, keyed by the drawing tool's feature id.
///
/// Ids are assigned client-side, so a zone is recorded as soon as its request is queued and
/// a later submission with the same id is an update. The store's ack is never consulted.
pub struct ZoneReconciler {
    zones: HashMap<String, PriorityZone>,
    sender: ZoneSender,
}

impl ZoneReconciler {
    pub fn new(sender: ZoneSender) -> Self {
        Self {
            zones: HashMap::new(),
            sender,
        }
    }

    pub fn upsert_zone(&mut self, id: &str, lon: f64, lat: f64, radius_km: f64) -> UpsertIntent {
        let zone = PriorityZone::new(id, Coordinate::new(lon, lat), radius_km);
        let intent = if self.zones.contains_key(id) {
            UpsertIntent::Update
        } else {
            UpsertIntent::Create
        };

        tracing::debug!(
            "Queueing {:?} for zone {} at ({}, {}) r={}km",
            intent, id, lon, lat, radius_km
        );

        dispatch(
            &self.sender,
            ZoneRequest {
                intent,
                payload: ZonePayload {
                    center_longitude: lon,
                    center_latitude: lat,
                    radius_km: Some(radius_km),
                    id: Some(zone.id.clone()),
                },
            },
        );
        self.zones.insert(zone.id.clone(), zone);

        intent
    }

    /// Upsert each distinct circle once, in iteration order. Later repeats of an id are dropped.
    pub fn reconcile_batch<'a, I>(&mut self, circles: I) -> BatchSummary
    where
        I: IntoIterator<Item = &'a CircleFeature>,
    {
        let mut summary = BatchSummary::default();
        let mut seen = HashSet::new();

        for circle in circles {
            if !seen.insert(circle.id.as_str()) {
                summary.duplicates += 1;
                continue;
            }

            match self.upsert_zone(&circle.id, circle.center.lon, circle.center.lat, circle.radius_km) {
                UpsertIntent::Create => summary.created += 1,
                UpsertIntent::Update => summary.updated += 1,
            }
        }

        summary
    }

    pub fn zone(&self, id: &str) -> Option<&PriorityZone> {
        self.zones.get(id)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn forget_all(&mut self) {
        self.zones.clear();
    }

    pub fn sender(&self) -> ZoneSender {
        self.sender.clone()
    }
}

/// Queue a zone dropped by clicking the map. It has no id, so no ledger tracks it.
pub fn queue_point_zone(sender: &ZoneSender, center: Coordinate) {
    tracing::debug!("Queueing point zone at ({}, {})", center.lon, center.lat);
    dispatch(
        sender,
        ZoneRequest {
            intent: UpsertIntent::Create,
            payload: ZonePayload {
                center_longitude: center.lon,
                center_latitude: center.lat,
                radius_km: None,
                id: None,
            },
        },
    );
}

fn dispatch(sender: &ZoneSender, request: ZoneRequest) {
    if let Err(e) = sender.send(request) {
        tracing::warn!("Zone writer is gone, dropping request: {:?}", e.0.payload);
    }
}

/// Drain the queue into the repository, one request at a time.
///
/// Failures are logged and dropped. The task ends once every sender is gone.
pub fn spawn_zone_writer(repository: Arc<dyn ZoneRepository>, mut rx: ZoneReceiver) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            match repository.create_or_update(&request.payload).await {
                Ok(ack) => {
                    tracing::debug!(
                        "Stored zone {:?} ({:?}), ack id {:?}",
                        request.payload.id, request.intent, ack.id
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to store zone {:?}: {:#}", request.payload.id, e);
                }
            }
        }
        tracing::debug!("Zone writer stopped");
    })
}
