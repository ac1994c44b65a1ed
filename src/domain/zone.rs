// Priority zones and the features a drawing tool hands back
use super::error::MapError;
use super::geometry::Coordinate;
use geo::{HaversineDestination, Point};
use geojson::{Feature, GeoJson, Geometry, Value, feature::Id};
use serde_json::json;

pub const CIRCLE_RING_VERTICES: usize = 64;

/// An operator-drawn circular geofence.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityZone {
    pub id: String,
    pub center: Coordinate,
    pub radius_km: f64,
}

impl PriorityZone {
    pub fn new(id: impl Into<String>, center: Coordinate, radius_km: f64) -> Self {
        Self {
            id: id.into(),
            center,
            radius_km,
        }
    }

    /// The feature a circle-drawing mode emits for this zone: a ring polygon carrying
    /// `isCircle`, `center` and `radiusInKm` properties.
    pub fn to_feature(&self) -> Feature {
        let mut ring: Vec<Vec<f64>> = circle_ring(self.center, self.radius_km, CIRCLE_RING_VERTICES)
            .into_iter()
            .map(Coordinate::to_position)
            .collect();
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }

        let mut feature = Feature {
            id: Some(Id::String(self.id.clone())),
            geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
            ..Default::default()
        };
        feature.set_property("isCircle", true);
        feature.set_property("center", json!([self.center.lon, self.center.lat]));
        feature.set_property("radiusInKm", self.radius_km);
        feature
    }
}

/// Points spaced evenly around `center` at `radius_km`, clockwise from north.
pub fn circle_ring(center: Coordinate, radius_km: f64, vertices: usize) -> Vec<Coordinate> {
    let origin = Point::from(center);
    (0..vertices)
        .map(|i| {
            let bearing = 360.0 * i as f64 / vertices as f64;
            Coordinate::from(origin.haversine_destination(bearing, radius_km * 1000.0))
        })
        .collect()
}

/// A finished circle harvested from the drawing tool.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleFeature {
    pub id: String,
    pub center: Coordinate,
    pub radius_km: f64,
}

impl CircleFeature {
    pub fn to_zone(&self) -> PriorityZone {
        PriorityZone::new(self.id.clone(), self.center, self.radius_km)
    }
}

/// What a drawn feature is. Only circles become zones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawnFeature {
    Circle(CircleFeature),
    Point { id: Option<String> },
    LineString { id: Option<String> },
    Polygon { id: Option<String> },
}

impl DrawnFeature {
    /// Classify arbitrary GeoJSON. Anything that is not a single feature is rejected outright.
    pub fn from_geojson(data: &GeoJson) -> Result<Self, MapError> {
        match data {
            GeoJson::Feature(feature) => Self::try_from(feature),
            GeoJson::Geometry(_) => Err(MapError::NotAFeature("Geometry")),
            GeoJson::FeatureCollection(_) => Err(MapError::NotAFeature("FeatureCollection")),
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            DrawnFeature::Circle(c) => Some(&c.id),
            DrawnFeature::Point { id } | DrawnFeature::LineString { id } | DrawnFeature::Polygon { id } => {
                id.as_deref()
            }
        }
    }

    pub fn as_circle(&self) -> Option<&CircleFeature> {
        match self {
            DrawnFeature::Circle(c) => Some(c),
            _ => None,
        }
    }
}

impl TryFrom<&Feature> for DrawnFeature {
    type Error = MapError;

    fn try_from(feature: &Feature) -> Result<Self, Self::Error> {
        let id = feature_id(feature);

        if feature.property("isCircle").and_then(|v| v.as_bool()) == Some(true) {
            return parse_circle(feature, id).map(DrawnFeature::Circle);
        }

        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(_)) => Ok(DrawnFeature::Point { id }),
            Some(Value::LineString(_)) => Ok(DrawnFeature::LineString { id }),
            Some(Value::Polygon(_)) => Ok(DrawnFeature::Polygon { id }),
            Some(other) => Err(MapError::UnsupportedGeometry {
                id,
                kind: geometry_kind(other),
            }),
            None => Err(MapError::UnsupportedGeometry { id, kind: "none" }),
        }
    }
}

/// Center of a circle feature. Non-feature input is an error, not a silent miss.
pub fn zone_center(data: &GeoJson) -> Result<Coordinate, MapError> {
    match DrawnFeature::from_geojson(data)? {
        DrawnFeature::Circle(c) => Ok(c.center),
        other => Err(MapError::MalformedCircle {
            id: other.id().map(str::to_string),
            reason: "feature is not a circle".to_string(),
        }),
    }
}

pub fn feature_id(feature: &Feature) -> Option<String> {
    match feature.id.as_ref()? {
        Id::String(s) => Some(s.clone()),
        Id::Number(n) => Some(n.to_string()),
    }
}

fn parse_circle(feature: &Feature, id: Option<String>) -> Result<CircleFeature, MapError> {
    let malformed = |id: Option<String>, reason: &str| MapError::MalformedCircle {
        id,
        reason: reason.to_string(),
    };

    let center = feature
        .property("center")
        .and_then(|v| v.as_array())
        .and_then(|values| values.iter().map(|v| v.as_f64()).collect::<Option<Vec<f64>>>())
        .filter(|position| position.len() == 2)
        .and_then(|position| Coordinate::from_position(&position))
        .filter(Coordinate::is_valid);
    let Some(center) = center else {
        return Err(malformed(id, "missing or invalid center"));
    };

    let radius_km = feature
        .property("radiusInKm")
        .and_then(|v| v.as_f64())
        .filter(|r| r.is_finite() && *r > 0.0);
    let Some(radius_km) = radius_km else {
        return Err(malformed(id, "missing or invalid radiusInKm"));
    };

    let Some(id) = id else {
        return Err(malformed(None, "missing feature id"));
    };

    Ok(CircleFeature {
        id,
        center,
        radius_km,
    })
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn feature(json: &str) -> Feature {
        Feature::from_str(json).unwrap()
    }

    #[test]
    fn test_circle_feature_is_classified() {
        let f = feature(
            r#"{"type":"Feature","id":"abc","geometry":{"type":"Polygon","coordinates":[]},
                "properties":{"isCircle":true,"center":[-78.0598,34.1395],"radiusInKm":4.44}}"#,
        );
        let drawn = DrawnFeature::try_from(&f).unwrap();

        let circle = drawn.as_circle().unwrap();
        assert_eq!(circle.id, "abc");
        assert_eq!(circle.center, Coordinate::new(-78.0598, 34.1395));
        assert_eq!(circle.radius_km, 4.44);
    }

    #[test]
    fn test_plain_geometries_are_not_circles() {
        let point = feature(r#"{"type":"Feature","id":1,"geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}"#);
        assert_eq!(
            DrawnFeature::try_from(&point).unwrap(),
            DrawnFeature::Point { id: Some("1".to_string()) }
        );

        let line = feature(r#"{"type":"Feature","geometry":{"type":"LineString","coordinates":[[1,2],[3,4]]},"properties":null}"#);
        assert_eq!(DrawnFeature::try_from(&line).unwrap(), DrawnFeature::LineString { id: None });

        let polygon = feature(
            r#"{"type":"Feature","id":"p","geometry":{"type":"Polygon","coordinates":[]},"properties":{"isCircle":false}}"#,
        );
        assert!(DrawnFeature::try_from(&polygon).unwrap().as_circle().is_none());
    }

    #[test]
    fn test_malformed_circles() {
        let no_radius = feature(
            r#"{"type":"Feature","id":"a","geometry":null,"properties":{"isCircle":true,"center":[1,2]}}"#,
        );
        assert!(matches!(
            DrawnFeature::try_from(&no_radius),
            Err(MapError::MalformedCircle { id: Some(_), .. })
        ));

        let bad_center = feature(
            r#"{"type":"Feature","id":"b","geometry":null,"properties":{"isCircle":true,"center":["x",2],"radiusInKm":1}}"#,
        );
        assert!(DrawnFeature::try_from(&bad_center).is_err());

        let no_id = feature(
            r#"{"type":"Feature","geometry":null,"properties":{"isCircle":true,"center":[1,2],"radiusInKm":1}}"#,
        );
        assert_eq!(
            DrawnFeature::try_from(&no_id),
            Err(MapError::MalformedCircle {
                id: None,
                reason: "missing feature id".to_string()
            })
        );

        let negative = feature(
            r#"{"type":"Feature","id":"c","geometry":null,"properties":{"isCircle":true,"center":[1,2],"radiusInKm":-3}}"#,
        );
        assert!(DrawnFeature::try_from(&negative).is_err());
    }

    #[test]
    fn test_non_feature_fails_fast() {
        let geometry = GeoJson::from_str(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap();
        assert_eq!(zone_center(&geometry), Err(MapError::NotAFeature("Geometry")));
    }

    #[test]
    fn test_zone_feature_round_trips_through_classification() {
        let zone = PriorityZone::new("z1", Coordinate::new(-77.88, 34.15), 2.0);
        let f = zone.to_feature();

        let Some(Geometry { value: Value::Polygon(rings), .. }) = &f.geometry else {
            panic!("expected polygon geometry");
        };
        assert_eq!(rings[0].len(), CIRCLE_RING_VERTICES + 1);
        assert_eq!(rings[0].first(), rings[0].last());

        let circle = DrawnFeature::try_from(&f).unwrap();
        assert_eq!(circle.as_circle().unwrap().to_zone(), zone);
        assert_eq!(zone_center(&GeoJson::Feature(f)).unwrap(), zone.center);
    }

    #[test]
    fn test_circle_ring_radius() {
        let center = Coordinate::new(0.0, 0.0);
        let ring = circle_ring(center, 10.0, 4);
        // First vertex is due north, roughly 0.09 degrees away for 10 km.
        assert!((ring[0].lat - 0.0899).abs() < 0.001);
        assert!(ring[0].lon.abs() < 1e-9);
    }
}
