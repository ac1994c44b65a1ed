// Geographic primitives shared by routes and zones
use geo::{BoundingRect, MultiPoint, Point};
use geojson::{Feature, FeatureCollection, Geometry, Position, Value};
use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// GeoJSON positions are `[lon, lat]`.
    pub fn to_position(self) -> Position {
        vec![self.lon, self.lat]
    }

    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lon, lat, ..] => Some(Self::new(*lon, *lat)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lon.is_finite()
            && self.lat.is_finite()
            && (-180.0..=180.0).contains(&self.lon)
            && (-90.0..=90.0).contains(&self.lat)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.lon, c.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

/// Axis-aligned region the map fits its viewport to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl ViewportBounds {
    /// Bounds around every coordinate, `None` when there are none.
    pub fn around<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let points: MultiPoint<f64> = coords.into_iter().map(|c| Point::from(*c)).collect();

        points.bounding_rect().map(|rect| Self {
            south_west: Coordinate::new(rect.min().x, rect.min().y),
            north_east: Coordinate::new(rect.max().x, rect.max().y),
        })
    }

    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.south_west.lon..=self.north_east.lon).contains(&c.lon)
            && (self.south_west.lat..=self.north_east.lat).contains(&c.lat)
    }

    /// `[[west, south], [east, north]]`, the shape map widgets take for fit-bounds.
    pub fn to_lng_lat_bounds(&self) -> [[f64; 2]; 2] {
        [
            [self.south_west.lon, self.south_west.lat],
            [self.north_east.lon, self.north_east.lat],
        ]
    }
}

/// A collection holding exactly one line feature, the container a line layer renders.
pub fn line_collection(coords: &[Coordinate]) -> FeatureCollection {
    let line = Geometry::new(Value::LineString(
        coords.iter().map(|c| c.to_position()).collect(),
    ));

    FeatureCollection {
        bbox: None,
        features: vec![Feature {
            geometry: Some(line),
            ..Default::default()
        }],
        foreign_members: None,
    }
}

/// Coordinates of the first line feature in a render container.
pub fn line_coordinates(collection: &FeatureCollection) -> Vec<Coordinate> {
    collection
        .features
        .first()
        .and_then(|f| f.geometry.as_ref())
        .map(|g| match &g.value {
            Value::LineString(positions) => positions
                .iter()
                .filter_map(|p| Coordinate::from_position(p))
                .collect(),
            _ => Vec::new(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_around_points() {
        let coords = vec![
            Coordinate::new(-77.9, 34.1),
            Coordinate::new(-77.8, 34.3),
            Coordinate::new(-78.0, 34.2),
        ];
        let bounds = ViewportBounds::around(&coords).unwrap();

        assert_eq!(bounds.south_west, Coordinate::new(-78.0, 34.1));
        assert_eq!(bounds.north_east, Coordinate::new(-77.8, 34.3));
        assert!(coords.iter().all(|c| bounds.contains(c)));
        assert!(!bounds.contains(&Coordinate::new(-77.0, 34.2)));
        assert_eq!(bounds.to_lng_lat_bounds(), [[-78.0, 34.1], [-77.8, 34.3]]);
    }

    #[test]
    fn test_bounds_of_nothing() {
        assert!(ViewportBounds::around(std::iter::empty()).is_none());
    }

    #[test]
    fn test_single_point_bounds_are_degenerate() {
        let c = Coordinate::new(-77.88, 34.15);
        let bounds = ViewportBounds::around(&[c]).unwrap();
        assert_eq!(bounds.south_west, c);
        assert_eq!(bounds.north_east, c);
    }

    #[test]
    fn test_line_collection_holds_one_feature() {
        let coords = vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)];
        let collection = line_collection(&coords);

        assert_eq!(collection.features.len(), 1);
        assert_eq!(line_coordinates(&collection), coords);

        let empty = line_collection(&[]);
        assert_eq!(empty.features.len(), 1);
        assert!(line_coordinates(&empty).is_empty());
    }

    #[test]
    fn test_coordinate_validity() {
        assert!(Coordinate::new(-77.8, 34.1).is_valid());
        assert!(!Coordinate::new(200.0, 34.1).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
        assert_eq!(Coordinate::from_position(&[1.0]), None);
    }
}
