// Mission route domain model: pickup and delivery legs derived from a step list
use super::geometry::{Coordinate, ViewportBounds};
use super::mission::{Step, StepRole};

/// The two polylines of one mission. Derived on demand, never cached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    pub mission_id: String,
    pub pickup_path: Vec<Coordinate>,
    pub deliver_path: Vec<Coordinate>,
}

impl Route {
    pub fn is_empty(&self) -> bool {
        self.pickup_path.is_empty() && self.deliver_path.is_empty()
    }

    /// Bounds over both legs together.
    pub fn bounds(&self) -> Option<ViewportBounds> {
        ViewportBounds::around(self.pickup_path.iter().chain(&self.deliver_path))
    }
}

/// Split a mission's steps into its pickup and delivery legs, keeping step order.
///
/// A step tagged `Pickup` always belongs to the pickup leg and one tagged `Delivery` to the
/// delivery leg. Untagged steps follow their position: before the first delivery step they
/// are pickup, after it they are delivery.
pub fn build_route(mission_id: &str, steps: &[Step]) -> Route {
    let mut route = Route {
        mission_id: mission_id.to_string(),
        ..Default::default()
    };
    let mut delivering = false;

    for step in steps {
        let pickup = match step.role {
            Some(StepRole::Pickup) => true,
            Some(StepRole::Delivery) => {
                delivering = true;
                false
            }
            None => !delivering,
        };

        if pickup {
            route.pickup_path.push(step.coordinate());
        } else {
            route.deliver_path.push(step.coordinate());
        }
    }

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_steps() {
        let route = build_route("M1", &[]);
        assert_eq!(route.mission_id, "M1");
        assert!(route.is_empty());
        assert!(route.bounds().is_none());
    }

    #[test]
    fn test_only_pickup_steps() {
        let steps = vec![Step::pickup(-77.9, 34.1), Step::pickup(-77.8, 34.2), Step::pickup(-77.7, 34.3)];
        let route = build_route("M1", &steps);

        assert!(route.deliver_path.is_empty());
        assert_eq!(
            route.pickup_path,
            steps.iter().map(Step::coordinate).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_partition_keeps_order() {
        let steps = vec![
            Step::new(1.0, 1.0, None),
            Step::pickup(2.0, 2.0),
            Step::delivery(3.0, 3.0),
            Step::new(4.0, 4.0, None),
            Step::delivery(5.0, 5.0),
        ];
        let route = build_route("M1", &steps);

        assert_eq!(
            route.pickup_path,
            vec![Coordinate::new(1.0, 1.0), Coordinate::new(2.0, 2.0)]
        );
        assert_eq!(
            route.deliver_path,
            vec![
                Coordinate::new(3.0, 3.0),
                Coordinate::new(4.0, 4.0),
                Coordinate::new(5.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_tagged_pickup_after_delivery_stays_pickup() {
        let steps = vec![Step::delivery(1.0, 1.0), Step::pickup(2.0, 2.0)];
        let route = build_route("M1", &steps);

        assert_eq!(route.pickup_path, vec![Coordinate::new(2.0, 2.0)]);
        assert_eq!(route.deliver_path, vec![Coordinate::new(1.0, 1.0)]);
    }

    #[test]
    fn test_untagged_steps_without_delivery_are_pickup() {
        let steps = vec![Step::new(1.0, 1.0, None), Step::new(2.0, 2.0, None)];
        let route = build_route("M1", &steps);
        assert_eq!(route.pickup_path.len(), 2);
        assert!(route.deliver_path.is_empty());
    }

    #[test]
    fn test_bounds_cover_both_legs() {
        let steps = vec![Step::pickup(-78.0, 34.0), Step::delivery(-77.5, 34.5)];
        let bounds = build_route("M1", &steps).bounds().unwrap();

        assert_eq!(bounds.south_west, Coordinate::new(-78.0, 34.0));
        assert_eq!(bounds.north_east, Coordinate::new(-77.5, 34.5));
    }

    #[test]
    fn test_deterministic() {
        let steps = vec![Step::pickup(1.0, 1.0), Step::delivery(2.0, 2.0)];
        assert_eq!(build_route("M1", &steps), build_route("M1", &steps));
    }
}
