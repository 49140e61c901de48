use serde::{Deserialize, Serialize};

// ===== POINTS & SIZES =====

/// Pixel coordinates. Client-space or container-space depending on context.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

// ===== CONTAINER BOUNDS =====

/// The container's client-space origin and its inner size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Map a client-space point into container coordinates.
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.left, client.y - self.top)
    }

    /// Clamp an item's top-left so the whole item stays inside the container.
    ///
    /// When the item does not fit (or the container has not been laid out
    /// yet) the upper bound collapses to zero and the item pins to the origin
    /// on that axis.
    pub fn clamp(&self, top_left: Point, item: Size) -> Point {
        Point::new(
            clamp_axis(top_left.x, self.width - item.width),
            clamp_axis(top_left.y, self.height - item.height),
        )
    }

    /// Keep a bare origin point (an item of unknown size) inside the container.
    pub fn clamp_origin(&self, point: Point) -> Point {
        self.clamp(point, Size::default())
    }

    /// Top-left of an item dropped at a client-space point: the drop point
    /// itself, in container coordinates, kept within the container.
    pub fn drop_origin(&self, client: Point) -> Point {
        self.clamp_origin(self.to_local(client))
    }
}

fn clamp_axis(value: f64, upper: f64) -> f64 {
    let upper = if upper.is_finite() { upper.max(0.0) } else { 0.0 };
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Bounds = Bounds::new(100.0, 50.0, 800.0, 600.0);

    #[test]
    fn to_local_subtracts_container_origin() {
        assert_eq!(CONTAINER.to_local(Point::new(150.0, 130.0)), Point::new(50.0, 80.0));
    }

    #[test]
    fn clamp_keeps_in_range_positions() {
        let item = Size::new(200.0, 150.0);
        assert_eq!(CONTAINER.clamp(Point::new(10.0, 20.0), item), Point::new(10.0, 20.0));
    }

    #[test]
    fn clamp_pins_left_top_edges() {
        let item = Size::new(200.0, 150.0);
        assert_eq!(CONTAINER.clamp(Point::new(-40.0, -1.0), item), Point::ORIGIN);
    }

    #[test]
    fn clamp_keeps_bottom_right_edge_inside() {
        let item = Size::new(200.0, 150.0);
        assert_eq!(
            CONTAINER.clamp(Point::new(750.0, 590.0), item),
            Point::new(600.0, 450.0)
        );
    }

    #[test]
    fn zero_sized_container_pins_to_origin() {
        let unlaid = Bounds::new(0.0, 0.0, 0.0, 0.0);
        let item = Size::new(120.0, 80.0);
        assert_eq!(unlaid.clamp(Point::new(33.0, 47.0), item), Point::ORIGIN);
    }

    #[test]
    fn oversized_item_pins_to_origin() {
        let item = Size::new(900.0, 100.0);
        assert_eq!(
            CONTAINER.clamp(Point::new(10.0, 10.0), item),
            Point::new(0.0, 10.0)
        );
    }

    #[test]
    fn non_finite_coordinates_clamp_to_zero() {
        let item = Size::new(10.0, 10.0);
        assert_eq!(
            CONTAINER.clamp(Point::new(f64::NAN, f64::INFINITY), item),
            Point::ORIGIN
        );
    }

    #[test]
    fn drop_origin_is_the_drop_point_in_container_space() {
        assert_eq!(CONTAINER.drop_origin(Point::new(150.0, 130.0)), Point::new(50.0, 80.0));
    }

    #[test]
    fn drop_origin_outside_the_container_lands_on_its_edge() {
        assert_eq!(CONTAINER.drop_origin(Point::new(40.0, 20.0)), Point::ORIGIN);
        assert_eq!(
            CONTAINER.drop_origin(Point::new(1200.0, 700.0)),
            Point::new(800.0, 600.0)
        );
    }

    #[test]
    fn clamp_origin_allows_the_far_edge() {
        assert_eq!(
            CONTAINER.clamp_origin(Point::new(900.0, 600.0)),
            Point::new(800.0, 600.0)
        );
    }
}
