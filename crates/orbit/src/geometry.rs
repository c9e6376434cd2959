pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Radii describing the orbit and the icons travelling on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub circle_radius: f64,
    pub icon_radius: f64,
    pub icon_zoom_radius: f64,
}

impl Geometry {
    pub fn new(circle_radius: f64, icon_radius: f64, icon_zoom_radius: f64) -> Self {
        Self {
            circle_radius,
            icon_radius,
            icon_zoom_radius,
        }
    }

    /// The canvas is padded by the zoomed radius so a zoomed icon never clips.
    pub fn canvas_radius(&self) -> f64 {
        self.circle_radius + self.icon_zoom_radius
    }

    pub fn center(&self) -> Point {
        let c = self.canvas_radius();
        Point::new(c, c)
    }

    pub fn zoom_diff(&self) -> f64 {
        self.icon_zoom_radius - self.icon_radius
    }

    /// Exact point on the orbit for an angle in degrees. Zero degrees is
    /// straight below the centre and angles grow counter-clockwise on screen.
    pub fn point_on_circle(&self, degrees: f64) -> Point {
        let radians = degrees.to_radians();
        self.center().offset(
            self.circle_radius * radians.sin(),
            self.circle_radius * radians.cos(),
        )
    }

    /// Top-left origin of an icon centred on the orbit, snapped to whole pixels.
    pub fn position(&self, degrees: f64) -> Point {
        let p = self.point_on_circle(degrees);
        Point::new(
            p.x.round() - self.icon_radius,
            p.y.round() - self.icon_radius,
        )
    }

    pub fn layout(&self) -> Layout {
        let canvas_radius = self.canvas_radius();
        let zoom_diff = self.zoom_diff();
        Layout {
            canvas_size: canvas_radius * 2.0,
            panel_size: canvas_radius - zoom_diff,
            panel_margin: canvas_radius / 2.0 + zoom_diff / 2.0,
            initial_position: Point::new(self.circle_radius, self.circle_radius * 2.0),
        }
    }
}

/// Static canvas measurements derived once from a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Side of the square canvas.
    pub canvas_size: f64,
    /// Side of the square info panel in the middle of the orbit.
    pub panel_size: f64,
    /// Distance from the canvas edge to the info panel on every side.
    pub panel_margin: f64,
    /// Where icons sit before the load-in reaches them.
    pub initial_position: Point,
}

impl Layout {
    pub fn panel_origin(&self) -> Point {
        Point::new(self.panel_margin, self.panel_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> Geometry {
        Geometry::new(200.0, 20.0, 60.0)
    }

    #[test]
    fn test_point_on_circle_keeps_radius() {
        let g = geometry();
        for step in -16..=32 {
            let degrees = step as f64 * 23.5;
            let d = g.point_on_circle(degrees).distance(g.center());
            assert!((d - 200.0).abs() < 1e-9, "{degrees}: {d}");
        }
    }

    #[test]
    fn test_position_is_rounded_and_shifted_by_icon_radius() {
        let g = geometry();
        for degrees in [0.0, 17.0, 90.0, 133.3, 271.9, -45.0, 725.0] {
            let exact = g.point_on_circle(degrees);
            let origin = g.position(degrees);
            assert_eq!(origin.x, exact.x.round() - 20.0);
            assert_eq!(origin.y, exact.y.round() - 20.0);
            let centre = origin.offset(20.0, 20.0);
            assert!((centre.distance(g.center()) - 200.0).abs() <= 1.0);
        }
    }

    #[test]
    fn test_zero_degrees_is_below_centre() {
        let g = Geometry::new(200.0, 20.0, 20.0);
        let c = g.center();
        assert_eq!(c, Point::new(220.0, 220.0));
        assert_eq!(g.position(0.0), Point::new(c.x - 20.0, c.y + 200.0 - 20.0));
        assert_eq!(g.position(90.0), Point::new(c.x + 200.0 - 20.0, c.y - 20.0));
    }

    #[test]
    fn test_layout() {
        let layout = geometry().layout();
        assert_eq!(layout.canvas_size, 520.0);
        assert_eq!(layout.panel_size, 220.0);
        assert_eq!(layout.panel_margin, 150.0);
        assert_eq!(layout.initial_position, Point::new(200.0, 400.0));
        assert_eq!(layout.panel_origin(), Point::new(150.0, 150.0));
    }
}
