use crate::geometry::Point;

/// Receives item moves from the animator. The only side effect of a tick.
pub trait Renderer {
    fn move_item(&mut self, index: usize, origin: Point);
}

/// Latest top-left origin of every item, for hosts that paint whole frames.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionBuffer {
    origins: Vec<Point>,
    icon_radius: f64,
}

impl PositionBuffer {
    pub fn new(len: usize, initial: Point, icon_radius: f64) -> Self {
        Self {
            origins: vec![initial; len],
            icon_radius,
        }
    }

    pub fn origins(&self) -> &[Point] {
        &self.origins
    }

    pub fn origin(&self, index: usize) -> Option<Point> {
        self.origins.get(index).copied()
    }

    /// Visual centre of an item, which stays put while the icon zooms.
    pub fn center(&self, index: usize) -> Option<Point> {
        self.origin(index)
            .map(|o| o.offset(self.icon_radius, self.icon_radius))
    }

    /// Topmost item whose circle contains `point`. Later items paint over
    /// earlier ones, so they win ties.
    pub fn hit(&self, point: Point, radius_of: impl Fn(usize) -> f64) -> Option<usize> {
        (0..self.origins.len())
            .rev()
            .find(|&i| {
                self.center(i)
                    .is_some_and(|c| c.distance(point) <= radius_of(i))
            })
    }
}

impl Renderer for PositionBuffer {
    fn move_item(&mut self, index: usize, origin: Point) {
        if let Some(slot) = self.origins.get_mut(index) {
            *slot = origin;
        }
    }
}
