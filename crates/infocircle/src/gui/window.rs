use gtk::prelude::*;
use gtk4 as gtk;
use orbit::Point;

/// Sizes the window to fit the whole canvas, zoomed icons included.
pub fn fit_to_canvas(window: &gtk::ApplicationWindow, canvas_size: f64) {
    let side = canvas_size.ceil() as i32;
    window.set_default_size(side, side);
}

/// Top-left corner of the canvas when centred in a widget of the given size.
pub fn canvas_offset(width: f64, height: f64, canvas_size: f64) -> Point {
    Point::new(
        ((width - canvas_size) / 2.0).max(0.0),
        ((height - canvas_size) / 2.0).max(0.0),
    )
}

/// Converts a pointer position in widget space to canvas space.
pub fn to_canvas(area: &gtk::DrawingArea, point: Point, canvas_size: f64) -> Point {
    let offset = canvas_offset(area.width() as f64, area.height() as f64, canvas_size);
    point.offset(-offset.x, -offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_is_centred() {
        assert_eq!(canvas_offset(600.0, 500.0, 400.0), Point::new(100.0, 50.0));
    }

    #[test]
    fn test_small_widget_pins_canvas_to_corner() {
        assert_eq!(canvas_offset(300.0, 300.0, 400.0), Point::default());
    }
}
