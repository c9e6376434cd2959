pub mod model;
pub mod view;

pub use model::{Rect, Scene, SceneError};
pub use view::draw;

pub const ICON_SIZE: i32 = 256; // pixbuf load size, scaled down when drawn
pub const ICON_WIDTH: f64 = 48.0; // resting icon diameter
pub const ZOOMED_ICON_WIDTH: f64 = 128.0; // selected icon diameter
pub const ICON_FILL: f64 = 0.7; // share of the icon circle the image covers
pub const ORBIT_LINE_WIDTH: f64 = 2.0;

// Info panel
pub const PANEL_PADDING: f64 = 12.0;
pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const DETAIL_FONT_SIZE: f64 = 12.0;
pub const LINE_SPACING: f64 = 1.35;
pub const CLOSE_FONT_SIZE: f64 = 12.0;
pub const CLOSE_HEIGHT: f64 = 28.0;
