use crate::config::Config;
use crate::gui::circle::{CLOSE_HEIGHT, ICON_SIZE, ICON_WIDTH, ZOOMED_ICON_WIDTH};
use gdk_pixbuf::Pixbuf;
use orbit::{
    Animator, IconMetrics, Item, MonotonicClock, OrbitError, Phase, Point, PositionBuffer,
    SelectionChange, Settings, SettingsError,
};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid animation settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Point, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.origin.x..=self.origin.x + self.width).contains(&p.x)
            && (self.origin.y..=self.origin.y + self.height).contains(&p.y)
    }

    pub fn center(&self) -> Point {
        self.origin.offset(self.width / 2.0, self.height / 2.0)
    }
}

/// A running info circle plus everything needed to paint it.
pub struct Scene {
    pub animator: Animator<MonotonicClock>,
    pub positions: PositionBuffer,
    pub pixbufs: Vec<Option<Pixbuf>>,
}

impl Scene {
    pub fn from_config(config: &Config) -> Result<Self, SceneError> {
        let metrics = IconMetrics::new(ICON_WIDTH, ZOOMED_ICON_WIDTH);
        let settings = Settings::resolve(&config.animation, metrics)?;
        let items = config.items();
        let pixbufs = items.iter().map(Self::load_icon).collect();

        let animator = Animator::new(items, settings, MonotonicClock::new())?;
        let positions = PositionBuffer::new(
            animator.items().len(),
            animator.layout().initial_position,
            settings.geometry.icon_radius,
        );

        Ok(Self {
            animator,
            positions,
            pixbufs,
        })
    }

    fn load_icon(item: &Item) -> Option<Pixbuf> {
        let path = item.icon.as_deref()?;
        Self::load_pixbuf(path)
    }

    fn load_pixbuf(path: &Path) -> Option<Pixbuf> {
        Pixbuf::from_file_at_scale(path, ICON_SIZE, ICON_SIZE, true)
            .inspect_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
            .ok()
    }

    pub fn frame_length(&self) -> Duration {
        self.animator.settings().frame_length
    }

    pub fn canvas_size(&self) -> f64 {
        self.animator.layout().canvas_size
    }

    pub fn tick(&mut self) -> Phase {
        self.animator.tick(&mut self.positions)
    }

    pub fn panel_rect(&self) -> Rect {
        let layout = self.animator.layout();
        Rect::new(layout.panel_origin(), layout.panel_size, layout.panel_size)
    }

    /// The "close" link along the bottom edge of the info panel.
    pub fn close_rect(&self) -> Rect {
        let panel = self.panel_rect();
        Rect::new(
            panel.origin.offset(0.0, panel.height - CLOSE_HEIGHT),
            panel.width,
            CLOSE_HEIGHT,
        )
    }

    /// Keeps the pointer state of the scene this one replaces, so a reload
    /// under the pointer does not start spinning.
    pub fn inherit_pointer(&mut self, previous: &Scene) {
        if previous.animator.is_hovered() {
            self.animator.hover_enter();
        }
    }

    /// Routes a click in canvas coordinates to the close link or an item.
    pub fn click(&mut self, point: Point) -> SelectionChange {
        if self.animator.selected().is_some() && self.close_rect().contains(point) {
            return self.animator.close();
        }

        let animator = &self.animator;
        let hit = self.positions.hit(point, |i| animator.item_radius(i));
        match hit.map(|i| self.animator.click_item(i)) {
            Some(Ok(change)) => change,
            Some(Err(e)) => {
                log::error!("Click on unknown item: {}", e);
                SelectionChange::Unchanged
            }
            None => SelectionChange::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn scene(items: usize) -> Scene {
        let mut toml = String::from("[animation]\ncircle_radius = 100\n");
        for i in 0..items {
            toml.push_str(&format!(
                "[[items]]\ntitle = \"Item {i}\"\ndetail = \"Detail {i}\"\n"
            ));
        }
        Scene::from_config(&parse_config(&toml).unwrap()).unwrap()
    }

    #[test]
    fn test_scene_layout_follows_theme_metrics() {
        let s = scene(3);
        // circle radius + zoomed icon radius, doubled
        assert_eq!(s.canvas_size(), 2.0 * (100.0 + 64.0));
        assert_eq!(s.positions.origins().len(), 3);
        assert!(s.pixbufs.iter().all(Option::is_none));
    }

    #[test]
    fn test_empty_config_is_rejected() {
        let result = Scene::from_config(&Config::default());
        assert!(matches!(
            result,
            Err(SceneError::Orbit(OrbitError::EmptyItemSet))
        ));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let config = parse_config("[animation]\nframe_length_ms = 0\n[[items]]\ntitle = \"A\"\n")
            .unwrap();
        assert!(matches!(
            Scene::from_config(&config),
            Err(SceneError::Settings(SettingsError::FrameTooShort(_)))
        ));
    }

    #[test]
    fn test_click_selects_item_and_close_link_clears_it() {
        let mut s = scene(4);
        s.tick();
        let centre = s.positions.center(0).unwrap();

        assert_eq!(
            s.click(centre),
            SelectionChange::Selected {
                index: 0,
                previous: None
            }
        );
        assert!(s.animator.is_paused());

        let close = s.close_rect().center();
        assert_eq!(s.click(close), SelectionChange::Deselected(0));
        assert_eq!(s.animator.selected(), None);
    }

    #[test]
    fn test_close_link_is_inert_without_selection() {
        let mut s = scene(2);
        let close = s.close_rect().center();
        assert_eq!(s.click(close), SelectionChange::Unchanged);
    }

    #[test]
    fn test_click_on_empty_canvas_does_nothing() {
        let mut s = scene(2);
        assert_eq!(s.click(Point::new(1.0, 1.0)), SelectionChange::Unchanged);
    }

    #[test]
    fn test_reloaded_scene_stays_paused_under_pointer() {
        let mut old = scene(3);
        old.animator.hover_enter();
        let mut reloaded = scene(3);
        reloaded.inherit_pointer(&old);
        assert!(reloaded.animator.is_hovered());
        assert!(reloaded.animator.is_paused());

        let idle = scene(3);
        let mut reloaded = scene(3);
        reloaded.inherit_pointer(&idle);
        assert!(!reloaded.animator.is_hovered());
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(Point::new(10.0, 10.0), 20.0, 5.0);
        assert!(r.contains(Point::new(10.0, 15.0)));
        assert!(!r.contains(Point::new(31.0, 12.0)));
        assert_eq!(r.center(), Point::new(20.0, 12.5));
    }
}
