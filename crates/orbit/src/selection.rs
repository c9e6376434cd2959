use crate::items::{Item, ItemDetail, ItemTitle};
use std::time::Duration;

pub const CLOSE_LABEL: &str = "close";

/// Contents of the centre panel while an item is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    pub title: ItemTitle,
    pub detail: ItemDetail,
    pub close_label: &'static str,
}

impl InfoPanel {
    pub fn for_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            detail: item.detail.clone(),
            close_label: CLOSE_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected {
        index: usize,
        previous: Option<usize>,
    },
    Deselected(usize),
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Zoom {
    index: usize,
    started: Duration,
}

impl Zoom {
    fn fraction(&self, now: Duration, duration: Duration) -> f64 {
        if duration.is_zero() {
            return 1.0;
        }
        (now.saturating_sub(self.started).as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }
}

/// At most one selected item, plus the zoom tweens of the item growing in
/// and the one shrinking back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
    zoom_in: Option<Zoom>,
    zoom_out: Option<Zoom>,
}

impl Selection {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Clicking the selected item closes it, clicking any other item moves
    /// the selection there.
    pub fn toggle(&mut self, index: usize, now: Duration) -> SelectionChange {
        if self.is_selected(index) {
            return self.clear(now);
        }

        let previous = self.selected.replace(index);
        if let Some(prev) = previous {
            self.zoom_out = Some(Zoom {
                index: prev,
                started: now,
            });
        }
        self.zoom_in = Some(Zoom {
            index,
            started: now,
        });

        SelectionChange::Selected { index, previous }
    }

    pub fn clear(&mut self, now: Duration) -> SelectionChange {
        match self.selected.take() {
            Some(index) => {
                self.zoom_in = None;
                self.zoom_out = Some(Zoom {
                    index,
                    started: now,
                });
                SelectionChange::Deselected(index)
            }
            None => SelectionChange::Unchanged,
        }
    }

    /// 0.0 for a resting icon, 1.0 for a fully zoomed one.
    pub fn zoom_progress(&self, index: usize, now: Duration, duration: Duration) -> f64 {
        match (self.zoom_in, self.zoom_out) {
            (Some(z), _) if z.index == index => z.fraction(now, duration),
            (_, Some(z)) if z.index == index => 1.0 - z.fraction(now, duration),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZOOM: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_selecting_moves_the_selection() {
        let mut s = Selection::default();
        assert_eq!(
            s.toggle(1, ms(0)),
            SelectionChange::Selected {
                index: 1,
                previous: None
            }
        );
        assert_eq!(
            s.toggle(3, ms(10)),
            SelectionChange::Selected {
                index: 3,
                previous: Some(1)
            }
        );
        assert_eq!(s.selected(), Some(3));
        assert!(!s.is_selected(1));
    }

    #[test]
    fn test_reclick_and_close_deselect() {
        let mut s = Selection::default();
        s.toggle(2, ms(0));
        assert_eq!(s.toggle(2, ms(5)), SelectionChange::Deselected(2));
        assert_eq!(s.selected(), None);

        s.toggle(0, ms(10));
        assert_eq!(s.clear(ms(20)), SelectionChange::Deselected(0));
        assert_eq!(s.clear(ms(30)), SelectionChange::Unchanged);
    }

    #[test]
    fn test_zoom_tweens() {
        let mut s = Selection::default();
        s.toggle(0, ms(0));
        assert_eq!(s.zoom_progress(0, ms(0), ZOOM), 0.0);
        assert_eq!(s.zoom_progress(0, ms(250), ZOOM), 0.5);
        assert_eq!(s.zoom_progress(0, ms(900), ZOOM), 1.0);

        s.toggle(1, ms(1000));
        assert_eq!(s.zoom_progress(0, ms(1125), ZOOM), 0.75);
        assert_eq!(s.zoom_progress(1, ms(1125), ZOOM), 0.25);
        assert_eq!(s.zoom_progress(0, ms(2000), ZOOM), 0.0);
        assert_eq!(s.zoom_progress(2, ms(2000), ZOOM), 0.0);

        s.clear(ms(3000));
        assert_eq!(s.zoom_progress(1, ms(3000), ZOOM), 1.0);
        assert_eq!(s.zoom_progress(1, ms(3500), ZOOM), 0.0);
    }

    #[test]
    fn test_zero_duration_zooms_instantly() {
        let mut s = Selection::default();
        s.toggle(4, ms(7));
        assert_eq!(s.zoom_progress(4, ms(7), Duration::ZERO), 1.0);
    }

    #[test]
    fn test_info_panel_copies_item_text() {
        let panel = InfoPanel::for_item(&Item::new("Hosting", "Servers, mostly"));
        assert_eq!(panel.title.as_str(), "Hosting");
        assert_eq!(panel.detail.as_str(), "Servers, mostly");
        assert_eq!(panel.close_label, "close");
    }
}
