use crate::clock::Clock;
use crate::geometry::{FULL_TURN, Layout};
use crate::items::{Item, ItemSet};
use crate::phase::Phase;
use crate::render::Renderer;
use crate::selection::{InfoPanel, Selection, SelectionChange};
use crate::settings::Settings;
use std::time::Duration;
use thiserror::Error;

/// The load-in sweep starts one degree in so the first item moves on the
/// very first frame.
pub const LOADING_START_ANGLE: f64 = 1.0;

#[derive(Error, Debug, PartialEq)]
pub enum OrbitError {
    #[error("an info circle needs at least one item")]
    EmptyItemSet,
    #[error("no item at index {index} (circle has {len})")]
    NoSuchItem { index: usize, len: usize },
}

/// One info circle: the items, their shared angle and everything that
/// decides whether that angle moves.
#[derive(Debug)]
pub struct Animator<C: Clock> {
    items: ItemSet,
    settings: Settings,
    clock: C,
    phase: Phase,
    angle: f64,
    speed: f64,
    transition_started: Duration,
    hovered: bool,
    selection: Selection,
}

impl<C: Clock> Animator<C> {
    pub fn new(items: Vec<Item>, settings: Settings, clock: C) -> Result<Self, OrbitError> {
        let items = ItemSet::new(items).ok_or(OrbitError::EmptyItemSet)?;
        Ok(Self {
            items,
            speed: settings.init_speed,
            settings,
            clock,
            phase: Phase::Loading,
            angle: LOADING_START_ANGLE,
            transition_started: Duration::ZERO,
            hovered: false,
            selection: Selection::default(),
        })
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn layout(&self) -> Layout {
        self.settings.geometry.layout()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Degrees the angle will advance on the next unpaused frame.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.selection.selected().is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Advances the animation by one frame, moving items through `renderer`.
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Phase {
        let now = self.clock.now();
        match self.phase {
            Phase::Loading => self.tick_loading(now, renderer),
            Phase::Transitioning => self.tick_transition(now, renderer),
            Phase::Continuous => self.tick_continuous(renderer),
        }
        self.phase
    }

    fn tick_loading<R: Renderer + ?Sized>(&mut self, now: Duration, renderer: &mut R) {
        if self.angle >= FULL_TURN {
            self.angle = 0.0;
            self.transition_started = now;
            self.advance_phase();
            // no idle frame between load-in and transition
            self.tick_transition(now, renderer);
            return;
        }

        let geometry = self.settings.geometry;
        for (i, start_at) in self.items.stagger_offsets() {
            if self.angle > start_at {
                renderer.move_item(i, geometry.position(self.angle - start_at));
            }
        }
        self.angle += self.settings.init_speed;
    }

    fn tick_transition<R: Renderer + ?Sized>(&mut self, now: Duration, renderer: &mut R) {
        let elapsed = now.saturating_sub(self.transition_started);
        let progress = if self.settings.transition.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.settings.transition.as_secs_f64()).min(1.0)
        };
        let (from, to) = (self.settings.init_speed, self.settings.continuous_speed);
        self.speed = from + (to - from) * progress;

        self.step(renderer);

        if elapsed >= self.settings.transition {
            self.speed = to;
            self.advance_phase();
        }
    }

    fn tick_continuous<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        self.step(renderer);
    }

    /// Shared frame of the transition and continuous phases.
    fn step<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        if self.is_paused() {
            return;
        }
        self.render_all(renderer);
        self.angle = (self.angle + self.speed).rem_euclid(FULL_TURN);
    }

    fn render_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let geometry = self.settings.geometry;
        for (i, start_at) in self.items.stagger_offsets() {
            renderer.move_item(i, geometry.position(self.angle - start_at));
        }
    }

    fn advance_phase(&mut self) {
        if let Some(next) = self.phase.next() {
            log::debug!("info circle phase {} -> {}", self.phase, next);
            self.phase = next;
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovered = true;
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    /// Click on item `index`: select it, or close it if it already is.
    pub fn click_item(&mut self, index: usize) -> Result<SelectionChange, OrbitError> {
        if self.items.get(index).is_none() {
            return Err(OrbitError::NoSuchItem {
                index,
                len: self.items.len(),
            });
        }
        let change = self.selection.toggle(index, self.clock.now());
        log::debug!("info circle selection: {:?}", change);
        Ok(change)
    }

    pub fn close(&mut self) -> SelectionChange {
        let change = self.selection.clear(self.clock.now());
        if change != SelectionChange::Unchanged {
            log::debug!("info circle selection: {:?}", change);
        }
        change
    }

    pub fn info_panel(&self) -> Option<InfoPanel> {
        self.selection
            .selected()
            .and_then(|i| self.items.get(i))
            .map(InfoPanel::for_item)
    }

    /// Current drawn radius of item `index`, following its zoom tween.
    pub fn item_radius(&self, index: usize) -> f64 {
        let g = &self.settings.geometry;
        let progress = self
            .selection
            .zoom_progress(index, self.clock.now(), self.settings.zoom);
        g.icon_radius + g.zoom_diff() * progress
    }
}
