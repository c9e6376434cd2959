//! Circular-motion animation core for the info circle widget.
//!
//! Everything here is pure state and arithmetic. Hosts feed time through a
//! [`Clock`], drive [`Animator::tick`] from their frame timer and receive
//! item positions through a [`Renderer`].

pub mod animator;
pub mod clock;
pub mod geometry;
pub mod items;
pub mod macros;
pub mod phase;
pub mod render;
pub mod selection;
pub mod settings;

pub use animator::{Animator, OrbitError};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use geometry::{Geometry, Layout, Point};
pub use items::{Item, ItemDetail, ItemSet, ItemTitle};
pub use phase::Phase;
pub use render::{PositionBuffer, Renderer};
pub use selection::{InfoPanel, Selection, SelectionChange};
pub use settings::{IconMetrics, Settings, SettingsError, SettingsOverrides};
