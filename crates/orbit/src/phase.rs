use strum::{Display as StrumDisplay, EnumIter};

/// Animation phases, always visited in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Staggered load-in, each item starts once the sweep reaches it.
    Loading,
    /// Easing from the load-in speed down to the steady speed.
    Transitioning,
    /// Endless steady rotation.
    Continuous,
}

impl Phase {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Loading => Some(Self::Transitioning),
            Self::Transitioning => Some(Self::Continuous),
            Self::Continuous => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}
