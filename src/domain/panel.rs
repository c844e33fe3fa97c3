use super::enums::PanelSide;

/// Panel switcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    ActiveView,
    /// Slide animation in flight toward `target`
    Transitioning { target: PanelSide },
    CompletedView,
}

/// Finite-state machine for the panel switcher.
///
/// Replaces the ad hoc boolean + transition-end flags with explicit states.
/// Timing lives with the caller: the tick loop counts down the slide and
/// fires `animation_complete` exactly once per transition.
#[derive(Debug, Clone)]
pub struct PanelFsm {
    state: PanelState,
}

impl Default for PanelFsm {
    fn default() -> Self {
        Self {
            state: PanelState::ActiveView,
        }
    }
}

impl PanelFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The side whose list should be rendered. During a transition this is
    /// the target side (the incoming panel).
    pub fn visible_side(&self) -> PanelSide {
        match self.state {
            PanelState::ActiveView => PanelSide::Active,
            PanelState::CompletedView => PanelSide::Completed,
            PanelState::Transitioning { target } => target,
        }
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, PanelState::Transitioning { .. })
    }

    /// User clicked a panel tab. Starts a transition when `side` differs
    /// from the settled view; ignored while a transition is in flight or
    /// when the side is already shown. Returns true when a transition began.
    pub fn select(&mut self, side: PanelSide) -> bool {
        let settled = match self.state {
            PanelState::ActiveView => PanelSide::Active,
            PanelState::CompletedView => PanelSide::Completed,
            PanelState::Transitioning { .. } => return false,
        };

        if settled == side {
            return false;
        }

        self.state = PanelState::Transitioning { target: side };
        true
    }

    /// The single "animation complete" signal: settles a transition into its
    /// target view. Ignored in settled states.
    pub fn animation_complete(&mut self) {
        if let PanelState::Transitioning { target } = self.state {
            self.state = match target {
                PanelSide::Active => PanelState::ActiveView,
                PanelSide::Completed => PanelState::CompletedView,
            };
        }
    }
}
