// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability.
//!
//! Support is decided once when the viewer is built. The viewer only tracks
//! whether fullscreen is active; switching the window mode is left to the
//! host through the effects the viewer returns.

/// Fullscreen capability and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fullscreen {
    supported: bool,
    active: bool,
}

impl Default for Fullscreen {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Fullscreen {
    #[must_use]
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            active: false,
        }
    }

    /// Enters fullscreen. Returns `false` when unsupported or already active.
    pub fn try_enter(&mut self) -> bool {
        if !self.supported {
            log::debug!("fullscreen requested but not supported");
            return false;
        }
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Leaves fullscreen. Returns `false` when it was not active.
    pub fn exit(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_exit() {
        let mut fullscreen = Fullscreen::new(true);
        assert!(fullscreen.try_enter());
        assert!(!fullscreen.try_enter());
        assert!(fullscreen.is_active());

        assert!(fullscreen.exit());
        assert!(!fullscreen.exit());
    }

    #[test]
    fn unsupported_never_activates() {
        let mut fullscreen = Fullscreen::new(false);
        assert!(!fullscreen.try_enter());
        assert!(!fullscreen.is_active());
    }
}
