// SPDX-License-Identifier: MPL-2.0
//! Input bindings of the lightbox.
//!
//! Every reaction to host input goes through a [`ListenerRegistry`]: a map
//! from an input source and trigger to the action it performs. Attaching the
//! same pair twice replaces the binding, detaching is explicit, and a source
//! with no binding is ignored by the viewer.

use std::collections::HashMap;

/// Where an input originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A gallery thumbnail, by its position in the gallery.
    Thumbnail(usize),
    /// A navigation key pressed anywhere in the window.
    Key(NavKey),
    LeftArrow,
    RightArrow,
    Overlay,
    CloseButton,
    FullscreenButton,
    Wrapper,
    Image,
    /// The window or host element the viewer is mounted in.
    Container,
}

/// Keys the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Escape,
}

/// What happened on a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Click or press.
    Activate,
    KeyDown,
    PointerMove,
    Resize,
}

/// Operation a binding performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Open(usize),
    Change(isize),
    Close,
    ToggleFullscreen,
    /// Zoom in if the image is zoomable and not zoomed, zoom out otherwise.
    ToggleZoom,
    ZoomOut,
    Pan,
    /// Debounced re-fit after the container changed size.
    Resize,
}

/// Owned map of input bindings.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    bindings: HashMap<(Target, Trigger), Action>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `action`, replacing any previous binding of the same pair.
    pub fn attach(&mut self, target: Target, trigger: Trigger, action: Action) {
        self.bindings.insert((target, trigger), action);
    }

    /// Removes a binding; returns whether one existed.
    pub fn detach(&mut self, target: Target, trigger: Trigger) -> bool {
        self.bindings.remove(&(target, trigger)).is_some()
    }

    #[must_use]
    pub fn resolve(&self, target: Target, trigger: Trigger) -> Option<Action> {
        self.bindings.get(&(target, trigger)).copied()
    }

    /// Removes every thumbnail binding, keeping the viewer's own.
    pub fn detach_thumbnails(&mut self) {
        self.bindings
            .retain(|(target, _), _| !matches!(target, Target::Thumbnail(_)));
    }

    /// Removes every binding except the thumbnails'.
    pub fn detach_viewer(&mut self) {
        self.bindings
            .retain(|(target, _), _| matches!(target, Target::Thumbnail(_)));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        registry.attach(Target::Overlay, Trigger::Activate, Action::Close);
        registry.attach(Target::Overlay, Trigger::Activate, Action::Close);

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.resolve(Target::Overlay, Trigger::Activate),
            Some(Action::Close)
        );
    }

    #[test]
    fn reattaching_replaces_action() {
        let mut registry = ListenerRegistry::new();
        registry.attach(Target::Thumbnail(0), Trigger::Activate, Action::Open(0));
        registry.attach(Target::Thumbnail(0), Trigger::Activate, Action::Open(3));

        assert_eq!(
            registry.resolve(Target::Thumbnail(0), Trigger::Activate),
            Some(Action::Open(3))
        );
    }

    #[test]
    fn detach_groups() {
        let mut registry = ListenerRegistry::new();
        registry.attach(Target::Thumbnail(0), Trigger::Activate, Action::Open(0));
        registry.attach(Target::Thumbnail(2), Trigger::Activate, Action::Open(1));
        registry.attach(Target::Key(NavKey::Escape), Trigger::KeyDown, Action::Close);

        let mut viewer_only = registry.clone();
        viewer_only.detach_thumbnails();
        assert_eq!(viewer_only.len(), 1);
        assert!(viewer_only
            .resolve(Target::Thumbnail(0), Trigger::Activate)
            .is_none());

        registry.detach_viewer();
        assert_eq!(registry.len(), 2);
        assert!(registry
            .resolve(Target::Key(NavKey::Escape), Trigger::KeyDown)
            .is_none());
    }

    #[test]
    fn detach_reports_presence() {
        let mut registry = ListenerRegistry::new();
        registry.attach(Target::Wrapper, Trigger::Activate, Action::ZoomOut);

        assert!(registry.detach(Target::Wrapper, Trigger::Activate));
        assert!(!registry.detach(Target::Wrapper, Trigger::Activate));
        assert!(registry.is_empty());
    }
}
