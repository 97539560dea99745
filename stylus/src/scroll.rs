//! Scroll locking between the edit surface and the highlight overlay
//!
//! The overlay keeps no scroll state of its own. Every scroll event on the
//! edit surface copies both offsets across with [`sync_scroll`].

/// Scroll offsets in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    /// Vertical offset (`scrollTop`)
    pub top: f32,
    /// Horizontal offset (`scrollLeft`)
    pub left: f32,
}

impl ScrollPosition {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Anything with a scroll position the host can read and write.
pub trait Scrollable {
    fn scroll_position(&self) -> ScrollPosition;
    fn set_scroll_position(&mut self, position: ScrollPosition);
}

/// Copy `surface`'s scroll offsets onto `overlay`.
pub fn sync_scroll(surface: &impl Scrollable, overlay: &mut impl Scrollable) {
    let position = surface.scroll_position();
    tracing::trace!(top = position.top, left = position.left, "sync overlay scroll");
    overlay.set_scroll_position(position);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pane(ScrollPosition);

    impl Scrollable for Pane {
        fn scroll_position(&self) -> ScrollPosition {
            self.0
        }

        fn set_scroll_position(&mut self, position: ScrollPosition) {
            self.0 = position;
        }
    }

    #[test]
    fn overlay_follows_surface() {
        let mut surface = Pane::default();
        let mut overlay = Pane(ScrollPosition::new(99.0, 99.0));

        surface.set_scroll_position(ScrollPosition::new(120.0, 8.5));
        sync_scroll(&surface, &mut overlay);
        assert_eq!(overlay.scroll_position(), ScrollPosition::new(120.0, 8.5));

        surface.set_scroll_position(ScrollPosition::default());
        sync_scroll(&surface, &mut overlay);
        assert_eq!(overlay.scroll_position(), ScrollPosition::default());
    }
}
