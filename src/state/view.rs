//! Selection and scroll arithmetic for the tree viewport.
//!
//! Pure; the controller feeds it the entry count and the height the renderer
//! reported on the last frame.

/// Cursor position and scroll offset into the flat entry list.
///
/// Invariant after any move: `scroll <= selected < scroll + height` whenever
/// the list is non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub selected: usize,
    pub scroll: usize,
}

impl Viewport {
    /// Move the selection by `delta`, wrapping past either end, then keep it
    /// inside the visible window.
    pub fn move_by(&mut self, delta: isize, len: usize, height: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = if target < 0 {
            len - 1
        } else if target >= len as isize {
            0
        } else {
            target as usize
        };
        self.ensure_visible(height);
    }

    /// Jump straight to an index (clamped), keeping it visible.
    pub fn jump_to(&mut self, index: usize, len: usize, height: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll = 0;
            return;
        }
        self.selected = index.min(len - 1);
        self.ensure_visible(height);
    }

    /// Re-clamp after the entry list was rebuilt and may have shrunk.
    pub fn clamp_to_len(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.scroll = 0;
        } else {
            self.selected = self.selected.min(len - 1);
            self.scroll = self.scroll.min(self.selected);
        }
    }

    /// Scroll just enough that the selection falls inside the window.
    pub fn ensure_visible(&mut self, height: usize) {
        let height = height.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds_invariant(v: &Viewport, len: usize, height: usize) -> bool {
        len == 0 || (v.scroll <= v.selected && v.selected < v.scroll + height.max(1))
    }

    #[test]
    fn test_move_wraps_both_directions() {
        let mut v = Viewport::default();
        v.move_by(-1, 10, 5);
        assert_eq!(v.selected, 9);
        v.move_by(1, 10, 5);
        assert_eq!(v.selected, 0);
    }

    #[test]
    fn test_move_on_empty_list_pins_to_zero() {
        let mut v = Viewport { selected: 7, scroll: 3 };
        v.move_by(1, 0, 5);
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn test_invariant_holds_over_arbitrary_delta_sequences() {
        let deltas = [1, 1, 4, -1, -4, 13, -13, 1, -1, -1, 4, 4, 4, -4, 100, -100];
        for height in 1..6 {
            for len in [1usize, 2, 5, 17] {
                let mut v = Viewport::default();
                for &d in &deltas {
                    v.move_by(d, len, height);
                    assert!(
                        holds_invariant(&v, len, height),
                        "len={} height={} viewport={:?}",
                        len,
                        height,
                        v
                    );
                    assert!(v.selected < len);
                }
            }
        }
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut v = Viewport { selected: 9, scroll: 5 };
        v.clamp_to_len(4);
        assert_eq!(v.selected, 3);
        assert!(v.scroll <= v.selected);

        v.clamp_to_len(0);
        assert_eq!(v, Viewport::default());
    }

    #[test]
    fn test_jump_scrolls_down_and_back_up() {
        let mut v = Viewport::default();
        v.jump_to(20, 30, 10);
        assert_eq!(v.selected, 20);
        assert_eq!(v.scroll, 11);
        v.jump_to(2, 30, 10);
        assert_eq!(v.scroll, 2);
    }
}
