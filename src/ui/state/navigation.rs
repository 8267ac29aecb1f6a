// SPDX-License-Identifier: MPL-2.0
//! Index arithmetic for moving through the catalog.
//!
//! These are pure functions of the current index, the last valid index and
//! the navigation options. They are re-evaluated on every placement and every
//! resize, so nothing here is stored.

/// Resolves a relative move of `step` images from `current`.
///
/// Returns `None` when the move leaves `[0, last]` and looping is off.
/// With looping on, overflowing past either end wraps to the opposite bound.
#[must_use]
pub fn resolve_target(current: usize, last: usize, step: isize, looping: bool) -> Option<usize> {
    let requested = current.checked_add_signed(step);
    match requested {
        Some(index) if index <= last => Some(index),
        Some(_) => looping.then_some(0),
        None => looping.then_some(last),
    }
}

/// Which navigation arrows respond to presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrowState {
    pub left: bool,
    pub right: bool,
}

impl ArrowState {
    pub const INERT: ArrowState = ArrowState {
        left: false,
        right: false,
    };
}

/// Derives arrow enablement for `current` out of `last + 1` images.
///
/// Looping enables both arrows. Otherwise an arrow is enabled only when
/// linking between images is on and moving in its direction stays in bounds.
#[must_use]
pub fn arrows(current: usize, last: usize, looping: bool, link_images: bool) -> ArrowState {
    if looping {
        ArrowState {
            left: true,
            right: true,
        }
    } else if link_images {
        ArrowState {
            left: current > 0,
            right: current < last,
        }
    } else {
        ArrowState::INERT
    }
}

/// Pagination text, e.g. `"3 / 5"` for the third of five images.
#[must_use]
pub fn pagination(current: usize, last: usize, separator: &str) -> String {
    format!("{} {} {}", current + 1, separator, last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_inside_bounds() {
        assert_eq!(resolve_target(1, 4, 1, false), Some(2));
        assert_eq!(resolve_target(1, 4, -1, false), Some(0));
    }

    #[test]
    fn overflow_wraps_only_when_looping() {
        for last in 0..6 {
            for looping in [false, true] {
                let forward = resolve_target(last, last, 1, looping);
                assert_eq!(forward == Some(0), looping, "last={last} loop={looping}");
                assert_eq!(forward.is_none(), !looping);

                let backward = resolve_target(0, last, -1, looping);
                assert_eq!(backward == Some(last), looping);
                assert_eq!(backward.is_none(), !looping);
            }
        }
    }

    #[test]
    fn three_images_without_loop() {
        assert_eq!(
            arrows(0, 2, false, true),
            ArrowState {
                left: false,
                right: true
            }
        );
        assert_eq!(
            arrows(1, 2, false, true),
            ArrowState {
                left: true,
                right: true
            }
        );
        assert_eq!(
            arrows(2, 2, false, true),
            ArrowState {
                left: true,
                right: false
            }
        );
    }

    #[test]
    fn single_image_without_loop_disables_both_arrows() {
        assert_eq!(arrows(0, 0, false, true), ArrowState::INERT);
        assert_eq!(arrows(0, 0, false, false), ArrowState::INERT);
    }

    #[test]
    fn disabled_linking_makes_arrows_inert() {
        assert_eq!(arrows(1, 5, false, false), ArrowState::INERT);
    }

    #[test]
    fn looping_enables_both_arrows() {
        let both = ArrowState {
            left: true,
            right: true,
        };
        assert_eq!(arrows(0, 3, true, true), both);
        assert_eq!(arrows(3, 3, true, false), both);
    }

    #[test]
    fn pagination_text() {
        assert_eq!(pagination(2, 4, "/"), "3 / 5");
        assert_eq!(pagination(0, 0, "of"), "1 of 1");
    }
}
