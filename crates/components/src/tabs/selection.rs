//! Pure tab-selection state machine: index clamping, keyboard-axis mapping,
//! and disabled-skipping movement with wrap-around.

/// Layout axis of the tab strip. Also decides which arrow keys move focus.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Visual variant. Rendering only, never affects transition semantics.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TabsKind {
    #[default]
    Default,
    Borderless,
    Pill,
}

/// Whether moving keyboard focus alone changes the active tab (`Auto`) or a
/// separate Enter/Space confirmation is required (`Manual`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ActivationMode {
    #[default]
    Auto,
    Manual,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Maps an arrow key to a movement direction for the given axis.
    /// Keys off the axis, and every non-arrow key, are inert.
    pub fn from_key(orientation: Orientation, key: &str) -> Option<Direction> {
        match (orientation, key) {
            (Orientation::Horizontal, "ArrowRight") | (Orientation::Vertical, "ArrowDown") => {
                Some(Direction::Forward)
            }
            (Orientation::Horizontal, "ArrowLeft") | (Orientation::Vertical, "ArrowUp") => {
                Some(Direction::Backward)
            }
            _ => None,
        }
    }
}

/// Pins an externally supplied index into `[0, len)`. Out-of-range input is
/// caller error; it is clamped to the last tab rather than crashing.
pub fn clamp_index(len: usize, index: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index >= len {
        log::warn!("tab index {} out of range for {} tabs, clamping", index, len);
        len - 1
    } else {
        index
    }
}

/// Resolves an activation attempt on `target`: the index to notify the
/// parent with, or `None` when the activation is a no-op. Disabled and
/// out-of-range targets are inert, and so is the already-active tab, with
/// the current selection clamped the same way it is rendered.
pub fn activation_target(disabled: &[bool], selected: usize, target: usize) -> Option<usize> {
    if target >= disabled.len() || disabled[target] {
        return None;
    }
    if target == clamp_index(disabled.len(), selected) {
        return None;
    }
    Some(target)
}

/// Next focusable index moving from `from` in `direction`, skipping disabled
/// tabs and wrapping at both ends. `None` when no other enabled tab exists.
pub fn step(disabled: &[bool], from: usize, direction: Direction) -> Option<usize> {
    let len = disabled.len();
    if len == 0 {
        return None;
    }
    let from = from.min(len - 1);
    let mut index = from;
    for _ in 0..len {
        index = match direction {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        };
        if index == from {
            return None;
        }
        if !disabled[index] {
            return Some(index);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_skips_disabled_and_wraps() {
        // [Item0, Item1(disabled), Item2]: right-arrow from 0 lands on 2
        let disabled = [false, true, false];
        assert_eq!(step(&disabled, 0, Direction::Forward), Some(2));
        // wrap-around past the end
        assert_eq!(step(&disabled, 2, Direction::Forward), Some(0));
        // backward from the first tab wraps to the last enabled one
        assert_eq!(step(&disabled, 0, Direction::Backward), Some(2));
    }

    #[test]
    fn test_step_adjacent_enabled() {
        let disabled = [false, false, false];
        assert_eq!(step(&disabled, 1, Direction::Forward), Some(2));
        assert_eq!(step(&disabled, 1, Direction::Backward), Some(0));
    }

    #[test]
    fn test_step_no_other_enabled_tab() {
        assert_eq!(step(&[false], 0, Direction::Forward), None);
        assert_eq!(step(&[true, true, true], 0, Direction::Forward), None);
        assert_eq!(step(&[], 0, Direction::Forward), None);
        // only the origin is enabled
        assert_eq!(step(&[true, false, true], 1, Direction::Backward), None);
    }

    #[test]
    fn test_activation_fires_only_for_enabled_non_active_target() {
        let disabled = [false, false, false];
        // valid activation on j != i notifies with j
        assert_eq!(activation_target(&disabled, 0, 1), Some(1));
        // the already-active tab is a no-op
        assert_eq!(activation_target(&disabled, 0, 0), None);
        // disabled and out-of-range targets are inert
        assert_eq!(activation_target(&[false, true, false], 0, 1), None);
        assert_eq!(activation_target(&disabled, 0, 5), None);
        assert_eq!(activation_target(&[], 0, 0), None);
    }

    #[test]
    fn test_activation_treats_stale_selection_as_clamped() {
        // selection 10 with 3 tabs renders as tab 2, so activating 2 is a
        // no-op and activating any other enabled tab still fires
        let disabled = [false, false, false];
        assert_eq!(activation_target(&disabled, 10, 2), None);
        assert_eq!(activation_target(&disabled, 10, 0), Some(0));
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(3, 0), 0);
        assert_eq!(clamp_index(3, 2), 2);
        assert_eq!(clamp_index(3, 7), 2);
        assert_eq!(clamp_index(0, 5), 0);
    }

    #[test]
    fn test_direction_honors_axis() {
        use Orientation::{Horizontal, Vertical};
        assert_eq!(Direction::from_key(Horizontal, "ArrowRight"), Some(Direction::Forward));
        assert_eq!(Direction::from_key(Horizontal, "ArrowLeft"), Some(Direction::Backward));
        assert_eq!(Direction::from_key(Horizontal, "ArrowDown"), None);
        assert_eq!(Direction::from_key(Vertical, "ArrowDown"), Some(Direction::Forward));
        assert_eq!(Direction::from_key(Vertical, "ArrowUp"), Some(Direction::Backward));
        assert_eq!(Direction::from_key(Vertical, "ArrowLeft"), None);
        assert_eq!(Direction::from_key(Horizontal, "Tab"), None);
    }
}
