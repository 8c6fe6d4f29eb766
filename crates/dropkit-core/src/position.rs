#![forbid(unsafe_code)]

//! Drop-position classification.
//!
//! Maps a pointer offset within a hovered row to a placement verdict.
//! Group rows reserve their lower three quarters for "drop inside";
//! plain rows split in half. Exactly at a threshold the verdict is the
//! second branch (strict `<`), which the tests pin because nothing else
//! would catch a drift to `<=`.

/// Fraction of a group row's height above which a drop lands inside it.
pub const GROUP_ENTER_FRACTION: f32 = 0.25;

/// Fraction of a plain row's height that splits Before from After.
pub const ITEM_SPLIT_FRACTION: f32 = 0.5;

/// Where dragged content will land relative to the hovered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropPosition {
    /// Immediately preceding the target in its container.
    Before,
    /// Immediately following the target in its container.
    After,
    /// As a new child of the target (groups only).
    Into,
}

impl DropPosition {
    /// Classify a pointer offset within a hovered target.
    ///
    /// `pointer_offset` is measured from the target's top edge;
    /// `target_height` is the target row's full height. Pure and cheap:
    /// safe to call on every pointer-move tick.
    ///
    /// Groups never yield [`After`](Self::After) — dropping past a group's
    /// body means dropping inside it. A non-positive height classifies as
    /// the second branch (no offset is `<` a non-positive bound).
    #[must_use]
    pub fn classify(pointer_offset: f32, target_height: f32, is_group: bool) -> Self {
        if is_group {
            if pointer_offset < GROUP_ENTER_FRACTION * target_height {
                Self::Before
            } else {
                Self::Into
            }
        } else if pointer_offset < ITEM_SPLIT_FRACTION * target_height {
            Self::Before
        } else {
            Self::After
        }
    }

    /// Whether this verdict targets a group's interior.
    #[must_use]
    pub fn is_into(&self) -> bool {
        matches!(self, Self::Into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_upper_quarter_is_before() {
        assert_eq!(
            DropPosition::classify(0.24999 * 20.0, 20.0, true),
            DropPosition::Before
        );
        assert_eq!(DropPosition::classify(0.0, 20.0, true), DropPosition::Before);
    }

    #[test]
    fn group_threshold_tie_is_into() {
        // Exactly at the boundary the verdict is the second branch.
        assert_eq!(
            DropPosition::classify(0.25 * 20.0, 20.0, true),
            DropPosition::Into
        );
    }

    #[test]
    fn group_body_is_into() {
        assert_eq!(
            DropPosition::classify(0.3 * 20.0, 20.0, true),
            DropPosition::Into
        );
        assert_eq!(
            DropPosition::classify(19.9, 20.0, true),
            DropPosition::Into
        );
    }

    #[test]
    fn group_never_yields_after() {
        for tenths in 0..=10 {
            let offset = tenths as f32 * 2.0;
            assert_ne!(
                DropPosition::classify(offset, 20.0, true),
                DropPosition::After
            );
        }
    }

    #[test]
    fn item_upper_half_is_before() {
        assert_eq!(
            DropPosition::classify(0.49999 * 20.0, 20.0, false),
            DropPosition::Before
        );
    }

    #[test]
    fn item_threshold_tie_is_after() {
        assert_eq!(
            DropPosition::classify(0.5 * 20.0, 20.0, false),
            DropPosition::After
        );
    }

    #[test]
    fn item_lower_half_is_after() {
        assert_eq!(
            DropPosition::classify(15.0, 20.0, false),
            DropPosition::After
        );
    }

    #[test]
    fn zero_height_resolves_to_second_branch() {
        assert_eq!(DropPosition::classify(0.0, 0.0, false), DropPosition::After);
        assert_eq!(DropPosition::classify(0.0, 0.0, true), DropPosition::Into);
    }
}
