//! Sizing strategies for view insertion.

use serde::{Deserialize, Serialize};

/// How an inserted view obtains its initial extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sizing {
    /// Insert at an exact pixel extent.
    Exact { size: u32 },
    /// Insert at the view's minimum, then equalize all flexible views.
    Distribute,
    /// Insert at half the current extent of the view at `neighbor`.
    Split { neighbor: usize },
    /// Distribute when the existing views are already near-equal, otherwise
    /// split the neighbor.
    Auto { neighbor: usize },
    /// Insert hidden, remembering the extent to restore on show.
    Invisible { cached_visible_size: u32 },
}

impl Sizing {
    /// Shorthand for [`Sizing::Exact`].
    #[must_use]
    pub const fn exact(size: u32) -> Self {
        Self::Exact { size }
    }

    /// Shorthand for [`Sizing::Split`].
    #[must_use]
    pub const fn split(neighbor: usize) -> Self {
        Self::Split { neighbor }
    }

    /// Shorthand for [`Sizing::Invisible`].
    #[must_use]
    pub const fn invisible(cached_visible_size: u32) -> Self {
        Self::Invisible {
            cached_visible_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_tags_are_snake_case() {
        let json = serde_json::to_string(&Sizing::Distribute).unwrap();
        assert_eq!(json, "{\"kind\":\"distribute\"}");

        let json = serde_json::to_string(&Sizing::split(2)).unwrap();
        assert_eq!(json, "{\"kind\":\"split\",\"neighbor\":2}");
    }

    #[test]
    fn shorthands_match_variants() {
        assert_eq!(Sizing::exact(10), Sizing::Exact { size: 10 });
        assert_eq!(
            Sizing::invisible(80),
            Sizing::Invisible {
                cached_visible_size: 80
            }
        );
    }
}
