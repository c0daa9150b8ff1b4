//! Scroll-derived header style and fire-once reveal tracking.

/// Offset (in CSS pixels) past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Fraction of an element that must intersect the viewport to count as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub fn is_past_threshold(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderStyle {
    Transparent,
    Solid,
}

impl HeaderStyle {
    pub fn from_offset(offset: f64) -> Self {
        if is_past_threshold(offset) {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Transparent => "is-transparent",
            Self::Solid => "is-solid",
        }
    }
}

/// Per-element visibility. `Seen` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    NotSeen,
    Seen,
}

impl Reveal {
    /// Feeds one intersection sample. Returns `true` only for the sample that
    /// performs the `NotSeen -> Seen` transition, which is the caller's cue to
    /// stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            Self::NotSeen if intersecting => {
                *self = Self::Seen;
                true
            }
            _ => false,
        }
    }

    pub fn is_seen(self) -> bool {
        matches!(self, Self::Seen)
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::NotSeen => "reveal",
            Self::Seen => "reveal is-visible",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater_than_fifty() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert_eq!(HeaderStyle::from_offset(120.0), HeaderStyle::Solid);
        assert_eq!(HeaderStyle::from_offset(10.0), HeaderStyle::Transparent);
    }

    #[test]
    fn header_style_follows_offset_both_ways() {
        let offsets = [0.0, 80.0, 300.0, 20.0, 51.0, 0.0];
        let styles: Vec<_> = offsets.iter().map(|o| HeaderStyle::from_offset(*o)).collect();
        assert_eq!(
            styles,
            vec![
                HeaderStyle::Transparent,
                HeaderStyle::Solid,
                HeaderStyle::Solid,
                HeaderStyle::Transparent,
                HeaderStyle::Solid,
                HeaderStyle::Transparent,
            ]
        );
    }

    #[test]
    fn reveal_stays_seen_after_leaving_viewport() {
        let mut reveal = Reveal::default();

        assert!(!reveal.observe(false));
        assert_eq!(reveal, Reveal::NotSeen);

        assert!(reveal.observe(true));
        for sample in [false, true, false, false] {
            assert!(!reveal.observe(sample), "only the first entry fires");
            assert!(reveal.is_seen());
        }
    }
}
