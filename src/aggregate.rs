//! Multi-click windowing: normal vs. double press resolution.

use crate::event::PressKind;
use crate::tick::{self, Tick};

/// Per-line short-press accumulator and settle window.
///
/// Each confirmed short press re-arms the settle timer; the accumulated
/// count is resolved into exactly one event once the multi-click window has
/// elapsed since the latest confirmation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClickAggregator {
    count: u8,
    confirmed_at: Option<Tick>,
}

impl ClickAggregator {
    /// Record a confirmed short press.
    pub fn note_short(&mut self, at: Tick) {
        self.count = self.count.saturating_add(1);
        self.confirmed_at = Some(at);
    }

    /// Resolve the accumulated count once the settle window has elapsed.
    ///
    /// One press resolves to `Normal`; two resolve to `Double`. Three or
    /// more presses inside the window cap at `Double`. Counter and
    /// confirmation tick are cleared on resolution.
    pub fn resolve(&mut self, now: Tick, multi_click_window: u32) -> Option<PressKind> {
        let confirmed = self.confirmed_at?;
        if self.count == 0 {
            return None;
        }
        if tick::elapsed(confirmed, now) <= multi_click_window {
            return None;
        }

        let kind = if self.count == 1 {
            PressKind::Normal
        } else {
            PressKind::Double
        };
        self.count = 0;
        self.confirmed_at = None;
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u32 = 500_000;

    #[test]
    fn test_nothing_to_resolve_when_empty() {
        let mut clicks = ClickAggregator::default();
        assert_eq!(clicks.resolve(1_000_000, WINDOW), None);
    }

    #[test]
    fn test_single_press_resolves_to_normal() {
        let mut clicks = ClickAggregator::default();
        clicks.note_short(23_000);

        // Still inside the settle window.
        assert_eq!(clicks.resolve(100_000, WINDOW), None);
        assert_eq!(clicks.resolve(523_000, WINDOW), None);

        assert_eq!(clicks.resolve(523_001, WINDOW), Some(PressKind::Normal));
        // Exactly one event per gesture.
        assert_eq!(clicks.resolve(600_000, WINDOW), None);
    }

    #[test]
    fn test_double_press_resolves_to_double() {
        let mut clicks = ClickAggregator::default();
        clicks.note_short(23_000);
        clicks.note_short(73_000);

        // Window is measured from the latest confirmation.
        assert_eq!(clicks.resolve(523_001, WINDOW), None);
        assert_eq!(clicks.resolve(573_001, WINDOW), Some(PressKind::Double));
    }

    #[test]
    fn test_triple_press_caps_at_double() {
        let mut clicks = ClickAggregator::default();
        clicks.note_short(10_000);
        clicks.note_short(60_000);
        clicks.note_short(110_000);

        assert_eq!(clicks.resolve(610_001, WINDOW), Some(PressKind::Double));
        assert_eq!(clicks.resolve(700_000, WINDOW), None);
    }

    #[test]
    fn test_counter_saturates() {
        let mut clicks = ClickAggregator::default();
        for i in 0..300u32 {
            clicks.note_short(i * 1_000);
        }
        assert_eq!(clicks.resolve(1_000_000, WINDOW), Some(PressKind::Double));
    }
}
