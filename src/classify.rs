//! Debounce gating and long/short press disambiguation.

use crate::capture::CaptureLine;
use crate::config::TickWindows;
use crate::tick::{self, Tick};

/// Outcome of evaluating one line's capture record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    /// Nothing to decide yet; capture state is left untouched.
    Pending,
    /// Bounded interval shorter than the debounce window; discarded.
    Noise,
    /// Bounded interval exceeded the long-press threshold.
    Long,
    /// Qualifying short press, confirmed at the given tick.
    Short(Tick),
}

/// Evaluate a line's capture record against the configured windows.
///
/// A verdict is only rendered once both bounds are present and the line has
/// been quiescent since its last edge for longer than the debounce window.
/// Terminal verdicts (`Long`, `Short`, `Noise`) clear the capture record;
/// `Pending` leaves it for the next evaluation.
///
/// A cycle that is neither long nor still inside the multi-click window
/// stays `Pending`. There is no discard timeout beyond the windows above.
pub(crate) fn classify(
    capture: &mut CaptureLine,
    now: Tick,
    windows: &TickWindows,
) -> Classification {
    let Some((first, last)) = capture.bounds() else {
        return Classification::Pending;
    };

    let quiet = tick::elapsed(last, now);
    if quiet <= windows.debounce {
        return Classification::Pending;
    }

    if tick::elapsed(first, last) > windows.long_press {
        capture.clear();
        return Classification::Long;
    }

    if tick::elapsed(first, last) < windows.debounce {
        // Too brief to be a press at all.
        capture.clear();
        return Classification::Noise;
    }

    if quiet < windows.multi_click {
        capture.clear();
        return Classification::Short(now);
    }

    Classification::Pending
}
