//! Per-line capture of the two timestamps bounding a press cycle.

use crate::config::EdgeMode;
use crate::tick::Tick;

/// The two edge timestamps bounding one press cycle on a line.
///
/// `first` is the press-start bound, `last` the press-end bound. Writes are
/// of a set-if-unset nature so a burst of edges cannot tear an armed cycle;
/// both fields are cleared together when the cycle resolves. Capture only
/// records timestamps, it never emits events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureLine {
    first: Option<Tick>,
    last: Option<Tick>,
}

impl CaptureLine {
    /// Record an interrupt-observed edge at `now`.
    pub fn record_edge(&mut self, mode: EdgeMode, now: Tick) {
        match mode {
            // Poll-only lines have no interrupt to service.
            EdgeMode::None => {}
            EdgeMode::Rising => {
                // Release edge under active-low wiring; the press bound is
                // supplied by level sampling in the poll path.
                if self.last.is_none() {
                    self.last = Some(now);
                }
            }
            EdgeMode::Falling => {
                if self.first.is_none() {
                    self.first = Some(now);
                }
            }
            EdgeMode::Both => {
                if self.first.is_none() {
                    self.first = Some(now);
                } else {
                    self.last = Some(now);
                }
            }
        }
    }

    /// Record a level sample from the poll path.
    ///
    /// `pressed` is the logic level after `active_high` inversion. While the
    /// line is held, `last` tracks the most recent pressed sample, so the
    /// quiescence measured by the classifier starts at release.
    pub fn record_level(&mut self, mode: EdgeMode, pressed: bool, now: Tick) {
        if !pressed {
            return;
        }
        match mode {
            // Fully interrupt-bounded; nothing to do here.
            EdgeMode::Both => {}
            EdgeMode::Rising => {
                if self.first.is_none() {
                    self.first = Some(now);
                }
            }
            EdgeMode::Falling => {
                if self.first.is_some() {
                    self.last = Some(now);
                }
            }
            EdgeMode::None => {
                if self.first.is_none() {
                    self.first = Some(now);
                } else {
                    self.last = Some(now);
                }
            }
        }
    }

    /// Both bounds, once a full cycle has been captured.
    pub fn bounds(&self) -> Option<(Tick, Tick)> {
        Some((self.first?, self.last?))
    }

    /// Forget the current cycle.
    pub fn clear(&mut self) {
        self.first = None;
        self.last = None;
    }
}
