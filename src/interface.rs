//! Platform capability abstraction.
//!
//! This module provides the [`PlatformInterface`] trait, the set of
//! capabilities the classifier core needs from the surrounding platform:
//! a wrapping tick counter, raw line level reads, and an event sink.
//! Peripheral setup, pin configuration, and interrupt-controller
//! registration stay on the platform side; the core never touches hardware
//! directly.
//!
//! ## Implementing
//!
//! A typical implementation wraps a hardware timer and a handful of
//! `embedded-hal` input pins:
//!
//! ```rust,ignore
//! struct Board { timer: Timer, user_btn: Gpio33, boot_btn: Gpio32 }
//!
//! impl PlatformInterface for Board {
//!     fn now(&mut self) -> Tick {
//!         self.timer.raw_count()
//!     }
//!
//!     fn read_level(&mut self, line: LineId) -> Level {
//!         let pin = match line {
//!             LineId(0) => &mut self.user_btn,
//!             _ => &mut self.boot_btn,
//!         };
//!         Level::from_pin(pin).unwrap_or(Level::Low)
//!     }
//!
//!     fn dispatch(&mut self, kind: PressKind, line: LineId) {
//!         self.queue.push(InputEvent { kind, line });
//!     }
//! }
//! ```

use crate::event::{LineId, PressKind};
use crate::tick::Tick;
use embedded_hal::digital::InputPin;

/// Raw logic level of an input line, before polarity inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Line reads low.
    Low,
    /// Line reads high.
    High,
}

impl Level {
    /// Sample an `embedded-hal` input pin into a [`Level`].
    ///
    /// # Errors
    ///
    /// Propagates the pin's own error type; the caller decides whether a
    /// failed read maps to a default level or is reported elsewhere.
    pub fn from_pin<P: InputPin>(pin: &mut P) -> Result<Self, P::Error> {
        Ok(if pin.is_high()? { Level::High } else { Level::Low })
    }

    /// Whether the line reads high.
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Capabilities the platform supplies to the driver.
///
/// The trait is resolved once, when the driver is constructed, and never
/// reassigned. Completeness of the capability set is therefore checked at
/// compile time rather than at initialization.
///
/// Elapsed-tick computation is not part of the contract; it is derived from
/// [`tick::elapsed`](crate::tick::elapsed), which tolerates one counter
/// wraparound between any two samples.
pub trait PlatformInterface {
    /// Current value of the free-running tick counter.
    ///
    /// Must be monotonic except for wraparound at `u32::MAX`. Every
    /// timestamp it returns, including 0, is treated as a valid sample.
    fn now(&mut self) -> Tick;

    /// Instantaneous raw level of `line`, before `active_high` inversion.
    ///
    /// Called once per line per [`process_tick`](crate::Driver::process_tick).
    fn read_level(&mut self, line: LineId) -> Level;

    /// Deliver a classified press event.
    ///
    /// Fire-and-forget: the implementation must not block and must not
    /// reenter the driver.
    fn dispatch(&mut self, kind: PressKind, line: LineId);
}
