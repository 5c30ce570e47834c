//! Error types for the driver.
//!
//! Every failure the crate can report is a [`ConfigError`] raised at
//! configuration or initialization time. Runtime misuse — an edge on an
//! unknown line, entry points called before initialization — is a silent
//! no-op by design, never an error and never a panic.

use crate::event::LineId;

/// Maximum number of input lines one driver instance can manage.
///
/// All per-line state is held in fixed arrays of this capacity; nothing is
/// allocated or resized after initialization.
pub const MAX_LINES: usize = 8;

/// Errors that can occur when building configuration or initializing the
/// driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No input line was configured.
    ///
    /// At least one [`LineConfig`](crate::config::LineConfig) must be added
    /// before the driver can be armed.
    NoLines,
    /// More lines were configured than the fixed capacity allows.
    TooManyLines {
        /// Capacity of the driver ([`MAX_LINES`]).
        max: usize,
        /// Number of lines requested.
        requested: usize,
    },
    /// Two line entries share the same id.
    DuplicateLine(LineId),
    /// `ticks_per_micro` must be nonzero.
    ZeroTickRate,
    /// A window in microseconds does not fit the tick counter once converted
    /// with the configured tick rate.
    WindowOverflow {
        /// The offending window, in microseconds.
        micros: u32,
    },
    /// The driver was already initialized.
    ///
    /// The lifecycle is one-way; reconfiguration requires a new driver.
    AlreadyInitialized,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoLines => write!(f, "No input lines configured"),
            ConfigError::TooManyLines { max, requested } => {
                write!(f, "Too many lines: requested {requested}, capacity {max}")
            }
            ConfigError::DuplicateLine(id) => write!(f, "Duplicate line id {}", id.0),
            ConfigError::ZeroTickRate => write!(f, "ticks_per_micro must be nonzero"),
            ConfigError::WindowOverflow { micros } => {
                write!(f, "Window of {micros} us does not fit the tick counter")
            }
            ConfigError::AlreadyInitialized => write!(f, "Driver is already initialized"),
        }
    }
}

impl core::error::Error for ConfigError {}
