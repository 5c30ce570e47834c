//! Driver configuration types and builder.

pub use crate::error::{ConfigError, MAX_LINES};
use crate::event::LineId;

/// Which transitions of a line are captured from interrupt context.
///
/// Lines that are not fully interrupt-bounded are completed by level
/// sampling inside [`process_tick`](crate::Driver::process_tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EdgeMode {
    /// No interrupt capture; the line is level-sampled in the poll path only.
    #[default]
    None,
    /// Rising edges are interrupt-captured.
    ///
    /// For active-low wiring the rising edge is the release edge; the press
    /// bound comes from level sampling.
    Rising,
    /// Falling edges are interrupt-captured; the release bound comes from
    /// level sampling.
    Falling,
    /// Both edges are interrupt-captured. The only mode that bounds a full
    /// press/release cycle precisely from interrupt context.
    Both,
}

/// Immutable per-line configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineConfig {
    /// Caller-chosen line identifier, unique within the driver.
    pub id: LineId,
    /// Interrupt capture mode for this line.
    pub edge_mode: EdgeMode,
    /// `true` if the pressed level reads high. Most pulled-up switches are
    /// active-low.
    pub active_high: bool,
}

impl LineConfig {
    /// New line with defaults: poll-only capture, active-low.
    pub fn new(id: LineId) -> Self {
        Self {
            id,
            edge_mode: EdgeMode::None,
            active_high: false,
        }
    }

    /// Set the interrupt capture mode.
    pub fn edge_mode(mut self, mode: EdgeMode) -> Self {
        self.edge_mode = mode;
        self
    }

    /// Set the pressed polarity.
    pub fn active_high(mut self, active_high: bool) -> Self {
        self.active_high = active_high;
        self
    }
}

/// Timing windows converted to tick units.
///
/// Computed once at initialization so the hot paths never repeat the
/// microsecond conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TickWindows {
    pub debounce: u32,
    pub long_press: u32,
    pub multi_click: u32,
}

/// Driver configuration.
///
/// Use [`Builder`] to create a `Config`. All values are fixed once the
/// driver is initialized.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tick counter increments per microsecond.
    pub ticks_per_micro: u32,
    /// Minimum quiet time after the last edge before a cycle resolves, in
    /// microseconds.
    pub debounce_micros: u32,
    /// Bounded press duration above which a cycle is a long press, in
    /// microseconds.
    pub long_press_micros: u32,
    /// Settle window after a confirmed short press during which further
    /// short presses merge into a double press, in microseconds.
    pub multi_click_micros: u32,
    lines: [Option<LineConfig>; MAX_LINES],
}

impl Config {
    /// Iterate over the configured lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = LineConfig> + '_ {
        self.lines.iter().flatten().copied()
    }

    pub(crate) fn tick_windows(&self) -> Result<TickWindows, ConfigError> {
        Ok(TickWindows {
            debounce: to_ticks(self.debounce_micros, self.ticks_per_micro)?,
            long_press: to_ticks(self.long_press_micros, self.ticks_per_micro)?,
            multi_click: to_ticks(self.multi_click_micros, self.ticks_per_micro)?,
        })
    }
}

fn to_ticks(micros: u32, ticks_per_micro: u32) -> Result<u32, ConfigError> {
    micros
        .checked_mul(ticks_per_micro)
        .ok_or(ConfigError::WindowOverflow { micros })
}

/// Builder for constructing driver configuration.
///
/// Timing defaults follow common mechanical-switch values: 10 ms debounce,
/// 1 s long press, 500 ms multi-click window.
///
/// # Example
///
/// ```
/// use pressline::{Builder, EdgeMode, LineConfig, LineId};
///
/// let config = Builder::new()
///     .ticks_per_micro(40) // 40 MHz timer
///     .debounce_micros(10_000)
///     .line(LineConfig::new(LineId(0)).edge_mode(EdgeMode::Both))
///     .line(LineConfig::new(LineId(1)))
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.lines().count(), 2);
/// ```
pub struct Builder {
    ticks_per_micro: u32,
    debounce_micros: u32,
    long_press_micros: u32,
    multi_click_micros: u32,
    lines: [Option<LineConfig>; MAX_LINES],
    requested: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            ticks_per_micro: 1,
            debounce_micros: 10_000,
            long_press_micros: 1_000_000,
            multi_click_micros: 500_000,
            lines: [None; MAX_LINES],
            requested: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default timing values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tick rate of the platform counter (ticks per microsecond).
    pub fn ticks_per_micro(mut self, ticks: u32) -> Self {
        self.ticks_per_micro = ticks;
        self
    }

    /// Set the debounce window in microseconds.
    pub fn debounce_micros(mut self, micros: u32) -> Self {
        self.debounce_micros = micros;
        self
    }

    /// Set the long-press threshold in microseconds.
    pub fn long_press_micros(mut self, micros: u32) -> Self {
        self.long_press_micros = micros;
        self
    }

    /// Set the multi-click settle window in microseconds.
    pub fn multi_click_micros(mut self, micros: u32) -> Self {
        self.multi_click_micros = micros;
        self
    }

    /// Add a line to the configuration.
    pub fn line(mut self, line: LineConfig) -> Self {
        if self.requested < MAX_LINES {
            self.lines[self.requested] = Some(line);
        }
        self.requested += 1;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroTickRate` if the tick rate is zero,
    /// `ConfigError::TooManyLines` if more than [`MAX_LINES`] lines were
    /// added, or `ConfigError::WindowOverflow` if a window does not fit the
    /// tick counter once converted. Emptiness and uniqueness of the line set
    /// are checked by [`Driver::initialize`](crate::Driver::initialize).
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.ticks_per_micro == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.requested > MAX_LINES {
            return Err(ConfigError::TooManyLines {
                max: MAX_LINES,
                requested: self.requested,
            });
        }
        let config = Config {
            ticks_per_micro: self.ticks_per_micro,
            debounce_micros: self.debounce_micros,
            long_press_micros: self.long_press_micros,
            multi_click_micros: self.multi_click_micros,
            lines: self.lines,
        };
        // Reject windows the tick domain cannot represent.
        config.tick_windows()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = Builder::new()
            .line(LineConfig::new(LineId(3)))
            .build()
            .unwrap();
        assert_eq!(config.ticks_per_micro, 1);
        assert_eq!(config.debounce_micros, 10_000);
        assert_eq!(config.long_press_micros, 1_000_000);
        assert_eq!(config.multi_click_micros, 500_000);

        let windows = config.tick_windows().unwrap();
        assert_eq!(windows.debounce, 10_000);
        assert_eq!(windows.long_press, 1_000_000);
        assert_eq!(windows.multi_click, 500_000);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let result = Builder::new()
            .ticks_per_micro(0)
            .line(LineConfig::new(LineId(0)))
            .build();
        assert_eq!(result.unwrap_err(), ConfigError::ZeroTickRate);
    }

    #[test]
    fn test_window_overflow_rejected() {
        // 1_000_000 us * 40_000 ticks/us overflows u32.
        let result = Builder::new()
            .ticks_per_micro(40_000)
            .line(LineConfig::new(LineId(0)))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::WindowOverflow { micros: 1_000_000 }
        );
    }

    #[test]
    fn test_too_many_lines_rejected() {
        let mut builder = Builder::new();
        for id in 0..=MAX_LINES as u8 {
            builder = builder.line(LineConfig::new(LineId(id)));
        }
        assert_eq!(
            builder.build().unwrap_err(),
            ConfigError::TooManyLines {
                max: MAX_LINES,
                requested: MAX_LINES + 1,
            }
        );
    }

    #[test]
    fn test_tick_windows_scale_with_rate() {
        let config = Builder::new()
            .ticks_per_micro(40)
            .line(LineConfig::new(LineId(0)))
            .build()
            .unwrap();
        let windows = config.tick_windows().unwrap();
        assert_eq!(windows.debounce, 400_000);
        assert_eq!(windows.multi_click, 20_000_000);
    }
}
