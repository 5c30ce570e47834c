//! Driver core: per-line state, lifecycle, and the two capture entry points.

use crate::aggregate::ClickAggregator;
use crate::capture::CaptureLine;
use crate::classify::{Classification, classify};
use crate::config::{Config, LineConfig, MAX_LINES, TickWindows};
use crate::error::ConfigError;
use crate::event::{LineId, PressKind};
use crate::interface::PlatformInterface;

#[derive(Debug, Clone, Copy, Default)]
struct LineState {
    config: Option<LineConfig>,
    capture: CaptureLine,
    clicks: ClickAggregator,
}

impl LineState {
    fn is_line(&self, id: LineId) -> bool {
        self.config.is_some_and(|c| c.id == id)
    }
}

/// Press-classification driver for a fixed set of input lines.
///
/// The driver exclusively owns all per-line state; external code reaches it
/// only through [`on_edge`](Self::on_edge) (interrupt path) and
/// [`process_tick`](Self::process_tick) (poll path). It starts
/// uninitialized — both entry points are silent no-ops until
/// [`initialize`](Self::initialize) succeeds — and the lifecycle is one-way:
/// there is no reset or reconfiguration.
///
/// ## Sharing with interrupt context
///
/// Both entry points take `&mut self`. A caller that services `on_edge` from
/// an ISR while running `process_tick` in the main loop wraps the driver in
/// its platform's critical-section primitive, e.g.
/// `Mutex<RefCell<Driver<P>>>`.
pub struct Driver<P: PlatformInterface> {
    platform: P,
    lines: [LineState; MAX_LINES],
    windows: TickWindows,
    ready: bool,
}

impl<P: PlatformInterface> Driver<P> {
    /// Construct an uninitialized driver over the platform capabilities.
    ///
    /// Completeness of the capability set is guaranteed by the
    /// [`PlatformInterface`] implementation itself.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            lines: [LineState::default(); MAX_LINES],
            windows: TickWindows::default(),
            ready: false,
        }
    }

    /// Whether initialization has succeeded.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of configured lines; zero before initialization.
    pub fn line_count(&self) -> usize {
        self.lines.iter().filter(|s| s.config.is_some()).count()
    }

    /// Validate the configuration and arm the driver.
    ///
    /// Side-effect-free on failure: the driver stays uninitialized and the
    /// caller may retry with a corrected configuration.
    ///
    /// # Errors
    ///
    /// `ConfigError::NoLines` if the line set is empty,
    /// `ConfigError::DuplicateLine` if two entries share an id,
    /// `ConfigError::WindowOverflow` if a window does not fit the tick
    /// domain, and `ConfigError::AlreadyInitialized` on a second call.
    pub fn initialize(&mut self, config: &Config) -> Result<(), ConfigError> {
        if self.ready {
            return Err(ConfigError::AlreadyInitialized);
        }

        let windows = config.tick_windows()?;

        let mut lines = [LineState::default(); MAX_LINES];
        let mut count = 0usize;
        for line in config.lines() {
            if lines.iter().take(count).any(|s| s.is_line(line.id)) {
                return Err(ConfigError::DuplicateLine(line.id));
            }
            lines[count].config = Some(line);
            count += 1;
        }
        if count == 0 {
            return Err(ConfigError::NoLines);
        }

        self.lines = lines;
        self.windows = windows;
        self.ready = true;
        log::debug!("driver ready: {} line(s)", count);
        Ok(())
    }

    /// Interrupt-path entry: record an observed edge on `line`.
    ///
    /// Timestamps the edge with the platform tick counter and stores it in
    /// the line's capture record per its edge mode. No events are emitted
    /// here. No-op if the driver is uninitialized or the id is unknown.
    pub fn on_edge(&mut self, line: LineId) {
        if !self.ready {
            return;
        }
        let now = self.platform.now();
        match self.lines.iter_mut().find(|s| s.is_line(line)) {
            Some(slot) => {
                if let Some(config) = slot.config {
                    slot.capture.record_edge(config.edge_mode, now);
                }
            }
            None => log::trace!("edge on unknown line {}", line.0),
        }
    }

    /// Poll-path entry: sample, classify, and dispatch for every line.
    ///
    /// Call periodically from a single cooperative context. Lines are
    /// processed in configuration order, all against one tick sample taken
    /// at the start of the call. No-op if the driver is uninitialized.
    pub fn process_tick(&mut self) {
        if !self.ready {
            return;
        }
        let now = self.platform.now();

        for i in 0..MAX_LINES {
            let Some(config) = self.lines[i].config else {
                continue;
            };

            // Level sampling completes cycles for every non-Both mode.
            let level = self.platform.read_level(config.id);
            let pressed = level.is_high() == config.active_high;
            self.lines[i].capture.record_level(config.edge_mode, pressed, now);

            match classify(&mut self.lines[i].capture, now, &self.windows) {
                Classification::Pending => {}
                Classification::Noise => {
                    log::trace!("bounce discarded on line {}", config.id.0);
                }
                Classification::Long => {
                    log::debug!("long press on line {}", config.id.0);
                    self.platform.dispatch(PressKind::Long, config.id);
                }
                Classification::Short(at) => {
                    log::trace!("short press confirmed on line {}", config.id.0);
                    self.lines[i].clicks.note_short(at);
                }
            }

            if let Some(kind) = self.lines[i].clicks.resolve(now, self.windows.multi_click) {
                log::debug!("{:?} press on line {}", kind, config.id.0);
                self.platform.dispatch(kind, config.id);
            }
        }
    }

    /// Access the platform collaborator.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Consume the driver and return the platform collaborator.
    pub fn release(self) -> P {
        self.platform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, EdgeMode, LineConfig};
    use crate::interface::Level;

    struct NullPlatform;

    impl PlatformInterface for NullPlatform {
        fn now(&mut self) -> u32 {
            0
        }
        fn read_level(&mut self, _line: LineId) -> Level {
            Level::Low
        }
        fn dispatch(&mut self, _kind: PressKind, _line: LineId) {
            panic!("nothing should be dispatched");
        }
    }

    fn one_line_config() -> Config {
        Builder::new()
            .line(LineConfig::new(LineId(0)).edge_mode(EdgeMode::Both))
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_line_set_rejected() {
        let config = Builder::new().build().unwrap();
        let mut driver = Driver::new(NullPlatform);
        assert_eq!(driver.initialize(&config).unwrap_err(), ConfigError::NoLines);
        assert!(!driver.is_ready());
    }

    #[test]
    fn test_duplicate_line_rejected() {
        let config = Builder::new()
            .line(LineConfig::new(LineId(4)))
            .line(LineConfig::new(LineId(4)).edge_mode(EdgeMode::Both))
            .build()
            .unwrap();
        let mut driver = Driver::new(NullPlatform);
        assert_eq!(
            driver.initialize(&config).unwrap_err(),
            ConfigError::DuplicateLine(LineId(4))
        );
        assert!(!driver.is_ready());
        assert_eq!(driver.line_count(), 0);
    }

    #[test]
    fn test_reinitialization_rejected() {
        let mut driver = Driver::new(NullPlatform);
        driver.initialize(&one_line_config()).unwrap();
        assert!(driver.is_ready());
        assert_eq!(
            driver.initialize(&one_line_config()).unwrap_err(),
            ConfigError::AlreadyInitialized
        );
        // The first configuration stays in force.
        assert!(driver.is_ready());
        assert_eq!(driver.line_count(), 1);
    }

    #[test]
    fn test_entry_points_are_noops_before_init() {
        // NullPlatform panics on dispatch and process_tick must not even
        // sample levels before initialization.
        let mut driver = Driver::new(NullPlatform);
        for _ in 0..10 {
            driver.on_edge(LineId(0));
            driver.process_tick();
        }
        assert!(!driver.is_ready());
    }

    #[test]
    fn test_unknown_line_edge_is_ignored() {
        let mut driver = Driver::new(NullPlatform);
        driver.initialize(&one_line_config()).unwrap();
        driver.on_edge(LineId(9));
        driver.process_tick();
    }
}
