//! Press classification for mechanical switch lines.
//!
//! `pressline` turns raw switch transitions into semantic press events —
//! normal, double, and long presses — for a small fixed set of input lines.
//! Each line can be captured from interrupt context, from a polled main
//! loop, or a mix of both. The crate is platform-agnostic: time and I/O
//! reach the core only through the [`PlatformInterface`] capabilities it is
//! constructed with, so there is no peripheral, timer, or interrupt setup in
//! here at all.
//!
//! The core is a per-line timing state machine over a wrapping tick counter:
//! edge-timestamp capture, debounce filtering, long-vs-short press
//! disambiguation, and single-vs-double click windowing.
//!
//! ## Example
//!
//! ```
//! use pressline::{
//!     Builder, Driver, EdgeMode, Level, LineConfig, LineId, PlatformInterface, PressKind,
//! };
//!
//! struct Platform {
//!     tick: u32,
//! }
//!
//! impl PlatformInterface for Platform {
//!     fn now(&mut self) -> u32 {
//!         self.tick
//!     }
//!
//!     fn read_level(&mut self, _line: LineId) -> Level {
//!         Level::High
//!     }
//!
//!     fn dispatch(&mut self, kind: PressKind, line: LineId) {
//!         // Forward to the application.
//!         let _ = (kind, line);
//!     }
//! }
//!
//! let config = Builder::new()
//!     .ticks_per_micro(1)
//!     .debounce_micros(10_000)
//!     .long_press_micros(1_000_000)
//!     .line(LineConfig::new(LineId(0)).edge_mode(EdgeMode::Both))
//!     .build()?;
//!
//! let mut driver = Driver::new(Platform { tick: 0 });
//! driver.initialize(&config)?;
//!
//! // Interrupt context records edges; the main loop classifies.
//! driver.on_edge(LineId(0));
//! driver.process_tick();
//! # Ok::<(), pressline::ConfigError>(())
//! ```
//!
//! ## Sharing with interrupt context
//!
//! Both entry points take `&mut self`; callers that mix interrupt and poll
//! capture wrap the driver in their platform's critical-section primitive.
//! See [`Driver`] for details.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::unreachable,
        clippy::unwrap_used
    )
)]

mod aggregate;
mod capture;
mod classify;
pub mod config;
mod driver;
pub mod error;
mod event;
pub mod interface;
pub mod tick;

pub use config::{Builder, Config, EdgeMode, LineConfig};
pub use driver::Driver;
pub use error::{ConfigError, MAX_LINES};
pub use event::{LineId, PressKind};
pub use interface::{Level, PlatformInterface};
pub use tick::Tick;
