//! Classified press events.

/// Identifier of a configured input line.
///
/// Ids are chosen by the caller (a GPIO number is a common choice) and must
/// be unique within one driver's line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineId(pub u8);

/// Press classification delivered to the platform event sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKind {
    /// Exactly one short press inside the multi-click window.
    Normal,
    /// Two or more short presses inside the multi-click window.
    Double,
    /// A press held longer than the long-press threshold.
    Long,
}
