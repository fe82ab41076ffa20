//! Shared numeric constants for the drawing engine.

// ── Camera ──────────────────────────────────────────────────────

/// Lowest zoom level the camera can reach.
pub const ZOOM_MIN: f64 = 0.5;

/// Highest zoom level the camera can reach.
pub const ZOOM_MAX: f64 = 2.0;

// ── Snapping ────────────────────────────────────────────────────

/// Number of equal divisions of a full turn used for angle snapping
/// (24 segments = 15° steps).
pub const ANGLE_SNAP_SEGMENTS: u32 = 24;

/// Default grid cell size in canvas units.
pub const DEFAULT_GRID: f64 = 8.0;

// ── Text ────────────────────────────────────────────────────────

/// Base font size for text shapes at scale 1, in pixels.
pub const FONT_SIZE_PX: f64 = 28.0;

// ── Measure lines ───────────────────────────────────────────────

/// Length of the perpendicular tip strokes at measure line ends.
pub const MEASURE_TIP_LENGTH: f64 = 16.0;
