//! Generation constants and runtime configuration defaults

/// Tolerance shared by all geometric comparisons in normalised coordinates
pub const GEOMETRIC_TOLERANCE: f64 = 1e-9;

// Live polygons must tile the unit square to within this drift
/// Allowed deviation of the summed polygon area from 1.0
pub const TILING_TOLERANCE: f64 = 1e-6;

/// Number of border lines every canvas starts with
pub const BORDER_LINE_COUNT: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of cuts per painting
pub const DEFAULT_LINES: usize = 12;

/// Default number of paintings per run
pub const DEFAULT_PAINTING_COUNT: usize = 3;

/// Default render width in pixels
pub const DEFAULT_WIDTH: u32 = 200;

/// Default render height in pixels
pub const DEFAULT_HEIGHT: u32 = 150;

/// Default minimum face area in square pixels
pub const DEFAULT_MIN_PIXEL_AREA: f64 = 400.0;

// Guards against minimum areas that no remaining cut can satisfy
/// Default number of rejected candidates tolerated per cut
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Largest minimum area any first cut of the unit square can satisfy
pub const MAX_MIN_AREA: f64 = 0.5;

// Rendering settings
/// Stroke width of interior cut lines in pixels
pub const LINE_STROKE_WIDTH: u32 = 5;
/// Stroke width of the outer frame in pixels
pub const BORDER_STROKE_WIDTH: u32 = 8;

// Output settings
/// Prefix of generated painting filenames
pub const OUTPUT_PREFIX: &str = "mondrian_";
/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "paintings";
/// Marker name of the README section holding generated paintings
pub const README_MARKER: &str = "art";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
