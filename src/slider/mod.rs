pub mod model;
pub mod view;

pub use model::{HandleStyle, SliderModel, UpdateAction};
pub use view::draw;

pub const DEFAULT_MINIMUM: f64 = 0.0;
pub const DEFAULT_MAXIMUM: f64 = 100.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Keeps `current_value` strictly below the maximum.
pub const VALUE_EPSILON: f64 = 0.0001;

/// Tolerance either side of the handle angle accepted by hit-testing.
pub const HIT_BAND_DEG: f64 = 20.0;
