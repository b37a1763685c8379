use crate::config::SliderConfig;
use crate::geometry::{self, Point};
use crate::slider::{
    DEFAULT_LINE_WIDTH, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, HIT_BAND_DEG, VALUE_EPSILON,
};
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Visual style of the draggable handle. The style decides how much room the
/// handle claims when the ring radius is capped against the widget bounds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum HandleStyle {
    #[default]
    #[strum(serialize = "transparent", serialize = "t")]
    Transparent,
    #[strum(serialize = "solid", serialize = "s")]
    Solid,
}

/// What the widget layer has to do after a model mutation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateAction {
    pub should_redraw: bool,
    pub should_relayout: bool,
    pub value_changed: bool,
}

impl UpdateAction {
    fn redraw() -> Self {
        Self {
            should_redraw: true,
            ..Self::default()
        }
    }

    fn value_set() -> Self {
        Self {
            should_redraw: true,
            should_relayout: true,
            value_changed: true,
        }
    }
}

/// The slider's complete state: value range, current reading, ring metrics
/// and the running drag angle. Pure; knows nothing about GTK or cairo.
#[derive(Debug, Clone)]
pub struct SliderModel {
    minimum_value: f64,
    maximum_value: f64,
    current_value: f64,
    handle_radius: f64,
    line_width: f64,
    radius: f64,
    requested_radius: f64,
    handle_style: HandleStyle,
    last_angle: f64,
    width: f64,
    height: f64,
}

impl Default for SliderModel {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM,
            maximum_value: DEFAULT_MAXIMUM,
            current_value: DEFAULT_MINIMUM,
            handle_radius: 0.0,
            line_width: DEFAULT_LINE_WIDTH,
            radius: 0.0,
            requested_radius: 0.0,
            handle_style: HandleStyle::default(),
            last_angle: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

impl SliderModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SliderConfig) -> Self {
        let mut model = Self::new();
        model.apply_config(config);
        model.set_value(config.initial_value);
        model
    }

    /// Applies range and appearance from a config, keeping the current value
    /// (re-clamped into the possibly narrower range). Used both at
    /// construction and on config hot-reload.
    pub fn apply_config(&mut self, config: &SliderConfig) -> UpdateAction {
        if config.maximum_value > config.minimum_value {
            self.minimum_value = config.minimum_value;
            self.maximum_value = config.maximum_value;
        } else {
            log::warn!(
                "ignoring degenerate range [{}, {}]",
                config.minimum_value,
                config.maximum_value
            );
        }
        self.handle_style = config.handle_style;
        self.set_line_width(config.line_width);
        self.set_handle_radius(config.handle_radius);
        self.set_radius(config.radius);
        self.set_value(self.current_value)
    }

    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn handle_radius(&self) -> f64 {
        self.handle_radius
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn handle_style(&self) -> HandleStyle {
        self.handle_style
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Display angle of the handle, degrees. Runs from 0 at the minimum
    /// value towards (but never reaching) 360 just below the maximum.
    pub fn angle(&self) -> f64 {
        let angle = 360.0 - 360.0 * self.current_value / self.maximum_value;
        if angle == 360.0 { 0.0 } else { angle }
    }

    pub fn handle_center(&self) -> Point {
        geometry::handle_point(self.center(), self.radius, self.angle())
    }

    /// Clamps into `[minimum, maximum)`: anything at or above the maximum
    /// lands an epsilon below it, anything below the minimum lands on it.
    pub fn set_value(&mut self, value: f64) -> UpdateAction {
        self.current_value = if value >= self.maximum_value {
            self.maximum_value - VALUE_EPSILON
        } else if value < self.minimum_value {
            self.minimum_value
        } else {
            value
        };
        UpdateAction::value_set()
    }

    pub fn set_line_width(&mut self, line_width: f64) -> UpdateAction {
        self.line_width = line_width;
        UpdateAction::redraw()
    }

    /// A handle narrower than the ring stroke would be invisible under it;
    /// auto-corrects to half the stroke width.
    pub fn set_handle_radius(&mut self, handle_radius: f64) -> UpdateAction {
        self.handle_radius = if handle_radius * 2.0 < self.line_width {
            self.line_width / 2.0
        } else {
            handle_radius
        };
        UpdateAction::redraw()
    }

    /// Caps the ring radius so ring plus handle allowance stays inside half
    /// the widget height. The requested value is kept and re-capped when the
    /// bounds change.
    pub fn set_radius(&mut self, radius: f64) -> UpdateAction {
        self.requested_radius = radius;
        self.radius = self.capped_radius(radius);
        UpdateAction::redraw()
    }

    pub fn set_bounds(&mut self, width: f64, height: f64) -> UpdateAction {
        self.width = width;
        self.height = height;
        self.radius = self.capped_radius(self.requested_radius);
        UpdateAction::redraw()
    }

    fn capped_radius(&self, radius: f64) -> f64 {
        if self.height <= 0.0 {
            return radius;
        }
        let max_radius =
            self.height / 2.0 - self.line_width / 2.0 - (self.handle_diameter() - self.line_width);
        radius.min(max_radius)
    }

    fn handle_diameter(&self) -> f64 {
        match self.handle_style {
            HandleStyle::Transparent => self.line_width,
            HandleStyle::Solid => self.handle_radius * 2.0,
        }
    }

    /// Records the starting angle of a drag. `false` when the touch sits
    /// exactly on the center and no angle is defined.
    pub fn begin_tracking(&mut self, point: Point) -> bool {
        match geometry::angle_from_north(self.center(), point) {
            Some(angle) => {
                self.last_angle = angle.floor();
                true
            }
            None => false,
        }
    }

    /// One drag step: integrates the signed shortest-arc rotation since the
    /// previous step into the value. A step landing on the center is dropped
    /// without touching any state.
    pub fn move_handle(&mut self, point: Point) -> UpdateAction {
        let Some(angle) = geometry::angle_from_north(self.center(), point) else {
            return UpdateAction::default();
        };
        let current_angle = angle.floor();
        let step = geometry::signed_arc(self.last_angle, current_angle);
        let action = self.set_value(self.current_value + self.value_from_angle(step));
        self.last_angle = current_angle;
        action
    }

    fn value_from_angle(&self, angle: f64) -> f64 {
        angle * (self.maximum_value - self.minimum_value) / 360.0
    }

    /// Whether a touch falls in the tolerance band around the handle.
    ///
    /// The band is centered on the value's position scaled to a full turn,
    /// with both bounds wrapped into `[0, 360)`. A wrapped band (straddling
    /// north) accepts on either side of the seam.
    pub fn contains_point(&self, point: Point) -> bool {
        let Some(touched) = geometry::angle_from_north(self.center(), point) else {
            return false;
        };
        let touched = touched.floor();
        let track = self.current_value / self.maximum_value * 360.0;
        let low = (track - HIT_BAND_DEG).rem_euclid(360.0);
        let high = (track + HIT_BAND_DEG).rem_euclid(360.0);
        if low <= high {
            touched >= low && touched <= high
        } else {
            touched >= low || touched <= high
        }
    }
}
