use crate::units::Dp;

/// Outline the image is clipped to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    #[default]
    Circle,
    RoundedRect,
}

impl ShapeKind {
    /// Maps the raw attribute value. Anything but `1` is a circle.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => ShapeKind::RoundedRect,
            _ => ShapeKind::Circle,
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        match self {
            ShapeKind::Circle => 0,
            ShapeKind::RoundedRect => 1,
        }
    }

    /// Parses an attribute value: `0`/`1` or a name (`circle`, `round`, `rounded_rect`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "circle" => Some(ShapeKind::Circle),
            "round" | "rounded_rect" | "rounded-rect" | "roundrect" => Some(ShapeKind::RoundedRect),
            other => other.parse::<i32>().ok().map(ShapeKind::from_raw),
        }
    }
}

/// Construction-time options for [`ShapedImage`](super::ShapedImage).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedImageConfig {
    pub shape: ShapeKind,
    /// Only used in [`ShapeKind::RoundedRect`] mode.
    pub corner_radius: Dp,
}

impl ShapedImageConfig {
    pub const DEFAULT_CORNER_RADIUS: Dp = Dp(10.0);

    pub fn shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn corner_radius(mut self, radius: impl Into<Dp>) -> Self {
        self.corner_radius = radius.into();
        self
    }

    /// Builds a config from string attributes, as a markup or style layer supplies them.
    ///
    /// Recognized keys are `shape_type` and `corner_radius` (`"12"` or
    /// `"12dp"`). Malformed values keep their default and are logged;
    /// out-of-range shape numbers become [`ShapeKind::Circle`].
    pub fn from_props<I, K, V>(props: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in props {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "shape_type" | "shape" => match ShapeKind::parse(value) {
                    Some(shape) => config.shape = shape,
                    None => log::warn!("shape_type: unrecognized value '{value}', using circle"),
                },
                "corner_radius" => match parse_dp(value) {
                    Some(radius) => config.corner_radius = radius,
                    None => log::warn!(
                        "corner_radius: cannot parse '{value}', keeping {}dp",
                        config.corner_radius.get()
                    ),
                },
                other => log::debug!("ShapedImageConfig: ignoring unknown attribute '{other}'"),
            }
        }
        config
    }
}

impl Default for ShapedImageConfig {
    fn default() -> Self {
        Self { shape: ShapeKind::Circle, corner_radius: Self::DEFAULT_CORNER_RADIUS }
    }
}

fn parse_dp(value: &str) -> Option<Dp> {
    let value = value.trim();
    let number = value.strip_suffix("dp").unwrap_or(value).trim();
    let v: f32 = number.parse().ok()?;
    (v.is_finite() && v >= 0.0).then_some(Dp(v))
}
