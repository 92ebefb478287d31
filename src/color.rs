/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Color given to shapes that carry no color metadata.
    pub const LIGHT_GRAY: Color = Color::rgb(0.827_451, 0.827_451, 0.827_451);

    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::LIGHT_GRAY
    }
}

/// The channel a color is associated through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// Applies to the whole shape.
    Generic,
    /// Applies to faces.
    Surface,
    /// Applies to edges and curves.
    Curve,
}
