//! Point and line render sizes

/// Point size and line width used when a mesh is drawn as points or lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    point_size: f32,
    line_width: f32,
}

impl RenderStyle {
    pub const DEFAULT_POINT_SIZE: f32 = 4.0;
    pub const DEFAULT_LINE_WIDTH: f32 = 2.0;

    /// Build a style from optional overrides
    ///
    /// Non-positive or non-finite values are ignored with a warning and the
    /// default is kept.
    pub fn new(point_size: Option<f32>, line_width: Option<f32>) -> Self {
        let mut style = Self::default();
        if let Some(size) = point_size {
            if is_usable(size) {
                style.point_size = size;
            } else {
                tracing::warn!(
                    "Ignoring point size {}, keeping {}",
                    size,
                    style.point_size
                );
            }
        }
        if let Some(width) = line_width {
            if is_usable(width) {
                style.line_width = width;
            } else {
                tracing::warn!(
                    "Ignoring line width {}, keeping {}",
                    width,
                    style.line_width
                );
            }
        }
        style
    }

    pub fn point_size(&self) -> f32 {
        self.point_size
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            point_size: Self::DEFAULT_POINT_SIZE,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}

fn is_usable(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
