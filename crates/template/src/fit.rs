//! Font-size fitting for field bounding boxes

use pdf_core::MM_PER_PT;

/// Smallest font size the fitter will return, in points
pub const MIN_FONT_SIZE: f32 = 4.0;

/// Step between candidate sizes, in points
pub const FONT_STEP: f32 = 0.5;

/// Text width measurement capability
///
/// Implemented for anything that can measure a string at a font size, so the
/// fitter works against a real document as well as fixed metrics in tests.
pub trait MeasureText {
    /// Width of `text` at `size` points, in points
    fn measure_width(&self, text: &str, size: f32) -> f64;
}

impl<F> MeasureText for F
where
    F: Fn(&str, f32) -> f64,
{
    fn measure_width(&self, text: &str, size: f32) -> f64 {
        self(text, size)
    }
}

/// Find the largest font size at which `text` fits inside a field box
///
/// Walks down from `preferred` in half-point steps and returns the first size
/// whose rendered width and single-line height both fit the box. If nothing
/// fits by the 4 pt floor the floor is returned; overflow is not an error.
/// The line height is approximated as `size * 0.352778` mm.
///
/// The search is a linear walk rather than a bisection on purpose: width as
/// a function of size need not be strictly monotonic for every font, and the
/// candidate count is small.
///
/// # Arguments
/// * `measure` - Width measurement (points)
/// * `text` - Text to fit
/// * `box_width` - Field box width in millimeters
/// * `box_height` - Field box height in millimeters
/// * `preferred` - Preferred font size in points
pub fn fit_font_size(
    measure: &impl MeasureText,
    text: &str,
    box_width: f64,
    box_height: f64,
    preferred: f32,
) -> f32 {
    let mut size = preferred.max(MIN_FONT_SIZE);

    while size > MIN_FONT_SIZE {
        if fits(measure, text, box_width, box_height, size) {
            return size;
        }
        size -= FONT_STEP;
    }

    MIN_FONT_SIZE
}

fn fits(measure: &impl MeasureText, text: &str, box_width: f64, box_height: f64, size: f32) -> bool {
    let width_mm = measure.measure_width(text, size) * MM_PER_PT;
    let height_mm = size as f64 * MM_PER_PT;
    width_mm <= box_width && height_mm <= box_height
}
