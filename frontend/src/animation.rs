//! Scroll-linked animation values.
//!
//! Everything here is a pure function of the current scroll offset. Nothing is
//! stored; components recompute on every render.

/// Scroll distance over which the fixed header fades in.
pub const HEADER_FADE_DISTANCE: f64 = 100.0;

/// Scroll distance between two neighbouring service cards' focus peaks.
pub const CARD_BAND_WIDTH: f64 = 200.0;

pub const CARD_OPACITY_FLOOR: f64 = 0.5;
pub const CARD_SCALE_FLOOR: f64 = 0.8;

/// Piecewise-linear mapping over `input` -> `output` breakpoints, clamped at
/// both ends. Breakpoints are exact. Ranges must be equal length, non-empty
/// and non-decreasing.
fn interpolate_clamped(input: &[f64], output: &[f64], x: f64) -> f64 {
    let last = input.len() - 1;
    if x.is_nan() || x <= input[0] {
        return output[0];
    }
    if x >= input[last] {
        return output[last];
    }
    for i in 0..last {
        let (x0, x1) = (input[i], input[i + 1]);
        if x > x1 {
            continue;
        }
        if x == x1 {
            return output[i + 1];
        }
        let (y0, y1) = (output[i], output[i + 1]);
        return y0 + (x - x0) / (x1 - x0) * (y1 - y0);
    }
    output[last]
}

/// Opacity of the fixed header: 0 at rest, 1 once the page has scrolled
/// [`HEADER_FADE_DISTANCE`] pixels.
pub fn header_opacity(scroll_offset: f64) -> f64 {
    interpolate_clamped(&[0.0, HEADER_FADE_DISTANCE], &[0.0, 1.0], scroll_offset)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardEmphasis {
    pub opacity: f64,
    pub scale: f64,
}

impl CardEmphasis {
    pub fn to_style(&self) -> String {
        format!("opacity: {}; transform: scale({});", self.opacity, self.scale)
    }
}

/// Emphasis of the card at `index`. Peaks at `index * CARD_BAND_WIDTH` and
/// falls back to the floor one band width either side.
pub fn card_emphasis(scroll_offset: f64, index: usize) -> CardEmphasis {
    let center = index as f64 * CARD_BAND_WIDTH;
    let input = [center - CARD_BAND_WIDTH, center, center + CARD_BAND_WIDTH];
    CardEmphasis {
        opacity: interpolate_clamped(
            &input,
            &[CARD_OPACITY_FLOOR, 1.0, CARD_OPACITY_FLOOR],
            scroll_offset,
        ),
        scale: interpolate_clamped(
            &input,
            &[CARD_SCALE_FLOOR, 1.0, CARD_SCALE_FLOOR],
            scroll_offset,
        ),
    }
}

/// Vertical drift (px) of the hero text. Moves at half the scroll speed in the
/// opposite direction, clamped at half a page height.
pub fn hero_parallax(scroll_offset: f64, page_height: f64) -> f64 {
    if page_height.is_nan() || page_height <= 0.0 {
        return 0.0;
    }
    interpolate_clamped(
        &[-page_height, 0.0, page_height],
        &[page_height / 2.0, 0.0, -page_height / 2.0],
        scroll_offset,
    )
}

pub fn translate_y_style(offset: f64) -> String {
    format!("transform: translateY({}px);", offset)
}
