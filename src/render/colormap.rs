use plotters::style::RGBColor;

// Viridis anchor points, dark purple to bright yellow.
const SEQUENTIAL_ANCHORS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

// Dark red through white to dark green; white sits at the midpoint so a
// zero-centered normalization maps break-even cells to white.
const DIVERGING_ANCHORS: [(u8, u8, u8); 3] = [(204, 0, 0), (255, 255, 255), (0, 204, 0)];

/// Piecewise-linear interpolation across fixed RGB anchors, `t` in `[0, 1]`.
fn ramp(anchors: &[(u8, u8, u8)], t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let segments = anchors.len() - 1;
    let pos = t * segments as f64;
    let idx = (pos.floor() as usize).min(segments - 1);
    let frac = pos - idx as f64;

    let (r0, g0, b0) = anchors[idx];
    let (r1, g1, b1) = anchors[idx + 1];

    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Color for a price cell normalized into `[0, 1]`.
pub fn sequential(t: f64) -> RGBColor {
    ramp(&SEQUENTIAL_ANCHORS, t)
}

/// Color for a P&L cell normalized so losses land below 0.5 and gains above.
pub fn diverging(t: f64) -> RGBColor {
    ramp(&DIVERGING_ANCHORS, t)
}

/// Relative luminance of a cell color, used to keep annotations readable.
pub fn luminance(color: &RGBColor) -> f64 {
    (0.299 * color.0 as f64 + 0.587 * color.1 as f64 + 0.114 * color.2 as f64) / 255.0
}
