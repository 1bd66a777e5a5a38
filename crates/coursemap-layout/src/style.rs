//! Per-node presentation: marker size, opacity, fill emphasis, and the
//! department pie shares drawn for multi-code nodes.

use coursemap_core::annotate::{AnnotatedNode, ViewMode};
use coursemap_core::model::{MergedNode, department_of};

use crate::model::{DepartmentShare, NodeStyle};

const BASE_RADIUS: f64 = 7.0;
const SINGLE_VIEW_HIGHLIGHT_RADIUS: f64 = 18.0;
const HISTORY_SEARCH_RADIUS: f64 = 15.0;
const HISTORY_TAKEN_RADIUS: f64 = 14.0;
const DIMMED_OPACITY: f64 = 0.5;

/// Non-circular markers occupy more visual area at equal nominal size, so
/// they are drawn smaller.
const SINGLE_CODE_SHAPE_SCALE: f64 = 0.7;
const MULTI_CODE_SHAPE_SCALE: f64 = 0.8;

const EMPHASIS_SATURATION: f64 = 1.5;
const EMPHASIS_LIGHTNESS: f64 = 1.2;
/// Per-matched-code boost for multi-code nodes in single-semester view.
const EMPHASIS_SATURATION_PER_MATCH: f64 = 0.2;
const EMPHASIS_LIGHTNESS_PER_MATCH: f64 = 0.1;
const LIGHTNESS_CEILING: f64 = 0.7;

/// Marker size and opacity for one annotated node under the current view.
pub fn node_style(node: &AnnotatedNode, view_mode: ViewMode) -> NodeStyle {
    let (radius, opacity) = match view_mode {
        ViewMode::History => {
            let radius = if node.highlighted {
                HISTORY_SEARCH_RADIUS
            } else if node.history_highlighted {
                HISTORY_TAKEN_RADIUS
            } else {
                BASE_RADIUS
            };
            let opacity = if node.highlighted || node.history_highlighted {
                1.0
            } else {
                DIMMED_OPACITY
            };
            (radius, opacity)
        }
        ViewMode::SingleSemester => {
            let radius = if node.highlight_count > 0 {
                SINGLE_VIEW_HIGHLIGHT_RADIUS
            } else {
                BASE_RADIUS
            };
            (radius, 1.0)
        }
    };

    let shape_scale = if node.node.shape.is_circular() {
        1.0
    } else if node.node.is_multi_code() {
        MULTI_CODE_SHAPE_SCALE
    } else {
        SINGLE_CODE_SHAPE_SCALE
    };

    NodeStyle {
        radius,
        opacity,
        shape_scale,
    }
}

/// Fill color for a node: the department color, saturated and brightened
/// when the node is emphasized by the current view. Multi-code nodes in
/// single-semester view intensify with the number of matched codes.
pub fn node_fill(base_color: &str, node: &AnnotatedNode, view_mode: ViewMode) -> String {
    let boost = match view_mode {
        ViewMode::History if node.history_highlighted => {
            Some((EMPHASIS_SATURATION, EMPHASIS_LIGHTNESS))
        }
        ViewMode::SingleSemester if node.highlight_count > 0 => {
            if node.node.is_multi_code() {
                let n = node.highlight_count as f64;
                Some((
                    EMPHASIS_SATURATION + EMPHASIS_SATURATION_PER_MATCH * n,
                    EMPHASIS_LIGHTNESS + EMPHASIS_LIGHTNESS_PER_MATCH * n,
                ))
            } else {
                Some((EMPHASIS_SATURATION, EMPHASIS_LIGHTNESS))
            }
        }
        _ => None,
    };

    match boost.and_then(|(s_mul, l_mul)| emphasize_hex(base_color, s_mul, l_mul)) {
        Some(color) => color,
        None => base_color.to_string(),
    }
}

/// Department pie shares of a node, weighted by how many member codes each
/// department contributes. Slices are sorted by department name so segment
/// order is stable across passes; angles are degrees clockwise from the
/// top. Single-department nodes yield one full-circle share.
pub fn department_shares(node: &MergedNode) -> Vec<DepartmentShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for code in &node.all_codes {
        let department = department_of(code);
        match counts.iter_mut().find(|(d, _)| *d == department) {
            Some((_, count)) => *count += 1,
            None => counts.push((department, 1)),
        }
    }
    counts.sort_by(|(a, _), (b, _)| a.cmp(b));

    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares = Vec::with_capacity(counts.len());
    let mut angle = 0.0;
    for (department, count) in counts {
        let fraction = count as f64 / total as f64;
        let end_angle = angle + fraction * 360.0;
        shares.push(DepartmentShare {
            department: department.to_string(),
            fraction,
            start_angle: angle,
            end_angle,
        });
        angle = end_angle;
    }
    shares
}

#[derive(Debug, Clone, Copy)]
struct Rgb01 {
    r: f64,
    g: f64,
    b: f64,
}

#[derive(Debug, Clone, Copy)]
struct Hsl {
    h_deg: f64,
    s: f64,
    l: f64,
}

fn parse_hex_rgb01(s: &str) -> Option<Rgb01> {
    let hex = s.trim().strip_prefix('#')?;
    let (r, g, b) = match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            (r, g, b)
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            (r, g, b)
        }
        _ => return None,
    };
    Some(Rgb01 {
        r: (r as f64) / 255.0,
        g: (g as f64) / 255.0,
        b: (b as f64) / 255.0,
    })
}

fn rgb01_to_hex(rgb: Rgb01) -> String {
    let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb.r),
        to_byte(rgb.g),
        to_byte(rgb.b)
    )
}

fn rgb01_to_hsl(rgb: Rgb01) -> Hsl {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl { h_deg: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == rgb.r {
        (rgb.g - rgb.b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
    } else if max == rgb.g {
        (rgb.b - rgb.r) / d + 2.0
    } else {
        (rgb.r - rgb.g) / d + 4.0
    };
    Hsl {
        h_deg: h * 60.0,
        s,
        l,
    }
}

fn hsl_to_rgb01(hsl: Hsl) -> Rgb01 {
    let h = (hsl.h_deg.rem_euclid(360.0)) / 360.0;
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Rgb01 { r: l, g: l, b: l };
    }

    fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgb01 {
        r: hue_to_channel(p, q, h + 1.0 / 3.0),
        g: hue_to_channel(p, q, h),
        b: hue_to_channel(p, q, h - 1.0 / 3.0),
    }
}

/// Saturation/lightness boost in HSL space. Saturation clamps to full;
/// lightness clamps to a ceiling so pastel fills stay dark enough to read
/// against a light background. `None` when the input is not a hex color.
fn emphasize_hex(hex: &str, saturation_mul: f64, lightness_mul: f64) -> Option<String> {
    let mut hsl = rgb01_to_hsl(parse_hex_rgb01(hex)?);
    hsl.s = (hsl.s * saturation_mul).min(1.0);
    hsl.l = (hsl.l * lightness_mul).min(LIGHTNESS_CEILING);
    Some(rgb01_to_hex(hsl_to_rgb01(hsl)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_hsl_round_trip_is_stable() {
        for hex in ["#fbb4ae", "#b3cde3", "#4a4a4a", "#999", "#fff"] {
            let rgb = parse_hex_rgb01(hex).unwrap();
            let back = rgb01_to_hex(hsl_to_rgb01(rgb01_to_hsl(rgb)));
            let expanded = if hex.len() == 4 {
                let h = &hex[1..];
                format!(
                    "#{}{}{}{}{}{}",
                    &h[0..1],
                    &h[0..1],
                    &h[1..2],
                    &h[1..2],
                    &h[2..3],
                    &h[2..3]
                )
            } else {
                hex.to_string()
            };
            assert_eq!(back, expanded);
        }
    }

    #[test]
    fn emphasis_raises_saturation_and_clamps_lightness() {
        let base = parse_hex_rgb01("#fbb4ae").unwrap();
        let base_hsl = rgb01_to_hsl(base);

        let boosted = emphasize_hex("#fbb4ae", 1.5, 1.2).unwrap();
        let boosted_hsl = rgb01_to_hsl(parse_hex_rgb01(&boosted).unwrap());

        assert!(boosted_hsl.s >= base_hsl.s);
        assert!(boosted_hsl.l <= LIGHTNESS_CEILING + 1e-9);
    }

    #[test]
    fn non_hex_input_is_left_alone() {
        assert!(emphasize_hex("rgb(1,2,3)", 1.5, 1.2).is_none());
        assert!(emphasize_hex("#12", 1.5, 1.2).is_none());
    }
}
