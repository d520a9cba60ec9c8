//! Rec.709 (BT.709) transfer function.
//!
//! The Rec.709 OETF is the display encoding applied to the LUT output
//! before luminance is measured. Note that the commonly used Rec.709 EOTF
//! is actually BT.1886 (gamma 2.4), not the inverse of the OETF.
//!
//! # Range
//!
//! - Input/Output: [0, 1], inputs clamped
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Rec.709 OETF: Encodes linear to Rec.709.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(linear: f64) -> f64 {
    let l = linear.clamp(0.0, 1.0);
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Rec.709 inverse OETF: Decodes Rec.709 to linear.
///
/// Note: For display, use BT.1886 (gamma 2.4) instead.
#[inline]
pub fn eotf(code: f64) -> f64 {
    let v = code.clamp(0.0, 1.0);
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Applies Rec.709 OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

/// Applies Rec.709 inverse OETF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies the OETF to every sample.
pub fn oetf_all(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(oetf).collect()
}
