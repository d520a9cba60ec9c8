//! Sony S-Log3 style log curve, normalized-coefficient form.
//!
//! The curve is expressed directly on `[0, 1]` code values:
//!
//! ```text
//! V = A * log10(L + B) + C    if L >= CUT
//! V = D * L + E               otherwise
//! ```
//!
//! The coefficients are reproduced verbatim from the reference tables this
//! tool compares against. With them the log branch evaluates to about
//! -0.0735 at the cut while the toe segment ends near 0.0104, so the two
//! branches do not meet. [`decode`] therefore selects its branch in code
//! value space, against [`cut_value`], not against `CUT`: code values of
//! the toe segment lie above `cut_value()` and are decoded by the log
//! branch.
//!
//! # Range
//!
//! - Inputs are clamped to `[0, 1]` before evaluation. Log-branch code
//!   values below zero (linear values under [`zero_code_linear`]) are
//!   therefore not recoverable by [`decode`].

/// Log-branch scale.
pub const A: f64 = 0.432699;
/// Log-branch linear offset.
pub const B: f64 = 0.009468;
/// Log-branch code value offset.
pub const C: f64 = 0.655;
/// Toe slope.
pub const D: f64 = 0.037584;
/// Toe offset.
pub const E: f64 = 0.01;
/// Linear value where the log branch starts.
pub const CUT: f64 = 0.01125;

/// Code value of [`CUT`], the decode branch threshold.
#[inline]
pub fn cut_value() -> f64 {
    encode(CUT)
}

/// Linear value whose log-branch code value is exactly zero.
///
/// `decode(encode(l)) == l` (to rounding) holds for `l` in
/// `[zero_code_linear(), 1]`.
#[inline]
pub fn zero_code_linear() -> f64 {
    10.0_f64.powf(-C / A) - B
}

/// Log encode: linear to code value.
///
/// # Example
///
/// ```rust
/// use lutcmp_transfer::s_log3::encode;
///
/// assert!((encode(0.18) - 0.3424).abs() < 1e-4);
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    let l = linear.clamp(0.0, 1.0);
    if l >= CUT {
        A * (l + B).log10() + C
    } else {
        D * l + E
    }
}

/// Log decode: code value to linear.
///
/// Inverse of each [`encode`] branch; the branch is picked by comparing
/// the code value with [`cut_value`].
#[inline]
pub fn decode(code: f64) -> f64 {
    let v = code.clamp(0.0, 1.0);
    if v >= cut_value() {
        10.0_f64.powf((v - C) / A) - B
    } else {
        (v - E) / D
    }
}

/// Applies log encoding to RGB.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(encode)
}

/// Applies log decoding to RGB.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(decode)
}

/// Log-encodes every sample.
pub fn encode_all(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(encode).collect()
}

/// Log-decodes every sample.
pub fn decode_all(values: &[f64]) -> Vec<f64> {
    values.iter().copied().map(decode).collect()
}
