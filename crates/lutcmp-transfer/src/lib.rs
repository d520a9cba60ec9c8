//! # lutcmp-transfer
//!
//! Transfer functions used by the LUT comparison pipeline.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **Log curve**: camera encoding compressing scene range into `[0, 1]`
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`s_log3`] | Camera log (S-Log3 style coefficients) | [0, 1] |
//! | [`rec709`] | HDTV display encoding | [0, 1] |
//!
//! All functions operate on `f64`, clamp their input to `[0, 1]` and come
//! in scalar, RGB and slice forms.
//!
//! # Usage
//!
//! ```rust
//! use lutcmp_transfer::{s_log3, rec709};
//!
//! let code = s_log3::encode(0.18);
//! let display = rec709::oetf(s_log3::decode(code));
//! assert!((display - rec709::oetf(0.18)).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `lutcmp-color` - Comparison pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod rec709;
pub mod s_log3;

pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
pub use s_log3::{decode as s_log3_decode, encode as s_log3_encode};
