//! Interpolation settings for LUT evaluation.

/// How a 3D lookup treats grid positions outside `[0, 1]`.
///
/// 1D tables always clamp to their end nodes; this only affects 3D cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolation {
    /// Continue the boundary cell's trilinear gradient past the grid.
    ///
    /// Matches a regular-grid interpolator without bounds (no fill value).
    #[default]
    Gradient,

    /// Clamp the grid position to the nearest face of the cube.
    Clamp,
}

impl std::str::FromStr for Extrapolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gradient" | "extrapolate" => Ok(Self::Gradient),
            "clamp" => Ok(Self::Clamp),
            other => Err(format!("unknown extrapolation mode: {other}")),
        }
    }
}

/// Options for [`crate::sample_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleOptions {
    /// Out-of-grid policy for 3D tables.
    pub extrapolation: Extrapolation,
}

impl SampleOptions {
    /// Sets the 3D extrapolation policy.
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }
}

/// Linear blend between `a` and `b`.
///
/// Written as `a·(1−t) + b·t` so that `t = 0` and `t = 1` reproduce the
/// endpoints exactly.
#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_exact() {
        let (a, b) = (0.1234567, 0.9876543);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), (a + b) / 2.0);
    }

    #[test]
    fn parse_extrapolation() {
        assert_eq!("clamp".parse::<Extrapolation>(), Ok(Extrapolation::Clamp));
        assert_eq!("Gradient".parse::<Extrapolation>(), Ok(Extrapolation::Gradient));
        assert!("nearest".parse::<Extrapolation>().is_err());
    }
}
