//! Piecewise-linear interpolation and the tilt mapping for the top card

use crate::config::RotationConfig;
use crate::error::{DeckError, Result};

/// Piecewise-linear map with clamped extrapolation.
///
/// Inputs outside the first/last stop take the output of that stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl Interpolation {
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> Result<Self> {
        if input.len() < 2 {
            return Err(DeckError::InvalidInterpolation(format!(
                "need at least two stops, got {}",
                input.len()
            )));
        }
        if input.len() != output.len() {
            return Err(DeckError::InvalidInterpolation(format!(
                "input has {} stops but output has {}",
                input.len(),
                output.len()
            )));
        }
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(DeckError::InvalidInterpolation(
                "stops must be finite".into(),
            ));
        }
        if input.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DeckError::InvalidInterpolation(
                "input stops must be strictly increasing".into(),
            ));
        }
        Ok(Self { input, output })
    }

    pub fn map(&self, value: f32) -> f32 {
        let last = self.input.len() - 1;
        if value <= self.input[0] {
            return self.output[0];
        }
        if value >= self.input[last] {
            return self.output[last];
        }
        // First segment whose upper stop reaches the value.
        let segment = self
            .input
            .windows(2)
            .position(|pair| value <= pair[1])
            .unwrap_or(last - 1);
        let (x0, x1) = (self.input[segment], self.input[segment + 1]);
        let (y0, y1) = (self.output[segment], self.output[segment + 1]);
        y0 + (value - x0) / (x1 - x0) * (y1 - y0)
    }
}

/// Maps horizontal displacement to a rotation angle in degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMapping {
    curve: Interpolation,
}

impl RotationMapping {
    /// `[-f*w, 0, f*w] -> [-max, 0, max]` for screen width `w` and domain
    /// factor `f`.
    pub fn for_screen(screen_width: f32, cfg: &RotationConfig) -> Result<Self> {
        let edge = screen_width * cfg.domain_factor;
        let curve = Interpolation::new(
            vec![-edge, 0.0, edge],
            vec![-cfg.max_degrees, 0.0, cfg.max_degrees],
        )?;
        Ok(Self { curve })
    }

    pub fn degrees(&self, dx: f32) -> f32 {
        self.curve.map(dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 400.0;

    fn mapping() -> RotationMapping {
        RotationMapping::for_screen(WIDTH, &RotationConfig::default()).unwrap()
    }

    #[test]
    fn hits_the_stops() {
        let m = mapping();
        assert_eq!(m.degrees(0.0), 0.0);
        assert_eq!(m.degrees(1.5 * WIDTH), 120.0);
        assert_eq!(m.degrees(-1.5 * WIDTH), -120.0);
        assert!((m.degrees(0.75 * WIDTH) - 60.0).abs() < 1e-4);
    }

    #[test]
    fn clamps_outside_the_domain() {
        let m = mapping();
        assert_eq!(m.degrees(-10.0 * WIDTH), m.degrees(-1.5 * WIDTH));
        assert_eq!(m.degrees(10.0 * WIDTH), m.degrees(1.5 * WIDTH));
    }

    #[test]
    fn monotonic_and_continuous_across_domain() {
        let m = mapping();
        let mut prev = m.degrees(-3.0 * WIDTH);
        let mut dx = -3.0 * WIDTH;
        while dx <= 3.0 * WIDTH {
            let next = m.degrees(dx);
            assert!(next >= prev);
            // 1px step never moves the tilt by more than the slope allows.
            assert!(next - prev <= 120.0 / (1.5 * WIDTH) + 1e-4);
            prev = next;
            dx += 1.0;
        }
    }

    #[test]
    fn rejects_bad_stops() {
        assert!(Interpolation::new(vec![0.0], vec![0.0]).is_err());
        assert!(Interpolation::new(vec![0.0, 1.0], vec![0.0]).is_err());
        assert!(Interpolation::new(vec![1.0, 1.0], vec![0.0, 1.0]).is_err());
        assert!(
            Interpolation::new(vec![0.0, f32::INFINITY], vec![0.0, 1.0])
                .is_err()
        );
    }

    #[test]
    fn multi_segment_map() {
        let curve =
            Interpolation::new(vec![0.0, 10.0, 20.0], vec![0.0, 100.0, 0.0])
                .unwrap();
        assert_eq!(curve.map(5.0), 50.0);
        assert_eq!(curve.map(15.0), 50.0);
        assert_eq!(curve.map(25.0), 0.0);
    }
}
