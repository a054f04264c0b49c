//! Damped spring toward a target position
//!
//! Each axis follows the closed-form solution of a damped harmonic
//! oscillator released from rest, so sampling is exact for any frame
//! spacing. The spring settles (snaps to the target) once both axes are
//! within the rest displacement and slower than the rest speed.

use std::time::Instant;

use crate::config::SpringConfig;
use crate::geometry::Vector2;

#[derive(Debug, Clone)]
pub struct SpringAnimation {
    from: Vector2,
    to: Vector2,
    cfg: SpringConfig,
    started_at: Option<Instant>,
}

/// Displacement from the target and velocity of one axis at time `t` (s).
#[derive(Debug, Clone, Copy)]
struct AxisState {
    offset: f32,
    velocity: f32,
}

impl SpringAnimation {
    pub fn new(from: Vector2, to: Vector2, cfg: SpringConfig) -> Self {
        Self {
            from,
            to,
            cfg,
            started_at: None,
        }
    }

    /// Returns the value for `now` and whether the spring has settled.
    pub fn sample(&mut self, now: Instant) -> (Vector2, bool) {
        let started = *self.started_at.get_or_insert(now);
        let t = now.saturating_duration_since(started).as_secs_f32();

        let x = self.axis(self.to.x - self.from.x, t);
        let y = self.axis(self.to.y - self.from.y, t);

        let at_rest = |axis: AxisState| {
            axis.offset.abs() <= self.cfg.rest_displacement
                && axis.velocity.abs() <= self.cfg.rest_speed
        };
        if at_rest(x) && at_rest(y) {
            return (self.to, true);
        }

        let value = Vector2::new(self.to.x - x.offset, self.to.y - y.offset);
        (value, false)
    }

    /// `x0` is the initial distance to travel (target - start).
    fn axis(&self, x0: f32, t: f32) -> AxisState {
        if x0 == 0.0 {
            return AxisState {
                offset: 0.0,
                velocity: 0.0,
            };
        }
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.cfg;
        let omega0 = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin, cos) = (omega1 * t).sin_cos();
            let a = zeta * omega0 * x0 / omega1;
            let offset = envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (a * sin + x0 * cos)
                - envelope * (a * omega1 * cos - x0 * omega1 * sin);
            AxisState { offset, velocity }
        } else {
            // Critically damped or overdamped: treat as critical.
            let envelope = (-omega0 * t).exp();
            let offset = envelope * (x0 + omega0 * x0 * t);
            let velocity = envelope * omega0 * omega0 * x0 * t;
            AxisState { offset, velocity }
        }
    }
}
