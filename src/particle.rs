// Particle record for the background field: position, per-frame velocity,
// and the fixed visual attributes (radius, opacity) chosen at spawn time.

use rand::Rng;
use vecmath::{self, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub const MIN_SIZE: f64 = 1.0;
    pub const MAX_SIZE: f64 = 4.0;
    pub const MAX_SPEED: f64 = 0.5;
    pub const MIN_OPACITY: f64 = 0.2;
    pub const MAX_OPACITY: f64 = 0.7;

    /// Spawns a particle uniformly inside `[0, width) x [0, height)` with
    /// velocity, radius, and opacity drawn from the field's spawn ranges.
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        Particle {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            speed_x: rng.gen::<f64>() * (Particle::MAX_SPEED * 2.0) - Particle::MAX_SPEED,
            speed_y: rng.gen::<f64>() * (Particle::MAX_SPEED * 2.0) - Particle::MAX_SPEED,
            size: rng.gen::<f64>() * (Particle::MAX_SIZE - Particle::MIN_SIZE)
                + Particle::MIN_SIZE,
            opacity: rng.gen::<f64>() * (Particle::MAX_OPACITY - Particle::MIN_OPACITY)
                + Particle::MIN_OPACITY,
        }
    }

    /// Advances one frame and reflects the velocity off the surface edges.
    ///
    /// Reflection negates the velocity component without clamping the
    /// position, so a particle may overshoot the edge by at most one
    /// frame's travel before the flipped velocity brings it back. A
    /// particle exactly on the boundary does not reflect.
    pub fn step(&self, width: f64, height: f64) -> Particle {
        let x = self.x + self.speed_x;
        let y = self.y + self.speed_y;
        let speed_x = if x > width || x < 0.0 {
            -self.speed_x
        } else {
            self.speed_x
        };
        let speed_y = if y > height || y < 0.0 {
            -self.speed_y
        } else {
            self.speed_y
        };
        Particle {
            x,
            y,
            speed_x,
            speed_y,
            ..*self
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        let a: Vector2<f64> = [self.x, self.y];
        let b: Vector2<f64> = [other.x, other.y];
        vecmath::vec2_len(vecmath::vec2_sub(a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn resting(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            speed_x: 0.0,
            speed_y: 0.0,
            size: 2.0,
            opacity: 0.5,
        }
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 800.0, 600.0);
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.size >= Particle::MIN_SIZE && p.size < Particle::MAX_SIZE);
            assert!(p.speed_x >= -Particle::MAX_SPEED && p.speed_x < Particle::MAX_SPEED);
            assert!(p.speed_y >= -Particle::MAX_SPEED && p.speed_y < Particle::MAX_SPEED);
            assert!(p.opacity >= Particle::MIN_OPACITY && p.opacity < Particle::MAX_OPACITY);
        }
    }

    #[test]
    fn step_advances_by_velocity() {
        let p = Particle {
            speed_x: 0.25,
            speed_y: -0.5,
            ..resting(10.0, 20.0)
        };
        let stepped = p.step(800.0, 600.0);
        assert_eq!(stepped.x, 10.25);
        assert_eq!(stepped.y, 19.5);
        assert_eq!(stepped.speed_x, 0.25);
        assert_eq!(stepped.speed_y, -0.5);
    }

    #[test]
    fn step_reflects_without_clamping() {
        let p = Particle {
            speed_x: 0.5,
            ..resting(799.8, 300.0)
        };
        let stepped = p.step(800.0, 600.0);
        // Overshoots by one frame's travel, velocity sign flips.
        assert_eq!(stepped.x, 800.3);
        assert_eq!(stepped.speed_x, -0.5);
        // The following frame heads back inside; no second flip.
        let back = stepped.step(800.0, 600.0);
        assert_eq!(back.x, 799.8);
        assert_eq!(back.speed_x, -0.5);
    }

    #[test]
    fn step_reflects_at_lower_edge() {
        let p = Particle {
            speed_y: -0.3,
            ..resting(400.0, 0.1)
        };
        let stepped = p.step(800.0, 600.0);
        assert!(stepped.y < 0.0);
        assert_eq!(stepped.speed_y, 0.3);
    }

    #[test]
    fn boundary_contact_is_not_a_crossing() {
        // Lands exactly on the edge: strict comparison, no reflection.
        let p = Particle {
            speed_x: 0.5,
            ..resting(799.5, 300.0)
        };
        let stepped = p.step(800.0, 600.0);
        assert_eq!(stepped.x, 800.0);
        assert_eq!(stepped.speed_x, 0.5);
    }

    #[test]
    fn overshoot_stays_bounded_over_many_frames() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut p = Particle::spawn(&mut rng, 200.0, 150.0);
            for _ in 0..10_000 {
                p = p.step(200.0, 150.0);
                assert!(p.x >= -p.speed_x.abs() && p.x <= 200.0 + p.speed_x.abs());
                assert!(p.y >= -p.speed_y.abs() && p.y <= 150.0 + p.speed_y.abs());
            }
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = resting(0.0, 0.0);
        let b = resting(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
