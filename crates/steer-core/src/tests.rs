//! Unit tests for steer-core.

// ── Vec2 ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vec2_tests {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(a - b, Vec2::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, -0.5));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(Vec2::ZERO.distance(v), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).manhattan_distance(Vec2::new(4.0, -1.0)), 5.0);
    }

    #[test]
    fn normalized_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalized(), Vec2::ZERO);
        let unit = Vec2::new(0.0, -7.0).normalized();
        assert!((unit.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn at_speed_rescales() {
        let v = Vec2::new(10.0, 0.0).at_speed(3.2);
        assert!((v.length() - 3.2).abs() < 1e-5);
        assert_eq!(Vec2::ZERO.at_speed(3.2), Vec2::ZERO);
    }

    #[test]
    fn heading_roundtrip() {
        // 0° points along −Y.
        let up = Vec2::from_heading(0.0);
        assert!((up.x).abs() < 1e-6);
        assert!((up.y + 1.0).abs() < 1e-6);

        for deg in [0.0_f32, 45.0, 90.0, 135.0, 179.0] {
            let back = Vec2::from_heading(deg).heading_deg();
            assert!((back - deg).abs() < 1e-3, "heading {deg} came back as {back}");
        }
    }
}

// ── Angles ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod angle_tests {
    use crate::{clamp_magnitude, signed_degrees, wrap_degrees};

    #[test]
    fn wrap() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }

    #[test]
    fn signed() {
        assert_eq!(signed_degrees(90.0), 90.0);
        assert_eq!(signed_degrees(180.0), 180.0);
        assert_eq!(signed_degrees(270.0), -90.0);
        assert_eq!(signed_degrees(-10.0), -10.0);
    }

    #[test]
    fn clamp() {
        assert_eq!(clamp_magnitude(7.0, 6.5), 6.5);
        assert_eq!(clamp_magnitude(-7.0, 6.5), -6.5);
        assert_eq!(clamp_magnitude(1.0, 6.5), 1.0);
    }
}

// ── IDs ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod id_tests {
    use crate::{AgentId, VertexId};

    #[test]
    fn index_and_display() {
        assert_eq!(AgentId(5).index(), 5);
        assert_eq!(format!("{}", VertexId(9)), "VertexId(9)");
    }

    #[test]
    fn ordering_and_hash() {
        use std::collections::HashSet;
        assert!(VertexId(1) < VertexId(2));
        let set: HashSet<VertexId> = [VertexId(1), VertexId(1), VertexId(2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}

// ── Kinematics & limits ───────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics_tests {
    use crate::{Kinematics, MotionLimits, Vec2};

    #[test]
    fn default_is_at_rest() {
        let k = Kinematics::default();
        assert_eq!(k.position, Vec2::ZERO);
        assert_eq!(k.velocity, Vec2::ZERO);
        assert_eq!(k.orientation, 0.0);
    }

    #[test]
    fn at_places_position_only() {
        let k = Kinematics::at(Vec2::new(4.0, 5.0));
        assert_eq!(k.position, Vec2::new(4.0, 5.0));
        assert_eq!(k.velocity, Vec2::ZERO);
    }

    #[test]
    fn default_limits() {
        let l = MotionLimits::default();
        assert_eq!(l.max_speed, 3.2);
        assert_eq!(l.max_acceleration, 0.6);
        assert_eq!(l.max_angular_speed, 6.5);
        assert_eq!(l.max_angular_acceleration, 0.5);
    }
}

// ── RNG ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rng_tests {
    use crate::{AgentId, AgentRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(0));
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let xs: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..100 {
            let v: f32 = rng.gen_range(0.0..360.0);
            assert!((0.0..360.0).contains(&v));
        }
    }
}
