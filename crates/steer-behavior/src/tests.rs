//! Unit tests for steer-behavior.

#[cfg(test)]
mod helpers {
    use steer_core::{AgentId, AgentRng, Kinematics, MotionLimits};

    use crate::{EmptyWorld, StepContext, TargetResolver};

    pub fn rng() -> AgentRng {
        AgentRng::new(42, AgentId(0))
    }

    pub fn ctx<'a>(character: &'a Kinematics) -> StepContext<'a> {
        StepContext::new(character, MotionLimits::DEFAULT, &EmptyWorld)
    }

    pub fn ctx_in<'a>(
        character: &'a Kinematics,
        world: &'a dyn TargetResolver,
    ) -> StepContext<'a> {
        StepContext::new(character, MotionLimits::DEFAULT, world)
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod output_tests {
    use steer_core::Vec2;

    use crate::Output;

    #[test]
    fn default_weight_is_one() {
        assert_eq!(Output::none().weight, 1.0);
    }

    #[test]
    fn none_contributes_nothing() {
        let o = Output::none();
        assert!(o.is_none());
        assert!(o.delta_position.is_none());
        assert!(o.delta_velocity.is_none());
        assert!(o.delta_acceleration.is_none());
    }

    #[test]
    fn builders() {
        let v = Output::velocity(Vec2::new(1.0, 2.0));
        assert_eq!(v.delta_velocity, Some(Vec2::new(1.0, 2.0)));
        assert!(v.delta_acceleration.is_none());

        let a = Output::acceleration(Vec2::new(0.5, 0.0)).with_weight(0.25);
        assert_eq!(a.weight, 0.25);

        let o = Output::orientation(10.0);
        assert_eq!(o.delta_orientation, 10.0);
        assert!(!o.is_none());
    }
}

// ── Blender ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod blend_tests {
    use steer_core::Vec2;

    use crate::{blend, BlendMode, Output};

    #[test]
    fn additive_sums_present_fields() {
        let mut outputs = vec![
            Output::acceleration(Vec2::new(1.0, 0.0)),
            Output::acceleration(Vec2::new(0.0, 1.0)),
        ];
        let out = blend(&mut outputs, BlendMode::Additive);
        assert_eq!(out.delta_acceleration, Some(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn additive_ignores_weight_and_sums_scalars() {
        let mut outputs = vec![
            Output::orientation(10.0).with_weight(0.0),
            Output::orientation(5.0).with_weight(3.0),
            Output::velocity(Vec2::new(1.0, 0.0)),
        ];
        let out = blend(&mut outputs, BlendMode::Additive);
        assert_eq!(out.delta_orientation, 15.0);
        assert_eq!(out.delta_velocity, Some(Vec2::new(1.0, 0.0)));
        // Nothing supplied an acceleration, so none is reported.
        assert!(out.delta_acceleration.is_none());
    }

    #[test]
    fn average_divides_by_contributor_count() {
        let mut outputs = vec![
            Output::acceleration(Vec2::new(2.0, 0.0)),
            Output::acceleration(Vec2::new(0.0, 2.0)),
            Output::velocity(Vec2::new(9.0, 9.0)), // no acceleration: not counted
        ];
        let out = blend(&mut outputs, BlendMode::Average);
        assert_eq!(out.delta_acceleration, Some(Vec2::new(1.0, 1.0)));
        // Average touches only the acceleration fields.
        assert!(out.delta_velocity.is_none());
    }

    #[test]
    fn average_with_no_contributors_is_no_change() {
        let mut outputs = vec![Output::velocity(Vec2::new(1.0, 0.0)), Output::none()];
        let out = blend(&mut outputs, BlendMode::Average);
        assert!(out.delta_acceleration.is_none());
        assert_eq!(out.delta_angular_acceleration, 0.0);
        assert!(!out.delta_angular_acceleration.is_nan());
    }

    #[test]
    fn weighted_average_uses_legacy_semantics() {
        // Weighted contributions summed, divided by contributor count (2),
        // not by the weight sum: ((2,0)*0.5 + (0,2)*1.0) / 2 = (0.5, 1.0).
        let mut outputs = vec![
            Output::acceleration(Vec2::new(2.0, 0.0)).with_weight(0.5),
            Output::acceleration(Vec2::new(0.0, 2.0)).with_weight(1.0),
        ];
        let out = blend(&mut outputs, BlendMode::WeightedAverage);
        assert_eq!(out.delta_acceleration, Some(Vec2::new(0.5, 1.0)));
    }

    #[test]
    fn weighted_average_angular() {
        let mut outputs = vec![
            Output::angular(0.0, 1.0).with_weight(0.5),
            Output::angular(0.0, 2.0).with_weight(1.0),
        ];
        let out = blend(&mut outputs, BlendMode::WeightedAverage);
        assert_eq!(out.delta_angular_acceleration, (0.5 + 2.0) / 2.0);
    }

    #[test]
    fn every_mode_drains_the_buffer() {
        for mode in [BlendMode::Additive, BlendMode::Average, BlendMode::WeightedAverage] {
            let mut outputs = vec![Output::acceleration(Vec2::new(1.0, 1.0))];
            blend(&mut outputs, mode);
            assert!(outputs.is_empty(), "{mode:?} must clear the buffer");
        }
    }
}

// ── Kinematic behaviors ───────────────────────────────────────────────────────

#[cfg(test)]
mod kinematic_tests {
    use steer_core::{Kinematics, Vec2};

    use super::helpers::{ctx, rng};
    use crate::{Behavior, KinematicArrive, KinematicFace, KinematicSeek, KinematicWander, Target};

    #[test]
    fn seek_is_single_shot_full_speed() {
        let character = Kinematics::default();
        let mut b = KinematicSeek::new(Target::Point(Vec2::new(100.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert_eq!(out.delta_velocity, Some(Vec2::new(3.2, 0.0)));
        assert!(b.is_finished());
    }

    #[test]
    fn seek_subtracts_current_velocity() {
        let character = Kinematics {
            velocity: Vec2::new(1.0, 1.0),
            ..Kinematics::default()
        };
        let mut b = KinematicSeek::new(Target::Point(Vec2::new(100.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert_eq!(out.delta_velocity, Some(Vec2::new(3.2 - 1.0, -1.0)));
    }

    #[test]
    fn arrive_stops_inside_radius() {
        let character = Kinematics {
            velocity: Vec2::new(2.0, 0.0),
            ..Kinematics::default()
        };
        let mut b = KinematicArrive::new(Target::Point(Vec2::new(10.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert_eq!(out.delta_velocity, Some(Vec2::new(-2.0, 0.0)));
        assert!(b.is_finished());
    }

    #[test]
    fn arrive_chases_outside_radius() {
        let character = Kinematics::default();
        let mut b = KinematicArrive::new(Target::Point(Vec2::new(100.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert_eq!(out.delta_velocity, Some(Vec2::new(3.2, 0.0)));
        assert!(!b.is_finished());
    }

    #[test]
    fn face_turns_in_even_steps() {
        // Target due +X of the character: goal heading is 90°.
        let character = Kinematics::default();
        let mut b = KinematicFace::new(Target::Point(Vec2::new(50.0, 0.0)));
        let mut total = 0.0;
        let mut steps = 0;
        let mut r = rng();
        while !b.is_finished() {
            total += b.step(&ctx(&character), &mut r).delta_orientation;
            steps += 1;
            assert!(steps <= 16, "face never finished");
        }
        assert_eq!(steps, 9);
        assert!((total - 90.0).abs() < 1e-3, "turned {total} instead of 90");
    }

    #[test]
    fn face_heading_target() {
        let character = Kinematics {
            orientation: 10.0,
            ..Kinematics::default()
        };
        let mut b = KinematicFace::new(Target::Heading(-80.0));
        let out = b.step(&ctx(&character), &mut rng());
        assert!((out.delta_orientation - (-10.0)).abs() < 1e-3); // -90 over 9 steps
    }

    #[test]
    fn face_already_facing_finishes_immediately() {
        let character = Kinematics::default();
        let mut b = KinematicFace::new(Target::Heading(0.0));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(out.is_none());
        assert!(b.is_finished());
    }

    #[test]
    fn face_unresolvable_target_finishes() {
        let character = Kinematics::default();
        let mut b = KinematicFace::new(Target::Agent(steer_core::AgentId(7)));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(out.is_none());
        assert!(b.is_finished());
    }

    #[test]
    fn wander_first_step_commits_to_orientation() {
        let character = Kinematics::default(); // facing 0° = −Y
        let mut b = KinematicWander::new();
        let out = b.step(&ctx(&character), &mut rng());
        let dv = out.delta_velocity.unwrap();
        assert!(dv.x.abs() < 1e-5);
        assert!((dv.y + 3.2).abs() < 1e-5);
        assert!(!b.is_finished());
    }

    #[test]
    fn wander_is_deterministic_per_seed() {
        let character = Kinematics::default();
        let mut a = KinematicWander::new();
        let mut b = KinematicWander::new();
        let mut ra = rng();
        let mut rb = rng();
        for _ in 0..200 {
            assert_eq!(a.step(&ctx(&character), &mut ra), b.step(&ctx(&character), &mut rb));
        }
    }

    #[test]
    fn wander_finishes_after_lifetime() {
        let character = Kinematics::default();
        let mut b = KinematicWander::new();
        let mut r = rng();
        for _ in 0..=KinematicWander::LIFETIME + 1 {
            b.step(&ctx(&character), &mut r);
        }
        assert!(b.is_finished());
        assert!(b.target().is_none());
    }
}

// ── Steering behaviors ────────────────────────────────────────────────────────

#[cfg(test)]
mod steering_tests {
    use steer_core::{Kinematics, Vec2};

    use super::helpers::{ctx, rng};
    use crate::{Behavior, SteeringAlign, SteeringArrive, SteeringSeek, SteeringWander, Target};

    #[test]
    fn seek_accelerates_toward_target() {
        let character = Kinematics::default();
        let mut b = SteeringSeek::new(Target::Point(Vec2::new(100.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert_eq!(out.delta_acceleration, Some(Vec2::new(0.6, 0.0)));
        // At rest, neither aligned nor inside the radius.
        assert!(!b.is_finished());
    }

    #[test]
    fn seek_finishes_when_aligned() {
        let character = Kinematics {
            velocity: Vec2::new(2.0, 0.0),
            ..Kinematics::default()
        };
        let mut b = SteeringSeek::new(Target::Point(Vec2::new(100.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(b.is_finished());
        // The finishing step still contributes its correction.
        assert!(out.delta_acceleration.is_some());
    }

    #[test]
    fn seek_finishes_inside_radius() {
        let character = Kinematics {
            velocity: Vec2::new(0.0, 1.0), // not aligned
            ..Kinematics::default()
        };
        let mut b = SteeringSeek::new(Target::Point(Vec2::new(10.0, 0.0)));
        b.step(&ctx(&character), &mut rng());
        assert!(b.is_finished());
    }

    #[test]
    fn arrive_full_speed_outside_deceleration_radius() {
        let character = Kinematics::default();
        let mut b = SteeringArrive::new(Target::Point(Vec2::new(200.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        // (goal velocity 3.2 − 0) / 5 ticks = 0.64.
        let a = out.delta_acceleration.unwrap();
        assert!((a.x - 0.64).abs() < 1e-4);
        assert!(a.y.abs() < 1e-6);
    }

    #[test]
    fn arrive_eases_off_inside_deceleration_radius() {
        let character = Kinematics::default();
        let mut b = SteeringArrive::new(Target::Point(Vec2::new(55.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        // Goal speed scales with distance: 3.2 × 55/110 = 1.6 → 0.32 per tick.
        let a = out.delta_acceleration.unwrap();
        assert!((a.x - 0.32).abs() < 1e-4);
    }

    #[test]
    fn arrive_kills_motion_inside_satisfaction_radius() {
        let character = Kinematics {
            velocity: Vec2::new(3.0, 0.0),
            acceleration: Vec2::new(0.5, 0.0),
            ..Kinematics::default()
        };
        let mut b = SteeringArrive::new(Target::Point(Vec2::new(10.0, 0.0)));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(b.is_finished());
        assert_eq!(out.delta_velocity, Some(Vec2::new(-3.0, 0.0)));
        assert_eq!(out.delta_acceleration, Some(Vec2::new(-0.5, 0.0)));
    }

    #[test]
    fn align_rotates_toward_goal() {
        let character = Kinematics::default();
        let mut b = SteeringAlign::new(Target::Heading(90.0));
        let out = b.step(&ctx(&character), &mut rng());
        // Rotation 90 > deceleration radius → full angular speed 6.5;
        // correction (6.5 − 0)/15 ≈ 0.433, under the 0.5 cap.
        assert!((out.delta_angular_acceleration - 6.5 / 15.0).abs() < 1e-4);
        assert!(!b.is_finished());
    }

    #[test]
    fn align_stops_inside_satisfaction_radius() {
        let character = Kinematics {
            orientation: 88.0,
            angular_velocity: 2.0,
            angular_acceleration: 0.3,
            ..Kinematics::default()
        };
        let mut b = SteeringAlign::new(Target::Heading(90.0));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(b.is_finished());
        assert_eq!(out.delta_angular_velocity, -2.0);
        assert_eq!(out.delta_angular_acceleration, -0.3);
    }

    #[test]
    fn align_caps_angular_acceleration() {
        let character = Kinematics {
            angular_velocity: -6.5,
            ..Kinematics::default()
        };
        let mut b = SteeringAlign::new(Target::Heading(90.0));
        let out = b.step(&ctx(&character), &mut rng());
        assert!(out.delta_angular_acceleration <= 0.5 + 1e-6);
    }

    #[test]
    fn wander_delegates_to_inner_seek() {
        let character = Kinematics::default();
        let mut b = SteeringWander::endless();
        let out = b.step(&ctx(&character), &mut rng());
        // The first step picks a seek point and emits its correction.
        assert!(out.delta_acceleration.is_some());
        assert!(b.target().is_none());
        assert!(!b.is_finished());
    }

    #[test]
    fn wander_timed_finishes() {
        let character = Kinematics::default();
        let mut b = SteeringWander::timed(10);
        let mut r = rng();
        for _ in 0..12 {
            b.step(&ctx(&character), &mut r);
        }
        assert!(b.is_finished());
    }

    #[test]
    fn wander_is_deterministic_per_seed() {
        let character = Kinematics::default();
        let mut a = SteeringWander::endless();
        let mut b = SteeringWander::endless();
        let mut ra = rng();
        let mut rb = rng();
        for _ in 0..160 {
            assert_eq!(a.step(&ctx(&character), &mut ra), b.step(&ctx(&character), &mut rb));
        }
    }
}

// ── Contract & factory ────────────────────────────────────────────────────────

#[cfg(test)]
mod contract_tests {
    use steer_core::{AgentId, Kinematics, Vec2};

    use super::helpers::{ctx_in, rng};
    use crate::{
        build_behavior, Behavior, BehaviorKind, KinematicSeek, Target, TargetResolver,
    };

    /// A resolver with exactly one known agent.
    struct OneAgent {
        id: AgentId,
        kinematics: Kinematics,
    }

    impl TargetResolver for OneAgent {
        fn kinematics(&self, agent: AgentId) -> Option<Kinematics> {
            (agent == self.id).then_some(self.kinematics)
        }
    }

    #[test]
    fn agent_targets_resolve_to_pre_tick_state() {
        let world = OneAgent {
            id: AgentId(3),
            kinematics: Kinematics::at(Vec2::new(100.0, 0.0)),
        };
        let character = Kinematics::default();
        let mut b = KinematicSeek::new(Target::Agent(AgentId(3)));
        let out = b.step(&ctx_in(&character, &world), &mut rng());
        assert_eq!(out.delta_velocity, Some(Vec2::new(3.2, 0.0)));
    }

    #[test]
    fn factory_requires_targets_where_needed() {
        for kind in BehaviorKind::ALL {
            let built = build_behavior(kind, None);
            let needs_target = !matches!(
                kind,
                BehaviorKind::KinematicWander | BehaviorKind::SteeringWander
            );
            assert_eq!(built.is_none(), needs_target, "{kind:?}");
        }
    }

    #[test]
    fn factory_builds_every_kind_with_a_target() {
        let target = Some(Target::Point(Vec2::new(1.0, 2.0)));
        for kind in BehaviorKind::ALL {
            assert!(build_behavior(kind, target).is_some(), "{kind:?}");
        }
    }

    #[test]
    fn kind_indices_match_all_order() {
        for (i, kind) in BehaviorKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn chases_target_covers_seek_and_arrive() {
        assert!(BehaviorKind::KinematicSeek.chases_target());
        assert!(BehaviorKind::SteeringArrive.chases_target());
        assert!(!BehaviorKind::KinematicFace.chases_target());
        assert!(!BehaviorKind::SteeringWander.chases_target());
    }
}
