#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use raptor_core::components::{AxisInputs, FlightState, Weapon};
    use raptor_core::config::{PawnTuning, WeaponTuning};
    use raptor_core::enums::{FireOutcome, TriggerMode, WeaponState};
    use raptor_core::types::Transform;

    use crate::flight::{self, FlightContext};
    use crate::interp::interp_to;
    use crate::rotation::{
        deflect_toward_normal, forward_angle_deg, from_pitch_yaw_roll, orientation_from_direction,
    };
    use crate::weapon;

    fn cruising_state(tuning: &PawnTuning) -> FlightState {
        FlightState {
            forward_speed: tuning.initial_speed,
            ..Default::default()
        }
    }

    fn run_steps(
        mut state: FlightState,
        inputs: AxisInputs,
        dt: f32,
        steps: usize,
        tuning: &PawnTuning,
    ) -> Vec<FlightState> {
        let mut history = Vec::with_capacity(steps);
        for _ in 0..steps {
            let update = flight::step(&FlightContext {
                state,
                inputs,
                dt,
                tuning,
            });
            state = update.state;
            history.push(state);
        }
        history
    }

    // ---- Interpolation ----

    #[test]
    fn test_interp_to_never_overshoots() {
        let mut current = 0.0;
        for _ in 0..200 {
            let next = interp_to(current, 100.0, 0.1, 2.0);
            assert!(next >= current, "approach should be monotonic");
            assert!(next <= 100.0, "approach should not overshoot");
            current = next;
        }
        assert!((current - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_interp_to_large_dt_lands_on_target() {
        // dt * speed >= 1 covers the whole distance in one step.
        assert_eq!(interp_to(10.0, -5.0, 1.0, 2.0), -5.0);
        assert_eq!(interp_to(10.0, -5.0, 0.0, 2.0), 10.0);
        assert_eq!(interp_to(10.0, -5.0, 0.1, 0.0), -5.0);
    }

    // ---- Thrust / speed ----

    #[test]
    fn test_speed_stays_in_envelope() {
        let tuning = PawnTuning::default();
        for &thrust in &[-1.0, -0.5, 0.0, 0.3, 1.0] {
            for &dt in &[0.0, 0.001, 1.0 / 60.0, 0.1, 0.5, 3.0] {
                let inputs = AxisInputs {
                    thrust,
                    ..Default::default()
                };
                for state in run_steps(cruising_state(&tuning), inputs, dt, 400, &tuning) {
                    assert!(
                        state.forward_speed >= tuning.min_speed
                            && state.forward_speed <= tuning.max_speed,
                        "speed {} escaped envelope (thrust {thrust}, dt {dt})",
                        state.forward_speed
                    );
                    assert!(
                        state.acceleration >= tuning.min_acceleration
                            && state.acceleration <= tuning.max_acceleration
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_thrust_reaches_max_speed() {
        let tuning = PawnTuning::default();
        let inputs = AxisInputs {
            thrust: 1.0,
            ..Default::default()
        };
        let history = run_steps(cruising_state(&tuning), inputs, 1.0 / 60.0, 60 * 30, &tuning);
        let last = history.last().unwrap();
        assert_eq!(last.forward_speed, tuning.max_speed);
        assert_eq!(last.acceleration, tuning.max_acceleration);
    }

    #[test]
    fn test_acceleration_decays_without_thrust() {
        let tuning = PawnTuning::default();
        let state = FlightState {
            forward_speed: 5_000.0,
            acceleration: 800.0,
            ..Default::default()
        };
        let history = run_steps(state, AxisInputs::default(), 1.0 / 60.0, 600, &tuning);
        let mut previous = state.acceleration;
        for s in &history {
            assert!(s.acceleration <= previous && s.acceleration >= 0.0);
            previous = s.acceleration;
        }
        assert!(previous < 10.0, "acceleration should bleed toward zero, got {previous}");
    }

    #[test]
    fn test_thrust_axis_is_clamped() {
        let tuning = PawnTuning::default();
        let state = cruising_state(&tuning);
        let (a_big, _) = flight::step_thrust(&state, 50.0, 0.1, &tuning);
        let (a_one, _) = flight::step_thrust(&state, 1.0, 0.1, &tuning);
        assert_eq!(a_big, a_one);
    }

    // ---- Rates ----

    #[test]
    fn test_rates_converge_without_overshoot() {
        let tuning = PawnTuning::default();
        let inputs = AxisInputs {
            move_right: 1.0,
            yaw: -1.0,
            ..Default::default()
        };
        let roll_target = 2.0 * tuning.turn_speed;
        let yaw_target = -2.0 * tuning.yaw_speed;
        let history = run_steps(cruising_state(&tuning), inputs, 1.0 / 60.0, 600, &tuning);

        let mut prev = FlightState::default();
        for s in &history {
            assert!(s.roll_rate >= prev.roll_rate && s.roll_rate <= roll_target);
            assert!(s.yaw_rate <= prev.yaw_rate && s.yaw_rate >= yaw_target);
            prev = *s;
        }
        assert!((prev.roll_rate - roll_target).abs() < 1e-2);
        assert!((prev.yaw_rate - yaw_target).abs() < 1e-2);
    }

    #[test]
    fn test_pitch_target_includes_yaw_coupling() {
        let tuning = PawnTuning::default();
        // Stick neutral, yawing at 20 deg/s: nose drops by 0.2 * 20.
        assert_eq!(flight::pitch_target_rate(0.0, 20.0, &tuning), -4.0);
        assert_eq!(flight::pitch_target_rate(0.0, -20.0, &tuning), -4.0);
        // Stick back (negative up axis) pulls the nose up.
        assert_eq!(flight::pitch_target_rate(-1.0, 0.0, &tuning), tuning.turn_speed);
    }

    // ---- Integration ----

    #[test]
    fn test_apply_moves_along_forward() {
        let tuning = PawnTuning::default();
        let update = flight::step(&FlightContext {
            state: cruising_state(&tuning),
            inputs: AxisInputs::default(),
            dt: 0.5,
            tuning: &tuning,
        });
        let mut transform = Transform::new(Vec3::ZERO, orientation_from_direction(Vec3::Y));
        flight::apply(&mut transform, &update);
        assert!((transform.position - Vec3::new(0.0, 500.0, 0.0)).length() < 1e-2);
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let tuning = PawnTuning::default();
        let state = FlightState {
            forward_speed: tuning.min_speed,
            yaw_rate: 20.0,
            ..Default::default()
        };
        let inputs = AxisInputs {
            yaw: 1.0,
            ..Default::default()
        };
        let update = flight::step(&FlightContext {
            state,
            inputs,
            dt: 0.5,
            tuning: &tuning,
        });
        let mut transform = Transform::default();
        flight::apply(&mut transform, &update);
        assert!(transform.forward().y > 0.0, "nose should swing right");
    }

    #[test]
    fn test_zero_dt_changes_nothing() {
        let tuning = PawnTuning::default();
        let state = FlightState {
            forward_speed: 2_000.0,
            acceleration: 100.0,
            pitch_rate: 3.0,
            yaw_rate: 1.0,
            roll_rate: -2.0,
        };
        let update = flight::step(&FlightContext {
            state,
            inputs: AxisInputs {
                thrust: 1.0,
                move_up: 1.0,
                ..Default::default()
            },
            dt: 0.0,
            tuning: &tuning,
        });
        assert_eq!(update.state, state);
        assert_eq!(update.local_move, Vec3::ZERO);
    }

    // ---- Camera / cosmetics ----

    #[test]
    fn test_camera_offset_linear() {
        let rig = flight::camera_offset(&AxisInputs {
            camera_right: 0.5,
            camera_up: 1.0,
            ..Default::default()
        });
        assert_eq!(rig.yaw, 90.0);
        assert_eq!(rig.pitch, -90.0);

        let rig = flight::camera_offset(&AxisInputs {
            camera_right: -3.0,
            ..Default::default()
        });
        assert_eq!(rig.yaw, -180.0);
    }

    #[test]
    fn test_turbine_pitch_tracks_speed() {
        let tuning = PawnTuning::default();
        let low = flight::turbine_pitch(tuning.min_speed, &tuning);
        let high = flight::turbine_pitch(tuning.max_speed, &tuning);
        assert!((low - tuning.turbine_min_pitch).abs() < 1e-6);
        assert!((high - tuning.turbine_max_pitch).abs() < 1e-6);
        let mid = flight::turbine_pitch(5_500.0, &tuning);
        assert!(mid > tuning.turbine_min_pitch && mid < tuning.turbine_max_pitch);
    }

    #[test]
    fn test_control_surfaces_split_roll() {
        let tuning = PawnTuning::default();
        let surfaces = flight::control_surfaces(
            &AxisInputs {
                move_right: 1.0,
                ..Default::default()
            },
            &tuning,
        );
        assert_eq!(surfaces.right_flap, tuning.max_flap_deflection);
        assert_eq!(surfaces.left_flap, -tuning.max_flap_deflection);
    }

    // ---- Rotation ----

    #[test]
    fn test_orientation_from_direction_points_forward() {
        for dir in [Vec3::X, Vec3::Y, -Vec3::Y, Vec3::Z, Vec3::new(1.0, 1.0, 1.0)] {
            let q = orientation_from_direction(dir);
            let forward = q * Vec3::X;
            assert!((forward - dir.normalize()).length() < 1e-5, "{dir:?}");
        }
        assert_eq!(orientation_from_direction(Vec3::ZERO), Quat::IDENTITY);
    }

    #[test]
    fn test_deflect_is_small_step_toward_normal() {
        let normal = Vec3::Z;
        let rotated = deflect_toward_normal(Quat::IDENTITY, normal, 0.025);
        let full = forward_angle_deg(Quat::IDENTITY, orientation_from_direction(normal));
        let moved = forward_angle_deg(Quat::IDENTITY, rotated);
        assert!((moved - full * 0.025).abs() < 1e-2, "moved {moved} of {full}");
        assert!((rotated * Vec3::X).z > 0.0);
    }

    #[test]
    fn test_pitch_up_raises_nose() {
        let q = from_pitch_yaw_roll(10.0, 0.0, 0.0);
        assert!((q * Vec3::X).z > 0.0);
        let q = from_pitch_yaw_roll(0.0, 0.0, 10.0);
        assert!((q * Vec3::Y).z < 0.0, "positive roll lowers the right wing");
    }

    // ---- Weapon ----

    fn loaded(ammo: u32) -> Weapon {
        weapon::new_weapon(&WeaponTuning {
            ammo,
            ..Default::default()
        })
    }

    #[test]
    fn test_fire_with_no_ammo_is_noop() {
        let mut w = loaded(0);
        assert_eq!(weapon::try_fire(&mut w), FireOutcome::Empty);
        assert_eq!(w.ammo, 0);
        assert!(w.can_fire);
        assert_eq!(w.shots_fired, 0);
    }

    #[test]
    fn test_fire_blocked_during_cooldown() {
        let mut w = loaded(10);
        assert_eq!(weapon::try_fire(&mut w), FireOutcome::Fired);
        assert_eq!(w.ammo, 9);
        assert_eq!(w.state, WeaponState::Firing);

        assert_eq!(weapon::try_fire(&mut w), FireOutcome::CoolingDown);
        assert_eq!(w.ammo, 9);

        weapon::settle_state(&mut w);
        assert_eq!(w.state, WeaponState::CooldownWait);

        weapon::on_cooldown_expired(&mut w);
        assert_eq!(w.state, WeaponState::Idle);
        assert_eq!(weapon::try_fire(&mut w), FireOutcome::Fired);
        assert_eq!(w.ammo, 8);
    }

    #[test]
    fn test_trigger_modes() {
        let mut w = loaded(1);
        let held = AxisInputs {
            trigger: 1.0,
            ..Default::default()
        };
        assert!(weapon::trigger_held(TriggerMode::HoldAxis, &w, &held));
        assert!(!weapon::trigger_held(TriggerMode::HoldAxis, &w, &AxisInputs::default()));
        assert!(!weapon::trigger_held(TriggerMode::PressRelease, &w, &held));
        w.firing = true;
        assert!(weapon::trigger_held(TriggerMode::PressRelease, &w, &AxisInputs::default()));
    }

    #[test]
    fn test_spread_within_cone() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let cone = 0.5;
        let pawn = Transform::default();
        for _ in 0..1_000 {
            let spread = weapon::sample_spread(&mut rng, cone);
            assert!(spread.abs().max_element() <= cone);
            let muzzle = weapon::muzzle_transform(&pawn, Vec3::ZERO, spread);
            // Pitch and yaw each contribute at most `cone` to the aim error.
            assert!(forward_angle_deg(pawn.rotation, muzzle.rotation) <= 2.0 * cone + 1e-3);
        }
        assert_eq!(weapon::sample_spread(&mut rng, 0.0), Vec3::ZERO);
    }

    #[test]
    fn test_spread_with_oversized_cone_is_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            let spread = weapon::sample_spread(&mut rng, 3.0e38);
            assert!(spread.abs().max_element() <= 180.0);
        }
        assert_eq!(weapon::sample_spread(&mut rng, f32::NAN), Vec3::ZERO);
    }

    #[test]
    fn test_muzzle_and_launch_velocity() {
        let pawn = Transform::new(
            Vec3::new(100.0, 0.0, 0.0),
            orientation_from_direction(Vec3::Y),
        );
        let muzzle = weapon::muzzle_transform(&pawn, Vec3::new(600.0, 0.0, -20.0), Vec3::ZERO);
        assert!((muzzle.position - Vec3::new(100.0, 600.0, -20.0)).length() < 1e-2);

        let velocity = weapon::launch_velocity(&muzzle, 103_000.0, 2_000.0);
        assert!((velocity.length() - 105_000.0).abs() < 1.0);
        assert!(velocity.y > 104_000.0);
    }
}
