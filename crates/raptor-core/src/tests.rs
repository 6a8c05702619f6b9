#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use crate::commands::{CollisionReport, InputEvent};
    use crate::config::{ConfigError, SimConfig};
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::state::SimSnapshot;
    use crate::types::{sanitize_dt, EntityId, SimTime, Transform};

    /// Input events use an internally tagged representation the host can
    /// write by hand.
    #[test]
    fn test_input_event_json_shape() {
        let json = r#"{"type":"Axis","axis":"Thrust","value":0.75}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, InputEvent::axis(InputAxis::Thrust, 0.75));

        let json = r#"{"type":"Action","action":"FirePressed"}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, InputEvent::action(InputAction::FirePressed));
    }

    #[test]
    fn test_collision_report_optional_fields() {
        let json = r#"{
            "entity": 7,
            "other": null,
            "location": [0.0, 0.0, 0.0],
            "normal": [0.0, 0.0, 1.0]
        }"#;
        let report: CollisionReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.entity, EntityId(7));
        assert!(!report.other_simulates_physics);
        assert_eq!(report.normal_impulse, Vec3::ZERO);
    }

    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::TurbineStartup { pawn: EntityId(1) },
            AudioEvent::FireShot {
                pawn: EntityId(1),
                location: Vec3::new(600.0, 0.0, -20.0),
            },
            AudioEvent::AmmoEmpty { pawn: EntityId(1) },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = SimSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"pawns\":[]"));
    }

    // ---- Config ----

    #[test]
    fn test_config_defaults_match_stock_aircraft() {
        let config = SimConfig::default();
        assert_eq!(config.pawn.acceleration, 500.0);
        assert_eq!(config.pawn.min_speed, 1_000.0);
        assert_eq!(config.pawn.max_speed, 10_000.0);
        assert_eq!(config.weapon.ammo, 480);
        assert_eq!(config.weapon.fire_rate, 0.0017);
        assert_eq!(config.weapon.cone_deg, 0.5);
        assert_eq!(config.weapon.gun_offset, Vec3::new(600.0, 0.0, -20.0));
        assert_eq!(config.projectile.muzzle_speed, 103_000.0);
        assert_eq!(config.projectile.lifetime_secs, 5.0);
        assert_eq!(config.projectile.collision_policy, CollisionPolicy::DestroyOnHit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let json = r#"{
            "seed": 7,
            "weapon": { "ammo": 12, "trigger_mode": "PressRelease" },
            "projectile": { "collision_policy": "ImpulseOnly" }
        }"#;
        let config = SimConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.weapon.ammo, 12);
        assert_eq!(config.weapon.trigger_mode, TriggerMode::PressRelease);
        assert_eq!(config.weapon.fire_rate, FIRE_RATE);
        assert_eq!(config.projectile.collision_policy, CollisionPolicy::ImpulseOnly);
        assert_eq!(config.pawn.max_health, MAX_HEALTH);
    }

    #[test]
    fn test_config_rejects_inverted_speed_range() {
        let json = r#"{ "pawn": { "min_speed": 5000.0, "max_speed": 100.0 } }"#;
        let err = SimConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedRange { field: "speed", .. }
        ));
    }

    #[test]
    fn test_config_rejects_zero_fire_rate() {
        let json = r#"{ "weapon": { "fire_rate": 0.0 } }"#;
        let err = SimConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive { field: "fire_rate", .. }
        ));
    }

    #[test]
    fn test_config_rejects_unbounded_cone() {
        for cone in ["3e38", "180.5", "-0.1"] {
            let json = format!(r#"{{ "weapon": {{ "cone_deg": {cone} }} }}"#);
            let err = SimConfig::from_json_str(&json).unwrap_err();
            assert!(
                matches!(err, ConfigError::OutOfRange { field: "cone_deg", .. }),
                "cone {cone} accepted"
            );
        }
        let json = r#"{ "weapon": { "cone_deg": 180.0 } }"#;
        assert!(SimConfig::from_json_str(json).is_ok());
    }

    #[test]
    fn test_config_rejects_initial_speed_outside_envelope() {
        let json = r#"{ "pawn": { "initial_speed": 50.0 } }"#;
        let err = SimConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::InitialSpeedOutOfRange { .. }));
    }

    #[test]
    fn test_config_malformed_json() {
        let err = SimConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }

    // ---- Types ----

    #[test]
    fn test_transform_axes_identity() {
        let t = Transform::default();
        assert_eq!(t.forward(), Vec3::X);
        assert_eq!(t.right(), Vec3::Y);
        assert_eq!(t.up(), Vec3::Z);
    }

    #[test]
    fn test_transform_point_applies_rotation() {
        // Quarter turn about Z: forward becomes right.
        let t = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
        );
        let p = t.transform_point(Vec3::new(600.0, 0.0, -20.0));
        assert!((p - Vec3::new(10.0, 600.0, -20.0)).length() < 1e-3);
    }

    #[test]
    fn test_sim_time_variable_dt() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.tick, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-9);
        assert_eq!(time.last_dt, 0.25);
    }

    #[test]
    fn test_sanitize_dt() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }
}
