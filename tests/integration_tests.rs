use approx::assert_relative_eq;
use projectile_simulation::{
    simulate, write_csv, ConfigError, Medium, Planet, Scenario, ScenarioStore, SimulationConfig,
    SimulationResult, Termination,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helper to build the reference vacuum launch used by the analytic checks
fn create_vacuum_launch() -> SimulationConfig {
    SimulationConfig::new(50.0, 45.0, 0.0, 9.81)
        .with_drag(0.0, false)
        .with_time_step(0.01)
}

fn run(config: &SimulationConfig) -> SimulationResult {
    simulate(config).expect("config should be valid")
}

/// Index of the first recorded ground-contact row after launch.
fn first_contact_index(result: &SimulationResult) -> usize {
    result
        .telemetry
        .rows
        .iter()
        .skip(1)
        .position(|row| row.y == 0.0)
        .map(|i| i + 1)
        .expect("run should touch the ground")
}

#[test]
fn test_vacuum_range_and_time_match_analytic() {
    let result = run(&create_vacuum_launch());

    let angle = 45f64.to_radians();
    let expected_range = 50.0 * 50.0 * (2.0 * angle).sin() / 9.81;
    let expected_time = 2.0 * 50.0 * angle.sin() / 9.81;

    let impact_x = result.telemetry.first_impact_x.unwrap();
    let impact_t = result.telemetry.first_impact_t.unwrap();

    println!("Impact at x = {:.3} m, t = {:.3} s", impact_x, impact_t);
    assert_relative_eq!(impact_x, expected_range, max_relative = 0.02);
    assert_relative_eq!(impact_t, expected_time, max_relative = 0.02);
    assert_relative_eq!(impact_x, 254.8, max_relative = 0.02);
    assert_relative_eq!(impact_t, 7.21, max_relative = 0.02);
}

#[test]
fn test_vacuum_apex_height() {
    let result = run(&create_vacuum_launch());

    let vy0 = 50.0 * 45f64.to_radians().sin();
    let expected_apex = vy0 * vy0 / (2.0 * 9.81);
    let apex = result.telemetry.summary().max_height;

    assert_relative_eq!(apex, expected_apex, max_relative = 0.02);
    assert_relative_eq!(apex, 63.7, max_relative = 0.02);
}

#[test]
fn test_bounce_kinematics_at_first_contact() {
    let config = SimulationConfig::new(30.0, 40.0, 2.0, 9.81)
        .with_drag(Medium::Air.drag_coefficient(), true)
        .with_bounce(0.6, 0.05);
    let result = run(&config);
    let rows = &result.telemetry.rows;

    let contact = first_contact_index(&result);
    let before = rows[contact - 1];
    let after = rows[contact];

    // Velocity immediately before resolution is one symplectic step past `before`.
    let vx_before = before.vx + before.ax * config.dt;
    let vy_before = before.vy + before.ay * config.dt;

    assert!(vy_before < 0.0);
    assert_eq!(after.vy, -vy_before * 0.6);
    assert_eq!(after.vx, vx_before * (1.0 - 0.05));
    // Acceleration is the pre-bounce value.
    assert_eq!(after.ay, -9.81 - 0.4 * vy_before.signum() * vy_before.abs());
}

#[test]
fn test_bounce_cap_terminates() {
    for max_bounces in [1, 3, 7] {
        let config = SimulationConfig::default().with_max_bounces(max_bounces);
        let result = run(&config);

        assert_eq!(result.termination, Termination::BounceLimitReached);
        assert_eq!(result.bounces, max_bounces);
        assert!(result.elapsed < 60.0);
    }
}

#[test]
fn test_default_run_ends_physically() {
    let result = run(&SimulationConfig::default());

    assert!(result.termination.is_physical());
    assert_eq!(result.bounces, 20);
}

#[test]
fn test_metadata_latched_on_first_crossing() {
    let single = run(&SimulationConfig::default().with_max_bounces(1));
    let many = run(&SimulationConfig::default().with_max_bounces(10));

    assert_eq!(many.bounces, 10);
    assert_eq!(many.telemetry.first_impact_x, single.telemetry.first_impact_x);
    assert_eq!(many.telemetry.first_impact_t, single.telemetry.first_impact_t);

    let contact = many.telemetry.rows[first_contact_index(&many)];
    assert_eq!(many.telemetry.first_impact_x, Some(contact.x));
    assert_eq!(many.telemetry.first_impact_t, Some(contact.t));
}

#[test]
fn test_degenerate_launch_rests_immediately() {
    let config = SimulationConfig::new(0.0, 45.0, 0.0, 9.81);
    let result = run(&config);

    assert_eq!(result.termination, Termination::Resting);
    assert_eq!(result.telemetry.len(), 1);
    assert_eq!(result.trajectory.len(), 1);
    assert_eq!(result.elapsed, 0.0);
    assert_eq!(result.telemetry.first_impact_x, None);
}

#[test]
fn test_dead_drop_with_no_restitution_rests() {
    let config = SimulationConfig::new(0.0, 0.0, 10.0, 9.81).with_bounce(0.0, 0.0);
    let result = run(&config);
    let last = result.telemetry.rows.last().unwrap();

    assert_eq!(result.termination, Termination::Resting);
    assert_eq!(result.bounces, 1);
    assert_eq!(last.y, 0.0);
    assert_relative_eq!(result.elapsed, (2.0 * 10.0 / 9.81f64).sqrt(), max_relative = 0.02);
}

#[test]
fn test_determinism() {
    let config = SimulationConfig::new(42.0, 33.0, 7.5, Planet::Mars.gravity())
        .with_drag(Medium::Water.drag_coefficient(), true)
        .with_bounce(0.7, 0.1);

    let first = run(&config);
    let second = run(&config);

    assert_eq!(first, second);

    let (trajectory, elapsed, telemetry) = first.into_parts();
    assert_eq!(trajectory, second.trajectory);
    assert_eq!(elapsed.to_bits(), second.elapsed.to_bits());
    assert_eq!(telemetry, second.telemetry);
}

#[test]
fn test_drag_shortens_range() {
    let config = SimulationConfig::default()
        .with_drag(Medium::Air.drag_coefficient(), true)
        .with_max_bounces(1);

    let with_drag = run(&config);
    let without_drag = run(&config.without_drag());

    assert!(with_drag.telemetry.first_impact_x.unwrap() < without_drag.telemetry.first_impact_x.unwrap());
    assert!(with_drag.telemetry.summary().max_height < without_drag.telemetry.summary().max_height);
}

#[test]
fn test_randomized_configs_stay_above_ground() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ba11);

    for _ in 0..40 {
        let planet = Planet::ALL[rng.gen_range(0..Planet::ALL.len())];
        let medium = Medium::ALL[rng.gen_range(0..Medium::ALL.len())];
        let config = SimulationConfig::new(
            rng.gen_range(0.0..80.0),
            rng.gen_range(0.0..90.0),
            rng.gen_range(0.0..40.0),
            planet.gravity(),
        )
        .with_drag(medium.drag_coefficient(), rng.gen_bool(0.5))
        .with_bounce(rng.gen_range(0.0..0.95), rng.gen_range(0.0..0.5))
        .with_time_step(rng.gen_range(0.005..0.05))
        .with_max_bounces(rng.gen_range(1..25));

        let result = run(&config);
        let rows = &result.telemetry.rows;

        assert!(rows.iter().all(|row| row.y >= 0.0), "negative height in {:?}", config);
        assert!(
            rows.windows(2).all(|pair| pair[0].t <= pair[1].t),
            "time went backwards in {:?}",
            config
        );
        assert!(result.bounces <= config.max_bounces);
        assert_eq!(result.trajectory.len(), rows.len());
    }
}

#[test]
fn test_randomized_earth_configs_terminate() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..25 {
        let config = SimulationConfig::new(
            rng.gen_range(1.0..30.0),
            rng.gen_range(5.0..85.0),
            rng.gen_range(0.0..10.0),
            Planet::Earth.gravity(),
        )
        .with_bounce(rng.gen_range(0.0..0.7), rng.gen_range(0.0..0.5))
        .with_time_step(rng.gen_range(0.005..0.02))
        .with_max_bounces(10);

        let result = run(&config);
        assert!(
            result.termination.is_physical(),
            "run timed out for {:?}",
            config
        );
    }
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SimulationConfig::default().with_bounce(0.6, 1.5);
    assert_eq!(
        simulate(&config),
        Err(ConfigError::OutOfUnitRange {
            name: "ground friction",
            value: 1.5
        })
    );
}

#[test]
fn test_csv_export_has_row_per_step() {
    let result = run(&SimulationConfig::default().with_max_bounces(2));

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &result.telemetry).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(text.lines().count(), result.telemetry.len() + 1);
    assert_eq!(text.lines().next(), Some("t,x,y,vx,vy,ax,ay"));
    assert!(text.lines().skip(1).all(|line| line.split(',').count() == 7));
}

#[test]
fn test_scenario_store_drives_simulation() {
    let path = std::env::temp_dir().join(format!(
        "bounce_sim_integration_{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    let store = ScenarioStore::new(&path);

    let scenario = Scenario {
        v0: 25.0,
        angle: 50.0,
        h0: 3.0,
        planet: Planet::Moon,
        medium: Medium::Vacuum,
        air_res: true,
        restitution: 0.5,
        ground_friction: 0.05,
    };
    store.save("moon lob", &scenario).unwrap();

    let loaded = store.get("moon lob").unwrap();
    let result = run(&loaded.to_config());

    assert_eq!(loaded, scenario);
    assert!(result.termination.is_physical());
    assert!(result.telemetry.first_impact_x.unwrap() > 0.0);

    let _ = std::fs::remove_file(&path);
}
