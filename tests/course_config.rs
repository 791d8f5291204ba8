mod common;

use bevy::prelude::*;
use common::*;
use retro_golf::prelude::*;

#[test]
fn default_catalog_is_the_builtin_course() {
    let (catalog, tuning, terrain) = parse_course(BUILTIN_COURSE).unwrap();
    assert_eq!(catalog, CourseCatalog::default());
    assert_eq!(catalog.name(), "Augusta Mini");
    assert_eq!(catalog.hole_count(), 9);
    assert_eq!(catalog.hole(0).tee, Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(catalog.hole(0).pin, Vec3::new(0.0, 0.0, -30.0));
    assert_eq!(tuning, GolfTuning::default());
    assert_eq!(terrain, TerrainConfig::default());
}

#[test]
fn startup_installs_builtin_course_settings() {
    let app = build_app();
    assert_eq!(*app.world().resource::<CourseCatalog>(), CourseCatalog::default());
    assert_eq!(*app.world().resource::<GolfTuning>(), GolfTuning::default());
    assert_eq!(*app.world().resource::<TerrainConfig>(), TerrainConfig::default());
}

#[test]
fn preset_tuning_wins_over_course_file() {
    let app = build_app_with(|app| {
        app.insert_resource(GolfTuning { gravity: 0.05, ..default() });
    });
    let tuning = app.world().resource::<GolfTuning>();
    assert_eq!(tuning.gravity, 0.05);
    assert_eq!(tuning.drag, GolfTuning::default().drag);
    assert_eq!(*app.world().resource::<TerrainConfig>(), TerrainConfig::default());
}

#[test]
fn preset_terrain_wins_over_course_file() {
    let app = build_app_with(|app| {
        app.insert_resource(TerrainConfig { segments: 4, ..default() });
    });
    assert_eq!(app.world().resource::<TerrainConfig>().segments, 4);
    assert_eq!(*app.world().resource::<GolfTuning>(), GolfTuning::default());
}

#[test]
fn preset_tuning_drives_flight() {
    let mut app = build_app_with(|app| {
        app.insert_resource(GolfTuning { gravity: 0.5, ..default() });
    });
    session_mut(&mut app).ball = BallState { position: Vec3::new(0.0, 10.0, 0.0), velocity: Vec3::new(0.0, 0.0, -0.1) };
    fixed_step(&mut app, 1);
    // v.y = 0 - 0.5, then drag 0.99.
    assert!((session(&app).ball.velocity.y + 0.495).abs() < 1e-6);
}

#[test]
fn preset_catalog_keeps_default_tuning() {
    let one = CourseCatalog::new(
        "Pitch",
        vec![Hole { tee: Vec3::new(0.0, 1.0, 0.0), pin: Vec3::new(0.0, 0.0, -10.0), par: 3 }],
    )
    .unwrap();
    let app = build_app_with(move |app| {
        app.insert_resource(one);
    });
    assert_eq!(app.world().resource::<CourseCatalog>().name(), "Pitch");
    assert_eq!(*app.world().resource::<GolfTuning>(), GolfTuning::default());
    assert!(app.world().get_resource::<TerrainConfig>().is_some());
}

#[test]
fn builtin_holes_sit_inside_world_bounds() {
    let catalog = CourseCatalog::default();
    let bound = GolfTuning::default().world_bound;
    for hole in catalog.holes() {
        for p in [hole.tee, hole.pin] {
            assert!(p.x.abs() <= bound && p.z.abs() <= bound);
        }
        assert!(hole.par >= 3);
    }
}

#[test]
fn sections_fall_back_to_defaults() {
    let src = r#"(
        name: "Pitch",
        holes: [(tee: (x: 0.0, y: 1.0, z: 0.0), pin: (x: 0.0, y: 0.0, z: -10.0), par: 3)],
        tuning: (capture_radius: 3.0),
    )"#;
    let (catalog, tuning, terrain) = parse_course(src).unwrap();
    assert_eq!(catalog.name(), "Pitch");
    assert_eq!(catalog.hole_count(), 1);
    assert_eq!(tuning.capture_radius, 3.0);
    assert_eq!(tuning.gravity, GolfTuning::default().gravity);
    assert_eq!(terrain, TerrainConfig::default());
}

#[test]
fn empty_course_is_rejected() {
    let err = parse_course(r#"(name: "Nothing", holes: [])"#).unwrap_err();
    assert!(matches!(err, CourseError::Empty));
}

#[test]
fn malformed_course_is_a_parse_error() {
    let err = parse_course("(name: \"Broken\", holes: [(tee: 1)])").unwrap_err();
    assert!(matches!(err, CourseError::Parse(_)));
}

#[test]
fn drag_must_decay_velocity() {
    let src = r#"(
        name: "Slippery",
        holes: [(tee: (x: 0.0, y: 1.0, z: 0.0), pin: (x: 0.0, y: 0.0, z: -10.0), par: 3)],
        tuning: (drag: 1.2),
    )"#;
    assert!(matches!(parse_course(src).unwrap_err(), CourseError::InvalidTuning(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_course_file(std::path::Path::new("does/not/exist.ron")).unwrap_err();
    assert!(matches!(err, CourseError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.ron"));
}

#[test]
fn catalog_lookups_wrap() {
    let catalog = CourseCatalog::default();
    assert_eq!(catalog.wrap(9), 0);
    assert_eq!(catalog.hole(10), catalog.hole(1));
}
