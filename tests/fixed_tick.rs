mod common;

use bevy::app::AppExit;
use bevy::prelude::*;
use common::*;
use retro_golf::prelude::*;

// What the Flight set saw on each tick: (tick, power).
#[derive(Resource, Default)]
struct FlightSeen(Vec<(u64, u32)>);

fn record_flight_phase(sim: Res<SimState>, session: Res<GameSession>, mut seen: ResMut<FlightSeen>) {
    seen.0.push((sim.tick, session.power));
}

fn exit_events(app: &App) -> usize {
    app.world().resource::<Events<AppExit>>().len()
}

#[test]
fn ticks_count_simulated_time() {
    let mut app = build_app();
    fixed_step(&mut app, 90);
    let sim = app.world().resource::<SimState>();
    assert_eq!(sim.tick, 90);
    assert!((sim.seconds() - 1.5).abs() < 1e-6);
    assert_eq!(SimState::ticks_for(3.0), 180);
    assert_eq!(SimState::ticks_for(0.0), 1);
}

#[test]
fn tick_and_charge_run_before_flight() {
    let mut app = build_app_with(|app| {
        app.init_resource::<FlightSeen>()
            .add_systems(FixedUpdate, record_flight_phase.in_set(SimSet::Flight));
    });
    send_input(&mut app, ShotInputEvent::Press);
    fixed_step(&mut app, 3);
    let seen = &app.world().resource::<FlightSeen>().0;
    assert_eq!(seen.as_slice(), &[(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn camera_runs_after_flight_in_the_same_tick() {
    let mut app = build_app();
    send_input(&mut app, ShotInputEvent::Press);
    fixed_step(&mut app, 30);
    send_input(&mut app, ShotInputEvent::Release);
    let before = session(&app).ball.position;

    fixed_step(&mut app, 1);
    let ball = session(&app).ball.position;
    assert_ne!(ball, before);
    // Ball mode looks straight at the ball as it stands after this tick's flight step.
    assert_eq!(app.world().resource::<CameraRig>().look_at, ball);
}

#[test]
fn config_resources_present() {
    let app = build_app();
    assert!(app.world().get_resource::<AutoConfig>().is_some());
    assert_eq!(*app.world().resource::<GolfTuning>(), GolfTuning::default());
}

#[test]
fn exits_once_runtime_is_reached() {
    let mut app = build_app_with(|app| {
        app.insert_resource(AutoConfig { run_duration_seconds: Some(0.05), ..Default::default() });
    });
    fixed_step(&mut app, 2);
    app.update();
    assert_eq!(exit_events(&app), 0);

    fixed_step(&mut app, 1);
    app.update();
    assert_eq!(exit_events(&app), 1);
}

#[test]
fn runs_unbounded_without_runtime() {
    let mut app = build_app();
    fixed_step(&mut app, 600);
    app.update();
    assert_eq!(exit_events(&app), 0);
}
