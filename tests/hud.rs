mod common;

use bevy::prelude::*;
use common::*;
use retro_golf::plugins::hud::{hole_text, holed_text, landing_text, power_text, ShotReadout};
use retro_golf::prelude::*;

#[test]
fn power_readout_shows_integer_power() {
    assert_eq!(power_text(0), "Power: 0");
    assert_eq!(power_text(100), "Power: 100");
}

#[test]
fn hole_readout_is_one_based_with_par_and_strokes() {
    let catalog = CourseCatalog::default();
    let mut session = GameSession::default();
    load_hole(&mut session, &catalog, 8);
    session.strokes = 2;
    assert_eq!(hole_text(&session, &catalog), "Hole 9/9  Par 3  Strokes 2");
}

#[test]
fn shot_results_read_against_par() {
    assert_eq!(landing_text(12.345), "12.3 to pin");
    assert_eq!(holed_text(1, 3), "Hole in one!");
    assert_eq!(holed_text(3, 5), "Holed in 3: Eagle");
    assert_eq!(holed_text(3, 4), "Holed in 3: Birdie");
    assert_eq!(holed_text(4, 4), "Holed in 4: Par");
    assert_eq!(holed_text(5, 4), "Holed in 5: Bogey");
    assert_eq!(holed_text(8, 4), "Holed in 8: Over par");
}

fn shot_readout(app: &mut App) -> String {
    let world = app.world_mut();
    let mut q = world.query_filtered::<&Text, With<ShotReadout>>();
    q.single(world).sections[0].value.clone()
}

#[test]
fn shot_readout_follows_shot_events() {
    let mut app = build_app_with(|app| {
        app.add_plugins(HudPlugin);
    });
    assert_eq!(shot_readout(&mut app), "");

    send_input(&mut app, ShotInputEvent::Press);
    fixed_step(&mut app, 5);
    send_input(&mut app, ShotInputEvent::Release);
    assert_eq!(shot_readout(&mut app), "");

    fixed_step(&mut app, 600);
    app.update();
    let text = shot_readout(&mut app);
    assert!(text.ends_with(" to pin"), "got {text:?}");

    let catalog = app.world().resource::<CourseCatalog>().clone();
    let pin = catalog.hole(0).pin;
    {
        let mut s = session_mut(&mut app);
        s.strokes = 4;
        s.ball = BallState { position: Vec3::new(pin.x, 0.31, pin.z), velocity: Vec3::new(0.0, -0.5, 0.0) };
    }
    fixed_step(&mut app, 1);
    app.update();
    assert_eq!(shot_readout(&mut app), "Holed in 4: Bogey");
}
