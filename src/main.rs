use std::path::PathBuf;

use bevy::prelude::*;
use retro_golf::plugins::scene::SKY_COLOR;
use retro_golf::prelude::*;

// Flags: --course=PATH (RON course file), --autoplay, --runtime=SECONDS (exit after simulated time).
fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let mut settings = CourseSettings::default();
    let mut auto = AutoConfig::default();
    for arg in std::env::args().skip(1) {
        if arg == "--autoplay" {
            auto.enabled = true;
        } else if let Some(path) = arg.strip_prefix("--course=") {
            settings.path = Some(PathBuf::from(path));
        } else if let Some(secs) = arg.strip_prefix("--runtime=") {
            match secs.parse::<f32>() {
                Ok(v) => auto.run_duration_seconds = Some(v),
                Err(e) => eprintln!("ignoring --runtime={secs}: {e}"),
            }
        }
    }

    App::new()
        .insert_resource(ClearColor(SKY_COLOR))
        .insert_resource(Msaa::Off) // retro look: no antialiasing
        .insert_resource(AmbientLight {
            color: Color::srgb(0.8, 0.8, 0.8),
            brightness: 600.0,
        })
        .insert_resource(settings)
        .insert_resource(auto)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Retro Golf".into(),
                fit_canvas_to_parent: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CoreSimPlugin)      // fixed tick, tuning, run limit
        .add_plugins(CoursePlugin)       // course catalog (RON)
        .add_plugins(GameStatePlugin)    // session resource
        .add_plugins(LevelPlugin)        // hole loading
        .add_plugins(ShootingPlugin)     // press / charge / release
        .add_plugins(BallPlugin)         // flight simulation
        .add_plugins(CameraPlugin)       // camera director
        .add_plugins(AutoplayPlugin)     // scripted swings when --autoplay
        .add_plugins(TerrainPlugin)      // per-hole ground mesh
        .add_plugins(ScenePlugin)        // camera entity, light, ball & pin
        .add_plugins(TracerPlugin)       // flight trail
        .add_plugins(HudPlugin)          // power & hole readouts
        .run();
}
