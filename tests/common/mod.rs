#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use retro_golf::prelude::*;

// Headless app with every gameplay plugin but no rendering. Wall-clock time is frozen so
// `app.update()` never runs FixedUpdate on its own; tests step it with `fixed_step`.
pub fn build_app() -> App {
    build_app_with(|_| {})
}

/// Like `build_app`, letting the test add resources or plugins before Startup runs.
pub fn build_app_with(configure: impl FnOnce(&mut App)) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
        .add_plugins((
            CoreSimPlugin,
            CoursePlugin,
            GameStatePlugin,
            LevelPlugin,
            ShootingPlugin,
            BallPlugin,
            CameraPlugin,
        ));
    configure(&mut app);
    app.update(); // Startup: course + first hole
    app
}

pub fn fixed_step(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

pub fn send_input(app: &mut App, input: ShotInputEvent) {
    app.world_mut().send_event(input);
    app.update();
}

pub fn session(app: &App) -> &GameSession {
    app.world().resource::<GameSession>()
}

pub fn session_mut(app: &mut App) -> Mut<'_, GameSession> {
    app.world_mut().resource_mut::<GameSession>()
}

/// Session placed on `index` of `catalog`, as the hole loader leaves it.
pub fn session_on_hole(catalog: &CourseCatalog, index: usize) -> GameSession {
    let mut session = GameSession::default();
    load_hole(&mut session, catalog, index);
    session
}

/// `build_app_with` plus mesh & material storage, for plugins that spawn render entities.
pub fn build_asset_app_with(configure: impl FnOnce(&mut App)) -> App {
    build_app_with(|app| {
        app.add_plugins(AssetPlugin::default())
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>();
        configure(app);
    })
}

pub fn count_with<C: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<C>>();
    query.iter(world).count()
}
