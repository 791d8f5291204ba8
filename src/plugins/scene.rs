// World setup (camera, light, fog, ball & pin meshes) and syncing them to the session.
use bevy::pbr::{FogFalloff, FogSettings};
use bevy::prelude::*;

use crate::plugins::camera::{CameraRig, GolfCamera};
use crate::plugins::game_state::GameSession;
use crate::plugins::level::HoleLoadedEvent;

pub const SKY_COLOR: Color = Color::srgb(0.529, 0.808, 0.922);
const BALL_RADIUS: f32 = 0.3;
const PIN_HEIGHT: f32 = 3.0;

#[derive(Component)]
pub struct BallMarker;

#[derive(Component)]
pub struct Pin;

pub struct ScenePlugin;
impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene)
            .add_systems(Update, (sync_ball_transform, place_pin));
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut mats: ResMut<Assets<StandardMaterial>>,
    rig: Res<CameraRig>,
    session: Res<GameSession>,
) {
    commands.spawn((
        Camera3dBundle {
            transform: rig.transform(),
            projection: PerspectiveProjection {
                fov: 75f32.to_radians(),
                near: 0.1,
                far: 1000.0,
                ..default()
            }
            .into(),
            ..default()
        },
        FogSettings {
            color: SKY_COLOR,
            falloff: FogFalloff::Linear { start: 50.0, end: 300.0 },
            ..default()
        },
        GolfCamera,
    ));

    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight { illuminance: 10_000.0, ..default() },
        transform: Transform::from_xyz(50.0, 100.0, -50.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(8, 8)),
            material: mats.add(StandardMaterial { base_color: Color::WHITE, unlit: true, ..default() }),
            transform: Transform::from_translation(session.ball.position),
            ..default()
        },
        BallMarker,
    ));

    // Pole with a small flag; moved onto each hole's pin as it loads.
    let flag_mat = mats.add(StandardMaterial { base_color: Color::srgb(0.9, 0.1, 0.1), ..default() });
    commands
        .spawn((
            PbrBundle {
                mesh: meshes.add(Cylinder::new(0.05, PIN_HEIGHT)),
                material: mats.add(StandardMaterial { base_color: Color::WHITE, ..default() }),
                transform: Transform::from_xyz(0.0, PIN_HEIGHT * 0.5, 0.0),
                visibility: Visibility::Hidden,
                ..default()
            },
            Pin,
        ))
        .with_children(|parent| {
            parent.spawn(PbrBundle {
                mesh: meshes.add(Cuboid::new(0.8, 0.5, 0.02)),
                material: flag_mat,
                transform: Transform::from_xyz(0.4, PIN_HEIGHT * 0.5 - 0.25, 0.0),
                ..default()
            });
        });
}

fn sync_ball_transform(session: Res<GameSession>, mut q_ball: Query<&mut Transform, With<BallMarker>>) {
    if !session.is_changed() { return; }
    if let Ok(mut t) = q_ball.get_single_mut() {
        t.translation = session.ball.position;
    }
}

fn place_pin(
    mut ev_loaded: EventReader<HoleLoadedEvent>,
    mut q_pin: Query<(&mut Transform, &mut Visibility), With<Pin>>,
) {
    let Some(ev) = ev_loaded.read().last() else { return; };
    if let Ok((mut t, mut vis)) = q_pin.get_single_mut() {
        t.translation = ev.pin + Vec3::Y * (PIN_HEIGHT * 0.5);
        *vis = Visibility::Visible;
    }
}
