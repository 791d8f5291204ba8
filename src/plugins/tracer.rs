// Shot tracer: positions buffered during a flight and the line drawn through them.
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::plugins::game_state::GameSession;

/// Ordered ball positions of the current flight. `revision` changes on every mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracer {
    points: Vec<Vec3>,
    revision: u64,
}

impl Tracer {
    pub fn push(&mut self, p: Vec3) {
        self.points.push(p);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.revision += 1;
    }

    pub fn points(&self) -> &[Vec3] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn revision(&self) -> u64 { self.revision }
}

pub fn tracer_mesh(points: &[Vec3]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| p.to_array()).collect();
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh
}

#[derive(Component)]
pub struct TracerLine;

#[derive(Resource)]
struct TracerMaterial(Handle<StandardMaterial>);

pub struct TracerPlugin;
impl Plugin for TracerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, init_tracer_material)
            .add_systems(Update, rebuild_tracer_line);
    }
}

fn init_tracer_material(mut commands: Commands, mut mats: ResMut<Assets<StandardMaterial>>) {
    let handle = mats.add(StandardMaterial {
        base_color: Color::srgb(1.0, 1.0, 0.0),
        unlit: true,
        ..default()
    });
    commands.insert_resource(TracerMaterial(handle));
}

fn rebuild_tracer_line(
    mut commands: Commands,
    session: Res<GameSession>,
    material: Option<Res<TracerMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    q_line: Query<Entity, With<TracerLine>>,
    mut seen: Local<Option<u64>>,
) {
    let Some(material) = material else { return; };
    let tracer = &session.tracer;
    if *seen == Some(tracer.revision()) {
        return;
    }
    *seen = Some(tracer.revision());

    // At most one live line: drop the old one (and its mesh handle) first.
    for e in &q_line {
        commands.entity(e).despawn_recursive();
    }
    if tracer.len() < 2 {
        return;
    }
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(tracer_mesh(tracer.points())),
            material: material.0.clone(),
            ..default()
        },
        TracerLine,
    ));
}
