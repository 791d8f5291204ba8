use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::tasks::{AsyncComputeTaskPool, Task};
use futures_lite::future::{block_on, poll_once};
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::plugins::level::HoleLoadedEvent;

/// Configuration for the per-hole ground surface.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub size: f32,
    pub segments: u32,
    // Ripple across the vertex index (row-major), plus uniform jitter per vertex.
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    pub jitter: f32,
    // Low frequency rolling swell, reseeded per hole.
    pub swell_amplitude: f32,
    pub swell_frequency: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            segments: 20,
            wave_amplitude: 2.0,
            wave_frequency: 0.3,
            jitter: 1.0,
            swell_amplitude: 1.5,
            swell_frequency: 0.01,
        }
    }
}

/// Square grid of heights centred on the origin, `(segments + 1)^2` vertices row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightfield {
    pub size: f32,
    pub segments: u32,
    pub heights: Vec<f32>,
}

impl Heightfield {
    pub fn row_len(&self) -> usize { self.segments as usize + 1 }

    pub fn step(&self) -> f32 { self.size / self.segments as f32 }

    /// World position of vertex (i, j); i runs along X, j along Z.
    pub fn vertex(&self, i: usize, j: usize) -> Vec3 {
        let half = self.size * 0.5;
        let step = self.step();
        let idx = j * self.row_len() + i;
        Vec3::new(-half + i as f32 * step, self.heights[idx], -half + j as f32 * step)
    }
}

pub fn generate_heightfield(cfg: &TerrainConfig, seed: u64) -> Heightfield {
    let segments = cfg.segments.max(1);
    let row = segments as usize + 1;
    let mut rng = StdRng::seed_from_u64(seed);
    let perlin = Perlin::new(rng.gen());
    let half = cfg.size * 0.5;
    let step = cfg.size / segments as f32;

    let mut heights = Vec::with_capacity(row * row);
    for j in 0..row {
        for i in 0..row {
            let idx = (j * row + i) as f32;
            let x = -half + i as f32 * step;
            let z = -half + j as f32 * step;
            let ripple = (idx * cfg.wave_frequency).sin() * cfg.wave_amplitude;
            let jitter = rng.gen::<f32>() * cfg.jitter;
            let swell = perlin.get([x as f64 * cfg.swell_frequency, z as f64 * cfg.swell_frequency]) as f32
                * cfg.swell_amplitude;
            heights.push(ripple + jitter + swell);
        }
    }
    Heightfield { size: cfg.size, segments, heights }
}

/// Flat-shaded triangle mesh for a heightfield (faceted retro look).
pub fn heightfield_mesh(field: &Heightfield) -> Mesh {
    let row = field.row_len();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(row * row);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(row * row);
    for j in 0..row {
        for i in 0..row {
            positions.push(field.vertex(i, j).to_array());
            uvs.push([i as f32 / (row - 1) as f32, j as f32 / (row - 1) as f32]);
        }
    }

    let segs = field.segments;
    let mut indices: Vec<u32> = Vec::with_capacity((segs * segs * 6) as usize);
    for j in 0..segs {
        for i in 0..segs {
            let stride = segs + 1;
            let i0 = j * stride + i;
            let i1 = i0 + 1;
            let i2 = i0 + stride;
            let i3 = i2 + 1;
            indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh.duplicate_vertices();
    mesh.compute_flat_normals();
    mesh
}

// ----------------------- Plugin -----------------------

#[derive(Component)]
pub struct Terrain;

/// Latest requested terrain build; finished builds with an older generation are dropped.
#[derive(Resource, Default)]
pub struct TerrainGeneration(pub u64);

#[derive(Resource)]
struct TerrainMaterial(Handle<StandardMaterial>);

/// Pending mesh build, tagged with the generation that requested it.
#[derive(Component)]
pub struct TerrainBuildTask {
    generation: u64,
    task: Task<Mesh>,
}

pub struct TerrainPlugin;
impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainGeneration>()
            .add_systems(Startup, init_terrain_material)
            .add_systems(Update, (regenerate_on_hole_load, finalize_terrain_tasks.after(regenerate_on_hole_load)));
    }
}

fn init_terrain_material(mut commands: Commands, mut mats: ResMut<Assets<StandardMaterial>>) {
    let handle = mats.add(StandardMaterial {
        base_color: Color::srgb_u8(0x1e, 0x7f, 0x3b),
        perceptual_roughness: 1.0,
        ..default()
    });
    commands.insert_resource(TerrainMaterial(handle));
}

fn regenerate_on_hole_load(
    mut commands: Commands,
    mut ev_loaded: EventReader<HoleLoadedEvent>,
    cfg: Option<Res<TerrainConfig>>,
    mut generation: ResMut<TerrainGeneration>,
) {
    let Some(ev) = ev_loaded.read().last() else { return; };
    generation.0 += 1;
    let current = generation.0;
    let seed: u64 = rand::random();
    let cfg = cfg.map(|c| *c).unwrap_or_default();
    debug!("TERRAIN build hole={} generation={} seed={}", ev.index, current, seed);
    let task = AsyncComputeTaskPool::get().spawn(async move {
        heightfield_mesh(&generate_heightfield(&cfg, seed))
    });
    commands.spawn(TerrainBuildTask { generation: current, task });
}

fn finalize_terrain_tasks(
    mut commands: Commands,
    generation: Res<TerrainGeneration>,
    material: Option<Res<TerrainMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut q_tasks: Query<(Entity, &mut TerrainBuildTask)>,
    q_terrain: Query<Entity, With<Terrain>>,
) {
    let Some(material) = material else { return; };
    for (e, mut build) in q_tasks.iter_mut() {
        let Some(mesh) = block_on(poll_once(&mut build.task)) else { continue; };
        if build.generation != generation.0 {
            commands.entity(e).despawn();
            continue;
        }
        // Supersede the previous surface.
        for old in &q_terrain {
            commands.entity(old).despawn_recursive();
        }
        commands
            .entity(e)
            .remove::<TerrainBuildTask>()
            .insert((
                PbrBundle {
                    mesh: meshes.add(mesh),
                    material: material.0.clone(),
                    ..default()
                },
                Terrain,
            ));
    }
}
