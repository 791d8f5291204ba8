use bevy::prelude::*;
use bevy::app::AppExit;
use bevy::time::Fixed;
use serde::Deserialize;

// Core simulation timing, system ordering & tunable gameplay constants.

/// Gameplay runs on a fixed 60 Hz tick; every per-frame constant below is per tick.
pub const FIXED_HZ: f64 = 60.0;

/// Count of fixed gameplay ticks since startup.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimState {
    pub tick: u64,
}
impl SimState {
    /// Simulated time; independent of frame rate.
    pub fn seconds(&self) -> f32 {
        self.tick as f32 / FIXED_HZ as f32
    }

    /// Whole ticks covering `seconds` of simulated time, at least one.
    pub fn ticks_for(seconds: f32) -> u64 {
        ((seconds * FIXED_HZ as f32).round() as u64).max(1)
    }
}

/// Ordering of the gameplay systems inside `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Tick,
    Input,
    Charge,
    Flight,
    Camera,
}

/// Camera offsets & smoothing for the two camera modes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    pub player_lerp: f32,
    pub ball_lerp: f32,
    pub player_height: f32,
    pub player_back: f32,
    pub player_look_height: f32,
    pub player_look_ahead: f32,
    pub ball_rise: f32,
    pub ball_back: f32,
}
impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            player_lerp: 0.1,
            ball_lerp: 0.1,
            player_height: 2.0,
            player_back: 5.0,
            player_look_height: 1.0,
            player_look_ahead: 10.0,
            ball_rise: 3.0,
            ball_back: 6.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GolfTuning {
    pub gravity: f32,
    pub drag: f32,
    pub horizontal_factor: f32,
    pub vertical_factor: f32,
    pub charge_increment: u32,
    pub max_power: u32,
    pub rest_height: f32,
    pub capture_radius: f32,
    pub world_bound: f32,
    pub camera: CameraTuning,
}
impl Default for GolfTuning {
    fn default() -> Self {
        Self {
            gravity: 0.02,
            drag: 0.99,
            horizontal_factor: 0.15,
            vertical_factor: 0.05,
            charge_increment: 1,
            max_power: 100,
            rest_height: 0.3,
            capture_radius: 1.5,
            world_bound: 90.0,
            camera: CameraTuning::default(),
        }
    }
}

/// Unattended run settings (scripted swings & timed exit), driven by CLI flags.
#[derive(Resource, Debug, Clone)]
pub struct AutoConfig {
    pub enabled: bool,
    pub run_duration_seconds: Option<f32>,
    pub swing_interval_seconds: f32,
    pub charge_ticks: u32,
}
impl Default for AutoConfig {
    fn default() -> Self {
        Self { enabled: false, run_duration_seconds: None, swing_interval_seconds: 3.0, charge_ticks: 12 }
    }
}

pub struct CoreSimPlugin;
impl Plugin for CoreSimPlugin {
    fn build(&self, app: &mut App) {
        // `GolfTuning` is installed by the course loader so presets can win over the file.
        app.init_resource::<SimState>()
            .init_resource::<AutoConfig>()
            .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .configure_sets(
                FixedUpdate,
                (SimSet::Tick, SimSet::Input, SimSet::Charge, SimSet::Flight, SimSet::Camera).chain(),
            )
            .add_systems(FixedUpdate, advance_tick.in_set(SimSet::Tick))
            .add_systems(
                Update,
                exit_after_runtime.run_if(|auto: Res<AutoConfig>| auto.run_duration_seconds.is_some()),
            );
    }
}

fn advance_tick(mut sim: ResMut<SimState>) {
    sim.tick += 1;
}

fn exit_after_runtime(
    sim: Res<SimState>,
    auto: Res<AutoConfig>,
    mut sent: Local<bool>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(limit) = auto.run_duration_seconds else { return; };
    if *sent || sim.tick < SimState::ticks_for(limit) { return; }
    info!("EXIT runtime reached tick={} seconds={:.2}", sim.tick, sim.seconds());
    *sent = true;
    ev_exit.send(AppExit::Success);
}
