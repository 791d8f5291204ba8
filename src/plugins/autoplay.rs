use bevy::prelude::*;

use crate::plugins::core_sim::{AutoConfig, SimSet, SimState, FIXED_HZ};
use crate::plugins::game_state::GameSession;
use crate::plugins::shooting::ShotInputEvent;

#[derive(Resource, Default)]
pub struct AutoRuntime {
    pub next_swing_tick: u64,
    pub release_tick: Option<u64>,
    pub swings: u32,
}

#[derive(Resource, Default)]
pub struct LogState { pub last_logged_second: u64 }

pub struct AutoplayPlugin;
impl Plugin for AutoplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AutoRuntime>()
            .init_resource::<LogState>()
            .add_systems(FixedUpdate, scripted_autoplay.in_set(SimSet::Input))
            .add_systems(FixedUpdate, debug_log_each_second.after(SimSet::Flight));
    }
}

// Press once the ball rests, hold for `charge_ticks`, release.
fn scripted_autoplay(
    sim: Res<SimState>,
    cfg: Res<AutoConfig>,
    session: Res<GameSession>,
    mut runtime: ResMut<AutoRuntime>,
    mut ev_input: EventWriter<ShotInputEvent>,
) {
    if !cfg.enabled { return; }

    if let Some(release_tick) = runtime.release_tick {
        if sim.tick >= release_tick {
            ev_input.send(ShotInputEvent::Release);
            runtime.release_tick = None;
            runtime.swings += 1;
            runtime.next_swing_tick = sim.tick + SimState::ticks_for(cfg.swing_interval_seconds);
            info!("AUTOPLAY release t={:.2}s tick={} swing={}", sim.seconds(), sim.tick, runtime.swings);
        }
        return;
    }

    if sim.tick < runtime.next_swing_tick || !session.is_ball_at_rest() { return; }
    ev_input.send(ShotInputEvent::Press);
    runtime.release_tick = Some(sim.tick + cfg.charge_ticks as u64);
    info!("AUTOPLAY press t={:.2}s tick={} hole={}", sim.seconds(), sim.tick, session.hole_index);
}

fn debug_log_each_second(
    sim: Res<SimState>,
    cfg: Res<AutoConfig>,
    mut log_state: ResMut<LogState>,
    session: Res<GameSession>,
) {
    if !cfg.enabled { return; }
    let per_second = FIXED_HZ as u64;
    if sim.tick == 0 || sim.tick % per_second != 0 { return; }
    let current_second = sim.tick / per_second;
    if current_second == log_state.last_logged_second { return; }
    log_state.last_logged_second = current_second;
    let b = &session.ball;
    info!("T+{}s tick={} hole={} ball=({:.2},{:.2},{:.2}) speed={:.3}",
        current_second, sim.tick, session.hole_index,
        b.position.x, b.position.y, b.position.z,
        b.velocity.length());
}
