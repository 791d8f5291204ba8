// Shot controller: press to charge, hold to build power, release to launch.
//
// Pointer & touch input are translated into `ShotInputEvent`s; a single system applies
// them to the session in arrival order using the camera rig's current facing.

use bevy::prelude::*;

use crate::plugins::camera::CameraRig;
use crate::plugins::core_sim::{GolfTuning, SimSet};
use crate::plugins::game_state::{CameraMode, GameSession};

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotInputEvent {
    Press,
    Release,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ShotFiredEvent {
    pub origin: Vec3,
    pub velocity: Vec3,
    pub power: u32,
}

/// Start charging if the ball is at rest. Returns whether charging is now active.
pub fn press(session: &mut GameSession) -> bool {
    if session.is_ball_at_rest() {
        session.charging = true;
    }
    session.charging
}

/// One tick of charge accumulation, saturating at `max_power`.
pub fn charge(session: &mut GameSession, tuning: &GolfTuning) {
    if !session.charging {
        return;
    }
    session.power = session.power.saturating_add(tuning.charge_increment).min(tuning.max_power);
}

/// Initial velocity for a shot of `power` along the horizontal part of `forward`.
pub fn launch_velocity(forward: Vec3, power: u32, tuning: &GolfTuning) -> Vec3 {
    let mut dir = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    if dir == Vec3::ZERO {
        dir = Vec3::NEG_Z;
    }
    let p = power as f32;
    let mut v = dir * (p * tuning.horizontal_factor);
    v.y += p * tuning.vertical_factor;
    v
}

/// Fire the charged shot. A release without a preceding press does nothing.
///
/// A zero-power release still switches the camera to ball mode; with zero velocity no
/// landing follows, so the camera stays there until the next real shot lands.
pub fn release(session: &mut GameSession, forward: Vec3, tuning: &GolfTuning) -> Option<ShotFiredEvent> {
    if !session.charging {
        return None;
    }
    let power = session.power;
    let velocity = launch_velocity(forward, power, tuning);
    session.charging = false;
    session.ball.velocity = velocity;
    session.power = 0;
    session.tracer.clear();
    session.camera_mode = CameraMode::Ball;
    session.strokes += 1;
    Some(ShotFiredEvent { origin: session.ball.position, velocity, power })
}

pub struct ShootingPlugin;
impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ShotInputEvent>()
            .add_event::<ShotFiredEvent>()
            .add_systems(Update, (pointer_shot_input, apply_shot_inputs).chain())
            .add_systems(FixedUpdate, charge_shot.in_set(SimSet::Charge));
    }
}

fn pointer_shot_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut ev_input: EventWriter<ShotInputEvent>,
) {
    let mut pressed = false;
    let mut released = false;
    if let Some(buttons) = buttons {
        pressed |= buttons.just_pressed(MouseButton::Left);
        released |= buttons.just_released(MouseButton::Left);
    }
    if let Some(touches) = touches {
        pressed |= touches.any_just_pressed();
        released |= touches.any_just_released() || touches.iter_just_canceled().next().is_some();
    }
    if pressed {
        ev_input.send(ShotInputEvent::Press);
    }
    if released {
        ev_input.send(ShotInputEvent::Release);
    }
}

fn apply_shot_inputs(
    mut ev_input: EventReader<ShotInputEvent>,
    mut session: ResMut<GameSession>,
    rig: Res<CameraRig>,
    tuning: Res<GolfTuning>,
    mut ev_shot: EventWriter<ShotFiredEvent>,
) {
    for input in ev_input.read() {
        match input {
            ShotInputEvent::Press => {
                if press(&mut session) {
                    debug!("SHOT charging hole={}", session.hole_index);
                }
            }
            ShotInputEvent::Release => {
                if let Some(shot) = release(&mut session, rig.forward(), &tuning) {
                    info!(
                        "SHOT fired power={} vel=({:.3},{:.3},{:.3}) stroke={}",
                        shot.power, shot.velocity.x, shot.velocity.y, shot.velocity.z, session.strokes
                    );
                    ev_shot.send(shot);
                }
            }
        }
    }
}

fn charge_shot(mut session: ResMut<GameSession>, tuning: Res<GolfTuning>) {
    if session.charging {
        charge(&mut session, &tuning);
    }
}
