// Ball state & per-tick flight integration (gravity, drag, ground contact, capture, bounds).
use bevy::prelude::*;

use crate::plugins::core_sim::{GolfTuning, SimSet};
use crate::plugins::course::CourseCatalog;
use crate::plugins::game_state::{CameraMode, GameSession};
use crate::plugins::level::{load_hole, HoleLoadedEvent};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BallState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl BallState {
    pub fn at_rest(position: Vec3) -> Self {
        Self { position, velocity: Vec3::ZERO }
    }

    /// A ball with any non-zero velocity is in flight.
    pub fn is_at_rest(&self) -> bool {
        self.velocity.length() == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightOutcome {
    Resting,
    Airborne,
    Landed { position: Vec3 },
    Holed { from: usize, loaded: HoleLoadedEvent },
}

#[derive(Event, Debug, Clone, Copy)]
pub struct BallLandedEvent {
    pub position: Vec3,
    pub distance_to_pin: f32,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct HoleCompletedEvent {
    pub index: usize,
    pub strokes: u32,
    pub par: u32,
}

/// Horizontal (XZ) distance between two points.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Advance the ball by one tick. Displacement uses the velocity from before this
/// tick's gravity & drag update.
pub fn step_flight(session: &mut GameSession, catalog: &CourseCatalog, tuning: &GolfTuning) -> FlightOutcome {
    let mut outcome = FlightOutcome::Resting;

    if !session.ball.is_at_rest() {
        let ball = &mut session.ball;
        ball.position += ball.velocity;
        ball.velocity.y -= tuning.gravity;
        ball.velocity *= tuning.drag;
        session.tracer.push(ball.position);
        outcome = FlightOutcome::Airborne;

        if ball.position.y <= tuning.rest_height {
            ball.position.y = tuning.rest_height;
            ball.velocity = Vec3::ZERO;
            session.camera_mode = CameraMode::Player;
            let position = ball.position;
            outcome = FlightOutcome::Landed { position };

            let pin = catalog.hole(session.hole_index).pin;
            if horizontal_distance(position, pin) < tuning.capture_radius {
                let from = session.hole_index;
                let loaded = load_hole(session, catalog, from + 1);
                outcome = FlightOutcome::Holed { from, loaded };
            }
        }
    }

    let bound = tuning.world_bound;
    let p = &mut session.ball.position;
    p.x = p.x.clamp(-bound, bound);
    p.z = p.z.clamp(-bound, bound);

    outcome
}

pub struct BallPlugin;
impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BallLandedEvent>()
            .add_event::<HoleCompletedEvent>()
            .add_systems(FixedUpdate, advance_flight.in_set(SimSet::Flight));
    }
}

fn advance_flight(
    mut session: ResMut<GameSession>,
    catalog: Res<CourseCatalog>,
    tuning: Res<GolfTuning>,
    mut ev_landed: EventWriter<BallLandedEvent>,
    mut ev_completed: EventWriter<HoleCompletedEvent>,
    mut ev_loaded: EventWriter<HoleLoadedEvent>,
) {
    if session.is_ball_at_rest() {
        // Nothing to integrate; keep change detection quiet while idle.
        let p = session.ball.position;
        let bound = tuning.world_bound;
        if p.x.abs() <= bound && p.z.abs() <= bound {
            return;
        }
    }

    let strokes = session.strokes;
    let hole = session.hole_index;
    match step_flight(&mut session, &catalog, &tuning) {
        FlightOutcome::Resting | FlightOutcome::Airborne => {}
        FlightOutcome::Landed { position } => {
            let distance_to_pin = horizontal_distance(position, catalog.hole(hole).pin);
            info!("BALL landed hole={} pos=({:.2},{:.2},{:.2}) to_pin={:.2}", hole, position.x, position.y, position.z, distance_to_pin);
            ev_landed.send(BallLandedEvent { position, distance_to_pin });
        }
        FlightOutcome::Holed { from, loaded } => {
            let par = catalog.hole(from).par;
            info!("HOLE complete index={} strokes={} par={}", from, strokes, par);
            ev_completed.send(HoleCompletedEvent { index: from, strokes, par });
            info!("HOLE loaded index={} par={} tee={:?} pin={:?}", loaded.index, loaded.par, loaded.tee, loaded.pin);
            ev_loaded.send(loaded);
        }
    }
}
