// Game session: the single owned gameplay state mutated by input and the fixed tick.

use bevy::prelude::*;

use crate::plugins::ball::BallState;
use crate::plugins::tracer::Tracer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Trailing behind the ball, looking down the play direction.
    #[default]
    Player,
    /// Tracking the ball in flight.
    Ball,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct GameSession {
    pub ball: BallState,
    pub hole_index: usize,
    pub camera_mode: CameraMode,
    pub charging: bool,
    pub power: u32,
    pub strokes: u32,
    pub tracer: Tracer,
}

impl GameSession {
    pub fn is_ball_at_rest(&self) -> bool {
        self.ball.is_at_rest()
    }
}

pub struct GameStatePlugin;
impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSession>();
    }
}
