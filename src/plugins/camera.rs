use bevy::prelude::*;

use crate::plugins::core_sim::{CameraTuning, GolfTuning, SimSet};
use crate::plugins::game_state::{CameraMode, GameSession};

/// Marker component for the single gameplay camera.
#[derive(Component)]
pub struct GolfCamera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

/// Simulated camera pose, advanced on the fixed tick and copied onto the camera entity.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self { position: Vec3::new(0.0, 2.0, 5.0), look_at: Vec3::new(0.0, 1.0, -10.0) }
    }
}

impl CameraRig {
    /// Unit facing direction; world -Z when position and target coincide.
    pub fn forward(&self) -> Vec3 {
        let f = (self.look_at - self.position).normalize_or_zero();
        if f == Vec3::ZERO { Vec3::NEG_Z } else { f }
    }

    /// Move a fraction of the remaining distance toward the mode's target pose.
    pub fn advance(&mut self, mode: CameraMode, ball: Vec3, cfg: &CameraTuning) {
        let target = target_pose(mode, ball, cfg);
        let factor = match mode {
            CameraMode::Player => cfg.player_lerp,
            CameraMode::Ball => cfg.ball_lerp,
        };
        self.position = self.position.lerp(target.position, factor);
        self.look_at = target.look_at;
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }
}

pub fn target_pose(mode: CameraMode, ball: Vec3, cfg: &CameraTuning) -> CameraPose {
    match mode {
        CameraMode::Player => CameraPose {
            position: Vec3::new(ball.x, cfg.player_height, ball.z + cfg.player_back),
            look_at: Vec3::new(ball.x, cfg.player_look_height, ball.z - cfg.player_look_ahead),
        },
        CameraMode::Ball => CameraPose {
            position: Vec3::new(ball.x, ball.y + cfg.ball_rise, ball.z + cfg.ball_back),
            look_at: ball,
        },
    }
}

pub struct CameraPlugin;
impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(FixedUpdate, direct_camera.in_set(SimSet::Camera))
            .add_systems(Update, apply_camera_rig);
    }
}

fn direct_camera(session: Res<GameSession>, tuning: Res<GolfTuning>, mut rig: ResMut<CameraRig>) {
    rig.advance(session.camera_mode, session.ball.position, &tuning.camera);
}

fn apply_camera_rig(rig: Res<CameraRig>, mut q_cam: Query<&mut Transform, With<GolfCamera>>) {
    if !rig.is_changed() { return; }
    if let Ok(mut cam_t) = q_cam.get_single_mut() {
        *cam_t = rig.transform();
    }
}
