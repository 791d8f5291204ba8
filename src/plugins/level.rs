// Hole loading: resets the session onto a hole of the catalog and announces it.
use bevy::prelude::*;

use crate::plugins::ball::BallState;
use crate::plugins::course::{load_course, CourseCatalog};
use crate::plugins::game_state::{CameraMode, GameSession};

/// Emitted whenever a hole (re)loads. Terrain and pin placement react to it.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct HoleLoadedEvent {
    pub index: usize,
    pub tee: Vec3,
    pub pin: Vec3,
    pub par: u32,
}

/// Put the session on hole `index` (wrapped). Ball, tracer, strokes & camera mode reset.
pub fn load_hole(session: &mut GameSession, catalog: &CourseCatalog, index: usize) -> HoleLoadedEvent {
    let index = catalog.wrap(index);
    let hole = *catalog.hole(index);
    session.hole_index = index;
    session.ball = BallState::at_rest(hole.tee);
    session.camera_mode = CameraMode::Player;
    session.tracer.clear();
    session.strokes = 0;
    HoleLoadedEvent { index, tee: hole.tee, pin: hole.pin, par: hole.par }
}

pub struct LevelPlugin;
impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HoleLoadedEvent>()
            .add_systems(Startup, start_course.after(load_course));
    }
}

fn start_course(
    mut session: ResMut<GameSession>,
    catalog: Res<CourseCatalog>,
    mut ev_loaded: EventWriter<HoleLoadedEvent>,
) {
    let ev = load_hole(&mut session, &catalog, 0);
    info!("HOLE loaded index={} par={} tee={:?} pin={:?}", ev.index, ev.par, ev.tee, ev.pin);
    ev_loaded.send(ev);
}
