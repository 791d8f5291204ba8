//! Library entry for integration tests & external tooling.
//! Exposes plugin modules and a prelude for common types.

pub mod plugins {
    pub mod core_sim;
    pub mod course;
    pub mod game_state;
    pub mod level;
    pub mod ball;
    pub mod shooting;
    pub mod camera;
    pub mod tracer;
    pub mod terrain;
    pub mod scene;
    pub mod hud;
    pub mod autoplay;
}
pub mod prelude;
