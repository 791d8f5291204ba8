//! Convenience re-exports for frequently used types & plugins.
pub use crate::plugins::core_sim::{SimState, SimSet, GolfTuning, CameraTuning, AutoConfig, CoreSimPlugin, FIXED_HZ};
pub use crate::plugins::course::{CourseCatalog, CourseError, CourseSettings, CoursePlugin, Hole, parse_course, load_course_file, BUILTIN_COURSE};
pub use crate::plugins::game_state::{GameSession, CameraMode, GameStatePlugin};
pub use crate::plugins::level::{LevelPlugin, HoleLoadedEvent, load_hole};
pub use crate::plugins::ball::{BallState, BallPlugin, FlightOutcome, BallLandedEvent, HoleCompletedEvent, step_flight, horizontal_distance};
pub use crate::plugins::shooting::{ShootingPlugin, ShotInputEvent, ShotFiredEvent, press, charge, release, launch_velocity};
pub use crate::plugins::camera::{CameraPlugin, CameraRig, CameraPose, GolfCamera, target_pose};
pub use crate::plugins::tracer::{Tracer, TracerPlugin};
pub use crate::plugins::terrain::{TerrainPlugin, TerrainConfig, Heightfield, generate_heightfield, heightfield_mesh};
pub use crate::plugins::scene::ScenePlugin;
pub use crate::plugins::hud::HudPlugin;
pub use crate::plugins::autoplay::{AutoplayPlugin, AutoRuntime};
