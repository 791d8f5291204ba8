// Course catalog: ordered hole definitions plus optional tuning overrides, loaded from RON.
use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::plugins::core_sim::GolfTuning;
use crate::plugins::terrain::TerrainConfig;

/// Built-in course shipped with the game (also used on wasm where there is no filesystem).
pub const BUILTIN_COURSE: &str = include_str!("../../assets/courses/augusta.ron");

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("failed to read course file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse course: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("course has no holes")]
    Empty,
    #[error("invalid tuning: {0}")]
    InvalidTuning(&'static str),
}

// ----------------------- Definitions (RON) -----------------------

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Vec3Def { pub x: f32, pub y: f32, pub z: f32 }
impl Vec3Def { pub fn to_vec3(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) } }

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct HoleDef {
    pub tee: Vec3Def,
    pub pin: Vec3Def,
    pub par: u32,
}

#[derive(Debug, Deserialize)]
pub struct CourseFile {
    pub name: String,
    pub holes: Vec<HoleDef>,
    #[serde(default)]
    pub tuning: GolfTuning,
    #[serde(default)]
    pub terrain: TerrainConfig,
}

// ----------------------- Catalog -----------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hole {
    pub tee: Vec3,
    pub pin: Vec3,
    pub par: u32,
}

/// Fixed, ordered, non-empty list of holes. Lookups wrap modulo the catalog length.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CourseCatalog {
    name: String,
    holes: Vec<Hole>,
}

impl CourseCatalog {
    pub fn new(name: impl Into<String>, holes: Vec<Hole>) -> Result<Self, CourseError> {
        if holes.is_empty() {
            return Err(CourseError::Empty);
        }
        Ok(Self { name: name.into(), holes })
    }

    pub fn name(&self) -> &str { &self.name }

    /// Never zero: `new` rejects empty hole lists.
    pub fn hole_count(&self) -> usize { self.holes.len() }

    pub fn wrap(&self, index: usize) -> usize { index % self.holes.len() }

    pub fn hole(&self, index: usize) -> &Hole { &self.holes[self.wrap(index)] }

    pub fn holes(&self) -> &[Hole] { &self.holes }
}

impl Default for CourseCatalog {
    /// The built-in course; a single straight hole if that asset fails to parse.
    fn default() -> Self {
        match parse_course(BUILTIN_COURSE) {
            Ok((catalog, _, _)) => catalog,
            Err(e) => {
                warn!("built-in course unusable ({e}), using a single practice hole");
                Self {
                    name: "Practice".into(),
                    holes: vec![Hole { tee: Vec3::new(0.0, 1.0, 0.0), pin: Vec3::new(0.0, 0.0, -30.0), par: 3 }],
                }
            }
        }
    }
}

// ----------------------- Loading -----------------------

pub fn parse_course(src: &str) -> Result<(CourseCatalog, GolfTuning, TerrainConfig), CourseError> {
    let file: CourseFile = ron::from_str(src)?;
    validate_tuning(&file.tuning)?;
    let holes = file
        .holes
        .iter()
        .map(|d| Hole { tee: d.tee.to_vec3(), pin: d.pin.to_vec3(), par: d.par })
        .collect();
    let catalog = CourseCatalog::new(file.name, holes)?;
    Ok((catalog, file.tuning, file.terrain))
}

pub fn load_course_file(path: &Path) -> Result<(CourseCatalog, GolfTuning, TerrainConfig), CourseError> {
    let data = fs::read_to_string(path).map_err(|source| CourseError::Io { path: path.to_path_buf(), source })?;
    parse_course(&data)
}

fn validate_tuning(t: &GolfTuning) -> Result<(), CourseError> {
    if !(t.drag > 0.0 && t.drag < 1.0) {
        return Err(CourseError::InvalidTuning("drag must be in (0, 1)"));
    }
    if t.max_power == 0 {
        return Err(CourseError::InvalidTuning("max_power must be positive"));
    }
    if t.capture_radius <= 0.0 {
        return Err(CourseError::InvalidTuning("capture_radius must be positive"));
    }
    if t.world_bound <= 0.0 {
        return Err(CourseError::InvalidTuning("world_bound must be positive"));
    }
    Ok(())
}

/// Where to load the course from; `None` uses the built-in course.
#[derive(Resource, Debug, Clone, Default)]
pub struct CourseSettings {
    pub path: Option<PathBuf>,
}

// ----------------------- Plugin -----------------------

pub struct CoursePlugin;
impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CourseSettings>()
            .add_systems(Startup, load_course);
    }
}

/// Installs the catalog, tuning and terrain settings. Resources inserted before Startup win
/// over the course file; anything still missing comes from the file or the defaults.
pub fn load_course(
    mut commands: Commands,
    settings: Res<CourseSettings>,
    preset_catalog: Option<Res<CourseCatalog>>,
    preset_tuning: Option<Res<GolfTuning>>,
    preset_terrain: Option<Res<TerrainConfig>>,
) {
    let (catalog, tuning, terrain) = match preset_catalog {
        Some(catalog) => {
            info!("COURSE using preset catalog name={} holes={}", catalog.name(), catalog.hole_count());
            (None, GolfTuning::default(), TerrainConfig::default())
        }
        None => {
            let loaded = match &settings.path {
                Some(path) => load_course_file(path),
                None => parse_course(BUILTIN_COURSE),
            };
            match loaded {
                Ok((catalog, tuning, terrain)) => {
                    info!("COURSE loaded name={} holes={}", catalog.name(), catalog.hole_count());
                    (Some(catalog), tuning, terrain)
                }
                Err(e) => {
                    error!("Failed to load course, falling back to built-in defaults: {e}");
                    (Some(CourseCatalog::default()), GolfTuning::default(), TerrainConfig::default())
                }
            }
        }
    };

    if let Some(catalog) = catalog {
        commands.insert_resource(catalog);
    }
    if preset_tuning.is_some() {
        debug!("COURSE keeping preset tuning");
    } else {
        commands.insert_resource(tuning);
    }
    if preset_terrain.is_some() {
        debug!("COURSE keeping preset terrain settings");
    } else {
        commands.insert_resource(terrain);
    }
}
