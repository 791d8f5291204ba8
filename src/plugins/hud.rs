use bevy::prelude::*;

use crate::plugins::ball::{BallLandedEvent, HoleCompletedEvent};
use crate::plugins::course::CourseCatalog;
use crate::plugins::game_state::GameSession;
use crate::plugins::shooting::ShotFiredEvent;

#[derive(Component)]
pub struct PowerReadout;

#[derive(Component)]
pub struct HoleReadout;

/// Result of the last shot; blank while a shot is in the air.
#[derive(Component)]
pub struct ShotReadout;

pub struct HudPlugin;
impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, (update_power_readout, update_hole_readout, update_shot_readout));
    }
}

pub fn power_text(power: u32) -> String {
    format!("Power: {power}")
}

pub fn hole_text(session: &GameSession, catalog: &CourseCatalog) -> String {
    let hole = catalog.hole(session.hole_index);
    format!(
        "Hole {}/{}  Par {}  Strokes {}",
        session.hole_index + 1,
        catalog.hole_count(),
        hole.par,
        session.strokes
    )
}

pub fn landing_text(distance_to_pin: f32) -> String {
    format!("{distance_to_pin:.1} to pin")
}

pub fn holed_text(strokes: u32, par: u32) -> String {
    if strokes == 1 {
        return "Hole in one!".into();
    }
    let verdict = match i64::from(strokes) - i64::from(par) {
        d if d <= -2 => "Eagle",
        -1 => "Birdie",
        0 => "Par",
        1 => "Bogey",
        _ => "Over par",
    };
    format!("Holed in {strokes}: {verdict}")
}

fn spawn_hud(mut commands: Commands) {
    let style = TextStyle { font_size: 22.0, color: Color::WHITE, ..default() };
    commands.spawn((
        TextBundle::from_section(power_text(0), style.clone()).with_style(Style {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(8.0),
            ..default()
        }),
        PowerReadout,
    ));
    commands.spawn((
        TextBundle::from_section("", style).with_style(Style {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(8.0),
            ..default()
        }),
        HoleReadout,
    ));
    commands.spawn((
        TextBundle::from_section("", TextStyle { font_size: 28.0, color: Color::srgb(1.0, 1.0, 0.0), ..default() })
            .with_style(Style {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                bottom: Val::Px(12.0),
                ..default()
            }),
        ShotReadout,
    ));
}

// Tracks the session: rises while charging, drops back to 0 on release.
fn update_power_readout(
    session: Res<GameSession>,
    mut q_text: Query<&mut Text, With<PowerReadout>>,
    mut shown: Local<Option<u32>>,
) {
    if *shown == Some(session.power) { return; }
    if let Ok(mut text) = q_text.get_single_mut() {
        text.sections[0].value = power_text(session.power);
        *shown = Some(session.power);
    }
}

fn update_hole_readout(
    session: Res<GameSession>,
    catalog: Option<Res<CourseCatalog>>,
    mut q_text: Query<&mut Text, With<HoleReadout>>,
) {
    let Some(catalog) = catalog else { return; };
    if let Ok(mut text) = q_text.get_single_mut() {
        let value = hole_text(&session, &catalog);
        if text.sections[0].value != value {
            text.sections[0].value = value;
        }
    }
}

fn update_shot_readout(
    mut ev_fired: EventReader<ShotFiredEvent>,
    mut ev_landed: EventReader<BallLandedEvent>,
    mut ev_completed: EventReader<HoleCompletedEvent>,
    mut q_text: Query<&mut Text, With<ShotReadout>>,
) {
    // A capture never also reports a landing, so the last non-empty source wins.
    let mut message = None;
    if ev_fired.read().last().is_some() {
        message = Some(String::new());
    }
    if let Some(ev) = ev_landed.read().last() {
        message = Some(landing_text(ev.distance_to_pin));
    }
    if let Some(ev) = ev_completed.read().last() {
        message = Some(holed_text(ev.strokes, ev.par));
    }
    let Some(message) = message else { return; };
    if let Ok(mut text) = q_text.get_single_mut() {
        text.sections[0].value = message;
    }
}
