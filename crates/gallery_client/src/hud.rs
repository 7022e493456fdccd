//! Текстовый HUD: prompt у картины, заголовок открытой картины, пауза

use bevy::prelude::*;
use gallery_simulation::{GalleryPaused, GallerySet, NearestPainting, SelectedPainting};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud_text.after(GallerySet::Presentation));
    }
}

#[derive(Component)]
struct HudText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 22.0,
            ..default()
        },
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            left: Val::Px(24.0),
            ..default()
        },
        HudText,
    ));
}

fn hud_line(nearest: &NearestPainting, selected: &SelectedPainting, paused: bool) -> String {
    if paused {
        return "Paused (P to resume)".to_string();
    }

    match (&selected.0, &nearest.0) {
        (Some(painting), _) => format!("{}   [←/→ browse, Esc close]", painting.title),
        (None, Some(painting)) => format!("[Enter] View {}", painting.title),
        (None, None) => String::new(),
    }
}

fn update_hud_text(
    nearest: Res<NearestPainting>,
    selected: Res<SelectedPainting>,
    paused: Res<GalleryPaused>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    if !(nearest.is_changed() || selected.is_changed() || paused.is_changed()) {
        return;
    }

    let line = hud_line(&nearest, &selected, paused.0);
    for mut text in query.iter_mut() {
        text.0 = line.clone();
    }
}
