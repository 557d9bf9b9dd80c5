//! In-game HUD - score counter and health bar.

use bevy::prelude::*;

use crate::core::{GameEvent, Session, SessionRestarted, SessionSet};
use crate::sim::SessionEvent;

/// Marker for the score counter text.
#[derive(Component)]
pub struct ScoreText;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud).add_systems(
        Update,
        (update_hud_from_events, reset_hud)
            .chain()
            .in_set(SessionSet::Present),
    );
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands, session: Res<Session>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(20.0)),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(score_label(session.score)),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(8.0)),
                    ..default()
                },
                ScoreText,
            ));

            // Bar background
            parent
                .spawn((
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(16.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(session.health_percent()),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.8, 0.2, 0.2)),
                        HealthBar,
                    ));
                });
        });
}

/// Refresh the counter and bar when the session reports a change.
fn update_hud_from_events(
    mut events: EventReader<GameEvent>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    for GameEvent(event) in events.read() {
        match event {
            SessionEvent::ScoreChanged { score } => {
                if let Ok(mut text) = score_query.get_single_mut() {
                    text.0 = score_label(*score);
                }
            }
            SessionEvent::HealthChanged { health } => {
                if let Ok(mut bar) = bar_query.get_single_mut() {
                    bar.width = Val::Percent(health.clamp(0.0, 100.0) as f32);
                }
            }
            _ => {}
        }
    }
}

/// Put the HUD back to a fresh session's values.
fn reset_hud(
    mut restarted: EventReader<SessionRestarted>,
    session: Res<Session>,
    mut score_query: Query<&mut Text, With<ScoreText>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    if restarted.read().count() == 0 {
        return;
    }

    if let Ok(mut text) = score_query.get_single_mut() {
        text.0 = score_label(session.score);
    }
    if let Ok(mut bar) = bar_query.get_single_mut() {
        bar.width = Val::Percent(session.health_percent());
    }
}
