//! UI plugin - HUD and the game over screen.

use bevy::prelude::*;

use super::hud;
use crate::core::{GameState, RestartRequested, Session, SessionSet};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Game over
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(
                Update,
                game_over_input
                    .in_set(SessionSet::Input)
                    .run_if(in_state(GameState::GameOver)),
            )
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over);
    }
}

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

pub fn game_over_message(score: u32) -> String {
    format!("Game Over! Final score: {}", score)
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands, session: Res<Session>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(game_over_message(session.score)),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Click or press Enter to play again"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });
}

/// Restart on click or Enter.
fn game_over_input(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restart: EventWriter<RestartRequested>,
) {
    if mouse.just_pressed(MouseButton::Left) || keyboard.just_pressed(KeyCode::Enter) {
        restart.send(RestartRequested);
    }
}

/// Clean up game over entities.
fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverUi>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::hud::score_label;

    #[test]
    fn labels_show_score() {
        assert_eq!(score_label(30), "Score: 30");
        assert_eq!(game_over_message(120), "Game Over! Final score: 120");
    }
}
