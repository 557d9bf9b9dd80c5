//! Combat systems - attack trigger and attack effect presentation.

use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;

use super::components::*;
use crate::core::{GameEvent, Session, SessionEntity, SessionSet};
use crate::sim::{AttackOutcome, SessionEvent};

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.add_systems(Startup, setup_effect_assets)
        .add_systems(Update, attack_on_click.in_set(SessionSet::Attack))
        .add_systems(
            Update,
            (
                spawn_attack_effects,
                despawn_expired_effects,
                sync_attack_effects,
            )
                .chain()
                .in_set(SessionSet::Present),
        );
}

fn setup_effect_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    commands.insert_resource(AttackEffectAssets {
        mesh: meshes.add(Sphere::new(0.2).mesh().uv(8, 8)),
    });
}

/// Fire one attack per left mouse press.
///
/// Reads raw button events rather than `ButtonInput` so two presses within
/// one frame still count as two attack attempts. Also runs on the game over
/// screen, where a finished session swallows the restart click.
fn attack_on_click(mut buttons: EventReader<MouseButtonInput>, mut session: ResMut<Session>) {
    for event in buttons.read() {
        if event.button != MouseButton::Left || event.state != ButtonState::Pressed {
            continue;
        }

        match session.attack() {
            AttackOutcome::Suppressed => debug!("Attack suppressed by cooldown"),
            AttackOutcome::Fired { hits, kills } => {
                debug!("Attack hit {} enemies, killed {}", hits, kills);
            }
        }
    }
}

/// Give every new attack effect a mesh and its own fading material.
fn spawn_attack_effects(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    assets: Res<AttackEffectAssets>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<Session>,
) {
    for GameEvent(event) in events.read() {
        let SessionEvent::EffectSpawned { id, position } = event else {
            continue;
        };

        let opacity = session
            .effect(*id)
            .map_or(session.config.effect_initial_opacity, |e| e.opacity);

        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: effect_color(opacity),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::from_translation(*position),
            AttackEffectVisual { id: *id },
            SessionEntity,
        ));
    }
}

/// Remove effects whose animation has finished.
fn despawn_expired_effects(
    mut commands: Commands,
    mut events: EventReader<GameEvent>,
    effect_query: Query<(Entity, &AttackEffectVisual)>,
) {
    for GameEvent(event) in events.read() {
        let SessionEvent::EffectExpired { id } = event else {
            continue;
        };

        for (entity, effect) in effect_query.iter() {
            if effect.id == *id {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

/// Copy scale and opacity of each live effect.
fn sync_attack_effects(
    session: Res<Session>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut effect_query: Query<(
        &AttackEffectVisual,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    for (effect, mut transform, material) in effect_query.iter_mut() {
        let Some(state) = session.effect(effect.id) else {
            continue;
        };

        transform.scale = Vec3::splat(state.scale);
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = effect_color(state.opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameConfig, GameSession};

    fn app_with_enemy_in_reach() -> App {
        let mut session = GameSession::empty(GameConfig::default());
        session.spawn_enemy(Vec3::new(2.0, 0.0, 0.0));

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<MouseButtonInput>()
            .insert_resource(Session(session))
            .add_systems(Update, attack_on_click);
        app
    }

    fn press(app: &mut App, button: MouseButton, state: ButtonState) {
        app.world_mut().send_event(MouseButtonInput {
            button,
            state,
            window: Entity::PLACEHOLDER,
        });
    }

    #[test]
    fn second_left_press_in_a_frame_hits_the_cooldown() {
        let mut app = app_with_enemy_in_reach();
        press(&mut app, MouseButton::Left, ButtonState::Pressed);
        press(&mut app, MouseButton::Left, ButtonState::Released);
        press(&mut app, MouseButton::Left, ButtonState::Pressed);

        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.attack_cooldown, session.config.attack_cooldown);
        assert_eq!(session.effects.len(), 1);
        assert_eq!(session.enemies[0].health, 15.0);
    }

    #[test]
    fn releases_and_other_buttons_do_not_attack() {
        let mut app = app_with_enemy_in_reach();
        press(&mut app, MouseButton::Left, ButtonState::Released);
        press(&mut app, MouseButton::Right, ButtonState::Pressed);
        press(&mut app, MouseButton::Middle, ButtonState::Pressed);

        app.update();

        let session = app.world().resource::<Session>();
        assert_eq!(session.attack_cooldown, 0);
        assert!(session.effects.is_empty());
        assert_eq!(session.enemies[0].health, 30.0);
    }
}
