//! Player model and third-person camera, driven by the simulation.
//!
//! Movement itself is decided in `GameSession::tick`; these systems copy the
//! result onto the player's transform and the camera once per frame.

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use super::components::*;
use crate::core::{Session, SessionSet};
use crate::rendering::VisualConfig;
use crate::world::prefabs::setup_humanoid_assets;
use crate::world::{spawn_humanoid, HumanoidAssets};

/// Set up player spawning and sync systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(
        Startup,
        (spawn_player_system, spawn_camera_system).after(setup_humanoid_assets),
    )
    .add_systems(
        Update,
        (sync_player_transform, follow_camera).in_set(SessionSet::Present),
    );
}

fn spawn_player_system(mut commands: Commands, assets: Res<HumanoidAssets>, session: Res<Session>) {
    spawn_player(&mut commands, &assets, session.player.position);
}

fn spawn_camera_system(mut commands: Commands, session: Res<Session>, visual_config: Res<VisualConfig>) {
    spawn_camera(
        &mut commands,
        session.camera.position,
        session.camera.look_at,
        &visual_config,
    );
}

/// Spawn the player's humanoid model.
///
/// The model survives restarts; a fresh session starts it at the origin again.
pub fn spawn_player(commands: &mut Commands, assets: &HumanoidAssets, position: Vec3) -> Entity {
    spawn_humanoid(
        commands,
        assets,
        &assets.player,
        Transform::from_translation(position),
        Player,
    )
}

/// Spawn the third-person camera with sky fog.
pub fn spawn_camera(
    commands: &mut Commands,
    position: Vec3,
    look_at: Vec3,
    visual_config: &VisualConfig,
) -> Entity {
    commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: visual_config.fov_degrees.to_radians(),
                near: 0.1,
                far: 1000.0,
                ..default()
            }),
            DistanceFog {
                color: visual_config.sky(),
                falloff: FogFalloff::ExponentialSquared {
                    density: visual_config.effective_fog_density(),
                },
                ..default()
            },
            Transform::from_translation(position).looking_at(look_at, Vec3::Y),
            PlayerCamera,
        ))
        .id()
}

/// Copy the player's drawn position and mouse yaw onto its model.
pub fn sync_player_transform(
    session: Res<Session>,
    mut player_query: Query<&mut Transform, With<Player>>,
) {
    let Ok(mut transform) = player_query.get_single_mut() else {
        return;
    };

    transform.translation = session.player.render_position;
    transform.look_to(session.player.facing(), Vec3::Y);
}

/// Place the camera where the simulation eased it to.
pub fn follow_camera(
    session: Res<Session>,
    mut camera_query: Query<&mut Transform, (With<PlayerCamera>, Without<Player>)>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    *transform = Transform::from_translation(session.camera.position)
        .looking_at(session.camera.look_at, Vec3::Y);
}
