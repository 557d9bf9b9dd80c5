//! Static scenery: ground, lights, and randomly scattered rocks and trees.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use rand::Rng;

use crate::core::Session;
use crate::rendering::VisualConfig;

const GROUND_SIZE: f32 = 100.0;
const ROCK_COUNT: usize = 500;
/// Rock centers sit this far above the ground plane
const ROCK_LIFT: f32 = 0.2;
const TREE_COUNT: usize = 30;
const TREE_AREA: f32 = 80.0;

/// Spawn the ground plane, lights and decorations.
pub fn setup_scenery(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    visual_config: Res<VisualConfig>,
    session: Res<Session>,
) {
    let ground_height = session.config.ground_height;
    spawn_lights(&mut commands, &visual_config);

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.133, 0.545, 0.133),
            perceptual_roughness: 0.9,
            ..default()
        })),
        ground_transform(ground_height),
        NotShadowCaster,
    ));

    let mut rng = rand::thread_rng();
    spawn_rocks(&mut commands, &mut meshes, &mut materials, &mut rng, ground_height);
    spawn_trees(&mut commands, &mut meshes, &mut materials, &mut rng);
}

fn spawn_lights(commands: &mut Commands, visual_config: &VisualConfig) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: visual_config.ambient_brightness,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: visual_config.sun_illuminance,
            shadows_enabled: visual_config.shadows_enabled,
            ..default()
        },
        Transform::from_xyz(100.0, 100.0, 50.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// The ground plane sits at the height the player's feet clamp to.
fn ground_transform(ground_height: f32) -> Transform {
    Transform::from_xyz(0.0, ground_height, 0.0)
}

fn spawn_rocks(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
    ground_height: f32,
) {
    // Low-poly unit rock, scaled per instance
    let rock_mesh = match Sphere::new(1.0).mesh().ico(0) {
        Ok(mesh) => mesh,
        Err(e) => {
            warn!("Falling back to UV rock mesh: {}", e);
            Sphere::new(1.0).mesh().uv(6, 4)
        }
    };
    let rock_mesh = meshes.add(rock_mesh);
    let rock_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.5, 0.5, 0.5),
        ..default()
    });

    for _ in 0..ROCK_COUNT {
        let radius = 0.1 + rng.gen::<f32>() * 0.3;
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * GROUND_SIZE,
            ground_height + ROCK_LIFT,
            (rng.gen::<f32>() - 0.5) * GROUND_SIZE,
        );

        commands.spawn((
            Mesh3d(rock_mesh.clone()),
            MeshMaterial3d(rock_material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(radius)),
        ));
    }
}

fn spawn_trees(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    rng: &mut impl Rng,
) {
    let trunk_mesh = meshes.add(ConicalFrustum {
        radius_top: 0.2,
        radius_bottom: 0.3,
        height: 2.0,
    });
    let leaves_mesh = meshes.add(Sphere::new(1.5).mesh().uv(8, 8));
    let trunk_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.545, 0.271, 0.075),
        ..default()
    });
    let leaves_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.133, 0.545, 0.133),
        ..default()
    });

    for _ in 0..TREE_COUNT {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * TREE_AREA,
            0.0,
            (rng.gen::<f32>() - 0.5) * TREE_AREA,
        );

        commands
            .spawn((
                Transform::from_translation(position),
                Visibility::default(),
            ))
            .with_children(|tree| {
                tree.spawn((
                    Mesh3d(trunk_mesh.clone()),
                    MeshMaterial3d(trunk_material.clone()),
                    Transform::default(),
                ));
                tree.spawn((
                    Mesh3d(leaves_mesh.clone()),
                    MeshMaterial3d(leaves_material.clone()),
                    Transform::from_xyz(0.0, 1.5, 0.0),
                ));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameConfig;

    #[test]
    fn ground_plane_follows_configured_height() {
        let config = GameConfig {
            ground_height: -3.5,
            ..GameConfig::default()
        };

        assert_eq!(ground_transform(config.ground_height).translation.y, -3.5);
        assert_eq!(
            ground_transform(GameConfig::default().ground_height).translation.y,
            -2.0
        );
    }
}
