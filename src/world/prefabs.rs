//! Humanoid prefab shared by the player and enemies.
//!
//! A humanoid is a cylinder body, sphere head, two slightly splayed legs and
//! two horizontal arms, parented under one root whose transform the
//! simulation drives.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

/// Colour scheme for one kind of humanoid.
#[derive(Clone)]
pub struct HumanoidPalette {
    pub body: Handle<StandardMaterial>,
    pub legs: Handle<StandardMaterial>,
    pub arms: Handle<StandardMaterial>,
}

/// Meshes and materials for every humanoid, built once at startup.
#[derive(Resource)]
pub struct HumanoidAssets {
    pub body: Handle<Mesh>,
    pub head: Handle<Mesh>,
    pub leg: Handle<Mesh>,
    pub arm: Handle<Mesh>,
    pub player: HumanoidPalette,
    pub enemy: HumanoidPalette,
}

impl HumanoidAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let mut shiny = |color: Color| {
            materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.45,
                ..default()
            })
        };

        // Player: red body, blue legs, green arms
        let player = HumanoidPalette {
            body: shiny(Color::srgb(1.0, 0.0, 0.0)),
            legs: shiny(Color::srgb(0.0, 0.0, 1.0)),
            arms: shiny(Color::srgb(0.0, 1.0, 0.0)),
        };

        // Enemy: red body, dark red limbs
        let dark_red = shiny(Color::srgb(0.545, 0.0, 0.0));
        let enemy = HumanoidPalette {
            body: shiny(Color::srgb(1.0, 0.0, 0.0)),
            legs: dark_red.clone(),
            arms: dark_red,
        };

        Self {
            body: meshes.add(Cylinder::new(0.4, 1.2)),
            head: meshes.add(Sphere::new(0.4).mesh().uv(16, 16)),
            leg: meshes.add(Cylinder::new(0.1, 1.0)),
            arm: meshes.add(Cylinder::new(0.08, 0.9)),
            player,
            enemy,
        }
    }
}

/// Build the humanoid asset set at startup.
pub fn setup_humanoid_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(HumanoidAssets::new(&mut meshes, &mut materials));
}

/// Spawn a humanoid with its parts as children of the root.
pub fn spawn_humanoid(
    commands: &mut Commands,
    assets: &HumanoidAssets,
    palette: &HumanoidPalette,
    transform: Transform,
    root: impl Bundle,
) -> Entity {
    commands
        .spawn((root, transform, Visibility::default()))
        .with_children(|parent| {
            // Body raised so its base sits at the root
            parent.spawn((
                Mesh3d(assets.body.clone()),
                MeshMaterial3d(palette.body.clone()),
                Transform::from_xyz(0.0, 0.6, 0.0),
            ));

            parent.spawn((
                Mesh3d(assets.head.clone()),
                MeshMaterial3d(palette.body.clone()),
                Transform::from_xyz(0.0, 1.4, 0.0),
            ));

            for (x, tilt) in [(-0.15, 0.1), (0.15, -0.1)] {
                parent.spawn((
                    Mesh3d(assets.leg.clone()),
                    MeshMaterial3d(palette.legs.clone()),
                    Transform::from_xyz(x, -0.9, 0.0)
                        .with_rotation(Quat::from_rotation_z(tilt)),
                ));
            }

            for x in [-0.4, 0.4] {
                parent.spawn((
                    Mesh3d(assets.arm.clone()),
                    MeshMaterial3d(palette.arms.clone()),
                    Transform::from_xyz(x, 1.0, 0.0)
                        .with_rotation(Quat::from_rotation_z(FRAC_PI_2)),
                ));
            }
        })
        .id()
}
