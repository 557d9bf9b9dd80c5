//! World plugin - static scenery and shared prefab assets.

use bevy::prelude::*;

use super::prefabs::setup_humanoid_assets;
use super::scenery::setup_scenery;

/// World plugin - builds the meadow and the assets humanoids are made from.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_humanoid_assets, setup_scenery));
    }
}
