//! Projectile lists shared with the physics layer.
//!
//! [`LiveProjectiles`] belongs to physics: it moves, expires and removes
//! entries, while the compositor only reads it. Attacks push their new
//! projectiles into [`SpawnedProjectiles`], which physics drains.

use bevy_ecs::prelude::Resource;

use crate::components::projectile::Projectile;

#[derive(Resource, Debug, Clone, Default)]
pub struct LiveProjectiles(pub Vec<Projectile>);

impl LiveProjectiles {
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SpawnedProjectiles(pub Vec<Projectile>);

impl SpawnedProjectiles {
    pub fn push_all(&mut self, projectiles: impl IntoIterator<Item = Projectile>) {
        self.0.extend(projectiles);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, Projectile> {
        self.0.drain(..)
    }
}
