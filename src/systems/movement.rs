//! Stand-in physics used by the demo binary.
//!
//! A real physics layer owns collision bodies and the live projectile list;
//! these systems play that role just well enough to drive the scene:
//!
//! - [`player_movement_system`] moves the player from its direction flags
//! - [`projectile_motion_system`] moves live projectiles along their
//!   trajectory, expires them when their TTL runs out, then adopts the newly
//!   spawned ones
//! - [`projectile_hit_system`] hurts living enemies whose body a projectile
//!   segment ends in, consuming the projectile

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::body::Body;
use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::resources::projectiles::{LiveProjectiles, SpawnedProjectiles};
use crate::util::offset_along;

pub fn player_movement_system(mut query: Query<(&mut Player, &mut Body)>) {
    for (mut player, mut body) in query.iter_mut() {
        let m = player.movement;
        let dx = (m.right as i32 - m.left as i32) as f32 * player.speed;
        let dy = (m.down as i32 - m.up as i32) as f32 * player.speed;
        if m.left != m.right {
            player.flipped = m.left;
        }
        if dx != 0.0 || dy != 0.0 {
            player.move_by(&mut body, dx, dy);
        }
    }
}

pub fn projectile_motion_system(
    mut live: ResMut<LiveProjectiles>,
    mut spawned: ResMut<SpawnedProjectiles>,
) {
    for projectile in live.0.iter_mut() {
        if let Some(angle) = projectile.trajectory {
            let step = offset_along(projectile.velocity, angle);
            projectile.start = projectile.start + step;
            projectile.end = projectile.end + step;
        }
        projectile.ttl = projectile.ttl.saturating_sub(1);
    }
    live.0.retain(|p| !p.is_expired());
    // new spawns age from the next tick, so each is drawn at least once
    live.0.extend(spawned.drain());
}

pub fn projectile_hit_system(
    mut live: ResMut<LiveProjectiles>,
    mut enemies: Query<(&mut Enemy, &Body)>,
) {
    live.0.retain(|projectile| {
        for (mut enemy, body) in enemies.iter_mut() {
            if !enemy.dead && body.contains_point(projectile.end) {
                enemy.hurt();
                debug!("enemy hit, health {}/{}", enemy.health, enemy.max_health);
                return false;
            }
        }
        true
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::projectile::Projectile;
    use crate::components::sprite::Sprite;
    use crate::components::weapon::Weapon;
    use raylib::prelude::{Rectangle, Vector2};

    fn sprite() -> Sprite {
        Sprite::new(
            "atlas",
            Rectangle::new(0.0, 0.0, 16.0, 16.0),
            Rectangle::new(0.0, 0.0, 16.0, 16.0),
        )
    }

    fn projectile(end: Vector2, ttl: u32, velocity: f32, trajectory: Option<f32>) -> Projectile {
        Projectile {
            start: Vector2::zero(),
            end,
            ttl,
            velocity,
            trajectory,
            sprite: sprite(),
        }
    }

    fn tick_player_movement(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(player_movement_system);
        schedule.run(world);
    }

    fn tick_projectile_motion(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_motion_system);
        schedule.run(world);
    }

    fn tick_projectile_hits(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(projectile_hit_system);
        schedule.run(world);
    }

    #[test]
    fn test_player_moves_and_faces_left() {
        let mut world = World::new();
        let mut player = Player::new(sprite(), Weapon::new(sprite(), sprite()), Vector2::zero(), 3.0);
        player.movement.left = true;
        player.movement.down = true;
        let e = world.spawn((player, Body::new(10.0, 10.0, 16.0, 16.0))).id();

        tick_player_movement(&mut world);

        let body = world.get::<Body>(e).unwrap();
        assert_eq!((body.pos.x, body.pos.y), (7.0, 13.0));
        assert!(world.get::<Player>(e).unwrap().flipped);
    }

    #[test]
    fn test_projectiles_adopted_moved_and_expired() {
        let mut world = World::new();
        world.insert_resource(LiveProjectiles::default());
        let mut spawned = SpawnedProjectiles::default();
        spawned.push_all([
            projectile(Vector2::new(0.0, 10.0), 2, 5.0, Some(0.0)),
            projectile(Vector2::new(0.0, 10.0), 1, 0.0, None),
        ]);
        world.insert_resource(spawned);

        // adopted untouched
        tick_projectile_motion(&mut world);
        let live = world.resource::<LiveProjectiles>();
        assert_eq!(live.len(), 2);
        assert_eq!(live.0[0].start.y, 0.0);
        assert!(world.resource::<SpawnedProjectiles>().0.is_empty());

        tick_projectile_motion(&mut world);
        let live = world.resource::<LiveProjectiles>();
        assert_eq!(live.len(), 1);
        assert!((live.0[0].start.y - 5.0).abs() < 1e-4);

        tick_projectile_motion(&mut world);
        assert!(world.resource::<LiveProjectiles>().is_empty());
    }

    #[test]
    fn test_single_frame_projectile_can_still_hit() {
        let mut world = World::new();
        let e = world
            .spawn((Enemy::new(sprite(), 3), Body::new(0.0, 0.0, 16.0, 16.0)))
            .id();
        world.insert_resource(LiveProjectiles::default());
        let mut spawned = SpawnedProjectiles::default();
        spawned.push_all([projectile(Vector2::new(8.0, 8.0), 1, 0.0, None)]);
        world.insert_resource(spawned);

        tick_projectile_motion(&mut world);
        assert_eq!(world.resource::<LiveProjectiles>().len(), 1);
        tick_projectile_hits(&mut world);

        assert_eq!(world.get::<Enemy>(e).unwrap().health, 2);
        assert!(world.resource::<LiveProjectiles>().is_empty());
    }

    #[test]
    fn test_hit_hurts_enemy_and_consumes_projectile() {
        let mut world = World::new();
        let e = world
            .spawn((Enemy::new(sprite(), 2), Body::new(0.0, 0.0, 16.0, 16.0)))
            .id();
        world.insert_resource(LiveProjectiles(vec![
            projectile(Vector2::new(8.0, 8.0), 5, 0.0, None),
            projectile(Vector2::new(80.0, 80.0), 5, 0.0, None),
        ]));

        tick_projectile_hits(&mut world);

        assert_eq!(world.get::<Enemy>(e).unwrap().health, 1);
        assert_eq!(world.resource::<LiveProjectiles>().len(), 1);
    }
}
