//! Combat geometry: the spread fan of projectiles spawned by an attack.
//!
//! For `count` projectiles `spread` degrees apart around an aim angle, the
//! first angle is `aim - floor(count / 2) * spread` and each following one
//! adds `spread`. Every projectile's endpoint sits `length` units from the
//! attacker's center along its angle.
//!
//! - [`spread_angles`] – the fan angles, in spawn order
//! - [`attack`] – start a swing and build the fan for a player
//! - [`attack_observer`] – runs [`attack`] on an [`AttackEvent`]
//! - [`attack_cooldown_system`] – counts attack cooldowns down each frame

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;
use smallvec::SmallVec;

use crate::components::body::Body;
use crate::components::player::Player;
use crate::components::projectile::Projectile;
use crate::events::attack::AttackEvent;
use crate::resources::aim::Aim;
use crate::resources::projectiles::SpawnedProjectiles;
use crate::util::offset_along;

/// Projectiles produced by a single attack.
pub type ProjectileFan = SmallVec<[Projectile; 4]>;

/// Spawn angles of a fan, in spawn order.
pub fn spread_angles(aim: f32, count: u32, spread: f32) -> impl Iterator<Item = f32> {
    let first = aim - (count / 2) as f32 * spread;
    (0..count).map(move |i| first + i as f32 * spread)
}

/// Put the player's weapon into its swing, start the cooldown and build the
/// projectile fan aimed at `aim_degrees`.
pub fn attack(player: &mut Player, body: &Body, aim_degrees: f32) -> ProjectileFan {
    let weapon = &mut player.weapon;
    weapon.start_swing();
    player.attack_cooldown = weapon.cooldown;

    let center = body.center();
    let spec = weapon.projectiles;
    let fan = spread_angles(aim_degrees, spec.count, spec.spread_degrees)
        .map(|angle| Projectile {
            start: center,
            end: center + offset_along(spec.length, angle),
            ttl: spec.ttl_frames,
            velocity: spec.velocity,
            trajectory: (spec.velocity > 0.0).then_some(angle),
            sprite: weapon.projectile_template.instantiate(),
        })
        .collect();

    player.attacking = false;
    fan
}

/// Observer: spawn an attack for the player if its cooldown allows.
pub fn attack_observer(
    _trigger: On<AttackEvent>,
    mut players: Query<(&mut Player, &Body)>,
    aim: Option<Res<Aim>>,
    mut spawned: ResMut<SpawnedProjectiles>,
) {
    let Some((mut player, body)) = players.iter_mut().next() else {
        debug!("attack ignored: no player in scene");
        return;
    };
    if !player.can_attack() {
        return;
    }
    let aim_degrees = aim.map(|a| a.degrees).unwrap_or_default();
    let fan = attack(&mut player, body, aim_degrees);
    debug!("attack at {:.1}° spawned {} projectiles", aim_degrees, fan.len());
    spawned.push_all(fan);
}

/// Count every player's attack cooldown down by one frame.
pub fn attack_cooldown_system(mut players: Query<&mut Player>) {
    for mut player in players.iter_mut() {
        player.tick_cooldown();
    }
}
