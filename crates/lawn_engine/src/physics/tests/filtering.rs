use super::*;
use crate::physics::{CollisionMatrix, CollisionSystem};

fn overlapping_pair(log: &Log) -> (World, Entity, Entity) {
    let mut world = World::new();
    let a = world.spawn(Probe::new("a", Tag::Projectile, Vec2::new(0.0, 0.0), Collider::circle(10.0), log));
    let b = world.spawn(Probe::new("b", Tag::Zombie, Vec2::new(15.0, 0.0), Collider::circle(10.0), log));
    (world, a, b)
}

#[test]
fn test_matrix_gating_blocks_every_transition() {
    let log = new_log();
    let (mut world, _, b) = overlapping_pair(&log);
    let mut system = CollisionSystem::new(lawn());
    system.matrix_mut().disable_collision(Tag::Projectile, Tag::Zombie);

    for x in [15.0, 15.0, 40.0, 5.0, 5.0] {
        move_to(&mut world, b, x, 0.0);
        system.update(&mut world);
        assert!(take(&log).is_empty());
        assert!(system.current_collisions().is_empty());
    }
}

#[test]
fn test_disabling_pair_mid_contact_exits() {
    let log = new_log();
    let (mut world, a, b) = overlapping_pair(&log);
    let mut system = CollisionSystem::new(lawn());

    system.update(&mut world);
    assert_eq!(take(&log).len(), 2);

    system.set_matrix(CollisionMatrix::empty());
    system.update(&mut world);

    let mut exited = take(&log);
    exited.sort_by_key(|&(name, _, _)| name);
    assert_eq!(exited, vec![("a", CollisionPhase::Exit, b), ("b", CollisionPhase::Exit, a)]);
}

#[test]
fn test_disabled_collider_stops_contact() {
    let log = new_log();
    let (mut world, _, b) = overlapping_pair(&log);
    let mut system = CollisionSystem::new(lawn());

    system.update(&mut world);
    take(&log);

    if let Some(collider) = world.get_mut(b).and_then(|object| object.collider_mut()) {
        collider.set_enabled(false);
    }
    system.update(&mut world);

    let exited = take(&log);
    assert_eq!(exited.len(), 2);
    assert!(exited.iter().all(|&(_, phase, _)| phase == CollisionPhase::Exit));

    system.update(&mut world);
    assert!(take(&log).is_empty());
}

#[test]
fn test_same_tag_never_collides_by_default() {
    let log = new_log();
    let mut world = World::new();
    world.spawn(Probe::new("z0", Tag::Zombie, Vec2::new(0.0, 0.0), Collider::circle(10.0), &log));
    world.spawn(Probe::new("z1", Tag::Zombie, Vec2::new(1.0, 0.0), Collider::circle(10.0), &log));
    let mut system = CollisionSystem::new(lawn());

    system.update(&mut world);

    assert!(take(&log).is_empty());
    assert_eq!(system.stats().narrow_phase_tests, 0);
}

#[test]
fn test_trigger_colliders_still_notify() {
    let log = new_log();
    let mut world = World::new();
    world.spawn(Probe::new("sun", Tag::Sun, Vec2::new(0.0, 0.0), Collider::circle(8.0).as_trigger(), &log));
    world.spawn(Probe::new("coin", Tag::Coin, Vec2::new(5.0, 5.0), Collider::boxed(4.0, 4.0), &log));
    let mut system = CollisionSystem::new(lawn());
    system.matrix_mut().enable_collision(Tag::Sun, Tag::Coin);

    system.update(&mut world);

    let notifications = take(&log);
    assert_eq!(notifications.len(), 2);
    assert!(notifications.iter().all(|&(_, phase, _)| phase == CollisionPhase::Enter));
}
