//! End-to-end tick scenarios on a headless app.

use bevy::prelude::*;

use crate::camera::CameraState;
use crate::combat::{Faction, Health, Particle, Projectile};
use crate::core::{
    GameState, LifecycleSignal, PowerUpSelection, PowerUpTrigger, SimClock, SimConfig,
};
use crate::enemies::{Boss, Enemy};
use crate::player::ActionSet;
use crate::test_support::*;
use crate::ui::{FrameSnapshot, MessageBoard};
use crate::world::{
    Bounds, Collectible, Console, EntityKind, EntityKindDef, EntityRecord, Firewall, Goal, PowerUpBox,
    PowerUpEffect,
};

fn move_right() -> ActionSet {
    ActionSet {
        move_right: true,
        ..default()
    }
}

fn jump() -> ActionSet {
    ActionSet {
        jump: true,
        ..default()
    }
}

fn shoot() -> ActionSet {
    ActionSet {
        shoot: true,
        ..default()
    }
}

fn interact() -> ActionSet {
    ActionSet {
        interact: true,
        ..default()
    }
}

fn power_up(
    id: u32,
    bounds: (f32, f32, f32, f32),
    effect: Option<PowerUpEffect>,
) -> EntityRecord {
    record(id, bounds, EntityKindDef::PowerUp { effect })
}

fn firewall(id: u32, x: f32) -> EntityRecord {
    record(id, (x, 300.0, 30.0, 200.0), EntityKindDef::Firewall)
}

fn console(id: u32, x: f32, linked_id: Option<u32>) -> EntityRecord {
    record(
        id,
        (x, 460.0, 20.0, 40.0),
        EntityKindDef::Console {
            linked_id,
            message: "Firewall down.".to_string(),
        },
    )
}

fn shooter(id: u32, x: f32, fire_range: f32) -> EntityRecord {
    record(
        id,
        (x, 460.0, 30.0, 40.0),
        EntityKindDef::Shooter {
            fire_range: Some(fire_range),
            initial_cooldown: Some(1),
            health: None,
        },
    )
}

fn boss(
    id: u32,
    x: f32,
    y: f32,
    activation_x: f32,
    gate_id: Option<u32>,
) -> EntityRecord {
    record(
        id,
        (x, y, 40.0, 40.0),
        EntityKindDef::Boss {
            health: 3,
            activation_x,
            min_y: y,
            max_y: y,
            gate_id,
            message: Some("Warden online.".to_string()),
        },
    )
}

/// Boss that never gets to fire during a test.
fn quiet_boss_config() -> SimConfig {
    SimConfig {
        boss_fire_cooldown_ticks: 100_000,
        ..SimConfig::default()
    }
}

fn history_len(app: &App) -> usize {
    app.world().resource::<MessageBoard>().history().len()
}

fn clock(app: &App) -> u64 {
    app.world().resource::<SimClock>().tick
}

#[test]
fn player_rests_on_the_floor() {
    let mut app = start(level(vec![floor(1)]), SimConfig::default());
    tick_n(&mut app, 10);

    let (bounds, movement, _, _) = player(&mut app);
    assert_eq!(bounds.bottom(), FLOOR_Y);
    assert!(movement.is_grounded);
    assert_eq!(movement.velocity, Vec2::ZERO);
}

#[test]
fn power_up_struck_from_below_grants_once() {
    let box_above = power_up(2, (95.0, 400.0, 40.0, 30.0), Some(PowerUpEffect::ExtraLife));
    let mut app = start(level(vec![floor(1), box_above]), SimConfig::default());

    set_actions(&mut app, jump());
    tick_n(&mut app, 120);

    let (_, _, survival, _) = player(&mut app);
    assert_eq!(survival.lives, 4);
    assert!(component::<PowerUpBox>(&app, 2).is_some_and(|b| b.hit));
}

#[test]
fn side_touch_does_not_trigger_power_up_from_below() {
    let box_ahead = power_up(2, (160.0, 460.0, 30.0, 30.0), Some(PowerUpEffect::ExtraLife));
    let mut app = start(level(vec![floor(1), box_ahead]), SimConfig::default());

    set_actions(&mut app, move_right());
    tick_n(&mut app, 30);

    let (bounds, _, survival, _) = player(&mut app);
    assert_eq!(bounds.right(), 160.0);
    assert_eq!(survival.lives, 3);
    assert!(component::<PowerUpBox>(&app, 2).is_some_and(|b| !b.hit));
}

#[test]
fn any_contact_policy_triggers_on_side_touch() {
    let box_ahead = power_up(2, (160.0, 460.0, 30.0, 30.0), Some(PowerUpEffect::ExtraLife));
    let config = SimConfig {
        power_up_trigger: PowerUpTrigger::AnyContact,
        ..SimConfig::default()
    };
    let mut app = start(level(vec![floor(1), box_ahead]), config);

    set_actions(&mut app, move_right());
    tick_n(&mut app, 30);

    let (_, _, survival, _) = player(&mut app);
    assert_eq!(survival.lives, 4);
}

#[test]
fn console_opens_its_firewall_exactly_once() {
    let mut app = start(
        level(vec![floor(1), firewall(9, 300.0), console(10, 200.0, Some(9))]),
        SimConfig::default(),
    );

    // Walking past the console without using it changes nothing.
    set_actions(&mut app, move_right());
    tick_n(&mut app, 60);
    let (bounds, _, _, _) = player(&mut app);
    assert_eq!(bounds.right(), 300.0);
    assert!(component::<Firewall>(&app, 9).is_some_and(|f| f.active));
    assert!(component::<Console>(&app, 10).is_some_and(|c| !c.activated));

    place_player(&mut app, 195.0, 460.0);
    set_actions(&mut app, interact());
    tick(&mut app);
    assert!(component::<Console>(&app, 10).is_some_and(|c| c.activated));
    assert!(component::<Firewall>(&app, 9).is_some_and(|f| !f.active));
    assert_eq!(history_len(&app), 1);

    tick_n(&mut app, 5);
    assert_eq!(history_len(&app), 1);

    set_actions(&mut app, move_right());
    tick_n(&mut app, 60);
    let (bounds, _, _, _) = player(&mut app);
    assert!(bounds.left() > 330.0);
}

#[test]
fn console_with_dangling_link_is_inert() {
    // One links to the floor, which is not a firewall; the other to nothing.
    let mut app = start(
        level(vec![
            floor(1),
            firewall(9, 300.0),
            console(10, 90.0, Some(1)),
            console(11, 110.0, Some(99)),
        ]),
        SimConfig::default(),
    );

    set_actions(&mut app, interact());
    tick_n(&mut app, 3);

    assert!(component::<Console>(&app, 10).is_some_and(|c| !c.activated));
    assert!(component::<Console>(&app, 11).is_some_and(|c| !c.activated));
    assert!(component::<Firewall>(&app, 9).is_some_and(|f| f.active));
    assert_eq!(history_len(&app), 0);
    let (bounds, movement, _, _) = player(&mut app);
    assert_eq!(bounds.bottom(), FLOOR_Y);
    assert!(movement.is_grounded);
}

#[test]
fn log_is_collected_once() {
    let log = record(
        5,
        (100.0, 470.0, 20.0, 20.0),
        EntityKindDef::Log {
            message: "LOG 01".to_string(),
        },
    );
    let mut app = start(level(vec![floor(1), log]), SimConfig::default());

    tick(&mut app);
    assert!(component::<Collectible>(&app, 5).is_some_and(|l| l.collected));
    assert_eq!(history_len(&app), 1);

    tick_n(&mut app, 10);
    assert_eq!(history_len(&app), 1);
}

#[test]
fn no_projectile_without_weapon_and_cooldown_between_shots() {
    let mut app = start(level(vec![floor(1)]), SimConfig::default());

    set_actions(&mut app, shoot());
    tick_n(&mut app, 30);
    assert_eq!(count::<Projectile>(&mut app), 0);

    with_player(&mut app, |_, _, _, loadout| loadout.has_weapon = true);
    tick(&mut app);
    assert_eq!(count::<Projectile>(&mut app), 1);

    tick_n(&mut app, 14);
    assert_eq!(count::<Projectile>(&mut app), 1);
    tick(&mut app);
    assert_eq!(count::<Projectile>(&mut app), 2);
}

#[test]
fn player_shot_kills_weak_enemy() {
    let mut app = start(level(vec![floor(1), sentry(3, 400.0, 470.0, 1)]), SimConfig::default());
    with_player(&mut app, |_, _, _, loadout| loadout.has_weapon = true);

    set_actions(&mut app, shoot());
    tick(&mut app);
    set_actions(&mut app, ActionSet::default());
    tick_n(&mut app, 40);

    assert_eq!(entity(&app, 3), None);
    assert_eq!(count::<Enemy>(&mut app), 0);
    assert_eq!(count::<Projectile>(&mut app), 0);
    assert!(count::<Particle>(&mut app) > 0);
}

#[test]
fn shield_absorbs_hostile_projectile() {
    let mut app = start(level(vec![floor(1), shooter(4, 400.0, 1000.0)]), SimConfig::default());
    with_player(&mut app, |_, _, survival, _| survival.has_shield = true);

    tick_n(&mut app, 80);

    let (bounds, _, survival, _) = player(&mut app);
    assert_eq!(survival.lives, 3);
    assert!(!survival.has_shield);
    assert_eq!(bounds.x, 100.0);
    assert_eq!(count::<Projectile>(&mut app), 0);
}

#[test]
fn hostile_projectile_is_spent_on_invincible_player() {
    let mut app = start(level(vec![floor(1), shooter(4, 400.0, 1000.0)]), SimConfig::default());
    with_player(&mut app, |_, _, survival, _| survival.invincible_ticks = 1000);

    tick_n(&mut app, 80);

    let (_, _, survival, _) = player(&mut app);
    assert_eq!(survival.lives, 3);
    assert_eq!(count::<Projectile>(&mut app), 0);
}

#[test]
fn shooter_holds_fire_out_of_range() {
    let mut app = start(level(vec![floor(1), shooter(4, 1000.0, 100.0)]), SimConfig::default());

    tick_n(&mut app, 200);
    assert_eq!(count::<Projectile>(&mut app), 0);

    place_player(&mut app, 950.0, 460.0);
    tick(&mut app);
    assert_eq!(count::<Projectile>(&mut app), 1);
}

#[test]
fn patrol_enemy_stays_in_range() {
    let patrol = record(
        3,
        (500.0, 470.0, 30.0, 30.0),
        EntityKindDef::PatrolEnemy {
            patrol_start: 500.0,
            patrol_end: 520.0,
            speed: Some(4.0),
            health: None,
        },
    );
    let mut app = start(level(vec![floor(1), patrol]), SimConfig::default());

    let mut positions = Vec::new();
    for _ in 0..20 {
        tick(&mut app);
        let entity = entity(&app, 3).unwrap();
        let x = app.world().get::<Bounds>(entity).unwrap().0.x;
        assert!((500.0..=520.0).contains(&x));
        positions.push(x);
    }
    assert!(positions.contains(&520.0));
    assert!(positions.contains(&500.0));
}

#[test]
fn losing_the_last_life_ends_the_run_on_that_tick() {
    let mut app = start(level(vec![floor(1), sentry(3, 110.0, 470.0, 1)]), SimConfig::default());
    with_player(&mut app, |_, _, survival, _| survival.lives = 1);

    tick(&mut app);
    assert_eq!(state(&app), GameState::Lost);
    assert_eq!(clock(&app), 1);

    // The world is frozen until a restart.
    tick_n(&mut app, 5);
    assert_eq!(clock(&app), 1);
    let (_, _, survival, _) = player(&mut app);
    assert_eq!(survival.lives, 0);
}

#[test]
fn goal_without_boss_wins() {
    let goal = record(6, (100.0, 460.0, 40.0, 40.0), EntityKindDef::Goal);
    let mut app = start(level(vec![floor(1), goal]), SimConfig::default());

    tick(&mut app);
    assert_eq!(state(&app), GameState::Won);
}

#[test]
fn loss_takes_precedence_over_win() {
    let goal = record(6, (100.0, 460.0, 40.0, 40.0), EntityKindDef::Goal);
    let mut app = start(
        level(vec![floor(1), goal, sentry(3, 110.0, 470.0, 1)]),
        SimConfig::default(),
    );
    with_player(&mut app, |_, _, survival, _| survival.lives = 1);

    tick(&mut app);
    assert!(component::<Goal>(&app, 6).is_some_and(|g| g.reached));
    assert_eq!(state(&app), GameState::Lost);
}

#[test]
fn defeating_the_boss_opens_the_gate_and_unlocks_the_goal() {
    let goal = record(8, (700.0, 460.0, 40.0, 40.0), EntityKindDef::Goal);
    let mut app = start(
        level(vec![
            floor(1),
            boss(7, 400.0, 460.0, 0.0, Some(9)),
            firewall(9, 600.0),
            goal,
        ]),
        quiet_boss_config(),
    );
    with_player(&mut app, |_, _, _, loadout| loadout.has_weapon = true);
    set_actions(&mut app, shoot());

    let mut last_health = 3;
    let mut defeated = false;
    for _ in 0..300 {
        tick(&mut app);
        let goal = component::<Goal>(&app, 8).unwrap();
        let gate = component::<Firewall>(&app, 9).unwrap();
        match component::<Health>(&app, 7) {
            Some(health) => {
                assert!(health.current <= last_health);
                last_health = health.current;
                assert!(!goal.active);
                assert!(gate.active);
            }
            None => {
                assert!(goal.active);
                assert!(!gate.active);
                defeated = true;
                break;
            }
        }
    }
    assert!(defeated);
    assert_eq!(count::<Boss>(&mut app), 0);
    assert!(app
        .world()
        .resource::<MessageBoard>()
        .history()
        .iter()
        .any(|m| m.text == "Warden online."));

    set_actions(&mut app, move_right());
    for _ in 0..200 {
        tick(&mut app);
        if state(&app) == GameState::Won {
            break;
        }
    }
    assert_eq!(state(&app), GameState::Won);
}

#[test]
fn boss_wakes_past_its_line_while_gate_holds() {
    let mut app = start(
        level(vec![floor(1), boss(7, 1200.0, 380.0, 300.0, Some(9)), firewall(9, 1500.0)]),
        quiet_boss_config(),
    );

    tick_n(&mut app, 5);
    assert!(component::<Boss>(&app, 7).is_some_and(|b| !b.active));

    place_player(&mut app, 350.0, 460.0);
    tick(&mut app);
    assert!(component::<Boss>(&app, 7).is_some_and(|b| b.active));
    assert_eq!(history_len(&app), 1);
}

#[test]
fn active_boss_sweeps_and_fires_bursts_on_cooldown() {
    let boss = record(
        7,
        (1000.0, 300.0, 40.0, 40.0),
        EntityKindDef::Boss {
            health: 3,
            activation_x: 0.0,
            min_y: 300.0,
            max_y: 310.0,
            gate_id: None,
            message: None,
        },
    );
    let config = SimConfig {
        boss_fire_cooldown_ticks: 5,
        ..SimConfig::default()
    };
    let burst = config.boss_burst as usize;
    let mut app = start(level(vec![floor(1), boss]), config);

    let mut heights = Vec::new();
    let mut shots = Vec::new();
    for _ in 0..12 {
        tick(&mut app);
        heights.push(component::<Bounds>(&app, 7).unwrap().0.y);
        shots.push(count::<Projectile>(&mut app));
    }

    // Wakes on the first tick, then moves from the second.
    assert_eq!(
        heights,
        vec![300.0, 302.0, 304.0, 306.0, 308.0, 310.0, 308.0, 306.0, 304.0, 302.0, 300.0, 302.0]
    );
    assert_eq!(
        shots,
        vec![0, 0, 0, 0, 0, burst, burst, burst, burst, burst, 2 * burst, 2 * burst]
    );

    let world = app.world_mut();
    let mut projectiles = world.query::<&Projectile>();
    assert!(projectiles
        .iter(world)
        .all(|p| p.faction == Faction::Hostile && p.velocity.x < 0.0));
}

#[test]
fn boss_stays_asleep_once_its_gate_is_down() {
    let mut app = start(
        level(vec![floor(1), boss(7, 1200.0, 380.0, 300.0, Some(9)), firewall(9, 1500.0)]),
        quiet_boss_config(),
    );
    let gate = entity(&app, 9).unwrap();
    app.world_mut().get_mut::<Firewall>(gate).unwrap().active = false;

    place_player(&mut app, 350.0, 460.0);
    tick_n(&mut app, 5);
    assert!(component::<Boss>(&app, 7).is_some_and(|b| !b.active));
}

#[test]
fn falling_out_costs_lives_until_lost() {
    // No ground under the spawn point.
    let ledge = record(1, (500.0, 500.0, 500.0, 40.0), EntityKindDef::Platform);
    let mut app = start(level(vec![ledge]), SimConfig::default());

    let mut respawned = false;
    for _ in 0..200 {
        tick(&mut app);
        let (bounds, movement, survival, _) = player(&mut app);
        if survival.lives == 2 {
            assert_eq!((bounds.x, bounds.y), SPAWN);
            assert_eq!(movement.velocity, Vec2::ZERO);
            assert_eq!(survival.invincible_ticks, SimConfig::default().grace_ticks);
            respawned = true;
            break;
        }
    }
    assert!(respawned);

    tick_n(&mut app, 200);
    assert_eq!(state(&app), GameState::Lost);
}

#[test]
fn camera_stays_within_level() {
    let mut app = start(level(vec![floor(1)]), SimConfig::default());
    assert_eq!(app.world().resource::<CameraState>().offset, 0.0);

    set_actions(&mut app, move_right());
    for _ in 0..300 {
        tick(&mut app);
        let offset = app.world().resource::<CameraState>().offset;
        assert!((0.0..=1200.0).contains(&offset), "offset {offset}");
    }
    assert!(app.world().resource::<CameraState>().offset > 0.0);
}

#[test]
fn restart_rebuilds_the_level_from_its_template() {
    let log = record(
        5,
        (100.0, 470.0, 20.0, 20.0),
        EntityKindDef::Log {
            message: "LOG 01".to_string(),
        },
    );
    let mut app = start(
        level(vec![floor(1), log, sentry(3, 300.0, 470.0, 1)]),
        SimConfig::default(),
    );

    tick(&mut app);
    assert!(component::<Collectible>(&app, 5).is_some_and(|l| l.collected));

    // Begin means nothing mid-run.
    signal(&mut app, LifecycleSignal::Begin);
    assert_eq!(state(&app), GameState::Playing);
    assert!(component::<Collectible>(&app, 5).is_some_and(|l| l.collected));

    with_player(&mut app, |_, _, survival, _| survival.lives = 1);
    place_player(&mut app, 300.0, 460.0);
    tick(&mut app);
    assert_eq!(state(&app), GameState::Lost);

    signal(&mut app, LifecycleSignal::Restart);
    assert_eq!(state(&app), GameState::Playing);

    let (bounds, _, survival, loadout) = player(&mut app);
    assert_eq!((bounds.x, bounds.y), SPAWN);
    assert_eq!(survival.lives, 3);
    assert!(!loadout.has_weapon);
    assert!(component::<Collectible>(&app, 5).is_some_and(|l| !l.collected));
    assert!(entity(&app, 3).is_some());
    assert_eq!(clock(&app), 0);
    assert_eq!(app.world().resource::<FrameSnapshot>().tick, 0);
    assert_eq!(app.world().resource::<FrameSnapshot>().state, GameState::Playing);
    assert_eq!(history_len(&app), 0);
    assert_eq!(count::<crate::player::Player>(&mut app), 1);
}

#[test]
fn identical_inputs_replay_identically() {
    let config = SimConfig {
        power_up_selection: PowerUpSelection::Random,
        ..SimConfig::default()
    };
    let make = || {
        start(
            level(vec![
                floor(1),
                power_up(2, (95.0, 400.0, 40.0, 30.0), None),
                sentry(3, 600.0, 470.0, 2),
            ]),
            config.clone(),
        )
    };
    let mut a = make();
    let mut b = make();

    for app in [&mut a, &mut b] {
        set_actions(app, jump());
        tick_n(app, 60);
        set_actions(
            app,
            ActionSet {
                move_right: true,
                shoot: true,
                ..default()
            },
        );
        tick_n(app, 60);
    }

    let snapshot_a = a.world().resource::<FrameSnapshot>().clone();
    let snapshot_b = b.world().resource::<FrameSnapshot>().clone();
    assert_eq!(snapshot_a.tick, 120);
    assert_eq!(snapshot_a, snapshot_b);
}

#[test]
fn snapshot_describes_the_tick() {
    let mut app = start(
        level(vec![floor(1), firewall(9, 300.0), sentry(3, 600.0, 470.0, 2)]),
        SimConfig::default(),
    );
    tick(&mut app);

    let snapshot = app.world().resource::<FrameSnapshot>().clone();
    assert_eq!(snapshot.tick, 1);
    assert_eq!(snapshot.state, GameState::Playing);
    assert_eq!(
        snapshot.entities.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![1, 3, 9]
    );
    assert!(snapshot.entity(9).is_some_and(|e| e.kind == EntityKind::Firewall && e.active));
    assert_eq!(snapshot.entity(3).and_then(|e| e.health), Some(2));
    assert_eq!(snapshot.player.as_ref().map(|p| p.lives), Some(3));
    assert!(ron::to_string(&snapshot).is_ok());
}
