//! Firewall Breach - Entry Point
//!
//! Controls:
//! - Arrows / A, D: Move
//! - Space / W: Jump
//! - J / X: Shoot
//! - E / Up: Use console
//! - Enter: Begin / Restart

use bevy::prelude::*;

use firewall_breach::core::SimConfig;
use firewall_breach::ui::{FrameSnapshot, HudPlugin};
use firewall_breach::world::{EntityKind, LevelBounds};
use firewall_breach::FirewallBreachPlugin;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Firewall Breach".to_string(),
                resolution: (800.0, 600.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.02, 0.03, 0.06)))

        // One simulation tick per 60th of a second
        .insert_resource(Time::<Fixed>::from_hz(60.0))

        // Our game plugin
        .add_plugins(FirewallBreachPlugin)
        .add_plugins(HudPlugin)

        .add_systems(Startup, spawn_camera)
        .add_systems(Update, (follow_viewport, draw_world).chain())
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Level space is y-down; Bevy world space is y-up.
fn to_world(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, -y)
}

fn follow_viewport(
    snapshot: Res<FrameSnapshot>,
    config: Res<SimConfig>,
    level: Res<LevelBounds>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };
    let centre = to_world(snapshot.camera_offset + config.viewport_width / 2.0, level.height / 2.0);
    transform.translation = centre.extend(transform.translation.z);
}

fn kind_color(kind: EntityKind, active: bool, spent: bool) -> Color {
    match kind {
        EntityKind::Platform => Color::srgb(0.3, 0.4, 0.6),
        EntityKind::Firewall if active => Color::srgb(1.0, 0.3, 0.1),
        EntityKind::Firewall => Color::srgba(1.0, 0.3, 0.1, 0.15),
        EntityKind::Console if spent => Color::srgb(0.2, 0.5, 0.2),
        EntityKind::Console => Color::srgb(0.3, 1.0, 0.3),
        EntityKind::Log => Color::srgb(0.9, 0.9, 0.3),
        EntityKind::PowerUp if spent => Color::srgb(0.4, 0.35, 0.2),
        EntityKind::PowerUp => Color::srgb(1.0, 0.8, 0.2),
        EntityKind::Goal if active => Color::srgb(0.2, 1.0, 1.0),
        EntityKind::Goal => Color::srgb(0.2, 0.4, 0.4),
        EntityKind::PatrolEnemy | EntityKind::Shooter => Color::srgb(0.9, 0.2, 0.4),
        EntityKind::Boss => Color::srgb(0.8, 0.1, 0.9),
    }
}

/// Debug view of the latest snapshot.
fn draw_world(snapshot: Res<FrameSnapshot>, mut gizmos: Gizmos) {
    for entity in &snapshot.entities {
        if entity.kind == EntityKind::Log && entity.spent {
            continue;
        }
        let b = entity.bounds;
        gizmos.rect_2d(
            to_world(b.center().x, b.center().y),
            b.size(),
            kind_color(entity.kind, entity.active, entity.spent),
        );
    }

    for projectile in &snapshot.projectiles {
        let b = projectile.bounds;
        gizmos.rect_2d(to_world(b.center().x, b.center().y), b.size(), Color::WHITE);
    }

    for particle in &snapshot.particles {
        gizmos.circle_2d(
            to_world(particle.position.0, particle.position.1),
            2.0,
            Color::srgba(0.9, 0.2, 0.4, particle.opacity),
        );
    }

    if let Some(player) = &snapshot.player {
        let b = player.bounds;
        let color = if player.invincible_ticks > 0 {
            Color::srgb(1.0, 1.0, 1.0)
        } else if player.has_shield {
            Color::srgb(0.3, 0.7, 1.0)
        } else {
            Color::srgb(0.2, 0.9, 0.5)
        };
        gizmos.rect_2d(to_world(b.center().x, b.center().y), b.size(), color);
    }
}
