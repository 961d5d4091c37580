//! Text HUD for the desktop host: lives, protections, boss health, the
//! current message and end-of-run prompts.

use bevy::prelude::*;

use super::messages::MessageBoard;
use super::snapshot::FrameSnapshot;
use crate::core::GameState;

/// Marker for the status line.
#[derive(Component)]
pub struct StatusText;

/// Marker for the narrative message line.
#[derive(Component)]
pub struct MessageText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(Startup, spawn_hud)
        .add_systems(Update, (update_status_text, update_message_text));
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::SpaceBetween,
            padding: UiRect::all(Val::Px(12.0)),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                StatusText,
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 1.0, 0.6)),
                MessageText,
            ));
        });
}

/// Format the status line for one frame.
pub fn status_line(snapshot: &FrameSnapshot) -> String {
    match snapshot.state {
        GameState::Start => "FIREWALL BREACH - press Enter to begin".to_string(),
        GameState::Lost => "CONNECTION LOST - press Enter to retry".to_string(),
        GameState::Won => "BREACH COMPLETE - press Enter to play again".to_string(),
        GameState::Playing => {
            let mut line = match &snapshot.player {
                Some(player) => {
                    let mut parts = vec![format!("Lives {}", player.lives)];
                    if player.has_weapon {
                        parts.push("Blaster".to_string());
                    }
                    if player.has_shield {
                        parts.push("Shield".to_string());
                    }
                    if player.invincible_ticks > 0 {
                        parts.push(format!("Invincible {}", player.invincible_ticks));
                    }
                    parts.join("  |  ")
                }
                None => String::new(),
            };
            if let Some((current, maximum)) = snapshot.boss_health {
                line.push_str(&format!("  |  Boss {current}/{maximum}"));
            }
            line
        }
    }
}

fn update_status_text(snapshot: Res<FrameSnapshot>, mut query: Query<&mut Text, With<StatusText>>) {
    for mut text in query.iter_mut() {
        **text = status_line(&snapshot);
    }
}

fn update_message_text(board: Res<MessageBoard>, mut query: Query<&mut Text, With<MessageText>>) {
    let message = board.current().map(|m| m.text.clone()).unwrap_or_default();
    for mut text in query.iter_mut() {
        if **text != message {
            **text = message.clone();
        }
    }
}
