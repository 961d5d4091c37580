//! Player interactions with world objects: power-up containers, consoles,
//! data logs, the boss gate and the goal.

use bevy::prelude::*;

use super::components::*;
use super::data::PowerUpEffect;
use super::registry::EntityRegistry;
use crate::core::{
    ContactSide, EnemyDefeatedEvent, NarrativeEvent, PowerUpSelection, PowerUpTrigger, SimConfig,
    SimRng, SolidContactEvent,
};
use crate::enemies::Boss;
use crate::player::{apply_power_up, ActionSet, Loadout, Player, Survival};

/// Effect a container grants: its assigned one, or a draw from the full set.
pub fn choose_effect(
    assigned: Option<PowerUpEffect>,
    selection: PowerUpSelection,
    rng: &mut SimRng,
) -> PowerUpEffect {
    match (selection, assigned) {
        (PowerUpSelection::Fixed, Some(effect)) => effect,
        _ => PowerUpEffect::ALL[rng.index(PowerUpEffect::ALL.len())],
    }
}

fn triggers(trigger: PowerUpTrigger, side: ContactSide) -> bool {
    match trigger {
        PowerUpTrigger::FromBelow => side == ContactSide::Underside,
        PowerUpTrigger::AnyContact => true,
    }
}

/// Open power-up containers the player bumped this tick.
pub fn strike_power_ups(
    config: Res<SimConfig>,
    mut rng: ResMut<SimRng>,
    mut contacts: EventReader<SolidContactEvent>,
    mut boxes: Query<(&WorldId, &mut PowerUpBox)>,
    mut player_query: Query<(&mut Survival, &mut Loadout), With<Player>>,
) {
    let Ok((mut survival, mut loadout)) = player_query.get_single_mut() else {
        contacts.clear();
        return;
    };

    for contact in contacts.read() {
        let Ok((id, mut power_up)) = boxes.get_mut(contact.entity) else {
            continue;
        };
        if power_up.hit || !triggers(config.power_up_trigger, contact.side) {
            continue;
        }

        power_up.hit = true;
        let effect = choose_effect(power_up.effect, config.power_up_selection, &mut rng);
        apply_power_up(effect, &mut survival, &mut loadout, &config);
        info!("Power-up {} granted {:?}", id.0, effect);
    }
}

/// Consoles switch off their linked firewall when the player uses them.
///
/// A console whose link resolves to nothing, or to something that is not a
/// firewall, is inert: using it changes nothing and shows no message. The
/// level loader already warns about such links.
pub fn use_consoles(
    actions: Res<ActionSet>,
    registry: Res<EntityRegistry>,
    player_query: Query<&Bounds, With<Player>>,
    mut consoles: Query<(&WorldId, &Bounds, &mut Console), Without<Player>>,
    mut firewalls: Query<&mut Firewall>,
    mut narrative: EventWriter<NarrativeEvent>,
) {
    if !actions.interact {
        return;
    }
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (id, bounds, mut console) in consoles.iter_mut() {
        if console.activated || !player.0.overlaps(&bounds.0) {
            continue;
        }
        let Some(entity) = console.linked_id.and_then(|linked| registry.get(linked)) else {
            continue;
        };
        let Ok(mut firewall) = firewalls.get_mut(entity) else {
            continue;
        };

        console.activated = true;
        firewall.active = false;
        info!("Console {} disabled firewall {:?}", id.0, console.linked_id);

        if !console.message.is_empty() {
            narrative.send(NarrativeEvent {
                message_id: id.0,
                text: console.message.clone(),
            });
        }
    }
}

/// Data logs are collected on overlap.
pub fn collect_logs(
    player_query: Query<&Bounds, With<Player>>,
    mut logs: Query<(&WorldId, &Bounds, &mut Collectible), Without<Player>>,
    mut narrative: EventWriter<NarrativeEvent>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (id, bounds, mut log) in logs.iter_mut() {
        if log.collected || !player.0.overlaps(&bounds.0) {
            continue;
        }
        log.collected = true;
        info!("Collected log {}", id.0);
        narrative.send(NarrativeEvent {
            message_id: id.0,
            text: log.message.clone(),
        });
    }
}

/// A defeated boss opens the firewall sealing its arena.
pub fn open_boss_gates(
    mut defeats: EventReader<EnemyDefeatedEvent>,
    registry: Res<EntityRegistry>,
    mut firewalls: Query<&mut Firewall>,
) {
    for defeat in defeats.read() {
        if !defeat.was_boss {
            continue;
        }
        let Some(gate) = defeat.gate_id.and_then(|id| registry.get(id)) else {
            continue;
        };
        if let Ok(mut firewall) = firewalls.get_mut(gate) {
            firewall.active = false;
            info!("Boss {} defeated, gate opened", defeat.id);
        }
    }
}

/// The goal unlocks once no boss remains in the level.
pub fn activate_goals(bosses: Query<(), With<Boss>>, mut goals: Query<(&WorldId, &mut Goal)>) {
    if !bosses.is_empty() {
        return;
    }
    for (id, mut goal) in goals.iter_mut() {
        if !goal.active {
            goal.active = true;
            info!("Goal {} unlocked", id.0);
        }
    }
}

/// Overlapping an active goal wins the level.
pub fn reach_goals(
    player_query: Query<&Bounds, With<Player>>,
    mut goals: Query<(&Bounds, &mut Goal), Without<Player>>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    for (bounds, mut goal) in goals.iter_mut() {
        if goal.active && !goal.reached && player.0.overlaps(&bounds.0) {
            goal.reached = true;
        }
    }
}
