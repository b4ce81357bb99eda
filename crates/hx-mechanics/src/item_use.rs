//! Using items from the inventory.
//!
//! Shared by the encounter loop and free exploration. The caller supplies an
//! [`ItemPicker`] that chooses from the usable items; the effect is applied
//! and the item consumed. Starting items only work inside an encounter.

use log::debug;
use serde::Serialize;

use hx_core::{FoundItem, Inventory, Item, StartingItem, VialBinding, Wildcard};

use crate::error::{MechError, MechResult};
use crate::player::{Buff, PlayerState};

/// Focus restored by the Civility Charm.
pub const CIVILITY_CHARM_RESTORE: i32 = 3;

/// Where an item is being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseContext {
    /// During a Reprogramming Sequence.
    Encounter,
    /// Between encounters.
    Exploration,
}

/// One entry of the item menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsableItem {
    /// Inventory slot the entry refers to.
    pub slot: usize,
    /// Display name.
    pub name: &'static str,
    /// Known effect; only starting items disclose theirs.
    pub summary: Option<&'static str>,
}

/// Chooses an item from a menu.
pub trait ItemPicker {
    /// Return an index into `usable`, or `None` to cancel.
    fn pick_item(&mut self, usable: &[UsableItem]) -> Option<usize>;
}

/// Why a use attempt did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoActionReason {
    /// Nothing in the inventory can be used.
    NoUsableItems,
    /// The picker cancelled.
    Cancelled,
    /// A starting item was chosen outside an encounter.
    CombatOnly(StartingItem),
}

/// What an item did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemEffect {
    /// Focus moved by `delta` and is now `focus`.
    FocusChanged {
        /// Nominal change before the floor is applied.
        delta: i32,
        /// Focus after the change.
        focus: i32,
    },
    /// A buff was armed.
    BuffArmed(Buff),
    /// Nothing happened at all.
    Nothing,
}

/// Result of a use attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UseOutcome {
    /// Nothing was used and nothing changed.
    NoAction(NoActionReason),
    /// An item was used up.
    Used {
        /// The item as it was before use.
        item: Item,
        /// Its effect.
        effect: ItemEffect,
    },
    /// The Golden Parachute was used; leave the encounter.
    Flee,
}

/// Usable items in inventory order: unused starting items, wildcards, vials.
pub fn usable_items(inventory: &Inventory) -> Vec<UsableItem> {
    inventory
        .usable_slots()
        .into_iter()
        .filter_map(|slot| {
            let item = inventory.get(slot)?;
            let summary = match item {
                Item::Starting { kind, .. } => Some(kind.summary()),
                Item::Found(_) => None,
            };
            Some(UsableItem {
                slot,
                name: item.name(),
                summary,
            })
        })
        .collect()
}

/// Offer the usable items to `picker` and apply the chosen one.
pub fn use_item<P: ItemPicker + ?Sized>(
    player: &mut PlayerState,
    inventory: &mut Inventory,
    vials: &VialBinding,
    context: UseContext,
    picker: &mut P,
) -> MechResult<UseOutcome> {
    let usable = usable_items(inventory);
    if usable.is_empty() {
        return Ok(UseOutcome::NoAction(NoActionReason::NoUsableItems));
    }
    let Some(choice) = picker.pick_item(&usable) else {
        return Ok(UseOutcome::NoAction(NoActionReason::Cancelled));
    };
    let entry = usable.get(choice).ok_or(MechError::InvalidChoice {
        choice,
        options: usable.len(),
    })?;
    apply_item(player, inventory, vials, context, entry.slot)
}

/// Apply the item in `slot` and consume it.
pub fn apply_item(
    player: &mut PlayerState,
    inventory: &mut Inventory,
    vials: &VialBinding,
    context: UseContext,
    slot: usize,
) -> MechResult<UseOutcome> {
    let item = *inventory.get(slot).ok_or(MechError::SlotOutOfRange {
        slot,
        len: inventory.len(),
    })?;
    if !item.is_usable() {
        return Err(MechError::NotUsable(item.name().to_string()));
    }

    let outcome = match item {
        Item::Starting { kind, .. } => {
            if context == UseContext::Exploration {
                return Ok(UseOutcome::NoAction(NoActionReason::CombatOnly(kind)));
            }
            inventory.mark_used(slot);
            match kind {
                StartingItem::CivilityCharm => used(
                    item,
                    ItemEffect::FocusChanged {
                        delta: CIVILITY_CHARM_RESTORE,
                        focus: player.restore(CIVILITY_CHARM_RESTORE),
                    },
                ),
                StartingItem::ExecutiveOrder => {
                    player.arm(Buff::DoubleScan);
                    used(item, ItemEffect::BuffArmed(Buff::DoubleScan))
                }
                StartingItem::GoldenParachute => UseOutcome::Flee,
            }
        }
        Item::Found(found) => {
            let effect = match found {
                FoundItem::Wildcard(w) => wildcard_effect(player, w),
                FoundItem::Vial(v) => focus_delta(player, vials.effect(v)),
                FoundItem::Quest(_) => return Err(MechError::NotUsable(found.name().to_string())),
            };
            inventory.remove(slot);
            used(item, effect)
        }
    };
    debug!("used {}: {outcome:?}", item.name());
    Ok(outcome)
}

fn wildcard_effect(player: &mut PlayerState, wildcard: Wildcard) -> ItemEffect {
    match wildcard {
        Wildcard::LogicFilter => {
            player.arm(Buff::LogicFilter);
            ItemEffect::BuffArmed(Buff::LogicFilter)
        }
        Wildcard::SubpoenaedDiaryLogs => {
            player.arm(Buff::RollBonus);
            ItemEffect::BuffArmed(Buff::RollBonus)
        }
        Wildcard::TrickleDownTextbook | Wildcard::OldSharpie => focus_delta(player, -3),
        Wildcard::SnackCake => focus_delta(player, -4),
        Wildcard::BlankKeycard => ItemEffect::Nothing,
    }
}

fn focus_delta(player: &mut PlayerState, delta: i32) -> ItemEffect {
    ItemEffect::FocusChanged {
        delta,
        focus: player.apply_item_delta(delta),
    }
}

fn used(item: Item, effect: ItemEffect) -> UseOutcome {
    UseOutcome::Used { item, effect }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::{QuestItem, Vial};

    /// Picks a fixed menu index, or cancels.
    struct Pick(Option<usize>);

    impl ItemPicker for Pick {
        fn pick_item(&mut self, _usable: &[UsableItem]) -> Option<usize> {
            self.0
        }
    }

    fn binding() -> VialBinding {
        VialBinding::new(vec![(Vial::Red, 5), (Vial::Blue, 3), (Vial::Purple, -4)])
    }

    #[test]
    fn menu_lists_only_usable_items() {
        let mut inv = Inventory::new();
        inv.mark_used(0);
        inv.add(FoundItem::Quest(QuestItem::CivicsPatch));
        inv.add(FoundItem::Vial(Vial::Blue));
        let menu = usable_items(&inv);
        let names: Vec<_> = menu.iter().map(|u| u.name).collect();
        assert_eq!(
            names,
            vec!["Executive Order", "Golden Parachute", "Blue Focus Vial"]
        );
        assert_eq!(menu[0].slot, 1);
        assert_eq!(menu[2].slot, 4);
        assert!(menu[0].summary.is_some());
        assert!(menu[2].summary.is_none());
    }

    #[test]
    fn nothing_usable() {
        let mut inv = Inventory::empty();
        inv.add(FoundItem::Quest(QuestItem::FactChecker));
        let mut p = PlayerState::new();
        let out = use_item(
            &mut p,
            &mut inv,
            &binding(),
            UseContext::Encounter,
            &mut Pick(Some(0)),
        )
        .unwrap();
        assert_eq!(out, UseOutcome::NoAction(NoActionReason::NoUsableItems));
    }

    #[test]
    fn cancel_changes_nothing() {
        let mut inv = Inventory::new();
        let mut p = PlayerState::new();
        let out = use_item(
            &mut p,
            &mut inv,
            &binding(),
            UseContext::Encounter,
            &mut Pick(None),
        )
        .unwrap();
        assert_eq!(out, UseOutcome::NoAction(NoActionReason::Cancelled));
        assert_eq!(inv.usable_slots(), vec![0, 1, 2]);
    }

    #[test]
    fn out_of_range_pick_is_an_error() {
        let mut inv = Inventory::new();
        let mut p = PlayerState::new();
        let err = use_item(
            &mut p,
            &mut inv,
            &binding(),
            UseContext::Encounter,
            &mut Pick(Some(3)),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MechError::InvalidChoice {
                choice: 3,
                options: 3
            }
        ));
    }

    #[test]
    fn combat_only_rejected_outside_encounter() {
        for slot in 0..3 {
            let mut inv = Inventory::new();
            let mut p = PlayerState::with_focus(7);
            let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, slot)
                .unwrap();
            assert_eq!(
                out,
                UseOutcome::NoAction(NoActionReason::CombatOnly(StartingItem::ALL[slot]))
            );
            assert_eq!(p, PlayerState::with_focus(7));
            assert_eq!(inv.usable_slots(), vec![0, 1, 2]);
        }
    }

    #[test]
    fn civility_charm_restores_and_is_spent() {
        let mut inv = Inventory::new();
        let mut p = PlayerState::with_focus(4);
        let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 0).unwrap();
        assert_eq!(
            out,
            UseOutcome::Used {
                item: Item::starting(StartingItem::CivilityCharm),
                effect: ItemEffect::FocusChanged { delta: 3, focus: 7 }
            }
        );
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.labels()[0], "Civility Charm (Used)");
        assert!(matches!(
            apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 0),
            Err(MechError::NotUsable(_))
        ));
    }

    #[test]
    fn executive_order_arms_double_scan() {
        let mut inv = Inventory::new();
        let mut p = PlayerState::new();
        apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 1).unwrap();
        assert!(p.is_armed(Buff::DoubleScan));
    }

    #[test]
    fn golden_parachute_flees() {
        let mut inv = Inventory::new();
        let mut p = PlayerState::new();
        let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 2).unwrap();
        assert_eq!(out, UseOutcome::Flee);
        assert_eq!(inv.usable_slots(), vec![0, 1]);
    }

    #[test]
    fn wildcards_work_outside_encounters_and_are_removed() {
        let mut inv = Inventory::empty();
        inv.add(FoundItem::Wildcard(Wildcard::LogicFilter));
        inv.add(FoundItem::Wildcard(Wildcard::SubpoenaedDiaryLogs));
        let mut p = PlayerState::new();
        apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0).unwrap();
        apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0).unwrap();
        assert!(inv.is_empty());
        assert_eq!(p.active_buffs(), vec![Buff::RollBonus, Buff::LogicFilter]);
    }

    #[test]
    fn negative_items_floor_focus_at_one() {
        for (wildcard, delta) in [
            (Wildcard::TrickleDownTextbook, -3),
            (Wildcard::SnackCake, -4),
            (Wildcard::OldSharpie, -3),
        ] {
            let mut inv = Inventory::empty();
            inv.add(FoundItem::Wildcard(wildcard));
            let mut p = PlayerState::with_focus(2);
            let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0)
                .unwrap();
            assert_eq!(
                out,
                UseOutcome::Used {
                    item: Item::Found(FoundItem::Wildcard(wildcard)),
                    effect: ItemEffect::FocusChanged { delta, focus: 1 }
                }
            );
        }
    }

    #[test]
    fn blank_keycard_does_nothing_but_is_consumed() {
        let mut inv = Inventory::empty();
        inv.add(FoundItem::Wildcard(Wildcard::BlankKeycard));
        let mut p = PlayerState::new();
        let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0).unwrap();
        assert_eq!(
            out,
            UseOutcome::Used {
                item: Item::Found(FoundItem::Wildcard(Wildcard::BlankKeycard)),
                effect: ItemEffect::Nothing
            }
        );
        assert!(inv.is_empty());
        assert_eq!(p, PlayerState::new());
    }

    #[test]
    fn vials_use_the_world_binding() {
        let mut inv = Inventory::empty();
        inv.add(FoundItem::Vial(Vial::Purple));
        inv.add(FoundItem::Vial(Vial::Red));
        let mut p = PlayerState::with_focus(3);
        let out = apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0).unwrap();
        assert_eq!(
            out,
            UseOutcome::Used {
                item: Item::Found(FoundItem::Vial(Vial::Purple)),
                effect: ItemEffect::FocusChanged {
                    delta: -4,
                    focus: 1
                }
            }
        );
        apply_item(&mut p, &mut inv, &binding(), UseContext::Exploration, 0).unwrap();
        assert_eq!(p.focus(), 6);
        assert!(inv.is_empty());
    }

    #[test]
    fn quest_items_cannot_be_applied() {
        let mut inv = Inventory::empty();
        inv.add(FoundItem::Quest(QuestItem::GreenEnergyCore));
        let mut p = PlayerState::new();
        assert!(matches!(
            apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 0),
            Err(MechError::NotUsable(_))
        ));
        assert!(matches!(
            apply_item(&mut p, &mut inv, &binding(), UseContext::Encounter, 9),
            Err(MechError::SlotOutOfRange { slot: 9, len: 1 })
        ));
        assert_eq!(inv.len(), 1);
    }
}
