//! Items and the player's inventory.
//!
//! Every item is either a [`StartingItem`] (carried from the start, used at
//! most once, flagged rather than removed) or a [`FoundItem`] picked up from
//! a room. Found items split into quest components, wildcards, and focus
//! vials.

use serde::{Deserialize, Serialize};

/// The three single-use items every player starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StartingItem {
    /// Restores 3 focus during an encounter.
    CivilityCharm,
    /// Doubles the next scan's progress.
    ExecutiveOrder,
    /// Escape an encounter immediately.
    GoldenParachute,
}

impl StartingItem {
    /// The starting kit, in inventory order.
    pub const ALL: [StartingItem; 3] = [
        Self::CivilityCharm,
        Self::ExecutiveOrder,
        Self::GoldenParachute,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::CivilityCharm => "Civility Charm",
            Self::ExecutiveOrder => "Executive Order",
            Self::GoldenParachute => "Golden Parachute",
        }
    }

    /// Short description of the effect, shown in the item menu.
    pub fn summary(self) -> &'static str {
        match self {
            Self::CivilityCharm => "Restores 3 Focus",
            Self::ExecutiveOrder => "Doubles reprogramming progress for one turn",
            Self::GoldenParachute => "Instantly escape a Reprogramming Sequence",
        }
    }
}

/// Components of the healing device. Collecting all seven wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestItem {
    /// Peer-Reviewed Fact-Checker.
    FactChecker,
    /// Civics 101 Patch.
    CivicsPatch,
    /// De-Escalation Algorithm.
    DeEscalationAlgorithm,
    /// Green Energy Core.
    GreenEnergyCore,
    /// Tax-the-Rich Capacitor.
    TaxTheRichCapacitor,
    /// Historical Context Drive.
    HistoricalContextDrive,
    /// Deregulation Lubricant.
    DeregulationLubricant,
}

impl QuestItem {
    /// The full quest set.
    pub const ALL: [QuestItem; 7] = [
        Self::FactChecker,
        Self::CivicsPatch,
        Self::DeEscalationAlgorithm,
        Self::GreenEnergyCore,
        Self::TaxTheRichCapacitor,
        Self::HistoricalContextDrive,
        Self::DeregulationLubricant,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FactChecker => "Peer-Reviewed Fact-Checker",
            Self::CivicsPatch => "Civics 101 Patch",
            Self::DeEscalationAlgorithm => "De-Escalation Algorithm",
            Self::GreenEnergyCore => "Green Energy Core",
            Self::TaxTheRichCapacitor => "Tax-the-Rich Capacitor",
            Self::HistoricalContextDrive => "Historical Context Drive",
            Self::DeregulationLubricant => "Deregulation Lubricant",
        }
    }
}

/// Single-use oddities scattered around the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wildcard {
    /// Blocks the next robot attack.
    LogicFilter,
    /// Drains 3 focus.
    TrickleDownTextbook,
    /// +2 on the next scan.
    SubpoenaedDiaryLogs,
    /// Drains 4 focus.
    SnackCake,
    /// Does nothing at all.
    BlankKeycard,
    /// Drains 3 focus.
    OldSharpie,
}

impl Wildcard {
    /// All wildcards, in pool order.
    pub const ALL: [Wildcard; 6] = [
        Self::LogicFilter,
        Self::TrickleDownTextbook,
        Self::SubpoenaedDiaryLogs,
        Self::SnackCake,
        Self::BlankKeycard,
        Self::OldSharpie,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LogicFilter => "Logic Filter",
            Self::TrickleDownTextbook => "Trickle-Down Economics Textbook",
            Self::SubpoenaedDiaryLogs => "Subpoenaed Diary Logs",
            Self::SnackCake => "Suspiciously Well-Preserved Snack Cake",
            Self::BlankKeycard => "Blank Keycard",
            Self::OldSharpie => "An Old Sharpie",
        }
    }
}

/// Focus vials. Which one heals and which one hurts is decided per world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vial {
    /// Red Focus Vial.
    Red,
    /// Blue Focus Vial.
    Blue,
    /// Purple Focus Vial.
    Purple,
}

impl Vial {
    /// All vials, in binding order.
    pub const ALL: [Vial; 3] = [Self::Red, Self::Blue, Self::Purple];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red Focus Vial",
            Self::Blue => "Blue Focus Vial",
            Self::Purple => "Purple Focus Vial",
        }
    }
}

/// An item that can lie in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoundItem {
    /// A device component; never consumed.
    Quest(QuestItem),
    /// A single-use wildcard.
    Wildcard(Wildcard),
    /// A single-use focus vial.
    Vial(Vial),
}

impl FoundItem {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Quest(q) => q.name(),
            Self::Wildcard(w) => w.name(),
            Self::Vial(v) => v.name(),
        }
    }

    /// Whether this is a device component.
    pub fn is_quest(self) -> bool {
        matches!(self, Self::Quest(_))
    }

    /// Whether the item can be used (quest items cannot).
    pub fn is_usable(self) -> bool {
        !self.is_quest()
    }
}

impl std::fmt::Display for FoundItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An item in the player's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Item {
    /// Part of the starting kit.
    Starting {
        /// Which starting item.
        kind: StartingItem,
        /// Whether it has been spent.
        used: bool,
    },
    /// Picked up from a room.
    Found(FoundItem),
}

impl Item {
    /// A fresh, unused starting item.
    pub fn starting(kind: StartingItem) -> Self {
        Self::Starting { kind, used: false }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Starting { kind, .. } => kind.name(),
            Self::Found(item) => item.name(),
        }
    }

    /// Whether the item can currently be offered in the item menu.
    pub fn is_usable(&self) -> bool {
        match self {
            Self::Starting { used, .. } => !used,
            Self::Found(item) => item.is_usable(),
        }
    }

    /// Name with a readiness marker for starting items.
    pub fn display_label(&self) -> String {
        match self {
            Self::Starting { kind, used: true } => format!("{} (Used)", kind.name()),
            Self::Starting { kind, used: false } => format!("{} (Ready)", kind.name()),
            Self::Found(item) => item.name().to_string(),
        }
    }
}

/// The player's carried items, in pickup order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// An inventory holding the unused starting kit.
    pub fn new() -> Self {
        Self {
            items: StartingItem::ALL.into_iter().map(Item::starting).collect(),
        }
    }

    /// An inventory with no items at all.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// All items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at a slot.
    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.items.get(slot)
    }

    /// Number of items carried.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is carried.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a found item.
    pub fn add(&mut self, item: FoundItem) {
        self.items.push(Item::Found(item));
    }

    /// Remove and return the item at a slot.
    pub fn remove(&mut self, slot: usize) -> Option<Item> {
        if slot < self.items.len() {
            Some(self.items.remove(slot))
        } else {
            None
        }
    }

    /// Flag the starting item at a slot as used. Returns false if the slot
    /// does not hold an unused starting item.
    pub fn mark_used(&mut self, slot: usize) -> bool {
        match self.items.get_mut(slot) {
            Some(Item::Starting { used, .. }) if !*used => {
                *used = true;
                true
            }
            _ => false,
        }
    }

    /// Whether a found item is carried.
    pub fn contains(&self, item: FoundItem) -> bool {
        self.items.contains(&Item::Found(item))
    }

    /// Slots of items that can be used right now, in inventory order.
    pub fn usable_slots(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_usable())
            .map(|(slot, _)| slot)
            .collect()
    }

    /// How many distinct quest components are carried.
    pub fn quest_progress(&self) -> usize {
        QuestItem::ALL
            .iter()
            .filter(|q| self.contains(FoundItem::Quest(**q)))
            .count()
    }

    /// Whether the full quest set is carried.
    pub fn has_quest_set(&self) -> bool {
        self.quest_progress() == QuestItem::ALL.len()
    }

    /// Display labels for the status line.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(Item::display_label).collect()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
