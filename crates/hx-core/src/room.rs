use serde::{Deserialize, Serialize};

use crate::item::FoundItem;
use crate::robot::Robot;

/// Index of a room inside a [`Building`](crate::Building).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A compass direction used for room exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All directions, in prompt order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction (case-insensitive, full name or first letter).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The command token for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::South => "SOUTH",
            Self::East => "EAST",
            Self::West => "WEST",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A non-directional transit discovered by searching a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialExit {
    /// Stairs leading to the room that holds [`SpecialExit::StairsDown`].
    StairsUp,
    /// Stairs leading to the room that holds [`SpecialExit::StairsUp`].
    StairsDown,
    /// A portal to a random room.
    Portal,
}

impl SpecialExit {
    /// Whether this exit is a staircase.
    pub fn is_stairs(self) -> bool {
        matches!(self, Self::StairsUp | Self::StairsDown)
    }

    /// The staircase at the other end, if this is a staircase.
    pub fn counterpart(self) -> Option<Self> {
        match self {
            Self::StairsUp => Some(Self::StairsDown),
            Self::StairsDown => Some(Self::StairsUp),
            Self::Portal => None,
        }
    }
}

impl std::fmt::Display for SpecialExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StairsUp => write!(f, "Stairs Up"),
            Self::StairsDown => write!(f, "Stairs Down"),
            Self::Portal => write!(f, "Portal"),
        }
    }
}

/// A location in the building.
///
/// The exits are fixed when the building is authored. The contents (item,
/// robot, villain flag, special exit) are filled in by world generation and
/// emptied as the player clears the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    name: String,
    exits: Vec<(Direction, RoomId)>,
    item: Option<FoundItem>,
    robot: Option<Robot>,
    villain: bool,
    special_exit: Option<SpecialExit>,
}

impl Room {
    pub(crate) fn new(id: RoomId, name: String) -> Self {
        Self {
            id,
            name,
            exits: Vec::new(),
            item: None,
            robot: None,
            villain: false,
            special_exit: None,
        }
    }

    /// The room's ID.
    pub fn id(&self) -> RoomId {
        self.id
    }

    /// The room's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exits in authoring order.
    pub fn exits(&self) -> &[(Direction, RoomId)] {
        &self.exits
    }

    /// Directions that lead somewhere from this room.
    pub fn exit_directions(&self) -> Vec<Direction> {
        self.exits.iter().map(|(d, _)| *d).collect()
    }

    /// The room reached by going `direction`, if any.
    pub fn exit(&self, direction: Direction) -> Option<RoomId> {
        self.exits
            .iter()
            .find(|(d, _)| *d == direction)
            .map(|(_, to)| *to)
    }

    pub(crate) fn set_exit(&mut self, direction: Direction, to: RoomId) {
        if let Some(slot) = self.exits.iter_mut().find(|(d, _)| *d == direction) {
            slot.1 = to;
        } else {
            self.exits.push((direction, to));
        }
    }

    /// The item lying in this room.
    pub fn item(&self) -> Option<FoundItem> {
        self.item
    }

    /// Put an item in the room, returning whatever was there before.
    pub fn place_item(&mut self, item: FoundItem) -> Option<FoundItem> {
        self.item.replace(item)
    }

    /// Remove the item from the room.
    pub fn take_item(&mut self) -> Option<FoundItem> {
        self.item.take()
    }

    /// The robot guarding this room.
    pub fn robot(&self) -> Option<&Robot> {
        self.robot.as_ref()
    }

    /// Mutable access to the robot guarding this room.
    pub fn robot_mut(&mut self) -> Option<&mut Robot> {
        self.robot.as_mut()
    }

    /// Station a robot in the room, returning the previous one.
    pub fn place_robot(&mut self, robot: Robot) -> Option<Robot> {
        self.robot.replace(robot)
    }

    /// Remove the robot from the room.
    pub fn clear_robot(&mut self) -> Option<Robot> {
        self.robot.take()
    }

    /// Whether the villain waits in this room.
    pub fn is_villain(&self) -> bool {
        self.villain
    }

    pub(crate) fn set_villain(&mut self, villain: bool) {
        self.villain = villain;
    }

    /// The special exit found by searching this room.
    pub fn special_exit(&self) -> Option<SpecialExit> {
        self.special_exit
    }

    /// Install a special exit.
    pub fn set_special_exit(&mut self, exit: Option<SpecialExit>) {
        self.special_exit = exit;
    }
}
