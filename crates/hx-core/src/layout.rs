//! The Hexagon: eighteen rooms on two floors joined by a single staircase.

use crate::building::Building;
use crate::error::HxResult;
use crate::room::Direction::{East, North, South, West};
use crate::room::{Direction, SpecialExit};

/// Where every session begins.
pub const START_ROOM: &str = "Vestibule";

/// Rooms the villain is never placed in.
pub const VILLAIN_SAFE_ZONES: [&str; 3] = ["Vestibule", "Alcove", "Sanctuary"];

const ROOMS: &[(&str, &[(Direction, &str)])] = &[
    ("Vestibule", &[(North, "Den"), (East, "Nook")]),
    ("Nook", &[(West, "Vestibule"), (North, "Study"), (East, "Disco")]),
    (
        "Den",
        &[
            (South, "Vestibule"),
            (North, "Alcove"),
            (East, "Server Room"),
            (West, "Atrium"),
        ],
    ),
    (
        "Study",
        &[
            (West, "Den"),
            (South, "Nook"),
            (North, "Keep"),
            (East, "Game Room"),
        ],
    ),
    ("Atrium", &[(North, "Foundry"), (South, "Server Room")]),
    ("Server Room", &[(North, "Atrium"), (East, "Den")]),
    ("Foundry", &[(South, "Atrium"), (East, "Alcove")]),
    ("Alcove", &[(West, "Foundry"), (South, "Den"), (East, "Keep")]),
    ("Keep", &[(West, "Alcove"), (South, "Study"), (East, "Cannery")]),
    ("Cannery", &[(West, "Keep"), (South, "Game Room")]),
    (
        "Game Room",
        &[(North, "Cannery"), (West, "Study"), (South, "Disco")],
    ),
    ("Disco", &[(North, "Game Room"), (West, "Nook")]),
    (
        "Sanctuary",
        &[
            (West, "Loft"),
            (East, "Collection Room"),
            (South, "Haven"),
        ],
    ),
    ("Loft", &[(East, "Sanctuary"), (South, "Retreat")]),
    ("Retreat", &[(North, "Loft"), (East, "Haven")]),
    ("Collection Room", &[(West, "Sanctuary"), (South, "Perch")]),
    ("Perch", &[(North, "Collection Room"), (West, "Haven")]),
    (
        "Haven",
        &[(North, "Sanctuary"), (East, "Perch"), (West, "Retreat")],
    ),
];

const STAIRS: &[(&str, SpecialExit)] = &[
    ("Alcove", SpecialExit::StairsUp),
    ("Sanctuary", SpecialExit::StairsDown),
];

/// Build the empty Hexagon: rooms, exits, and the staircase.
pub fn hexagon() -> HxResult<Building> {
    let mut building = Building::new("The Hexagon");
    for (name, _) in ROOMS {
        building.add_room(*name)?;
    }
    for (name, exits) in ROOMS {
        let from = building.require(name)?;
        for (direction, to) in *exits {
            let to = building.require(to)?;
            building.connect(from, *direction, to)?;
        }
    }
    for (name, exit) in STAIRS {
        let id = building.require(name)?;
        building.room_mut(id)?.set_special_exit(Some(*exit));
    }
    Ok(building)
}
