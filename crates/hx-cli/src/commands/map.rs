use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use hx_core::{Room, World, generate_hexagon};

/// One room of a generated world, flattened for display.
#[derive(Serialize)]
struct RoomEntry {
    name: String,
    exits: Vec<String>,
    special_exit: Option<String>,
    item: Option<String>,
    robot: Option<String>,
    villain: bool,
}

#[derive(Serialize)]
struct MapReport {
    seed: Option<u64>,
    start: String,
    villain: String,
    vials: Vec<(String, i32)>,
    rooms: Vec<RoomEntry>,
}

impl RoomEntry {
    fn new(room: &Room, world: &World) -> Self {
        let exits = room
            .exits()
            .iter()
            .map(|(direction, to)| {
                let to = world
                    .room(*to)
                    .map(|r| r.name().to_string())
                    .unwrap_or_else(|_| to.to_string());
                format!("{direction} -> {to}")
            })
            .collect();
        Self {
            name: room.name().to_string(),
            exits,
            special_exit: room.special_exit().map(|e| e.to_string()),
            item: room.item().map(|i| i.to_string()),
            robot: room.robot().map(|r| r.to_string()),
            villain: room.is_villain(),
        }
    }
}

pub fn run(seed: Option<u64>, json: bool) -> Result<(), String> {
    let config = super::config(seed);
    let world = generate_hexagon(&mut config.rng())
        .map_err(|e| format!("failed to generate world: {e}"))?;
    let name_of = |id| {
        world
            .room(id)
            .map(|r| r.name().to_string())
            .map_err(|e| e.to_string())
    };

    let report = MapReport {
        seed,
        start: name_of(world.start())?,
        villain: name_of(world.villain())?,
        vials: world
            .vials()
            .iter()
            .map(|(vial, effect)| (vial.name().to_string(), effect))
            .collect(),
        rooms: world
            .building()
            .rooms()
            .map(|room| RoomEntry::new(room, &world))
            .collect(),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Exits", "Special", "Item", "Robot"]);
    for room in &report.rooms {
        let name = if room.villain {
            format!("{} (villain)", room.name)
        } else if room.name == report.start {
            format!("{} (start)", room.name)
        } else {
            room.name.clone()
        };
        table.add_row(vec![
            name,
            room.exits.join("\n"),
            room.special_exit.clone().unwrap_or_else(|| "-".into()),
            room.item.clone().unwrap_or_else(|| "-".into()),
            room.robot.clone().unwrap_or_else(|| "-".into()),
        ]);
    }

    println!("{table}");
    println!();
    if let Some(seed) = seed {
        println!("  Seed: {seed}");
    }
    println!("  Villain: {}", report.villain);
    for (vial, effect) in &report.vials {
        println!("  {vial}: {effect:+} Focus");
    }

    Ok(())
}
