//! Text for every message the game can show.
//!
//! Output is a list of [`Line`]s tagged with a [`Style`]. Front ends decide
//! how a style looks; a terminal maps them to colors.

mod line;
mod templates;

pub use line::{Line, Span, Style, plain_text};
pub use templates::{
    COMMAND_PROMPT, ENCOUNTER_PROMPT, ITEM_PROMPT, PLAY_AGAIN_PROMPT, encounter_event,
    encounter_menu, farewell, intro, invalid_choice, item_description, item_menu, narration,
    question, room_prompt, status_block, taunt, use_outcome,
};
