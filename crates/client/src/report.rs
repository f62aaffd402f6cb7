//! Final-state output.

use std::fmt::Write as _;

use anyhow::Result;
use game_core::GameController;
use runtime::ReplaySummary;
use serde::Serialize;

#[derive(Serialize)]
struct Snapshot<'a> {
    summary: ReplaySummary,
    game: &'a GameController,
}

/// Board grid followed by one stats line per tank.
pub fn text(game: &GameController, summary: ReplaySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Replayed {} actions over {} days\n",
        summary.actions, summary.days
    );
    out.push_str(&game.render_board());
    out.push('\n');

    for tank in game.tanks() {
        let status = if tank.is_alive() { "" } else { " (destroyed)" };
        let _ = writeln!(out, "{tank}{status}");
    }
    let _ = writeln!(out, "\nCouncil coffer: {}", game.council().coffer());

    out
}

pub fn json(game: &GameController, summary: ReplaySummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Snapshot { summary, game })?)
}
