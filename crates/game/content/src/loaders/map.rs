//! Map layout loader.
//!
//! A layout places walls, tanks, and gold mines on a fixed-size board. The
//! rule bundle is supplied separately so one map can be played under any
//! season's rules.

use std::path::Path;

use game_core::{GameController, GameRules, GoldMine, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map layout structure for RON files.
///
/// ```ron
/// (
///     width: 7,
///     height: 9,
///     walls: [(3, 3, None), (1, 4, Some(2))],
///     tanks: [("Ryan", 0, 0, None), ("Beyer", 2, 0, Some("BB"))],
///     gold_mines: [(8, [(3, 4), (4, 4)])],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    pub width: u32,
    pub height: u32,
    /// `(x, y, durability)`; `None` uses the rules' wall durability.
    #[serde(default)]
    pub walls: Vec<(i32, i32, Option<u32>)>,
    /// `(owner, x, y, tile)`; `None` derives the tile from the owner name.
    #[serde(default)]
    pub tanks: Vec<(String, i32, i32, Option<String>)>,
    /// `(gold_per_day, spaces)`.
    #[serde(default)]
    pub gold_mines: Vec<(u32, Vec<(i32, i32)>)>,
}

impl MapLayout {
    /// Builds a controller through its public setup operations.
    pub fn build(&self, rules: GameRules) -> LoadResult<GameController> {
        let mut game = GameController::new(self.width, self.height, rules);

        for &(x, y, durability) in &self.walls {
            let position = Position::new(x, y);
            let placed = match durability {
                Some(durability) => game.add_wall_with_durability(position, durability),
                None => game.add_wall(position),
            };
            placed.map_err(|e| anyhow::anyhow!("Failed to place wall at {}: {}", position, e))?;
        }

        for (owner, x, y, tile) in &self.tanks {
            let position = Position::new(*x, *y);
            game.add_tank(position, owner.as_str(), tile.clone())
                .map_err(|e| anyhow::anyhow!("Failed to place tank '{}': {}", owner, e))?;
        }

        for (gold_per_day, spaces) in &self.gold_mines {
            let mine = spaces
                .iter()
                .fold(GoldMine::new(*gold_per_day), |mine, &(x, y)| {
                    mine.with_space(Position::new(x, y))
                });
            game.add_gold_mine(mine);
        }

        tracing::debug!(
            width = self.width,
            height = self.height,
            tanks = self.tanks.len(),
            walls = self.walls.len(),
            "built map"
        );
        Ok(game)
    }
}

/// Loader for map layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::load_str(&content)
    }

    pub fn load_str(content: &str) -> LoadResult<MapLayout> {
        let layout: MapLayout = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    const DUEL: &str = r#"
        (
            width: 7,
            height: 9,
            walls: [(3, 3, None), (1, 4, Some(2))],
            tanks: [("Ryan", 0, 0, None), ("Beyer", 2, 0, Some("BB"))],
            gold_mines: [(8, [(3, 4), (4, 4)])],
        )
    "#;

    #[test]
    fn builds_a_playable_controller() {
        let layout = MapLoader::load_str(DUEL).unwrap();
        let game = layout.build(presets::classic()).unwrap();

        assert_eq!(game.board().width(), 7);
        assert_eq!(game.board().height(), 9);
        assert_eq!(game.tanks().len(), 2);
        assert_eq!(game.tank("BB").unwrap().owner, "Beyer");
        assert_eq!(game.walls()[0].durability, 5);
        assert_eq!(game.walls()[1].durability, 2);
        assert!(game.gold_mines()[0].contains(Position::new(4, 4)));
        assert!(
            game.board()
                .does_line_of_sight_exist(Position::new(0, 0), Position::new(2, 0), &[])
        );
    }

    #[test]
    fn rules_supply_default_durability() {
        let layout = MapLoader::load_str(DUEL).unwrap();
        let game = layout.build(presets::council_season()).unwrap();
        assert_eq!(game.walls()[0].durability, 3);
    }

    #[test]
    fn sections_are_optional() {
        let layout = MapLoader::load_str("(width: 3, height: 2)").unwrap();
        let game = layout.build(presets::classic()).unwrap();
        assert!(game.tanks().is_empty());
        assert_eq!(game.render_board().lines().count(), 3);
    }

    #[test]
    fn overlapping_entities_fail_to_build() {
        let layout = MapLoader::load_str(
            r#"(width: 3, height: 3, walls: [(1, 1, None)], tanks: [("Ryan", 1, 1, None)])"#,
        )
        .unwrap();
        let err = layout.build(presets::classic()).unwrap_err();
        assert!(err.to_string().contains("Failed to place tank 'Ryan'"));
    }

    #[test]
    fn off_board_wall_fails_to_build() {
        let layout = MapLoader::load_str("(width: 2, height: 2, walls: [(5, 0, None)])").unwrap();
        assert!(layout.build(presets::classic()).is_err());
    }

    #[test]
    fn shipped_map_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../data/maps/season.ron");
        let layout = MapLoader::load(&path).unwrap();
        let game = layout.build(presets::classic()).unwrap();
        assert!(!game.tanks().is_empty());
    }
}
