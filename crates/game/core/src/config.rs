//! Fixed game constants and the defaults used by [`crate::GameRules`].

/// Lives a tank starts with; also the most it can ever hold.
pub const STARTING_LIVES: u32 = 3;

/// Fire range a tank starts with.
pub const STARTING_RANGE: u32 = 2;

/// Damage dealt by a single hit.
pub const FIRE_DAMAGE: u32 = 1;

/// Gold dropped by a destroyed tank that was carrying none.
pub const EMPTY_TANK_GOLD_DROP: u32 = 3;

/// Daily yield of a gold mine unless configured otherwise.
pub const DEFAULT_GOLD_PER_DAY: u32 = 8;

// ===== defaults for the tunable rule bundle =====
pub const DEFAULT_FIRE_AP_COST: u32 = 2;
pub const DEFAULT_MAX_AP: u32 = 9;
pub const DEFAULT_STARTING_GOLD: u32 = 0;
pub const DEFAULT_AP_PER_TURN: u32 = 2;
pub const DEFAULT_WALL_DURABILITY: u32 = 5;
pub const DEFAULT_MOVE_AP_COST: u32 = 1;
pub const DEFAULT_UPGRADE_AP_COST: u32 = 5;
pub const DEFAULT_GOLD_PER_AP: u32 = 3;
