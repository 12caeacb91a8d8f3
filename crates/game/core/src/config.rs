/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of narration lines each level keeps before overwriting the oldest.
    pub event_log_capacity: usize,
    /// Action points spent by a single attack.
    pub attack_cost: f64,
    /// Action points spent opening a closed door.
    pub door_open_cost: f64,
    /// Shape of the area swept by the player's field of view. Monster aggro
    /// always measures Euclidean distance.
    pub sight_shape: SightShape,
    /// Stats the player starts with.
    pub player: PlayerTemplate,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 10;
    pub const DEFAULT_ATTACK_COST: f64 = 1.0;
    pub const DEFAULT_DOOR_OPEN_COST: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            event_log_capacity: Self::DEFAULT_EVENT_LOG_CAPACITY,
            attack_cost: Self::DEFAULT_ATTACK_COST,
            door_open_cost: Self::DEFAULT_DOOR_OPEN_COST,
            sight_shape: SightShape::default(),
            player: PlayerTemplate::default(),
        }
    }

    pub fn with_player(mut self, player: PlayerTemplate) -> Self {
        self.player = player;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Which cells around an observer count as "within sight range".
///
/// `Square` sweeps every cell whose row and column offsets are both within the
/// radius. `Disc` only sweeps cells whose Euclidean distance is within the radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SightShape {
    #[default]
    Square,
    Disc,
}

impl SightShape {
    /// Returns true if `(dx, dy)` lies inside a sight area of the given radius.
    pub fn contains(self, dx: i32, dy: i32, radius: u32) -> bool {
        let radius = radius as i64;
        let (dx, dy) = (dx as i64, dy as i64);
        match self {
            SightShape::Square => dx.abs() <= radius && dy.abs() <= radius,
            // Compare squared lengths so the test stays in integers.
            SightShape::Disc => dx * dx + dy * dy <= radius * radius,
        }
    }
}

/// Starting stats for the player character.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTemplate {
    pub name: String,
    pub hitpoints: i32,
    pub strength: i32,
    pub speed: f64,
    pub sight_range: u32,
}

impl Default for PlayerTemplate {
    fn default() -> Self {
        Self {
            name: "meds".to_owned(),
            hitpoints: 50,
            strength: 3,
            speed: 1.0,
            sight_range: 5,
        }
    }
}
