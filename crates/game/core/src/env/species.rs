//! Monster species and their stat templates.
//!
//! Behavior is uniform across species; only the numbers differ.

/// Closed set of monster species that can appear in a level.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterKind {
    Rat,
    Spider,
}

/// Starting stats for a freshly spawned monster of one species.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesTemplate {
    pub name: &'static str,
    pub symbol: char,
    pub hitpoints: i32,
    pub strength: i32,
    /// Action points regenerated per turn.
    pub speed: f64,
    /// Aggro radius, in cells.
    pub sight_range: u32,
}

impl MonsterKind {
    /// Resolves a level marker to its species.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'R' => Some(MonsterKind::Rat),
            'S' => Some(MonsterKind::Spider),
            _ => None,
        }
    }

    pub fn template(self) -> SpeciesTemplate {
        match self {
            MonsterKind::Rat => SpeciesTemplate {
                name: "Rat",
                symbol: 'R',
                hitpoints: 5,
                strength: 1,
                speed: 1.5,
                sight_range: 3,
            },
            MonsterKind::Spider => SpeciesTemplate {
                name: "Spider",
                symbol: 'S',
                hitpoints: 7,
                strength: 2,
                speed: 0.5,
                sight_range: 5,
            },
        }
    }

    pub fn symbol(self) -> char {
        self.template().symbol
    }
}
