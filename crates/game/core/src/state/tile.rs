use bitflags::bitflags;

use crate::env::{TileTemplate, template_of};

/// Canonical terrain classes for grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Wall,
    Floor,
    Door { open: bool },
    Stairs(StairDirection),
    Water,
    Empty,
}

impl TileKind {
    /// Returns true if light stops at this cell.
    pub fn blocks_light(self) -> bool {
        matches!(
            self,
            TileKind::Wall | TileKind::Door { open: false } | TileKind::Empty
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StairDirection {
    Up,
    Down,
}

bitflags! {
    /// Mutable per-cell state layered on top of the immutable template.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TileFlags: u8 {
        /// Inside the player's field of view this turn.
        const VISIBLE = 1 << 0;
        /// Has been inside the field of view at least once.
        const SEEN = 1 << 1;
        /// Something died here.
        const BLOOD_STAINED = 1 << 2;
    }
}

/// A single grid cell: the template kind plus its mutable flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    kind: TileKind,
    flags: TileFlags,
}

impl Tile {
    /// Impassable, unlit cell returned for out-of-bounds lookups.
    pub const SENTINEL: Tile = Tile::new(TileKind::Empty);

    pub const fn new(kind: TileKind) -> Self {
        Self {
            kind,
            flags: TileFlags::empty(),
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn flags(&self) -> TileFlags {
        self.flags
    }

    pub fn template(&self) -> &'static TileTemplate {
        template_of(self.kind)
    }

    pub fn name(&self) -> &'static str {
        self.template().name
    }

    /// Action points needed to step onto this cell; 0 means impassable.
    pub fn movement_cost(&self) -> u32 {
        self.template().movement_cost
    }

    pub fn has_floor(&self) -> bool {
        self.template().has_floor
    }

    pub fn is_passable(&self) -> bool {
        self.movement_cost() > 0
    }

    pub fn blocks_light(&self) -> bool {
        self.kind.blocks_light()
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(TileFlags::VISIBLE)
    }

    pub fn is_seen(&self) -> bool {
        self.flags.contains(TileFlags::SEEN)
    }

    pub fn is_blood_stained(&self) -> bool {
        self.flags.contains(TileFlags::BLOOD_STAINED)
    }

    pub fn is_closed_door(&self) -> bool {
        self.kind == TileKind::Door { open: false }
    }

    /// Marks the cell as lit this turn. Seen is implied and never cleared.
    pub fn reveal(&mut self) {
        self.flags.insert(TileFlags::VISIBLE | TileFlags::SEEN);
    }

    pub fn clear_visible(&mut self) {
        self.flags.remove(TileFlags::VISIBLE);
    }

    /// Stains the floor. Cells without a floor stay clean.
    pub fn stain_with_blood(&mut self) -> bool {
        if self.has_floor() {
            self.flags.insert(TileFlags::BLOOD_STAINED);
            true
        } else {
            false
        }
    }

    /// Swings a closed door open, keeping the cell's flags. Returns false for
    /// anything that is not a closed door.
    pub fn open_door(&mut self) -> bool {
        if self.is_closed_door() {
            self.kind = TileKind::Door { open: true };
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impassable_kinds_have_zero_cost() {
        for kind in [
            TileKind::Wall,
            TileKind::Door { open: false },
            TileKind::Empty,
        ] {
            let tile = Tile::new(kind);
            assert_eq!(tile.movement_cost(), 0, "{kind:?}");
            assert!(!tile.is_passable());
            assert!(tile.blocks_light());
        }

        for kind in [
            TileKind::Floor,
            TileKind::Door { open: true },
            TileKind::Stairs(StairDirection::Down),
            TileKind::Water,
        ] {
            let tile = Tile::new(kind);
            assert!(tile.movement_cost() > 0, "{kind:?}");
            assert!(!tile.blocks_light());
        }
    }

    #[test]
    fn seen_survives_clearing_visibility() {
        let mut tile = Tile::new(TileKind::Floor);
        tile.reveal();
        tile.clear_visible();
        assert!(!tile.is_visible());
        assert!(tile.is_seen());
    }

    #[test]
    fn opening_a_door_keeps_flags() {
        let mut tile = Tile::new(TileKind::Door { open: false });
        tile.reveal();
        assert!(tile.open_door());
        assert!(!tile.open_door());
        assert_eq!(tile.kind(), TileKind::Door { open: true });
        assert!(tile.is_seen());
    }

    #[test]
    fn walls_cannot_be_stained() {
        let mut wall = Tile::new(TileKind::Wall);
        assert!(!wall.stain_with_blood());
        let mut floor = Tile::new(TileKind::Floor);
        assert!(floor.stain_with_blood());
        assert!(floor.is_blood_stained());
    }
}
