//! Tile catalog: symbol to template lookup.

use crate::state::{StairDirection, TileKind};

use super::CatalogError;

/// Immutable description shared by every cell of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileTemplate {
    pub symbol: char,
    pub name: &'static str,
    pub kind: TileKind,
    /// Action points needed to enter; 0 for impassable kinds.
    pub movement_cost: u32,
    /// Whether floor decoration (and blood) can appear on the cell.
    pub has_floor: bool,
}

const STONE_WALL: usize = 0;
const DIRT_FLOOR: usize = 1;
const CLOSED_DOOR: usize = 2;
const OPEN_DOOR: usize = 3;
const WATER: usize = 4;
const UP_STAIRS: usize = 5;
const DOWN_STAIRS: usize = 6;
const EMPTY: usize = 7;

static CATALOG: [TileTemplate; 8] = [
    TileTemplate {
        symbol: '#',
        name: "Stone Wall",
        kind: TileKind::Wall,
        movement_cost: 0,
        has_floor: false,
    },
    TileTemplate {
        symbol: '.',
        name: "Dirt Floor",
        kind: TileKind::Floor,
        movement_cost: 1,
        has_floor: true,
    },
    TileTemplate {
        symbol: '|',
        name: "Closed Door",
        kind: TileKind::Door { open: false },
        movement_cost: 0,
        has_floor: true,
    },
    TileTemplate {
        symbol: '/',
        name: "Open Door",
        kind: TileKind::Door { open: true },
        movement_cost: 2,
        has_floor: true,
    },
    TileTemplate {
        symbol: '~',
        name: "Water",
        kind: TileKind::Water,
        movement_cost: 3,
        has_floor: true,
    },
    TileTemplate {
        symbol: 'u',
        name: "Up Stairs",
        kind: TileKind::Stairs(StairDirection::Up),
        movement_cost: 1,
        has_floor: true,
    },
    TileTemplate {
        symbol: 'd',
        name: "Down Stairs",
        kind: TileKind::Stairs(StairDirection::Down),
        movement_cost: 1,
        has_floor: true,
    },
    TileTemplate {
        symbol: ' ',
        name: "Empty",
        kind: TileKind::Empty,
        movement_cost: 0,
        has_floor: false,
    },
];

/// Looks up the template for a level symbol.
///
/// Whitespace decodes to Empty. Entity markers such as `@` are not tile
/// symbols and are rejected here; level decoding handles them first.
pub fn tile_template_for(symbol: char) -> Result<&'static TileTemplate, CatalogError> {
    let index = match symbol {
        '#' => STONE_WALL,
        '.' => DIRT_FLOOR,
        '|' => CLOSED_DOOR,
        '/' => OPEN_DOOR,
        '~' => WATER,
        'u' => UP_STAIRS,
        'd' => DOWN_STAIRS,
        ' ' | '\t' | '\r' => EMPTY,
        other => return Err(CatalogError::UnknownSymbol(other)),
    };
    Ok(&CATALOG[index])
}

/// Returns the template a tile kind was built from.
pub fn template_of(kind: TileKind) -> &'static TileTemplate {
    let index = match kind {
        TileKind::Wall => STONE_WALL,
        TileKind::Floor => DIRT_FLOOR,
        TileKind::Door { open: false } => CLOSED_DOOR,
        TileKind::Door { open: true } => OPEN_DOOR,
        TileKind::Water => WATER,
        TileKind::Stairs(StairDirection::Up) => UP_STAIRS,
        TileKind::Stairs(StairDirection::Down) => DOWN_STAIRS,
        TileKind::Empty => EMPTY,
    };
    &CATALOG[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_round_trips_through_its_kind() {
        for template in &CATALOG {
            assert_eq!(template_of(template.kind), template);
            assert_eq!(tile_template_for(template.symbol), Ok(template));
        }
    }

    #[test]
    fn whitespace_is_empty() {
        for symbol in [' ', '\t', '\r'] {
            assert_eq!(tile_template_for(symbol).map(|t| t.kind), Ok(TileKind::Empty));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(
            tile_template_for('?'),
            Err(CatalogError::UnknownSymbol('?'))
        );
        assert!(tile_template_for('@').is_err());
    }

    #[test]
    fn doors_and_water_cost_more_than_floor() {
        let floor = tile_template_for('.').unwrap().movement_cost;
        let door = tile_template_for('/').unwrap().movement_cost;
        let water = tile_template_for('~').unwrap().movement_cost;
        assert!(door > floor);
        assert!(water > floor);
    }
}
