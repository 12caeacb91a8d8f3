use arrayvec::ArrayVec;

use super::{Position, Tile, TileKind};

/// Rectangular, row-major matrix of tiles.
///
/// Every row has the same width. Probing outside the bounds never fails: reads
/// return [`Tile::SENTINEL`], an impassable Empty cell that blocks light.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A grid filled with a single tile kind.
    pub fn filled(width: u32, height: u32, kind: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(kind); (width as usize) * (height as usize)],
        }
    }

    /// Builds a grid from ragged rows, padding short rows with Empty.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Tile::new(TileKind::Empty));
            tiles.extend(row);
        }

        Self {
            width: width as u32,
            height: height as u32,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// The tile at `position`, or the out-of-bounds sentinel.
    pub fn tile(&self, position: Position) -> &Tile {
        self.index(position)
            .map(|index| &self.tiles[index])
            .unwrap_or(&Tile::SENTINEL)
    }

    /// Mutable access for in-bounds cells only.
    pub fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        let index = self.index(position)?;
        self.tiles.get_mut(index)
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.tile(position).is_passable()
    }

    pub fn blocks_light(&self, position: Position) -> bool {
        self.tile(position).blocks_light()
    }

    /// Orthogonal neighbors that can be entered, in up, down, left, right order.
    pub fn passable_neighbors(&self, position: Position) -> ArrayVec<Position, 4> {
        position
            .neighbors()
            .into_iter()
            .filter(|&next| self.is_passable(next))
            .collect()
    }

    /// All in-bounds positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Row-major iterator over positions and their tiles.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.positions().zip(self.tiles.iter())
    }

    /// Clears the visible flag on every cell, keeping seen.
    pub fn clear_visible(&mut self) {
        self.tiles.iter_mut().for_each(Tile::clear_visible);
    }
}
