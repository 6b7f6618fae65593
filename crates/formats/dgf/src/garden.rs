use crossbeam::queue::SegQueue;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityType, Position};
use crate::tile::Tile;

/// Cell or entity count from which [`Garden::resize`] switches to rayon.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Grid dimensions in tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Number of cells, `width * height`.
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Which corner of the old grid the resized grid stays attached to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeAlignment {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeAlignment {
    pub fn anchors_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    pub fn anchors_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }
}

/// One level: a row-major tile grid plus placed entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garden {
    pub name: String,
    /// MIDI file played in this garden.
    pub music_path: String,
    /// Time limit counter.
    pub time: u16,
    size: Size,
    /// `size.area()` cells, x fastest.
    tiles: Vec<Tile>,
    entities: Vec<Entity>,
}

impl Garden {
    /// Create an empty garden filled with [`Tile::Air`].
    pub fn new(size: Size) -> Self {
        Self {
            name: String::new(),
            music_path: String::new(),
            time: 0,
            size,
            tiles: vec![Tile::default(); size.area()],
            entities: Vec::new(),
        }
    }

    /// Assemble a garden from decoded parts. `tiles.len()` must equal `size.area()`.
    pub(crate) fn from_parts(
        name: String,
        music_path: String,
        time: u16,
        size: Size,
        tiles: Vec<Tile>,
        entities: Vec<Entity>,
    ) -> Self {
        debug_assert_eq!(tiles.len(), size.area());
        Self {
            name,
            music_path,
            time,
            size,
            tiles,
            entities,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// All cells, row-major.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.size.width.max(1) as usize)
    }

    pub fn tile(&self, x: u16, y: u16) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Returns `false` if `(x, y)` is outside the grid.
    pub fn set_tile(&mut self, x: u16, y: u16, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }

    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn remove_entity(&mut self, index: usize) -> Option<Entity> {
        (index < self.entities.len()).then(|| self.entities.remove(index))
    }

    pub fn clear_entities(&mut self) {
        self.entities.clear();
    }

    /// Position of the first player-start entity.
    pub fn player_start(&self) -> Option<Position> {
        self.entities
            .iter()
            .find(|e| e.kind() == EntityType::Daisy)
            .map(|e| e.position)
    }

    /// Resize the grid, keeping the region attached to `alignment`.
    ///
    /// Cells with no source become [`Tile::Air`]. Entities are moved with the
    /// kept region; those that end up outside the new grid are removed.
    pub fn resize(&mut self, new_size: Size, alignment: ResizeAlignment) {
        let old_size = self.size;
        let offset_x = if alignment.anchors_right() {
            old_size.width as i32 - new_size.width as i32
        } else {
            0
        };
        let offset_y = if alignment.anchors_bottom() {
            old_size.height as i32 - new_size.height as i32
        } else {
            0
        };

        let old_tiles = &self.tiles;
        let new_width = new_size.width.max(1) as usize;
        let sample = |i: usize| {
            let x = (i % new_width) as i32 + offset_x;
            let y = (i / new_width) as i32 + offset_y;
            if old_size.contains(x, y) {
                old_tiles[y as usize * old_size.width as usize + x as usize]
            } else {
                Tile::Air
            }
        };
        let area = new_size.area();
        let tiles: Vec<Tile> = if area >= PARALLEL_THRESHOLD {
            (0..area).into_par_iter().map(sample).collect()
        } else {
            (0..area).map(sample).collect()
        };
        self.tiles = tiles;
        self.size = new_size;

        let pending = SegQueue::new();
        let reposition = |(index, entity): (usize, &mut Entity)| {
            let x = entity.position.x as i32 - offset_x;
            let y = entity.position.y as i32 - offset_y;
            if new_size.contains(x, y) {
                entity.position = Position::new(x as u16, y as u16);
            } else {
                pending.push(index);
            }
        };
        if self.entities.len() >= PARALLEL_THRESHOLD {
            self.entities.par_iter_mut().enumerate().for_each(reposition);
        } else {
            self.entities.iter_mut().enumerate().for_each(reposition);
        }

        let mut removals: Vec<usize> = std::iter::from_fn(|| pending.pop()).collect();
        removals.sort_unstable_by(|a, b| b.cmp(a));
        for index in &removals {
            self.entities.remove(*index);
        }
        tracing::debug!(
            from = %old_size,
            to = %new_size,
            ?alignment,
            removed = removals.len(),
            "resized garden"
        );
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.size.width && y < self.size.height)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }
}
