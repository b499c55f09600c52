use glam::IVec2;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::direction::Direction;
use crate::core::models::{Cell, CellType, Color};

/// The cell grid and its background colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: BoundedGrid<Cell>,
    floor_color: Color,
}

impl Board {
    pub fn new(bounds: BoundsOriginRoot, floor_color: Color) -> Board {
        Board {
            grid: BoundedGrid::new(bounds, Cell::empty(floor_color)),
            floor_color,
        }
    }

    pub fn from_grid(grid: BoundedGrid<Cell>, floor_color: Color) -> Board {
        Board { grid, floor_color }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.grid.size()
    }

    pub fn width(&self) -> i32 {
        self.grid.size().width()
    }

    pub fn height(&self) -> i32 {
        self.grid.size().height()
    }

    pub fn in_bounds(&self, pos: IVec2) -> bool {
        self.grid.contains(&pos)
    }

    pub fn floor_color(&self) -> Color {
        self.floor_color
    }

    pub(crate) fn set_floor_color(&mut self, color: Color) {
        self.floor_color = color;
    }

    pub fn get(&self, pos: IVec2) -> Option<&Cell> {
        self.grid.get(&pos)
    }

    pub(crate) fn get_mut(&mut self, pos: IVec2) -> Option<&mut Cell> {
        self.grid.get_mut(&pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = (IVec2, &Cell)> {
        self.grid.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (IVec2, &mut Cell)> {
        self.grid.iter_mut()
    }

    /// Puts `cell` at `pos`, returning what was there. Panics outside the board.
    pub fn set(&mut self, pos: IVec2, cell: Cell) -> Cell {
        self.grid.replace(&pos, cell)
    }

    /// Takes the cell at `pos`, leaving fresh floor behind.
    pub(crate) fn vacate(&mut self, pos: IVec2) -> Cell {
        let floor = Cell::empty(self.floor_color);
        self.grid.replace(&pos, floor)
    }

    /// Bonds the cell at `pos` to its neighbour in `dir`, on both sides.
    pub fn bond(&mut self, pos: IVec2, dir: Direction) {
        let other = pos + dir.to_vec();
        if !self.in_bounds(pos) || !self.in_bounds(other) {
            return;
        }
        self.grid[&pos].connections.set(dir);
        self.grid[&other].connections.set(dir.opposite());
    }

    /// Every bond whose reciprocal bit is missing or which points off the board.
    pub fn one_sided_bonds(&self) -> Vec<(IVec2, Direction)> {
        self.cells()
            .flat_map(|(pos, cell)| cell.connections.iter().map(move |dir| (pos, dir)))
            .filter(|&(pos, dir)| {
                match self.get(pos + dir.to_vec()) {
                    Some(neighbor) => !neighbor.connections.has(dir.opposite()),
                    None => true,
                }
            })
            .collect()
    }

    /// True once every present on the board has been opened.
    pub fn all_presents_open(&self) -> bool {
        self.cells()
            .all(|(_, cell)| cell.kind != CellType::Present || cell.open)
    }
}

impl std::ops::Index<IVec2> for Board {
    type Output = Cell;

    fn index(&self, index: IVec2) -> &Self::Output {
        &self.grid[&index]
    }
}
