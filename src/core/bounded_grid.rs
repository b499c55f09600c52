use glam::IVec2;
use crate::core::bounds::BoundsOriginRoot;

/// Dense row-major storage addressed by `IVec2 { x: column, y: row }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new_with_size(size: IVec2, default: T) -> Self
    where
        T: Clone,
    {
        let bounds = BoundsOriginRoot::new(size.x, size.y);
        BoundedGrid::new(bounds, default)
    }

    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area() as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    /// Builds a grid by asking `init` for the value at every position, row by row.
    pub fn from_fn(bounds: BoundsOriginRoot, mut init: impl FnMut(IVec2) -> T) -> Self {
        let cells = bounds.iter().map(|pos| init(pos)).collect();
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &IVec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &IVec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &IVec2) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    pub fn replace(&mut self, pos: &IVec2, value: T) -> T {
        std::mem::replace(&mut self[pos], value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (IVec2, &mut T)> {
        self.bounds.iter().zip(self.cells.iter_mut())
    }

    fn offset(&self, index: &IVec2) -> usize {
        (index.y * self.bounds.extent.x + index.x) as usize
    }
}

impl<T> std::ops::Index<&IVec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &IVec2) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl<T> std::ops::IndexMut<&IVec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &IVec2) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_fn_stores_row_major() {
        let grid = BoundedGrid::from_fn(BoundsOriginRoot::new(3, 2), |pos| pos.y * 10 + pos.x);

        assert_eq!(grid[&IVec2::new(2, 0)], 2);
        assert_eq!(grid[&IVec2::new(0, 1)], 10);
        assert_eq!(grid[&IVec2::new(2, 1)], 12);
        assert_eq!(grid.get(&IVec2::new(3, 0)), None);
        assert_eq!(grid.get(&IVec2::new(0, -1)), None);
    }

    #[test]
    fn iter_visits_each_position_once() {
        let grid = BoundedGrid::new_with_size(IVec2::new(4, 3), 0u8);
        let positions: Vec<IVec2> = grid.iter().map(|(pos, _)| pos).collect();

        assert_eq!(positions.len(), 12);
        assert_eq!(positions[0], IVec2::new(0, 0));
        assert_eq!(positions[4], IVec2::new(0, 1));
        assert_eq!(positions[11], IVec2::new(3, 2));
    }
}
