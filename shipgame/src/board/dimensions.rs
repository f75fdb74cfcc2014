//! Square board dimensions and the fixed creation order of their cells.
use std::borrow::Borrow;

use crate::board::{BoundsError, Coordinate};

/// Dimensions of a square board with `size` cells along each axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SquareDimensions {
    /// Number of cells along both the `x` and `y` axes.
    size: usize,
}

impl SquareDimensions {
    /// Create new [`SquareDimensions`] with the specified size.
    /// Panics if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`SquareDimensions`] with the specified size.
    /// Returns an error if `size` is 0 or if `size * size` exceeds `usize::max_value()`.
    pub fn try_new(size: usize) -> Result<Self, BoundsError> {
        if size == 0 {
            Err(BoundsError::ZeroSize)
        } else {
            size.checked_mul(size)
                .map(|_| Self { size })
                .ok_or(BoundsError::TooLarge(size))
        }
    }

    /// Get the number of cells along each axis.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`SquareDimensions`]. If
    /// so, return it, otherwise return `None`.
    #[inline]
    pub fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.x < self.size && c.y < self.size {
            Some(coord)
        } else {
            None
        }
    }

    /// Convert a coordinate to its position in the creation order.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.x * self.size + coord.y)
    }

    /// Get back a coordinate from its position in the creation order. Panics if `idx`
    /// is `>= total_size`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(
            idx < self.total_size(),
            "index {} out of range for {:?}",
            idx,
            self
        );
        Coordinate {
            x: idx / self.size,
            y: idx % self.size,
        }
    }

    /// Iterate every coordinate in creation order: all `y` for `x = 0`, then all `y`
    /// for `x = 1`, and so on. The order depends only on the size.
    pub fn creation_order(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |x| (0..size).map(move |y| Coordinate { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(SquareDimensions::try_new(0), Err(BoundsError::ZeroSize));
    }

    #[test]
    fn overflowing_size_is_rejected() {
        let size = usize::max_value() / 2;
        assert_eq!(
            SquareDimensions::try_new(size),
            Err(BoundsError::TooLarge(size))
        );
    }

    #[test]
    fn creation_order_is_x_outer() {
        let dim = SquareDimensions::new(3);
        let order: Vec<_> = dim.creation_order().map(<(usize, usize)>::from).collect();
        assert_eq!(
            order,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn linearize_matches_creation_order() {
        let dim = SquareDimensions::new(4);
        for (idx, coord) in dim.creation_order().enumerate() {
            assert_eq!(dim.try_linearize(&coord), Some(idx));
            assert_eq!(dim.un_linearize(idx), coord);
        }
    }

    #[test]
    fn out_of_bounds_does_not_linearize() {
        let dim = SquareDimensions::new(4);
        assert_eq!(dim.try_linearize(&Coordinate::new(4, 0)), None);
        assert_eq!(dim.try_linearize(&Coordinate::new(0, 4)), None);
    }
}
