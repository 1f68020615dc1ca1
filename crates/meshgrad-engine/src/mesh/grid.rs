use core::ops::Index;

use crate::error::{MeshError, MeshResult};

/// Rectangular row-major container.
///
/// Invariants:
/// - `width >= 1`, `height >= 1`
/// - `elements.len() == width * height`
/// - element `(x, y)` lives at `y * width + x`
///
/// There is no mutable element access. Derived grids are produced with
/// [`map_indexed`](Self::map_indexed), which keeps the topology by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid with explicit dimensions.
    pub fn new(width: usize, height: usize, elements: Vec<T>) -> MeshResult<Self> {
        if width == 0 || height == 0 {
            return Err(MeshError::topology(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        if width.checked_mul(height) != Some(elements.len()) {
            return Err(MeshError::shape(format!(
                "{width}x{height} grid needs {} elements, got {}",
                width.saturating_mul(height),
                elements.len()
            )));
        }
        Ok(Self {
            width,
            height,
            elements,
        })
    }

    /// Creates a grid from a flat row-major sequence, deriving `height = len / width`.
    pub fn from_row_major(width: usize, elements: Vec<T>) -> MeshResult<Self> {
        let height = derive_height(width, elements.len())?;
        Self::new(width, height, elements)
    }

    /// Builds a grid by evaluating `f(x, y)` in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> MeshResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let len = width.checked_mul(height).ok_or_else(|| {
            MeshError::topology(format!("{width}x{height} grid overflows usize"))
        })?;
        let mut elements = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                elements.push(f(x, y));
            }
        }
        Self::new(width, height, elements)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of elements (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of patches bounded by four neighbouring elements.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width.saturating_sub(1) * self.height.saturating_sub(1)
    }

    /// Row-major storage index of `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) outside grid");
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            self.elements.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Row-major elements.
    #[inline]
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Iterates `(x, y, element)` in row-major order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (i % width, i / width, e))
    }

    /// Produces a grid of identical topology by mapping every element.
    pub fn map_indexed<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(usize, usize, &T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            elements: self.iter_indexed().map(|(x, y, e)| f(x, y, e)).collect(),
        }
    }

    #[inline]
    pub fn same_topology<U>(&self, other: &Grid<U>) -> bool {
        self.width == other.width && self.height == other.height
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.elements[self.index_of(x, y)]
    }
}

/// `height = len / width`, rejecting zero widths, ragged lengths and empty input.
pub(crate) fn derive_height(width: usize, len: usize) -> MeshResult<usize> {
    if width == 0 {
        return Err(MeshError::topology("grid width must be positive"));
    }
    if len % width != 0 {
        return Err(MeshError::shape(format!(
            "{len} elements cannot be split into rows of {width}"
        )));
    }
    let height = len / width;
    if height == 0 {
        return Err(MeshError::topology("grid needs at least one row"));
    }
    Ok(height)
}
