//! Grid quantization helpers. Every generated object sits on integer
//! multiples of the cell size; generation and eviction never reason about
//! fractional coordinates.

/// Top-left corner of a unit cell, in world units. Both components are
/// multiples of the cell size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// World-space center of the cell anchored at this position.
    #[inline]
    pub fn center_x(self, cell: i32) -> f32 {
        self.x as f32 + cell as f32 * 0.5
    }
}

impl From<(i32, i32)> for GridPos {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Largest multiple of `cell` that is <= `v`. Uses euclidean division so
/// negative coordinates round toward -inf, not toward zero.
#[inline]
pub fn align_down(v: i32, cell: i32) -> i32 {
    v.div_euclid(cell) * cell
}

/// `align_down` for fractional inputs.
#[inline]
pub fn align_down_f(v: f32, cell: i32) -> i32 {
    let c = cell as f32;
    (v / c).floor() as i32 * cell
}

/// Grid columns covering `[min_x, max_x)`: starts at the first grid point
/// >= `min_x` and steps one cell at a time. Abutting ranges therefore tile
/// with no duplicate or missing column, aligned inputs or not.
pub fn columns(min_x: i32, max_x: i32, cell: i32) -> impl Iterator<Item = i32> {
    let mut start = align_down(min_x, cell);
    if start < min_x {
        start += cell;
    }
    std::iter::successors(
        Some(start),
        move |x| x.checked_add(cell),
    )
    .take_while(move |x| *x < max_x)
}
