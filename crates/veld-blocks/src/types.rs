use super::grid::GridPos;
use super::palette::Rgb;

/// What a generated block is, which also decides the scene layer it lands
/// on and whether the avatar collides with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Topmost ground cells; the only terrain the avatar stands on.
    GroundCrust,
    /// Cosmetic fill below the crust.
    GroundFill,
    Stump,
    Leaf,
}

impl BlockKind {
    #[inline]
    pub fn layer(self) -> Layer {
        match self {
            BlockKind::GroundFill => Layer::GroundFill,
            BlockKind::GroundCrust => Layer::GroundCrust,
            BlockKind::Stump => Layer::Stump,
            BlockKind::Leaf => Layer::Leaf,
        }
    }
}

/// Draw/collision ordering for scene insertion. Discriminants are the draw
/// order, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    GroundFill = 0,
    GroundCrust = 1,
    Stump = 2,
    Leaf = 3,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::GroundFill,
        Layer::GroundCrust,
        Layer::Stump,
        Layer::Leaf,
    ];

    #[inline]
    pub fn draw_order(self) -> i32 {
        self as i32
    }

    /// Only the crust participates in avatar ground collision; fill is
    /// cosmetic and stumps/leaves are pass-through.
    #[inline]
    pub fn solid_for_avatar(self) -> bool {
        matches!(self, Layer::GroundCrust)
    }
}

/// A unit-cell axis-aligned rectangle anchored at a grid-aligned top-left
/// corner. Position never changes after creation; leaves get their motion
/// from the foliage state machine, not from mutating the block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub pos: GridPos,
    pub kind: BlockKind,
    pub tint: Rgb,
}

impl Block {
    #[inline]
    pub const fn new(pos: GridPos, kind: BlockKind, tint: Rgb) -> Self {
        Self { pos, kind, tint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_draw_back_to_front() {
        let mut orders: Vec<i32> = Layer::ALL.iter().map(|l| l.draw_order()).collect();
        let sorted = {
            let mut s = orders.clone();
            s.sort();
            s
        };
        assert_eq!(orders, sorted);
        orders.dedup();
        assert_eq!(orders.len(), Layer::ALL.len());
    }

    #[test]
    fn only_crust_is_solid() {
        for layer in Layer::ALL {
            assert_eq!(layer.solid_for_avatar(), layer == Layer::GroundCrust);
        }
    }

    #[test]
    fn kind_maps_to_matching_layer() {
        assert_eq!(BlockKind::GroundCrust.layer(), Layer::GroundCrust);
        assert_eq!(BlockKind::GroundFill.layer(), Layer::GroundFill);
        assert_eq!(BlockKind::Stump.layer(), Layer::Stump);
        assert_eq!(BlockKind::Leaf.layer(), Layer::Leaf);
    }
}
