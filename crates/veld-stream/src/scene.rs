use veld_blocks::{Block, Layer};

/// Opaque handle tying a streamed entity to whatever the presentation layer
/// made of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

/// Presentation sink. The streamer calls `insert` for every block it
/// materializes and `remove` for every one it evicts or expires; nothing
/// else mutates generated content in the scene.
pub trait Scene {
    fn insert(&mut self, id: EntityId, block: &Block, layer: Layer);
    fn remove(&mut self, id: EntityId, layer: Layer);
}

/// Scene that discards everything; handy for headless simulation.
#[derive(Default)]
pub struct NullScene;

impl Scene for NullScene {
    fn insert(&mut self, _id: EntityId, _block: &Block, _layer: Layer) {}
    fn remove(&mut self, _id: EntityId, _layer: Layer) {}
}
