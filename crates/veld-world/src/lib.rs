//! Seeded procedural generation: terrain heights, ground columns, trees,
//! and the leaf life cycle.
#![forbid(unsafe_code)]

pub mod foliage;
pub mod heightfield;
pub mod rng;
pub mod terrain;
pub mod trees;
pub mod worldgen;

pub use foliage::{Leaf, LeafPhase};
pub use heightfield::{HeightField, HeightLookup};
pub use terrain::TerrainGenerator;
pub use trees::{TreeGenerator, TreeSpawn};
pub use worldgen::{WorldGenConfig, WorldGenParams, load_params_from_path};
