//! Node/link graph model and per-modality short-term memory.

pub mod node;
pub mod stm;

pub use node::{Link, Node, NodeArena, NodeId};
pub use stm::ShortTermMemory;
