//! # Chunking Cognition Core
//!
//! A discrimination-network engine: it incrementally builds a tree-shaped
//! index over sequences of discrete symbols, learns to recognise patterns
//! it has seen before, and generalises partially-seen patterns into
//! broader chunks. Each modality network keeps a bounded short-term
//! memory of recently recognised chunks and cross-links chunks judged
//! mutually similar.
//!
//! ## Quick Start
//!
//! ```rust
//! use chunking_cognition_core::ChunkingEngine;
//! use chunking_cognition_core::pattern::pattern_of;
//!
//! let mut engine = ChunkingEngine::with_defaults();
//! let visual = engine.modality_named("visual").unwrap();
//!
//! // A novel symbol enters the network as a primitive chunk.
//! let node = engine.recognise_and_learn(visual, &pattern_of(&["a"]));
//! assert_eq!(engine.node(node).contents, pattern_of(&["a"]));
//!
//! // Repeated exposure fills in the chunk's image.
//! engine.recognise_and_learn(visual, &pattern_of(&["a"]));
//! let node = engine.recognise(visual, &pattern_of(&["a"]));
//! assert_eq!(engine.node(node).image, pattern_of(&["a"]));
//! ```
//!
//! ## Core Modules
//!
//! - [`pattern`] - Comparison primitives over symbol sequences
//! - [`network`] - Chunk nodes, test links, and short-term memory
//! - [`engine`] - Recognition traversal and the learning operators
//! - [`config`] - Engine configuration via TOML
//! - [`logging`] - JSON line-delimited logging
//! - [`render`] - Read-only tree and STM views

pub mod config;
pub mod engine;
pub mod logging;
pub mod network;
pub mod pattern;
pub mod render;

pub use config::EngineConfig;
pub use engine::{ChunkingEngine, Modality, ModalityId, STANDARD_MODALITIES};
pub use network::node::{Link, Node, NodeArena, NodeId};
pub use network::stm::ShortTermMemory;
pub use pattern::{Symbol, TERMINATOR};
