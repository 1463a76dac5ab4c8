//! The discrimination-network engine.
//!
//! `ChunkingEngine` aggregates named modality networks over one shared
//! node registry and one logical clock. Recognition walks the graph to the
//! deepest matching chunk without mutating it; the learning operators grow
//! the graph when recognition is imperfect. Every recognised or learned
//! chunk is pushed onto the owning modality's short-term memory.

use serde::Serialize;

use crate::config::EngineConfig;
use crate::logging;
use crate::network::node::{Link, Node, NodeArena, NodeId};
use crate::network::stm::ShortTermMemory;
use crate::pattern::{self, Symbol, TERMINATOR};

/// Sentinel contents of a modality root; never produced by traversal tests.
const ROOT_CONTENTS: &str = "ROOT";

/// Names of the three standard modalities, in construction order.
pub const STANDARD_MODALITIES: [&str; 3] = ["visual", "verbal", "action"];

/// Identifier of a modality within one engine.
pub type ModalityId = usize;

/// One network instance: a root chunk plus its short-term memory.
#[derive(Debug)]
pub struct Modality {
    name: String,
    root: NodeId,
    stm: ShortTermMemory,
}

impl Modality {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn stm(&self) -> &ShortTermMemory {
        &self.stm
    }
}

#[derive(Serialize)]
struct LearnEvent<'a> {
    modality: &'a str,
    path: &'a str,
    node: NodeId,
    clock: u64,
}

/// Aggregate of modality networks sharing one node registry and one
/// monotonically non-decreasing logical clock.
///
/// Construction yields the three standard modalities ("visual", "verbal",
/// "action"); further instances can be added symmetrically with
/// [`ChunkingEngine::add_modality`]. Two engines never share state.
pub struct ChunkingEngine {
    config: EngineConfig,
    nodes: NodeArena,
    clock: u64,
    modalities: Vec<Modality>,
}

impl ChunkingEngine {
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = Self {
            config,
            nodes: NodeArena::new(),
            clock: 0,
            modalities: Vec::new(),
        };
        for name in STANDARD_MODALITIES {
            engine.add_modality(name);
        }
        engine
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Adds a further network instance with its own root and STM, sharing
    /// this engine's registry and clock.
    pub fn add_modality(&mut self, name: &str) -> ModalityId {
        let root = self
            .nodes
            .insert(vec![ROOT_CONTENTS.to_string()], Vec::new());
        let id = self.modalities.len();
        self.modalities.push(Modality {
            name: name.to_string(),
            root,
            stm: ShortTermMemory::new(self.config.stm_capacity, self.config.similarity_threshold),
        });
        id
    }

    pub fn modality(&self, id: ModalityId) -> &Modality {
        &self.modalities[id]
    }

    pub fn modality_named(&self, name: &str) -> Option<ModalityId> {
        self.modalities.iter().position(|m| m.name == name)
    }

    pub fn modalities(&self) -> &[Modality] {
        &self.modalities
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }

    /// Simulated learning time accumulated so far.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Annotates a node. The learning operators never touch labels; they
    /// exist for external callers and show up in rendering only.
    pub fn set_label(&mut self, node: NodeId, label: Option<String>) {
        self.nodes.get_mut(node).label = label;
    }

    /// Walks the network from the modality root to the deepest chunk whose
    /// chain of tests matches `pattern`.
    ///
    /// Children are scanned in link order; following a link consumes the
    /// matched portion of the pattern and restarts the scan at the child's
    /// first link. The terminal chunk is pushed onto the modality's STM.
    /// The graph itself is never mutated and the clock does not advance.
    pub fn recognise(&mut self, modality: ModalityId, pattern: &[Symbol]) -> NodeId {
        let mut current = self.modalities[modality].root;
        let mut remaining = pattern.to_vec();
        let mut next_link = 0;

        while next_link < self.nodes.get(current).children.len() {
            let link = &self.nodes.get(current).children[next_link];
            if pattern::pattern_matches(&link.test, &remaining) {
                remaining = pattern::pattern_diff(&remaining, &link.test);
                current = link.child;
                next_link = 0;
            } else {
                next_link += 1;
            }
        }

        self.push_stm(modality, current);
        current
    }

    /// Recognises `pattern`, then repairs an imperfect match by growing the
    /// network: discrimination when the chunk cannot stand for the pattern
    /// at all, familiarisation when its image can be extended toward it.
    pub fn recognise_and_learn(&mut self, modality: ModalityId, pattern: &[Symbol]) -> NodeId {
        let mut node = self.recognise(modality, pattern);

        let mut path = "recognised";
        if self.nodes.get(node).image.as_slice() != pattern {
            let root = self.modalities[modality].root;
            let image = &self.nodes.get(node).image;
            let must_discriminate = node == root
                || !pattern::pattern_matches(image, pattern)
                || pattern::ends_with_terminator(image);
            node = if must_discriminate {
                path = "discriminate";
                self.discriminate(modality, node, pattern)
            } else {
                path = "familiarise";
                self.familiarise(modality, node, pattern)
            };
        }

        self.push_stm(modality, node);
        self.log_learn_event(modality, path, node);
        node
    }

    /// Extends a chunk's image by one already-known symbol.
    ///
    /// The next unseen symbol of `pattern` must itself be recognisable; a
    /// wholly novel symbol is learned as a primitive instead, leaving the
    /// chunk untouched.
    fn familiarise(&mut self, modality: ModalityId, node: NodeId, pattern: &[Symbol]) -> NodeId {
        let new_info =
            pattern::first_unit(&pattern::pattern_diff(pattern, &self.nodes.get(node).image));
        if new_info.is_empty() {
            return node;
        }

        let retrieved = self.recognise(modality, &new_info);
        if retrieved == self.modalities[modality].root {
            return self.learn_primitive(modality, &new_info);
        }

        let image = &mut self.nodes.get_mut(node).image;
        if pattern::ends_with_terminator(image) {
            image.pop();
        }
        image.extend(new_info);
        self.clock += self.config.familiarisation_time;
        node
    }

    /// Grows a new distinguishing branch for `pattern` below `node`.
    ///
    /// Adds exactly one new test edge (or reuses an existing equal one) and
    /// never mutates any existing chunk's image. Pattern-end is treated as
    /// a network-global feature: when the needed test is the terminator and
    /// no terminator chunk exists yet, one is created directly under the
    /// modality root.
    fn discriminate(&mut self, modality: ModalityId, node: NodeId, pattern: &[Symbol]) -> NodeId {
        let new_info = pattern::pattern_diff(pattern, &self.nodes.get(node).contents);
        let terminator: Vec<Symbol> = vec![TERMINATOR.to_string()];

        if new_info.is_empty() || new_info == terminator {
            let recognised = self.recognise(modality, &terminator);
            if self.nodes.get(recognised).contents == terminator {
                return self.add_test(modality, node, terminator);
            }
            let child = self.nodes.insert(terminator.clone(), terminator.clone());
            let root = self.modalities[modality].root;
            self.nodes.get_mut(root).children.push(Link {
                test: terminator,
                child,
            });
            return child;
        }

        let chunk = self.recognise(modality, &new_info);
        if chunk == self.modalities[modality].root {
            let mut unit = pattern::first_unit(&new_info);
            if unit.is_empty() {
                unit = terminator;
            }
            self.learn_primitive(modality, &unit)
        } else if pattern::pattern_matches(&self.nodes.get(chunk).contents, &new_info) {
            let test = self.nodes.get(chunk).contents.clone();
            self.add_test(modality, node, test)
        } else {
            self.add_test(modality, node, pattern::first_unit(&new_info))
        }
    }

    /// Adds a new test link under `node`, returning the new child.
    ///
    /// Idempotent: when a sibling link with an identical test already
    /// exists, nothing changes and `node` itself is returned.
    fn add_test(&mut self, modality: ModalityId, node: NodeId, test: Vec<Symbol>) -> NodeId {
        assert!(!test.is_empty(), "link tests must be non-empty");
        if self
            .nodes
            .get(node)
            .children
            .iter()
            .any(|link| link.test == test)
        {
            return node;
        }

        let root = self.modalities[modality].root;
        let contents = if node == root {
            test.clone()
        } else {
            let mut joined = self.nodes.get(node).contents.clone();
            joined.extend(test.iter().cloned());
            joined
        };

        let child = self.nodes.insert(contents.clone(), contents);
        self.nodes.get_mut(node).children.push(Link { test, child });
        self.clock += self.config.discrimination_time;
        child
    }

    /// Registers a previously unseen atomic symbol directly under the root,
    /// with an empty image.
    ///
    /// The input must be a single-symbol pattern; anything longer is a
    /// contract violation in the caller.
    fn learn_primitive(&mut self, modality: ModalityId, pattern: &[Symbol]) -> NodeId {
        assert_eq!(
            pattern.len(),
            1,
            "primitive patterns must hold exactly one symbol"
        );
        let child = self.nodes.insert(pattern.to_vec(), Vec::new());
        let root = self.modalities[modality].root;
        self.nodes.get_mut(root).children.push(Link {
            test: pattern.to_vec(),
            child,
        });
        self.clock += self.config.discrimination_time;
        child
    }

    fn push_stm(&mut self, modality: ModalityId, node: NodeId) {
        self.modalities[modality].stm.push(node, &mut self.nodes);
    }

    fn log_learn_event(&self, modality: ModalityId, path: &str, node: NodeId) {
        let event = LearnEvent {
            modality: self.modalities[modality].name(),
            path,
            node,
            clock: self.clock,
        };
        if let Err(err) = logging::log_operation("recognise_and_learn", &event) {
            eprintln!("failed to log recognise_and_learn: {err}");
        }
    }
}

impl Default for ChunkingEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
