//! Read-only text rendering of a modality's tree and short-term memory.
//!
//! Diagnostic views only: rendering walks the graph through shared
//! references and never mutates it.

use crate::engine::{ChunkingEngine, ModalityId};
use crate::network::node::NodeId;
use crate::pattern::{self, Symbol};

/// Renders the modality's discrimination tree, one node per line.
///
/// Each line shows the tests local to the node (its contents minus the
/// parent's), the node index, the image, the label when set, and the
/// similarity-link indices when any exist.
pub fn render_tree(engine: &ChunkingEngine, modality: ModalityId) -> String {
    let mut out = String::new();
    let root = engine.modality(modality).root();
    render_node(engine, root, &[], 0, &mut out);
    out
}

fn render_node(
    engine: &ChunkingEngine,
    node: NodeId,
    parent_contents: &[Symbol],
    level: usize,
    out: &mut String,
) {
    let chunk = engine.node(node);
    let local = pattern::pattern_diff(&chunk.contents, parent_contents);

    let mut line = format!(
        "{}< {} > Node: {} < {} >",
        "-------".repeat(level),
        local.join(" "),
        chunk.id,
        chunk.image.join(" ")
    );
    if let Some(label) = &chunk.label {
        line.push_str(&format!(" ({label})"));
    }
    if !chunk.similarity_links.is_empty() {
        let links: Vec<String> = chunk
            .similarity_links
            .iter()
            .map(|id| id.to_string())
            .collect();
        line.push_str(&format!(" {{{}}}", links.join(", ")));
    }
    out.push_str(&line);
    out.push('\n');

    for link in &chunk.children {
        render_node(engine, link.child, &chunk.contents, level + 1, out);
    }
}

/// Renders the modality's STM from oldest to most recent as
/// `index < image >` entries.
pub fn render_stm(engine: &ChunkingEngine, modality: ModalityId) -> String {
    let mut out = String::from("STM:");
    for node in engine.modality(modality).stm().iter() {
        let chunk = engine.node(node);
        out.push_str(&format!(" {} < {} >,", chunk.id, chunk.image.join(" ")));
    }
    out.push('\n');
    out
}
