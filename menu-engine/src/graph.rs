//! Dependency Graph
//!
//! In-memory adjacency over the attribute dependency edges: which option
//! selections reveal which downstream attributes. Built once per product
//! open from the full edge set; pure queries after that.

use shared::models::{AttributeDependency, AttributeOption};
use std::collections::HashMap;

/// Directed visibility graph: parent option -> child attributes
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// parent option id -> child attribute ids
    children: HashMap<String, Vec<String>>,
    /// child attribute id -> gating parent option ids (inverse index)
    parents: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build the adjacency maps from the full set of dependency edges.
    /// Duplicate edges collapse to one.
    pub fn from_edges(edges: &[AttributeDependency]) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            let children = graph
                .children
                .entry(edge.parent_option_id.clone())
                .or_default();
            if !children.contains(&edge.child_attribute_id) {
                children.push(edge.child_attribute_id.clone());
            }

            let parents = graph
                .parents
                .entry(edge.child_attribute_id.clone())
                .or_default();
            if !parents.contains(&edge.parent_option_id) {
                parents.push(edge.parent_option_id.clone());
            }
        }
        graph
    }

    /// Child attributes revealed by selecting the given option
    pub fn children_of(&self, option_id: &str) -> &[String] {
        self.children
            .get(option_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Parent options that gate the given attribute (OR-visibility:
    /// any one of them reveals it)
    pub fn gating_options(&self, attribute_id: &str) -> &[String] {
        self.parents
            .get(attribute_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the attribute is gated by at least one dependency edge.
    /// Ungated attributes are roots: visible from session start if bound.
    pub fn is_gated(&self, attribute_id: &str) -> bool {
        self.parents.contains_key(attribute_id)
    }

    /// Total number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    /// Validate that the graph is acyclic at the attribute level.
    ///
    /// Edges are lifted to attributes: an edge option O -> attribute A
    /// induces owner(O) -> A. The cascade-reset logic only terminates on
    /// an acyclic graph, so a detected cycle is a fatal configuration
    /// error at load time, never a runtime concern.
    ///
    /// Returns the attribute ids along the first cycle found.
    pub fn validate_acyclic(
        &self,
        options: &HashMap<String, AttributeOption>,
    ) -> Result<(), Vec<String>> {
        // attribute -> attributes it reveals (through any of its options)
        let mut attr_edges: HashMap<&str, Vec<&str>> = HashMap::new();
        for (option_id, child_attrs) in &self.children {
            // Edges from unknown options are dangling and cannot fire
            let Some(option) = options.get(option_id) else {
                continue;
            };
            let targets = attr_edges.entry(option.attribute_id.as_str()).or_default();
            for child in child_attrs {
                if !targets.contains(&child.as_str()) {
                    targets.push(child.as_str());
                }
            }
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            InProgress,
            Done,
        }

        fn visit<'a>(
            node: &'a str,
            edges: &HashMap<&'a str, Vec<&'a str>>,
            marks: &mut HashMap<&'a str, Mark>,
            stack: &mut Vec<&'a str>,
        ) -> Option<Vec<String>> {
            match marks.get(node) {
                Some(Mark::Done) => return None,
                Some(Mark::InProgress) => {
                    // Back edge: the cycle is the stack suffix from `node`
                    let start = stack.iter().position(|n| *n == node).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        stack[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(node.to_string());
                    return Some(cycle);
                }
                None => {}
            }

            marks.insert(node, Mark::InProgress);
            stack.push(node);
            if let Some(targets) = edges.get(node) {
                for &target in targets {
                    if let Some(cycle) = visit(target, edges, marks, stack) {
                        return Some(cycle);
                    }
                }
            }
            stack.pop();
            marks.insert(node, Mark::Done);
            None
        }

        let mut marks = HashMap::new();
        let mut stack = Vec::new();
        let roots: Vec<&str> = attr_edges.keys().copied().collect();
        for root in roots {
            if let Some(cycle) = visit(root, &attr_edges, &mut marks, &mut stack) {
                return Err(cycle);
            }
        }
        Ok(())
    }
}
