//! Plain-text tree rendering
//!
//! One line per node, pre-order: the node, then each owner's whole subtree in
//! declared order, each level indented a fixed width further than its parent.
//! The namespace field is always printed, empty for cluster-scoped objects.

use std::io::{self, Write};

use super::node::TreeNode;
use crate::models::LiveObject;

/// Rendering switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each line with the object's `apiVersion`
    pub show_api_version: bool,
    /// Spaces added per level of depth
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_api_version: false,
            indent_width: 4,
        }
    }
}

/// Render a tree to lines, without trailing newlines
pub fn render(node: &TreeNode, options: &RenderOptions) -> Vec<String> {
    let mut lines = Vec::with_capacity(node.size());
    render_into(node, options, 0, &mut lines);
    lines
}

/// Write a rendered tree, one newline-terminated line per node
pub fn write_tree<W: Write>(out: &mut W, node: &TreeNode, options: &RenderOptions) -> io::Result<()> {
    for line in render(node, options) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn render_into(node: &TreeNode, options: &RenderOptions, depth: usize, lines: &mut Vec<String>) {
    let indentation = " ".repeat(depth * options.indent_width);
    lines.push(format!("{}{}", indentation, format_object(&node.object, options)));

    for owner in &node.owners {
        render_into(owner, options, depth + 1, lines);
    }
}

fn format_object(object: &LiveObject, options: &RenderOptions) -> String {
    if options.show_api_version {
        format!(
            "{} {} {} -n {}",
            object.api_version, object.kind, object.name, object.namespace
        )
    } else {
        format!("{} {} -n {}", object.kind, object.name, object.namespace)
    }
}
