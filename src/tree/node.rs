//! Tree node type

use crate::models::LiveObject;

/// One object plus the resolved subtrees of its owners
///
/// `owners[i]` corresponds to `object.owner_refs[i]`. Each traversal builds
/// its own tree, so an owner reachable along two paths appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub object: LiveObject,
    pub owners: Vec<TreeNode>,
}

impl TreeNode {
    /// A node with no owners
    pub fn leaf(object: LiveObject) -> Self {
        Self {
            object,
            owners: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including itself
    pub fn size(&self) -> usize {
        1 + self.owners.iter().map(TreeNode::size).sum::<usize>()
    }

    /// Length of the longest owner chain below this node
    pub fn height(&self) -> usize {
        self.owners
            .iter()
            .map(|owner| owner.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(kind: &str, name: &str) -> LiveObject {
        LiveObject {
            api_version: "v1".to_string(),
            kind: kind.to_string(),
            name: name.to_string(),
            namespace: "default".to_string(),
            uid: None,
            owner_refs: vec![],
        }
    }

    #[test]
    fn test_leaf_size_and_height() {
        let leaf = TreeNode::leaf(object("ConfigMap", "settings"));
        assert_eq!(leaf.size(), 1);
        assert_eq!(leaf.height(), 0);
    }

    #[test]
    fn test_size_and_height_of_branching_tree() {
        let tree = TreeNode {
            object: object("Pod", "p"),
            owners: vec![
                TreeNode {
                    object: object("ReplicaSet", "rs"),
                    owners: vec![TreeNode::leaf(object("Deployment", "d"))],
                },
                TreeNode::leaf(object("Node", "n")),
            ],
        };
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.height(), 2);
    }
}
