use std::borrow::Cow;

use crate::command::{CommandExecutor, args::ArgumentConsumer};

use super::{CommandTree, Node, NodeType};

impl CommandTree {
    /// Add a child [Node] to the root of this [`CommandTree`].
    #[must_use]
    pub fn then(mut self, child: impl NodeBuilder) -> Self {
        let node_id = child.build(&mut self);
        self.children.push(node_id);
        self
    }

    /// provide at least one name
    pub fn new<const NAME_COUNT: usize>(
        names: [&str; NAME_COUNT],
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        assert!(NAME_COUNT > 0);

        let names_vec = names.into_iter().map(Into::into).collect();

        Self {
            nodes: Vec::new(),
            children: Vec::new(),
            names: names_vec,
            description: description.into(),
        }
    }

    /// Executes if a command terminates at this [Node], i.e. without any arguments.
    #[must_use]
    pub fn execute(mut self, executor: impl CommandExecutor + 'static) -> Self {
        let node = Node {
            node_type: NodeType::ExecuteLeaf {
                executor: Box::new(executor),
            },
            children: Vec::new(),
        };

        let node_id = self.nodes.len();
        self.nodes.push(node);
        self.children.push(node_id);

        self
    }
}

pub trait NodeBuilder {
    fn build(self, tree: &mut CommandTree) -> usize;
}

struct LeafNodeBuilder {
    node_type: NodeType,
}

impl NodeBuilder for LeafNodeBuilder {
    fn build(self, tree: &mut CommandTree) -> usize {
        tree.nodes.push(Node {
            children: Vec::new(),
            node_type: self.node_type,
        });
        tree.nodes.len() - 1
    }
}

pub struct NonLeafNodeBuilder {
    node_type: NodeType,
    child_nodes: Vec<NonLeafNodeBuilder>,
    leaf_nodes: Vec<LeafNodeBuilder>,
}

impl NodeBuilder for NonLeafNodeBuilder {
    fn build(self, tree: &mut CommandTree) -> usize {
        let mut child_indices = Vec::new();

        for node_builder in self.child_nodes {
            let i = node_builder.build(tree);
            child_indices.push(i);
        }

        for leaf_node_builder in self.leaf_nodes {
            let i = leaf_node_builder.build(tree);
            child_indices.push(i);
        }

        tree.nodes.push(Node {
            children: child_indices,
            node_type: self.node_type,
        });

        tree.nodes.len() - 1
    }
}

impl NonLeafNodeBuilder {
    /// Add a child [Node] to this one. Children are tried in insertion order.
    #[must_use]
    pub fn then(mut self, child: Self) -> Self {
        self.child_nodes.push(child);
        self
    }

    /// Executes if a command terminates at this [Node].
    #[must_use]
    pub fn execute(mut self, executor: impl CommandExecutor + 'static) -> Self {
        self.leaf_nodes.push(LeafNodeBuilder {
            node_type: NodeType::ExecuteLeaf {
                executor: Box::new(executor),
            },
        });

        self
    }
}

/// Matches a string literal.
pub fn literal(string: impl Into<String>) -> NonLeafNodeBuilder {
    NonLeafNodeBuilder {
        node_type: NodeType::Literal {
            string: string.into(),
        },
        child_nodes: Vec::new(),
        leaf_nodes: Vec::new(),
    }
}

/// ```name``` identifies this argument in [`crate::command::args::ConsumedArgs`].
///
/// ```consumer: ArgumentConsumer``` has the purpose of validating arguments.
pub fn argument(
    name: impl Into<String>,
    consumer: impl ArgumentConsumer + 'static,
) -> NonLeafNodeBuilder {
    NonLeafNodeBuilder {
        node_type: NodeType::Argument {
            name: name.into(),
            consumer: Box::new(consumer),
        },
        child_nodes: Vec::new(),
        leaf_nodes: Vec::new(),
    }
}
