use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use super::{CommandExecutor, args::ArgumentConsumer};

pub mod builder;

/// Reversed, so [`Vec::pop`] yields the next word.
pub type RawArgs<'a> = Vec<&'a str>;

pub struct Node {
    pub(crate) children: Vec<usize>,
    pub(crate) node_type: NodeType,
}

pub enum NodeType {
    ExecuteLeaf {
        executor: Box<dyn CommandExecutor>,
    },
    Literal {
        string: String,
    },
    Argument {
        name: String,
        consumer: Box<dyn ArgumentConsumer>,
    },
}

pub struct CommandTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) children: Vec<usize>,
    pub(crate) names: Vec<String>,
    pub(crate) description: Cow<'static, str>,
}

impl CommandTree {
    /// Every root-to-leaf path as node indices, in the order the children were
    /// added, so earlier branches win when several match.
    pub fn iter_paths(&self) -> impl Iterator<Item = Vec<usize>> + '_ {
        let mut todo: VecDeque<Vec<usize>> =
            self.children.iter().rev().map(|&child| vec![child]).collect();

        std::iter::from_fn(move || {
            while let Some(path) = todo.pop_back() {
                let Some(&last) = path.last() else {
                    continue;
                };
                let node = &self.nodes[last];
                if matches!(node.node_type, NodeType::ExecuteLeaf { .. }) {
                    return Some(path);
                }
                for &child in node.children.iter().rev() {
                    let mut next = path.clone();
                    next.push(child);
                    todo.push_back(next);
                }
            }
            None
        })
    }

    /// A usage line per path, e.g. `/enchant all [level]`.
    pub fn usage(&self) -> Vec<String> {
        self.iter_paths()
            .map(|path| {
                let mut line = format!("/{}", self.names[0]);
                for index in path {
                    match &self.nodes[index].node_type {
                        NodeType::Literal { string } => {
                            line.push(' ');
                            line.push_str(string);
                        }
                        NodeType::Argument { name, .. } => {
                            line.push_str(&format!(" <{name}>"));
                        }
                        NodeType::ExecuteLeaf { .. } => {}
                    }
                }
                line
            })
            .collect()
    }
}

impl fmt::Display for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}: {}", self.names.join(", /"), self.description)
    }
}
