use thiserror::Error;

use crate::NodeId;

/// Errors raised while building or driving a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BtError {
    #[error("node name `{0}` is already registered")]
    DuplicateName(String),

    #[error("node `{node}` refers to child {child}, which is not part of this tree")]
    InvalidChild { node: String, child: NodeId },

    #[error("node pool is empty")]
    EmptyPool,

    #[error("node {0} is not part of this tree")]
    UnknownNode(NodeId),
}

pub type Result<T> = std::result::Result<T, BtError>;
