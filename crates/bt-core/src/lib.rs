//! Type-erased values and the shared blackboard used by behavior trees.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod blackboard;
pub mod error;
pub mod value;

pub use blackboard::Blackboard;
pub use error::{BlackboardError, ValueError};
pub use value::TypedValue;
