//! Behavior tree runtime built on `bt-core`.
//!
//! Trees are assembled inside a [`TreeManager`], which owns every node and the
//! shared [`Blackboard`]. Composite nodes refer to their children by [`NodeId`]
//! and keep a cursor, so a child that returns [`TickStatus::Running`] is resumed
//! on the next tick rather than restarted.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod manager;
pub mod node;
pub mod nodes;
pub mod status;
pub mod trace;

pub use bt_core::{Blackboard, BlackboardError, TypedValue, ValueError};
pub use config::TreeConfig;
pub use error::{BtError, Result};
pub use manager::{RunSummary, TreeManager};
pub use node::{Node, NodeId, TickContext};
pub use nodes::{Action, Condition, Fallback, Negation, Sequence};
pub use status::TickStatus;
pub use trace::{NullTraceSink, TraceEvent, TraceSink, TracingSink, VecTraceSink};
