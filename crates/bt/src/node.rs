//! The node contract and the per-tick context nodes are driven through.

use std::fmt;

use bt_core::Blackboard;
use serde::{Deserialize, Serialize};

use crate::trace::{TraceEvent, TraceSink};
use crate::TickStatus;

/// Handle to a node owned by a [`TreeManager`](crate::TreeManager).
///
/// Ids carry the id of the tree that issued them, so a handle from one manager
/// is never mistaken for a node of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    tree: u32,
    index: usize,
}

impl NodeId {
    pub(crate) const fn new(tree: u32, index: usize) -> Self {
        Self { tree, index }
    }

    pub(crate) fn tree(self) -> u32 {
        self.tree
    }

    /// Position of the node in its tree, in registration order.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.tree, self.index)
    }
}

/// A behavior tree node.
///
/// `tick` may be called any number of times in direct succession and at any
/// cadence; nodes never schedule themselves. Leaves are free to read and write
/// the blackboard or drive external effects from `tick`.
pub trait Node: 'static {
    /// Name of the node, unique within its tree.
    fn name(&self) -> &str;

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus;

    /// Structural children, checked against the tree when the node is registered.
    fn children(&self) -> &[NodeId] {
        &[]
    }

    /// Returns the node to the start of a fresh activation.
    fn reset(&mut self) {}
}

type Slot = Option<Box<dyn Node>>;

/// Everything a node can reach while it is being ticked.
///
/// The node currently inside [`Node::tick`] is moved out of its arena slot, so
/// a node can tick its children through the same context. Asking for a node
/// that is unknown, belongs to another tree, or is already on the tick path is
/// logged and answered with [`TickStatus::Failure`].
pub struct TickContext<'a> {
    tree: u32,
    tick: u64,
    slots: &'a mut [Slot],
    blackboard: &'a mut Blackboard,
    trace: Option<&'a mut (dyn TraceSink + 'static)>,
}

impl<'a> TickContext<'a> {
    pub(crate) fn new(
        tree: u32,
        tick: u64,
        slots: &'a mut [Slot],
        blackboard: &'a mut Blackboard,
        trace: Option<&'a mut (dyn TraceSink + 'static)>,
    ) -> Self {
        Self {
            tree,
            tick,
            slots,
            blackboard,
            trace,
        }
    }

    /// Number of ticks the owning manager completed before this one.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn blackboard(&self) -> &Blackboard {
        &*self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut *self.blackboard
    }

    /// Ticks the node `id` once and returns its result.
    pub fn tick_child(&mut self, id: NodeId) -> TickStatus {
        if id.tree() != self.tree {
            tracing::error!(node = %id, "cannot tick a node of another tree");
            return TickStatus::Failure;
        }
        let Some(slot) = self.slots.get_mut(id.index()) else {
            tracing::error!(node = %id, "cannot tick an unknown node");
            return TickStatus::Failure;
        };
        let Some(mut node) = slot.take() else {
            tracing::error!(node = %id, "node is already being ticked");
            return TickStatus::Failure;
        };

        let status = node.tick(self);
        self.slots[id.index()] = Some(node);

        if let Some(sink) = self.trace.as_deref_mut() {
            sink.emit(TraceEvent {
                tick: self.tick,
                node: id,
                status,
            });
        }
        status
    }
}
