//! Ownership of a tree's nodes and the tick loop that drives them.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, Ordering};

use bt_core::Blackboard;

use crate::node::{Node, NodeId, TickContext};
use crate::trace::{TraceSink, TracingSink};
use crate::{BtError, Result, TickStatus, TreeConfig};

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// How the last [`TreeManager::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub status: TickStatus,
    /// Root ticks performed.
    pub ticks: u32,
    /// The root was still running when the budget ran out.
    pub budget_exhausted: bool,
}

/// Owns the nodes of one tree and the blackboard they share.
///
/// Nodes are registered with [`make_node`](Self::make_node). The most recently
/// registered node becomes the root, which lets a tree be built bottom-up
/// without naming the root explicitly; [`set_root`](Self::set_root) overrides
/// that until the next registration.
pub struct TreeManager {
    id: u32,
    slots: Vec<Option<Box<dyn Node>>>,
    names: BTreeMap<String, NodeId>,
    root: Option<NodeId>,
    blackboard: Blackboard,
    config: TreeConfig,
    trace: Option<Box<dyn TraceSink>>,
    ticks: u64,
    last_run: Option<RunSummary>,
}

impl Default for TreeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeManager {
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        let trace: Option<Box<dyn TraceSink>> = if config.trace {
            Some(Box::new(TracingSink))
        } else {
            None
        };
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            names: BTreeMap::new(),
            root: None,
            blackboard: Blackboard::new(),
            config,
            trace,
            ticks: 0,
            last_run: None,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Registers `node` under its name and makes it the root.
    ///
    /// Fails if the name is taken or if one of the node's children is not a
    /// node of this tree. On failure the pool is left untouched and `node` is
    /// dropped; anything its constructor did is not undone.
    pub fn make_node<N: Node>(&mut self, node: N) -> Result<NodeId> {
        let name = node.name().to_string();
        if self.names.contains_key(&name) {
            return Err(BtError::DuplicateName(name));
        }
        if let Some(&child) = node.children().iter().find(|&&c| !self.contains(c)) {
            return Err(BtError::InvalidChild { node: name, child });
        }

        let id = NodeId::new(self.id, self.slots.len());
        tracing::debug!(node = %id, name = %name, children = node.children().len(), "registered node");
        let node: Box<dyn Node> = Box::new(node);
        self.slots.push(Some(node));
        self.names.insert(name, id);
        self.root = Some(id);
        Ok(id)
    }

    /// Designates `id` as the root.
    pub fn set_root(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(BtError::UnknownNode(id));
        }
        self.root = Some(id);
        Ok(())
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.tree() == self.id && id.index() < self.slots.len()
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        if !self.contains(id) {
            return None;
        }
        self.slots[id.index()].as_deref().map(|node| node.name())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    pub fn blackboard_mut(&mut self) -> &mut Blackboard {
        &mut self.blackboard
    }

    /// Total ticks performed by this manager, across runs.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.trace = Some(sink);
    }

    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.trace.take()
    }

    /// Rewinds every node to the start of a fresh activation.
    pub fn reset(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.reset();
        }
    }

    /// Ticks the root once.
    pub fn tick(&mut self) -> Result<TickStatus> {
        let root = self.root.ok_or(BtError::EmptyPool)?;
        self.tick_node(root)
    }

    /// Ticks `id` once, whether or not it is the root.
    pub fn tick_node(&mut self, id: NodeId) -> Result<TickStatus> {
        if !self.contains(id) {
            return Err(BtError::UnknownNode(id));
        }
        let mut ctx = TickContext::new(
            self.id,
            self.ticks,
            &mut self.slots,
            &mut self.blackboard,
            self.trace.as_deref_mut(),
        );
        let status = ctx.tick_child(id);
        self.ticks += 1;
        Ok(status)
    }

    /// Ticks the root until it returns a terminal result or `max_ticks` ticks
    /// have been spent.
    ///
    /// A root still running when the budget is spent is reported as `Failure`;
    /// [`last_run`](Self::last_run) tells the two apart.
    pub fn run(&mut self, max_ticks: u32) -> Result<TickStatus> {
        let root = self.root.ok_or(BtError::EmptyPool)?;
        let _span = tracing::debug_span!("run", root = %root, max_ticks).entered();

        let mut status = TickStatus::Running;
        let mut ticks = 0;
        while status.is_running() && ticks < max_ticks {
            status = self.tick_node(root)?;
            ticks += 1;
            tracing::debug!(tick = ticks, status = %status, "root ticked");
        }

        let budget_exhausted = status.is_running();
        if budget_exhausted {
            tracing::warn!(max_ticks, "tick budget exhausted while the root was still running");
            status = TickStatus::Failure;
        }
        tracing::info!(status = %status, ticks, "run finished");

        self.last_run = Some(RunSummary {
            status,
            ticks,
            budget_exhausted,
        });
        Ok(status)
    }

    /// [`run`](Self::run) with the configured tick budget.
    pub fn run_configured(&mut self) -> Result<TickStatus> {
        self.run(self.config.max_ticks)
    }
}
