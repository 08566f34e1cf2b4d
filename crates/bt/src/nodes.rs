use std::slice;

use bt_core::Blackboard;

use crate::node::{Node, NodeId, TickContext};
use crate::TickStatus;

/// Ticks its children in order, one child per tick.
///
/// - `Running` from the current child: report `Running`, resume it next tick.
/// - `Success`: move on to the next child; after the last one report `Success`.
/// - `Failure`: restart from the first child and report `Running`. A failing
///   child never fails the sequence itself.
///
/// With no children the sequence succeeds immediately. Producing a terminal
/// result puts the cursor back on the first child, so the next tick starts a
/// new activation.
pub struct Sequence {
    name: String,
    children: Vec<NodeId>,
    cursor: usize,
}

impl Sequence {
    pub fn new(name: impl Into<String>, children: Vec<NodeId>) -> Self {
        Self {
            name: name.into(),
            children,
            cursor: 0,
        }
    }
}

impl Node for Sequence {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus {
        // The cursor only misses when there are no children.
        let Some(&child) = self.children.get(self.cursor) else {
            return TickStatus::Success;
        };

        match ctx.tick_child(child) {
            TickStatus::Running => TickStatus::Running,
            TickStatus::Failure => {
                self.cursor = 0;
                TickStatus::Running
            }
            TickStatus::Success => {
                self.cursor += 1;
                if self.cursor == self.children.len() {
                    self.cursor = 0;
                    TickStatus::Success
                } else {
                    TickStatus::Running
                }
            }
        }
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Tries its children in order, one child per tick, until one succeeds.
///
/// `Running` and `Success` from the current child are reported unchanged.
/// `Failure` moves on to the next child and reports `Running`; once the last
/// child has failed the fallback reports `Failure`. A child that failed is not
/// retried within the same activation.
///
/// With no children the fallback succeeds immediately. Like [`Sequence`], it
/// rewinds to the first child whenever it reports a terminal result.
pub struct Fallback {
    name: String,
    children: Vec<NodeId>,
    cursor: usize,
}

impl Fallback {
    pub fn new(name: impl Into<String>, children: Vec<NodeId>) -> Self {
        Self {
            name: name.into(),
            children,
            cursor: 0,
        }
    }
}

impl Node for Fallback {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus {
        let Some(&child) = self.children.get(self.cursor) else {
            return TickStatus::Success;
        };

        match ctx.tick_child(child) {
            TickStatus::Running => TickStatus::Running,
            TickStatus::Success => {
                self.cursor = 0;
                TickStatus::Success
            }
            TickStatus::Failure => {
                self.cursor += 1;
                if self.cursor == self.children.len() {
                    self.cursor = 0;
                    TickStatus::Failure
                } else {
                    TickStatus::Running
                }
            }
        }
    }

    fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}

/// Inverts the terminal result of its only child. `Running` passes through.
pub struct Negation {
    name: String,
    child: NodeId,
}

impl Negation {
    pub fn new(name: impl Into<String>, child: NodeId) -> Self {
        Self {
            name: name.into(),
            child,
        }
    }
}

impl Node for Negation {
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus {
        ctx.tick_child(self.child).invert()
    }

    fn children(&self) -> &[NodeId] {
        slice::from_ref(&self.child)
    }
}

/// Leaf that checks a predicate over the blackboard.
pub struct Condition<F> {
    name: String,
    cond: F,
}

impl<F> Condition<F>
where
    F: FnMut(&Blackboard) -> bool + 'static,
{
    pub fn new(name: impl Into<String>, cond: F) -> Self {
        Self {
            name: name.into(),
            cond,
        }
    }
}

impl<F> Node for Condition<F>
where
    F: FnMut(&Blackboard) -> bool + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus {
        if (self.cond)(ctx.blackboard()) {
            TickStatus::Success
        } else {
            TickStatus::Failure
        }
    }
}

/// Leaf that runs a closure with write access to the blackboard.
pub struct Action<F> {
    name: String,
    run: F,
}

impl<F> Action<F>
where
    F: FnMut(&mut Blackboard) -> TickStatus + 'static,
{
    pub fn new(name: impl Into<String>, run: F) -> Self {
        Self {
            name: name.into(),
            run,
        }
    }
}

impl<F> Node for Action<F>
where
    F: FnMut(&mut Blackboard) -> TickStatus + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickStatus {
        (self.run)(ctx.blackboard_mut())
    }
}
