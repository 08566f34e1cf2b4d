#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use bt::{Node, TickContext, TickStatus};

pub use bt::TickStatus::{Failure, Running, Success};

/// Names of the leaves in the order they were ticked.
pub type TickLog = Rc<RefCell<Vec<&'static str>>>;

pub fn tick_log() -> TickLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn ticked(log: &TickLog) -> Vec<&'static str> {
    log.borrow().clone()
}

/// Leaf that replays a fixed script of results, then repeats `then`.
pub struct Scripted {
    name: &'static str,
    script: VecDeque<TickStatus>,
    then: TickStatus,
    log: TickLog,
}

impl Scripted {
    pub fn new(
        name: &'static str,
        log: &TickLog,
        script: impl IntoIterator<Item = TickStatus>,
        then: TickStatus,
    ) -> Self {
        Self {
            name,
            script: script.into_iter().collect(),
            then,
            log: Rc::clone(log),
        }
    }

    pub fn always(name: &'static str, log: &TickLog, status: TickStatus) -> Self {
        Self::new(name, log, std::iter::empty(), status)
    }
}

impl Node for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn tick(&mut self, _ctx: &mut TickContext<'_>) -> TickStatus {
        self.log.borrow_mut().push(self.name);
        self.script.pop_front().unwrap_or(self.then)
    }
}
