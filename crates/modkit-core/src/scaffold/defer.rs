//! Deferred task queue drained at editor idle ticks
//!
//! Install calls enqueue the work that must run after the immediate phase
//! (asset creation, scene wiring). Tasks run in submission order, and a
//! drain takes only the tasks that were pending when it started: anything
//! enqueued while draining waits for the next tick. Every task is
//! idempotent, so running one zero, one, or more times is safe.

use std::collections::VecDeque;

/// Work scheduled to run at the next editor idle tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Create a configuration asset of a registered type
    CreateConfigAsset {
        type_name: &'static str,
        logical_path: &'static str,
    },
    /// Ensure a marker object exists at scene root
    WireMarker { label: &'static str },
    /// Ensure a manager object exists with a component attached
    WireManager {
        object: &'static str,
        component: &'static str,
    },
}

/// FIFO queue of deferred tasks
#[derive(Debug, Default)]
pub struct DeferredQueue {
    tasks: VecDeque<DeferredTask>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: DeferredTask) {
        self.tasks.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take everything currently queued, leaving the queue empty.
    /// Tasks pushed after this call belong to the next drain.
    pub fn take_all(&mut self) -> VecDeque<DeferredTask> {
        std::mem::take(&mut self.tasks)
    }
}
