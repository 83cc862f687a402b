//! Deferred task queue.
//!
//! Tasks posted here run on the next tick of whoever owns the queue. The
//! queue is generic over a context so a widget can defer work that needs
//! `&mut self`.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

type BoxedTask<Ctx> = Box<dyn FnOnce(&mut Ctx) + Send + 'static>;

struct TaskData<Ctx> {
    id: TaskId,
    task: BoxedTask<Ctx>,
}

/// FIFO queue of deferred tasks run against a context `Ctx`.
pub struct TaskQueue<Ctx = ()> {
    tasks: VecDeque<TaskData<Ctx>>,
}

impl<Ctx> TaskQueue<Ctx> {
    /// Create an empty task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run on the next tick.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce(&mut Ctx) + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Run every pending task against `ctx`.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self, ctx: &mut Ctx) -> usize {
        let count = self.tasks.len();
        while let Some(task_data) = self.tasks.pop_front() {
            (task_data.task)(ctx);
        }
        count
    }
}

impl<Ctx> Default for TaskQueue<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> std::fmt::Debug for TaskQueue<Ctx> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
