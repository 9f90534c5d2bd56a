//! Handles for fetch tasks spawned by a [`QueryClient`](crate::QueryClient).
//!
//! Every request gets a [`TaskId`] made of the query's data type and a
//! generation counter. The generation is what lets the cache drop a response
//! that was overtaken by a newer request for the same key.

use std::any::{TypeId, type_name};

use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    type_name: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn of<T: 'static>(generation: u64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            generation,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Type name of the query data, for log lines.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Higher generations were issued later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.type_name, self.generation)
    }
}

/// A spawned fetch plus the token used to stop it cooperatively.
///
/// Cancelling does not abort the future; the future is raced against
/// [`CancellationToken::cancelled`] and simply stops being polled.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
