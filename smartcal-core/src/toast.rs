//! Transient notifications.
//!
//! A toast lives until its expiry timer fires or it is dismissed, whichever
//! comes first. Ids come from a counter and are never handed out twice, so a
//! late timer can never remove a newer toast.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// How long a toast stays up without being dismissed.
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Debug, Default)]
struct Queue {
    last_id: u64,
    toasts: Vec<Toast>,
    timers: HashMap<ToastId, JoinHandle<()>>,
}

/// Handle to a toast queue. Clones share the same queue.
#[derive(Debug, Clone)]
pub struct Toaster {
    queue: Arc<Mutex<Queue>>,
    ttl: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_ttl(TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Toaster {
            queue: Arc::new(Mutex::new(Queue::default())),
            ttl,
        }
    }

    /// Push a toast and schedule its removal.
    ///
    /// Outside a Tokio runtime no timer can be scheduled, so the toast stays
    /// until it is dismissed.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let mut queue = self.lock();

        queue.last_id += 1;
        let id = ToastId(queue.last_id);
        let message = message.into();
        debug!(%id, ?kind, %message, "toast");
        queue.toasts.push(Toast { id, message, kind });

        match Handle::try_current() {
            Ok(handle) => {
                let timer = handle.spawn(expire(Arc::downgrade(&self.queue), id, self.ttl));
                queue.timers.insert(id, timer);
            }
            Err(_) => debug!(%id, "no runtime, toast will not expire"),
        }

        id
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, ToastKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.notify(message, ToastKind::Error)
    }

    /// Remove a toast now and cancel its timer. Returns false if it was
    /// already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let mut queue = self.lock();

        if let Some(timer) = queue.timers.remove(&id) {
            timer.abort();
        }

        let before = queue.toasts.len();
        queue.toasts.retain(|t| t.id != id);
        before != queue.toasts.len()
    }

    /// Live toasts, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.lock().toasts.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().toasts.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Queue> {
        lock_queue(&self.queue)
    }
}

fn lock_queue(queue: &Mutex<Queue>) -> MutexGuard<'_, Queue> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn expire(queue: Weak<Mutex<Queue>>, id: ToastId, ttl: Duration) {
    tokio::time::sleep(ttl).await;

    let Some(queue) = queue.upgrade() else {
        return;
    };
    let mut queue = lock_queue(&queue);
    queue.timers.remove(&id);
    queue.toasts.retain(|t| t.id != id);
}
