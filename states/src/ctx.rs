use std::any::{TypeId, type_name};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::{error, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::updater::ComputeUpdate;
use crate::{Command, CommandSnapshot, Compute, Error, State, Updater};

/// Owner of every state, compute and command of the application.
///
/// Lives on the UI thread. The app loop calls [`StateCtx::sync_computes`] at the
/// start of a frame and [`StateCtx::flush_commands`] at the end of it.
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, Box<dyn Compute>>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    queue: Vec<(TypeId, &'static str)>,

    send: Sender<ComputeUpdate>,
    recv: Receiver<ComputeUpdate>,

    tasks: JoinSet<()>,
    cancel: CancellationToken,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .field("computes", &self.computes.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("tasks", &self.tasks.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();

        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            queue: Vec::new(),
            send,
            recv,
            tasks: JoinSet::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.states.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.computes.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or(Error::StateNotFound(type_name::<T>()))
    }

    /// # Panics
    /// Panics when `T` was never added with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics when `T` was never added with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("{}", Error::StateNotFound(type_name::<T>())))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|compute| compute.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics when `T` was never recorded with [`StateCtx::record_compute`].
    pub fn compute<T: Compute>(&self) -> &T {
        self.cached::<T>()
            .unwrap_or_else(|| panic!("{}", Error::ComputeNotFound(type_name::<T>())))
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    /// Apply every pending compute update and reap finished tasks.
    ///
    /// Returns `true` when at least one compute changed.
    pub fn sync_computes(&mut self) -> bool {
        let mut changed = false;

        for (id, value) in self.recv.try_iter() {
            match self.computes.get_mut(&id) {
                Some(slot) => {
                    *slot = value;
                    changed = true;
                }
                None => warn!("sync_computes: dropping update for an unrecorded compute"),
            }
        }

        while let Some(joined) = self.tasks.try_join_next() {
            if let Err(err) = joined
                && err.is_panic()
            {
                error!("sync_computes: command task panicked: {err}");
            }
        }

        changed
    }

    pub fn enqueue_command<C: Command>(&mut self) {
        self.queue.push((TypeId::of::<C>(), type_name::<C>()));
    }

    /// Spawn every queued command on the current Tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside of a Tokio runtime context.
    pub fn flush_commands(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        let queued = std::mem::take(&mut self.queue);
        for (id, name) in queued {
            let Some(command) = self.commands.get(&id).cloned() else {
                error!("flush_commands: {}", Error::CommandNotFound(name));
                continue;
            };

            let snap = self.snapshot();
            let fut = command.run(snap, self.updater(), self.cancel.child_token());
            self.tasks.spawn(fut);
        }
    }

    /// Enqueue and flush in one step.
    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    pub fn queued_commands(&self) -> usize {
        self.queue.len()
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task_set_mut(&mut self) -> &mut JoinSet<()> {
        &mut self.tasks
    }

    pub fn has_pending_work(&self) -> bool {
        !self.queue.is_empty() || !self.tasks.is_empty() || !self.recv.is_empty()
    }

    /// Cancel every command token and abort spawned tasks without waiting for them.
    pub fn abort_all(&mut self) {
        self.cancel.cancel();
        self.queue.clear();
        self.tasks.abort_all();
    }

    /// Like [`StateCtx::abort_all`], then wait for the aborted tasks to stop.
    pub async fn shutdown(&mut self) {
        self.abort_all();
        while self.tasks.join_next().await.is_some() {}
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert_boxed(*id, value);
            }
        }
        for (id, compute) in &self.computes {
            if let Some(value) = compute.snapshot() {
                snap.insert_boxed(*id, value);
            }
        }
        snap
    }
}
