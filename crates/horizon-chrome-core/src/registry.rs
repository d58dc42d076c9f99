//! Window handle to chrome state mapping.

use std::collections::HashMap;
use std::hash::Hash;

use crate::event::{ChromeEvent, Reply};
use crate::host::WindowHost;
use crate::logging::targets;
use crate::machine::dispatch;
use crate::state::ChromeState;

/// Owns the [`ChromeState`] of every live window, keyed by a platform handle.
///
/// The windowing layer inserts state when a window is created and removes it
/// when the window is destroyed, so a handle never maps to stale state.
#[derive(Debug)]
pub struct ChromeRegistry<K> {
    windows: HashMap<K, ChromeState>,
}

impl<K> Default for ChromeRegistry<K> {
    fn default() -> Self {
        Self {
            windows: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq + Copy + std::fmt::Debug> ChromeRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach state to a window. Replaces any state left under the handle.
    pub fn insert(&mut self, handle: K, state: ChromeState) {
        if self.windows.insert(handle, state).is_some() {
            tracing::warn!(target: targets::CORE, ?handle, "replaced stale chrome state");
        }
    }

    /// Detach and return the state of a window.
    pub fn remove(&mut self, handle: K) -> Option<ChromeState> {
        self.windows.remove(&handle)
    }

    pub fn get(&self, handle: K) -> Option<&ChromeState> {
        self.windows.get(&handle)
    }

    pub fn get_mut(&mut self, handle: K) -> Option<&mut ChromeState> {
        self.windows.get_mut(&handle)
    }

    pub fn contains(&self, handle: K) -> bool {
        self.windows.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Dispatch an event to the state of `handle`, or get the neutral reply if
    /// the window has none.
    pub fn dispatch(&mut self, handle: K, host: &dyn WindowHost, event: ChromeEvent) -> Reply {
        dispatch(self.windows.get_mut(&handle), host, event)
    }
}
