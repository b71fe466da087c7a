//! Scripts implemented as Rust closures
//!
//! `NativeScripts` is a `ScriptEngine` without a VM: each script name maps to
//! a closure. Useful for engine-side hooks, tools and tests.

use crate::core::error::{Result, ScriptError};
use crate::script::engine::{ScriptEngine, ScriptObject};
use crate::script::state::ExecutionState;
use crate::script::value::ReturnValue;
use ahash::AHashMap;
use std::fmt;

/// Everything a native script can see about the run that invoked it
pub struct ScriptContext<'a> {
    pub name: &'a str,
    pub state: &'a ExecutionState,
    pub owner: Option<&'a dyn ScriptObject>,
    pub triggerer: Option<&'a dyn ScriptObject>,
}

type NativeFn = Box<dyn FnMut(&ScriptContext<'_>) -> Result<ReturnValue>>;

/// Registry of named native scripts
#[derive(Default)]
pub struct NativeScripts {
    scripts: AHashMap<String, NativeFn>,
    runs: AHashMap<String, u64>,
}

impl NativeScripts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a script under `name`, replacing any previous one
    ///
    /// Returns true if a script was replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, script: F) -> bool
    where
        F: FnMut(&ScriptContext<'_>) -> Result<ReturnValue> + 'static,
    {
        self.scripts.insert(name.into(), Box::new(script)).is_some()
    }

    /// Remove a script. Its run count is kept.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.scripts.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.scripts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// How many times a registered script has been started
    pub fn run_count(&self, name: &str) -> u64 {
        self.runs.get(name).copied().unwrap_or(0)
    }
}

impl ScriptEngine for NativeScripts {
    fn run(
        &mut self,
        name: &str,
        state: &ExecutionState,
        owner: Option<&dyn ScriptObject>,
        triggerer: Option<&dyn ScriptObject>,
    ) -> Result<ReturnValue> {
        let script = self
            .scripts
            .get_mut(name)
            .ok_or_else(|| ScriptError::NotFound(name.to_string()))?;

        *self.runs.entry(name.to_string()).or_insert(0) += 1;

        let context = ScriptContext {
            name,
            state,
            owner,
            triggerer,
        };
        script(&context)
    }
}

impl fmt::Debug for NativeScripts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeScripts")
            .field("scripts", &self.names())
            .field("runs", &self.runs)
            .finish()
    }
}
