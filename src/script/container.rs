//! Per-object table of event script bindings

use crate::core::config::config;
use crate::script::aliases::SCRIPT_ALIASES;
use crate::script::dispatch::run_script_named;
use crate::script::engine::{ScriptEngine, ScriptObject};
use crate::script::event::ScriptEvent;
use crate::script::record::FieldRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Script names bound to each event of one game object
///
/// Every event has exactly one slot. An empty name means nothing is bound.
/// Serializes as a map of event name to script name, skipping empty slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ScriptEvent, String>",
    into = "BTreeMap<ScriptEvent, String>"
)]
pub struct ScriptContainer {
    scripts: [String; ScriptEvent::COUNT],
}

impl Default for ScriptContainer {
    fn default() -> Self {
        Self {
            scripts: std::array::from_fn(|_| String::new()),
        }
    }
}

impl ScriptContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script bound to an event (empty if none)
    pub fn script(&self, event: ScriptEvent) -> &str {
        &self.scripts[event.index()]
    }

    /// Script bound to the event in slot `index`
    ///
    /// # Panics
    /// If `index` is not below `ScriptEvent::COUNT`.
    pub fn script_at(&self, index: usize) -> &str {
        assert!(
            index < ScriptEvent::COUNT,
            "script event index {} out of range (0..{})",
            index,
            ScriptEvent::COUNT
        );
        &self.scripts[index]
    }

    pub fn has_script(&self, event: ScriptEvent) -> bool {
        !self.script(event).is_empty()
    }

    pub fn set_script(&mut self, event: ScriptEvent, name: impl Into<String>) {
        self.scripts[event.index()] = name.into();
    }

    /// Unbind every event
    pub fn clear_scripts(&mut self) {
        for script in &mut self.scripts {
            script.clear();
        }
    }

    /// Replace all bindings with those found in a game data record
    ///
    /// Fields are visited in alias table order. A field that is present
    /// overwrites the slot, one that is absent leaves it as is, so the last
    /// present alias of an event wins.
    pub fn read_scripts<R: FieldRecord + ?Sized>(&mut self, record: &R) {
        self.clear_scripts();

        for alias in SCRIPT_ALIASES {
            let slot = alias.event.index();
            let value = record.get_string_or(alias.field, &self.scripts[slot]).to_string();
            self.scripts[slot] = value;
        }

        let config = config();
        if config.warn_long_resref {
            for (event, name) in self.bindings() {
                if name.chars().count() > config.max_resref_len {
                    tracing::warn!(
                        "Script \"{}\" bound to {} exceeds {} characters and cannot resolve",
                        name,
                        event,
                        config.max_resref_len
                    );
                }
            }
        }

        tracing::debug!("Read {} script bindings", self.bound_count());
    }

    /// Copy every binding from another container, e.g. a template
    pub fn read_scripts_from(&mut self, other: &ScriptContainer) {
        self.scripts.clone_from(&other.scripts);
    }

    /// Bound events and their script names, in slot order
    pub fn bindings(&self) -> impl Iterator<Item = (ScriptEvent, &str)> {
        ScriptEvent::ALL
            .into_iter()
            .zip(self.scripts.iter())
            .filter(|(_, name)| !name.is_empty())
            .map(|(event, name)| (event, name.as_str()))
    }

    pub fn bound_count(&self) -> usize {
        self.scripts.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns true if no event has a script bound
    pub fn is_empty(&self) -> bool {
        self.scripts.iter().all(String::is_empty)
    }

    /// Run the script bound to an event
    ///
    /// Returns true when nothing is bound. See [`run_script_with_state`] for
    /// how results and failures map to the return value.
    ///
    /// [`run_script_with_state`]: crate::script::dispatch::run_script_with_state
    pub fn run_script<E: ScriptEngine + ?Sized>(
        &self,
        event: ScriptEvent,
        engine: &mut E,
        owner: Option<&dyn ScriptObject>,
        triggerer: Option<&dyn ScriptObject>,
    ) -> bool {
        run_script_named(engine, self.script(event), owner, triggerer)
    }
}

impl From<BTreeMap<ScriptEvent, String>> for ScriptContainer {
    fn from(bindings: BTreeMap<ScriptEvent, String>) -> Self {
        let mut container = ScriptContainer::new();
        for (event, name) in bindings {
            container.set_script(event, name);
        }
        container
    }
}

impl From<ScriptContainer> for BTreeMap<ScriptEvent, String> {
    fn from(container: ScriptContainer) -> Self {
        ScriptEvent::ALL
            .into_iter()
            .zip(container.scripts)
            .filter(|(_, name)| !name.is_empty())
            .collect()
    }
}
