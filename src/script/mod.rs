//! Event script bindings and dispatch
//!
//! A `ScriptContainer` maps each gameplay event of an object to the name of
//! a compiled script. The dispatcher hands bound names to a `ScriptEngine`
//! and turns whatever comes back into a pass/fail result.

pub mod aliases;
pub mod container;
pub mod dispatch;
pub mod engine;
pub mod event;
pub mod native;
pub mod record;
pub mod state;
pub mod value;

pub use aliases::{aliases_for, event_for_field, ScriptAlias, SCRIPT_ALIASES};
pub use container::ScriptContainer;
pub use dispatch::{run_script_named, run_script_with_state};
pub use engine::{ScriptEngine, ScriptObject, TaggedObject};
pub use event::ScriptEvent;
pub use native::{NativeScripts, ScriptContext};
pub use record::FieldRecord;
pub use state::ExecutionState;
pub use value::ReturnValue;
