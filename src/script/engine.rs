//! Seams to the script virtual machine and the object model

use crate::core::error::Result;
use crate::core::types::ObjectId;
use crate::script::state::ExecutionState;
use crate::script::value::ReturnValue;

/// A game object that can own or trigger a script event
pub trait ScriptObject {
    fn id(&self) -> ObjectId;

    /// Designer-assigned tag, used in log output
    fn tag(&self) -> &str;
}

/// Loads a compiled script by name and runs it
///
/// Implementations own their VM state; the dispatcher only borrows the
/// engine for the duration of one run.
pub trait ScriptEngine {
    fn run(
        &mut self,
        name: &str,
        state: &ExecutionState,
        owner: Option<&dyn ScriptObject>,
        triggerer: Option<&dyn ScriptObject>,
    ) -> Result<ReturnValue>;
}

impl<E: ScriptEngine + ?Sized> ScriptEngine for &mut E {
    fn run(
        &mut self,
        name: &str,
        state: &ExecutionState,
        owner: Option<&dyn ScriptObject>,
        triggerer: Option<&dyn ScriptObject>,
    ) -> Result<ReturnValue> {
        (**self).run(name, state, owner, triggerer)
    }
}

impl<E: ScriptEngine + ?Sized> ScriptEngine for Box<E> {
    fn run(
        &mut self,
        name: &str,
        state: &ExecutionState,
        owner: Option<&dyn ScriptObject>,
        triggerer: Option<&dyn ScriptObject>,
    ) -> Result<ReturnValue> {
        (**self).run(name, state, owner, triggerer)
    }
}

/// Minimal object reference: an id and a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedObject {
    pub id: ObjectId,
    pub tag: String,
}

impl TaggedObject {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            tag: tag.into(),
        }
    }
}

impl ScriptObject for TaggedObject {
    fn id(&self) -> ObjectId {
        self.id
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}
