//! Running bound scripts
//!
//! This is the failure boundary between gameplay and the script engine.
//! Whatever the engine does, the caller only ever sees a `bool`.

use crate::core::config::config;
use crate::core::error::ScriptError;
use crate::script::engine::{ScriptEngine, ScriptObject};
use crate::script::state::ExecutionState;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Run a script by name from its entry point
pub fn run_script_named<E: ScriptEngine + ?Sized>(
    engine: &mut E,
    name: &str,
    owner: Option<&dyn ScriptObject>,
    triggerer: Option<&dyn ScriptObject>,
) -> bool {
    run_script_with_state(engine, name, &ExecutionState::empty(), owner, triggerer)
}

/// Run a script by name against an execution state
///
/// An empty name means nothing is bound and succeeds without touching the
/// engine. Int and float results are conditions (zero is failure); any other
/// result is success. Engine errors and panics are logged with the script
/// name and reported as `false`.
pub fn run_script_with_state<E: ScriptEngine + ?Sized>(
    engine: &mut E,
    name: &str,
    state: &ExecutionState,
    owner: Option<&dyn ScriptObject>,
    triggerer: Option<&dyn ScriptObject>,
) -> bool {
    if name.is_empty() {
        return true;
    }

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        engine.run(name, state, owner, triggerer)
    }))
    .unwrap_or_else(|payload| Err(ScriptError::Panicked(panic_message(payload.as_ref()))));

    match outcome {
        Ok(value) => {
            tracing::debug!(
                "Script \"{}\" returned {} (owner: {}, triggerer: {})",
                name,
                value.type_name(),
                owner.map(|o| o.tag()).unwrap_or("-"),
                triggerer.map(|o| o.tag()).unwrap_or("-"),
            );
            value.is_success()
        }
        Err(e) => {
            if config().log_failures {
                tracing::warn!("Failed running script \"{}\": {}", name, e);
            }
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::error::Result;
    use crate::script::engine::TaggedObject;
    use crate::script::value::ReturnValue;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// Engine that returns a fixed outcome and records what it was asked to run
    struct FixedEngine {
        outcome: fn(&str) -> Result<ReturnValue>,
        calls: Vec<String>,
        last_offset: Option<u32>,
    }

    impl FixedEngine {
        fn new(outcome: fn(&str) -> Result<ReturnValue>) -> Self {
            Self {
                outcome,
                calls: Vec::new(),
                last_offset: None,
            }
        }
    }

    impl ScriptEngine for FixedEngine {
        fn run(
            &mut self,
            name: &str,
            state: &ExecutionState,
            _owner: Option<&dyn ScriptObject>,
            _triggerer: Option<&dyn ScriptObject>,
        ) -> Result<ReturnValue> {
            self.calls.push(name.to_string());
            self.last_offset = state.offset;
            (self.outcome)(name)
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with WARN and above captured, returning its result and the log text
    pub(crate) fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[test]
    fn test_empty_name_skips_engine() {
        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Int(0)));
        assert!(run_script_named(&mut engine, "", None, None));
        assert!(engine.calls.is_empty());
    }

    #[test]
    fn test_int_result() {
        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Int(0)));
        assert!(!run_script_named(&mut engine, "x2_cond_false", None, None));

        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Int(42)));
        assert!(run_script_named(&mut engine, "x2_cond_true", None, None));
        assert_eq!(engine.calls, vec!["x2_cond_true"]);
    }

    #[test]
    fn test_float_result() {
        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Float(0.0)));
        assert!(!run_script_named(&mut engine, "flt_zero", None, None));

        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Float(-1.5)));
        assert!(run_script_named(&mut engine, "flt_neg", None, None));
    }

    #[test]
    fn test_other_results_succeed() {
        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Void));
        assert!(run_script_named(&mut engine, "nw_o2_default", None, None));

        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::String(String::new())));
        assert!(run_script_named(&mut engine, "str_ret", None, None));

        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Object(None)));
        assert!(run_script_named(&mut engine, "obj_ret", None, None));
    }

    #[test]
    fn test_state_forwarded() {
        let mut engine = FixedEngine::new(|_| Ok(ReturnValue::Void));
        let state = ExecutionState::resume_at(128, Vec::new());
        assert!(run_script_with_state(&mut engine, "delayed", &state, None, None));
        assert_eq!(engine.last_offset, Some(128));

        assert!(run_script_named(&mut engine, "fresh", None, None));
        assert_eq!(engine.last_offset, None);
    }

    #[test]
    fn test_engine_error_logged_with_name() {
        let mut engine = FixedEngine::new(|name| Err(ScriptError::NotFound(name.to_string())));
        let owner = TaggedObject::new("chest_01");

        let (result, logs) = with_captured_logs(|| {
            run_script_named(&mut engine, "nw_missing", Some(&owner), None)
        });

        assert!(!result);
        assert!(logs.contains("Failed running script \"nw_missing\""), "logs: {}", logs);
        assert!(logs.contains("WARN"));
    }

    #[test]
    fn test_engine_panic_contained() {
        let mut engine = FixedEngine::new(|_| panic!("stack underflow"));

        let (result, logs) = with_captured_logs(|| {
            run_script_named(&mut engine, "bad_bytecode", None, None)
        });

        assert!(!result);
        assert!(logs.contains("bad_bytecode"));
        assert!(logs.contains("stack underflow"));
    }

    #[test]
    fn test_boxed_engine() {
        let mut engine: Box<dyn ScriptEngine> =
            Box::new(FixedEngine::new(|_| Ok(ReturnValue::Int(1))));
        assert!(run_script_named(&mut engine, "boxed", None, None));
    }
}
