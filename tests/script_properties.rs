//! Property tests for binding and dispatch invariants

use event_scripts::script::{
    aliases_for, run_script_named, NativeScripts, ReturnValue, ScriptContainer, ScriptEvent,
    SCRIPT_ALIASES,
};
use proptest::prelude::*;
use std::collections::HashMap;

fn any_event() -> impl Strategy<Value = ScriptEvent> {
    (0..ScriptEvent::COUNT).prop_map(|i| ScriptEvent::ALL[i])
}

fn script_name() -> impl Strategy<Value = String> {
    "[a-z0-9_]{0,16}"
}

fn any_container() -> impl Strategy<Value = ScriptContainer> {
    prop::collection::vec((any_event(), script_name()), 0..40).prop_map(|bindings| {
        let mut container = ScriptContainer::new();
        for (event, name) in bindings {
            container.set_script(event, name);
        }
        container
    })
}

proptest! {
    #[test]
    fn clear_unbinds_everything(mut container in any_container()) {
        container.clear_scripts();
        for event in ScriptEvent::ALL {
            prop_assert_eq!(container.script(event), "");
            prop_assert!(!container.has_script(event));
        }
    }

    #[test]
    fn copy_matches_source(source in any_container(), mut target in any_container()) {
        target.read_scripts_from(&source);
        for event in ScriptEvent::ALL {
            prop_assert_eq!(target.script(event), source.script(event));
        }
    }

    #[test]
    fn last_present_alias_wins(
        values in prop::collection::vec(prop::option::of(script_name()), SCRIPT_ALIASES.len())
    ) {
        let record: HashMap<String, String> = SCRIPT_ALIASES
            .iter()
            .zip(values.iter())
            .filter_map(|(alias, value)| value.clone().map(|v| (alias.field.to_string(), v)))
            .collect();

        let mut container = ScriptContainer::new();
        container.read_scripts(&record);

        for event in ScriptEvent::ALL {
            let expected = aliases_for(event)
                .filter_map(|field| record.get(field))
                .last()
                .map(String::as_str)
                .unwrap_or("");
            prop_assert_eq!(container.script(event), expected);
        }
    }

    #[test]
    fn int_results_succeed_iff_nonzero(value in any::<i32>()) {
        let mut engine = NativeScripts::new();
        engine.register("int_ret", move |_| Ok(ReturnValue::Int(value)));
        prop_assert_eq!(run_script_named(&mut engine, "int_ret", None, None), value != 0);
    }

    #[test]
    fn float_results_succeed_iff_nonzero(value in any::<f32>()) {
        let mut engine = NativeScripts::new();
        engine.register("float_ret", move |_| Ok(ReturnValue::Float(value)));
        prop_assert_eq!(run_script_named(&mut engine, "float_ret", None, None), value != 0.0);
    }
}
