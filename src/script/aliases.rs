//! Field names under which game data stores event script bindings
//!
//! Module, area and object records each use their own labels for the same
//! logical event, so one event can appear under several names. The table
//! order matters: when a record carries more than one label for an event,
//! the one listed last wins.

use crate::script::event::ScriptEvent;
use ahash::AHashMap;
use std::sync::OnceLock;

/// A record field name and the event it binds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptAlias {
    pub event: ScriptEvent,
    pub field: &'static str,
}

const fn alias(event: ScriptEvent, field: &'static str) -> ScriptAlias {
    ScriptAlias { event, field }
}

/// Every known field name, in the order bindings are read
pub const SCRIPT_ALIASES: &[ScriptAlias] = &[
    alias(ScriptEvent::AcquireItem, "Mod_OnAcquirItem"),
    alias(ScriptEvent::UnacquireItem, "Mod_OnUnAqreItem"),
    alias(ScriptEvent::ActivateItem, "Mod_OnActvtItem"),
    alias(ScriptEvent::Enter, "Mod_OnClientEntr"),
    alias(ScriptEvent::Enter, "OnEnter"),
    alias(ScriptEvent::Enter, "ScriptOnEnter"),
    alias(ScriptEvent::Exit, "Mod_OnClientLeav"),
    alias(ScriptEvent::Exit, "OnExit"),
    alias(ScriptEvent::Exit, "ScriptOnExit"),
    alias(ScriptEvent::CutsceneAbort, "Mod_OnCutsnAbort"),
    alias(ScriptEvent::Heartbeat, "Mod_OnHeartbeat"),
    alias(ScriptEvent::Heartbeat, "OnHeartbeat"),
    alias(ScriptEvent::Heartbeat, "ScriptHeartbeat"),
    alias(ScriptEvent::ModuleLoad, "Mod_OnModLoad"),
    alias(ScriptEvent::ModuleStart, "Mod_OnModStart"),
    alias(ScriptEvent::PlayerChat, "Mod_OnPlrChat"),
    alias(ScriptEvent::PlayerDeath, "Mod_OnPlrDeath"),
    alias(ScriptEvent::PlayerDying, "Mod_OnPlrDying"),
    alias(ScriptEvent::PlayerEquipItem, "Mod_OnPlrEqItm"),
    alias(ScriptEvent::PlayerUnequipItem, "Mod_OnPlrUnEqItm"),
    alias(ScriptEvent::PlayerLevelUp, "Mod_OnPlrLvlUp"),
    alias(ScriptEvent::PlayerRest, "Mod_OnPlrRest"),
    alias(ScriptEvent::PlayerRespawn, "Mod_OnSpawnBtnDn"),
    alias(ScriptEvent::Userdefined, "Mod_OnUsrDefined"),
    alias(ScriptEvent::Userdefined, "OnUserDefined"),
    alias(ScriptEvent::Userdefined, "ScriptUserDefine"),
    alias(ScriptEvent::Used, "OnUsed"),
    alias(ScriptEvent::Click, "OnClick"),
    alias(ScriptEvent::Open, "OnOpen"),
    alias(ScriptEvent::Closed, "OnClosed"),
    alias(ScriptEvent::Damaged, "OnDamaged"),
    alias(ScriptEvent::Damaged, "ScriptDamaged"),
    alias(ScriptEvent::Death, "OnDeath"),
    alias(ScriptEvent::Death, "ScriptDeath"),
    alias(ScriptEvent::Disarm, "OnDisarm"),
    alias(ScriptEvent::Lock, "OnLock"),
    alias(ScriptEvent::Unlock, "OnUnlock"),
    alias(ScriptEvent::Attacked, "OnMeleeAttacked"),
    alias(ScriptEvent::Attacked, "ScriptAttacked"),
    alias(ScriptEvent::SpellCastAt, "OnSpellCastAt"),
    alias(ScriptEvent::SpellCastAt, "ScriptSpellAt"),
    alias(ScriptEvent::TrapTriggered, "OnTrapTriggered"),
    alias(ScriptEvent::Dialogue, "ScriptDialogue"),
    alias(ScriptEvent::Disturbed, "ScriptDisturbed"),
    alias(ScriptEvent::EndRound, "ScriptEndRound"),
    alias(ScriptEvent::Blocked, "ScriptOnBlocked"),
    alias(ScriptEvent::Notice, "ScriptOnNotice"),
    alias(ScriptEvent::Rested, "ScriptRested"),
    alias(ScriptEvent::Spawn, "ScriptSpawn"),
    alias(ScriptEvent::FailToOpen, "OnFailToOpen"),
];

fn field_index() -> &'static AHashMap<&'static str, ScriptEvent> {
    static INDEX: OnceLock<AHashMap<&'static str, ScriptEvent>> = OnceLock::new();
    INDEX.get_or_init(|| {
        SCRIPT_ALIASES
            .iter()
            .map(|alias| (alias.field, alias.event))
            .collect()
    })
}

/// Event bound by a record field name (labels are case-sensitive)
pub fn event_for_field(field: &str) -> Option<ScriptEvent> {
    field_index().get(field).copied()
}

/// All field names for an event, in table order
pub fn aliases_for(event: ScriptEvent) -> impl Iterator<Item = &'static str> {
    SCRIPT_ALIASES
        .iter()
        .filter(move |alias| alias.event == event)
        .map(|alias| alias.field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_event_has_an_alias() {
        for event in ScriptEvent::ALL {
            assert!(aliases_for(event).next().is_some(), "{} has no field", event);
        }
    }

    #[test]
    fn test_field_names_unique() {
        let mut seen = HashSet::new();
        for alias in SCRIPT_ALIASES {
            assert!(seen.insert(alias.field), "duplicate field {}", alias.field);
        }
    }

    #[test]
    fn test_enter_aliases_in_order() {
        let fields: Vec<_> = aliases_for(ScriptEvent::Enter).collect();
        assert_eq!(fields, vec!["Mod_OnClientEntr", "OnEnter", "ScriptOnEnter"]);
    }

    #[test]
    fn test_event_for_field() {
        assert_eq!(event_for_field("OnMeleeAttacked"), Some(ScriptEvent::Attacked));
        assert_eq!(event_for_field("ScriptSpellAt"), Some(ScriptEvent::SpellCastAt));
        assert_eq!(event_for_field("Mod_OnSpawnBtnDn"), Some(ScriptEvent::PlayerRespawn));
        assert_eq!(event_for_field("onenter"), None);
        assert_eq!(event_for_field("Tag"), None);
    }
}
