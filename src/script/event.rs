//! Gameplay events that can have a script bound to them

use crate::core::error::ScriptError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized gameplay trigger
///
/// The discriminant is the event's slot in a `ScriptContainer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ScriptEvent {
    AcquireItem,
    UnacquireItem,
    ActivateItem,
    Enter,
    Exit,
    CutsceneAbort,
    Heartbeat,
    ModuleLoad,
    ModuleStart,
    PlayerChat,
    PlayerDeath,
    PlayerDying,
    PlayerEquipItem,
    PlayerUnequipItem,
    PlayerLevelUp,
    PlayerRest,
    PlayerRespawn,
    Userdefined,
    Used,
    Click,
    Open,
    Closed,
    Damaged,
    Death,
    Disarm,
    Lock,
    Unlock,
    Attacked,
    SpellCastAt,
    TrapTriggered,
    Dialogue,
    Disturbed,
    EndRound,
    Blocked,
    Notice,
    Rested,
    Spawn,
    FailToOpen,
}

impl ScriptEvent {
    /// Number of event kinds, and so the number of slots in a container
    pub const COUNT: usize = 38;

    /// Every event kind, in slot order
    pub const ALL: [ScriptEvent; Self::COUNT] = [
        ScriptEvent::AcquireItem,
        ScriptEvent::UnacquireItem,
        ScriptEvent::ActivateItem,
        ScriptEvent::Enter,
        ScriptEvent::Exit,
        ScriptEvent::CutsceneAbort,
        ScriptEvent::Heartbeat,
        ScriptEvent::ModuleLoad,
        ScriptEvent::ModuleStart,
        ScriptEvent::PlayerChat,
        ScriptEvent::PlayerDeath,
        ScriptEvent::PlayerDying,
        ScriptEvent::PlayerEquipItem,
        ScriptEvent::PlayerUnequipItem,
        ScriptEvent::PlayerLevelUp,
        ScriptEvent::PlayerRest,
        ScriptEvent::PlayerRespawn,
        ScriptEvent::Userdefined,
        ScriptEvent::Used,
        ScriptEvent::Click,
        ScriptEvent::Open,
        ScriptEvent::Closed,
        ScriptEvent::Damaged,
        ScriptEvent::Death,
        ScriptEvent::Disarm,
        ScriptEvent::Lock,
        ScriptEvent::Unlock,
        ScriptEvent::Attacked,
        ScriptEvent::SpellCastAt,
        ScriptEvent::TrapTriggered,
        ScriptEvent::Dialogue,
        ScriptEvent::Disturbed,
        ScriptEvent::EndRound,
        ScriptEvent::Blocked,
        ScriptEvent::Notice,
        ScriptEvent::Rested,
        ScriptEvent::Spawn,
        ScriptEvent::FailToOpen,
    ];

    /// Slot index of this event
    pub fn index(self) -> usize {
        self as usize
    }

    /// Event for a slot index, if the index is in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical snake_case name, as used in serialized bindings
    pub fn name(self) -> &'static str {
        match self {
            ScriptEvent::AcquireItem => "acquire_item",
            ScriptEvent::UnacquireItem => "unacquire_item",
            ScriptEvent::ActivateItem => "activate_item",
            ScriptEvent::Enter => "enter",
            ScriptEvent::Exit => "exit",
            ScriptEvent::CutsceneAbort => "cutscene_abort",
            ScriptEvent::Heartbeat => "heartbeat",
            ScriptEvent::ModuleLoad => "module_load",
            ScriptEvent::ModuleStart => "module_start",
            ScriptEvent::PlayerChat => "player_chat",
            ScriptEvent::PlayerDeath => "player_death",
            ScriptEvent::PlayerDying => "player_dying",
            ScriptEvent::PlayerEquipItem => "player_equip_item",
            ScriptEvent::PlayerUnequipItem => "player_unequip_item",
            ScriptEvent::PlayerLevelUp => "player_level_up",
            ScriptEvent::PlayerRest => "player_rest",
            ScriptEvent::PlayerRespawn => "player_respawn",
            ScriptEvent::Userdefined => "userdefined",
            ScriptEvent::Used => "used",
            ScriptEvent::Click => "click",
            ScriptEvent::Open => "open",
            ScriptEvent::Closed => "closed",
            ScriptEvent::Damaged => "damaged",
            ScriptEvent::Death => "death",
            ScriptEvent::Disarm => "disarm",
            ScriptEvent::Lock => "lock",
            ScriptEvent::Unlock => "unlock",
            ScriptEvent::Attacked => "attacked",
            ScriptEvent::SpellCastAt => "spell_cast_at",
            ScriptEvent::TrapTriggered => "trap_triggered",
            ScriptEvent::Dialogue => "dialogue",
            ScriptEvent::Disturbed => "disturbed",
            ScriptEvent::EndRound => "end_round",
            ScriptEvent::Blocked => "blocked",
            ScriptEvent::Notice => "notice",
            ScriptEvent::Rested => "rested",
            ScriptEvent::Spawn => "spawn",
            ScriptEvent::FailToOpen => "fail_to_open",
        }
    }

    /// Returns true for events only a module fires (client enter, chat, rest, ...)
    pub fn is_module_event(self) -> bool {
        matches!(
            self,
            ScriptEvent::AcquireItem
                | ScriptEvent::UnacquireItem
                | ScriptEvent::ActivateItem
                | ScriptEvent::CutsceneAbort
                | ScriptEvent::ModuleLoad
                | ScriptEvent::ModuleStart
                | ScriptEvent::PlayerChat
                | ScriptEvent::PlayerDeath
                | ScriptEvent::PlayerDying
                | ScriptEvent::PlayerEquipItem
                | ScriptEvent::PlayerUnequipItem
                | ScriptEvent::PlayerLevelUp
                | ScriptEvent::PlayerRest
                | ScriptEvent::PlayerRespawn
        )
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScriptEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|event| event.name() == s)
            .ok_or_else(|| ScriptError::UnknownEvent(s.to_string()))
    }
}
