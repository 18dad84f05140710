use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleAction {
    TurnOn,
    TurnOff,
}

impl ScheduleAction {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleAction::TurnOn => "Включить",
            ScheduleAction::TurnOff => "Выключить",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
/// A time + action entry. Nothing ever fires these; `enabled` is only shown.
pub struct Schedule {
    pub id: String,
    /// "HH:MM"
    pub time: String,
    pub action: ScheduleAction,
    pub enabled: bool,
}

impl Schedule {
    pub fn new(id: &str, time: &str, action: ScheduleAction, enabled: bool) -> Self {
        Schedule {
            id: String::from(id),
            time: String::from(time),
            action,
            enabled,
        }
    }
}
