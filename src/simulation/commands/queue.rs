use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

use super::commands::PropertyValue;
use super::scene::ItemSpec;
use super::EngineCore;

/// Editor request, applied between ticks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineCommand {
    AddItem { item: ItemSpec },
    RemoveItem { index: usize },
    EditProperty { index: usize, property: String, value: PropertyValue },
    SetGravity { enabled: bool },
    SetAttraction { enabled: bool },
    Select { index: usize, selected: bool },
}

/// Notification for the editor (e.g. create a form for a new item)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EngineEvent {
    ItemAdded { index: usize },
    ItemRemoved { index: usize },
    PropertyChanged { index: usize, property: String },
    CommandRejected { reason: String },
}

pub(super) fn enqueue(engine: &mut EngineCore, command: EngineCommand) {
    engine.commands.push_back(command);
}

pub(super) fn enqueue_json(engine: &mut EngineCore, json: &str) -> EngineResult<()> {
    let command: EngineCommand =
        serde_json::from_str(json).map_err(|e| EngineError::Command(e.to_string()))?;
    enqueue(engine, command);
    Ok(())
}

pub(super) fn flush_commands(engine: &mut EngineCore) -> usize {
    let mut applied = 0;
    while let Some(command) = engine.commands.pop_front() {
        match apply(engine, command) {
            Ok(Some(event)) => {
                engine.events.push(event);
                applied += 1;
            }
            Ok(None) => applied += 1,
            Err(err) => {
                engine_warn!("rejected command: {}", err);
                engine.events.push(EngineEvent::CommandRejected { reason: err.to_string() });
            }
        }
    }
    applied
}

fn apply(engine: &mut EngineCore, command: EngineCommand) -> EngineResult<Option<EngineEvent>> {
    match command {
        EngineCommand::AddItem { item } => {
            let index = engine.add_item(item.into_item())?;
            Ok(Some(EngineEvent::ItemAdded { index }))
        }
        EngineCommand::RemoveItem { index } => {
            engine.remove_item(index)?;
            Ok(Some(EngineEvent::ItemRemoved { index }))
        }
        EngineCommand::EditProperty { index, property, value } => {
            if engine.edit_property(&property, index, value)? {
                Ok(Some(EngineEvent::PropertyChanged { index, property }))
            } else {
                Err(EngineError::Command(format!("edit of '{}' on item {} was ignored", property, index)))
            }
        }
        EngineCommand::SetGravity { enabled } => {
            engine.set_gravity(enabled);
            Ok(None)
        }
        EngineCommand::SetAttraction { enabled } => {
            engine.set_attraction(enabled);
            Ok(None)
        }
        EngineCommand::Select { index, selected } => {
            engine.set_selected(index, selected)?;
            Ok(None)
        }
    }
}
