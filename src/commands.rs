//! Scripted catalogue edits.
//!
//! A command stream is a sequence of JSON values separated by whitespace:
//! one object per line (NDJSON), a single array, or any mix of the two.
//! Each command is `{"op": "add", ...draft fields}` or
//! `{"op": "remove", "id": ...}`.

use crate::catalog::{DraftItem, MenuCatalogue, MenuItemId};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Deserializer, Value};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MenuCommand {
    Add(DraftItem),
    Remove { id: MenuItemId },
}

/// What happened to one command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Added { id: MenuItemId },
    Rejected { reason: String },
    Removed { id: MenuItemId },
    NotFound { id: MenuItemId },
}

impl CommandOutcome {
    pub fn changed_menu(&self) -> bool {
        matches!(
            self,
            CommandOutcome::Added { .. } | CommandOutcome::Removed { .. }
        )
    }
}

pub fn apply_command(catalogue: &mut MenuCatalogue, command: MenuCommand) -> CommandOutcome {
    match command {
        MenuCommand::Add(draft) => match catalogue.add(draft) {
            Ok(id) => CommandOutcome::Added { id },
            Err(rejection) => CommandOutcome::Rejected {
                reason: rejection.to_string(),
            },
        },
        MenuCommand::Remove { id } => match catalogue.remove(&id) {
            Some(_) => CommandOutcome::Removed { id },
            None => CommandOutcome::NotFound { id },
        },
    }
}

/// Apply commands in order; rejections do not stop the stream.
pub fn apply_commands(
    catalogue: &mut MenuCatalogue,
    commands: impl IntoIterator<Item = MenuCommand>,
) -> Vec<CommandOutcome> {
    commands
        .into_iter()
        .map(|command| apply_command(catalogue, command))
        .collect()
}

/// Read every command in `input`, in order.
///
/// Errors name the line the offending value starts on.
pub fn parse_command_stream(input: &str) -> Result<Vec<MenuCommand>> {
    let mut values = Deserializer::from_str(input).into_iter::<Value>();
    let mut commands = Vec::new();
    loop {
        let line = line_of_next_value(input, values.byte_offset());
        let Some(value) = values.next() else {
            break;
        };
        let value = value.with_context(|| format!("malformed JSON on line {line}"))?;
        match value {
            Value::Array(batch) => {
                for (position, command) in batch.into_iter().enumerate() {
                    commands.push(serde_json::from_value(command).with_context(|| {
                        format!("bad menu command #{} in array on line {line}", position + 1)
                    })?);
                }
            }
            Value::Object(_) => commands.push(
                serde_json::from_value(value)
                    .with_context(|| format!("bad menu command on line {line}"))?,
            ),
            other => bail!("expected a command object or array on line {line}, found {other}"),
        }
    }

    if commands.is_empty() {
        bail!("No menu commands provided");
    }
    Ok(commands)
}

// 1-based line of the first non-whitespace byte at or after `offset`.
fn line_of_next_value(input: &str, offset: usize) -> usize {
    let rest = &input[offset..];
    let start = offset + (rest.len() - rest.trim_start().len());
    input[..start].matches('\n').count() + 1
}
