use anyhow::{Context, bail};
use chrono::DateTime;
use std::io::Write;

use crate::client::GenerationClient;
use crate::config::{GenerateArgs, HistoryAction, HistoryArgs};
use crate::history::HistoryCache;
use crate::models::HistoryEntry;
use crate::storage::FileStorage;
use crate::view_model::{Status, ViewModel};

/// `nexus generate`: submit the prompt, remember the result, print or save it.
pub async fn generate(args: &GenerateArgs, out: &mut impl Write) -> anyhow::Result<HistoryEntry> {
    let storage = FileStorage::new(args.storage.resolve());
    let client = GenerationClient::new(args.client.to_config());
    let mut vm = ViewModel::new(client, HistoryCache::open(storage));

    vm.set_prompt(args.prompt.join(" "));
    match vm.submit().await {
        Status::Success => {}
        Status::Idle => bail!("prompt is empty"),
        _ => bail!("{}", vm.error().unwrap_or("Failed to generate your website code.")),
    }

    let Some(entry) = vm.result().cloned() else {
        bail!("generation finished without a result");
    };

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&entry)?)?;
        return Ok(entry);
    }

    write_summary(out, &entry)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &entry.result.react_code)
                .with_context(|| format!("writing {}", path.display()))?;
            writeln!(out, "Code written to {}", path.display())?;
        }
        None => writeln!(out, "\n{}", entry.result.react_code.trim())?,
    }
    Ok(entry)
}

/// `nexus history ...`
pub fn history(args: &HistoryArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut cache = HistoryCache::open(FileStorage::new(args.storage.resolve()));

    match args.action {
        HistoryAction::List => {
            if cache.entries().is_empty() {
                writeln!(out, "No history yet")?;
            }
            for entry in cache.entries() {
                writeln!(out, "{}  {}  {}  {}", entry.id, created_at(entry.id), entry.result.name, entry.prompt)?;
            }
        }
        HistoryAction::Show { id, code } => {
            let entry = cache.restore(id).with_context(|| format!("no history entry {}", id))?;
            if code {
                writeln!(out, "{}", entry.result.react_code.trim())?;
            } else {
                write_summary(out, &entry)?;
            }
        }
        HistoryAction::Remove { id } => {
            if cache.restore(id).is_none() {
                bail!("no history entry {}", id);
            }
            let left = cache.remove(id).len();
            writeln!(out, "Removed {} ({} left)", id, left)?;
        }
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, entry: &HistoryEntry) -> std::io::Result<()> {
    writeln!(out, "{} (id {})", entry.result.name, entry.id)?;
    writeln!(out, "Prompt: {}", entry.prompt)?;
    writeln!(out, "{}", entry.result.description)?;
    let colors = &entry.result.colors;
    writeln!(out, "Colors: primary {}  secondary {}  accent {}", colors.primary, colors.secondary, colors.accent)
}

// ids are millisecond timestamps
fn created_at(id: i64) -> String {
    DateTime::from_timestamp_millis(id)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_at_formats_millis() {
        assert_eq!(created_at(0), "1970-01-01 00:00");
        assert_eq!(created_at(i64::MAX), "-");
    }
}
