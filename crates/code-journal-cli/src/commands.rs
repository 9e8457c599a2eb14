use anyhow::{Context, Result};
use chrono::NaiveDate;
use code_journal_config::Config;
use code_journal_engine::{EntryDraft, EntryStore, Journal, RenderedEntry, render_str};
use std::io::{Read, Write};
use std::path::Path;

use crate::JournalCommand;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Reads a file, or stdin for `None` and `-`
pub fn read_source(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
        }
    }
}

pub fn render(markdown: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", render_str(markdown))?;
    Ok(())
}

/// Writes `config` to `config_path`, refusing to replace an existing file
/// unless `force` is set.
pub fn init_config(
    config: &Config,
    config_path: &Path,
    force: bool,
    out: &mut impl Write,
) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}; pass --force to replace it",
            config_path.display()
        );
    }
    config.save_to_path(config_path)?;
    writeln!(out, "wrote {}", config_path.display())?;
    Ok(())
}

/// Runs a journal subcommand against an already-seeded journal.
pub fn execute<S: EntryStore>(
    journal: &mut Journal<S>,
    command: JournalCommand,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        JournalCommand::List => {
            for entry in journal.entries()? {
                writeln!(
                    out,
                    "{}  {}  {}",
                    entry.id,
                    entry.date,
                    entry.display_title()
                )?;
            }
        }
        JournalCommand::Show { id } => {
            let rendered = journal.open(&id)?;
            write_article(&rendered, out)?;
        }
        JournalCommand::New {
            title,
            date,
            content,
        } => {
            let content = match content {
                Some(source) => read_source(Some(&source))?,
                None => String::new(),
            };
            journal.start_new();
            let saved = journal.save(EntryDraft::new(
                &title,
                date.unwrap_or_else(today),
                content,
            ))?;
            log::info!("created entry {}", saved.id);
            writeln!(out, "{}", saved.id)?;
        }
        JournalCommand::Edit {
            id,
            title,
            date,
            content,
        } => {
            journal.open(&id)?;
            let Some(current) = journal.edit_current()? else {
                anyhow::bail!("Entry {id} disappeared while editing");
            };
            let content = match content {
                Some(source) => read_source(Some(&source))?,
                None => current.content,
            };
            let draft = EntryDraft::new(
                title.as_deref().unwrap_or(&current.title),
                date.unwrap_or(current.date),
                content,
            );
            let saved = journal.save(draft)?;
            writeln!(out, "{}", saved.id)?;
        }
        JournalCommand::Delete { id } => {
            journal.delete(&id)?;
            log::info!("deleted entry {id}");
        }
    }
    Ok(())
}

fn write_article(entry: &RenderedEntry, out: &mut impl Write) -> Result<()> {
    writeln!(out, "<article>")?;
    writeln!(out, "<h1 class=\"entry-title\">{}</h1>", entry.title_html)?;
    writeln!(out, "<time datetime=\"{0}\">{0}</time>", entry.date)?;
    if !entry.content_html.is_empty() {
        writeln!(out, "{}", entry.content_html)?;
    }
    writeln!(out, "</article>")?;
    Ok(())
}
