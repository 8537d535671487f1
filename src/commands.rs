//! Execution of parsed CLI commands against a wired [`AppRuntime`].
//!
//! Page-bound commands open a page session around the fixture and go
//! through the tab dispatcher, like the popup would. Storage-only commands
//! call their use cases directly.

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use fc_app::usecases::SettingsUpdate;
use fc_core::catalog::{validation_hint, FieldCatalog, FieldCategory};
use fc_core::clipboard::ClipboardStatus;
use fc_core::command::{Command, CommandReply};
use fc_infra::{MemoryDocument, StatusTicker};

use crate::bootstrap::AppRuntime;
use crate::cli::{Commands, FieldsAction};

pub fn load_page(path: &Path) -> anyhow::Result<MemoryDocument> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page fixture: {}", path.display()))?;
    MemoryDocument::from_json(&content)
        .with_context(|| format!("Invalid page fixture: {}", path.display()))
}

/// Runs `command` on a page session and returns the reply together with the
/// document as the session left it.
pub async fn run_on_page(
    runtime: &AppRuntime,
    document: MemoryDocument,
    command: Command,
    shortcut: bool,
) -> anyhow::Result<(Option<CommandReply>, MemoryDocument)> {
    let session = runtime.open_page(document);
    let dispatcher = runtime.dispatcher(Arc::new(session.tab()));

    let reply = if shortcut {
        dispatcher.shortcut(command).await
    } else {
        dispatcher.dispatch(command).await
    };

    let document = session.shutdown().await?;
    Ok((reply, document))
}

pub async fn execute(
    runtime: &AppRuntime,
    command: Commands,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let uc = runtime.usecases();

    match command {
        Commands::Init => {
            let written = uc.initialize_defaults().execute().await?;
            if written.is_empty() {
                writeln!(out, "Already initialized")?;
            } else {
                writeln!(out, "Initialized: {}", written.join(", "))?;
            }
        }

        Commands::Fields { action } => fields(runtime, action, out).await?,

        Commands::Capture { direction, page } => {
            let command = Command::capture(direction.into());
            return page_command(runtime, &page, command, false, None, out).await;
        }

        Commands::Copy { page, shortcut } => {
            return page_command(runtime, &page, Command::CopyNow, shortcut, None, out).await;
        }

        Commands::Paste {
            page,
            out: target,
            shortcut,
        } => {
            return page_command(
                runtime,
                &page,
                Command::PasteNow,
                shortcut,
                Some(target.as_deref()),
                out,
            )
            .await;
        }

        Commands::Status { watch } => {
            let status = uc.clipboard_status().execute().await?;
            print_status(out, &status)?;
            if watch && !status.is_empty() {
                watch_status(runtime, out).await?;
            }
        }

        Commands::ClearClipboard => {
            uc.clear_clipboard().execute().await?;
            writeln!(out, "Clipboard cleared")?;
        }

        Commands::ClearMapping { page } => {
            return page_command(runtime, &page, Command::ClearDomainMapping, false, None, out)
                .await;
        }

        Commands::Export { out: target } => {
            let document = uc.export_config().execute().await?;
            let json = document.to_json_pretty()?;
            match target {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write export: {}", path.display()))?;
                    writeln!(out, "Exported to {}", path.display())?;
                }
                None => writeln!(out, "{json}")?,
            }
        }

        Commands::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read import file: {}", file.display()))?;
            let payload: serde_json::Value =
                serde_json::from_str(&content).context("Import file is not valid JSON")?;
            let replaced = uc.import_config().execute(&payload).await?;
            if replaced.is_empty() {
                writeln!(out, "Nothing to import")?;
            } else {
                writeln!(out, "Imported: {}", replaced.join(", "))?;
            }
        }

        Commands::Settings {
            notifications,
            commands,
        } => {
            let settings = if notifications.is_none() && commands.is_none() {
                uc.get_settings().execute().await?
            } else {
                uc.update_settings()
                    .execute(SettingsUpdate {
                        notifications,
                        commands_enabled: commands,
                    })
                    .await?
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn fields(
    runtime: &AppRuntime,
    action: FieldsAction,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let uc = runtime.usecases();
    match action {
        FieldsAction::List { json } => {
            let catalog = uc.list_fields().execute().await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&catalog)?)?;
            } else {
                print_catalog(out, &catalog)?;
            }
        }
        FieldsAction::Categories => {
            for category in FieldCategory::ALL {
                writeln!(out, "{:<10} {}", category.label(), validation_hint(category))?;
            }
        }
        FieldsAction::Add {
            category,
            name,
            code,
        } => {
            uc.add_field().execute(category, &name, &code).await?;
            writeln!(out, "Added {} '{}' = {}", category.label(), name.trim(), code.trim())?;
        }
        FieldsAction::Edit {
            category,
            name,
            code,
        } => {
            uc.edit_field().execute(category, &name, &code).await?;
            writeln!(out, "Updated {} '{}' = {}", category.label(), name.trim(), code.trim())?;
        }
        FieldsAction::Delete { category, name } => {
            uc.delete_field().execute(category, &name).await?;
            writeln!(out, "Deleted {} '{}'", category.label(), name.trim())?;
        }
    }
    Ok(())
}

/// `paste_target` is `Some` for commands whose page output matters; the
/// inner `None` means stdout.
async fn page_command(
    runtime: &AppRuntime,
    page: &Path,
    command: Command,
    shortcut: bool,
    paste_target: Option<Option<&Path>>,
    out: &mut dyn Write,
) -> anyhow::Result<ExitCode> {
    let document = load_page(page)?;
    debug!(page = %page.display(), command = %command, "running page command");
    let (reply, document) = run_on_page(runtime, document, command, shortcut).await?;

    if reply.is_none() {
        info!(command = %command, "command produced no reply");
        return Ok(ExitCode::FAILURE);
    }

    if let Some(target) = paste_target {
        let json = serde_json::to_string_pretty(&document.to_fixture())?;
        match target {
            Some(path) => std::fs::write(path, json)
                .with_context(|| format!("Failed to write page: {}", path.display()))?,
            None => writeln!(out, "{json}")?,
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_catalog(out: &mut dyn Write, catalog: &FieldCatalog) -> anyhow::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "No fields")?;
        return Ok(());
    }
    for entry in catalog.flatten() {
        writeln!(
            out,
            "{:<10} {:<24} {}",
            entry.category.label(),
            entry.name,
            entry.code
        )?;
    }
    Ok(())
}

fn print_status(out: &mut dyn Write, status: &ClipboardStatus) -> anyhow::Result<()> {
    if status.is_empty() {
        writeln!(out, "Clipboard empty")?;
        return Ok(());
    }
    writeln!(
        out,
        "{} values, expires in {}s",
        status.data.len(),
        status.remaining_secs
    )?;
    for (code, value) in &status.data {
        writeln!(out, "  {code} = {}", serde_json::to_string(value)?)?;
    }
    Ok(())
}

async fn watch_status(runtime: &AppRuntime, out: &mut dyn Write) -> anyhow::Result<()> {
    let ticker = StatusTicker::default();
    let status = Arc::new(runtime.usecases().clipboard_status());
    let mut updates = ticker
        .start(move || {
            let status = status.clone();
            async move { status.execute().await.map_err(anyhow::Error::from) }
        })
        .await;

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(update) if update.is_empty() => {
                    writeln!(out, "Clipboard expired")?;
                    break;
                }
                Some(update) => {
                    writeln!(out, "expires in {}s", update.remaining_secs)?;
                    out.flush()?;
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    ticker.stop().await;
    Ok(())
}
