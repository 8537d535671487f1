//! CLI definitions for FormClip.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fc_core::catalog::FieldCategory;
use fc_core::mapping::Direction;

/// FormClip CLI.
#[derive(Debug, Parser)]
#[command(name = "formclip")]
#[command(about = "Copy form data between web pages through per-domain field mappings")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FORMCLIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Storage file, overriding the configured one
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install default settings, catalog and mappings where absent
    Init,

    /// Field catalog management
    Fields {
        #[command(subcommand)]
        action: FieldsAction,
    },

    /// Record which page inputs hold which catalog codes
    Capture {
        #[arg(value_enum)]
        direction: CaptureDirection,

        /// Page fixture (JSON)
        #[arg(long)]
        page: PathBuf,
    },

    /// Read the mapped fields of a page into the clipboard
    Copy {
        #[arg(long)]
        page: PathBuf,

        /// Go through the keyboard shortcut path
        #[arg(long)]
        shortcut: bool,
    },

    /// Write the clipboard into the mapped fields of a page
    Paste {
        #[arg(long)]
        page: PathBuf,

        /// Where to write the filled page (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(long)]
        shortcut: bool,
    },

    /// Show clipboard contents and time left
    Status {
        /// Keep refreshing until the data expires
        #[arg(short, long)]
        watch: bool,
    },

    /// Drop the clipboard contents
    ClearClipboard,

    /// Remove both mappings of the page's domain
    ClearMapping {
        #[arg(long)]
        page: PathBuf,
    },

    /// Export settings, catalog and mappings as JSON
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Import a previously exported JSON document
    Import { file: PathBuf },

    /// Show or change settings
    Settings {
        #[arg(long)]
        notifications: Option<bool>,

        /// Enable keyboard commands
        #[arg(long)]
        commands: Option<bool>,
    },
}

#[derive(Debug, Subcommand)]
pub enum FieldsAction {
    /// List the catalog
    List {
        /// Print the stored JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List categories with the code format each accepts
    Categories,

    /// Add a field
    Add {
        #[arg(value_parser = parse_category)]
        category: FieldCategory,
        name: String,
        code: String,
    },

    /// Change the code of an existing field
    Edit {
        #[arg(value_parser = parse_category)]
        category: FieldCategory,
        name: String,
        code: String,
    },

    /// Delete a field
    Delete {
        #[arg(value_parser = parse_category)]
        category: FieldCategory,
        name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CaptureDirection {
    Copy,
    Paste,
}

impl From<CaptureDirection> for Direction {
    fn from(value: CaptureDirection) -> Self {
        match value {
            CaptureDirection::Copy => Direction::Copy,
            CaptureDirection::Paste => Direction::Paste,
        }
    }
}

fn parse_category(raw: &str) -> Result<FieldCategory, String> {
    FieldCategory::parse(raw).ok_or_else(|| {
        let known: Vec<_> = FieldCategory::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category '{raw}', expected one of: {}", known.join(", "))
    })
}
