use clap::{Parser, Subcommand};
use notedown_core::constants::DEFAULT_GRAMMAR_API_URL;
use notedown_core::{
    CoreConfig, ListQuery, MirrorService, NewNote, NoteService,
};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "notedown")]
#[command(about = "Notedown note store admin CLI")]
struct Cli {
    /// Data directory holding the note store and exports
    #[arg(long, default_value = "notedown_data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes, pinned first, then newest first
    List {
        /// 1-based page number
        #[arg(long)]
        page: Option<String>,
        /// Page size
        #[arg(long)]
        limit: Option<String>,
    },
    /// Create a note (also exports it to the markdown directory)
    Create {
        /// Note body
        content: String,
        /// Note title (defaults to "Untitled")
        #[arg(long)]
        title: Option<String>,
        /// Pin the note
        #[arg(long)]
        pinned: bool,
    },
    /// Delete a note by id
    Delete {
        /// Note identifier
        id: String,
    },
    /// List the exported markdown files
    ExportList,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = Arc::new(CoreConfig::new(
        cli.data_dir,
        DEFAULT_GRAMMAR_API_URL.to_string(),
        false,
    )?);
    let notes = NoteService::new(cfg.clone());
    let mirror = MirrorService::new(cfg);

    match cli.command {
        Commands::List { page, limit } => {
            let result = notes.list(&ListQuery { page, limit })?;
            for note in &result.notes {
                let pin = if note.pinned { "*" } else { " " };
                println!(
                    "{} {}  {}  {}",
                    pin,
                    note.id,
                    note.created_at.format("%Y-%m-%d %H:%M"),
                    note.title
                );
            }
            println!("total: {}", result.total);
        }
        Commands::Create {
            content,
            title,
            pinned,
        } => {
            let note = notes.create(NewNote {
                title,
                content,
                pinned: Some(pinned),
            })?;
            let path = mirror.export(&note.title, note.content.as_str())?;
            println!("created {} ({})", note.id, note.title);
            println!("exported to {}", path.display());
        }
        Commands::Delete { id } => {
            let id = Uuid::parse_str(&id)?;
            notes.delete(id)?;
            println!("deleted {}", id);
        }
        Commands::ExportList => {
            for name in mirror.list()? {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
