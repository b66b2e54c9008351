//! Keyword store commands
//!
//! Usage:
//!   chanwatch keyword add --store <primary|secondary> <KEYWORD> [VALUES...]
//!   chanwatch keyword list [--store <primary|secondary>]

use chanwatch_core::StoreKind;
use chanwatch_engine::Monitor;
use clap::{Args, Subcommand, ValueEnum};

#[derive(Debug, Args)]
pub struct KeywordArgs {
    #[command(subcommand)]
    pub command: KeywordCommand,
}

#[derive(Debug, Subcommand)]
pub enum KeywordCommand {
    /// Add a keyword and its trigger values to a store
    Add(AddArgs),
    /// Print the keywords of one or both stores
    List(ListArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StoreArg {
    Primary,
    Secondary,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Primary => StoreKind::Primary,
            StoreArg::Secondary => StoreKind::Secondary,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Target store
    #[arg(long, value_enum, default_value = "primary")]
    pub store: StoreArg,

    /// Keyword followed by its trigger values
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list this store
    #[arg(long, value_enum)]
    pub store: Option<StoreArg>,
}

/// Execute keyword command
pub fn execute(
    args: KeywordArgs,
    monitor: &mut Monitor,
) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        KeywordCommand::Add(add) => {
            let reply = monitor.on_add_keyword(add.store.into(), &add.args)?;
            println!("{}", reply);
            Ok(())
        }
        KeywordCommand::List(list) => {
            let kinds: Vec<StoreKind> = match list.store {
                Some(store) => vec![store.into()],
                None => StoreKind::ALL.to_vec(),
            };
            for kind in kinds {
                print!("{}", render_store(monitor, kind));
            }
            Ok(())
        }
    }
}

fn render_store(monitor: &Monitor, kind: StoreKind) -> String {
    let store = monitor.store(kind);
    let mut out = format!("[{}] {}\n", kind, store.path().display());
    for (keyword, triggers) in store.keywords().iter() {
        let values: Vec<&str> = triggers.iter().map(String::as_str).collect();
        out.push_str(&format!("{}: {}\n", keyword, values.join(", ")));
    }
    out
}
