use crate::prelude::*;
use casekit_core::{Case, HardBreak};
use clap::Parser;

mod convert;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Re-case free-form sentences as camelCase, kebab-case or dot.case"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Output as JSON
    #[clap(long, env = "CASEKIT_JSON", global = true, default_value = "false")]
    json: bool,

    /// Whether to display additional information.
    #[clap(long, env = "CASEKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert to camelCase
    Camel(convert::ConvertOptions),

    /// Convert to kebab-case
    Kebab(convert::KebabOptions),

    /// Convert to dot.case
    Dot(convert::ConvertOptions),

    /// Show every conversion side by side
    All(convert::ConvertOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("Parsed command: {:?}", app.command);

    match app.command {
        SubCommands::Camel(options) => {
            convert::run(Case::Camel, HardBreak::Collapse, options, &app.global)
        }
        SubCommands::Kebab(options) => {
            let hard_break = options.hard_break();
            convert::run(Case::Kebab, hard_break, options.convert, &app.global)
        }
        SubCommands::Dot(options) => {
            convert::run(Case::Dot, HardBreak::Collapse, options, &app.global)
        }
        SubCommands::All(options) => convert::all::run(options, &app.global),
    }
}
