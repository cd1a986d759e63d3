pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "hrm")]
#[command(about = "HRM CLI - Administrative commands for the HRM API database")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Apply database migrations")]
    Migrate,

    #[command(about = "Issue a JWT for calling the API")]
    Token {
        #[arg(long, default_value = "admin", help = "User id placed in the token")]
        user_id: String,

        #[arg(long, default_value = "admin", help = "Role placed in the token")]
        role: String,
    },

    #[command(about = "Brand lifecycle management")]
    Brand {
        #[command(subcommand)]
        cmd: commands::brand::BrandCommands,
    },

    #[command(about = "System settings")]
    Settings {
        #[command(subcommand)]
        cmd: commands::settings::SettingsCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Migrate => commands::migrate::handle(output_format).await,
        Commands::Token { user_id, role } => commands::token::handle(&user_id, &role, output_format),
        Commands::Brand { cmd } => commands::brand::handle(cmd, output_format).await,
        Commands::Settings { cmd } => commands::settings::handle(cmd, output_format).await,
    }
}
