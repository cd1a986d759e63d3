use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::services::SettingsService;

#[derive(Subcommand)]
pub enum SettingsCommands {
    #[command(about = "Show the current system settings")]
    Show,
}

pub async fn handle(cmd: SettingsCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let settings = SettingsService::new(open_store().await?);

    match cmd {
        SettingsCommands::Show => {
            let current = settings.get_settings().await?;
            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({ "settings": current }))?);
                }
                OutputFormat::Text => {
                    println!("Site name:           {}", current.site_name);
                    println!("Default language:    {}", current.default_language);
                    println!("Timezone:            {}", current.timezone);
                    println!("Debug mode:          {}", current.debug_mode);
                    println!("Max login attempts:  {}", current.max_login_attempts);
                    println!("Session timeout (h): {}", current.session_timeout);
                    println!("Email notifications: {}", current.email_notifications);
                    println!("Maintenance mode:    {}", current.maintenance_mode);
                }
            }
            Ok(())
        }
    }
}
