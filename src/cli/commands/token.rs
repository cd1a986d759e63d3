use crate::auth::JwtCredentials;
use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::config;
use serde_json::json;

pub fn handle(user_id: &str, role: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let credentials = JwtCredentials::from_config(&config::config().security);
    let (token, claims) = credentials.issue(user_id, role)?;

    match output_format {
        OutputFormat::Json => output_success(
            &output_format,
            "Token issued",
            Some(json!({ "token": token, "expires_at": claims.expires_at() })),
        ),
        OutputFormat::Text => {
            println!("{}", token);
            Ok(())
        }
    }
}
