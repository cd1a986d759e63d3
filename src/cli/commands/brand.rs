use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::*;
use crate::cli::OutputFormat;
use crate::config;
use crate::services::BrandService;

#[derive(Subcommand)]
pub enum BrandCommands {
    #[command(about = "List brands")]
    List {
        #[arg(long, help = "Include soft-deleted brands")]
        all: bool,
    },

    #[command(about = "Permanently delete a brand with no remaining workspaces, bots or agents")]
    Delete {
        #[arg(help = "Brand ID")]
        id: String,
    },

    #[command(about = "Mark a brand deleted without removing it")]
    SoftDelete {
        #[arg(help = "Brand ID")]
        id: String,
    },

    #[command(about = "Restore a soft-deleted brand")]
    Restore {
        #[arg(help = "Brand ID")]
        id: String,
    },
}

pub async fn handle(cmd: BrandCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let store = open_store().await?;
    let brands = BrandService::new(store, config::config().brands.deletion_policy);

    match cmd {
        BrandCommands::List { all } => {
            let list = brands.list_brands(all).await?;
            if list.is_empty() {
                return output_empty_collection(&output_format, "brands", "No brands found");
            }

            match output_format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&json!({ "brands": list }))?);
                }
                OutputFormat::Text => {
                    println!("{:<38} {:<25} {:<10} {}", "ID", "NAME", "STATUS", "API URL");
                    println!("{}", "-".repeat(100));
                    for brand in &list {
                        println!("{:<38} {:<25} {:<10} {}", brand.id, brand.name, brand.status.as_str(), brand.api_url);
                    }
                }
            }
            Ok(())
        }
        BrandCommands::Delete { id } => {
            let receipt = brands.delete_brand(&id).await?;
            output_success(
                &output_format,
                &format!("Brand '{}' ({}) deleted", receipt.brand_id, receipt.brand_name),
                Some(serde_json::to_value(&receipt)?),
            )
        }
        BrandCommands::SoftDelete { id } => {
            let receipt = brands.soft_delete_brand(&id).await?;
            output_success(
                &output_format,
                &format!("Brand '{}' soft deleted at {}", receipt.brand_id, receipt.deleted_at.to_rfc3339()),
                Some(serde_json::to_value(&receipt)?),
            )
        }
        BrandCommands::Restore { id } => {
            let brand = brands.restore_brand(&id).await?;
            output_success(
                &output_format,
                &format!("Brand '{}' restored", brand.id),
                Some(json!({ "brand": brand })),
            )
        }
    }
}
