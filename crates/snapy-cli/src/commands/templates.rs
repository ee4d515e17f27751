//! Template catalog listing
//!
//! Usage: snapy templates [--category <C>] [--premium <true|false>]

use clap::Args;
use snapy_core::{StoreConfig, TemplateFilter};
use snapy_engine::SharedStore;

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Only templates in this category (e.g. social-media)
    #[arg(long)]
    pub category: Option<String>,

    /// Only premium (true) or free (false) templates
    #[arg(long)]
    pub premium: Option<bool>,
}

impl TemplatesArgs {
    fn filter(&self) -> TemplateFilter {
        TemplateFilter {
            category: self.category.clone(),
            is_premium: self.premium,
        }
    }
}

/// Print the seeded catalog, filtered, as a JSON array
pub fn execute(
    args: TemplatesArgs,
    config: StoreConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SharedStore::from_config(config);
    let templates = store.list_templates(&args.filter())?;
    println!("{}", serde_json::to_string_pretty(&templates)?);
    Ok(())
}
