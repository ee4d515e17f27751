//! Plan quota table

use serde_json::{json, Value};
use snapy_core::{Plan, StoreConfig};

pub fn execute(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let table: Vec<Value> = Plan::ALL
        .iter()
        .map(|plan| {
            json!({
                "plan": plan.as_str(),
                "aiGenerationsLimit": config.plans.limit_for(*plan),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
