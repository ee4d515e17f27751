use snapy_core::StoreConfig;

/// Print the effective configuration, defaults filled in
pub fn execute(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
