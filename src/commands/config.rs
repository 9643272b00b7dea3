use anyhow::{Context, Result, bail};
use rpawogen::configtool::{GenConfig, get_config_path};

pub fn show_config() -> Result<()> {
    let path = get_config_path()?;
    let config = GenConfig::load_from(&path)?;
    let source = if path.exists() { "" } else { " (not found, defaults)" };
    println!("Config file: {}{}", path.display(), source);
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    let path = get_config_path()?;
    if path.exists() && !force {
        bail!("Config file already exists: {} (use --force to overwrite)", path.display());
    }
    GenConfig::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Default configuration written to {}", path.display());
    Ok(())
}
