use anyhow::Result;
use campus_secretary_core::SecretaryConfig;
use owo_colors::OwoColorize;

pub fn init(force: bool) -> Result<()> {
    let path = SecretaryConfig::config_path()?;

    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}\n\nUse --force to overwrite it.",
            path.display()
        );
    }

    SecretaryConfig::create_default_config(&path)?;
    println!("{}", format!("  Created: {}", path.display()).green());

    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", SecretaryConfig::config_path()?.display());
    Ok(())
}
