use anyhow::Result;

use zamm_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    println!("# {}", AppConfig::config_path().display());
    print!("{}", content);
    Ok(())
}

pub fn path() -> Result<()> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let path = AppConfig::config_path();
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
