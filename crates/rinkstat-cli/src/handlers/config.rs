use super::HandlerContext;
use anyhow::{Result, bail};
use rinkstat_runtime::Config;

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let toml = toml::to_string_pretty(&ctx.config)?;
    ctx.renderer().render(&ctx.config, toml)
}
