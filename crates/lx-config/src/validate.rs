use crate::config::XformConfig;

/// Internal validation, called automatically during `XformConfig::from_str` / `load`.
pub(crate) fn validate(config: &XformConfig) -> anyhow::Result<()> {
    if config.transform.limit == 0 {
        anyhow::bail!("transform.limit must be > 0");
    }

    config.fallback.validate()?;

    if config.paths.input.as_os_str().is_empty() {
        anyhow::bail!("paths.input must not be empty");
    }
    if config.paths.output.as_os_str().is_empty() {
        anyhow::bail!("paths.output must not be empty");
    }

    Ok(())
}
