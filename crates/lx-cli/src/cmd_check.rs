use std::path::PathBuf;

use lx_core::check_output;

pub(crate) fn run(file: PathBuf, format: String) -> anyhow::Result<()> {
    let report = check_output(&file).map_err(|e| anyhow::anyhow!("{e}"))?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{report}"),
        other => anyhow::bail!("unsupported format: '{other}'. Supported: 'text', 'json'."),
    }

    if !report.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}
