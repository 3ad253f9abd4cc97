use anyhow::Context;
use lx_config::XformConfig;
use lx_core::tracing_init::init_tracing;
use lx_core::{TransformOutcome, Transformer};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::RunArgs;

pub(crate) fn run(args: RunArgs) -> anyhow::Result<()> {
    // flag > config file > built-in default
    let mut config = match &args.config {
        Some(path) => XformConfig::load(path)
            .with_context(|| format!("loading config: {}", path.display()))?,
        None => XformConfig::default(),
    };
    if let Some(input) = args.input {
        config.paths.input = input;
    }
    if let Some(output) = args.output {
        config.paths.output = output;
    }
    if let Some(limit) = args.limit {
        anyhow::ensure!(limit > 0, "--limit must be > 0");
        config.transform.limit = limit;
    }
    if args.seed.is_some() {
        config.transform.seed = args.seed;
    }

    let _guard = init_tracing(&config.logging)?;
    lx_debug!(
        conf,
        input = %config.paths.input.display(),
        output = %config.paths.output.display(),
        limit = config.transform.limit,
        seed = ?config.transform.seed,
        "resolved run configuration"
    );

    let transformer = Transformer::new()
        .limit(config.transform.limit)
        .fallback(config.fallback)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let (input, output) = (&config.paths.input, &config.paths.output);
    let outcome = match config.transform.seed {
        Some(seed) => transformer.transform_file(input, output, &mut StdRng::seed_from_u64(seed)),
        None => transformer.transform_file(input, output, &mut rand::rng()),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    match outcome {
        TransformOutcome::Written(summary) => {
            println!("Transformed {} entries", summary.count);
            match &summary.sample {
                Some(sample) => println!("Sample entry: {sample}"),
                None => println!("Sample entry: None"),
            }
        }
        TransformOutcome::InputMissing(path) => {
            println!("Input file not found: {}", path.display());
        }
    }

    Ok(())
}
