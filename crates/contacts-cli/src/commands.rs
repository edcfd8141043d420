use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use contacts_core::{ContactPipeline, PipelineOptions, list_countries};
use contacts_ingest::read_source;
use contacts_model::CountryCount;
use contacts_oracle::{ChatCompletionsOracle, OracleConfig};
use contacts_output::{resolve_output_path, write_contacts_csv};
use contacts_standards::{Standards, load_default_standards};

use crate::cli::{ConvertArgs, CountriesArgs};
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let span = info_span!("convert", input = %args.input.display());
    let _guard = span.enter();
    let started = Instant::now();

    let standards = load_standards(args.standards_dir.as_deref())?;
    info!(
        countries = standards.countries.len(),
        rules = standards.tag_rules.len(),
        "loaded reference data"
    );
    let table = read_source(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let options = PipelineOptions::default()
        .with_country_filter(args.country.clone())
        .with_oracle(!args.no_oracle)
        .with_validate_only(args.validate_only)
        .with_default_region(args.default_region.clone());
    let mut pipeline = ContactPipeline::from_standards(&standards);
    let mut oracle_enabled = false;
    if options.use_oracle {
        let config = OracleConfig::from_env();
        if let Some(missing) = config.missing_setting() {
            warn!(missing, "classification oracle disabled; tagging with keyword rules only");
        } else {
            let oracle = ChatCompletionsOracle::new(config).context("build oracle client")?;
            pipeline = pipeline.with_oracle(Box::new(oracle));
            oracle_enabled = true;
        }
    }
    let country_filter = options.country_filter.clone();
    let pipeline = pipeline.with_options(options.with_oracle(oracle_enabled));

    let outcome = pipeline.run(&table)?;

    let output = if args.validate_only {
        None
    } else {
        let path = resolve_output_path(
            args.output.as_deref(),
            args.output_dir.as_deref(),
            country_filter.as_deref(),
        );
        write_contacts_csv(&path, &outcome.contacts)?;
        Some(path)
    };
    info!(elapsed = ?started.elapsed(), "convert finished");

    Ok(ConvertResult {
        input: args.input.clone(),
        country_filter,
        output,
        oracle_enabled,
        stats: outcome.stats,
        validation: outcome.validation,
    })
}

pub fn run_countries(args: &CountriesArgs) -> Result<Vec<CountryCount>> {
    let table = read_source(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let countries = list_countries(&table)?;
    Ok(countries)
}

fn load_standards(dir: Option<&Path>) -> Result<Standards> {
    match dir {
        Some(dir) => {
            Standards::load(dir).with_context(|| format!("load standards from {}", dir.display()))
        }
        None => load_default_standards().context("load standards"),
    }
}
