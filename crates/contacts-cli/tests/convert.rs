//! Integration tests for the convert and countries commands.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use contacts_cli::cli::{Cli, Command, ConvertArgs, CountriesArgs};
use contacts_cli::commands::{run_convert, run_countries};
use contacts_core::PipelineError;

const SHEET: &str = "\
Nombre_Universidad,Tipo_Institución,Email_General,Teléfono_Principal,País,Carreras_Disponibles
Universidad Nacional Autónoma de Honduras,Pública,Info@UNAH.edu.hn; rectoria@unah.edu.hn,50425618727.0,Honduras,Ingeniería en Energías Renovables
UNAH copia,Pública,info@unah.edu.hn,,Honduras,Medicina
Universidad de Chile,Pública,contacto@uchile.cl,12345,Chile,Comercio Exterior
,,,,Chile,
";

fn write_sheet(dir: &Path) -> PathBuf {
    let path = dir.join("contactos.csv");
    fs::write(&path, SHEET).unwrap();
    path
}

fn convert_args(input: PathBuf, output_dir: &Path) -> ConvertArgs {
    ConvertArgs {
        input,
        country: None,
        no_oracle: true,
        validate_only: false,
        default_region: "US".to_string(),
        output: None,
        output_dir: Some(output_dir.to_path_buf()),
        standards_dir: None,
    }
}

#[test]
fn convert_writes_the_default_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sheet(dir.path());

    let result = run_convert(&convert_args(input, dir.path())).unwrap();

    let output = result.output.expect("output path");
    assert_eq!(output, dir.path().join("contactos_todos_paises.csv"));
    assert!(!result.oracle_enabled);
    assert_eq!(result.stats.rows_in, 4);
    assert_eq!(result.stats.missing_identifier_dropped, 1);
    assert_eq!(result.stats.duplicate_emails_removed, 1);
    assert_eq!(result.stats.contacts_out, 2);

    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<_> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("First Name,Last Name,Email,Phone,"));
    assert!(lines[1].starts_with("Universidad de Chile,Pública,contacto@uchile.cl,,"));
    assert!(lines[1].ends_with(",\"chile, logistica internacional\""));
    assert!(lines[2].contains(",info@unah.edu.hn,+50425618727,"));
    assert!(lines[2].ends_with(",\"honduras, entrenador energias renovables\""));
}

#[test]
fn country_filter_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sheet(dir.path());
    let mut args = convert_args(input, dir.path());
    args.country = Some("chile".to_string());

    let result = run_convert(&args).unwrap();

    assert_eq!(
        result.output.as_deref(),
        Some(dir.path().join("contactos_chile_ghl.csv").as_path())
    );
    assert_eq!(result.stats.rows_selected, 2);
    assert_eq!(result.stats.contacts_out, 1);
}

#[test]
fn unmatched_filter_reports_no_matching_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sheet(dir.path());
    let mut args = convert_args(input, dir.path());
    args.country = Some("Perú".to_string());

    let error = run_convert(&args).unwrap_err();

    assert!(matches!(
        error.downcast_ref::<PipelineError>(),
        Some(PipelineError::NoMatchingRecords { .. })
    ));
    assert!(!dir.path().join("contactos_perú_ghl.csv").exists());
}

#[test]
fn validate_only_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sheet(dir.path());
    let mut args = convert_args(input, dir.path());
    args.validate_only = true;

    let result = run_convert(&args).unwrap();

    assert!(result.output.is_none());
    let validation = result.validation.expect("validation summary");
    // The duplicate UNAH row is still counted; validation runs before deduplication.
    assert_eq!(validation.phone_empty_email_present, 2);
    assert!(validation.all_countries_valid());
    assert!(!dir.path().join("contactos_todos_paises.csv").exists());
}

#[test]
fn countries_are_listed_with_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_sheet(dir.path());

    let countries = run_countries(&CountriesArgs { input }).unwrap();

    let listed: Vec<_> = countries
        .iter()
        .map(|entry| (entry.country.as_str(), entry.count))
        .collect();
    assert_eq!(listed, vec![("Chile", 2), ("Honduras", 2)]);
}

#[test]
fn arguments_parse() {
    let cli = Cli::try_parse_from([
        "contacts-ghl",
        "-v",
        "--log-format",
        "json",
        "convert",
        "contactos.xlsx",
        "-c",
        "Costa Rica",
        "--no-oracle",
        "--default-region",
        "CR",
    ])
    .unwrap();
    let Command::Convert(args) = cli.command else {
        panic!("expected convert");
    };
    assert_eq!(args.input, PathBuf::from("contactos.xlsx"));
    assert_eq!(args.country.as_deref(), Some("Costa Rica"));
    assert!(args.no_oracle);
    assert_eq!(args.default_region, "CR");
    assert!(Cli::try_parse_from(["contacts-ghl", "convert", "a.csv", "-o", "x.csv", "--output-dir", "d"]).is_err());
}
