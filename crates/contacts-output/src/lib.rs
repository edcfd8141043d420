//! GHL import CSV writer.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use contacts_model::{CONTACT_HEADERS, NormalizedContact};

/// File name used when no country filter is set.
pub const ALL_COUNTRIES_FILE: &str = "contactos_todos_paises.csv";

/// Default export file name for a run.
///
/// `Some("Costa Rica")` gives `contactos_costa_rica_ghl.csv`.
pub fn default_output_name(country_filter: Option<&str>) -> String {
    match country_filter.map(str::trim).filter(|filter| !filter.is_empty()) {
        Some(filter) => {
            let slug = filter.replace([' ', '-'], "_").to_lowercase();
            format!("contactos_{slug}_ghl.csv")
        }
        None => ALL_COUNTRIES_FILE.to_string(),
    }
}

/// Chooses the export path: an explicit `output` wins, otherwise the default
/// name inside `output_dir` (or the working directory).
pub fn resolve_output_path(
    output: Option<&Path>,
    output_dir: Option<&Path>,
    country_filter: Option<&str>,
) -> PathBuf {
    if let Some(output) = output {
        return output.to_path_buf();
    }
    let name = default_output_name(country_filter);
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Renders the header row and one row per contact, in memory.
pub fn render_contacts_csv(contacts: &[NormalizedContact]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(CONTACT_HEADERS)
        .context("write csv header")?;
    for contact in contacts {
        writer
            .write_record(contact.fields())
            .with_context(|| format!("write csv row for {}", contact.first_name))?;
    }
    writer
        .into_inner()
        .map_err(|error| anyhow::Error::new(error.into_error()).context("finish csv buffer"))
}

/// Writes the export file, creating parent directories as needed.
///
/// The whole file is rendered before anything touches the disk.
pub fn write_contacts_csv(path: &Path, contacts: &[NormalizedContact]) -> Result<()> {
    let bytes = render_contacts_csv(contacts)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), rows = contacts.len(), "wrote contacts csv");
    Ok(())
}
