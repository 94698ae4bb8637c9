use super::mapping::{column_for_header, Column};
use super::{Catalog, CatalogError, CountryTemplate, UniversityRecord};
use crate::assessment::domain::{Dimension, DimensionVector};
use csv::StringRecord;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const PROFILE_TABLE: &str = "country profile";
const UNIVERSITY_TABLE: &str = "university";

/// Builds a validated [`Catalog`] from the country profile and university CSV exports.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_paths<P, Q>(profiles: P, universities: Q) -> Result<Catalog, CatalogError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let profiles_file = std::fs::File::open(profiles.as_ref())?;
        let universities_file = std::fs::File::open(universities.as_ref())?;
        debug!(
            profiles = %profiles.as_ref().display(),
            universities = %universities.as_ref().display(),
            "loading catalog files"
        );
        Self::from_readers(profiles_file, universities_file)
    }

    pub fn from_readers<P, U>(profiles: P, universities: U) -> Result<Catalog, CatalogError>
    where
        P: Read,
        U: Read,
    {
        let templates = parse_templates(profiles)?;
        let universities = parse_universities(universities)?;
        Catalog::new(templates, universities)
    }
}

struct HeaderIndex(HashMap<Column, usize>);

impl HeaderIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut positions = HashMap::new();
        for (position, header) in headers.iter().enumerate() {
            if let Some(column) = column_for_header(header) {
                positions.entry(column).or_insert(position);
            }
        }
        Self(positions)
    }

    fn require(&self, table: &'static str, column: Column) -> Result<usize, CatalogError> {
        self.0
            .get(&column)
            .copied()
            .ok_or(CatalogError::MissingColumn {
                table,
                column: column_label(column),
            })
    }

    fn optional(&self, column: Column) -> Option<usize> {
        self.0.get(&column).copied()
    }
}

fn column_label(column: Column) -> &'static str {
    match column {
        Column::Country => "Country",
        Column::University => "University",
        Column::RequiredScore => "Required Profile Score",
        Column::Ranking => "QS Ranking",
        Column::Dimension(dimension) => dimension.label(),
    }
}

fn open_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader)
}

pub(crate) fn parse_templates<R: Read>(reader: R) -> Result<Vec<CountryTemplate>, CatalogError> {
    let mut csv_reader = open_reader(reader);
    let index = HeaderIndex::from_headers(csv_reader.headers()?);

    let country_at = index.require(PROFILE_TABLE, Column::Country)?;
    let mut dimension_at = Vec::with_capacity(Dimension::COUNT);
    for dimension in Dimension::ordered() {
        let position = index.require(PROFILE_TABLE, Column::Dimension(dimension))?;
        dimension_at.push((dimension, position));
    }

    let mut templates = Vec::new();
    let mut skipped = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        let country = cell(&record, country_at);
        if country.is_empty() || country.eq_ignore_ascii_case("nan") {
            skipped += 1;
            continue;
        }

        let mut coefficients = DimensionVector::default();
        for (dimension, position) in &dimension_at {
            coefficients.set(*dimension, parse_number(cell(&record, *position)).unwrap_or(0.0));
        }

        templates.push(CountryTemplate {
            country: country.to_string(),
            coefficients,
        });
    }

    info!(
        templates = templates.len(),
        skipped_rows = skipped,
        "loaded country profile templates"
    );
    Ok(templates)
}

pub(crate) fn parse_universities<R: Read>(
    reader: R,
) -> Result<Vec<UniversityRecord>, CatalogError> {
    let mut csv_reader = open_reader(reader);
    let index = HeaderIndex::from_headers(csv_reader.headers()?);

    let name_at = index.require(UNIVERSITY_TABLE, Column::University)?;
    let country_at = index.require(UNIVERSITY_TABLE, Column::Country)?;
    let required_at = index.require(UNIVERSITY_TABLE, Column::RequiredScore)?;
    let ranking_at = index.optional(Column::Ranking);

    let mut universities = Vec::new();
    let mut unnamed = 0usize;
    let mut unscorable = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        let name = cell(&record, name_at);
        if name.is_empty() {
            unnamed += 1;
            continue;
        }

        let required_score = parse_number(cell(&record, required_at));
        if required_score.is_none() {
            unscorable += 1;
        }
        let ranking = ranking_at.and_then(|position| parse_ranking(cell(&record, position)));

        universities.push(UniversityRecord {
            name: name.to_string(),
            country: cell(&record, country_at).to_string(),
            required_score,
            ranking,
        });
    }

    if unscorable > 0 {
        warn!(
            rows = unscorable,
            "universities without a parseable required score are excluded from scoring"
        );
    }
    info!(
        universities = universities.len(),
        skipped_rows = unnamed,
        "loaded university records"
    );
    Ok(universities)
}

fn cell(record: &StringRecord, position: usize) -> &str {
    record.get(position).unwrap_or("").trim()
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn parse_ranking(value: &str) -> Option<u32> {
    parse_number(value)
        .filter(|rank| *rank >= 0.0 && *rank <= f64::from(u32::MAX))
        .map(|rank| rank.trunc() as u32)
}
