use super::domain::round_to_tenth;
use super::scorer::CountryScoreTable;
use crate::catalog::UniversityRecord;
use serde::Serialize;
use std::cmp::Ordering;

/// Distance between a university's requirement and the student's score for its country.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRecord {
    pub university: String,
    pub country: String,
    pub ranking: Option<u32>,
    pub required_score: f64,
    pub achieved_score: f64,
    /// `required - achieved`; positive means still out of reach.
    pub gap: f64,
}

impl GapRecord {
    pub fn is_reach(&self) -> bool {
        self.gap > 0.0
    }
}

/// Scorable universities of the scored countries, hardest to reach first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GapView(Vec<GapRecord>);

impl GapView {
    pub fn records(&self) -> &[GapRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn analyze(universities: &[UniversityRecord], scores: &CountryScoreTable) -> GapView {
    let mut records: Vec<GapRecord> = universities
        .iter()
        .filter_map(|university| {
            let required = university.required_score?;
            let achieved = scores.get(&university.country)?;
            Some(GapRecord {
                university: university.name.clone(),
                country: university.country.clone(),
                ranking: university.ranking,
                required_score: required,
                achieved_score: achieved,
                gap: round_to_tenth(required - achieved),
            })
        })
        .collect();

    // `sort_by` is stable, so equal gaps keep catalog order.
    records.sort_by(|a, b| b.gap.partial_cmp(&a.gap).unwrap_or(Ordering::Equal));

    GapView(records)
}

#[cfg(test)]
pub(crate) fn view_from_gaps(gaps: &[f64]) -> GapView {
    GapView(
        gaps.iter()
            .enumerate()
            .map(|(position, gap)| GapRecord {
                university: format!("University {position}"),
                country: "X".to_string(),
                ranking: None,
                required_score: 50.0 + gap,
                achieved_score: 50.0,
                gap: *gap,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scorer::CountryScore;

    fn university(name: &str, country: &str, required: Option<f64>) -> UniversityRecord {
        UniversityRecord {
            name: name.to_string(),
            country: country.to_string(),
            required_score: required,
            ranking: None,
        }
    }

    fn scores(entries: &[(&str, f64)]) -> CountryScoreTable {
        let table: Vec<CountryScore> = entries
            .iter()
            .map(|(country, score)| CountryScore {
                country: country.to_string(),
                score: *score,
            })
            .collect();
        CountryScoreTable::from_entries(table)
    }

    #[test]
    fn computes_signed_rounded_gaps_sorted_descending() {
        let universities = vec![
            university("University of Leeds", "UK", Some(70.0)),
            university("Imperial College London", "UK", Some(91.0)),
            university("University of Kent", "UK", Some(58.2)),
        ];

        let view = analyze(&universities, &scores(&[("UK", 64.3)]));

        let gaps: Vec<f64> = view.records().iter().map(|record| record.gap).collect();
        assert_eq!(gaps, vec![26.7, 5.7, -6.1]);
        assert_eq!(view.records()[0].university, "Imperial College London");
        assert!(view.records()[0].is_reach());
        assert!(!view.records()[2].is_reach());
    }

    #[test]
    fn drops_unscorable_rows_and_unscored_countries() {
        let universities = vec![
            university("University of Toronto", "Canada", Some(82.0)),
            university("Pending Institute", "UK", None),
            university("University of Bristol", "UK", Some(75.0)),
        ];

        let view = analyze(&universities, &scores(&[("UK", 70.0)]));

        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].university, "University of Bristol");
        assert_eq!(view.records()[0].achieved_score, 70.0);
    }

    #[test]
    fn equal_gaps_keep_catalog_order() {
        let universities = vec![
            university("First", "UK", Some(72.0)),
            university("Harder", "UK", Some(90.0)),
            university("Second", "UK", Some(72.0)),
            university("Third", "USA", Some(67.0)),
        ];

        let view = analyze(&universities, &scores(&[("UK", 70.0), ("USA", 65.0)]));

        let names: Vec<&str> = view
            .records()
            .iter()
            .map(|record| record.university.as_str())
            .collect();
        assert_eq!(names, vec!["Harder", "First", "Second", "Third"]);
    }

    #[test]
    fn exact_matches_report_positive_zero() {
        let universities = vec![university("University of York", "UK", Some(68.4))];

        let view = analyze(&universities, &scores(&[("UK", 68.4)]));

        assert_eq!(view.records()[0].gap, 0.0);
        assert!(view.records()[0].gap.is_sign_positive());
    }

    #[test]
    fn no_scores_yields_empty_view() {
        let universities = vec![university("University of Leeds", "UK", Some(70.0))];

        assert!(analyze(&universities, &CountryScoreTable::default()).is_empty());
    }
}
