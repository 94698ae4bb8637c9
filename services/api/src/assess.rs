use crate::infra::load_catalog;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use uni_readiness::assessment::{AssessmentSummary, RawProfile, TierView};
use uni_readiness::config::AppConfig;
use uni_readiness::error::AppError;
use uni_readiness::{AssessmentRequest, ReadinessAssessor};

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Country profile CSV (defaults to APP_PROFILES_CSV or data/country_profiles.csv)
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
    /// University CSV (defaults to APP_UNIVERSITIES_CSV or data/universities.csv)
    #[arg(long)]
    pub(crate) universities: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Class 9 percentage (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) class_9: f64,
    /// Class 10 percentage (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) class_10: f64,
    /// Class 11 percentage (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) class_11: f64,
    /// Class 12 percentage (0-100)
    #[arg(long, default_value_t = 0.0)]
    pub(crate) class_12: f64,
    /// SAT/ACT score (400-1600)
    #[arg(long, default_value_t = 400.0)]
    pub(crate) sat: f64,
    /// One AP score (0-5); repeat for each test, at most five
    #[arg(long = "ap-score")]
    pub(crate) ap_scores: Vec<f64>,
    /// Co-curricular activities (0-3)
    #[arg(long, default_value_t = 0)]
    pub(crate) co_curricular: u8,
    /// Extra-curricular activities (0-3)
    #[arg(long, default_value_t = 0)]
    pub(crate) extra_curricular: u8,
    /// Internships (0-2)
    #[arg(long, default_value_t = 0)]
    pub(crate) internships: u8,
    /// Completed community service
    #[arg(long)]
    pub(crate) community_service: bool,
    /// Completed a research project
    #[arg(long)]
    pub(crate) research_project: bool,
    /// Letters of recommendation (0-3)
    #[arg(long, default_value_t = 0)]
    pub(crate) recommendations: u8,
    /// Country to consider; repeat for several. Omit (or pass "All") for every country
    #[arg(long = "country")]
    pub(crate) countries: Vec<String>,
    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    pub(crate) fn to_request(&self) -> AssessmentRequest {
        let countries = if self.countries.is_empty() {
            vec!["All".to_string()]
        } else {
            self.countries.clone()
        };

        AssessmentRequest::new(
            RawProfile {
                class_9: self.class_9,
                class_10: self.class_10,
                class_11: self.class_11,
                class_12: self.class_12,
                sat: self.sat,
                ap_scores: self.ap_scores.clone(),
                co_curricular: self.co_curricular,
                extra_curricular: self.extra_curricular,
                internships: self.internships,
                community_service: self.community_service,
                research_project: self.research_project,
                recommendations: self.recommendations,
            },
            countries,
        )
    }
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_catalog_overrides(&mut config, &args.catalog);

    let catalog = load_catalog(&config.catalog)?;
    let request = args.to_request();
    let assessment = ReadinessAssessor::new(&catalog, config.tiers).assess(&request)?;
    let summary = assessment.summary();

    if args.json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|err| AppError::Io(std::io::Error::from(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_summary(&summary));
    }

    Ok(())
}

pub(crate) fn run_country_listing(args: CatalogArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    apply_catalog_overrides(&mut config, &args);

    let catalog = load_catalog(&config.catalog)?;
    for country in catalog.country_names() {
        println!("{country}");
    }
    Ok(())
}

fn apply_catalog_overrides(config: &mut AppConfig, args: &CatalogArgs) {
    if let Some(path) = &args.profiles {
        config.catalog.profiles_path = path.clone();
    }
    if let Some(path) = &args.universities {
        config.catalog.universities_path = path.clone();
    }
}

pub(crate) fn render_summary(summary: &AssessmentSummary) -> String {
    let mut out = String::new();
    out.push_str("University Readiness Report\n");
    out.push_str(&format!(
        "Generated on {}\n\n",
        Local::now().date_naive().format("%Y-%m-%d")
    ));

    if let Some(message) = &summary.message {
        out.push_str(message);
        out.push('\n');
        return out;
    }

    out.push_str("Country-wise Profile Score\n");
    for entry in &summary.country_scores {
        out.push_str(&format!("  {:<24} {:>6.1}\n", entry.country, entry.score));
    }

    out.push_str("\nUniversity Gap Analysis\n");
    for record in &summary.gap_analysis {
        out.push_str(&format!(
            "  {:<44} {:<12} required {:>5.1}  yours {:>5.1}  gap {:>+6.1}\n",
            record.university,
            record.country,
            record.required_score,
            record.achieved_score,
            record.gap
        ));
    }

    for view in &summary.tiers {
        if !view.universities.is_empty() {
            out.push('\n');
            render_tier(&mut out, view);
        }
    }

    out
}

fn render_tier(out: &mut String, view: &TierView) {
    out.push_str(&format!("{} Universities\n", view.label));
    for card in &view.universities {
        out.push_str(&format!(
            "  {:<44} {:<12} {:<9} required {:>5.1}  yours {:>5.1}  gap {:>+6.1}\n",
            card.university,
            card.country,
            card.ranking_label,
            card.required_score,
            card.achieved_score,
            card.gap
        ));
    }
}
