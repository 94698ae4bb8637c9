use serde::{Deserialize, Serialize};

/// One of the twelve profile components scored against a country template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Class9,
    Class10,
    Class11,
    Class12,
    Sat,
    AdvancedPlacement,
    CoCurricular,
    ExtraCurricular,
    Internship,
    Community,
    Research,
    Recommendations,
}

impl Dimension {
    pub const COUNT: usize = 12;

    pub const fn ordered() -> [Dimension; Self::COUNT] {
        [
            Self::Class9,
            Self::Class10,
            Self::Class11,
            Self::Class12,
            Self::Sat,
            Self::AdvancedPlacement,
            Self::CoCurricular,
            Self::ExtraCurricular,
            Self::Internship,
            Self::Community,
            Self::Research,
            Self::Recommendations,
        ]
    }

    /// Canonical column header used by catalog files.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class9 => "Class 9",
            Self::Class10 => "Class 10",
            Self::Class11 => "Class 11",
            Self::Class12 => "Class 12",
            Self::Sat => "SAT",
            Self::AdvancedPlacement => "AP",
            Self::CoCurricular => "CC",
            Self::ExtraCurricular => "EC",
            Self::Internship => "Internship",
            Self::Community => "Community",
            Self::Research => "Research",
            Self::Recommendations => "LOR",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Dense per-dimension values in [`Dimension::ordered`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DimensionVector([f64; Dimension::COUNT]);

impl DimensionVector {
    pub const fn new(values: [f64; Dimension::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.0[dimension.index()]
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.0[dimension.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ordered()
            .into_iter()
            .map(move |dimension| (dimension, self.get(dimension)))
    }

    pub fn dot(&self, other: &DimensionVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(left, right)| left * right)
            .sum()
    }

    pub fn scaled(&self, factor: f64) -> DimensionVector {
        let mut values = self.0;
        for value in &mut values {
            *value *= factor;
        }
        DimensionVector(values)
    }

    pub fn as_array(&self) -> &[f64; Dimension::COUNT] {
        &self.0
    }
}

/// Which countries an assessment should consider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountrySelection {
    All,
    Only(Vec<String>),
}

impl CountrySelection {
    /// Builds a selection from user-facing names; an `All` entry anywhere selects every
    /// known country.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut only = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if trimmed.eq_ignore_ascii_case("all") {
                return Self::All;
            }
            if !trimmed.is_empty() && !only.iter().any(|existing| existing == trimmed) {
                only.push(trimmed.to_string());
            }
        }
        Self::Only(only)
    }

    pub fn includes(&self, country: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(countries) => countries.iter().any(|name| name == country),
        }
    }
}

/// Rounds to one decimal digit with ties to even, folding `-0.0` into `0.0`.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0 + 0.0
}
