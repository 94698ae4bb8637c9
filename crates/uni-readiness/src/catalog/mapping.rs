use super::normalizer::compact_key;
use crate::assessment::domain::Dimension;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical catalog field a spreadsheet header resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Column {
    Country,
    University,
    RequiredScore,
    Ranking,
    Dimension(Dimension),
}

static HEADER_MAP: OnceLock<HashMap<String, Column>> = OnceLock::new();

pub(crate) fn column_for_header(header: &str) -> Option<Column> {
    let key = compact_key(header);
    if key.starts_with("requiredprofile") {
        return Some(Column::RequiredScore);
    }
    header_map().get(&key).copied()
}

fn header_map() -> &'static HashMap<String, Column> {
    HEADER_MAP.get_or_init(|| {
        const ALIASES: &[(&str, Column)] = &[
            ("Country", Column::Country),
            ("University", Column::University),
            ("QS Ranking", Column::Ranking),
            ("QS Rank", Column::Ranking),
            ("Rank QS", Column::Ranking),
            ("CC (Max 3)", Column::Dimension(Dimension::CoCurricular)),
            ("EC (Max 3)", Column::Dimension(Dimension::ExtraCurricular)),
            ("Internship (Max 2)", Column::Dimension(Dimension::Internship)),
        ];

        let mut map = HashMap::with_capacity(ALIASES.len() + Dimension::COUNT);
        for dimension in Dimension::ordered() {
            map.insert(compact_key(dimension.label()), Column::Dimension(dimension));
        }
        for (alias, column) in ALIASES {
            map.insert(compact_key(alias), *column);
        }
        map
    })
}
