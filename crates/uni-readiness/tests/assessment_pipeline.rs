use std::io::Cursor;
use std::sync::Arc;
use uni_readiness::assessment::{AnchorKind, RawProfile, Tier};
use uni_readiness::{
    AssessmentRequest, AssessmentService, Catalog, CatalogLoader, CatalogStore,
    ReadinessAssessor, TierPolicy,
};

fn bundled_catalog() -> Catalog {
    CatalogLoader::from_readers(
        Cursor::new(include_str!("../../../data/country_profiles.csv")),
        Cursor::new(include_str!("../../../data/universities.csv")),
    )
    .expect("bundled catalog loads")
}

fn typical_profile() -> RawProfile {
    RawProfile {
        class_9: 86.0,
        class_10: 89.0,
        class_11: 84.0,
        class_12: 88.0,
        sat: 1390.0,
        ap_scores: vec![4.0, 4.0, 3.0],
        co_curricular: 2,
        extra_curricular: 1,
        internships: 1,
        community_service: true,
        research_project: false,
        recommendations: 2,
    }
}

fn perfect_profile() -> RawProfile {
    RawProfile {
        class_9: 100.0,
        class_10: 100.0,
        class_11: 100.0,
        class_12: 100.0,
        sat: 1600.0,
        ap_scores: vec![5.0; 5],
        co_curricular: 3,
        extra_curricular: 3,
        internships: 2,
        community_service: true,
        research_project: true,
        recommendations: 3,
    }
}

fn request(profile: RawProfile, countries: &[&str]) -> AssessmentRequest {
    AssessmentRequest::new(
        profile,
        countries.iter().map(|country| country.to_string()).collect(),
    )
}

#[test]
fn pipeline_produces_bounded_disjoint_tiers() {
    let catalog = bundled_catalog();
    let assessor = ReadinessAssessor::new(&catalog, TierPolicy::standard());

    let assessment = assessor
        .assess(&request(typical_profile(), &["All"]))
        .expect("valid profile");

    assert_eq!(assessment.country_scores().len(), 4);
    assert_eq!(assessment.gap_view().len(), 53);

    let gaps: Vec<f64> = assessment
        .gap_view()
        .records()
        .iter()
        .map(|record| record.gap)
        .collect();
    assert!(gaps.windows(2).all(|pair| pair[0] >= pair[1]));

    let windows = assessment.windows();
    assert!(windows.total() <= 18);
    assert_eq!(windows.ambitious.end, windows.target.start);
    assert_eq!(windows.target.end, windows.safe.start);

    let anchor = assessment.anchor().expect("anchor present");
    assert_eq!(anchor.kind, AnchorKind::ClosestReach);
    assert_eq!(windows.target.end, anchor.index + 1);
    let anchor_gap = gaps[anchor.index];
    assert!(anchor_gap > 0.0);
    assert!(gaps
        .iter()
        .filter(|gap| **gap > 0.0)
        .all(|gap| *gap >= anchor_gap));
}

#[test]
fn every_record_uses_its_own_country_score() {
    let catalog = bundled_catalog();
    let assessment = ReadinessAssessor::new(&catalog, TierPolicy::standard())
        .assess(&request(typical_profile(), &["UK", "Canada"]))
        .expect("valid profile");

    let scores = assessment.country_scores();
    assert_eq!(scores.len(), 2);
    for record in assessment.gap_view().records() {
        assert!(record.country == "UK" || record.country == "Canada");
        assert_eq!(Some(record.achieved_score), scores.get(&record.country));
    }
    // 14 UK rows plus 8 scorable Canadian rows.
    assert_eq!(assessment.gap_view().len(), 22);
}

#[test]
fn perfect_profile_exercises_closest_match_fallback() {
    let catalog = bundled_catalog();
    let assessment = ReadinessAssessor::new(&catalog, TierPolicy::standard())
        .assess(&request(perfect_profile(), &["All"]))
        .expect("valid profile");

    assert!(assessment
        .country_scores()
        .entries()
        .iter()
        .all(|entry| entry.score == 100.0));
    assert!(assessment
        .gap_view()
        .records()
        .iter()
        .all(|record| record.gap <= 0.0));

    let anchor = assessment.anchor().expect("anchor present");
    assert_eq!(anchor.kind, AnchorKind::ClosestMatch);
    assert_eq!(anchor.index, 0);
    assert_eq!(
        assessment.target()[0].university,
        "Massachusetts Institute of Technology"
    );
    assert!(assessment.ambitious().is_empty());
    assert_eq!(assessment.target().len(), 1);
    assert_eq!(assessment.safe().len(), 6);
}

#[test]
fn minimal_profile_has_no_safe_universities() {
    let catalog = bundled_catalog();
    let assessment = ReadinessAssessor::new(&catalog, TierPolicy::standard())
        .assess(&request(RawProfile::default(), &["USA"]))
        .expect("defaults are valid");

    assert_eq!(assessment.country_scores().get("USA"), Some(5.0));
    assert_eq!(assessment.gap_view().len(), 22);

    let anchor = assessment.anchor().expect("anchor present");
    assert_eq!(anchor.kind, AnchorKind::ClosestReach);
    assert_eq!(anchor.index, 21);
    assert_eq!(assessment.windows().target, 16..22);
    assert_eq!(assessment.windows().ambitious, 10..16);
    assert!(assessment.safe().is_empty());
    assert_eq!(
        assessment.target().last().map(|record| record.university.as_str()),
        Some("University of Oregon")
    );
}

#[test]
fn empty_or_unknown_selection_is_a_normal_empty_result() {
    let catalog = bundled_catalog();
    let assessor = ReadinessAssessor::new(&catalog, TierPolicy::standard());

    for countries in [&[][..], &["Narnia"][..]] {
        let assessment = assessor
            .assess(&request(typical_profile(), countries))
            .expect("valid profile");

        assert!(assessment.is_empty());
        assert!(assessment.country_scores().is_empty());
        assert!(assessment.anchor().is_none());
        for tier in Tier::ordered() {
            assert!(assessment.tier(tier).is_empty());
        }
        assert!(assessment.summary().message.is_some());
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    let catalog = bundled_catalog();
    let assessor = ReadinessAssessor::new(&catalog, TierPolicy::standard());
    let request = request(typical_profile(), &["USA", "Australia"]);

    let first = assessor.assess(&request).expect("first run");
    let second = assessor.assess(&request).expect("second run");

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.summary()).expect("serialize"),
        serde_json::to_string(&second.summary()).expect("serialize")
    );
}

#[test]
fn in_flight_assessments_keep_their_catalog_snapshot() {
    let store = Arc::new(CatalogStore::new(bundled_catalog()));
    let service = AssessmentService::new(Arc::clone(&store), TierPolicy::standard());
    let request = request(typical_profile(), &["UK"]);
    let before = service.assess(&request).expect("before reload");

    let snapshot = store.snapshot();
    store.replace(Catalog::default());

    let after = service.assess(&request).expect("after reload");
    assert!(after.is_empty());
    assert_eq!(
        ReadinessAssessor::new(&snapshot, TierPolicy::standard())
            .assess(&request)
            .expect("old snapshot"),
        before
    );
}
