use medguide_core::content::{
    interaction_catalog, medicine_catalog, resource_catalog, side_effect_catalog,
};
use medguide_core::{filter, matches, Catalog, Category, Icon, Medicine, Searchable};

fn two_medicine_catalog() -> Catalog<Medicine> {
    Catalog::new(vec![
        Category::new(
            "heart",
            "Heart & Blood Pressure",
            "Medications for cardiovascular health",
            Icon::Heart,
            vec![Medicine::new(
                "Lisinopril",
                "Blood pressure control",
                "5-40mg daily",
                &["Take at the same time each day"],
                &["Dry cough"],
            )],
        ),
        Category::new(
            "brain",
            "Memory & Cognition",
            "Medications for brain health and memory",
            Icon::Brain,
            vec![Medicine::new(
                "Donepezil",
                "Alzheimer's disease treatment",
                "5-10mg daily",
                &["Take in the evening"],
                &["Nausea"],
            )],
        ),
        Category::new("empty", "Nothing Yet", "", Icon::Pill, vec![]),
    ])
}

fn names(catalog: &Catalog<Medicine>) -> Vec<&str> {
    catalog.records().map(|m| m.name.as_str()).collect()
}

const TERMS: &[&str] = &[
    "", "press", "PRESS", "xyz", " ", "a", "e", "Warfarin", "blood", "'", "-", "morning",
    "grapefruit", "dizz", "911",
];

#[test]
fn press_keeps_only_lisinopril() {
    let filtered = filter(&two_medicine_catalog(), "press");
    assert_eq!(names(&filtered), vec!["Lisinopril"]);
    assert_eq!(filtered.categories().len(), 1);
    assert_eq!(filtered.categories()[0].id, "heart");
}

#[test]
fn non_matching_term_returns_no_categories() {
    let filtered = filter(&two_medicine_catalog(), "xyz");
    assert!(filtered.is_empty());
    assert_eq!(filtered.record_count(), 0);
}

#[test]
fn empty_term_returns_catalog_unchanged_including_empty_categories() {
    let catalog = two_medicine_catalog();
    let filtered = filter(&catalog, "");
    assert_eq!(filtered, catalog);
    assert_eq!(filtered.categories().len(), 3);
    assert_eq!(names(&filtered), vec!["Lisinopril", "Donepezil"]);
}

#[test]
fn matching_ignores_case() {
    let catalog = two_medicine_catalog();
    assert_eq!(filter(&catalog, "LISINOPRIL"), filter(&catalog, "lisinopril"));
    assert_eq!(names(&filter(&catalog, "aLzHeImEr")), vec!["Donepezil"]);
}

#[test]
fn only_designated_fields_are_searched() {
    // Dosage and side effects are displayed but not searchable.
    let catalog = two_medicine_catalog();
    assert!(filter(&catalog, "5-40mg").is_empty());
    assert!(filter(&catalog, "Dry cough").is_empty());
}

fn check_properties<R>(catalog: &Catalog<R>)
where
    R: Searchable + Clone + PartialEq + std::fmt::Debug,
{
    for term in TERMS {
        let filtered = filter(catalog, term);

        // Soundness: every kept record matches.
        assert!(filtered.records().all(|record| matches(record, term)));

        // Completeness: every matching source record is kept.
        let expected: Vec<&R> = catalog
            .records()
            .filter(|record| matches(*record, term))
            .collect();
        let kept: Vec<&R> = filtered.records().collect();
        assert_eq!(kept, expected, "term {term:?}");

        // Idempotence.
        assert_eq!(filter(&filtered, term), filtered, "term {term:?}");

        // Order: surviving categories keep their relative order.
        let source_ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        let mut last = None;
        for category in filtered.categories() {
            let position = source_ids.iter().position(|id| *id == category.id).unwrap();
            assert!(last.map_or(true, |previous| previous < position));
            last = Some(position);
        }

        // Non-empty terms never keep empty categories.
        if !term.is_empty() {
            assert!(filtered.categories().iter().all(|c| !c.records.is_empty()));
        }
    }
}

#[test]
fn properties_hold_for_every_static_catalog() {
    check_properties(&two_medicine_catalog());
    check_properties(medicine_catalog());
    check_properties(side_effect_catalog());
    check_properties(interaction_catalog());
    check_properties(resource_catalog());
}

#[test]
fn filtering_does_not_touch_the_static_catalog() {
    let before = medicine_catalog().clone();
    let _ = filter(medicine_catalog(), "press");
    assert_eq!(medicine_catalog(), &before);
}

#[test]
fn interactions_are_searchable_by_food_and_timing() {
    let by_food = filter(interaction_catalog(), "grapefruit");
    assert_eq!(by_food.categories().len(), 1);
    assert_eq!(by_food.categories()[0].id, "drug-food");
    assert_eq!(by_food.records().next().unwrap().title(), "Calcium channel blockers + Grapefruit juice");

    let by_timing = filter(interaction_catalog(), "morning");
    assert_eq!(by_timing.categories()[0].id, "timing");
    assert_eq!(by_timing.record_count(), 2);
}

#[test]
fn warfarin_appears_in_two_interaction_tabs() {
    let filtered = filter(interaction_catalog(), "warfarin");
    let ids: Vec<&str> = filtered.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["drug-drug", "drug-food"]);
}

#[test]
fn side_effects_are_searchable_by_causes_and_symptoms() {
    let filtered = filter(side_effect_catalog(), "diuretics");
    let names: Vec<&str> = filtered.records().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Dizziness", "Dry Mouth"]);

    let filtered = filter(side_effect_catalog(), "nosebleeds");
    assert_eq!(filtered.categories()[0].id, "interactions");
}
