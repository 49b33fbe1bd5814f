use medguide_core::content::{
    emergency_checklist, emergency_contacts, emergency_scenarios, home_page, interaction_catalog,
    medication_tips, medicine_catalog, prevention_tips, resource_catalog, side_effect_catalog,
};
use medguide_core::{
    ChecklistStatus, InteractionSubject, ResourceKind, ScenarioSeverity, Severity,
};

#[test]
fn medicine_categories_are_in_display_order() {
    let catalog = medicine_catalog();
    let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["heart", "brain", "bone"]);
    assert_eq!(catalog.record_count(), 5);

    let names: Vec<&str> = catalog.records().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Lisinopril", "Metoprolol", "Donepezil", "Memantine", "Alendronate"]
    );
}

#[test]
fn static_tables_are_shared_instances() {
    assert!(std::ptr::eq(medicine_catalog(), medicine_catalog()));
    assert!(std::ptr::eq(emergency_scenarios(), emergency_scenarios()));
}

#[test]
fn serious_side_effects_are_urgent_or_emergency() {
    let serious = side_effect_catalog().category("serious").unwrap();
    assert_eq!(serious.records.len(), 3);
    assert!(serious
        .records
        .iter()
        .all(|effect| effect.severity >= Severity::Urgent));

    let common = side_effect_catalog().category("common").unwrap();
    assert!(common
        .records
        .iter()
        .all(|effect| effect.severity == Severity::Mild));
}

#[test]
fn interaction_subjects_match_their_tab() {
    let catalog = interaction_catalog();
    for category in catalog.categories() {
        for interaction in &category.records {
            let expected = match &interaction.subject {
                InteractionSubject::DrugDrug { .. } => "drug-drug",
                InteractionSubject::DrugFood { .. } => "drug-food",
                InteractionSubject::Timing { .. } => "timing",
            };
            assert_eq!(category.id, expected);
        }
    }

    let timing = catalog.category("timing").unwrap();
    assert!(timing
        .records
        .iter()
        .all(|interaction| interaction.risk_level.is_none() && !interaction.tips.is_empty()));
}

#[test]
fn resource_items_expose_their_call_to_action() {
    let catalog = resource_catalog();
    assert_eq!(catalog.record_count(), 9);

    let contacts = catalog.category("emergency-contacts").unwrap();
    assert!(contacts.records.iter().all(|item| item.contact.is_some()));

    let downloads: Vec<&str> = catalog
        .records()
        .filter(|item| item.kind == ResourceKind::Download)
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(downloads, vec!["Medication Safety Guide"]);
    assert_eq!(ResourceKind::Local.call_to_action(), Some("Find Local Services"));
    assert_eq!(ResourceKind::Website.call_to_action(), None);
}

#[test]
fn emergency_page_tables() {
    let scenarios = emergency_scenarios();
    assert_eq!(scenarios.len(), 3);
    assert!(scenarios.iter().all(|s| s.immediate_actions.len() == 6));
    assert_eq!(scenarios[2].severity, ScenarioSeverity::Urgent);
    assert_eq!(ScenarioSeverity::Critical.badge(), "CRITICAL");

    assert_eq!(emergency_contacts()[1].number, "1-800-222-1222");

    let critical: Vec<&str> = emergency_checklist()
        .iter()
        .filter(|item| item.status == ChecklistStatus::Critical)
        .map(|item| item.item.as_str())
        .collect();
    assert_eq!(critical, vec!["EpiPen (if prescribed)"]);
}

#[test]
fn tip_lists_are_populated() {
    assert_eq!(prevention_tips().len(), 5);
    assert_eq!(medication_tips().len(), 6);
    assert_eq!(home_page().features.len(), 4);
}

#[test]
fn content_serializes_with_snake_case_labels() {
    let serious = side_effect_catalog().category("serious").unwrap();
    let json = serde_json::to_value(serious).unwrap();
    assert_eq!(json["id"], "serious");
    assert_eq!(json["icon"], "alert-triangle");
    assert_eq!(json["records"][0]["severity"], "emergency");
    assert!(json["records"][0].get("causes").is_none());

    let drug_drug = interaction_catalog().category("drug-drug").unwrap();
    let json = serde_json::to_value(&drug_drug.records[0]).unwrap();
    assert_eq!(json["subject"]["kind"], "drug_drug");
    assert_eq!(json["risk_level"], "high");
}
