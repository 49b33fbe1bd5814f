use medguide_core::content::{interaction_catalog, side_effect_catalog};
use medguide_core::{
    InteractionTab, NavigationError, SideEffectTab, Tab, TabSelection, UnknownTabError, View,
};

#[test]
fn every_view_resolves_from_its_path() {
    for view in View::ALL {
        assert_eq!(View::from_path(view.path()), Ok(view));
    }
}

#[test]
fn paths_match_navigation_bar() {
    let pairs: Vec<(&str, &str)> = View::ALL
        .iter()
        .map(|view| (view.label(), view.path()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Home", "/"),
            ("Medicine Guide", "/medicines"),
            ("Side Effects", "/side-effects"),
            ("Drug Interactions", "/interactions"),
            ("Resources", "/resources"),
            ("Emergency", "/emergency"),
        ]
    );
}

#[test]
fn trailing_slash_is_tolerated() {
    assert_eq!(View::from_path("/emergency/"), Ok(View::Emergency));
}

#[test]
fn unknown_path_is_not_found() {
    let err = View::from_path("/pharmacy").unwrap_err();
    assert_eq!(
        err,
        NavigationError::NotFound {
            path: "/pharmacy".to_string()
        }
    );
    assert!(err.to_string().contains("/pharmacy"));
    assert!(View::from_path("").is_err());
    assert!(View::from_path("/Medicines").is_err());
}

#[test]
fn only_content_lists_are_searchable() {
    assert!(!View::Home.is_searchable());
    assert!(!View::Emergency.is_searchable());
    assert!(View::Medicines.is_searchable());
}

#[test]
fn selections_start_at_fixed_defaults() {
    assert_eq!(
        TabSelection::<SideEffectTab>::new().selected(),
        SideEffectTab::Common
    );
    assert_eq!(
        TabSelection::<InteractionTab>::default().selected(),
        InteractionTab::DrugDrug
    );
}

#[test]
fn select_replaces_active_tab() {
    let mut selection = TabSelection::<SideEffectTab>::new();
    selection.select(SideEffectTab::Serious);
    assert_eq!(selection.selected(), SideEffectTab::Serious);
    selection.select(SideEffectTab::Interactions);
    assert_eq!(selection.selected(), SideEffectTab::Interactions);
}

#[test]
fn unknown_key_leaves_selection_unchanged() {
    let mut selection = TabSelection::<InteractionTab>::new();
    selection.select_key("timing").unwrap();

    let err = selection.select_key("drug-alcohol").unwrap_err();
    assert_eq!(
        err,
        UnknownTabError {
            key: "drug-alcohol".to_string(),
            expected: vec!["drug-drug", "drug-food", "timing"],
        }
    );
    assert_eq!(selection.selected(), InteractionTab::Timing);
}

#[test]
fn tab_keys_match_catalog_category_ids() {
    let side_effect_ids: Vec<&str> = side_effect_catalog()
        .categories()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    let tab_keys: Vec<&str> = SideEffectTab::ALL.iter().map(|tab| tab.key()).collect();
    assert_eq!(side_effect_ids, tab_keys);

    let interaction_ids: Vec<&str> = interaction_catalog()
        .categories()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    let tab_keys: Vec<&str> = InteractionTab::ALL.iter().map(|tab| tab.key()).collect();
    assert_eq!(interaction_ids, tab_keys);
}
