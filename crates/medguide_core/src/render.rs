//! Plain-text page rendering.
//!
//! # Responsibility
//! - Turn content tables and filtered views into readable text pages.
//! - Keep all wording of badges, notes and empty states in one place.
//!
//! # Invariants
//! - Rendering reads content only; it never filters or reorders by itself
//!   beyond the search/tab inputs it is given.

use crate::content::{
    emergency_checklist, emergency_contacts, emergency_scenarios, home_page, interaction_catalog,
    medication_tips, medicine_catalog, prevention_tips, resource_catalog, side_effect_catalog,
    EMERGENCY_NUMBER, POISON_CONTROL_NUMBER, SIDE_EFFECTS_EMERGENCY_NUMBER,
};
use crate::model::category::Category;
use crate::model::interaction::Interaction;
use crate::model::medicine::Medicine;
use crate::model::resource::ResourceItem;
use crate::model::side_effect::SideEffect;
use crate::model::tip::SafetyTip;
use crate::search::filter;
use crate::view::navigation::View;
use crate::view::tabs::{InteractionTab, SideEffectTab, Tab};

const INDENT: &str = "  ";

/// Line-oriented text buffer.
#[derive(Debug, Default)]
struct Page {
    out: String,
}

impl Page {
    fn line(&mut self, text: impl AsRef<str>) {
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn heading(&mut self, text: &str) {
        self.line(text);
        self.line("=".repeat(text.chars().count()));
    }

    fn section(&mut self, text: &str) {
        self.blank();
        self.line(text);
        self.line("-".repeat(text.chars().count()));
    }

    fn bullets(&mut self, depth: usize, items: &[String]) {
        let indent = INDENT.repeat(depth);
        for item in items {
            self.line(format!("{indent}- {item}"));
        }
    }

    fn numbered(&mut self, depth: usize, items: &[String]) {
        let indent = INDENT.repeat(depth);
        for (index, item) in items.iter().enumerate() {
            self.line(format!("{indent}{}. {item}", index + 1));
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders a view with its default tab and no search term.
pub fn render_view(view: View) -> String {
    match view {
        View::Home => render_home(),
        View::Medicines => render_medicines(""),
        View::SideEffects => render_side_effects(SideEffectTab::DEFAULT, ""),
        View::Interactions => render_interactions(InteractionTab::DEFAULT, ""),
        View::Resources => render_resources(""),
        View::Emergency => render_emergency(),
    }
}

pub fn render_home() -> String {
    let home = home_page();
    let mut page = Page::default();
    page.heading(&home.headline);
    page.line(&home.intro);

    page.section("What you will find here");
    for feature in &home.features {
        page.line(format!("* {}: {}", feature.title, feature.description));
    }

    page.section("Explore");
    for view in View::ALL.into_iter().filter(|view| *view != View::Home) {
        page.line(format!("{:<18} {}", view.label(), view.path()));
    }

    page.section("Important Medical Emergency Notice");
    page.line(&home.emergency_notice);
    page.finish()
}

/// Renders the medicine guide filtered by `term`.
pub fn render_medicines(term: &str) -> String {
    let view = View::Medicines;
    let filtered = filter(medicine_catalog(), term);
    let mut page = page_header(view, term);

    for category in filtered.categories() {
        category_header(&mut page, category);
        for medicine in &category.records {
            medicine_entry(&mut page, medicine);
        }
    }

    if !term.is_empty() && filtered.is_empty() {
        no_results(&mut page, "No medications found");
    }
    page.finish()
}

/// Renders the active side-effect tab, filtered by `term`.
pub fn render_side_effects(tab: SideEffectTab, term: &str) -> String {
    let view = View::SideEffects;
    let filtered = filter(side_effect_catalog(), term);
    let mut page = page_header(view, term);
    page.line(format!(
        "For medical emergencies, call {SIDE_EFFECTS_EMERGENCY_NUMBER} immediately"
    ));
    tab_bar(&mut page, tab);

    match filtered.category(tab.key()) {
        Some(category) => {
            category_header(&mut page, category);
            for effect in &category.records {
                side_effect_entry(&mut page, effect);
            }
        }
        None => no_results(&mut page, "No side effects found"),
    }

    page.section("Quick Reference: When to Call");
    page.line(format!(
        "Call {SIDE_EFFECTS_EMERGENCY_NUMBER}: Difficulty breathing, chest pain, loss of consciousness, severe allergic reactions"
    ));
    page.line("Call Doctor Today: Persistent nausea, severe dizziness, unusual bleeding, new symptoms");
    page.line(
        "Monitor & Document: Mild side effects, keep a record and discuss at next appointment",
    );
    page.finish()
}

/// Renders the active interaction tab, filtered by `term`.
pub fn render_interactions(tab: InteractionTab, term: &str) -> String {
    let view = View::Interactions;
    let filtered = filter(interaction_catalog(), term);
    let mut page = page_header(view, term);
    page.line(
        "Always consult with your healthcare provider or pharmacist before making any changes to your medications.",
    );
    tab_bar(&mut page, tab);

    match filtered.category(tab.key()) {
        Some(category) => {
            category_header(&mut page, category);
            for interaction in &category.records {
                interaction_entry(&mut page, interaction);
            }
        }
        None => no_results(&mut page, "No interactions found"),
    }

    page.section("Prevention & Safety Tips");
    tip_list(&mut page, prevention_tips());
    page.finish()
}

/// Renders the resource directory filtered by `term`.
pub fn render_resources(term: &str) -> String {
    let view = View::Resources;
    let filtered = filter(resource_catalog(), term);
    let mut page = page_header(view, term);

    for category in filtered.categories() {
        category_header(&mut page, category);
        for item in &category.records {
            resource_entry(&mut page, item);
        }
    }
    if !term.is_empty() && filtered.is_empty() {
        no_results(&mut page, "No resources found");
    }

    page.section("Medication Safety Tips");
    tip_list(&mut page, medication_tips());

    page.section("In Case of Emergency");
    page.line("If you suspect a medication overdose or serious adverse reaction:");
    page.bullets(
        1,
        &[
            format!("Call {EMERGENCY_NUMBER} for emergencies"),
            format!("Contact Poison Control: {POISON_CONTROL_NUMBER}"),
            "Bring all medication bottles to the hospital".to_string(),
        ],
    );
    page.finish()
}

pub fn render_emergency() -> String {
    let view = View::Emergency;
    let mut page = page_header(view, "");
    page.line(format!(
        "Call {EMERGENCY_NUMBER} | Poison Control {POISON_CONTROL_NUMBER}"
    ));

    page.section("Common Medication Emergencies");
    for scenario in emergency_scenarios() {
        page.blank();
        page.line(format!(
            "{} [{}]",
            scenario.title,
            scenario.severity.badge()
        ));
        page.line(format!("{INDENT}Warning Signs:"));
        page.bullets(2, &scenario.symptoms);
        page.line(format!("{INDENT}Immediate Actions:"));
        page.numbered(2, &scenario.immediate_actions);
        page.line(format!("{INDENT}Medication Note: {}", scenario.medication_note));
    }

    page.section("Emergency Contacts");
    for contact in emergency_contacts() {
        page.line(format!(
            "{}: {} ({})",
            contact.service, contact.number, contact.when
        ));
    }

    page.section("Emergency Preparedness");
    page.line("Keep these items easily accessible for medical emergencies:");
    for item in emergency_checklist() {
        page.line(format!(
            "[{}] {}: {}",
            item.status.label(),
            item.item,
            item.description
        ));
    }
    page.finish()
}

fn page_header(view: View, term: &str) -> Page {
    let mut page = Page::default();
    page.heading(view.title());
    page.line(view.subtitle());
    if !term.is_empty() {
        page.line(format!("Search: \"{term}\""));
    }
    page
}

fn tab_bar<T: Tab>(page: &mut Page, active: T) {
    let tabs = T::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.key())
            } else {
                tab.key().to_string()
            }
        })
        .collect::<Vec<_>>();
    page.blank();
    page.line(format!("Tabs: {}", tabs.join(" | ")));
}

fn category_header<R>(page: &mut Page, category: &Category<R>) {
    page.section(&category.name);
    if !category.description.is_empty() {
        page.line(&category.description);
    }
}

fn medicine_entry(page: &mut Page, medicine: &Medicine) {
    page.blank();
    page.line(format!("{} ({})", medicine.name, medicine.purpose));
    page.line(format!("{INDENT}Typical Dosage: {}", medicine.common_dosage));
    page.line(format!("{INDENT}Important Points:"));
    page.bullets(2, &medicine.key_points);
    page.line(format!(
        "{INDENT}Common Side Effects: {}",
        medicine.side_effects.join(", ")
    ));
    page.line(format!(
        "{INDENT}Remember: Always follow your doctor's instructions. This information is for educational purposes only and should not replace medical advice."
    ));
}

fn side_effect_entry(page: &mut Page, effect: &SideEffect) {
    page.blank();
    page.line(format!("{} [{}]", effect.name, effect.severity.label()));
    page.line(format!("{INDENT}{}", effect.description));
    let (heading, items) = effect.warning_list();
    page.line(format!("{INDENT}{heading}"));
    page.bullets(2, items);
    page.line(format!("{INDENT}What to Do:"));
    page.bullets(2, &effect.what_to_do);
    if effect.severity.is_emergency() {
        page.line(format!(
            "{INDENT}!! Emergency Action Required: This is a medical emergency. Call {EMERGENCY_NUMBER} immediately and do not wait to see if symptoms improve."
        ));
    }
}

fn interaction_entry(page: &mut Page, interaction: &Interaction) {
    page.blank();
    match interaction.risk_level {
        Some(risk) => page.line(format!("{} [{}]", interaction.title(), risk.badge())),
        None => page.line(interaction.title()),
    }
    page.line(format!("{INDENT}Effect: {}", interaction.effect));
    if let Some(reason) = &interaction.reason {
        page.line(format!("{INDENT}Why: {reason}"));
    }
    if !interaction.symptoms.is_empty() {
        page.line(format!("{INDENT}Watch For:"));
        page.bullets(2, &interaction.symptoms);
    }
    if let Some(action) = &interaction.action {
        page.line(format!("{INDENT}What to Do: {action}"));
    }
    if !interaction.tips.is_empty() {
        page.line(format!("{INDENT}Tips:"));
        page.bullets(2, &interaction.tips);
    }
}

fn resource_entry(page: &mut Page, item: &ResourceItem) {
    page.blank();
    page.line(&item.title);
    page.line(format!("{INDENT}{}", item.description));
    if let Some(contact) = &item.contact {
        page.line(format!("{INDENT}Call: {contact}"));
    }
    if let Some(link) = &item.link {
        page.line(format!("{INDENT}Visit Website: {link}"));
    }
    if let Some(action) = item.kind.call_to_action() {
        page.line(format!("{INDENT}{action}"));
    }
}

fn tip_list(page: &mut Page, tips: &[SafetyTip]) {
    for tip in tips {
        page.line(format!("[{}] {}", tip.priority.label(), tip.title));
        page.line(format!("{INDENT}{}", tip.description));
    }
}

fn no_results(page: &mut Page, message: &str) {
    page.blank();
    page.line(message);
    page.line("Try a different search term or browse our categories above");
}
