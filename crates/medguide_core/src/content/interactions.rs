use crate::model::category::{Catalog, Category, Icon};
use crate::model::interaction::{Interaction, RiskLevel};
use crate::model::tip::{Priority, SafetyTip};
use once_cell::sync::Lazy;

static INTERACTIONS: Lazy<Catalog<Interaction>> = Lazy::new(build);
static PREVENTION_TIPS: Lazy<Vec<SafetyTip>> = Lazy::new(build_tips);

/// Interaction catalog; category ids are the interaction tab keys.
pub fn interaction_catalog() -> &'static Catalog<Interaction> {
    &INTERACTIONS
}

/// "Prevention & Safety Tips" list on the interactions page.
pub fn prevention_tips() -> &'static [SafetyTip] {
    &PREVENTION_TIPS
}

fn build() -> Catalog<Interaction> {
    Catalog::new(vec![
        Category::new(
            "drug-drug",
            "Drug-Drug Interactions",
            "When two or more medications affect each other",
            Icon::Pill,
            vec![
                Interaction::drug_drug(
                    &["Warfarin", "Aspirin"],
                    RiskLevel::High,
                    "Significantly increased bleeding risk",
                )
                .with_symptoms(&["Easy bruising", "Nosebleeds", "Blood in urine or stool"])
                .with_action("Requires immediate medical supervision and dose adjustment"),
                Interaction::drug_drug(
                    &["Lisinopril", "Potassium supplements"],
                    RiskLevel::Moderate,
                    "High potassium levels (hyperkalemia)",
                )
                .with_symptoms(&["Muscle weakness", "Irregular heartbeat", "Nausea"])
                .with_action("Regular blood tests needed to monitor potassium levels"),
                Interaction::drug_drug(
                    &["Digoxin", "Furosemide"],
                    RiskLevel::Moderate,
                    "Increased digoxin toxicity risk",
                )
                .with_symptoms(&["Nausea", "Vision changes", "Confusion"])
                .with_action("Monitor digoxin levels closely, may need dose adjustment"),
            ],
        ),
        Category::new(
            "drug-food",
            "Drug-Food Interactions",
            "How certain foods can affect medication effectiveness",
            Icon::Apple,
            vec![
                Interaction::drug_food(
                    "Warfarin",
                    "Leafy green vegetables (high in Vitamin K)",
                    RiskLevel::Moderate,
                    "Reduced effectiveness of blood thinner",
                )
                .with_symptoms(&["Increased clotting risk"])
                .with_action("Maintain consistent intake of leafy greens, don't avoid completely"),
                Interaction::drug_food(
                    "Calcium channel blockers",
                    "Grapefruit juice",
                    RiskLevel::High,
                    "Increased medication levels in blood",
                )
                .with_symptoms(&["Dizziness", "Low blood pressure", "Swelling"])
                .with_action("Avoid grapefruit juice completely while taking these medications"),
                Interaction::drug_food(
                    "Levothyroxine",
                    "Calcium-rich foods, coffee",
                    RiskLevel::Moderate,
                    "Reduced absorption of thyroid medication",
                )
                .with_symptoms(&["Fatigue", "Weight gain", "Cold sensitivity"])
                .with_action("Take medication on empty stomach, wait 1 hour before eating"),
            ],
        ),
        Category::new(
            "timing",
            "Timing Considerations",
            "When and how to take medications for best results",
            Icon::Clock,
            vec![
                Interaction::timing(
                    "Statins (cholesterol medications)",
                    "Evening",
                    "Cholesterol production is highest at night",
                    "Maximum effectiveness in lowering cholesterol",
                )
                .with_tips(&["Take with dinner or at bedtime", "Avoid grapefruit juice"]),
                Interaction::timing(
                    "Blood pressure medications",
                    "Morning vs Evening",
                    "Blood pressure naturally varies throughout the day",
                    "Better control of blood pressure spikes",
                )
                .with_tips(&[
                    "Discuss optimal timing with doctor",
                    "Consider taking at bedtime for better overnight control",
                ]),
                Interaction::timing(
                    "Diuretics (water pills)",
                    "Morning",
                    "Prevents nighttime bathroom trips",
                    "Better sleep quality and medication compliance",
                )
                .with_tips(&["Take early in the day", "Stay hydrated but not before bedtime"]),
            ],
        ),
    ])
}

fn build_tips() -> Vec<SafetyTip> {
    vec![
        SafetyTip::new(
            "Keep a Complete Medication List",
            "Include all prescription medications, over-the-counter drugs, vitamins, and supplements",
            Priority::Critical,
        ),
        SafetyTip::new(
            "Use One Pharmacy",
            "Having all prescriptions filled at one pharmacy helps pharmacists catch potential interactions",
            Priority::High,
        ),
        SafetyTip::new(
            "Ask Before Adding New Medications",
            "Always tell doctors and pharmacists about all medications you're currently taking",
            Priority::Critical,
        ),
        SafetyTip::new(
            "Read All Labels and Instructions",
            "Pay attention to timing, food restrictions, and other special instructions",
            Priority::High,
        ),
        SafetyTip::new(
            "Regular Medication Reviews",
            "Schedule periodic reviews with your doctor or pharmacist to assess all medications",
            Priority::High,
        ),
    ]
}
