use crate::model::category::{Catalog, Category, Icon};
use crate::model::side_effect::{Severity, SideEffect};
use once_cell::sync::Lazy;

static SIDE_EFFECTS: Lazy<Catalog<SideEffect>> = Lazy::new(build);

/// Side-effect catalog; category ids are the side-effect tab keys.
pub fn side_effect_catalog() -> &'static Catalog<SideEffect> {
    &SIDE_EFFECTS
}

fn build() -> Catalog<SideEffect> {
    Catalog::new(vec![
        Category::new(
            "common",
            "Common Side Effects",
            "Usually mild and may improve over time",
            Icon::Clock,
            vec![
                SideEffect::new(
                    "Nausea",
                    "Feeling sick to your stomach",
                    Severity::Mild,
                    &[
                        "Take medication with food",
                        "Eat small, frequent meals",
                        "Stay hydrated with clear fluids",
                        "Contact doctor if severe or persistent",
                    ],
                )
                .with_causes(&[
                    "Blood pressure medications",
                    "Antibiotics",
                    "Pain medications",
                ]),
                SideEffect::new(
                    "Dizziness",
                    "Feeling lightheaded or unsteady",
                    Severity::Mild,
                    &[
                        "Stand up slowly",
                        "Sit or lie down if feeling dizzy",
                        "Stay hydrated",
                        "Avoid sudden movements",
                    ],
                )
                .with_causes(&["Blood pressure medications", "Diuretics", "Sleep aids"]),
                SideEffect::new(
                    "Dry Mouth",
                    "Reduced saliva production",
                    Severity::Mild,
                    &[
                        "Drink plenty of water",
                        "Chew sugar-free gum",
                        "Use artificial saliva products",
                        "Practice good oral hygiene",
                    ],
                )
                .with_causes(&["Antihistamines", "Antidepressants", "Diuretics"]),
            ],
        ),
        Category::new(
            "serious",
            "Serious Side Effects",
            "Require immediate medical attention",
            Icon::AlertTriangle,
            vec![
                SideEffect::new(
                    "Severe Allergic Reaction",
                    "Life-threatening immune response",
                    Severity::Emergency,
                    &[
                        "Call 911 immediately",
                        "Stop taking the medication",
                        "Use EpiPen if prescribed",
                        "Stay calm and sit upright",
                    ],
                )
                .with_symptoms(&[
                    "Difficulty breathing",
                    "Swelling of face/throat",
                    "Severe rash",
                    "Rapid pulse",
                ]),
                SideEffect::new(
                    "Chest Pain",
                    "Pain or pressure in the chest area",
                    Severity::Emergency,
                    &[
                        "Call 911 immediately",
                        "Stop all activity",
                        "Take prescribed nitroglycerin if available",
                        "Chew aspirin if not allergic",
                    ],
                )
                .with_symptoms(&[
                    "Tightness in chest",
                    "Pain radiating to arm",
                    "Shortness of breath",
                ]),
                SideEffect::new(
                    "Severe Dizziness/Fainting",
                    "Loss of consciousness or severe lightheadedness",
                    Severity::Urgent,
                    &[
                        "Sit or lie down immediately",
                        "Call doctor right away",
                        "Don't drive or operate machinery",
                        "Have someone stay with you",
                    ],
                )
                .with_symptoms(&["Nearly fainting", "Room spinning", "Confusion", "Weakness"]),
            ],
        ),
        Category::new(
            "interactions",
            "Drug Interactions",
            "When medications affect each other",
            Icon::Brain,
            vec![
                SideEffect::new(
                    "Blood Thinner Interactions",
                    "Increased bleeding risk",
                    Severity::Moderate,
                    &[
                        "Monitor for unusual bleeding",
                        "Regular blood tests as ordered",
                        "Tell all doctors about blood thinners",
                        "Avoid certain over-the-counter medications",
                    ],
                )
                .with_causes(&[
                    "Warfarin + Aspirin",
                    "Multiple blood thinners",
                    "Certain antibiotics",
                ])
                .with_symptoms(&["Easy bruising", "Nosebleeds", "Blood in urine/stool"]),
                SideEffect::new(
                    "Sedation from Multiple Medications",
                    "Excessive drowsiness from combined effects",
                    Severity::Moderate,
                    &[
                        "Review all medications with doctor",
                        "Don't drive if drowsy",
                        "Use fall prevention measures",
                        "Consider medication timing adjustments",
                    ],
                )
                .with_causes(&[
                    "Sleep aids + muscle relaxers",
                    "Multiple psychiatric medications",
                ])
                .with_symptoms(&["Extreme drowsiness", "Confusion", "Balance problems"]),
            ],
        ),
    ])
}
