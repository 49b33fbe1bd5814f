use crate::model::category::{Catalog, Category, Icon};
use crate::model::medicine::Medicine;
use once_cell::sync::Lazy;

static MEDICINES: Lazy<Catalog<Medicine>> = Lazy::new(build);

/// Medicine guide catalog, grouped by body system.
pub fn medicine_catalog() -> &'static Catalog<Medicine> {
    &MEDICINES
}

fn build() -> Catalog<Medicine> {
    Catalog::new(vec![
        Category::new(
            "heart",
            "Heart & Blood Pressure",
            "Medications for cardiovascular health",
            Icon::Heart,
            vec![
                Medicine::new(
                    "Lisinopril",
                    "Blood pressure control",
                    "5-40mg daily",
                    &[
                        "Take at the same time each day",
                        "Monitor blood pressure regularly",
                    ],
                    &["Dry cough", "Dizziness", "Fatigue"],
                ),
                Medicine::new(
                    "Metoprolol",
                    "Heart rate and blood pressure",
                    "25-200mg twice daily",
                    &["Don't stop suddenly", "Take with meals"],
                    &["Slow heart rate", "Cold hands/feet", "Fatigue"],
                ),
            ],
        ),
        Category::new(
            "brain",
            "Memory & Cognition",
            "Medications for brain health and memory",
            Icon::Brain,
            vec![
                Medicine::new(
                    "Donepezil",
                    "Alzheimer's disease treatment",
                    "5-10mg daily",
                    &["Take in the evening", "May take weeks to show effect"],
                    &["Nausea", "Diarrhea", "Sleep problems"],
                ),
                Medicine::new(
                    "Memantine",
                    "Moderate to severe dementia",
                    "5-20mg daily",
                    &["Start with low dose", "Take with or without food"],
                    &["Headache", "Confusion", "Constipation"],
                ),
            ],
        ),
        Category::new(
            "bone",
            "Bone Health",
            "Medications for osteoporosis and joint health",
            Icon::Bone,
            vec![Medicine::new(
                "Alendronate",
                "Osteoporosis prevention/treatment",
                "70mg weekly",
                &[
                    "Take on empty stomach",
                    "Stay upright for 30 minutes after",
                ],
                &["Heartburn", "Stomach upset", "Jaw problems (rare)"],
            )],
        ),
    ])
}
