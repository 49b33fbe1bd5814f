use crate::model::category::Icon;
use crate::model::home::{Feature, HomePage};
use once_cell::sync::Lazy;

static HOME: Lazy<HomePage> = Lazy::new(build);

pub fn home_page() -> &'static HomePage {
    &HOME
}

fn build() -> HomePage {
    HomePage {
        headline: "Safe Medicine Use for Seniors".to_string(),
        intro: "Get reliable, easy-to-understand information about medications, side effects, \
                and drug interactions specifically designed for seniors and their caregivers."
            .to_string(),
        features: vec![
            Feature::new(
                "Safe Medication Use",
                "Learn about proper dosages and timing for your medications",
                Icon::Heart,
            ),
            Feature::new(
                "Side Effect Awareness",
                "Understand what to watch for and when to contact your doctor",
                Icon::Shield,
            ),
            Feature::new(
                "Age-Appropriate Care",
                "Information specifically tailored for older adults",
                Icon::Users,
            ),
            Feature::new(
                "Easy-to-Understand",
                "Clear, simple explanations without medical jargon",
                Icon::BookOpen,
            ),
        ],
        emergency_notice: "If you're experiencing a medical emergency, call 911 immediately. \
                           This guide is for educational purposes only and should not replace \
                           professional medical advice."
            .to_string(),
    }
}
