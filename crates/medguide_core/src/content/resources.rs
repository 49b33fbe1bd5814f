use crate::model::category::{Catalog, Category, Icon};
use crate::model::resource::{ResourceItem, ResourceKind};
use crate::model::tip::{Priority, SafetyTip};
use once_cell::sync::Lazy;

static RESOURCES: Lazy<Catalog<ResourceItem>> = Lazy::new(build);
static MEDICATION_TIPS: Lazy<Vec<SafetyTip>> = Lazy::new(build_tips);

pub fn resource_catalog() -> &'static Catalog<ResourceItem> {
    &RESOURCES
}

/// "Medication Safety Tips" sidebar on the resources page.
pub fn medication_tips() -> &'static [SafetyTip] {
    &MEDICATION_TIPS
}

fn build() -> Catalog<ResourceItem> {
    Catalog::new(vec![
        Category::new(
            "emergency-contacts",
            "Emergency Contacts",
            "",
            Icon::Phone,
            vec![
                ResourceItem::new(
                    "Emergency Services",
                    "For life-threatening emergencies",
                    ResourceKind::Emergency,
                )
                .with_contact("911"),
                ResourceItem::new(
                    "Poison Control Center",
                    "24/7 poison emergency helpline",
                    ResourceKind::Urgent,
                )
                .with_contact("1-800-222-1222"),
                ResourceItem::new(
                    "Medicare Drug Plan Helpline",
                    "Medicare prescription drug benefit questions",
                    ResourceKind::Support,
                )
                .with_contact("1-800-MEDICARE"),
            ],
        ),
        Category::new(
            "educational",
            "Educational Resources",
            "",
            Icon::BookOpen,
            vec![
                ResourceItem::new(
                    "National Institute on Aging",
                    "Comprehensive health information for older adults",
                    ResourceKind::Website,
                )
                .with_link("https://www.nia.nih.gov"),
                ResourceItem::new(
                    "FDA Drug Safety Communications",
                    "Latest safety information about medications",
                    ResourceKind::Website,
                )
                .with_link("https://www.fda.gov/drugs/drug-safety-and-availability"),
                ResourceItem::new(
                    "Medication Safety Guide",
                    "Downloadable PDF guide for safe medication use",
                    ResourceKind::Download,
                ),
            ],
        ),
        Category::new(
            "support",
            "Support Organizations",
            "",
            Icon::Users,
            vec![
                ResourceItem::new(
                    "AARP Health Resources",
                    "Health tools and information for seniors",
                    ResourceKind::Website,
                )
                .with_link("https://www.aarp.org/health"),
                ResourceItem::new(
                    "National Council on Aging",
                    "Benefits and resources for older adults",
                    ResourceKind::Website,
                )
                .with_link("https://www.ncoa.org"),
                ResourceItem::new(
                    "Local Area Agency on Aging",
                    "Find local services and support in your community",
                    ResourceKind::Local,
                ),
            ],
        ),
    ])
}

fn build_tips() -> Vec<SafetyTip> {
    vec![
        SafetyTip::new(
            "Keep a Medication List",
            "Maintain an up-to-date list of all medications, including dosages and prescribing doctors",
            Priority::High,
        ),
        SafetyTip::new(
            "Use a Pill Organizer",
            "Weekly pill organizers help ensure you don't miss doses or take extra medications",
            Priority::High,
        ),
        SafetyTip::new(
            "Set Reminders",
            "Use phone alarms, apps, or ask family members to help remind you about medication times",
            Priority::Medium,
        ),
        SafetyTip::new(
            "Regular Medication Reviews",
            "Schedule annual reviews with your doctor or pharmacist to assess all medications",
            Priority::High,
        ),
        SafetyTip::new(
            "Store Medications Properly",
            "Keep medications in original containers, away from heat and moisture",
            Priority::Medium,
        ),
        SafetyTip::new(
            "Know Your Pharmacist",
            "Build a relationship with your pharmacist - they're a valuable resource for medication questions",
            Priority::Low,
        ),
    ]
}
