use crate::model::category::Icon;
use crate::model::emergency::{
    ChecklistItem, ChecklistStatus, EmergencyContact, EmergencyScenario, ScenarioSeverity,
};
use once_cell::sync::Lazy;

static SCENARIOS: Lazy<Vec<EmergencyScenario>> = Lazy::new(build_scenarios);
static CONTACTS: Lazy<Vec<EmergencyContact>> = Lazy::new(build_contacts);
static CHECKLIST: Lazy<Vec<ChecklistItem>> = Lazy::new(build_checklist);

pub fn emergency_scenarios() -> &'static [EmergencyScenario] {
    &SCENARIOS
}

pub fn emergency_contacts() -> &'static [EmergencyContact] {
    &CONTACTS
}

/// Items to keep accessible for medical emergencies.
pub fn emergency_checklist() -> &'static [ChecklistItem] {
    &CHECKLIST
}

fn build_scenarios() -> Vec<EmergencyScenario> {
    vec![
        EmergencyScenario::new(
            "Severe Allergic Reaction (Anaphylaxis)",
            Icon::AlertTriangle,
            ScenarioSeverity::Critical,
            &[
                "Difficulty breathing or wheezing",
                "Swelling of face, lips, tongue, or throat",
                "Rapid, weak pulse",
                "Skin rash, hives, or severe itching",
                "Nausea, vomiting, or diarrhea",
                "Dizziness or fainting",
            ],
            &[
                "Call 911 immediately",
                "Use EpiPen if prescribed (inject into outer thigh)",
                "Keep person lying flat with legs elevated",
                "Loosen tight clothing",
                "Stay with person until help arrives",
                "Be prepared to perform CPR if needed",
            ],
            "Stop taking the suspected medication immediately",
        ),
        EmergencyScenario::new(
            "Medication Overdose",
            Icon::Pill,
            ScenarioSeverity::Critical,
            &[
                "Confusion or altered mental state",
                "Difficulty breathing",
                "Extreme drowsiness or loss of consciousness",
                "Nausea and vomiting",
                "Seizures",
                "Irregular heartbeat",
            ],
            &[
                "Call 911 immediately",
                "Call Poison Control: 1-800-222-1222",
                "Gather all medication bottles",
                "Do NOT induce vomiting unless instructed",
                "Keep person awake if possible",
                "Monitor breathing and pulse",
            ],
            "Bring all medication containers to the hospital",
        ),
        EmergencyScenario::new(
            "Severe Side Effects",
            Icon::Heart,
            ScenarioSeverity::Urgent,
            &[
                "Chest pain or pressure",
                "Severe dizziness or fainting",
                "Difficulty breathing",
                "Severe stomach pain",
                "Blood in vomit or stool",
                "Severe skin reaction or rash",
            ],
            &[
                "Call 911 for chest pain or breathing problems",
                "Call doctor immediately for other severe symptoms",
                "Stop taking the medication",
                "Record time of last dose",
                "Note all symptoms and timing",
                "Prepare medication list for medical team",
            ],
            "Document which medication may be causing the reaction",
        ),
    ]
}

fn build_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new(
            "Emergency Services",
            "911",
            "Life-threatening emergencies",
            Icon::Phone,
        ),
        EmergencyContact::new(
            "Poison Control Center",
            "1-800-222-1222",
            "Medication overdose or poisoning",
            Icon::Shield,
        ),
        EmergencyContact::new(
            "Your Doctor",
            "Keep this handy",
            "Urgent medication concerns",
            Icon::Heart,
        ),
        EmergencyContact::new(
            "Your Pharmacy",
            "Keep this handy",
            "Medication questions or concerns",
            Icon::Pill,
        ),
    ]
}

fn build_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new(
            "Current Medication List",
            "Keep an updated list of all medications with dosages",
            ChecklistStatus::Essential,
        ),
        ChecklistItem::new(
            "Emergency Contact Information",
            "Doctor, pharmacy, emergency contact, and insurance info",
            ChecklistStatus::Essential,
        ),
        ChecklistItem::new(
            "Allergy Information",
            "List all known drug allergies and previous reactions",
            ChecklistStatus::Essential,
        ),
        ChecklistItem::new(
            "Medical History Summary",
            "Key medical conditions and recent hospitalizations",
            ChecklistStatus::Important,
        ),
        ChecklistItem::new(
            "Insurance Cards",
            "Health insurance and Medicare cards",
            ChecklistStatus::Important,
        ),
        ChecklistItem::new(
            "EpiPen (if prescribed)",
            "Always carry if you have severe allergies",
            ChecklistStatus::Critical,
        ),
    ]
}
