//! `/resources` - mental-health support contacts

/// One support service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportResource {
    pub name: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub url: &'static str,
}

/// Shown above the list
pub const RESOURCES_NOTICE: &str =
    "If you are in immediate danger, call your local emergency number.";

const RESOURCES: [SupportResource; 4] = [
    SupportResource {
        name: "988 Suicide & Crisis Lifeline",
        description: "Free, confidential support 24/7 in the US.",
        contact: "Call or text 988",
        url: "https://988lifeline.org",
    },
    SupportResource {
        name: "Crisis Text Line",
        description: "Text with a trained crisis counselor.",
        contact: "Text HOME to 741741",
        url: "https://www.crisistextline.org",
    },
    SupportResource {
        name: "NAMI HelpLine",
        description: "Information and referrals for mental health conditions.",
        contact: "1-800-950-6264",
        url: "https://www.nami.org/help",
    },
    SupportResource {
        name: "Find a Helpline",
        description: "Free helplines in over 130 countries.",
        contact: "Search by country",
        url: "https://findahelpline.com",
    },
];

pub fn support_resources() -> &'static [SupportResource] {
    &RESOURCES
}
