//! Resources Page
//!
//! Mental-health support contacts.

use leptos::*;

use crate::components::AppLayout;

pub const RESOURCES_NOTICE: &str =
    "If you are in immediate danger, call your local emergency number.";

/// (name, description, contact, url)
const RESOURCES: [(&str, &str, &str, &str); 4] = [
    (
        "988 Suicide & Crisis Lifeline",
        "Free, confidential support 24/7 in the US.",
        "Call or text 988",
        "https://988lifeline.org",
    ),
    (
        "Crisis Text Line",
        "Text with a trained crisis counselor.",
        "Text HOME to 741741",
        "https://www.crisistextline.org",
    ),
    (
        "NAMI HelpLine",
        "Information and referrals for mental health conditions.",
        "1-800-950-6264",
        "https://www.nami.org/help",
    ),
    (
        "Find a Helpline",
        "Free helplines in over 130 countries.",
        "Search by country",
        "https://findahelpline.com",
    ),
];

#[component]
pub fn Resources() -> impl IntoView {
    view! {
        <AppLayout>
            <h1 class="text-3xl font-bold mb-2">"Support Resources"</h1>
            <p class="mb-6 p-3 rounded-lg bg-amber-50 text-amber-800">{RESOURCES_NOTICE}</p>
            <div class="grid gap-4 md:grid-cols-2">
                {RESOURCES.into_iter().map(|(name, description, contact, url)| view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="block p-4 bg-white rounded-xl shadow-sm hover:shadow"
                    >
                        <h2 class="font-semibold">{name}</h2>
                        <p class="text-sm text-slate-600">{description}</p>
                        <p class="mt-2 text-indigo-700 font-medium">{contact}</p>
                    </a>
                }).collect_view()}
            </div>
        </AppLayout>
    }
}
