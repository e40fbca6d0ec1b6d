//! Sidebar Component
//!
//! Navigation links and the quote of the day. Collapses off-canvas on
//! narrow screens.

use leptos::*;
use leptos_router::use_location;

use crate::api::{self, Quote};

pub const QUOTE_LABEL: &str = "Quote of the Day";
pub const QUOTE_CREDIT_URL: &str = "https://zenquotes.io/";
pub const QUOTE_CREDIT_LABEL: &str = "ZenQuotes.io";

/// Sidebar link targets
const NAV_ITEMS: [(&str, &str, &str); 2] = [
    ("/journals", "Journals", "📓"),
    ("/resources", "Resources", "🆘"),
];

/// Whether `href` should be highlighted for the current path
pub fn is_active(current: &str, href: &str) -> bool {
    current == href
        || current
            .strip_prefix(href)
            .map_or(false, |rest| rest.starts_with('/'))
}

pub fn quote_text(quote: Option<&Quote>) -> String {
    match quote {
        Some(q) => format!("\"{}\" - {}", q.text, q.author),
        None => "Loading...".to_string(),
    }
}

#[component]
pub fn Sidebar(open: RwSignal<bool>) -> impl IntoView {
    let pathname = use_location().pathname;
    let quote = create_local_resource(|| (), |_| api::fetch_quote());

    let class = move || {
        let base = "fixed md:static inset-y-0 left-0 z-30 w-64 bg-white border-r border-slate-200 p-4 flex flex-col transition-transform md:translate-x-0";
        if open.get() {
            format!("{} translate-x-0", base)
        } else {
            format!("{} -translate-x-full", base)
        }
    };

    view! {
        <aside class=class>
            <nav class="space-y-1">
                {NAV_ITEMS.into_iter().map(|(href, label, icon)| {
                    let link_class = move || {
                        if pathname.with(|path| is_active(path, href)) {
                            "flex items-center space-x-3 px-4 py-2 rounded-lg bg-indigo-50 text-indigo-700 font-medium"
                        } else {
                            "flex items-center space-x-3 px-4 py-2 rounded-lg text-slate-600 hover:bg-slate-100"
                        }
                    };
                    view! {
                        <a href=href class=link_class on:click=move |_| open.set(false)>
                            <span>{icon}</span>
                            <span>{label}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>

            <div class="mt-auto pt-6 border-t border-slate-200">
                <p class="text-xs text-slate-400 mb-2">{QUOTE_LABEL}</p>
                <p class="text-sm italic text-slate-600">
                    {move || quote_text(quote.get().as_ref())}
                </p>
                <p class="text-xs text-slate-400 mt-2">
                    <a
                        href=QUOTE_CREDIT_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hover:underline"
                    >
                        {QUOTE_CREDIT_LABEL}
                    </a>
                </p>
            </div>
        </aside>
    }
}
