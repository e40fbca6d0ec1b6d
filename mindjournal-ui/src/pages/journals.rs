//! Journal List Page
//!
//! Entries newest first as the backend orders them, plus on-demand weekly
//! insights. An auth failure while loading signs the user out.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiResponse};
use crate::components::{AppLayout, InlineLoading, Loading};
use crate::state::{use_session, Journal};

pub const EMPTY_LIST: &str = "No journal entries yet.";
pub const ANALYZED_MARKER: &str = "✓ Analyzed";
const INSIGHTS_FAILED: &str = "Failed to get insights";
pub const LIST_FAILED: &str = "Failed to load journal entries";

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    Loading,
    Failed,
    Empty,
    Entries,
}

/// A load error wins over any list, so a failed fetch never reads as empty
pub fn list_status(entries: Option<&[Journal]>, load_error: Option<&str>) -> ListStatus {
    match (load_error, entries) {
        (Some(_), _) => ListStatus::Failed,
        (None, None) => ListStatus::Loading,
        (None, Some([])) => ListStatus::Empty,
        (None, Some(_)) => ListStatus::Entries,
    }
}

pub fn insights_label(loading: bool) -> &'static str {
    if loading {
        "Analyzing..."
    } else {
        "Weekly Insights"
    }
}

#[component]
pub fn Journals() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let entries = create_rw_signal(None::<Vec<Journal>>);
    let load_error = create_rw_signal(None::<String>);
    let insights = create_rw_signal(None::<String>);
    let insights_error = create_rw_signal(None::<String>);
    let insights_loading = create_rw_signal(false);

    let Some(token) = session.token() else {
        return view! { <Redirect path="/login" /> }.into_view();
    };

    spawn_local(async move {
        match api::fetch_journals(&token).await {
            Ok(ApiResponse::Success(list)) => entries.set(Some(list)),
            Ok(ApiResponse::Failure { message }) => {
                web_sys::console::warn_1(&format!("Journal list rejected: {:?}", message).into());
                session.clear();
                navigate("/login", Default::default());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch journals: {}", e).into());
                load_error.set(Some(LIST_FAILED.to_string()));
            }
        }
    });

    let request_insights = move |_| {
        if insights_loading.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        insights_loading.set(true);
        insights.set(None);
        insights_error.set(None);
        spawn_local(async move {
            match api::weekly_insights(&token).await {
                Ok(ApiResponse::Success(text)) => insights.set(Some(text)),
                Ok(failure) => insights_error.set(failure.message_or(INSIGHTS_FAILED)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Insights request failed: {}", e).into());
                    insights_error.set(Some(INSIGHTS_FAILED.to_string()));
                }
            }
            insights_loading.set(false);
        });
    };

    let dismiss = move |_| {
        insights.set(None);
        insights_error.set(None);
    };

    view! {
        <AppLayout>
            <div class="flex items-center justify-between mb-6">
                <h1 class="text-3xl font-bold">"My Journal"</h1>
                <div class="flex space-x-2">
                    <button
                        class="px-4 py-2 bg-white border border-indigo-200 text-indigo-700 rounded-lg disabled:opacity-50"
                        disabled=move || insights_loading.get() || entries.with(Option::is_none)
                        on:click=request_insights
                    >
                        {move || insights_loading.get().then(|| view! { <InlineLoading /> " " })}
                        {move || insights_label(insights_loading.get())}
                    </button>
                    <A
                        href="/journals/new"
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg"
                    >
                        "New Entry"
                    </A>
                </div>
            </div>

            {move || insights_error.get().map(|message| view! {
                <div class="mb-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">{message}</div>
            })}

            {move || insights.get().map(|text| view! {
                <section class="mb-6 p-4 rounded-xl bg-indigo-50">
                    <div class="flex items-center justify-between mb-2">
                        <h2 class="font-semibold">"Weekly Insights"</h2>
                        <button class="text-slate-500 hover:text-slate-800" on:click=dismiss>"✕"</button>
                    </div>
                    <p class="whitespace-pre-line text-slate-700">{text}</p>
                </section>
            })}

            {move || {
                let status = entries.with(|list| {
                    load_error.with(|error| list_status(list.as_deref(), error.as_deref()))
                });
                match status {
                    ListStatus::Loading => view! { <Loading /> }.into_view(),
                    ListStatus::Failed => view! {
                        <div class="p-3 rounded-lg bg-red-50 text-red-700 text-sm">
                            {load_error.get()}
                        </div>
                    }.into_view(),
                    ListStatus::Empty => view! {
                        <div class="text-center py-12 text-slate-500">
                            <p class="mb-4">{EMPTY_LIST}</p>
                            <A href="/journals/new" class="text-indigo-600 hover:underline">
                                "Write your first entry"
                            </A>
                        </div>
                    }.into_view(),
                    ListStatus::Entries => view! {
                        <ul class="space-y-3">
                            {entries
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|journal| view! { <EntryRow journal=journal /> })
                                .collect_view()}
                        </ul>
                    }.into_view(),
                }
            }}
        </AppLayout>
    }
    .into_view()
}

#[component]
fn EntryRow(journal: Journal) -> impl IntoView {
    let href = format!("/journals/{}", journal.id);
    let analyzed = journal.is_analyzed();

    view! {
        <li>
            <A href=href class="block p-4 bg-white rounded-xl shadow-sm hover:shadow transition-shadow">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">{journal.mood.emoji()}</span>
                        <span class="font-medium">{journal.title.clone()}</span>
                    </div>
                    <span class="text-sm text-slate-500">{journal.local_date()}</span>
                </div>
                {analyzed.then(|| view! {
                    <span class="mt-2 inline-block text-xs text-green-700">{ANALYZED_MARKER}</span>
                })}
            </A>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal(id: &str) -> Journal {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "title": "T",
            "createdAt": "2025-03-04T10:15:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_load_failure_is_not_an_empty_list() {
        assert_eq!(list_status(None, Some(LIST_FAILED)), ListStatus::Failed);
        assert_eq!(list_status(Some(&[][..]), Some(LIST_FAILED)), ListStatus::Failed);
        assert_eq!(list_status(None, None), ListStatus::Loading);
        assert_eq!(list_status(Some(&[][..]), None), ListStatus::Empty);
        assert_eq!(list_status(Some(&[journal("1")][..]), None), ListStatus::Entries);
    }

    #[test]
    fn test_insights_label() {
        assert_eq!(insights_label(true), "Analyzing...");
        assert_eq!(insights_label(false), "Weekly Insights");
    }
}
