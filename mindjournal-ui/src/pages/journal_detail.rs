//! Journal Detail Page
//!
//! One entry with its analysis. Analysis is requested on demand and only
//! ever replaces a missing analysis with text.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiResponse};
use crate::components::{AppLayout, InlineLoading, Loading};
use crate::state::{use_session, Journal};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this entry?";

pub fn analyze_label(analyzing: bool) -> &'static str {
    if analyzing {
        "Analyzing..."
    } else {
        "Analyze Entry"
    }
}

#[component]
pub fn JournalDetail() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());

    let Some(token) = session.token() else {
        return view! { <Redirect path="/login" /> }.into_view();
    };

    let journal = create_rw_signal(None::<Journal>);
    let analyzing = create_rw_signal(false);

    {
        let id = id.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::fetch_journal(&id, &token).await {
                Ok(ApiResponse::Success(entry)) => journal.set(Some(entry)),
                Ok(ApiResponse::Failure { message }) => {
                    web_sys::console::warn_1(&format!("Journal {} unavailable: {:?}", id, message).into());
                    navigate("/journals", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch journal: {}", e).into());
                    navigate("/journals", Default::default());
                }
            }
        });
    }

    let analyze = {
        let id = id.clone();
        move |_| {
            if analyzing.get_untracked() {
                return;
            }
            let Some(token) = session.token() else {
                return;
            };
            analyzing.set(true);
            let id = id.clone();
            spawn_local(async move {
                match api::analyze_journal(&id, &token).await {
                    Ok(ApiResponse::Success(entry)) => journal.set(Some(entry)),
                    Ok(ApiResponse::Failure { message }) => {
                        web_sys::console::warn_1(&format!("Analysis failed: {:?}", message).into());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Analysis request failed: {}", e).into());
                    }
                }
                analyzing.set(false);
            });
        }
    };

    let delete = {
        let id = id.clone();
        let navigate = navigate.clone();
        move |_| {
            let Some(token) = session.token() else {
                return;
            };
            if !window().confirm_with_message(DELETE_PROMPT).unwrap_or(false) {
                return;
            }
            let id = id.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::delete_journal(&id, &token).await {
                    Ok(ApiResponse::Success(_)) => {}
                    Ok(failure) => {
                        web_sys::console::warn_1(
                            &format!("Delete failed: {:?}", failure.message_or("unknown error")).into(),
                        );
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Delete request failed: {}", e).into());
                    }
                }
                navigate("/journals", Default::default());
            });
        }
    };

    let back = move |_| navigate("/journals", Default::default());

    view! {
        <AppLayout>
            <button class="mb-4 text-indigo-600 hover:underline" on:click=back>
                "← Back to Journals"
            </button>

            {move || match journal.get() {
                None => view! { <Loading /> }.into_view(),
                Some(entry) => {
                    let analysis = entry.analysis.clone().filter(|a| !a.is_empty());
                    view! {
                        <article class="bg-white rounded-xl shadow-sm p-6">
                            <div class="flex items-start justify-between mb-4">
                                <div>
                                    <h1 class="text-2xl font-bold">
                                        {entry.mood.emoji()} " " {entry.title.clone()}
                                    </h1>
                                    <p class="text-sm text-slate-500">{entry.local_date()}</p>
                                </div>
                                <button
                                    class="px-3 py-1 text-red-600 hover:bg-red-50 rounded-lg"
                                    on:click=delete.clone()
                                >
                                    "Delete"
                                </button>
                            </div>

                            <p class="whitespace-pre-line text-slate-700 mb-6">{entry.content.clone()}</p>

                            {match analysis {
                                Some(text) => view! {
                                    <section class="p-4 rounded-lg bg-indigo-50">
                                        <h2 class="font-semibold mb-2">"AI Analysis"</h2>
                                        <p class="whitespace-pre-line">{text}</p>
                                    </section>
                                }.into_view(),
                                None => view! {
                                    <section class="p-4 rounded-lg bg-slate-50 text-center">
                                        <p class="text-slate-600 mb-3">
                                            "Get supportive feedback on this entry."
                                        </p>
                                        <button
                                            class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg disabled:opacity-50"
                                            disabled=move || analyzing.get()
                                            on:click=analyze.clone()
                                        >
                                            {move || analyzing.get().then(|| view! { <InlineLoading /> " " })}
                                            {move || analyze_label(analyzing.get())}
                                        </button>
                                    </section>
                                }.into_view(),
                            }}
                        </article>
                    }
                    .into_view()
                }
            }}
        </AppLayout>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_label() {
        assert_eq!(analyze_label(true), "Analyzing...");
        assert_eq!(analyze_label(false), "Analyze Entry");
    }
}
