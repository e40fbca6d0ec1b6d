//! New Journal Page
//!
//! Title, mood and content, with optional dictation through the browser's
//! speech recognition. Dictated text is appended, never replacing what was
//! typed.

use js_sys::{Array, Function, Reflect};
use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiResponse};
use crate::components::{AppLayout, InlineLoading};
use crate::state::{self, use_session, Mood};

const CREATE_FAILED: &str = "Failed to create journal";
pub const UNSUPPORTED_NOTICE: &str = "Speech recognition is not supported in this environment.";
pub const PERMISSION_NOTICE: &str = "Microphone access was denied";

/// Join dictated text onto the content with a single space
pub fn append_transcript(content: &str, transcript: &str) -> String {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return content.to_string();
    }
    if content.trim_end().is_empty() {
        return transcript.to_string();
    }
    format!("{} {}", content.trim_end(), transcript)
}

fn validate(title: &str, content: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if content.trim().is_empty() {
        return Err("Content is required".to_string());
    }
    Ok(())
}

/// `SpeechRecognition` or its prefixed variant
fn recognition_constructor() -> Option<Function> {
    let window = web_sys::window()?;
    ["SpeechRecognition", "webkitSpeechRecognition"]
        .into_iter()
        .find_map(|name| {
            Reflect::get(&window, &JsValue::from_str(name))
                .ok()
                .and_then(|ctor| ctor.dyn_into::<Function>().ok())
        })
}

/// Final transcript of the newest result in a `result` event
fn transcript_of(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &"results".into()).ok()?;
    let index = Reflect::get(event, &"resultIndex".into()).ok()?.as_f64()? as u32;
    let result = Reflect::get_u32(&results, index).ok()?;
    let alternative = Reflect::get_u32(&result, 0).ok()?;
    Reflect::get(&alternative, &"transcript".into()).ok()?.as_string()
}

fn call_method(target: &JsValue, name: &str) -> Result<(), JsValue> {
    let method: Function = Reflect::get(target, &name.into())?.dyn_into()?;
    method.call0(target).map(|_| ())
}

/// Build a recognizer wired to the page signals
fn create_recognizer(
    ctor: &Function,
    content: RwSignal<String>,
    listening: RwSignal<bool>,
    notice: RwSignal<Option<String>>,
) -> Result<JsValue, JsValue> {
    let recognizer = Reflect::construct(ctor, &Array::new())?;
    Reflect::set(&recognizer, &"continuous".into(), &JsValue::TRUE)?;
    Reflect::set(&recognizer, &"interimResults".into(), &JsValue::FALSE)?;
    Reflect::set(&recognizer, &"lang".into(), &"en-US".into())?;

    let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        if let Some(text) = transcript_of(&event) {
            content.update(|c| *c = append_transcript(c, &text));
        }
    });
    Reflect::set(&recognizer, &"onresult".into(), on_result.as_ref())?;
    on_result.forget();

    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let code = Reflect::get(&event, &"error".into())
            .ok()
            .and_then(|e| e.as_string())
            .unwrap_or_default();
        let message = if code == "not-allowed" {
            PERMISSION_NOTICE.to_string()
        } else {
            format!("Speech recognition error: {}", code)
        };
        notice.set(Some(message));
        listening.set(false);
    });
    Reflect::set(&recognizer, &"onerror".into(), on_error.as_ref())?;
    on_error.forget();

    let on_end = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| listening.set(false));
    Reflect::set(&recognizer, &"onend".into(), on_end.as_ref())?;
    on_end.forget();

    Ok(recognizer)
}

#[component]
pub fn NewJournal() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let title = create_rw_signal(String::new());
    let content = create_rw_signal(String::new());
    let mood = create_rw_signal(Mood::default());
    let error = create_rw_signal(None::<String>);
    let pending = create_rw_signal(false);

    let listening = create_rw_signal(false);
    let notice = create_rw_signal(None::<String>);
    let recognizer = store_value(None::<JsValue>);

    let toggle_dictation = move |_| {
        if listening.get_untracked() {
            recognizer.with_value(|r| {
                if let Some(r) = r {
                    let _ = call_method(r, "stop");
                }
            });
            listening.set(false);
            return;
        }

        let Some(ctor) = recognition_constructor() else {
            notice.set(Some(UNSUPPORTED_NOTICE.to_string()));
            return;
        };
        if recognizer.with_value(Option::is_none) {
            match create_recognizer(&ctor, content, listening, notice) {
                Ok(r) => recognizer.set_value(Some(r)),
                Err(e) => {
                    web_sys::console::error_1(&e);
                    notice.set(Some(UNSUPPORTED_NOTICE.to_string()));
                    return;
                }
            }
        }

        let started = recognizer.with_value(|r| match r {
            Some(r) => call_method(r, "start"),
            None => Ok(()),
        });
        match started {
            Ok(()) => {
                notice.set(None);
                listening.set(true);
            }
            Err(e) => {
                web_sys::console::error_1(&e);
                notice.set(Some("Could not start speech recognition".to_string()));
            }
        }
    };

    on_cleanup(move || {
        if listening.get_untracked() {
            recognizer.with_value(|r| {
                if let Some(r) = r {
                    let _ = call_method(r, "stop");
                }
            });
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let entry = state::NewJournal {
            title: title.get_untracked(),
            content: content.get_untracked(),
            mood: mood.get_untracked(),
        };
        if let Err(message) = validate(&entry.title, &entry.content) {
            error.set(Some(message));
            return;
        }
        let Some(token) = session.token() else {
            navigate("/login", Default::default());
            return;
        };

        error.set(None);
        pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_journal(&entry, &token).await {
                Ok(ApiResponse::Success(journal)) => {
                    navigate(&format!("/journals/{}", journal.id), Default::default());
                }
                Ok(failure) => error.set(failure.message_or(CREATE_FAILED)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Create request failed: {}", e).into());
                    error.set(Some(CREATE_FAILED.to_string()));
                }
            }
            pending.set(false);
        });
    };

    let field = "mt-1 w-full px-3 py-2 border border-slate-300 rounded-lg";

    view! {
        <AppLayout>
            <h1 class="text-3xl font-bold mb-6">"New Entry"</h1>

            <form class="bg-white rounded-xl shadow-sm p-6 space-y-4" on:submit=on_submit>
                {move || error.get().map(|message| view! {
                    <div class="p-3 rounded-lg bg-red-50 text-red-700 text-sm">{message}</div>
                })}

                <label class="block">
                    <span class="text-sm text-slate-600">"Title"</span>
                    <input
                        type="text"
                        class=field
                        prop:value=title
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-slate-600">"How are you feeling?"</span>
                    <select
                        class=field
                        prop:value=move || mood.get().as_str()
                        on:change=move |ev| mood.set(Mood::from_value(&event_target_value(&ev)))
                    >
                        {Mood::ALL.into_iter().map(|m| view! {
                            <option value=m.as_str() selected=move || mood.get() == m>
                                {format!("{} {}", m.emoji(), m.label())}
                            </option>
                        }).collect_view()}
                    </select>
                </label>

                <label class="block">
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-slate-600">"What's on your mind?"</span>
                        <button
                            type="button"
                            class="text-sm px-3 py-1 rounded-lg border border-slate-300 hover:bg-slate-50"
                            on:click=toggle_dictation
                        >
                            {move || if listening.get() { "⏹ Stop" } else { "🎤 Dictate" }}
                        </button>
                    </div>
                    <textarea
                        rows="10"
                        class=field
                        prop:value=content
                        on:input=move |ev| content.set(event_target_value(&ev))
                    />
                </label>

                {move || notice.get().map(|message| view! {
                    <p class="text-sm text-amber-700">{message}</p>
                })}

                <button
                    type="submit"
                    class="px-6 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium disabled:opacity-50"
                    disabled=pending
                >
                    {move || if pending.get() {
                        view! { <InlineLoading /> " Saving..." }.into_view()
                    } else {
                        "Save Entry".into_view()
                    }}
                </button>
            </form>
        </AppLayout>
    }
}
