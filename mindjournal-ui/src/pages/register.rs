//! Register Page

use leptos::*;
use leptos_router::*;

use super::looks_like_email;
use crate::api::{self, ApiResponse};
use crate::components::InlineLoading;
use crate::state::use_session;

const REGISTRATION_FAILED: &str = "Registration failed";

fn validate(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !looks_like_email(email)? {
        return Err("Please enter a valid email address".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

#[component]
pub fn Register() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (pending, set_pending) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = name.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if let Err(message) = validate(&name, &email, &password) {
            set_error.set(Some(message));
            return;
        }

        set_error.set(None);
        set_pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&name, &email, &password).await {
                Ok(ApiResponse::Success(auth)) => match session.write(&auth.token, &auth.user) {
                    Ok(()) => navigate("/journals", Default::default()),
                    Err(message) => set_error.set(Some(message)),
                },
                Ok(failure) => set_error.set(failure.message_or(REGISTRATION_FAILED)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Register request failed: {}", e).into());
                    set_error.set(Some(REGISTRATION_FAILED.to_string()));
                }
            }
            set_pending.set(false);
        });
    };

    let field = "mt-1 w-full px-3 py-2 border border-slate-300 rounded-lg";

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <form class="w-full max-w-sm bg-white rounded-xl shadow p-8 space-y-4" on:submit=on_submit>
                <h1 class="text-2xl font-bold text-center">"Create your journal"</h1>

                {move || error.get().map(|message| view! {
                    <div class="p-3 rounded-lg bg-red-50 text-red-700 text-sm">{message}</div>
                })}

                <label class="block">
                    <span class="text-sm text-slate-600">"Name"</span>
                    <input
                        type="text"
                        class=field
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-slate-600">"Email"</span>
                    <input
                        type="email"
                        class=field
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>

                <label class="block">
                    <span class="text-sm text-slate-600">"Password"</span>
                    <input
                        type="password"
                        class=field
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button
                    type="submit"
                    class="w-full py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium disabled:opacity-50"
                    disabled=pending
                >
                    {move || if pending.get() {
                        view! { <InlineLoading /> " Creating account..." }.into_view()
                    } else {
                        "Register".into_view()
                    }}
                </button>

                <p class="text-sm text-center text-slate-500">
                    "Already have an account? "
                    <A href="/login" class="text-indigo-600 hover:underline">"Login"</A>
                </p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_checked_first() {
        assert_eq!(validate("", "", ""), Err("Name is required".to_string()));
        assert!(validate("Ada", "ada@example.com", "pw").is_ok());
    }
}
