//! Header Component
//!
//! Brand, greeting, logout and the mobile menu button.

use leptos::*;
use leptos_router::*;

use crate::state::use_session;

pub const BRAND: &str = "MindJournal";

/// Top bar of the app shell
#[component]
pub fn Header(
    /// Called when the mobile menu button is pressed
    on_menu: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let user_name = session.user_name();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear();
        navigate("/login", Default::default());
    };

    view! {
        <header class="bg-white border-b border-slate-200">
            <div class="flex items-center justify-between h-16 px-4">
                <div class="flex items-center space-x-3">
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-slate-100"
                        aria-label="Toggle menu"
                        on:click=move |_| on_menu.call(())
                    >
                        "☰"
                    </button>
                    <A href="/journals" class="flex items-center space-x-2">
                        <span class="text-2xl">"🧠"</span>
                        <span class="text-xl font-bold text-indigo-700">{BRAND}</span>
                    </A>
                </div>

                <div class="flex items-center space-x-4">
                    {move || user_name.get().map(|name| view! {
                        <span class="text-slate-600">{format!("Hi, {}", name)}</span>
                    })}
                    <button
                        class="px-4 py-2 rounded-lg text-slate-600 hover:bg-slate-100 transition-colors"
                        on:click=logout
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}
