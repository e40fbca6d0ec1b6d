//! App Root Component
//!
//! Routing and the session provider.

use leptos::*;
use leptos_router::*;

use crate::pages::{Home, JournalDetail, Journals, Login, NewJournal, Register, Resources};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-50 text-slate-800">
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="/journals" view=Journals />
                    <Route path="/journals/new" view=NewJournal />
                    <Route path="/journals/:id" view=JournalDetail />
                    <Route path="/resources" view=Resources />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to MindJournal"
            </A>
        </div>
    }
}
