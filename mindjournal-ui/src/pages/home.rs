//! `/` - send the visitor to the list or the login form

use leptos::*;
use leptos_router::*;

use crate::state::use_session;

#[component]
pub fn Home() -> impl IntoView {
    let session = use_session();
    let target = if session.token().is_some() {
        "/journals"
    } else {
        "/login"
    };

    view! { <Redirect path=target /> }
}
