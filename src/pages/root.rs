//! `/` - send the visitor where their session says

use super::PageContext;
use crate::router::Route;

/// Redirect to the journal list when signed in, else to login
pub fn resolve_root(ctx: &PageContext) -> Route {
    let route = if ctx.session.token().is_some() {
        Route::Journals
    } else {
        Route::Login
    };
    ctx.navigator.push(route.clone());
    route
}
