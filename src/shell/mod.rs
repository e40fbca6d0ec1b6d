//! Navigation shell shared by authenticated pages

pub mod header;
pub mod layout;
pub mod quote;
pub mod sidebar;

pub use header::{Header, BRAND};
pub use layout::{AppLayout, QUOTE_LOADING};
pub use quote::{
    load_quote, Quote, QuoteError, QuoteSource, ZenQuotesClient, QUOTE_LABEL, ZENQUOTES_CREDIT,
    ZENQUOTES_CREDIT_LABEL, ZENQUOTES_URL,
};
pub use sidebar::{nav_items, NavItem, SidebarState};
