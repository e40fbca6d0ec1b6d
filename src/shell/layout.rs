//! Authenticated page layout: header, sidebar and quote panel around the
//! page content

use super::header::Header;
use super::quote::{
    load_quote, Quote, QuoteSource, QUOTE_LABEL, ZENQUOTES_CREDIT, ZENQUOTES_CREDIT_LABEL,
};
use super::sidebar::{NavItem, SidebarState};
use crate::router::Navigator;
use crate::session::SessionContext;

/// Placeholder shown while the quote resolves
pub const QUOTE_LOADING: &str = "Loading...";

pub struct AppLayout {
    pub header: Header,
    sidebar: SidebarState,
    quote: Option<Quote>,
}

impl AppLayout {
    pub fn new(session: SessionContext) -> Self {
        Self {
            header: Header::new(session),
            sidebar: SidebarState::default(),
            quote: None,
        }
    }

    /// Mount the header and resolve the quote of the day
    pub async fn mount(&mut self, quotes: Option<&dyn QuoteSource>) {
        self.header.mount();
        self.quote = Some(load_quote(quotes).await);
    }

    pub fn unmount(&mut self) {
        self.header.unmount();
    }

    pub fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// Header menu button
    pub fn menu_click(&mut self) {
        self.sidebar.toggle();
    }

    pub fn backdrop_click(&mut self) {
        self.sidebar.close();
    }

    pub fn navigate(&mut self, item: &NavItem, navigator: &dyn Navigator) {
        self.sidebar.navigate(item, navigator);
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Quote panel: heading, quote (or placeholder) and credit, one per line
    pub fn quote_text(&self) -> String {
        let body = match &self.quote {
            Some(quote) => format!("\"{}\" - {}", quote.text, quote.author),
            None => QUOTE_LOADING.to_string(),
        };
        format!(
            "{}\n{}\n{} ({})",
            QUOTE_LABEL, body, ZENQUOTES_CREDIT_LABEL, ZENQUOTES_CREDIT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{History, Route};
    use crate::session::SessionStore;
    use crate::shell::quote::QuoteError;
    use crate::shell::sidebar::nav_items;
    use async_trait::async_trait;

    struct Today;

    #[async_trait]
    impl QuoteSource for Today {
        async fn quote_of_the_day(&self) -> Result<Quote, QuoteError> {
            Ok(Quote {
                text: "Well begun is half done.".to_string(),
                author: "Aristotle".to_string(),
            })
        }
    }

    fn layout() -> AppLayout {
        AppLayout::new(SessionContext::new(SessionStore::in_memory()))
    }

    #[tokio::test]
    async fn test_quote_loading_then_fallback() {
        let mut layout = layout();
        assert_eq!(
            layout.quote_text(),
            "Quote of the Day\nLoading...\nZenQuotes.io (https://zenquotes.io/)"
        );

        layout.mount(None).await;
        assert_eq!(layout.quote(), Some(&Quote::fallback()));
        assert!(layout.header.is_mounted());
        assert_eq!(
            layout.quote_text(),
            "Quote of the Day\n\"Every day is a fresh start.\" - Unknown\nZenQuotes.io (https://zenquotes.io/)"
        );
    }

    #[tokio::test]
    async fn test_loaded_quote_carries_label_and_credit() {
        let mut layout = layout();
        layout.mount(Some(&Today)).await;

        let text = layout.quote_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], QUOTE_LABEL);
        assert_eq!(lines[1], "\"Well begun is half done.\" - Aristotle");
        assert!(lines[2].contains(ZENQUOTES_CREDIT_LABEL));
        assert!(lines[2].contains(ZENQUOTES_CREDIT));
    }

    #[test]
    fn test_menu_and_navigation() {
        let history = History::new(Route::Resources);
        let mut layout = AppLayout::new(SessionContext::new(SessionStore::in_memory()));

        layout.menu_click();
        assert!(layout.sidebar().is_open());

        let [journals, _] = nav_items();
        layout.navigate(&journals, &history);
        assert!(!layout.sidebar().is_open());
        assert_eq!(history.current(), Route::Journals);
    }
}
