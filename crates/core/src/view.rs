//! Which page is showing, and whether the order confirmation is up.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Shop,
    Cart,
}

impl Page {
    /// Path the page is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Shop => "/shop",
            Self::Cart => "/cart",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Shop => "Shop",
            Self::Cart => "Cart",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current page plus the transient order-confirmed flag.
///
/// Starts on [`Page::Home`] with the confirmation hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    current_page: Page,
    show_checkout_message: bool,
}

impl ViewState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_page: Page::Home,
            show_checkout_message: false,
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub const fn show_checkout_message(&self) -> bool {
        self.show_checkout_message
    }

    /// Switch to `page`. Any page can follow any other.
    pub const fn navigate(&mut self, page: Page) {
        self.current_page = page;
    }

    /// Raise the order confirmation.
    pub const fn confirm_order(&mut self) {
        self.show_checkout_message = true;
    }

    /// Hide the order confirmation and return to the shop.
    pub const fn dismiss_confirmation(&mut self) {
        self.show_checkout_message = false;
        self.current_page = Page::Shop;
    }
}
