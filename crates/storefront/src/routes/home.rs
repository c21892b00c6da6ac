//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use storefront_core::Page;
use tracing::instrument;

use crate::filters;
use crate::routes::LayoutView;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: LayoutView,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session_mut().await;
    session.navigate(Page::Home);

    HomeTemplate {
        layout: LayoutView::from(&*session),
    }
}
