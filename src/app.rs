// =============================================================================
// Folio Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;

use crate::components::Footer;
use crate::state::ContentStore;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component. Provides the content store and renders the
/// page sections the default quick links target, followed by the footer.
#[component]
pub fn App() -> impl IntoView {
    // Determine API URL based on ENVIRONMENT variable
    let environment = option_env!("ENVIRONMENT").unwrap_or("production");
    let api_url = if environment == "development" {
        "http://localhost:3000".to_string()
    } else {
        // Production serves the content API same-origin
        String::new()
    };

    let store = ContentStore::for_platform(api_url);
    provide_context(store.clone());

    let edit_label = {
        let store = store.clone();
        move || if store.is_edit_mode() { "편집 종료" } else { "편집" }
    };
    let toggle = {
        let store = store.clone();
        move |_| store.toggle_edit_mode()
    };

    view! {
        <main class="page">
            <section id="about" class="page-section">
                <h2>"소개"</h2>
            </section>
            <section id="projects" class="page-section">
                <h2>"프로젝트"</h2>
            </section>
            <section id="contact" class="page-section">
                <h2>"연락처"</h2>
            </section>
        </main>

        <Footer />

        // Stand-in for the surrounding editor toolbar
        <button class="edit-mode-toggle" on:click=toggle>
            {edit_label}
        </button>
    }
}
