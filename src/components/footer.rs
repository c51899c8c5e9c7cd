// =============================================================================
// Folio Web - Footer Component
// =============================================================================
// Table of Contents:
// 1. Layout Resolution
// 2. Footer Component
// =============================================================================

use leptos::prelude::*;

use crate::components::editable::EditableText;
use crate::content::{FooterConfig, FooterEdit, NavConfig, NavLink, FOOTER_INFO_KEY, NAV_CONFIG_KEY};
use crate::state::ContentStore;
use crate::utils;

// -----------------------------------------------------------------------------
// 1. Layout Resolution
// -----------------------------------------------------------------------------

/// Which parts of the footer render for a given configuration. Kept as a
/// pure function of the inputs so the render policy is testable off-DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct FooterLayout {
    pub visible: bool,
    pub identity: bool,
    pub quick_links: bool,
    pub contact: bool,
    pub columns: bool,
}

impl FooterLayout {
    pub fn resolve(config: &FooterConfig, nav_len: usize, edit_mode: bool) -> Self {
        // A hidden footer still renders in edit mode so it stays editable.
        let visible = config.show_footer || edit_mode;
        let identity = !config.name.is_empty();
        let quick_links = config.show_quick_links && nav_len > 0;
        let contact = config.show_contact_info && config.has_contact();

        Self {
            visible,
            identity,
            quick_links,
            contact,
            columns: identity || quick_links || contact,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Footer Component
// -----------------------------------------------------------------------------

/// Site footer with inline-editable content.
#[component]
pub fn Footer() -> impl IntoView {
    let store = expect_context::<ContentStore>();

    let config = RwSignal::new(FooterConfig::default());
    let nav_links = RwSignal::new(NavLink::defaults());

    // Load stored content on mount, and again whenever edit mode toggles.
    {
        let store = store.clone();
        Effect::new(move |_| {
            let _ = store.is_edit_mode();

            if let Some(stored) = store.read_raw(FOOTER_INFO_KEY) {
                config.set(FooterConfig::merged(&stored));
            }
            if let Some(nav) = store.read::<NavConfig>(NAV_CONFIG_KEY) {
                let links = nav.visible_links();
                if !links.is_empty() {
                    nav_links.set(links);
                }
            }
        });
    }

    // One save path for every edit: refuse protected fields, update local
    // state optimistically, persist locally, then commit durably.
    let save = {
        let store = store.clone();
        Callback::new(move |edit: FooterEdit| {
            let mut updated = config.get_untracked();
            if !updated.apply(edit) {
                return;
            }
            config.set(updated.clone());
            store.write(FOOTER_INFO_KEY, &updated);
            store.commit("footer", "Info", &updated);
        })
    };

    let layout = Memo::new(move |_| {
        let edit_mode = store.is_edit_mode();
        config.with(|c| FooterLayout::resolve(c, nav_links.with(|n| n.len()), edit_mode))
    });

    let copyright = Signal::derive(move || config.with(|c| c.copyright_line(utils::current_year())));

    view! {
        <Show when=move || layout.get().visible>
            <footer class="site-footer">
                <div class="footer-inner">
                    <Show when=move || layout.get().columns>
                        <div class="footer-columns">
                            // Identity column
                            <Show when=move || layout.get().identity>
                                <div class="footer-col footer-identity">
                                    <h3 class="footer-col-title">
                                        <EditableText
                                            value=Signal::derive(move || config.with(|c| c.name.clone()))
                                            on_commit=Callback::new(move |v| save.run(FooterEdit::Name(v)))
                                            storage_key="footer-name"
                                        />
                                    </h3>
                                    <Show when=move || config.with(|c| !c.description.is_empty())>
                                        <p class="footer-description">
                                            <EditableText
                                                value=Signal::derive(move || config.with(|c| c.description.clone()))
                                                on_commit=Callback::new(move |v| save.run(FooterEdit::Description(v)))
                                                multiline=true
                                                storage_key="footer-description"
                                            />
                                        </p>
                                    </Show>
                                </div>
                            </Show>

                            // Quick links column
                            <Show when=move || layout.get().quick_links>
                                <div class="footer-col footer-quick-links">
                                    <h4 class="footer-col-title">
                                        <EditableText
                                            value=Signal::derive(move || config.with(|c| c.quick_links_title.clone()))
                                            on_commit=Callback::new(move |v| save.run(FooterEdit::QuickLinksTitle(v)))
                                            storage_key="footer-quicklinks-title"
                                        />
                                    </h4>
                                    <div class="footer-link-list">
                                        <For
                                            each=move || nav_links.get()
                                            key=|link| link.url.clone()
                                            children=move |link: NavLink| {
                                                let url = link.url.clone();
                                                view! {
                                                    <button
                                                        class="footer-link"
                                                        on:click=move |_| utils::scroll_to_selector(&url)
                                                    >
                                                        {link.name.clone()}
                                                    </button>
                                                }
                                            }
                                        />
                                    </div>
                                </div>
                            </Show>

                            // Contact column
                            <Show when=move || layout.get().contact>
                                <div class="footer-col footer-contact">
                                    <h4 class="footer-col-title">
                                        <EditableText
                                            value=Signal::derive(move || config.with(|c| c.contact_title.clone()))
                                            on_commit=Callback::new(move |v| save.run(FooterEdit::ContactTitle(v)))
                                            storage_key="footer-contact-title"
                                        />
                                    </h4>
                                    <div class="footer-contact-lines">
                                        <Show when=move || config.with(|c| !c.phone.is_empty())>
                                            <p>
                                                <EditableText
                                                    value=Signal::derive(move || config.with(|c| c.phone.clone()))
                                                    on_commit=Callback::new(move |v| save.run(FooterEdit::Phone(v)))
                                                    storage_key="footer-phone"
                                                />
                                            </p>
                                        </Show>
                                        <Show when=move || config.with(|c| !c.email.is_empty())>
                                            <p>
                                                <EditableText
                                                    value=Signal::derive(move || config.with(|c| c.email.clone()))
                                                    on_commit=Callback::new(move |v| save.run(FooterEdit::Email(v)))
                                                    storage_key="footer-email"
                                                />
                                            </p>
                                        </Show>
                                        <Show when=move || config.with(|c| !c.location.is_empty())>
                                            <p>
                                                <EditableText
                                                    value=Signal::derive(move || config.with(|c| c.location.clone()))
                                                    on_commit=Callback::new(move |v| save.run(FooterEdit::Location(v)))
                                                    storage_key="footer-location"
                                                />
                                            </p>
                                        </Show>
                                    </div>
                                </div>
                            </Show>
                        </div>
                    </Show>

                    // Bottom bar
                    <div class="footer-bottom">
                        <div class="footer-copyright">
                            <EditableText
                                value=copyright
                                on_commit=Callback::new(move |v| save.run(FooterEdit::Copyright(v)))
                                storage_key="footer-copyright"
                            />
                        </div>
                        <Show when=move || config.with(|c| c.show_scroll_top)>
                            <button
                                class="footer-scroll-top"
                                aria-label="맨 위로"
                                on:click=move |_| utils::scroll_to_top()
                            >
                                "↑"
                            </button>
                        </Show>
                    </div>
                </div>
            </footer>
        </Show>
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_footer_renders_nothing_outside_edit_mode() {
        let config = FooterConfig { show_footer: false, ..Default::default() };
        assert!(!FooterLayout::resolve(&config, 3, false).visible);
    }

    #[test]
    fn hidden_footer_still_renders_in_edit_mode() {
        let config = FooterConfig { show_footer: false, ..Default::default() };
        assert!(FooterLayout::resolve(&config, 3, true).visible);
    }

    #[test]
    fn quick_links_need_flag_and_items() {
        let config = FooterConfig::default();
        assert!(FooterLayout::resolve(&config, 3, false).quick_links);
        assert!(!FooterLayout::resolve(&config, 0, false).quick_links);

        let disabled = FooterConfig { show_quick_links: false, ..Default::default() };
        assert!(!FooterLayout::resolve(&disabled, 3, false).quick_links);
    }

    #[test]
    fn contact_column_needs_flag_and_content() {
        let empty_contact = FooterConfig {
            phone: String::new(),
            email: String::new(),
            location: String::new(),
            ..Default::default()
        };
        assert!(!FooterLayout::resolve(&empty_contact, 3, false).contact);
        assert!(FooterLayout::resolve(&FooterConfig::default(), 3, false).contact);
    }

    #[test]
    fn columns_row_needs_at_least_one_column() {
        let bare = FooterConfig {
            name: String::new(),
            show_quick_links: false,
            show_contact_info: false,
            ..Default::default()
        };
        let layout = FooterLayout::resolve(&bare, 3, false);
        assert!(!layout.columns);
        // Bottom bar still renders whenever the footer itself does.
        assert!(layout.visible);
    }
}
