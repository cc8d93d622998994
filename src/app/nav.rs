use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::SiteContext;

/// The site's sections, addressable by symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Skills,
    Journey,
    Projects,
    Contact,
}

impl Page {
    pub fn all() -> Vec<Page> {
        vec![
            Page::Home,
            Page::About,
            Page::Skills,
            Page::Journey,
            Page::Projects,
            Page::Contact,
        ]
    }

    /// Section anchor id, also the `#hash` deep-link name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Skills => "skills",
            Page::Journey => "journey",
            Page::Projects => "projects",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Skills => "Expertise",
            Page::Journey => "Journey",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }

    pub fn from_str(s: &str) -> Option<Page> {
        Self::all().into_iter().find(|p| p.as_str() == s)
    }
}

/// Smooth-scrolls the section for `page` into view. No-op when the section
/// is not in the document (e.g. before hydration finishes).
pub fn scroll_to(page: Page) {
    if let Some(el) = document().get_element_by_id(page.as_str()) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Document offset of a section's top edge, for the scroll spy.
pub fn section_offset_top(page: Page) -> Option<f64> {
    document()
        .get_element_by_id(page.as_str())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| f64::from(el.offset_top()))
}

#[component]
pub fn Navigation() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();

    view! {
        <nav class="fixed top-0 inset-x-0 z-40 bg-black/70 backdrop-blur-lg border-b border-white/10">
            <div class="max-w-6xl mx-auto px-4 sm:px-8 py-3 flex items-center justify-between">
                <button
                    class="text-xl font-display font-black text-white tracking-wide"
                    on:click=move |_| {
                        scroll_to(Page::Home);
                        ctx.current_page.set(Page::Home);
                    }
                >
                    "Raleskip"
                </button>
                <div class="flex flex-wrap items-center gap-1 sm:gap-2">
                    {Page::all()
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if ctx.current_page.get() == page {
                                            "px-3 py-2 rounded-lg text-sm font-medium text-emerald-300 bg-emerald-500/10"
                                        } else {
                                            "px-3 py-2 rounded-lg text-sm font-medium text-white/70 hover:text-white hover:bg-white/5"
                                        }
                                    }
                                    on:click=move |_| {
                                        scroll_to(page);
                                        ctx.current_page.set(page);
                                    }
                                >
                                    {page.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_round_trips_anchor_names() {
        for page in Page::all() {
            assert_eq!(Page::from_str(page.as_str()), Some(page));
        }
    }

    #[test]
    fn test_unknown_anchor_is_rejected() {
        assert_eq!(Page::from_str("blog"), None);
        assert_eq!(Page::from_str(""), None);
    }
}
