mod about;
mod contact_page;
mod hero;
mod journey;
mod nav;
mod particles;
mod projects;
mod reveal;
mod skills;
mod toast;

use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use about::About;
use contact_page::ContactPage;
use hero::Hero;
use journey::Journey;
use nav::{Navigation, Page};
use projects::Projects;
use skills::Skills;
use toast::{ToastStack, Toaster};

const SPLASH_HOLD_MS: u64 = 1_500;
const WELCOME_TOAST_DELAY_MS: u64 = 500;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/raleskip-portfolio.css" />
                <MetaTags />
            </head>
            <body class="font-body bg-black text-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

/// Top-level owned UI state, created when [`App`] mounts and dropped with
/// its reactive owner on teardown.
///
/// Replaces ambient globals: the current section, the splash-screen flag,
/// and the toaster all live here and are read through one context object.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub current_page: RwSignal<Page>,
    pub loading: RwSignal<bool>,
    pub toasts: Toaster,
}

impl SiteContext {
    fn new() -> Self {
        Self {
            current_page: RwSignal::new(Page::Home),
            loading: RwSignal::new(true),
            toasts: Toaster::new(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let ctx = SiteContext::new();
    provide_context(ctx);

    // Hold the splash until the first paint settles, then greet.
    Effect::new(move |_| {
        set_timeout(
            move || {
                ctx.loading.set(false);
                set_timeout(
                    move || {
                        ctx.toasts
                            .success("Welcome to Raleskip", Some("Portfolio loaded successfully"));
                    },
                    Duration::from_millis(WELCOME_TOAST_DELAY_MS),
                );
            },
            Duration::from_millis(SPLASH_HOLD_MS),
        );
    });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Raleskip Portfolio - Aayush Pawar | {title}") />
        <Meta
            name="description"
            content="Aayush Pawar - Digital First Marketer, AI Specialist & Creative Visionary at Raleskip with 9+ years expertise in healthcare marketing and technology innovation."
        />
        <Meta
            name="keywords"
            content="Aayush Pawar, Raleskip, Digital Marketing, AI Marketing, Healthcare Marketing, Product Marketing Manager, Jio Platforms"
        />
        <Meta name="author" content="Aayush Pawar" />
        <Meta name="theme-color" content="#10b981" />

        <Router>
            <Show when=move || ctx.loading.get()>
                <SplashScreen />
            </Show>
            <Navigation />
            <ToastStack />
            <main class="relative pt-16">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn SplashScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-gradient-to-br from-black via-gray-900 to-black flex flex-col items-center justify-center">
            <div class="text-center max-w-lg mx-auto px-8 space-y-6">
                <div class="relative w-20 h-20 mx-auto">
                    <div class="absolute inset-0 rounded-full border border-emerald-500/30 animate-spin-slow"></div>
                    <div class="absolute inset-4 w-3 h-3 bg-emerald-400 rounded-full animate-pulse"></div>
                </div>
                <h1 class="text-5xl font-display font-black text-white">"Raleskip"</h1>
                <p class="text-white/70 font-body text-lg">
                    "Digital Marketing Expert & AI Innovation Leader"
                </p>
                <p class="text-sm text-white/40 font-mono">
                    {format!("v{} • Loading Portfolio", env!("CARGO_PKG_VERSION"))}
                </p>
            </div>
        </div>
    }
}

/// Renders the single scrolling page and keeps [`SiteContext::current_page`]
/// in sync with the section under the viewport.
#[component]
fn Portfolio() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();

    // Scroll spy: the active section is the last one whose top edge sits
    // above a probe line a third of the way down the viewport.
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        if ctx.loading.get_untracked() {
            return;
        }
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let probe = y + viewport / 3.0;
        for page in Page::all().into_iter().rev() {
            if let Some(top) = nav::section_offset_top(page) {
                if top <= probe {
                    if ctx.current_page.get_untracked() != page {
                        ctx.current_page.set(page);
                    }
                    break;
                }
            }
        }
    });

    // Honor #hash deep links once on mount, after the splash clears.
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(page) = Page::from_str(hash.trim_start_matches('#')) {
            ctx.current_page.set(page);
            set_timeout(
                move || nav::scroll_to(page),
                Duration::from_millis(SPLASH_HOLD_MS),
            );
        }
    });

    view! {
        <Title text="Digital Marketing Expert & AI Innovation Leader" />
        <div class="relative">
            <section id="home" class="min-h-screen flex items-center justify-center">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <Hero />
                </div>
            </section>

            <SectionDivider accent="via-emerald-500/5" />

            <section id="about" class="min-h-screen flex items-center justify-center py-20">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <SectionHeading title="About Aayush" underline="from-emerald-500 to-cyan-500" />
                    <About />
                </div>
            </section>

            <SectionDivider accent="via-purple-500/5" />

            <section id="skills" class="min-h-screen flex items-center justify-center py-20">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <SectionHeading
                        title="Expertise & Skills"
                        underline="from-cyan-500 to-purple-500"
                    />
                    <Skills />
                </div>
            </section>

            <SectionDivider accent="via-cyan-500/5" />

            <section id="journey" class="min-h-screen flex items-center justify-center py-20">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <SectionHeading
                        title="Professional Journey"
                        underline="from-purple-500 to-emerald-500"
                    />
                    <Journey />
                </div>
            </section>

            <SectionDivider accent="via-amber-500/5" />

            <section id="projects" class="min-h-screen flex items-center justify-center py-20">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <SectionHeading
                        title="Featured Projects"
                        underline="from-amber-500 to-emerald-500"
                    />
                    <Projects />
                </div>
            </section>

            <SectionDivider accent="via-emerald-500/5" />

            <section id="contact" class="min-h-screen flex items-center justify-center py-20">
                <div class="w-full max-w-6xl mx-auto px-8">
                    <SectionHeading
                        title="Let's Connect"
                        underline="from-emerald-500 via-cyan-500 to-purple-500"
                    />
                    <ContactPage />
                </div>
            </section>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str, underline: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-5xl font-display font-bold text-white mb-4">{title}</h2>
            <div class=format!(
                "w-20 h-1 bg-gradient-to-r {underline} mx-auto rounded-full",
            )></div>
        </div>
    }
}

#[component]
fn SectionDivider(accent: &'static str) -> impl IntoView {
    view! {
        <div class=format!("h-20 bg-gradient-to-b from-transparent {accent} to-transparent")></div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative py-20 mt-20">
            <div class="max-w-6xl mx-auto px-8 text-center space-y-6">
                <h3 class="text-4xl font-display font-bold text-white">"Raleskip"</h3>
                <p class="text-white/70 text-lg max-w-2xl mx-auto">
                    "Digital Marketing Expert • AI Innovation Leader • Creative Strategist"
                </p>
                <p class="text-white/50">
                    "Currently Product Marketing Manager at Jio Platforms Limited"
                </p>
                <div class="flex flex-col sm:flex-row justify-center items-center gap-6 text-white/50 text-sm">
                    <span>"© 2025 Aayush Pawar. All rights reserved."</span>
                    <span class="hidden sm:inline">"•"</span>
                    <span title=concat!("built ", env!("BUILD_TIME"))>
                        {format!("v{} • Made with passion", env!("CARGO_PKG_VERSION"))}
                    </span>
                </div>
            </div>
        </footer>
    }
}
