use std::time::Duration;

use chrono::Utc;
use leptos::{html, prelude::*};

use super::particles::{ParticleField, ParticlePattern};
use super::reveal::{Reveal, RevealDirection};
use super::SiteContext;
use crate::contact::{
    copy_to_clipboard, BudgetRange, ClipboardWriter, ContactSubmission, Dispatcher, Field,
    MailHandoff, ProjectType, Timeline, ValidationError, CONTACT_EMAIL, CONTACT_PHONE,
};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
const DRAFT_STORAGE_KEY: &str = "contact_draft";

const COPIED_RESET_MS: u64 = 2_000;

const INPUT_CLASS: &str = "w-full px-5 py-4 bg-black/40 border-2 border-white/20 rounded-xl text-white placeholder-white/50 focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-emerald-400/60 transition-colors hover:border-white/30 text-base";
const SELECT_CLASS: &str = "w-full px-5 py-4 bg-black/40 border-2 border-white/20 rounded-xl text-white focus:outline-none focus:ring-2 focus:ring-emerald-400 focus:border-emerald-400/60 transition-colors hover:border-white/30 cursor-pointer text-base";

/// Mail handoff boundary: navigating to a `mailto:` URI asks the host
/// environment to open the visitor's mail client. Fire-and-forget; nothing
/// ever reports whether a client exists or sent anything.
struct WebMailHandoff;

impl MailHandoff for WebMailHandoff {
    fn open(&self, uri: &str) {
        if let Err(err) = window().location().set_href(uri) {
            log::warn!("mail handoff navigation failed: {err:?}");
        }
    }
}

/// Clipboard boundary, gated on a secure context. The write resolves
/// asynchronously in the browser; a rejection lands in the console only.
struct WebClipboard;

impl ClipboardWriter for WebClipboard {
    fn is_available(&self) -> bool {
        window().is_secure_context()
    }

    fn write_text(&self, text: &str) -> bool {
        let _ = window().navigator().clipboard().write_text(text);
        true
    }
}

fn open_external(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open external link: {err:?}");
    }
}

struct SocialLink {
    name: &'static str,
    href: &'static str,
    accent: &'static str,
}

static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/aayushpawar",
        accent: "bg-blue-600/30 text-blue-300 border-blue-500/40 hover:bg-blue-600/50",
    },
    SocialLink {
        name: "Behance",
        href: "https://www.behance.net/aayushpawar",
        accent: "bg-blue-500/30 text-blue-200 border-blue-400/40 hover:bg-blue-500/50",
    },
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com/aayushpawar",
        accent: "bg-pink-600/30 text-pink-300 border-pink-500/40 hover:bg-pink-600/50",
    },
    SocialLink {
        name: "GitHub",
        href: "https://github.com/aayushpawar",
        accent: "bg-gray-600/30 text-gray-300 border-gray-500/40 hover:bg-gray-600/50",
    },
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let toasts = ctx.toasts;

    // The one Form State Holder; owned here, never shared.
    let form = RwSignal::new(ContactSubmission::default());
    let dispatcher = StoredValue::new(Dispatcher::new(WebMailHandoff));
    let (submit_count, set_submit_count) = signal(0u32);
    let (copied_email, set_copied_email) = signal(false);
    let (copied_phone, set_copied_phone) = signal(false);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let project_ref = NodeRef::<html::Select>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    // Survive accidental reloads: mirror the draft into localStorage and
    // restore it once on mount. Reset writes the empty form back, which
    // clears the stored draft too.
    #[cfg(feature = "hydrate")]
    {
        let (draft, set_draft, _) =
            use_local_storage::<ContactSubmission, JsonSerdeWasmCodec>(DRAFT_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| {
                let stored = draft.get_untracked();
                if !stored.is_empty() {
                    form.set(stored);
                }
            },
            true,
        );
        Effect::new(move |_| set_draft.set(form.get()));
    }

    let focus_field = move |field: Field| {
        let focused = match field {
            Field::Name => name_ref.get_untracked().map(|el| el.focus()),
            Field::Email => email_ref.get_untracked().map(|el| el.focus()),
            Field::ProjectType => project_ref.get_untracked().map(|el| el.focus()),
            Field::Subject => subject_ref.get_untracked().map(|el| el.focus()),
            Field::Message => message_ref.get_untracked().map(|el| el.focus()),
        };
        if let Some(Err(err)) = focused {
            log::warn!("could not focus {} input: {err:?}", field.label());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = form.get_untracked();
        let result = dispatcher
            .try_update_value(|d| d.submit(&mut current, Utc::now()))
            .expect("dispatcher should outlive the form");
        form.set(current);
        match &result {
            Ok(_) => {
                set_submit_count.set(dispatcher.with_value(|d| d.submissions()));
                toasts.success(
                    "Message sent successfully! 📧",
                    Some("We'll get back to you within 24 hours."),
                );
            }
            Err(err) => {
                log::info!("contact submission rejected: {err}");
                let (title, detail) = match err {
                    ValidationError::MissingRequiredField(_) => (
                        "Please fill in all required fields",
                        "Name, email, project type, subject, and message are required",
                    ),
                    ValidationError::InvalidEmailFormat => (
                        "Please enter a valid email address",
                        "We need a valid email to get back to you",
                    ),
                };
                toasts.error(title, Some(detail));
                focus_field(err.field());
            }
        }
    };

    let copy_email = move |_| {
        if copy_to_clipboard(&WebClipboard, CONTACT_EMAIL) {
            set_copied_email(true);
            toasts.success("Email copied!", Some("You can now paste it anywhere"));
            set_timeout(
                move || set_copied_email(false),
                Duration::from_millis(COPIED_RESET_MS),
            );
        } else {
            // Manual-copy fallback: put the address itself in the notification.
            toasts.info(
                &format!("Email: {CONTACT_EMAIL}"),
                Some("Clipboard unavailable - please copy manually"),
            );
        }
    };

    let copy_phone = move |_| {
        if copy_to_clipboard(&WebClipboard, CONTACT_PHONE) {
            set_copied_phone(true);
            toasts.success("Phone number copied!", Some("You can now paste it anywhere"));
            set_timeout(
                move || set_copied_phone(false),
                Duration::from_millis(COPIED_RESET_MS),
            );
        } else {
            toasts.info(
                &format!("Phone: {CONTACT_PHONE}"),
                Some("Clipboard unavailable - please copy manually"),
            );
        }
    };

    view! {
        <div class="relative">
            <ParticleField pattern=ParticlePattern::Random count=15 seed=11 />
            <div class="relative max-w-6xl mx-auto">
                <Reveal direction=RevealDirection::Up>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-6xl font-display font-black mb-6">
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-400 via-cyan-400 to-purple-400">
                                "Let's Create"
                            </span>
                            <br />
                            <span class="text-white">"Something Amazing"</span>
                        </h2>
                        <p class="text-lg text-white/80 max-w-3xl mx-auto font-body leading-relaxed">
                            "Ready to transform your vision into reality? Whether it's AI-powered
                            experiences, strategic marketing, or cutting-edge digital
                            transformation - I'm here to bring your ideas to life."
                        </p>
                    </div>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12 mb-16">
                    <Reveal direction=RevealDirection::Left delay_ms=100>
                        <h3 class="font-display font-semibold text-white mb-6 text-xl">
                            "Contact Information"
                        </h3>
                        <div class="space-y-4">
                            <button
                                class="w-full p-6 rounded-2xl bg-white/5 border border-white/10 hover:border-cyan-500/40 text-left transition-colors group"
                                on:click=copy_email
                            >
                                <div class="font-display font-semibold text-white mb-1">"Email"</div>
                                <div class="text-sm text-cyan-300 font-body">{CONTACT_EMAIL}</div>
                                <div class="text-xs text-white/40 mt-2">
                                    {move || if copied_email.get() { "✓ Copied" } else { "Click to copy" }}
                                </div>
                            </button>
                            <button
                                class="w-full p-6 rounded-2xl bg-white/5 border border-white/10 hover:border-emerald-500/40 text-left transition-colors group"
                                on:click=copy_phone
                            >
                                <div class="font-display font-semibold text-white mb-1">"Phone"</div>
                                <div class="text-sm text-emerald-300 font-body">{CONTACT_PHONE}</div>
                                <div class="text-xs text-white/40 mt-2">
                                    {move || if copied_phone.get() { "✓ Copied" } else { "Click to copy" }}
                                </div>
                            </button>
                            <button
                                class="w-full p-6 rounded-2xl bg-white/5 border border-white/10 hover:border-purple-500/40 text-left transition-colors group"
                                on:click=move |_| open_external(
                                    "https://maps.google.com/?q=Mumbai,Maharashtra,India",
                                )
                            >
                                <div class="font-display font-semibold text-white mb-1">"Location"</div>
                                <div class="text-sm text-purple-300 font-body">"Mumbai, Maharashtra"</div>
                                <div class="text-xs text-white/40 mt-2">"Open in Maps"</div>
                            </button>
                        </div>
                    </Reveal>

                    <Reveal direction=RevealDirection::Right delay_ms=150>
                        <h3 class="font-display font-semibold text-white mb-6 text-xl">
                            "Social Platforms"
                        </h3>
                        <div class="grid grid-cols-2 gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <button
                                            class=format!(
                                                "p-5 rounded-2xl border-2 transition-colors text-left {}",
                                                social.accent,
                                            )
                                            on:click=move |_| {
                                                toasts.info(
                                                    &format!("Opening {}...", social.name),
                                                    Some("Redirecting to external platform"),
                                                );
                                                open_external(social.href);
                                            }
                                        >
                                            <span class="text-sm font-medium font-body">{social.name}</span>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>

                <Reveal direction=RevealDirection::Up delay_ms=200>
                    <div class="p-8 sm:p-10 rounded-3xl bg-white/5 border border-white/10">
                        <div class="mb-8 text-center">
                            <h2 class="text-3xl font-display font-bold text-white mb-4">
                                "Start Your Project"
                            </h2>
                            <p class="text-white/80 font-body leading-relaxed">
                                "Tell me about your vision, and let's explore how we can transform it
                                into an extraordinary digital experience."
                            </p>
                            <p class="text-sm text-white/60 mt-3 font-body">
                                "Submit your message and we'll get back to you within 24 hours"
                            </p>
                            {move || {
                                let count = submit_count.get();
                                (count > 0)
                                    .then(|| {
                                        view! {
                                            <p class="text-xs text-emerald-300/80 mt-2 font-mono">
                                                {format!("{count} message(s) sent this visit")}
                                            </p>
                                        }
                                    })
                            }}
                        </div>

                        <form on:submit=on_submit class="space-y-8">
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div>
                                    <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                        "Name *"
                                    </label>
                                    <input
                                        node_ref=name_ref
                                        type="text"
                                        placeholder="Your full name"
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.name.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.name = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                        "Email *"
                                    </label>
                                    <input
                                        node_ref=email_ref
                                        type="email"
                                        placeholder="your@email.com"
                                        class=INPUT_CLASS
                                        prop:value=move || form.with(|f| f.email.clone())
                                        on:input=move |ev| {
                                            form.update(|f| f.email = event_target_value(&ev))
                                        }
                                    />
                                </div>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                    "Company (Optional)"
                                </label>
                                <input
                                    type="text"
                                    placeholder="Your company name"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.company.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.company = event_target_value(&ev))
                                    }
                                />
                            </div>

                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <div>
                                    <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                        "Project Type *"
                                    </label>
                                    <select
                                        node_ref=project_ref
                                        class=SELECT_CLASS
                                        prop:value=move || {
                                            form.with(|f| {
                                                f.project_type
                                                    .map(|p| p.as_str().to_string())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:change=move |ev| {
                                            form.update(|f| {
                                                f.project_type = ProjectType::from_str(
                                                    &event_target_value(&ev),
                                                )
                                            })
                                        }
                                    >
                                        <option value="">"Select project type..."</option>
                                        {ProjectType::all()
                                            .into_iter()
                                            .map(|p| {
                                                view! { <option value=p.as_str()>{p.label()}</option> }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                                <div>
                                    <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                        "Budget Range (Optional)"
                                    </label>
                                    <select
                                        class=SELECT_CLASS
                                        prop:value=move || {
                                            form.with(|f| {
                                                f.budget
                                                    .map(|b| b.as_str().to_string())
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:change=move |ev| {
                                            form.update(|f| {
                                                f.budget = BudgetRange::from_str(
                                                    &event_target_value(&ev),
                                                )
                                            })
                                        }
                                    >
                                        <option value="">"Select budget range..."</option>
                                        {BudgetRange::all()
                                            .into_iter()
                                            .map(|b| {
                                                view! { <option value=b.as_str()>{b.label()}</option> }
                                            })
                                            .collect_view()}
                                    </select>
                                </div>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                    "Timeline (Optional)"
                                </label>
                                <select
                                    class=SELECT_CLASS
                                    prop:value=move || {
                                        form.with(|f| {
                                            f.timeline
                                                .map(|t| t.as_str().to_string())
                                                .unwrap_or_default()
                                        })
                                    }
                                    on:change=move |ev| {
                                        form.update(|f| {
                                            f.timeline = Timeline::from_str(&event_target_value(&ev))
                                        })
                                    }
                                >
                                    <option value="">"Select timeline..."</option>
                                    {Timeline::all()
                                        .into_iter()
                                        .map(|t| {
                                            view! { <option value=t.as_str()>{t.label()}</option> }
                                        })
                                        .collect_view()}
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                    "Subject *"
                                </label>
                                <input
                                    node_ref=subject_ref
                                    type="text"
                                    placeholder="Brief description of your project"
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.subject.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.subject = event_target_value(&ev))
                                    }
                                />
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-white/90 mb-3 font-body">
                                    "Project Details *"
                                </label>
                                <textarea
                                    node_ref=message_ref
                                    rows=6
                                    placeholder="Tell me about your vision, goals, target audience, and any specific requirements."
                                    class=INPUT_CLASS
                                    prop:value=move || form.with(|f| f.message.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.message = event_target_value(&ev))
                                    }
                                ></textarea>
                            </div>

                            <div class="text-center pt-4">
                                <button
                                    type="submit"
                                    class="px-16 py-5 font-display font-bold text-xl text-white bg-gradient-to-r from-emerald-500 to-cyan-500 hover:from-emerald-400 hover:to-cyan-400 rounded-2xl min-w-[280px] transition-colors"
                                >
                                    "Send Message"
                                </button>
                            </div>

                            <div class="text-center mt-8 p-6 rounded-2xl bg-white/5 border border-white/10">
                                <p class="text-base text-white/90 font-body mb-2">
                                    "Response Time: Within 24 hours"
                                </p>
                                <p class="text-sm text-white/70 font-body">
                                    "Available Mon-Fri, 9 AM - 6 PM IST • All inquiries welcome"
                                </p>
                            </div>
                        </form>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
