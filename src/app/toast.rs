use std::time::Duration;

use leptos::prelude::*;

const TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Error => "✕",
            ToastLevel::Info => "ℹ",
        }
    }

    fn accent_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "border-emerald-500/40 text-emerald-300",
            ToastLevel::Error => "border-red-500/40 text-red-300",
            ToastLevel::Info => "border-cyan-500/40 text-cyan-300",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub title: String,
    pub detail: Option<String>,
}

/// Transient, non-blocking notifications.
///
/// Owned by [`super::SiteContext`]; every toast auto-dismisses after a fixed
/// duration, or earlier via its close button. Nothing is logged remotely or
/// retried - this is the whole error-surfacing story.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: &str, detail: Option<&str>) {
        self.push(ToastLevel::Success, title, detail);
    }

    pub fn error(&self, title: &str, detail: Option<&str>) {
        self.push(ToastLevel::Error, title, detail);
    }

    pub fn info(&self, title: &str, detail: Option<&str>) {
        self.push(ToastLevel::Info, title, detail);
    }

    fn push(&self, level: ToastLevel, title: &str, detail: Option<&str>) {
        let id = self
            .next_id
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or(0);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                level,
                title: title.to_string(),
                detail: detail.map(str::to_string),
            })
        });
        let toasts = self.toasts;
        set_timeout(
            move || toasts.update(|list| list.retain(|t| t.id != id)),
            Duration::from_millis(TOAST_DURATION_MS),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toaster = expect_context::<super::SiteContext>().toasts;

    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-3 w-80 max-w-[calc(100vw-2rem)]">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "p-4 rounded-xl bg-black/90 border backdrop-blur-xl shadow-lg {}",
                            toast.level.accent_class(),
                        )>
                            <div class="flex items-start justify-between gap-3">
                                <div class="flex items-start gap-2">
                                    <span class="mt-0.5">{toast.level.icon()}</span>
                                    <div>
                                        <p class="text-sm font-medium text-white">{toast.title}</p>
                                        {toast
                                            .detail
                                            .map(|detail| {
                                                view! {
                                                    <p class="text-xs text-white/60 mt-1 whitespace-pre-wrap">
                                                        {detail}
                                                    </p>
                                                }
                                            })}
                                    </div>
                                </div>
                                <button
                                    class="text-white/40 hover:text-white text-sm"
                                    aria-label="Dismiss notification"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
