use std::time::Duration;

use leptos::prelude::*;

use super::nav::{scroll_to, Page};
use super::particles::{ParticleField, ParticlePattern};
use super::reveal::{Reveal, RevealDirection};
use super::SiteContext;

const ROLE_ROTATION_MS: u64 = 4_000;

struct Role {
    primary: &'static str,
    secondary: &'static str,
    gradient: &'static str,
    description: &'static str,
}

static ROLES: [Role; 3] = [
    Role {
        primary: "Digital First",
        secondary: "Marketer",
        gradient: "from-emerald-400 to-cyan-500",
        description: "Transforming brands through cutting-edge digital strategies",
    },
    Role {
        primary: "AI Innovation",
        secondary: "Leader",
        gradient: "from-cyan-400 to-blue-500",
        description: "Pioneering the future of artificial intelligence",
    },
    Role {
        primary: "Creative",
        secondary: "Strategist",
        gradient: "from-emerald-500 to-teal-400",
        description: "Crafting compelling narratives that drive engagement",
    },
];

struct Stat {
    value: &'static str,
    label: &'static str,
}

static STATS: [Stat; 3] = [
    Stat {
        value: "9+",
        label: "Years of Innovation",
    },
    Stat {
        value: "50+",
        label: "Projects Delivered",
    },
    Stat {
        value: "100M+",
        label: "Users Impacted",
    },
];

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let (role_index, set_role_index) = signal(0usize);

    // Rotate the headline role on a fixed cadence once hydrated.
    Effect::new(move |_| {
        set_interval(
            move || set_role_index.update(|i| *i = (*i + 1) % ROLES.len()),
            Duration::from_millis(ROLE_ROTATION_MS),
        );
    });

    view! {
        <div class="relative w-full text-center">
            <ParticleField pattern=ParticlePattern::Random count=20 seed=3 />
            <Reveal direction=RevealDirection::Fade>
                <p class="text-emerald-300 font-body tracking-[0.3em] uppercase text-sm mb-6">
                    "Aayush Pawar"
                </p>
            </Reveal>
            <Reveal direction=RevealDirection::Up delay_ms=150>
                {move || {
                    let role = &ROLES[role_index.get() % ROLES.len()];
                    view! {
                        <h1 class="text-5xl sm:text-6xl lg:text-8xl font-display font-black mb-6">
                            <span class=format!(
                                "text-transparent bg-clip-text bg-gradient-to-r {}",
                                role.gradient,
                            )>{role.primary}</span>
                            <br />
                            <span class="text-white">{role.secondary}</span>
                        </h1>
                        <p class="text-lg sm:text-xl text-white/70 font-body max-w-2xl mx-auto mb-10">
                            {role.description}
                        </p>
                    }
                }}
            </Reveal>
            <Reveal direction=RevealDirection::Up delay_ms=300>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16">
                    <button
                        class="px-8 py-4 rounded-2xl font-display font-bold text-white bg-gradient-to-r from-emerald-500 to-cyan-500 hover:from-emerald-400 hover:to-cyan-400 transition-colors"
                        on:click=move |_| {
                            scroll_to(Page::Contact);
                            ctx.current_page.set(Page::Contact);
                        }
                    >
                        "Let's Create Magic Together"
                    </button>
                    <button
                        class="px-8 py-4 rounded-2xl font-display font-semibold text-white/80 border border-white/20 hover:border-white/40 hover:text-white transition-colors"
                        on:click=move |_| {
                            scroll_to(Page::Projects);
                            ctx.current_page.set(Page::Projects);
                        }
                    >
                        "View My Work"
                    </button>
                </div>
            </Reveal>
            <Reveal direction=RevealDirection::Up delay_ms=450>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-8 sm:gap-16">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class="text-3xl sm:text-4xl font-display font-black text-emerald-300">
                                        {stat.value}
                                    </div>
                                    <div class="text-sm text-white/60 font-body mt-1">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </div>
    }
}
