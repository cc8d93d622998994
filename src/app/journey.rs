use leptos::prelude::*;

use super::reveal::{Reveal, RevealDirection};

struct Milestone {
    period: &'static str,
    role: &'static str,
    organization: &'static str,
    summary: &'static str,
    highlights: &'static [&'static str],
}

static MILESTONES: [Milestone; 4] = [
    Milestone {
        period: "2022 - Present",
        role: "Product Marketing Manager",
        organization: "Jio Platforms Limited",
        summary: "Leading product marketing for digital platforms serving hundreds of millions of users across India.",
        highlights: &[
            "Owns go-to-market for flagship consumer products",
            "Built AI-assisted campaign workflows adopted across teams",
        ],
    },
    Milestone {
        period: "2019 - 2022",
        role: "Digital Marketing Lead",
        organization: "Healthcare & Pharma",
        summary: "Drove digital transformation for healthcare brands, from patient-education funnels to HCP engagement programs.",
        highlights: &[
            "Scaled compliant healthcare campaigns across channels",
            "Introduced analytics-first creative iteration",
        ],
    },
    Milestone {
        period: "2017 - 2019",
        role: "Brand & Growth Marketer",
        organization: "Agency & Startup Work",
        summary: "Full-funnel brand building for early-stage products: positioning, launch campaigns, and growth experiments.",
        highlights: &[
            "Launched brands from naming to first thousand customers",
        ],
    },
    Milestone {
        period: "2015 - 2017",
        role: "Creative Strategist",
        organization: "Independent",
        summary: "Started at the intersection of design and marketing, crafting narratives and visual identities for local businesses.",
        highlights: &[
            "First client work, first campaigns, lasting habits",
        ],
    },
];

#[component]
pub fn Journey() -> impl IntoView {
    view! {
        <div class="relative max-w-3xl mx-auto">
            <div class="absolute left-4 sm:left-1/2 top-0 bottom-0 w-px bg-gradient-to-b from-emerald-500/50 via-cyan-500/30 to-transparent"></div>
            <div class="space-y-12">
                {MILESTONES
                    .iter()
                    .enumerate()
                    .map(|(i, milestone)| {
                        let direction = if i % 2 == 0 {
                            RevealDirection::Left
                        } else {
                            RevealDirection::Right
                        };
                        view! {
                            <Reveal direction=direction delay_ms={(i as u32) * 100}>
                                <div class="relative pl-12 sm:pl-0">
                                    <div class="absolute left-2.5 sm:left-1/2 sm:-translate-x-1/2 top-2 w-3 h-3 rounded-full bg-emerald-400 shadow-[0_0_12px_rgba(16,185,129,0.8)]"></div>
                                    <div class=if i % 2 == 0 {
                                        "sm:w-[calc(50%-2rem)] sm:mr-auto"
                                    } else {
                                        "sm:w-[calc(50%-2rem)] sm:ml-auto"
                                    }>
                                        <div class="p-6 rounded-2xl bg-white/5 border border-white/10">
                                            <div class="text-xs font-mono text-emerald-300 mb-2">
                                                {milestone.period}
                                            </div>
                                            <h3 class="font-display font-bold text-white text-lg">
                                                {milestone.role}
                                            </h3>
                                            <div class="text-sm text-cyan-300 font-body mb-3">
                                                {milestone.organization}
                                            </div>
                                            <p class="text-sm text-white/70 font-body leading-relaxed mb-3">
                                                {milestone.summary}
                                            </p>
                                            <ul class="space-y-1">
                                                {milestone
                                                    .highlights
                                                    .iter()
                                                    .map(|h| {
                                                        view! {
                                                            <li class="text-xs text-white/60 font-body flex gap-2">
                                                                <span class="text-emerald-400">"▹"</span>
                                                                {*h}
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
