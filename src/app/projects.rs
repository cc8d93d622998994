use leptos::prelude::*;

use super::reveal::{Reveal, RevealDirection};

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    impact: &'static str,
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "AI Campaign Studio",
        category: "AI & Technology",
        description: "An internal toolkit that turns a product brief into channel-ready campaign variants, with human review in the loop at every step.",
        tags: &["AI", "Marketing Automation", "Product"],
        impact: "Cut campaign turnaround from weeks to days",
    },
    Project {
        title: "Healthcare Patient Journeys",
        category: "Healthcare Marketing",
        description: "Compliant, empathetic patient-education funnels for chronic-care brands, built around real questions patients actually ask.",
        tags: &["Healthcare", "Content Strategy", "Analytics"],
        impact: "Reached millions of patients across India",
    },
    Project {
        title: "Platform Launch Playbook",
        category: "Product Marketing",
        description: "End-to-end go-to-market system for consumer platform launches: positioning, beta programs, creator partnerships, and launch-day operations.",
        tags: &["Go-to-Market", "Brand", "Growth"],
        impact: "Powered launches to 100M+ user audiences",
    },
    Project {
        title: "Raleskip Brand System",
        category: "Brand Development",
        description: "The personal brand behind this site: identity, voice, and a design language tuned for dark, kinetic, neon-on-black storytelling.",
        tags: &["Brand", "UI/UX", "Creative Direction"],
        impact: "You are looking at it",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            {PROJECTS
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    view! {
                        <Reveal direction=RevealDirection::Scale delay_ms={(i as u32) * 120}>
                            <div class="h-full p-8 rounded-2xl bg-white/5 border border-white/10 hover:border-cyan-500/40 transition-colors flex flex-col">
                                <div class="text-xs font-mono uppercase tracking-widest text-cyan-300 mb-3">
                                    {project.category}
                                </div>
                                <h3 class="text-2xl font-display font-bold text-white mb-3">
                                    {project.title}
                                </h3>
                                <p class="text-sm text-white/70 font-body leading-relaxed mb-4 flex-1">
                                    {project.description}
                                </p>
                                <div class="flex flex-wrap gap-2 mb-4">
                                    {project
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="px-2.5 py-1 rounded-full text-xs font-body bg-black/30 border border-white/10 text-white/60">
                                                    {*tag}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                <div class="text-sm font-body text-emerald-300 flex items-center gap-2">
                                    <span>"✦"</span>
                                    {project.impact}
                                </div>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
