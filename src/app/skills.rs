use leptos::prelude::*;

use super::reveal::{Reveal, RevealDirection};

struct SkillGroup {
    title: &'static str,
    accent: &'static str,
    skills: &'static [&'static str],
}

static SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Marketing & Strategy",
        accent: "text-emerald-300 border-emerald-500/30",
        skills: &[
            "Digital Marketing",
            "Product Marketing",
            "Healthcare Marketing",
            "Brand Development",
            "Go-to-Market Strategy",
            "Growth Hacking",
        ],
    },
    SkillGroup {
        title: "AI & Technology",
        accent: "text-cyan-300 border-cyan-500/30",
        skills: &[
            "AI-Powered Marketing",
            "Predictive Analytics",
            "Marketing Automation",
            "Prompt Engineering",
            "MarTech Stacks",
        ],
    },
    SkillGroup {
        title: "Creative & Content",
        accent: "text-purple-300 border-purple-500/30",
        skills: &[
            "Creative Direction",
            "UI/UX Thinking",
            "Storytelling",
            "Content Strategy",
            "Campaign Design",
        ],
    },
    SkillGroup {
        title: "Analytics & Growth",
        accent: "text-amber-300 border-amber-500/30",
        skills: &[
            "Performance Marketing",
            "Conversion Optimization",
            "A/B Experimentation",
            "Attribution Modeling",
            "ROI Analysis",
        ],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <div class="grid sm:grid-cols-2 gap-8">
            {SKILL_GROUPS
                .iter()
                .enumerate()
                .map(|(i, group)| {
                    view! {
                        <Reveal direction=RevealDirection::Up delay_ms={(i as u32) * 100}>
                            <div class="h-full p-8 rounded-2xl bg-white/5 border border-white/10">
                                <h3 class=format!(
                                    "text-xl font-display font-bold mb-6 {}",
                                    group.accent.split_whitespace().next().unwrap_or_default(),
                                )>{group.title}</h3>
                                <div class="flex flex-wrap gap-2">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <span class=format!(
                                                    "px-3 py-1.5 rounded-full text-sm font-body bg-black/30 border {}",
                                                    group.accent,
                                                )>{*skill}</span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
