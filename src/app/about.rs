use leptos::prelude::*;

use super::reveal::{Reveal, RevealDirection};

struct Pillar {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static PILLARS: [Pillar; 4] = [
    Pillar {
        icon: "🎯",
        title: "Strategic Marketing",
        description: "Data-driven marketing strategies that combine traditional wisdom with cutting-edge digital transformation.",
    },
    Pillar {
        icon: "🤖",
        title: "AI Innovation",
        description: "Leveraging machine learning and artificial intelligence to create smarter marketing solutions and predictive analytics.",
    },
    Pillar {
        icon: "📈",
        title: "Performance Driven",
        description: "Optimizing every touchpoint for maximum ROI through advanced analytics and continuous experimentation.",
    },
    Pillar {
        icon: "🔮",
        title: "Future Technology",
        description: "Exploring emerging technologies like AR/VR, blockchain, and IoT to create tomorrow's marketing experiences.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="grid lg:grid-cols-2 gap-12 items-start">
            <Reveal direction=RevealDirection::Left>
                <div class="space-y-6">
                    <h3 class="text-2xl font-display font-bold text-white">"About My Vision"</h3>
                    <p class="text-white/80 font-body leading-relaxed">
                        "Digital First Marketer, AI Specialist, and Creative Visionary with 9+ years of
                        expertise spanning healthcare marketing, product marketing, and technology
                        innovation. Currently Product Marketing Manager at Jio Platforms Limited,
                        building products that reach hundreds of millions of users."
                    </p>
                    <p class="text-white/80 font-body leading-relaxed">
                        "I believe the best marketing sits at the intersection of empathy and
                        engineering: understand people deeply, then use every tool technology
                        offers to meet them where they are."
                    </p>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="p-4 rounded-xl bg-white/5 border border-white/10 text-center">
                            <div class="text-2xl font-display font-black text-emerald-300">"9+"</div>
                            <div class="text-xs text-white/60 font-body">"Years of Innovation"</div>
                        </div>
                        <div class="p-4 rounded-xl bg-white/5 border border-white/10 text-center">
                            <div class="text-2xl font-display font-black text-cyan-300">"∞"</div>
                            <div class="text-xs text-white/60 font-body">"Possibilities Ahead"</div>
                        </div>
                    </div>
                </div>
            </Reveal>
            <div class="grid sm:grid-cols-2 gap-6">
                {PILLARS
                    .iter()
                    .enumerate()
                    .map(|(i, pillar)| {
                        view! {
                            <Reveal direction=RevealDirection::Right delay_ms={(i as u32) * 120}>
                                <div class="h-full p-6 rounded-2xl bg-white/5 border border-white/10 hover:border-emerald-500/40 transition-colors">
                                    <div class="text-3xl mb-4">{pillar.icon}</div>
                                    <h4 class="font-display font-semibold text-white mb-2">
                                        {pillar.title}
                                    </h4>
                                    <p class="text-sm text-white/70 font-body leading-relaxed">
                                        {pillar.description}
                                    </p>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
