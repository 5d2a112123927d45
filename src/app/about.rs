use leptos::prelude::*;

use super::themed;
use crate::portfolio::PROFILE;
use crate::state::Theme;

const CARD_BASE: &str = "backdrop-blur-sm rounded-2xl p-6 border shadow-sm";
const CARD_DARK: &str = "bg-white/5 border-white/10";
const CARD_LIGHT: &str = "bg-white border-slate-200";

#[component]
pub fn About(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section
            id="about"
            class=move || format!("relative py-32 px-6 lg:px-8 {}", theme.get().pick("", "bg-white"))
        >
            <div class="max-w-7xl mx-auto">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <h2 class="text-sm font-semibold text-cyan-400 mb-4 tracking-wider uppercase">
                            "About Me"
                        </h2>
                        <h3 class="text-4xl sm:text-5xl font-bold mb-8 leading-tight">
                            "Designing with purpose, "
                            <span class="bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent">
                                "developing with passion"
                            </span>
                        </h3>
                        <div class=themed(
                            theme,
                            "space-y-6 text-lg leading-relaxed",
                            "text-slate-400",
                            "text-slate-600",
                        )>
                            {PROFILE.bio.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                    </div>

                    <div class="relative">
                        <div class="grid md:grid-cols-2 gap-6">
                            <PersonalInfo theme />
                            <ExperienceCard theme />
                        </div>
                        <div class="mt-12 flex flex-wrap gap-3">
                            <a
                                href=PROFILE.cv_path
                                target="_blank"
                                rel="noopener"
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-full text-white font-medium bg-gradient-to-r from-cyan-500 to-blue-500 hover:shadow-lg hover:shadow-cyan-500/40 transition-all"
                            >
                                "View CV →"
                            </a>
                            <a
                                href=PROFILE.cv_path
                                download=""
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-full text-white font-medium bg-gradient-to-r from-blue-500 to-indigo-500 hover:shadow-lg hover:shadow-blue-500/40 transition-all"
                            >
                                "Download CV →"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PersonalInfo(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <div class=themed(theme, CARD_BASE, CARD_DARK, CARD_LIGHT)>
            <div class="flex items-center gap-3 mb-4">
                <span class="text-cyan-400">"👤"</span>
                <h4 class="text-xl font-semibold">"Personal Info"</h4>
            </div>
            <ul class=themed(theme, "space-y-2", "text-slate-300", "text-slate-700")>
                <li>
                    <span class="font-medium">"Name: "</span>
                    {PROFILE.name}
                </li>
                <li>
                    <span class="font-medium">"Age: "</span>
                    {PROFILE.age}
                </li>
                <li class="flex items-start gap-2">
                    <span class="text-cyan-400 shrink-0">"📍"</span>
                    <span>{PROFILE.location}</span>
                </li>
                <li class="flex items-start gap-2">
                    <span class="text-cyan-400 shrink-0">"✉"</span>
                    <a href=PROFILE.mailto() class="hover:underline">
                        {PROFILE.email}
                    </a>
                </li>
            </ul>
        </div>
    }
}

#[component]
fn ExperienceCard(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <div class=themed(theme, CARD_BASE, CARD_DARK, CARD_LIGHT)>
            <div class="flex items-center gap-3 mb-4">
                <span class="text-blue-400">"💼"</span>
                <h4 class="text-xl font-semibold">"Experience"</h4>
            </div>
            <ul class=themed(theme, "space-y-3", "text-slate-300", "text-slate-700")>
                {PROFILE
                    .experience
                    .iter()
                    .map(|e| {
                        view! {
                            <li>
                                <div class="font-medium">{e.role}</div>
                                <div class=themed(
                                    theme,
                                    "text-sm",
                                    "text-slate-400",
                                    "text-slate-500",
                                )>{e.organization}</div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
