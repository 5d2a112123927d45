use leptos::prelude::*;

use super::themed;
use crate::portfolio::SKILLS;
use crate::state::Theme;

#[component]
pub fn Skills(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section
            id="skills"
            class=move || format!("relative py-32 px-6 lg:px-8 {}", theme.get().pick("", "bg-white"))
        >
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-sm font-semibold text-cyan-400 mb-4 tracking-wider uppercase">
                        "Skills & Tools"
                    </h2>
                    <h3 class="text-4xl sm:text-5xl font-bold mb-6">
                        "My creative "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent">
                            "toolkit"
                        </span>
                    </h3>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-6">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class=themed(
                                    theme,
                                    "group relative backdrop-blur-sm border rounded-2xl p-8 hover:scale-110 transition-all duration-300",
                                    "bg-white/5 border-white/10 hover:border-white/20",
                                    "bg-white border-slate-200 hover:border-slate-300 shadow-lg hover:shadow-xl",
                                )>
                                    <div class=format!(
                                        "w-16 h-16 mx-auto mb-4 bg-gradient-to-br {} rounded-2xl flex items-center justify-center group-hover:rotate-12 transition-transform text-white text-2xl",
                                        skill.gradient,
                                    )>{skill.icon}</div>
                                    <h4 class=themed(
                                        theme,
                                        "text-center font-semibold group-hover:text-cyan-400 transition-colors",
                                        "text-white",
                                        "text-slate-900",
                                    )>{skill.name}</h4>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
