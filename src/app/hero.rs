use leptos::prelude::*;

use super::themed;
use crate::portfolio::PROFILE;
use crate::state::Theme;

#[component]
pub fn Hero(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-20 px-6 lg:px-8 min-h-screen flex items-center">
            <div class="max-w-7xl mx-auto w-full">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <h1 class="text-6xl sm:text-7xl lg:text-8xl font-bold mb-6 leading-tight">
                            <span class=themed(
                                theme,
                                "block text-2xl sm:text-3xl font-normal mb-4",
                                "text-slate-400",
                                "text-slate-500",
                            )>"Hi, I'm"</span>
                            <span class=themed(
                                theme,
                                "bg-gradient-to-r bg-clip-text text-transparent",
                                "from-white via-cyan-100 to-blue-100",
                                "from-slate-900 via-cyan-600 to-blue-600",
                            )>{PROFILE.name}</span>
                        </h1>
                        <p class="text-3xl sm:text-4xl font-semibold bg-gradient-to-r from-cyan-400 via-blue-400 to-pink-400 bg-clip-text text-transparent mb-6">
                            {PROFILE.headline}
                        </p>
                        <p class=themed(
                            theme,
                            "text-xl mb-12 max-w-2xl leading-relaxed",
                            "text-slate-400",
                            "text-slate-600",
                        )>{PROFILE.tagline}</p>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href="#work"
                                class="group px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full font-medium hover:shadow-2xl hover:shadow-cyan-500/50 transition-all transform hover:scale-105 flex items-center space-x-2 text-white"
                            >
                                <span>"View My Work"</span>
                                <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                            </a>
                            <a
                                href="#contact"
                                class=themed(
                                    theme,
                                    "px-8 py-4 backdrop-blur-sm border rounded-full font-medium transition-all flex items-center space-x-2",
                                    "bg-white/5 border-white/10 hover:bg-white/10",
                                    "bg-white border-slate-200 hover:bg-slate-50 shadow-sm",
                                )
                            >
                                <span>"Get In Touch"</span>
                            </a>
                        </div>
                    </div>

                    <div class="relative flex justify-center lg:justify-end">
                        <div class="relative">
                            <div class=themed(
                                theme,
                                "absolute -inset-10 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full blur-3xl",
                                "opacity-30",
                                "opacity-20",
                            ) />
                            <div class=themed(
                                theme,
                                "relative w-72 h-72 sm:w-80 sm:h-80 lg:w-[28rem] lg:h-[38rem] rounded-full overflow-hidden border-4",
                                "border-white/10",
                                "border-white shadow-2xl",
                            )>
                                <img
                                    src=PROFILE.photo
                                    alt="Profile"
                                    class="w-full h-full object-cover"
                                    loading="eager"
                                />
                            </div>
                            <div class="absolute -top-6 -right-6 w-28 h-28 bg-gradient-to-br from-pink-500 to-rose-500 rounded-2xl rotate-12 opacity-80" />
                            <div class="absolute -bottom-6 -left-6 w-36 h-36 bg-gradient-to-br from-emerald-500 to-teal-500 rounded-3xl -rotate-12 opacity-80" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
