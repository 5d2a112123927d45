use leptos::prelude::*;

use super::{scroll_to_section, themed};
use crate::portfolio::Section;
use crate::state::{DisplayState, Theme};

#[component]
pub fn Navigation(state: RwSignal<DisplayState>, theme: Memo<Theme>) -> impl IntoView {
    let scrolled = Memo::new(move |_| state.with(|s| s.is_scrolled()));
    let menu_open = Memo::new(move |_| state.with(|s| s.menu_open()));

    let nav_class = move || {
        let backdrop = if scrolled.get() {
            theme.get().pick(
                "bg-slate-950/80 backdrop-blur-xl border-b border-white/10",
                "bg-white/80 backdrop-blur-xl border-b border-slate-200 shadow-sm",
            )
        } else {
            ""
        };
        format!("fixed top-0 w-full z-50 transition-all duration-300 {backdrop}")
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-6 lg:px-0">
                <div class="flex justify-between items-center h-20">
                    <div class="text-2xl font-bold bg-gradient-to-r from-cyan-400 via-blue-400 to-pink-400 bg-clip-text text-transparent">
                        "Portfolio"
                    </div>

                    // desktop
                    <div class="hidden md:flex items-center space-x-4">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        on:click=move |_| scroll_to_section(state, section)
                                        class=themed(
                                            theme,
                                            "px-5 py-2 transition-colors relative group",
                                            "text-slate-300 hover:text-white",
                                            "text-slate-600 hover:text-slate-900",
                                        )
                                    >
                                        {section.label()}
                                        <span class="absolute bottom-0 left-1/2 -translate-x-1/2 w-0 h-0.5 bg-gradient-to-r from-cyan-400 to-blue-400 group-hover:w-3/4 transition-all duration-300" />
                                    </button>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle state theme extra_class="ml-2" />
                        <a
                            href="#contact"
                            class="ml-4 px-6 py-2.5 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full text-white font-medium hover:shadow-lg hover:shadow-cyan-500/50 transition-all transform hover:scale-105"
                        >
                            "Let's Talk"
                        </a>
                    </div>

                    // mobile
                    <div class="md:hidden flex items-center space-x-2">
                        <ThemeToggle state theme />
                        <button
                            on:click=move |_| state.update(|s| s.toggle_menu())
                            class="p-2 text-2xl leading-none"
                            aria-label="Toggle menu"
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class=themed(
                                theme,
                                "md:hidden backdrop-blur-xl border-t",
                                "bg-slate-900/95 border-white/10",
                                "bg-white/95 border-slate-200",
                            )>
                                <div class="px-6 py-6 space-y-4">
                                    {Section::ALL
                                        .into_iter()
                                        .map(|section| {
                                            view! {
                                                <button
                                                    on:click=move |_| scroll_to_section(state, section)
                                                    class=themed(
                                                        theme,
                                                        "block w-full text-left transition-colors py-2",
                                                        "text-slate-300 hover:text-white",
                                                        "text-slate-600 hover:text-slate-900",
                                                    )
                                                >
                                                    {section.label()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

#[component]
fn ThemeToggle(
    state: RwSignal<DisplayState>,
    theme: Memo<Theme>,
    #[prop(optional)] extra_class: &'static str,
) -> impl IntoView {
    let toggle = move |_| {
        state.update(|s| s.toggle_theme());
        log::debug!("theme set to {}", state.with_untracked(|s| s.theme().as_str()));
    };

    view! {
        <button
            on:click=toggle
            class=move || {
                format!(
                    "{extra_class} p-2 rounded-lg transition-all {}",
                    theme.get().pick("bg-white/5 hover:bg-white/10", "bg-slate-200 hover:bg-slate-300"),
                )
            }
            aria-label="Toggle theme"
        >
            {move || theme.get().pick("☀", "☾")}
        </button>
    }
}
