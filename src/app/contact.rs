use leptos::prelude::*;

use super::{scroll_to_section, themed};
use crate::portfolio::{Section, PROFILE};
use crate::state::{DisplayState, Theme};

#[component]
pub fn Contact(theme: Memo<Theme>) -> impl IntoView {
    view! {
        <section id="contact" class="relative py-32 px-6 lg:px-8">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-sm font-semibold text-cyan-400 mb-4 tracking-wider uppercase">
                    "Get In Touch"
                </h2>
                <h3 class="text-4xl sm:text-5xl font-bold mb-6">
                    "Let's create something "
                    <span class="bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent">
                        "amazing together"
                    </span>
                </h3>
                <p class=themed(
                    theme,
                    "text-xl mb-12 max-w-2xl mx-auto",
                    "text-slate-400",
                    "text-slate-600",
                )>
                    "I'm always excited to collaborate on innovative projects or discuss new opportunities."
                </p>
                <a
                    href=PROFILE.mailto()
                    class="inline-flex items-center space-x-2 px-10 py-5 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full font-semibold text-lg hover:shadow-2xl hover:shadow-cyan-500/50 transition-all transform hover:scale-105 text-white"
                >
                    <span>"✉"</span>
                    <span>{PROFILE.email}</span>
                </a>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(state: RwSignal<DisplayState>, theme: Memo<Theme>) -> impl IntoView {
    let copyright = format!(
        "© {} {}. Crafted with creativity and code.",
        env!("BUILD_YEAR"),
        PROFILE.name
    );

    view! {
        <footer class=themed(
            theme,
            "relative border-t py-12 px-6 lg:px-8",
            "border-white/10",
            "border-slate-200 bg-white",
        )>
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <div class=themed(theme, "mb-4 md:mb-0", "text-slate-400", "text-slate-600")>
                    {copyright}
                </div>
                <div class=themed(theme, "flex space-x-8", "text-slate-400", "text-slate-600")>
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| scroll_to_section(state, section)
                                    class=themed(
                                        theme,
                                        "transition-colors",
                                        "hover:text-white",
                                        "hover:text-slate-900",
                                    )
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_footer_shows_build_year() {
        let owner = Owner::new();
        owner.with(|| {
            let state = RwSignal::new(DisplayState::default());
            let theme = Memo::new(move |_| state.with(|s| s.theme()));

            let html = view! { <Footer state theme /> }.to_html();
            assert!(html.contains(&format!("© {} {}", env!("BUILD_YEAR"), PROFILE.name)));
            for section in Section::ALL {
                assert!(html.contains(section.label()));
            }
        });
    }
}
