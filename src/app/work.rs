use leptos::{either::Either, prelude::*};

use super::{themed, FigmaEmbed, Modal};
use crate::embed::RATIO_16_10;
use crate::portfolio::{ProjectEntry, PROJECTS};
use crate::state::{DisplayState, Theme};

#[component]
pub fn Work(state: RwSignal<DisplayState>, theme: Memo<Theme>) -> impl IntoView {
    let overlay_open = Memo::new(move |_| state.with(|s| s.overlay_open()));

    let close = move |_: ()| {
        log::debug!("closing prototype overlay");
        state.update(|s| s.close_overlay());
    };

    view! {
        <section id="work" class="relative py-32 px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-sm font-semibold text-cyan-400 mb-4 tracking-wider uppercase">
                        "Featured Work"
                    </h2>
                    <h3 class="text-4xl sm:text-5xl font-bold mb-6">
                        "Projects that make "
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent">
                            "a difference"
                        </span>
                    </h3>
                    <p class=themed(
                        theme,
                        "text-xl max-w-3xl mx-auto",
                        "text-slate-400",
                        "text-slate-600",
                    )>
                        "Live Figma prototypes embedded directly. Click any \u{201C}View Prototype\u{201D}."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project state theme /> })
                        .collect_view()}
                </div>

                <Modal open=overlay_open on_close=close>
                    <PrototypeContent state theme />
                </Modal>
            </div>
        </section>
    }
}

/// Overlay content for the prototype last opened from a project card.
#[component]
fn PrototypeContent(state: RwSignal<DisplayState>, theme: Memo<Theme>) -> impl IntoView {
    let active_prototype = Memo::new(move |_| state.with(|s| s.active_prototype().to_string()));

    move || {
        let url = active_prototype.get();
        if url.is_empty() {
            Either::Right(view! { <div class="p-10 text-center">"No prototype URL provided."</div> })
        } else {
            Either::Left(view! { <FigmaEmbed url theme=theme.get() ratio=RATIO_16_10 /> })
        }
    }
}

#[component]
fn ProjectCard(
    project: &'static ProjectEntry,
    state: RwSignal<DisplayState>,
    theme: Memo<Theme>,
) -> impl IntoView {
    let cover = if project.cover_is_gradient() {
        Either::Left(view! {
            <div style=format!("background: {}", project.cover) class="w-full h-full" />
        })
    } else {
        Either::Right(view! {
            <img src=project.cover_src() alt=project.title class="w-full h-full object-cover" />
        })
    };

    let prototype_button = project.figma_proto.map(|url| {
        view! {
            <button
                on:click=move |_| {
                    log::debug!("opening prototype {url}");
                    state.update(|s| s.open_prototype(url));
                }
                class="group inline-flex items-center space-x-2 px-4 py-2 rounded-full text-white bg-gradient-to-r from-cyan-500 to-blue-500 hover:shadow-lg hover:shadow-cyan-500/40 transition-all"
            >
                <span>"View Prototype"</span>
                <span class="group-hover:translate-x-1 transition-transform">"→"</span>
            </button>
        }
    });

    let file_link = project.figma_file.map(|href| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noreferrer"
                class=themed(
                    theme,
                    "inline-flex items-center space-x-2 px-4 py-2 rounded-full transition-colors",
                    "bg-white/5 border border-white/10 hover:bg-white/10",
                    "bg-white border border-slate-200 hover:bg-slate-50",
                )
            >
                <span>"◈"</span>
                <span>"Open in Figma"</span>
            </a>
        }
    });

    view! {
        <div class=themed(
            theme,
            "group relative backdrop-blur-sm border rounded-3xl overflow-hidden transition-all duration-500 hover:scale-[1.02]",
            "bg-white/5 border-white/10 hover:border-white/20",
            "bg-white border-slate-200 hover:border-slate-300 shadow-lg hover:shadow-xl",
        )>
            <div class="h-64 relative overflow-hidden">
                {cover}
                <div class=themed(
                    theme,
                    "absolute inset-0 bg-gradient-to-t",
                    "from-slate-950 via-slate-950/50 to-transparent",
                    "from-white via-white/50 to-transparent",
                ) />
                <div class=themed(
                    theme,
                    "absolute top-6 right-6 px-4 py-2 backdrop-blur-md rounded-full text-sm border",
                    "bg-white/10 border-white/20",
                    "bg-white/80 border-white",
                )>{project.category}</div>
            </div>

            <div class="p-8">
                <h4 class="text-2xl font-bold mb-3 group-hover:bg-gradient-to-r group-hover:from-cyan-400 group-hover:to-blue-400 group-hover:bg-clip-text group-hover:text-transparent transition-all">
                    {project.title}
                </h4>
                <p class=themed(
                    theme,
                    "mb-6 leading-relaxed",
                    "text-slate-400",
                    "text-slate-600",
                )>{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class=themed(
                                    theme,
                                    "px-3 py-1 border rounded-full text-sm",
                                    "bg-white/5 border-white/10 text-slate-300",
                                    "bg-slate-50 border-slate-200 text-slate-600",
                                )>{*tag}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap gap-3">{prototype_button} {file_link}</div>
            </div>
        </div>
    }
}
