mod about;
mod background;
mod contact;
mod figma;
mod hero;
mod modal;
mod nav;
mod skills;
mod work;

pub use figma::FigmaEmbed;
pub use modal::Modal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{
    use_mouse_with_options, use_window_scroll, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
};
use std::convert::Infallible;

use crate::portfolio::{Section, PROFILE};
use crate::state::{DisplayState, Theme};
use about::About;
use background::Background;
use contact::{Contact, Footer};
use hero::Hero;
use nav::Navigation;
use skills::Skills;
use work::Work;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// Scrolls the page to `section` and records the jump in the page state.
///
/// Smoothness comes from the `scroll-smooth` class on `<html>`.
pub(crate) fn scroll_to_section(state: RwSignal<DisplayState>, section: Section) {
    match document().get_element_by_id(section.id()) {
        Some(el) => el.scroll_into_view(),
        None => log::warn!("no element with id '{}' to scroll to", section.id()),
    }
    log::debug!("navigated to {}", section.label());
    state.update(|s| s.navigate(section));
}

/// The glow layer is `position: fixed`, so it needs viewport coordinates.
fn pointer_coord_type() -> UseMouseCoordType<Infallible> {
    UseMouseCoordType::Client
}

/// Only mouse movement moves the glow.
const TRACK_TOUCH: bool = false;

#[component]
fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(DisplayState::default());
    let theme = Memo::new(move |_| state.with(|s| s.theme()));

    // listeners are removed by leptos-use when this owner is disposed
    let (_, scroll_y) = use_window_scroll();
    let UseMouseReturn { x, y, .. } = use_mouse_with_options(
        UseMouseOptions::default()
            .coord_type(pointer_coord_type())
            .touch(TRACK_TOUCH),
    );
    Effect::new(move |_| {
        let scroll_y = scroll_y.get();
        state.update(|s| s.set_scroll(scroll_y));
    });
    Effect::new(move |_| {
        let (x, y) = (x.get(), y.get());
        state.update(|s| s.set_pointer(x, y));
    });

    view! {
        <Title text="Portfolio" />
        <div class=move || {
            format!(
                "min-h-screen transition-colors duration-300 overflow-x-hidden {}",
                theme.get().pick("bg-slate-950 text-white", "bg-slate-50 text-slate-900"),
            )
        }>
            <Background state theme />
            <Navigation state theme />
            <Hero theme />
            <About theme />
            <Work state theme />
            <Skills theme />
            <Contact theme />
            <Footer state theme />
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="flex flex-col items-center justify-center min-h-screen bg-slate-950 text-white">
            <h1 class="text-4xl font-bold mb-4">"Page not found."</h1>
            <a href="/" class="text-cyan-400 hover:underline">
                "Back to the portfolio"
            </a>
        </main>
    }
}

/// Convenience for theme-dependent class strings in section views.
pub(crate) fn themed(
    theme: Memo<Theme>,
    base: &'static str,
    dark: &'static str,
    light: &'static str,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || format!("{base} {}", theme.get().pick(dark, light))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_uses_client_coordinates() {
        assert!(matches!(pointer_coord_type(), UseMouseCoordType::Client));
        assert!(!matches!(
            UseMouseCoordType::<Infallible>::default(),
            UseMouseCoordType::Client
        ));
        assert!(!TRACK_TOUCH);
    }
}
