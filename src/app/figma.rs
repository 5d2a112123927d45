use leptos::{either::Either, prelude::*};

use crate::embed::{embed_src, EmbedOptions, EmbedTheme};

/// Figma viewer in a fixed aspect-ratio box, or "Invalid URL" for anything
/// that isn't an http(s) address.
#[component]
pub fn FigmaEmbed(
    #[prop(into)] url: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] theme: Option<EmbedTheme>,
    #[prop(optional, into)] ratio: Option<String>,
) -> impl IntoView {
    let defaults = EmbedOptions::default();
    let title = title.unwrap_or(defaults.title);
    let theme = theme.unwrap_or(defaults.theme);
    let ratio = ratio.unwrap_or(defaults.ratio);

    let frame = match embed_src(&url, theme) {
        Ok(src) => Either::Left(view! {
            <iframe
                title=title
                class="absolute inset-0 w-full h-full"
                allowfullscreen=true
                src=src
            ></iframe>
        }),
        Err(_) => Either::Right(view! {
            <div class="absolute inset-0 flex items-center justify-center text-sm opacity-80">
                "Invalid URL"
            </div>
        }),
    };

    view! {
        <div class="relative w-full bg-black/20" style=format!("padding-top: {ratio}")>
            {frame}
        </div>
    }
}
