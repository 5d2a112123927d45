use leptos::prelude::*;

use crate::state::{DisplayState, Pointer, Theme};

/// Half the glow's size, so the glow is centered on the pointer.
const GLOW_OFFSET: f64 = 192.0;

/// Position of the glow inside the fixed, viewport-sized layer.
fn glow_style(pointer: Pointer) -> String {
    format!(
        "left: {}px; top: {}px;",
        pointer.x - GLOW_OFFSET,
        pointer.y - GLOW_OFFSET
    )
}

#[component]
pub fn Background(state: RwSignal<DisplayState>, theme: Memo<Theme>) -> impl IntoView {
    let pointer = Memo::new(move |_| state.with(|s| s.pointer()));

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div
                class=move || {
                    format!(
                        "absolute w-96 h-96 rounded-full blur-3xl transition-all duration-1000 bg-gradient-to-r from-cyan-500 to-blue-500 {}",
                        theme.get().pick("opacity-20", "opacity-10"),
                    )
                }
                style=move || glow_style(pointer.get())
            />
            <div class=move || {
                format!(
                    "absolute top-0 right-0 w-[600px] h-[600px] rounded-full blur-3xl bg-gradient-to-r from-pink-500 to-rose-500 {}",
                    theme.get().pick("opacity-10", "opacity-5"),
                )
            } />
            <div class=move || {
                format!(
                    "absolute bottom-0 left-0 w-[500px] h-[500px] rounded-full blur-3xl bg-gradient-to-r from-emerald-500 to-teal-500 {}",
                    theme.get().pick("opacity-10", "opacity-5"),
                )
            } />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_centered_on_viewport_pointer() {
        let style = glow_style(Pointer { x: 500.0, y: 300.0 });
        assert_eq!(style, "left: 308px; top: 108px;");

        let style = glow_style(Pointer { x: 0.0, y: 0.0 });
        assert_eq!(style, "left: -192px; top: -192px;");
    }
}
