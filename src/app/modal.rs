use leptos::{portal::Portal, prelude::*};

/// Overlay rendered into `<body>` above all page content while `open` is true.
///
/// The modal keeps no open state of its own: the backdrop and the close button
/// only call `on_close`, and the caller decides whether `open` flips.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    move || {
        if !open.get() {
            return None;
        }
        let children = children.clone();
        Some(view! {
            <Portal>
                {
                    let children = children.clone();
                    view! { <ModalLayer on_close>{children.as_ref().map(|c| c())}</ModalLayer> }
                }
            </Portal>
        })
    }
}

/// Backdrop plus centered container; what `Modal` mounts into the portal.
#[component]
pub fn ModalLayer(
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-[999] flex items-center justify-center" role="dialog" aria-modal="true">
            <div
                class="absolute inset-0 bg-black/70 backdrop-blur-sm"
                on:click=move |_| on_close.run(())
                aria-hidden="true"
            />
            <div class="relative w-[95vw] max-w-5xl rounded-2xl overflow-hidden border border-white/10 bg-slate-900">
                <button
                    on:click=move |_| on_close.run(())
                    class="absolute top-3 right-3 z-10 inline-flex items-center gap-2 px-3 py-2 rounded-xl bg-white/10 hover:bg-white/20 text-white"
                    aria-label="Close modal"
                >
                    "✕ Close"
                </button>
                {children.as_ref().map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_closed_modal_renders_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = StoredValue::new(0);
            let html = view! {
                <div id="host">
                    <Modal open=false on_close=move |_: ()| calls.update_value(|c| *c += 1)>
                        <p>"prototype"</p>
                    </Modal>
                </div>
            }
            .to_html();

            assert!(!html.contains("Close modal"));
            assert!(!html.contains("prototype"));
            assert!(!html.contains("z-[999]"));
            assert_eq!(calls.get_value(), 0);
        });
    }

    #[test]
    fn test_closed_modal_without_children() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <Modal open=false on_close=|_: ()| {} /> }.to_html();
            assert!(!html.contains("dialog"));
        });
    }

    #[test]
    fn test_open_layer_has_single_close_control() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <ModalLayer on_close=|_: ()| {}>
                    <p>"prototype"</p>
                </ModalLayer>
            }
            .to_html();

            assert_eq!(html.matches("aria-label=\"Close modal\"").count(), 1);
            assert_eq!(html.matches("<button").count(), 1);
            assert!(html.contains("z-[999]"));
            assert!(html.contains("bg-black/70"));
            assert!(html.contains("prototype"));
        });
    }

    #[test]
    fn test_open_layer_without_children() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <ModalLayer on_close=|_: ()| {} /> }.to_html();

            assert!(html.contains("role=\"dialog\""));
            assert_eq!(html.matches("aria-label=\"Close modal\"").count(), 1);
            assert!(!html.contains("<p"));
            assert!(!html.contains("<iframe"));
        });
    }
}
