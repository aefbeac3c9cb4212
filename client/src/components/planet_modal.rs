//! Modal with the name, description and dominant race of a known planet.

#[cfg(test)]
#[path = "planet_modal_test.rs"]
mod planet_modal_test;

use leptos::prelude::*;

use crate::state::map::MapState;

/// Keys that close the modal while it has focus.
fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Planet detail modal. Closed by its close button, by a click on the overlay
/// outside the content, or by Escape. The content takes focus when it opens
/// so Escape works without a prior click.
#[component]
pub fn PlanetModal(on_close: Callback<()>) -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Some(el) = modal_ref.get() {
            if let Err(e) = el.focus() {
                log::warn!("could not focus planet modal: {e:?}");
            }
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    move || {
        map.with(|s| s.detail.clone()).map(|detail| {
            view! {
                <div class="modal-overlay" on:click=on_backdrop>
                    <div
                        class="modal"
                        node_ref=modal_ref
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=on_keydown
                        tabindex="0"
                    >
                        <button class="modal__close" type="button" on:click=on_close_click>
                            "\u{00d7}"
                        </button>
                        <h2 class="modal__title">{detail.name}</h2>
                        <div class="modal__content">
                            <p>{detail.info}</p>
                            <p>
                                <strong>"Dominant race: "</strong>
                                {detail.race}
                            </p>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
