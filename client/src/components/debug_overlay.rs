//! Debug-mode readout of the scene coordinate under the pointer.

use leptos::prelude::*;

use crate::state::map::{MapState, px};

#[component]
pub fn DebugOverlay() -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();

    move || {
        map.with(|s| s.coordinates.clone()).map(|label| {
            view! {
                <div class="debug-coordinates" style:left=px(label.at.x) style:top=px(label.at.y)>
                    {label.text}
                </div>
            }
        })
    }
}
