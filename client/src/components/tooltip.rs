//! Hover label for planets and markers.

use leptos::prelude::*;

use crate::state::map::{MapState, px};

#[component]
pub fn Tooltip() -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();

    move || {
        map.with(|s| s.tooltip.clone()).map(|label| {
            view! {
                <div class="tooltip" style:left=px(label.at.x) style:top=px(label.at.y)>
                    {label.text}
                </div>
            }
        })
    }
}
