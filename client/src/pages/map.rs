//! Map page: the full-window star map.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::map_host::MapHost;
use crate::state::map::{MapState, options_from_query};

/// Reads `?debug=true` once, provides the `MapState` context and mounts the
/// map host.
#[component]
pub fn MapPage() -> impl IntoView {
    let query = use_query_map();
    let options = options_from_query(query.read_untracked().get("debug").as_deref());

    let map = RwSignal::new(MapState::default());
    provide_context(map);

    view! { <MapHost options/> }
}
