//! Bridge component between DOM events and `atlas::session::ViewportSession`.
//!
//! ARCHITECTURE
//! ============
//! The session owns every piece of mutable map state and answers each event
//! with a list of actions. This host converts DOM coordinates to
//! container-relative points, forwards them, and applies the returned actions
//! to the `MapState` signal. Clipboard copies are the one action that is not
//! a display change and are handed to `util::clipboard` instead.
//!
//! Mouse-down and touch-start are observed on the container. Moves and
//! releases are observed on the window so a drag keeps tracking after the
//! pointer leaves the map.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use atlas::input::PointerSource;
use atlas::render::EntityVisual;
use atlas::session::{Action, MapOptions, ViewportSession, apply_actions};

use crate::components::debug_overlay::DebugOverlay;
use crate::components::planet_modal::PlanetModal;
use crate::components::tooltip::Tooltip;
use crate::state::map::MapState;
use crate::util::clipboard::copy_text;
#[cfg(feature = "csr")]
use crate::util::pointer::{container_size, mouse_point, touch_points};

#[cfg(feature = "csr")]
use crate::net::api::fetch_catalog;
#[cfg(feature = "csr")]
use crate::state::map::LoadStatus;
#[cfg(feature = "csr")]
use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Run a session handler and collect its actions.
fn run(
    session: StoredValue<ViewportSession>,
    handler: impl FnOnce(&mut ViewportSession) -> Vec<Action>,
) -> Vec<Action> {
    let mut actions = Vec::new();
    session.update_value(|s| actions = handler(s));
    actions
}

/// Apply session actions: display changes go to `MapState`, clipboard copies
/// to the system clipboard.
fn dispatch(map: RwSignal<MapState>, actions: Vec<Action>) {
    if actions.is_empty() {
        return;
    }
    for action in &actions {
        if let Action::CopyToClipboard(text) = action {
            copy_text(text.clone());
        }
    }
    map.update(|state| apply_actions(state, &actions));
}

#[cfg(feature = "csr")]
fn seeded_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits())
}

#[cfg(not(feature = "csr"))]
fn seeded_rng() -> SmallRng {
    rand::SeedableRng::seed_from_u64(0)
}

/// Fetch the fixtures, lay out the scene and center it once.
#[cfg(feature = "csr")]
fn load_map(
    session: StoredValue<ViewportSession>,
    map: RwSignal<MapState>,
    container_ref: NodeRef<leptos::html::Div>,
) {
    leptos::task::spawn_local(async move {
        let catalog = match fetch_catalog().await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("error loading map data: {e}");
                map.update(|state| state.status = LoadStatus::Failed(e));
                return;
            }
        };
        let rendered = catalog.rendered_count();
        let size = container_ref
            .get_untracked()
            .map(|el| container_size(&el))
            .unwrap_or_default();

        let resized = run(session, |s| {
            s.load(catalog);
            s.set_container(size)
        });
        map.update(|state| {
            session.with_value(|s| {
                s.render(state);
                state.scene = s.viewport().scene();
            });
            apply_actions(state, &resized);
        });
        dispatch(map, run(session, ViewportSession::center));
        map.update(|state| state.status = LoadStatus::Ready);
        log::info!(
            "map ready: {rendered} entities, scene {}x{}",
            map.with_untracked(|s| s.scene.width),
            map.with_untracked(|s| s.scene.height)
        );
    });
}

/// Window-level listeners: drag continuation, release and resize.
#[cfg(feature = "csr")]
fn install_window_listeners(
    session: StoredValue<ViewportSession>,
    map: RwSignal<MapState>,
    container_ref: NodeRef<leptos::html::Div>,
) {
    let on_move = window_event_listener(leptos::ev::mousemove, move |ev| {
        if !session.with_value(ViewportSession::is_dragging) {
            return;
        }
        let Some(el) = container_ref.get_untracked() else {
            return;
        };
        // Moves inside the container are already handled there.
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| el.contains(Some(&node)));
        if inside {
            return;
        }
        let point = mouse_point(&el, &ev);
        dispatch(map, run(session, |s| s.on_drag_move(point)));
    });
    let on_up = window_event_listener(leptos::ev::mouseup, move |_| {
        dispatch(map, run(session, |s| s.on_pointer_up(PointerSource::Mouse)));
    });
    let on_touch_move = window_event_listener(leptos::ev::touchmove, move |ev| {
        let Some(el) = container_ref.get_untracked() else {
            return;
        };
        let touches = touch_points(&el, &ev);
        dispatch(map, run(session, |s| s.on_touch_move(&touches)));
    });
    let on_touch_end = window_event_listener(leptos::ev::touchend, move |_| {
        dispatch(map, run(session, ViewportSession::on_touch_end));
    });
    let on_resize = window_event_listener(leptos::ev::resize, move |_| {
        let Some(el) = container_ref.get_untracked() else {
            return;
        };
        let size = container_size(&el);
        dispatch(map, run(session, |s| s.set_container(size)));
    });

    on_cleanup(move || {
        on_move.remove();
        on_up.remove();
        on_touch_move.remove();
        on_touch_end.remove();
        on_resize.remove();
    });
}

/// Map host component.
///
/// Renders the container, the translated scene layer with one element per
/// entity visual, and the pointer labels. The detail modal sits outside the
/// container so its overlay covers the whole page.
#[component]
pub fn MapHost(options: MapOptions) -> impl IntoView {
    let map = expect_context::<RwSignal<MapState>>();
    let session = StoredValue::new(ViewportSession::new(options));
    let rng = StoredValue::new(seeded_rng());
    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        install_window_listeners(session, map, container_ref);
        let load_started = StoredValue::new(false);
        Effect::new(move || {
            if container_ref.get().is_some() && !load_started.get_value() {
                load_started.set_value(true);
                load_map(session, map, container_ref);
            }
        });
    }

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let point = mouse_point(&el, &ev);
            let actions = run(session, |s| s.on_pointer_down(point, PointerSource::Mouse));
            if session.with_value(ViewportSession::is_dragging) {
                // Keep a drag from selecting text.
                ev.prevent_default();
            }
            dispatch(map, actions);
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let point = mouse_point(&el, &ev);
            dispatch(map, run(session, |s| s.on_pointer_move(point)));
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_mouse_leave = move |_: leptos::ev::MouseEvent| {
        dispatch(map, run(session, ViewportSession::on_pointer_leave));
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let touches = touch_points(&el, &ev);
            let actions = run(session, |s| s.on_touch_start(&touches));
            if session.with_value(ViewportSession::is_dragging) {
                ev.prevent_default();
            }
            dispatch(map, actions);
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_double_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let point = mouse_point(&el, &ev);
            let mut result = Ok(Vec::new());
            session.update_value(|s| {
                rng.update_value(|r| result = s.on_double_click(point, r));
            });
            match result {
                Ok(actions) => dispatch(map, actions),
                Err(e) => log::error!("failed to serialize authored planet: {e}"),
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, rng);
    };

    let on_entity_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(el) = container_ref.get_untracked() else {
                return;
            };
            let point = mouse_point(&el, &ev);
            dispatch(map, run(session, |s| s.on_click(point)));
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_close = Callback::new(move |()| {
        let actions = session.with_value(ViewportSession::dismiss_detail);
        dispatch(map, actions);
    });

    let entity_view = move |visual: EntityVisual| {
        let icon = visual.icon_class().zip(visual.icon_style());
        view! {
            <div class=visual.class_name() style=visual.css_text() on:click=on_entity_click>
                {icon.map(|(class, style)| view! { <i class=class style=style aria-hidden="true"></i> })}
            </div>
        }
    };

    view! {
        <div
            class="map-container"
            node_ref=container_ref
            style:cursor=move || map.with(|s| s.cursor)
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseleave=on_mouse_leave
            on:touchstart=on_touch_start
            on:dblclick=on_double_click
        >
            <div
                class="scene"
                style:width=move || map.with(|s| crate::state::map::px(s.scene.width))
                style:height=move || map.with(|s| crate::state::map::px(s.scene.height))
                style:transform=move || map.with(|s| s.transform.clone())
            >
                <For
                    each=move || map.with(|s| s.entities.clone())
                    key=|visual| visual.key
                    children=entity_view
                />
            </div>
            <Tooltip/>
            <DebugOverlay/>
        </div>
        <PlanetModal on_close/>
    }
}
