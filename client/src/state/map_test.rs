use super::*;
use atlas::catalog::Catalog;
use atlas::consts::{CURSOR_GRABBING, DEFAULT_SCENE_EDGE_PX};
use atlas::input::PointerSource;
use atlas::session::{Action, ViewportSession, apply_actions};

const PLANETS: &str = r##"[
    {"id":"p1","x":400,"y":300,"radius":20,"color":"#f00","name":"Aurelia","info":"Capital",
     "race":"Human","visible":true,"unknown":false}
]"##;

fn loaded_session() -> ViewportSession {
    let mut session = ViewportSession::new(MapOptions::default());
    session.load(Catalog::from_json(PLANETS, "[]").unwrap());
    session
}

#[test]
fn map_state_defaults_are_neutral() {
    let state = MapState::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.entities.is_empty());
    assert_eq!(state.scene, Size::new(DEFAULT_SCENE_EDGE_PX, DEFAULT_SCENE_EDGE_PX));
    assert_eq!(state.transform, "translate(0px, 0px)");
    assert!(state.tooltip.is_none());
    assert!(state.detail.is_none());
    assert!(state.coordinates.is_none());
    assert_eq!(state.cursor, CURSOR_GRAB);
}

#[test]
fn render_places_session_visuals() {
    let session = loaded_session();
    let mut state = MapState::default();
    session.render(&mut state);
    assert_eq!(state.entities.len(), 1);
    assert_eq!(state.entities[0].id, "p1");
}

#[test]
fn drag_actions_update_transform_and_cursor() {
    let mut session = loaded_session();
    let mut state = MapState::default();
    apply_actions(&mut state, &session.set_container(Size::new(800.0, 600.0)));

    apply_actions(&mut state, &session.on_pointer_down(Point::new(10.0, 10.0), PointerSource::Mouse));
    assert_eq!(state.cursor, CURSOR_GRABBING);

    apply_actions(&mut state, &session.on_pointer_move(Point::new(-90.0, -40.0)));
    assert_eq!(state.offset, Point::new(-100.0, -50.0));
    assert_eq!(state.transform, "translate(-100px, -50px)");

    apply_actions(&mut state, &session.on_pointer_up(PointerSource::Mouse));
    assert_eq!(state.cursor, CURSOR_GRAB);
}

#[test]
fn move_tooltip_without_tooltip_is_noop() {
    let mut state = MapState::default();
    state.move_tooltip(Point::new(5.0, 5.0));
    assert!(state.tooltip.is_none());
}

#[test]
fn tooltip_follows_pointer_until_hidden() {
    let mut state = MapState::default();
    apply_actions(
        &mut state,
        &[
            Action::ShowTooltip { text: "Aurelia".to_owned(), at: Point::new(20.0, 20.0) },
            Action::MoveTooltip { at: Point::new(30.0, 25.0) },
        ],
    );
    assert_eq!(
        state.tooltip,
        Some(PointerLabel { text: "Aurelia".to_owned(), at: Point::new(30.0, 25.0) })
    );
    apply_actions(&mut state, &[Action::HideTooltip]);
    assert!(state.tooltip.is_none());
}

#[test]
fn click_opens_and_dismiss_closes_detail() {
    let mut session = loaded_session();
    let mut state = MapState::default();
    apply_actions(&mut state, &session.on_click(Point::new(420.0, 320.0)));
    assert_eq!(state.detail.as_ref().map(|d| d.name.as_str()), Some("Aurelia"));

    apply_actions(&mut state, &session.dismiss_detail());
    assert!(state.detail.is_none());
}

#[test]
fn options_from_query_requires_exact_true() {
    assert!(options_from_query(Some("true")).debug);
    assert!(!options_from_query(Some("1")).debug);
    assert!(!options_from_query(Some("TRUE")).debug);
    assert!(!options_from_query(None).debug);
    assert_eq!(options_from_query(None).min_scene, MapOptions::default().min_scene);
}

#[test]
fn px_formats_css_lengths() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(-3.5), "-3.5px");
}
