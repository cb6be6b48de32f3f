use super::*;

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn idle_drag_reports_nothing() {
    let mut state = InputState::Idle;
    assert_eq!(state.drag_to(Point::new(10.0, 10.0)), None);
    assert_eq!(state, InputState::Idle);
}

#[test]
fn orbit_drag_reports_incremental_deltas() {
    let mut state = InputState::Orbiting { last_screen: Point::new(10.0, 20.0) };
    assert_eq!(state.drag_to(Point::new(15.0, 18.0)), Some((5.0, -2.0)));
    assert_eq!(state.drag_to(Point::new(15.0, 28.0)), Some((0.0, 10.0)));
    assert_eq!(state, InputState::Orbiting { last_screen: Point::new(15.0, 28.0) });
}

#[test]
fn dom_buttons_map_to_variants() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(7), Button::Primary);
}

#[test]
fn modifiers_default_to_released() {
    let m = Modifiers::default();
    assert!(!m.shift && !m.ctrl && !m.alt && !m.meta);
}
