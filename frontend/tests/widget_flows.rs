use frontend::pages::booking::{BookingAction, BookingPageData, BookingState};
use frontend::pages::league_edit::initial_tab;
use frontend::shared::models::page_state::{edit_href, edit_requested};
use frontend::shared::{
    BookingWindow, CourtTile, RegistrationForm, SearchAction, SearchGate, SearchMode, SharedError,
    UserSuggestionDto,
};
use pretty_assertions::assert_eq;
use std::rc::Rc;
use yew::Reducible;

fn booking_state(court_count: u32) -> Rc<BookingState> {
    let data = BookingPageData {
        courts: (1..=5)
            .map(|i| CourtTile::new(i.to_string(), format!("Court {}", i)))
            .collect(),
        court_count,
        action: "/book".to_string(),
        selected_courts: Vec::new(),
    };
    Rc::new(BookingState::new(&data))
}

#[test]
fn test_booking_session_limits_selection_to_court_count() {
    let mut state = booking_state(2);
    state = state.reduce(BookingAction::DatePicked(Some(1_714_600_800_000)));
    for id in ["1", "2", "3"] {
        state = state.reduce(BookingAction::ClickCourt(id.to_string()));
    }

    assert!(state.gate.form_visible());
    assert_eq!(state.selection.selected_ids(), vec!["1".to_string(), "2".to_string()]);
    assert_eq!(state.selection.total_players(), 8);
    assert_eq!(state.rejection, Some(SharedError::CourtLimit { allowed: 2 }));
}

#[test]
fn test_busy_court_drops_out_of_selection() {
    let mut state = booking_state(3);
    state = state.reduce(BookingAction::DatePicked(Some(1_714_600_800_000)));
    state = state.reduce(BookingAction::ClickCourt("4".to_string()));
    state = state.reduce(BookingAction::Availability {
        window: BookingWindow::from_millis(1_714_600_800_000).unwrap(),
        busy: vec!["4".to_string()],
    });

    assert_eq!(state.selection.selected_count(), 0);
    assert!(state.selection.courts()[3].disabled);
}

#[test]
fn test_changing_court_count_resets_tiles() {
    let mut state = booking_state(2);
    state = state.reduce(BookingAction::ClickCourt("1".to_string()));
    state = state.reduce(BookingAction::SetCourtCount(4));

    assert_eq!(state.selection.selected_count(), 0);
    assert_eq!(state.selection.duration().minutes, 120);
    assert!(state.selection.duration().disabled);
}

#[test]
fn test_typing_then_picking_a_user() {
    let mut gate = SearchGate::new();
    let mut form = RegistrationForm::new(SearchMode::EventRegistration);

    for text in ["An", "Ana", "Ana S"] {
        form.set_search_text(text);
        let action = gate.on_input(text);
        if text.len() < 3 {
            assert_eq!(action, SearchAction::Hide);
        }
    }
    let request = gate.fire().expect("pending query");
    assert_eq!(request.query, "Ana S");
    assert!(gate.fire().is_none());

    let users = gate
        .accept(
            request.ticket,
            vec![UserSuggestionDto {
                id: 7,
                name: "Ana Silva".to_string(),
                email: "ana@example.com".to_string(),
                telephone: "912345678".to_string(),
            }],
        )
        .expect("latest response");
    form.select(&users[0]);

    assert!(form.is_locked());
    assert_eq!(form.user_id(), Some(7));
    assert!(form.validate_submit().is_ok());
}

#[test]
fn test_league_edit_url_state() {
    assert_eq!(initial_tab("#teams"), "teams");
    assert!(edit_requested("?edit=true"));

    let opened = edit_href("https://club.example/leagues/3/edit#teams", true);
    assert_eq!(opened, "https://club.example/leagues/3/edit?edit=true#teams");
    assert_eq!(edit_href(&opened, false), "https://club.example/leagues/3/edit#teams");
}
