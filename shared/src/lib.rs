pub mod models {
    pub mod booking;
    pub mod court;
    pub mod gameday;
    pub mod league;
    pub mod locale;
    pub mod page_state;
    pub mod registration;
    pub mod user_search;
}

pub mod dto {
    pub mod booking;
    pub mod cart;
    pub mod common;
    pub mod note;
    pub mod user;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    booking::{BookingGate, BookingWindow},
    court::{ClickOutcome, CourtSelection, CourtTile, DurationControl},
    gameday::GameDaySubmit,
    league::{
        required_courts, CapacityVerdict, ClubOption, CourtCard, LeagueCourtPicker, LeagueForm,
    },
    locale::Language,
    registration::{RegistrationForm, SearchMode},
    user_search::{highlight_match, SearchAction, SearchGate, SearchRequest, SearchTicket, Segment},
};

// Re-export DTOs
pub use dto::{
    booking::{CheckMatchesRequest, CheckMatchesResponse},
    cart::CartResponse,
    common::ErrorResponse,
    note::DeleteNoteRequest,
    user::{UserSearchQuery, UserSuggestionDto},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_booking_flow_end_to_end() {
        let courts = (1..=4)
            .map(|i| CourtTile::new(i.to_string(), format!("Court {}", i)))
            .collect();
        let mut selection = CourtSelection::new(courts, 4);

        let response: CheckMatchesResponse =
            serde_json::from_str(r#"{"busyCourts": [2]}"#).unwrap();
        selection.apply_availability(&response.busy_courts);

        assert_eq!(selection.click("2").unwrap(), ClickOutcome::Ignored);
        for id in ["1", "3", "4"] {
            selection.click(id).unwrap();
        }
        assert_eq!(selection.selected_label(), "3 courts selected");
        assert_eq!(selection.player_total(), Some(16));
        assert_eq!(selection.duration(), DurationControl { minutes: 120, disabled: true });
    }

    #[test]
    fn test_league_capacity_reexports() {
        assert_eq!(required_courts(7), 4);
        assert!(!models::league::check_capacity(0, 8).can_submit());
    }
}
