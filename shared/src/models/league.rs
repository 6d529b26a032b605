use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};

/// Teams play two per court.
pub fn required_courts(team_count: u32) -> u32 {
    team_count.div_ceil(2)
}

/// Reads a numeric form field the way the league forms do: the leading run of
/// digits counts (`"7.5"` is 7, `"12 teams"` is 12) and anything that does
/// not start with one counts as zero. Huge inputs saturate.
pub fn parse_count(raw: &str) -> u32 {
    let raw = raw.trim_start();
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(u32::from(d - b'0')))
}

/// Outcome of checking a club's courts against a requested team count on the
/// league creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapacityVerdict {
    /// Enough courts; submission allowed.
    Ready,
    /// No team count yet; submission disabled without a warning.
    AwaitingTeams,
    /// Submission blocked; the error carries the warning to display.
    Blocked(SharedError),
}

impl CapacityVerdict {
    pub fn can_submit(&self) -> bool {
        matches!(self, CapacityVerdict::Ready)
    }

    pub fn warning(&self) -> Option<String> {
        match self {
            CapacityVerdict::Blocked(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

/// Creation rule: a club without courts is always rejected, otherwise the
/// club must hold `ceil(teams / 2)` courts.
pub fn check_capacity(available_courts: u32, team_count: u32) -> CapacityVerdict {
    let required = required_courts(team_count);
    if available_courts == 0 {
        CapacityVerdict::Blocked(SharedError::NoCourts)
    } else if team_count > 0 && required > available_courts {
        CapacityVerdict::Blocked(SharedError::InsufficientCourts {
            required,
            teams: team_count,
            available: available_courts,
        })
    } else if team_count > 0 {
        CapacityVerdict::Ready
    } else {
        CapacityVerdict::AwaitingTeams
    }
}

/// Edit rule: only the shortfall itself blocks the save.
pub fn check_edit_capacity(available_courts: u32, team_count: u32) -> Result<()> {
    let required = required_courts(team_count);
    if available_courts < required {
        return Err(SharedError::CourtShortfall {
            required,
            teams: team_count,
        });
    }
    Ok(())
}

/// A club as offered in the club dropdown, with its court total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub courts: u32,
}

/// View-model for the league creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueForm {
    clubs: Vec<ClubOption>,
    club_id: String,
    teams_input: String,
}

impl LeagueForm {
    pub fn new(clubs: Vec<ClubOption>) -> Self {
        let club_id = clubs.first().map(|c| c.id.clone()).unwrap_or_default();
        Self {
            clubs,
            club_id,
            teams_input: String::new(),
        }
    }

    pub fn clubs(&self) -> &[ClubOption] {
        &self.clubs
    }

    pub fn club_id(&self) -> &str {
        &self.club_id
    }

    pub fn teams_input(&self) -> &str {
        &self.teams_input
    }

    pub fn select_club(&mut self, club_id: impl Into<String>) -> CapacityVerdict {
        self.club_id = club_id.into();
        self.verdict()
    }

    pub fn set_teams(&mut self, raw: impl Into<String>) -> CapacityVerdict {
        self.teams_input = raw.into();
        self.verdict()
    }

    pub fn team_count(&self) -> u32 {
        parse_count(&self.teams_input)
    }

    /// Courts of the chosen club; an unknown club has none.
    pub fn available_courts(&self) -> u32 {
        self.clubs
            .iter()
            .find(|c| c.id == self.club_id)
            .map(|c| c.courts)
            .unwrap_or(0)
    }

    pub fn verdict(&self) -> CapacityVerdict {
        check_capacity(self.available_courts(), self.team_count())
    }
}

/// One court card on the league court assignment page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

/// View-model for assigning courts to an existing league: exactly
/// `ceil(teams / 2)` cards must be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueCourtPicker {
    cards: Vec<CourtCard>,
    team_count: u32,
    info_open: bool,
}

impl LeagueCourtPicker {
    pub fn new(cards: Vec<CourtCard>, team_count: u32) -> Self {
        Self {
            cards,
            team_count,
            info_open: false,
        }
    }

    pub fn cards(&self) -> &[CourtCard] {
        &self.cards
    }

    pub fn required(&self) -> u32 {
        required_courts(self.team_count)
    }

    pub fn checked_count(&self) -> u32 {
        self.cards.iter().filter(|c| c.checked).count() as u32
    }

    pub fn toggle(&mut self, card_id: &str) -> bool {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id) {
            card.checked = !card.checked;
        }
        self.is_valid()
    }

    pub fn set_checked(&mut self, card_id: &str, checked: bool) -> bool {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id) {
            card.checked = checked;
        }
        self.is_valid()
    }

    pub fn is_valid(&self) -> bool {
        self.checked_count() == self.required()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SharedError::CourtAssignment {
                required: self.required(),
                selected: self.checked_count(),
            })
        }
    }

    pub fn info_open(&self) -> bool {
        self.info_open
    }

    pub fn toggle_info(&mut self) {
        self.info_open = !self.info_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn clubs() -> Vec<ClubOption> {
        vec![
            ClubOption {
                id: "1".to_string(),
                name: "Empty Club".to_string(),
                courts: 0,
            },
            ClubOption {
                id: "2".to_string(),
                name: "Padel Center".to_string(),
                courts: 3,
            },
        ]
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(2, 1)]
    #[case(7, 4)]
    #[case(8, 4)]
    #[case(9, 5)]
    fn test_required_courts_rounds_up(#[case] teams: u32, #[case] expected: u32) {
        assert_eq!(required_courts(teams), expected);
    }

    #[rstest]
    #[case("6", 6)]
    #[case(" 12 ", 12)]
    #[case("7.5", 7)]
    #[case("12teams", 12)]
    #[case("+4", 4)]
    #[case("-3", 0)]
    #[case("abc", 0)]
    #[case("", 0)]
    #[case("99999999999", u32::MAX)]
    fn test_parse_count_reads_leading_digits(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_count(raw), expected);
    }

    #[test]
    fn test_fractional_team_count_is_truncated_not_ignored() {
        assert_eq!(check_capacity(4, parse_count("7.5")), CapacityVerdict::Ready);
        assert_eq!(check_capacity(3, parse_count("7.5")).warning().as_deref(), Some(
            "The selected club does not have enough courts. You need 4 courts for 7 teams, but this club only has 3 courts."
        ));
    }

    #[test]
    fn test_zero_court_club_is_always_blocked() {
        for teams in [0, 1, 4, 20] {
            let verdict = check_capacity(0, teams);
            assert_eq!(verdict, CapacityVerdict::Blocked(SharedError::NoCourts));
            assert!(!verdict.can_submit());
        }
    }

    #[test]
    fn test_shortfall_names_the_numbers() {
        let verdict = check_capacity(3, 7);
        assert_eq!(
            verdict.warning().as_deref(),
            Some("The selected club does not have enough courts. You need 4 courts for 7 teams, but this club only has 3 courts.")
        );
    }

    #[test]
    fn test_missing_team_count_disables_without_warning() {
        let verdict = check_capacity(3, 0);
        assert_eq!(verdict, CapacityVerdict::AwaitingTeams);
        assert!(!verdict.can_submit());
        assert_eq!(verdict.warning(), None);
    }

    #[test]
    fn test_form_reevaluates_on_each_change() {
        let mut form = LeagueForm::new(clubs());
        assert_eq!(form.club_id(), "1");
        assert_eq!(form.set_teams("6"), CapacityVerdict::Blocked(SharedError::NoCourts));

        assert_eq!(form.select_club("2"), CapacityVerdict::Ready);
        assert!(!form.set_teams("7").can_submit());
        assert!(form.set_teams("6").can_submit());
        assert_eq!(form.set_teams("abc"), CapacityVerdict::AwaitingTeams);
        assert_eq!(form.select_club("missing"), CapacityVerdict::Blocked(SharedError::NoCourts));
    }

    #[test]
    fn test_edit_capacity() {
        assert!(check_edit_capacity(4, 8).is_ok());
        assert_eq!(
            check_edit_capacity(3, 8).unwrap_err().to_string(),
            "Warning: The selected club needs at least 4 courts for 8 teams"
        );
        assert!(check_edit_capacity(0, 0).is_ok());
    }

    #[test]
    fn test_court_picker_requires_exact_count() {
        let cards = (1..=4)
            .map(|i| CourtCard {
                id: i.to_string(),
                name: format!("Court {}", i),
                checked: false,
            })
            .collect();
        let mut picker = LeagueCourtPicker::new(cards, 5);
        assert_eq!(picker.required(), 3);

        assert!(!picker.toggle("1"));
        assert!(!picker.toggle("2"));
        assert!(picker.toggle("3"));
        assert!(!picker.toggle("4"));
        assert_eq!(
            picker.validate().unwrap_err(),
            SharedError::CourtAssignment { required: 3, selected: 4 }
        );
        assert!(picker.set_checked("4", false));
        assert!(picker.validate().is_ok());
    }

    #[test]
    fn test_info_panel_toggles() {
        let mut picker = LeagueCourtPicker::new(Vec::new(), 0);
        assert!(!picker.info_open());
        picker.toggle_info();
        assert!(picker.info_open());
        picker.toggle_info();
        assert!(!picker.info_open());
    }

    proptest! {
        #[test]
        fn prop_ready_implies_enough_courts(available in 0u32..20, teams in 0u32..40) {
            if check_capacity(available, teams).can_submit() {
                prop_assert!(available > 0);
                prop_assert!(teams > 0);
                prop_assert!(required_courts(teams) <= available);
            }
        }
    }
}
