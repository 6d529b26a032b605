use crate::{Result, SharedError};
use log::debug;
use serde::{Deserialize, Serialize};

/// Every selected court seats two teams of two.
pub const PLAYERS_PER_COURT: u32 = 4;

/// Session lengths offered by the non-stop duration control, in minutes.
pub const SHORT_SESSION_MINUTES: u32 = 90;
pub const LONG_SESSION_MINUTES: u32 = 120;

/// One selectable court tile on the booking page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtTile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl CourtTile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected: false,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Selected,
    Deselected,
}

/// State of the non-stop duration dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationControl {
    pub minutes: u32,
    pub disabled: bool,
}

impl DurationControl {
    /// Two or three courts leave the duration open; anything else pins it.
    pub fn for_court_count(court_count: u32) -> Self {
        if allows_duration_choice(court_count) {
            Self {
                minutes: SHORT_SESSION_MINUTES,
                disabled: false,
            }
        } else {
            Self {
                minutes: LONG_SESSION_MINUTES,
                disabled: true,
            }
        }
    }

    /// Applies a user choice, snapping values outside the offered set.
    pub fn request(&mut self, court_count: u32, minutes: u32) -> u32 {
        self.minutes = if !allows_duration_choice(court_count) {
            LONG_SESSION_MINUTES
        } else if minutes == SHORT_SESSION_MINUTES || minutes == LONG_SESSION_MINUTES {
            minutes
        } else {
            SHORT_SESSION_MINUTES
        };
        self.minutes
    }
}

fn allows_duration_choice(court_count: u32) -> bool {
    matches!(court_count, 2 | 3)
}

/// View-model behind the court picker: tiles, the court-count selector and
/// everything derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourtSelection {
    courts: Vec<CourtTile>,
    court_count: u32,
    duration: DurationControl,
    player_total: Option<u32>,
}

impl CourtSelection {
    pub fn new(courts: Vec<CourtTile>, court_count: u32) -> Self {
        Self {
            courts: courts
                .into_iter()
                .map(|c| CourtTile {
                    selected: false,
                    disabled: false,
                    ..c
                })
                .collect(),
            court_count,
            duration: DurationControl::for_court_count(court_count),
            player_total: None,
        }
    }

    pub fn courts(&self) -> &[CourtTile] {
        &self.courts
    }

    pub fn court_count(&self) -> u32 {
        self.court_count
    }

    pub fn duration(&self) -> DurationControl {
        self.duration
    }

    /// Value of the total-players field once the user has interacted;
    /// `None` keeps whatever the page was rendered with.
    pub fn player_total(&self) -> Option<u32> {
        self.player_total
    }

    pub fn selected_count(&self) -> usize {
        self.courts.iter().filter(|c| c.selected).count()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.courts
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.id.clone())
            .collect()
    }

    pub fn selected_label(&self) -> String {
        let n = self.selected_count();
        format!("{} court{} selected", n, if n == 1 { "" } else { "s" })
    }

    pub fn total_players(&self) -> u32 {
        self.court_count * PLAYERS_PER_COURT
    }

    /// Handles a click on a tile.
    ///
    /// Disabled and unknown tiles are ignored. A selected tile can always be
    /// released; an unselected one is only taken while the selector allows it.
    pub fn click(&mut self, court_id: &str) -> Result<ClickOutcome> {
        let selected = self.selected_count();
        let limit = self.court_count as usize;

        let Some(tile) = self.courts.iter_mut().find(|c| c.id == court_id) else {
            return Ok(ClickOutcome::Ignored);
        };
        if tile.disabled {
            return Ok(ClickOutcome::Ignored);
        }

        let outcome = if tile.selected {
            tile.selected = false;
            ClickOutcome::Deselected
        } else if selected >= limit {
            debug!(
                "Rejecting court {}: {} of {} already selected",
                court_id, selected, limit
            );
            return Err(SharedError::CourtLimit {
                allowed: self.court_count,
            });
        } else {
            tile.selected = true;
            ClickOutcome::Selected
        };

        self.player_total = Some(self.total_players());
        Ok(outcome)
    }

    /// Resets every tile and recomputes the dependent fields for a new count.
    pub fn set_court_count(&mut self, court_count: u32) {
        debug!("Court count changed to {}", court_count);
        for court in &mut self.courts {
            court.selected = false;
            court.disabled = false;
        }
        self.court_count = court_count;
        self.duration = DurationControl::for_court_count(court_count);
        self.player_total = Some(self.total_players());
    }

    pub fn set_duration(&mut self, minutes: u32) -> u32 {
        self.duration.request(self.court_count, minutes)
    }

    /// Restores a selection coming from outside the click path, e.g. the
    /// courts echoed back by a re-rendered form. Over-full selections are
    /// dropped entirely.
    pub fn restore_selection(&mut self, ids: &[String]) -> Result<()> {
        for court in &mut self.courts {
            court.selected = !court.disabled && ids.contains(&court.id);
        }
        self.enforce_limit()
    }

    /// Deselects everything when more tiles are selected than allowed.
    fn enforce_limit(&mut self) -> Result<()> {
        if self.selected_count() > self.court_count as usize {
            for court in &mut self.courts {
                court.selected = false;
            }
            return Err(SharedError::CourtLimit {
                allowed: self.court_count,
            });
        }
        Ok(())
    }

    /// Marks the courts reported as busy for the chosen slot. Busy tiles are
    /// disabled and lose their selection; the rest become available again.
    pub fn apply_availability(&mut self, busy_court_ids: &[String]) -> usize {
        let mut disabled = 0;
        for court in &mut self.courts {
            court.disabled = busy_court_ids.contains(&court.id);
            if court.disabled {
                court.selected = false;
                disabled += 1;
            }
        }
        disabled
    }
}
