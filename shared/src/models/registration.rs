use crate::dto::user::UserSuggestionDto;
use crate::{Result, SharedError};

/// Which form the user search is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Event registration: a pick fills and locks the contact fields.
    EventRegistration,
    /// Club membership: a pick only fills the email field.
    ClubMember,
}

/// View-model for the forms fed by the live user search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    mode: SearchMode,
    pub name: String,
    pub email: String,
    pub telephone: String,
    pub photo: String,
    user_id: Option<u64>,
    locked: bool,
    clear_visible: bool,
}

impl RegistrationForm {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            telephone: String::new(),
            photo: String::new(),
            user_id: None,
            locked: false,
            clear_visible: false,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// Email and telephone are read-only while a known user is chosen.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    /// The field the search box is bound to.
    pub fn search_text(&self) -> &str {
        match self.mode {
            SearchMode::EventRegistration => &self.name,
            SearchMode::ClubMember => &self.email,
        }
    }

    pub fn select(&mut self, user: &UserSuggestionDto) {
        match self.mode {
            SearchMode::EventRegistration => {
                self.name = user.name.clone();
                self.email = user.email.clone();
                self.telephone = user.telephone.clone();
                self.user_id = Some(user.id);
                self.locked = true;
                self.clear_visible = true;
            }
            SearchMode::ClubMember => {
                self.email = user.email.clone();
            }
        }
    }

    /// Typing into the search field. Emptying the name releases the
    /// previously chosen user.
    pub fn set_search_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        match self.mode {
            SearchMode::EventRegistration => {
                let emptied = value.is_empty();
                self.name = value;
                if emptied {
                    self.email.clear();
                    self.telephone.clear();
                    self.user_id = None;
                    self.locked = false;
                    self.clear_visible = false;
                }
            }
            SearchMode::ClubMember => self.email = value,
        }
    }

    /// Edits to email or telephone are ignored while locked.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if !self.locked {
            self.email = value.into();
        }
    }

    pub fn set_telephone(&mut self, value: impl Into<String>) {
        if !self.locked {
            self.telephone = value.into();
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.telephone.clear();
        self.photo.clear();
        self.user_id = None;
        self.locked = false;
        self.clear_visible = false;
    }

    pub fn validate_submit(&self) -> Result<()> {
        if self.search_text().trim().is_empty() {
            return Err(SharedError::MissingSearchInput);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn ana() -> UserSuggestionDto {
        UserSuggestionDto {
            id: 42,
            name: "Ana Costa".to_string(),
            email: "ana@club.test".to_string(),
            telephone: "912000111".to_string(),
        }
    }

    #[test]
    fn test_selecting_suggestion_fills_and_locks() {
        let mut form = RegistrationForm::new(SearchMode::EventRegistration);
        form.set_search_text("ana");
        form.select(&ana());

        assert_eq!(form.name, "Ana Costa");
        assert_eq!(form.email, "ana@club.test");
        assert_eq!(form.telephone, "912000111");
        assert_eq!(form.user_id(), Some(42));
        assert!(form.is_locked());
        assert!(form.clear_visible());

        form.set_email("other@club.test");
        assert_eq!(form.email, "ana@club.test");
    }

    #[test]
    fn test_clearing_name_unlocks_fields() {
        let mut form = RegistrationForm::new(SearchMode::EventRegistration);
        form.select(&ana());
        form.set_search_text("Ana Cost");
        assert!(form.is_locked());

        form.set_search_text("");
        assert!(!form.is_locked());
        assert_eq!(form.email, "");
        assert_eq!(form.telephone, "");
        assert_eq!(form.user_id(), None);
        assert!(!form.clear_visible());
    }

    #[test]
    fn test_clear_button_resets_everything() {
        let mut form = RegistrationForm::new(SearchMode::EventRegistration);
        form.select(&ana());
        form.photo = "me.png".to_string();
        form.clear();
        assert_eq!(form, RegistrationForm::new(SearchMode::EventRegistration));
    }

    #[test]
    fn test_club_member_pick_only_sets_email() {
        let mut form = RegistrationForm::new(SearchMode::ClubMember);
        form.set_search_text("ana");
        form.select(&ana());
        assert_eq!(form.search_text(), "ana@club.test");
        assert_eq!(form.name, "");
        assert!(!form.is_locked());
    }

    #[test]
    fn test_empty_submit_is_rejected() {
        let mut form = RegistrationForm::new(SearchMode::EventRegistration);
        form.set_search_text("   ");
        assert_eq!(form.validate_submit(), Err(SharedError::MissingSearchInput));
        form.set_search_text("Walk-in player");
        assert!(form.validate_submit().is_ok());
    }
}
