/// What submitting the game-day edit form should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameDaySubmit {
    /// Date untouched: submit straight away.
    Direct,
    /// Date moved: ask whether following game days move too.
    Confirm,
}

pub const CONFIRM_TITLE: &str = "Confirm Update";
pub const CONFIRM_QUESTION: &str = "Do you want to update the dates of all subsequent game days?";

pub fn plan_submit(original_date: &str, current_date: &str) -> GameDaySubmit {
    if original_date.trim() == current_date.trim() {
        GameDaySubmit::Direct
    } else {
        GameDaySubmit::Confirm
    }
}

/// Value of the hidden `update_subsequent` field for the user's answer.
pub fn update_subsequent_value(confirmed: bool) -> &'static str {
    if confirmed {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_submit() {
        assert_eq!(plan_submit("2024-05-01", "2024-05-01"), GameDaySubmit::Direct);
        assert_eq!(plan_submit("2024-05-01", "2024-05-08"), GameDaySubmit::Confirm);
        assert_eq!(update_subsequent_value(true), "true");
        assert_eq!(update_subsequent_value(false), "false");
    }
}
