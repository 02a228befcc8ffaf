//! Enumeration types shared between the controller and presentation.

/// Direction of a single-unit counter step (the `+` / `-` buttons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Increase by one.
    Up,
    /// Decrease by one.
    Down,
}

impl Step {
    /// Apply the step to `value`, returning `None` on integer overflow.
    pub const fn apply(self, value: i32) -> Option<i32> {
        match self {
            Self::Up => value.checked_add(1),
            Self::Down => value.checked_sub(1),
        }
    }

    /// Parse the `+` / `-` tokens used by the text front end.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Up),
            "-" => Some(Self::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_steps_by_one() {
        assert_eq!(Step::Up.apply(4), Some(5));
        assert_eq!(Step::Down.apply(4), Some(3));
    }

    #[test]
    fn apply_reports_overflow() {
        assert_eq!(Step::Up.apply(i32::MAX), None);
        assert_eq!(Step::Down.apply(i32::MIN), None);
    }

    #[test]
    fn tokens() {
        assert_eq!(Step::from_token("+"), Some(Step::Up));
        assert_eq!(Step::from_token("-"), Some(Step::Down));
        assert_eq!(Step::from_token("++"), None);
    }
}
