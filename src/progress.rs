#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub display: String,
    pub at_or_over_goal: bool,
}

/// Maps a day's count and the configured goal to display state. A goal of
/// zero means no goal: the count is shown alone and the cap never engages.
pub fn progress(count: u32, goal: u32) -> Progress {
    if goal == 0 {
        return Progress {
            display: format!("{count} copos"),
            at_or_over_goal: false,
        };
    }
    Progress {
        display: format!("{count} / {goal} copos"),
        at_or_over_goal: count >= goal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_goal_is_unbounded() {
        for count in [0, 1, 8, 500] {
            let p = progress(count, 0);
            assert!(!p.at_or_over_goal);
            assert_eq!(p.display, format!("{count} copos"));
        }
    }

    #[test]
    fn positive_goal_flags_at_or_over() {
        assert!(!progress(4, 5).at_or_over_goal);
        assert!(progress(5, 5).at_or_over_goal);
        assert!(progress(7, 5).at_or_over_goal);
    }

    #[test]
    fn positive_goal_display_shows_both_numbers() {
        assert_eq!(progress(3, 8).display, "3 / 8 copos");
    }
}
