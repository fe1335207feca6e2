//! Per-comment reaction state.
//!
//! Heart, thumbs-up and thumbs-down buttons under each comment. Thumbs-down
//! is exclusive with the other two.

/// Reaction state of a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reaction {
    /// No reaction
    #[default]
    Neutral,
    /// Heart only
    Liked,
    /// Thumbs-up only
    ThumbsUp,
    /// Heart and thumbs-up together
    LikedAndThumbsUp,
    /// Thumbs-down (clears the others)
    ThumbsDown,
}

impl Reaction {
    /// Initial state for a comment.
    ///
    /// # Arguments
    /// * `liked_by_current_user` - Fixture seed for the heart
    pub fn initial(liked_by_current_user: bool) -> Self {
        if liked_by_current_user {
            Reaction::Liked
        } else {
            Reaction::Neutral
        }
    }

    fn from_flags(liked: bool, thumbs_up: bool) -> Self {
        match (liked, thumbs_up) {
            (false, false) => Reaction::Neutral,
            (true, false) => Reaction::Liked,
            (false, true) => Reaction::ThumbsUp,
            (true, true) => Reaction::LikedAndThumbsUp,
        }
    }

    pub fn is_liked(self) -> bool {
        matches!(self, Reaction::Liked | Reaction::LikedAndThumbsUp)
    }

    pub fn is_thumbs_up(self) -> bool {
        matches!(self, Reaction::ThumbsUp | Reaction::LikedAndThumbsUp)
    }

    pub fn is_thumbs_down(self) -> bool {
        self == Reaction::ThumbsDown
    }

    /// Toggle the heart. Turning it on clears thumbs-down.
    pub fn press_like(self) -> Self {
        Self::from_flags(!self.is_liked(), self.is_thumbs_up())
    }

    /// Toggle thumbs-up. Turning it on clears thumbs-down.
    pub fn press_thumbs_up(self) -> Self {
        Self::from_flags(self.is_liked(), !self.is_thumbs_up())
    }

    /// Toggle thumbs-down. Turning it on clears heart and thumbs-up.
    pub fn press_thumbs_down(self) -> Self {
        if self.is_thumbs_down() {
            Reaction::Neutral
        } else {
            Reaction::ThumbsDown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Reaction; 5] = [
        Reaction::Neutral,
        Reaction::Liked,
        Reaction::ThumbsUp,
        Reaction::LikedAndThumbsUp,
        Reaction::ThumbsDown,
    ];

    #[test]
    fn test_initial_state() {
        assert_eq!(Reaction::initial(true), Reaction::Liked);
        assert_eq!(Reaction::initial(false), Reaction::Neutral);
    }

    #[test]
    fn test_thumbs_down_from_any_state() {
        for state in ALL {
            let down = state.press_thumbs_down();
            if state == Reaction::ThumbsDown {
                assert_eq!(down, Reaction::Neutral);
            } else {
                assert_eq!(down, Reaction::ThumbsDown);
                assert!(!down.is_liked());
                assert!(!down.is_thumbs_up());
                assert_eq!(down.press_thumbs_down(), Reaction::Neutral);
            }
        }
    }

    #[test]
    fn test_liked_comment_scenario() {
        let state = Reaction::initial(true);
        let state = state.press_thumbs_up();
        assert!(state.is_liked());
        assert!(state.is_thumbs_up());
        assert!(!state.is_thumbs_down());

        let state = state.press_thumbs_down();
        assert!(!state.is_liked());
        assert!(!state.is_thumbs_up());
        assert!(state.is_thumbs_down());
    }

    #[test]
    fn test_like_clears_thumbs_down_and_keeps_thumbs_up() {
        assert_eq!(Reaction::ThumbsDown.press_like(), Reaction::Liked);
        assert_eq!(Reaction::ThumbsUp.press_like(), Reaction::LikedAndThumbsUp);
        assert_eq!(Reaction::LikedAndThumbsUp.press_like(), Reaction::ThumbsUp);
        assert_eq!(Reaction::Liked.press_like(), Reaction::Neutral);
    }

    #[test]
    fn test_thumbs_up_clears_thumbs_down() {
        assert_eq!(Reaction::ThumbsDown.press_thumbs_up(), Reaction::ThumbsUp);
        assert_eq!(Reaction::ThumbsUp.press_thumbs_up(), Reaction::Neutral);
        assert_eq!(Reaction::Liked.press_thumbs_up(), Reaction::LikedAndThumbsUp);
    }

    #[test]
    fn test_thumbs_down_never_combined() {
        for state in ALL {
            for next in [
                state.press_like(),
                state.press_thumbs_up(),
                state.press_thumbs_down(),
            ] {
                if next.is_thumbs_down() {
                    assert!(!next.is_liked() && !next.is_thumbs_up());
                }
            }
        }
    }
}
