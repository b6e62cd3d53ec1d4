//! Context-derived intent defaulting.

use chat_core::{ChatTurn, Intent, Role};

use super::keywords;

/// Default intent when the reply omits or mis-states one: `FollowUp` if the
/// most recent assistant turn mentioned a known item name, else
/// `SmoothieRequest`. The item-name check can false-positive on a user who
/// merely asked about an item; that behavior is intentional.
pub fn history_default(history: &[ChatTurn]) -> Intent {
    let assistant_mentioned_item = history
        .iter()
        .rev()
        .find(|turn| turn.role == Role::Assistant)
        .map(|turn| keywords::match_known_keyword(&turn.content).is_some())
        .unwrap_or(false);

    if assistant_mentioned_item {
        Intent::FollowUp
    } else {
        Intent::SmoothieRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_defaults_to_smoothie_request() {
        assert_eq!(history_default(&[]), Intent::SmoothieRequest);
    }

    #[test]
    fn test_last_assistant_turn_with_item_defaults_to_follow_up() {
        let history = vec![
            ChatTurn::user("something chocolatey"),
            ChatTurn::assistant("You'd love the Chocolate Supreme."),
            ChatTurn::user("does it have whey?"),
        ];
        assert_eq!(history_default(&history), Intent::FollowUp);
    }

    #[test]
    fn test_only_most_recent_assistant_turn_counts() {
        let history = vec![
            ChatTurn::assistant("Try the Muscle Up!"),
            ChatTurn::user("hmm"),
            ChatTurn::assistant("What flavors do you usually enjoy?"),
        ];
        assert_eq!(history_default(&history), Intent::SmoothieRequest);
    }

    #[test]
    fn test_user_mention_alone_does_not_trigger_follow_up() {
        let history = vec![ChatTurn::user("what's in the Slim Down?")];
        assert_eq!(history_default(&history), Intent::SmoothieRequest);
    }
}
