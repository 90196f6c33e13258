//! Post-processing for spanning-walk plans.

use dustbot_core::Action;

/// Drop every action after the last [`Action::Clean`].
///
/// A spanning walk keeps wandering (and backtracking) after the final
/// dirty cell has been serviced; that tail is search work, not robot
/// work. With no clean action at all, the whole list is dropped.
///
/// Returns the number of actions removed.
///
/// # Examples
///
/// ```
/// use dustbot_core::{Action, Direction};
/// use dustbot_search::trim_after_last_clean;
///
/// let mut actions = vec![
///     Action::Move(Direction::East),
///     Action::Clean,
///     Action::Move(Direction::West),
/// ];
/// assert_eq!(trim_after_last_clean(&mut actions), 1);
/// assert_eq!(actions, vec![Action::Move(Direction::East), Action::Clean]);
/// ```
pub fn trim_after_last_clean(actions: &mut Vec<Action>) -> usize {
    let keep = actions
        .iter()
        .rposition(|a| a.is_clean())
        .map_or(0, |i| i + 1);
    let removed = actions.len() - keep;
    actions.truncate(keep);
    removed
}
