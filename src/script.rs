//! Action scripts: parsing and replaying them against a board.
//!
//! A script is a list of words. A word is either an action name
//! (`moveLeft`, `rotateRight`, `drop`, ...) or a run of single-character
//! codes (`hhqjjj`). Commas and whitespace separate words.

use anyhow::{bail, Result};

use crate::core::{BoardTurnManager, Error, ShapeProvider, TurnStep};
use crate::types::TurnAction;

/// Parse every word of a script into actions, in order.
pub fn parse_script<S: AsRef<str>>(words: &[S]) -> Result<Vec<TurnAction>> {
    let mut actions = Vec::new();
    for word in words
        .iter()
        .flat_map(|w| w.as_ref().split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|w| !w.is_empty())
    {
        if let Some(action) = TurnAction::from_str(word) {
            actions.push(action);
            continue;
        }
        for code in word.chars() {
            match TurnAction::from_code(code) {
                Some(action) => actions.push(action),
                None => bail!("unknown action {:?} in script word {:?}", code, word),
            }
        }
    }
    Ok(actions)
}

/// What a replay did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Actions actually applied before the replay stopped
    pub applied: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub landings: usize,
    /// A fresh piece did not fit; the replay stopped there
    pub game_over: bool,
}

/// Apply `actions` in order, stopping at game over.
///
/// The first turn must already be started. Spawn failures end the replay
/// with `game_over` set; any other error is returned.
pub fn replay<P: ShapeProvider>(
    board: &mut BoardTurnManager<P>,
    actions: &[TurnAction],
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for &action in actions {
        summary.applied += 1;
        match board.apply(action) {
            Ok(TurnStep::Moved(_)) => summary.accepted += 1,
            Ok(TurnStep::Rejected) => summary.rejected += 1,
            Ok(TurnStep::Landed(_)) => summary.landings += 1,
            Ok(TurnStep::Paused) => {}
            Err(Error::InvalidSpawn { .. }) => {
                summary.landings += 1;
                summary.game_over = true;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_codes() {
        let actions = parse_script(&["moveLeft", "hj,qe", "f  DROP"]).unwrap();
        assert_eq!(
            actions,
            vec![
                TurnAction::MoveLeft,
                TurnAction::MoveLeft,
                TurnAction::Drop,
                TurnAction::RotateLeft,
                TurnAction::RotateRight,
                TurnAction::Flip,
                TurnAction::Drop,
            ]
        );
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = parse_script(&["hjx"]).unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(parse_script::<&str>(&[]).unwrap().is_empty());
        assert!(parse_script(&[" , "]).unwrap().is_empty());
    }
}
