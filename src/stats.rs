//! Play statistics stored in the preferences.

use crate::preferences::{keys, PreferencesStore};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: i64,
    pub games_solved: i64,
    /// Fewest moves in a solved game, if any game was solved
    pub best_moves: Option<i64>,
    /// Fastest solve in whole seconds
    pub best_seconds: Option<i64>,
    pub last_solved: Option<DateTime<Utc>>,
}

impl Statistics {
    pub fn load(prefs: &dyn PreferencesStore) -> Self {
        let positive = |key: &str| Some(prefs.get_integer(key)).filter(|n| *n > 0);
        Self {
            games_played: prefs.get_integer(keys::GAMES_PLAYED),
            games_solved: prefs.get_integer(keys::GAMES_SOLVED),
            best_moves: positive(keys::BEST_MOVES),
            best_seconds: positive(keys::BEST_SECONDS),
            last_solved: prefs
                .get_string(keys::LAST_SOLVED)
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Write every field back; the caller flushes
    pub fn save(&self, prefs: &mut dyn PreferencesStore) {
        prefs.put_integer(keys::GAMES_PLAYED, self.games_played);
        prefs.put_integer(keys::GAMES_SOLVED, self.games_solved);
        match self.best_moves {
            Some(n) => prefs.put_integer(keys::BEST_MOVES, n),
            None => prefs.remove(keys::BEST_MOVES),
        }
        match self.best_seconds {
            Some(n) => prefs.put_integer(keys::BEST_SECONDS, n),
            None => prefs.remove(keys::BEST_SECONDS),
        }
        match self.last_solved {
            Some(at) => prefs.put_string(keys::LAST_SOLVED, &at.to_rfc3339()),
            None => prefs.remove(keys::LAST_SOLVED),
        }
    }

    pub fn record_start(&mut self) {
        self.games_played += 1;
    }

    pub fn record_solve(&mut self, moves: i64, seconds: i64, at: DateTime<Utc>) {
        self.games_solved += 1;
        self.best_moves = Some(self.best_moves.map_or(moves, |best| best.min(moves)));
        self.best_seconds = Some(self.best_seconds.map_or(seconds, |best| best.min(seconds)));
        self.last_solved = Some(at);
    }

    /// Forget everything and persist the empty record
    pub fn reset(prefs: &mut dyn PreferencesStore) {
        Statistics::default().save(prefs);
    }
}

/// "m:ss" for a duration in seconds
pub fn format_seconds(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
