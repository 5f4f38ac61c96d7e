//! Cumulative standing arithmetic.
//!
//! A [`Tally`] is the pure aggregate for one team: the fold of that team's
//! side of every non-retracted match result. The incremental paths
//! (record/retract) and the full rebuild path (repair) both go through this
//! type so they cannot drift apart.

/// One team's view of a single match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideView {
    pub won: bool,
    pub sets_won: i16,
    pub sets_lost: i16,
    pub points_for: i32,
    pub points_against: i32,
}

/// Cumulative counters for one team.
///
/// Invariants maintained by `apply`/`retract`:
/// `games_played == wins + losses`, and no counter is ever negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub wins: i32,
    pub losses: i32,
    pub games_played: i32,
    pub sets_won: i32,
    pub sets_lost: i32,
    pub points_for: i32,
    pub points_against: i32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one match result to the running totals.
    pub fn apply(&mut self, side: &SideView) {
        if side.won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.games_played += 1;
        self.sets_won += i32::from(side.sets_won);
        self.sets_lost += i32::from(side.sets_lost);
        self.points_for += side.points_for;
        self.points_against += side.points_against;
    }

    /// Remove one match result from the running totals.
    ///
    /// Exact inverse of [`Tally::apply`] on a consistent ledger. Counters are
    /// clamped at 0 so a retract against drifted data cannot underflow.
    pub fn retract(&mut self, side: &SideView) {
        if side.won {
            self.wins = (self.wins - 1).max(0);
        } else {
            self.losses = (self.losses - 1).max(0);
        }
        self.games_played = (self.games_played - 1).max(0);
        self.sets_won = (self.sets_won - i32::from(side.sets_won)).max(0);
        self.sets_lost = (self.sets_lost - i32::from(side.sets_lost)).max(0);
        self.points_for = (self.points_for - side.points_for).max(0);
        self.points_against = (self.points_against - side.points_against).max(0);
    }

    /// Fold a team's side views into a fresh tally.
    pub fn fold<'a>(sides: impl IntoIterator<Item = &'a SideView>) -> Self {
        let mut tally = Self::new();
        for side in sides {
            tally.apply(side);
        }
        tally
    }

    /// Win percentage in [0, 100]; 0 when no games have been played.
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games_played) * 100.0
        }
    }

    pub fn set_differential(&self) -> i32 {
        self.sets_won - self.sets_lost
    }
}

#[cfg(test)]
mod tests {
    use super::{SideView, Tally};

    fn win_3_1() -> SideView {
        SideView {
            won: true,
            sets_won: 3,
            sets_lost: 1,
            points_for: 75,
            points_against: 60,
        }
    }

    fn loss_2_3() -> SideView {
        SideView {
            won: false,
            sets_won: 2,
            sets_lost: 3,
            points_for: 78,
            points_against: 80,
        }
    }

    #[test]
    fn apply_then_retract_is_identity() {
        let mut tally = Tally::new();
        tally.apply(&win_3_1());
        let before = tally;

        tally.apply(&loss_2_3());
        tally.retract(&loss_2_3());

        assert_eq!(tally, before);
    }

    #[test]
    fn fold_matches_incremental_application() {
        let sides = [win_3_1(), loss_2_3(), win_3_1()];

        let mut incremental = Tally::new();
        for side in &sides {
            incremental.apply(side);
        }

        assert_eq!(Tally::fold(&sides), incremental);
    }

    #[test]
    fn win_percentage_zero_without_games() {
        assert_eq!(Tally::new().win_percentage(), 0.0);
    }

    #[test]
    fn win_percentage_after_split_record() {
        let tally = Tally::fold(&[win_3_1(), loss_2_3()]);
        assert_eq!(tally.wins, 1);
        assert_eq!(tally.losses, 1);
        assert_eq!(tally.games_played, 2);
        assert_eq!(tally.win_percentage(), 50.0);
        assert_eq!(tally.set_differential(), 1);
    }

    #[test]
    fn retract_clamps_at_zero_on_drifted_data() {
        let mut tally = Tally::new();
        tally.retract(&win_3_1());
        assert_eq!(tally, Tally::new());
    }
}
