//! # Weekly photo bracket
//!
//! A single-elimination bracket over the photo ids of the running contest. Each
//! round presents its contestants two at a time in order; the picked photo moves on
//! to the next round. With an odd count the last contestant of a round gets a bye.
//!
//! Every match is kept in a log so the result can be reported back to the backend
//! as selection and exposure counts ([`Tournament::report`]).

use api::PhotoRankUpdateRequest;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Tournament {
    entries: Vec<i64>,
    round: Vec<i64>,
    next: Vec<i64>,
    position: usize,
    round_number: usize,
    /// `(winner, loser, round)` in play order.
    matches: Vec<(i64, i64, usize)>,
    champion: Option<i64>,
}

impl Tournament {
    /// Bracket in the given order.
    pub fn new(entries: Vec<i64>) -> Self {
        let mut t = Self {
            round: entries.clone(),
            entries,
            next: Vec::new(),
            position: 0,
            round_number: 1,
            matches: Vec::new(),
            champion: None,
        };
        t.settle();
        t
    }

    /// Bracket in random order.
    pub fn shuffled<R: Rng + ?Sized>(mut entries: Vec<i64>, rng: &mut R) -> Self {
        entries.shuffle(rng);
        Self::new(entries)
    }

    /// Resolve byes and round changes until a pair is waiting or a champion is known.
    fn settle(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        while self.champion.is_none() && self.position + 1 >= self.round.len() {
            if self.position < self.round.len() {
                self.next.push(self.round[self.position]);
            }
            if self.next.len() <= 1 && self.round.len() <= 1 {
                self.champion = self.next.first().or(self.round.first()).copied();
                break;
            }
            self.round = std::mem::take(&mut self.next);
            self.position = 0;
            if self.round.len() == 1 {
                self.champion = Some(self.round[0]);
                break;
            }
            self.round_number += 1;
        }
    }

    pub fn current_pair(&self) -> Option<(i64, i64)> {
        if self.champion.is_some() || self.position + 1 >= self.round.len() {
            return None;
        }
        Some((self.round[self.position], self.round[self.position + 1]))
    }

    /// Pick `winner` from the current pair. Returns `false` if it is not in it.
    pub fn choose(&mut self, winner: i64) -> bool {
        let Some((a, b)) = self.current_pair() else {
            return false;
        };
        let loser = if winner == a {
            b
        } else if winner == b {
            a
        } else {
            return false;
        };
        self.matches.push((winner, loser, self.round_number));
        self.next.push(winner);
        self.position += 2;
        self.settle();
        true
    }

    pub fn is_finished(&self) -> bool {
        self.entries.is_empty() || self.champion.is_some()
    }

    pub fn champion(&self) -> Option<i64> {
        self.champion
    }

    pub fn round_number(&self) -> usize {
        self.round_number
    }

    /// Contestants of the round in play.
    pub fn remaining(&self) -> usize {
        self.round.len()
    }

    pub fn round_label(&self) -> String {
        if self.is_finished() {
            return "Result".to_string();
        }
        match self.round.len() {
            0..=2 => "Final".to_string(),
            3..=4 => "Semi-final".to_string(),
            n => format!("Round of {}", n.next_power_of_two()),
        }
    }

    /// `(played, total)` matches; a bracket of n photos always has n - 1 matches.
    pub fn progress(&self) -> (usize, usize) {
        (self.matches.len(), self.entries.len().saturating_sub(1))
    }

    /// Champion first, then the others by how late they were knocked out.
    pub fn ranking(&self) -> Vec<i64> {
        let eliminated_in = |id: i64| {
            self.matches
                .iter()
                .find(|(_, loser, _)| *loser == id)
                .map(|(_, _, round)| *round)
                .unwrap_or(usize::MAX)
        };
        let mut ranked = self.entries.clone();
        // Stable sort keeps the bracket order between photos out in the same round.
        ranked.sort_by_key(|id| std::cmp::Reverse(eliminated_in(*id)));
        ranked
    }

    /// Selection and exposure counts, one id per occurrence.
    pub fn report(&self) -> PhotoRankUpdateRequest {
        let mut req = PhotoRankUpdateRequest::default();
        for (winner, loser, _) in &self.matches {
            req.selected_ids.push(*winner);
            req.exposed_ids.push(*winner);
            req.exposed_ids.push(*loser);
        }
        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn play_first_always(t: &mut Tournament) {
        while let Some((a, _)) = t.current_pair() {
            assert!(t.choose(a));
        }
    }

    #[test]
    fn test_four_photo_bracket() {
        let mut t = Tournament::new(vec![1, 2, 3, 4]);
        assert_eq!(t.round_label(), "Semi-final");
        assert_eq!(t.current_pair(), Some((1, 2)));
        assert!(t.choose(2));
        assert_eq!(t.current_pair(), Some((3, 4)));
        assert!(t.choose(3));
        assert_eq!(t.round_label(), "Final");
        assert_eq!(t.current_pair(), Some((2, 3)));
        assert!(t.choose(3));
        assert!(t.is_finished());
        assert_eq!(t.champion(), Some(3));
        assert_eq!(t.progress(), (3, 3));
        assert_eq!(t.ranking(), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_choose_outside_pair_is_ignored() {
        let mut t = Tournament::new(vec![1, 2]);
        assert!(!t.choose(9));
        assert_eq!(t.progress(), (0, 1));
        assert!(t.choose(1));
        assert!(!t.choose(2));
    }

    #[test]
    fn test_odd_count_gives_bye() {
        let mut t = Tournament::new(vec![1, 2, 3]);
        assert!(t.choose(1));
        // 3 had a bye and meets 1 in the final.
        assert_eq!(t.current_pair(), Some((1, 3)));
        assert!(t.choose(3));
        assert_eq!(t.champion(), Some(3));
        assert_eq!(t.progress(), (2, 2));
    }

    #[test]
    fn test_degenerate_brackets() {
        let empty = Tournament::new(vec![]);
        assert!(empty.is_finished());
        assert_eq!(empty.champion(), None);
        assert_eq!(empty.current_pair(), None);

        let single = Tournament::new(vec![7]);
        assert!(single.is_finished());
        assert_eq!(single.champion(), Some(7));
        assert_eq!(single.ranking(), vec![7]);
    }

    #[test]
    fn test_sixteen_photos_take_fifteen_matches() {
        let mut t = Tournament::new((1..=16).collect());
        assert_eq!(t.round_label(), "Round of 16");
        play_first_always(&mut t);
        assert_eq!(t.progress(), (15, 15));
        assert_eq!(t.champion(), Some(1));
        assert_eq!(t.ranking().len(), 16);
    }

    #[test]
    fn test_report_counts_every_occurrence() {
        let mut t = Tournament::new(vec![10, 20, 30, 40]);
        play_first_always(&mut t);
        let report = t.report();
        assert_eq!(report.selected_ids, vec![10, 30, 10]);
        assert_eq!(report.exposed_ids, vec![10, 20, 30, 40, 10, 30]);
    }

    #[test]
    fn test_shuffle_keeps_entries() {
        let mut rng = StdRng::seed_from_u64(7);
        let t = Tournament::shuffled((1..=8).collect(), &mut rng);
        let mut ranking = t.ranking();
        ranking.sort();
        assert_eq!(ranking, (1..=8).collect::<Vec<_>>());
    }
}
