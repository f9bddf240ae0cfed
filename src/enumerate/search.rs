// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable depth first search.
//!
//! The engine keeps a stack of choice points. Each entry holds the
//! candidate moves computed on arrival at that depth, the index of the next
//! one to try and the move currently applied, if any. On every call to
//! [`SearchEngine::next_solution`] the engine undoes the last applied move,
//! applies the next candidate and descends; when a state is complete it is
//! handed back and the engine suspends until asked again. An entry whose
//! candidates are used up is popped, which backtracks one level.

use crate::stats::{Counters, Statistics};

/// A search problem driven by [`SearchEngine`].
pub(crate) trait SearchProblem {
    type Move: Copy;
    type Solution;

    /// Candidate moves from the current state, in the order they are tried.
    fn candidates(&mut self, stats: &mut Statistics) -> Vec<Self::Move>;

    fn apply(&mut self, m: Self::Move);

    /// Undo `m`, which was the last move applied.
    fn undo(&mut self, m: Self::Move);

    fn is_complete(&self) -> bool;

    fn solution(&self) -> Self::Solution;
}

#[derive(Debug)]
struct StackEntry<M> {
    candidates: Vec<M>,
    next: usize,
    applied: Option<M>,
}

pub(crate) struct SearchEngine<P: SearchProblem> {
    problem: P,
    stack: Vec<StackEntry<P::Move>>,
    started: bool,
    stats: Statistics,
}

impl<P: SearchProblem> SearchEngine<P> {
    pub(crate) fn new(problem: P) -> Self {
        Self {
            problem,
            stack: Vec::new(),
            started: false,
            stats: Statistics::new(),
        }
    }

    pub(crate) fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Find the next complete state, or `None` once the search is exhausted.
    pub(crate) fn next_solution(&mut self) -> Option<P::Solution> {
        if !self.started {
            self.started = true;
            if self.problem.is_complete() {
                return Some(self.found());
            }
            let candidates = self.problem.candidates(&mut self.stats);
            self.push(candidates);
        }
        loop {
            let entry = self.stack.last_mut()?;
            if let Some(m) = entry.applied.take() {
                self.problem.undo(m);
            }
            if entry.next == entry.candidates.len() {
                self.stack.pop();
                continue;
            }
            let m = entry.candidates[entry.next];
            entry.next += 1;
            entry.applied = Some(m);
            self.problem.apply(m);
            if self.problem.is_complete() {
                return Some(self.found());
            }
            let candidates = self.problem.candidates(&mut self.stats);
            self.push(candidates);
        }
    }

    fn push(&mut self, candidates: Vec<P::Move>) {
        self.stack.push(StackEntry {
            candidates,
            next: 0,
            applied: None,
        });
    }

    fn found(&mut self) -> P::Solution {
        self.stats.increment_counter(Counters::TableauxYielded);
        self.problem.solution()
    }
}

impl<P: SearchProblem> Iterator for SearchEngine<P> {
    type Item = P::Solution;

    fn next(&mut self) -> Option<P::Solution> {
        self.next_solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Binary words of length `n` with no two adjacent ones.
    struct NoAdjacentOnes {
        n: usize,
        word: Vec<u8>,
    }

    impl SearchProblem for NoAdjacentOnes {
        type Move = u8;
        type Solution = String;

        fn candidates(&mut self, stats: &mut Statistics) -> Vec<u8> {
            stats.increment_counter(Counters::CellsTried);
            if self.word.last() == Some(&1) {
                vec![0]
            } else {
                vec![0, 1]
            }
        }

        fn apply(&mut self, m: u8) {
            self.word.push(m);
        }

        fn undo(&mut self, _m: u8) {
            self.word.pop();
        }

        fn is_complete(&self) -> bool {
            self.word.len() == self.n
        }

        fn solution(&self) -> String {
            self.word.iter().map(|b| b.to_string()).collect()
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let engine = SearchEngine::new(NoAdjacentOnes { n: 3, word: vec![] });
        let words: Vec<String> = engine.collect();
        assert_eq!(words, vec!["000", "001", "010", "100", "101"]);
    }

    #[test]
    fn test_trivial_problem_yields_once() {
        let mut engine = SearchEngine::new(NoAdjacentOnes { n: 0, word: vec![] });
        assert_eq!(engine.next_solution(), Some(String::new()));
        assert_eq!(engine.next_solution(), None);
        assert_eq!(engine.next_solution(), None);
        assert_eq!(engine.stats().get(Counters::TableauxYielded), 1);
    }

    #[test]
    fn test_statistics() {
        let mut engine = SearchEngine::new(NoAdjacentOnes { n: 4, word: vec![] });
        assert_eq!(engine.by_ref().count(), 8);
        assert_eq!(engine.stats().get(Counters::TableauxYielded), 8);
        assert!(engine.stats().get(Counters::CellsTried) > 0);
    }
}
