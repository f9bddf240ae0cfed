// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Linear extensions of a finite poset.
//!
//! The extensions are generated by the Pruesse–Ruskey Gray code: every
//! extension is reached from the previous one by one or two adjacent
//! transpositions. The generator is recursive in the paper; here the
//! recursion lives on an explicit stack of [`Frame`]s so that extensions
//! can be produced one at a time.
//!
//! The poset is first relabelled along a topological sort. The
//! preparation step then peels off minimal elements, pairing them up as
//! `(a_i, b_i)` whenever there are two or more to choose from. Frame `i`
//! moves `b_i` and then `a_i` right through the extension and back again,
//! running frame `i - 1` after every step. A sign flag halves the work:
//! the sequence is traversed twice, once per sign, and only extensions
//! produced with a positive sign are reported.
//!
//! ```
//! use tableau_tuples::enumerate::LinearExtensions;
//!
//! // 1 < 2, with 3 unrelated
//! let all: Vec<Vec<usize>> = LinearExtensions::new(3, &[(1, 2)]).collect();
//! assert_eq!(all.len(), 3);
//! assert!(all.contains(&vec![3, 1, 2]));
//! ```

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pc {
    Start,
    LoopB,
    AfterMoveB,
    LoopA,
    CheckTypical,
    LeftA,
    AfterLoopB,
    LeftB,
}

/// What a frame does after one step.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Continue at the given point.
    Goto(Pc),
    /// Run the frame below, then continue at the given point.
    Call(Pc),
    /// Report the current extension, run the frame below, then continue.
    Emit(Pc),
    /// The frame is finished.
    Return,
}

/// One activation of the recursive generator.
#[derive(Debug)]
struct Frame {
    i: usize,
    pc: Pc,
    moves_right_b: usize,
    moves_right_a: usize,
    typical: bool,
    count: usize,
}

impl Frame {
    fn new(i: usize) -> Self {
        Self {
            i,
            pc: Pc::Start,
            moves_right_b: 0,
            moves_right_a: 0,
            typical: false,
            count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Initial,
    FirstPass,
    SecondPass,
    Done,
}

/// Iterator over the linear extensions of a poset on `1..=n`, each given
/// as a sequence of the elements.
#[derive(Debug)]
pub struct LinearExtensions {
    /// Topological labels back to elements.
    labels: Vec<usize>,
    /// Covering relations between topological labels.
    edges: BTreeSet<(usize, usize)>,
    extension: Vec<usize>,
    position: Vec<usize>,
    a: Vec<usize>,
    b: Vec<usize>,
    plus: bool,
    stack: Vec<Frame>,
    phase: Phase,
}

impl LinearExtensions {
    /// The poset on `1..=n` generated by `relations`, each `(x, y)`
    /// meaning `x < y`. The relations must be acyclic.
    pub fn new(n: usize, relations: &[(usize, usize)]) -> Self {
        let labels = topological_sort(n, relations);
        let mut label_of = vec![0; n + 1];
        for (i, &v) in labels.iter().enumerate() {
            label_of[v] = i;
        }
        let edges: BTreeSet<(usize, usize)> = relations
            .iter()
            .map(|&(x, y)| (label_of[x], label_of[y]))
            .collect();
        let (extension, a, b) = prepare(n, &edges);
        let mut position = vec![0; n];
        for (p, &x) in extension.iter().enumerate() {
            position[x] = p;
        }
        crate::trace!("[LinearExtensions] {} elements, {} pairs", n, a.len());
        Self {
            labels,
            edges,
            extension,
            position,
            a,
            b,
            plus: true,
            stack: Vec::new(),
            phase: Phase::Initial,
        }
    }

    fn top(&self) -> Option<usize> {
        self.a.len().checked_sub(1)
    }

    fn current(&self) -> Vec<usize> {
        self.extension.iter().map(|&x| self.labels[x]).collect()
    }

    fn can_move_right(&self, x: usize, blocker: Option<usize>) -> bool {
        let next = self.position[x] + 1;
        match self.extension.get(next) {
            None => false,
            Some(&y) => Some(y) != blocker && !self.edges.contains(&(x, y)),
        }
    }

    fn right_a(&self, i: usize) -> bool {
        self.can_move_right(self.a[i], Some(self.b[i]))
    }

    fn right_b(&self, i: usize) -> bool {
        self.can_move_right(self.b[i], None)
    }

    fn swap_positions(&mut self, p: usize, q: usize) {
        self.extension.swap(p, q);
        self.position[self.extension[p]] = p;
        self.position[self.extension[q]] = q;
    }

    fn move_right(&mut self, x: usize) {
        let p = self.position[x];
        self.swap_positions(p, p + 1);
    }

    fn move_left(&mut self, x: usize) {
        let p = self.position[x];
        self.swap_positions(p, p - 1);
    }

    /// Exchange `a_i` and `b_i`; below the first pair, flip the sign.
    fn switch(&mut self, i: Option<usize>) {
        match i {
            None => self.plus = !self.plus,
            Some(i) => {
                let (pa, pb) = (self.position[self.a[i]], self.position[self.b[i]]);
                self.swap_positions(pa, pb);
                std::mem::swap(&mut self.a[i], &mut self.b[i]);
            }
        }
    }

    fn call(&mut self, below: Option<usize>) {
        if let Some(j) = below {
            self.stack.push(Frame::new(j));
        }
    }

    /// Run the frames until one reports an extension or the stack empties.
    fn run(&mut self) -> Option<Vec<usize>> {
        while let Some(mut frame) = self.stack.pop() {
            let i = frame.i;
            let below = i.checked_sub(1);
            let action = match frame.pc {
                Pc::Start => Action::Call(Pc::LoopB),
                Pc::LoopB => {
                    if self.right_b(i) {
                        frame.moves_right_b += 1;
                        self.move_right(self.b[i]);
                        Action::Emit(Pc::AfterMoveB)
                    } else {
                        Action::Goto(Pc::AfterLoopB)
                    }
                }
                Pc::AfterMoveB => {
                    frame.moves_right_a = 0;
                    Action::Goto(Pc::LoopA)
                }
                Pc::LoopA => {
                    if self.right_a(i) {
                        frame.typical = true;
                        frame.moves_right_a += 1;
                        self.move_right(self.a[i]);
                        Action::Emit(Pc::LoopA)
                    } else {
                        Action::Goto(Pc::CheckTypical)
                    }
                }
                Pc::CheckTypical => {
                    if frame.typical {
                        frame.count = if frame.moves_right_b % 2 == 1 {
                            frame.moves_right_a.saturating_sub(1)
                        } else {
                            frame.moves_right_a + 1
                        };
                        self.switch(below);
                        Action::Emit(Pc::LeftA)
                    } else {
                        Action::Goto(Pc::LoopB)
                    }
                }
                Pc::LeftA => {
                    if frame.count > 0 {
                        frame.count -= 1;
                        self.move_left(self.a[i]);
                        Action::Emit(Pc::LeftA)
                    } else {
                        Action::Goto(Pc::LoopB)
                    }
                }
                Pc::AfterLoopB => {
                    frame.count = frame.moves_right_b;
                    if frame.typical && frame.moves_right_b % 2 == 1 {
                        self.move_left(self.a[i]);
                    } else {
                        self.switch(below);
                    }
                    Action::Emit(Pc::LeftB)
                }
                Pc::LeftB => {
                    if frame.count > 0 {
                        frame.count -= 1;
                        self.move_left(self.b[i]);
                        Action::Emit(Pc::LeftB)
                    } else {
                        Action::Return
                    }
                }
            };
            match action {
                Action::Goto(pc) => {
                    frame.pc = pc;
                    self.stack.push(frame);
                }
                Action::Call(pc) => {
                    frame.pc = pc;
                    self.stack.push(frame);
                    self.call(below);
                }
                Action::Emit(pc) => {
                    frame.pc = pc;
                    self.stack.push(frame);
                    self.call(below);
                    if self.plus {
                        return Some(self.current());
                    }
                }
                Action::Return => {}
            }
        }
        None
    }

    fn start_pass(&mut self) {
        self.call(self.top());
    }
}

impl Iterator for LinearExtensions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        loop {
            match self.phase {
                Phase::Initial => {
                    self.phase = Phase::FirstPass;
                    self.start_pass();
                    return Some(self.current());
                }
                Phase::FirstPass => {
                    if let Some(extension) = self.run() {
                        return Some(extension);
                    }
                    self.phase = Phase::SecondPass;
                    self.switch(self.top());
                    self.start_pass();
                    if self.plus {
                        return Some(self.current());
                    }
                }
                Phase::SecondPass => {
                    if let Some(extension) = self.run() {
                        return Some(extension);
                    }
                    crate::trace!("[LinearExtensions] exhausted");
                    self.phase = Phase::Done;
                }
                Phase::Done => return None,
            }
        }
    }
}

/// Reverse postorder of a depth first search from `1, 2, ..., n` in turn.
fn topological_sort(n: usize, relations: &[(usize, usize)]) -> Vec<usize> {
    let mut successors = vec![Vec::new(); n + 1];
    for &(x, y) in relations {
        successors[x].push(y);
    }
    let mut visited = vec![false; n + 1];
    let mut order = Vec::with_capacity(n);
    for root in 1..=n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut finished = Vec::new();
        let mut stack = vec![(root, 0)];
        while let Some(&mut (v, ref mut next)) = stack.last_mut() {
            if let Some(&w) = successors[v].get(*next) {
                *next += 1;
                if !visited[w] {
                    visited[w] = true;
                    stack.push((w, 0));
                }
            } else {
                finished.push(v);
                stack.pop();
            }
        }
        // each tree goes in front of those already sorted
        finished.reverse();
        finished.extend(order);
        order = finished;
    }
    order
}

/// Peel off minimal elements: a lone minimum is appended, otherwise the two
/// smallest minima are appended and recorded as a pair.
fn prepare(n: usize, edges: &BTreeSet<(usize, usize)>) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
    let mut remaining: BTreeSet<usize> = (0..n).collect();
    let mut extension = Vec::with_capacity(n);
    let (mut a, mut b) = (Vec::new(), Vec::new());
    while !remaining.is_empty() {
        let minima: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&v| !remaining.iter().any(|&u| edges.contains(&(u, v))))
            .take(2)
            .collect();
        match minima.as_slice() {
            [x, y] => {
                extension.extend([*x, *y]);
                a.push(*x);
                b.push(*y);
            }
            [x] => extension.push(*x),
            _ => break,
        }
        for v in &minima {
            remaining.remove(v);
        }
    }
    (extension, a, b)
}
