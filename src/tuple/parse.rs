// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parsing tableau tuples from their list form.
//!
//! Brackets may be `[]` or `()`. A list of rows, such as `[[1, 2], [3]]`,
//! is a level one tuple. A list of such lists, or any parenthesised list,
//! is a tuple with one component per element:
//!
//! ```
//! use tableau_tuples::tuple::TableauTuple;
//!
//! let t: TableauTuple = "([], [[1, 2], [3]])".parse().unwrap();
//! assert_eq!(t.level(), 2);
//! let s: TableauTuple = "[[1, 2], [3]]".parse().unwrap();
//! assert_eq!(s.level(), 1);
//! assert!("[[1, 2], [3".parse::<TableauTuple>().is_err());
//! ```

use super::TableauTuple;
use crate::error::{Result, TableauError};
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

#[derive(Debug, PartialEq, Eq)]
enum Node {
    Number(usize),
    List { parenthesised: bool, items: Vec<Node> },
}

impl Node {
    fn has_nested_lists(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::List { items, .. } => items.iter().any(|n| matches!(n, Node::List { .. })),
        }
    }
}

fn syntax_error(reason: String) -> TableauError {
    TableauError::MalformedShape {
        component: 0,
        reason,
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|(_, ch)| ch.is_whitespace()) {
            self.chars.next();
        }
    }

    fn node(&mut self) -> Result<Node> {
        self.skip_whitespace();
        match self.chars.peek().copied() {
            Some((_, '[')) | Some((_, '(')) => self.list(),
            Some((_, ch)) if ch.is_ascii_digit() => self.number(),
            Some((offset, ch)) => Err(syntax_error(format!(
                "unexpected '{}' at offset {}",
                ch, offset
            ))),
            None => Err(syntax_error("unexpected end of input".to_string())),
        }
    }

    fn number(&mut self) -> Result<Node> {
        let mut digits = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.chars.next();
        }
        match digits.parse::<usize>() {
            Ok(0) => Err(syntax_error("entries must be positive".to_string())),
            Ok(v) => Ok(Node::Number(v)),
            Err(e) => Err(syntax_error(format!("bad entry {}: {}", digits, e))),
        }
    }

    fn list(&mut self) -> Result<Node> {
        let (_, open) = self
            .chars
            .next()
            .ok_or_else(|| syntax_error("unexpected end of input".to_string()))?;
        let close = if open == '(' { ')' } else { ']' };
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.peek().copied() {
                Some((_, ch)) if ch == close => {
                    self.chars.next();
                    break;
                }
                None => return Err(syntax_error(format!("missing '{}'", close))),
                _ => {}
            }
            items.push(self.node()?);
            self.skip_whitespace();
            match self.chars.peek().copied() {
                Some((_, ',')) => {
                    self.chars.next();
                }
                Some((_, ch)) if ch == close => {}
                Some((offset, ch)) => {
                    return Err(syntax_error(format!(
                        "unexpected '{}' at offset {}",
                        ch, offset
                    )))
                }
                None => return Err(syntax_error(format!("missing '{}'", close))),
            }
        }
        Ok(Node::List {
            parenthesised: open == '(',
            items,
        })
    }

    fn finish(&mut self) -> Result<()> {
        self.skip_whitespace();
        match self.chars.next() {
            None => Ok(()),
            Some((offset, ch)) => Err(syntax_error(format!(
                "trailing '{}' at offset {}",
                ch, offset
            ))),
        }
    }
}

/// The rows of one component: a list of lists of numbers.
fn rows(node: Node, component: usize) -> Result<Vec<Vec<usize>>> {
    let bad = |reason: &str| TableauError::MalformedShape {
        component,
        reason: reason.to_string(),
    };
    let Node::List { items, .. } = node else {
        return Err(bad("expected a list of rows"));
    };
    items
        .into_iter()
        .map(|row| match row {
            Node::List { items, .. } => items
                .into_iter()
                .map(|entry| match entry {
                    Node::Number(v) => Ok(v),
                    Node::List { .. } => Err(bad("rows must hold numbers")),
                })
                .collect::<Result<Vec<usize>>>(),
            Node::Number(_) => Err(bad("expected a list of rows")),
        })
        .collect()
}

impl FromStr for TableauTuple {
    type Err = TableauError;

    fn from_str(text: &str) -> Result<Self> {
        let mut parser = Parser::new(text);
        let top = parser.node()?;
        parser.finish()?;
        let is_tuple = match &top {
            Node::Number(_) => return Err(syntax_error("expected a list".to_string())),
            Node::List {
                parenthesised,
                items,
            } => *parenthesised || items.iter().any(Node::has_nested_lists),
        };
        if !is_tuple {
            return TableauTuple::from_rows(vec![rows(top, 0)?]);
        }
        let Node::List { items, .. } = top else {
            return Err(syntax_error("expected a list".to_string()));
        };
        let components = items
            .into_iter()
            .enumerate()
            .map(|(k, node)| rows(node, k))
            .collect::<Result<Vec<_>>>()?;
        TableauTuple::from_rows(components)
    }
}
