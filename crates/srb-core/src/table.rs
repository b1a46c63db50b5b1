//! Longest-match-first string substitution.
//!
//! A character trie built from a replacement map. `replace` walks the input
//! once; at every position the longest key starting there wins, so a
//! digraph key such as "dž" is always preferred over "d" followed by "ž".
//! Matching is done on `char` boundaries only.

use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub enum TableLookup<'a> {
    None,
    Prefix,
    Exact(&'a str),
    ExactAndPrefix(&'a str),
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    value: Option<String>,
}

#[derive(Debug, Default)]
pub struct SubstitutionTable {
    root: Node,
    len: usize,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (key, value) in pairs {
            table.insert(key, value);
        }
        table
    }

    /// Insert or overwrite a mapping. Empty keys are ignored.
    pub fn insert(&mut self, key: &str, value: &str) {
        if key.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.value.replace(value.to_string()).is_none() {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn lookup(&self, key: &str) -> TableLookup<'_> {
        let mut node = &self.root;
        for c in key.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return TableLookup::None,
            }
        }
        let has_children = !node.children.is_empty();
        match (node.value.as_deref(), has_children) {
            (None, false) => TableLookup::None,
            (None, true) => TableLookup::Prefix,
            (Some(v), false) => TableLookup::Exact(v),
            (Some(v), true) => TableLookup::ExactAndPrefix(v),
        }
    }

    /// Exact-key lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.lookup(key) {
            TableLookup::Exact(v) | TableLookup::ExactAndPrefix(v) => Some(v),
            TableLookup::None | TableLookup::Prefix => None,
        }
    }

    /// Returns the byte length of the longest key that prefixes `text`,
    /// together with its replacement.
    fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in text.char_indices() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = node.value.as_deref() {
                best = Some((i + c.len_utf8(), value));
            }
        }
        best
    }

    /// Replace every key occurrence in a single left-to-right pass.
    /// Characters not covered by any key are copied unchanged.
    pub fn replace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            match self.longest_match(rest) {
                Some((len, value)) => {
                    out.push_str(value);
                    rest = &rest[len..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        out
    }
}
