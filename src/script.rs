//! The batch boundary around the tree: a whitespace-delimited stream of
//! `<op> <key>` records in, the in-order key sequence out.
//!
//! The record grammar is the legacy one: `i <key>` inserts, `r <key>`
//! removes, keys are decimal `i32`s, and records are separated by any
//! whitespace (spaces, tabs, newlines all alike). Operation codes other
//! than `i` and `r` are silently ignored. A record whose key is missing
//! or unparseable ends the stream at that point; every record before it
//! still applies.
//!
//! Output is the surviving keys in non-decreasing order, each followed by
//! a single space, including the last one, with no trailing newline. An
//! empty tree writes nothing at all.
//!
//! # Examples
//!
//! ```
//! use bstree::script;
//!
//! let mut out = Vec::new();
//! script::run("i 5 i 3 i 8 i 1 r 3".as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b"1 5 8 ");
//! ```

use std::io::{self, Read, Write};
use std::str::SplitWhitespace;

use crate::linked::Tree;

/// One parsed operation record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// Insert the key into the tree (`i <key>`).
    Insert(i32),
    /// Remove one node holding the key, if any (`r <key>`).
    Remove(i32),
}

/// A lazy stream of [`Op`]s parsed out of record text.
///
/// # Examples
///
/// ```
/// use bstree::script::{Op, Ops};
///
/// // `x 9` is an unknown code and is skipped; `i oops` is malformed and
/// // ends the stream before `i 7` is reached.
/// let ops: Vec<Op> = Ops::new("i 5 x 9 r 3 i oops i 7").collect();
/// assert_eq!(ops, [Op::Insert(5), Op::Remove(3)]);
/// ```
#[derive(Clone, Debug)]
pub struct Ops<'a> {
    tokens: SplitWhitespace<'a>,
    done: bool,
}

impl<'a> Ops<'a> {
    /// Starts parsing operation records out of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
            done: false,
        }
    }
}

impl Iterator for Ops<'_> {
    type Item = Op;

    fn next(&mut self) -> Option<Op> {
        if self.done {
            return None;
        }
        loop {
            let Some(code) = self.tokens.next() else {
                self.done = true;
                return None;
            };
            // A missing or unparseable key ends the stream for good, no
            // matter what the code was.
            let Some(key) = self.tokens.next().and_then(|token| token.parse().ok()) else {
                self.done = true;
                return None;
            };
            match code {
                "i" => return Some(Op::Insert(key)),
                "r" => return Some(Op::Remove(key)),
                _ => continue,
            }
        }
    }
}

/// What can go wrong at the batch boundary. The tree operations
/// themselves never fail; removing an absent key is a no-op.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operation source could not be read.
    #[error("failed to read operation records: {0}")]
    Read(#[source] io::Error),
    /// The result sink rejected the key sequence.
    #[error("failed to write key sequence: {0}")]
    Write(#[source] io::Error),
}

/// Applies every operation to `tree`, in order.
pub fn apply<I>(tree: &mut Tree<i32>, ops: I)
where
    I: IntoIterator<Item = Op>,
{
    for op in ops {
        match op {
            Op::Insert(key) => tree.insert(key),
            Op::Remove(key) => {
                tree.remove(&key);
            }
        }
    }
}

/// Writes the tree's keys in order, each followed by a single space, with
/// no trailing newline.
pub fn write_inorder<W: Write>(tree: &Tree<i32>, sink: &mut W) -> Result<(), Error> {
    for key in tree {
        write!(sink, "{} ", key).map_err(Error::Write)?;
    }
    Ok(())
}

/// Runs a whole batch: reads the record text from `source`, applies it to
/// a fresh tree, and writes the in-order dump to `sink`.
pub fn run<R: Read, W: Write>(mut source: R, sink: W) -> Result<(), Error> {
    let mut text = String::new();
    source.read_to_string(&mut text).map_err(Error::Read)?;

    let mut tree = Tree::new();
    apply(&mut tree, Ops::new(&text));

    let mut sink = io::BufWriter::new(sink);
    write_inorder(&tree, &mut sink)?;
    sink.flush().map_err(Error::Write)
}
