//! Prefix tree over the fixed alphabet
//!
//! Nodes live in a flat arena and index their children with a 33-slot array,
//! so every descent step is a single array lookup.

use crate::core::{ALPHABET_SIZE, Letter, alphabet};
use std::iter::FusedIterator;
use std::str::Chars;

const NO_CHILD: u32 = u32::MAX;

#[derive(Debug, Clone)]
struct Node {
    children: [u32; ALPHABET_SIZE],
    terminal: bool,
}

impl Node {
    const fn new() -> Self {
        Self {
            children: [NO_CHILD; ALPHABET_SIZE],
            terminal: false,
        }
    }
}

/// Handle to a trie node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Prefix tree mapping words to end-of-word flags
///
/// The root represents the empty prefix. Each node has at most one child per
/// letter.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: 0,
        }
    }

    /// Handle of the root (empty prefix)
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Child of `node` along `letter`, if present
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: Letter) -> Option<NodeId> {
        match self.nodes[node.0 as usize].children[letter.index()] {
            NO_CHILD => None,
            id => Some(NodeId(id)),
        }
    }

    /// Whether the path to `node` spells a complete word
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.nodes[node.0 as usize].terminal
    }

    /// Insert a word
    ///
    /// Repeated insertion is a no-op. Words with symbols outside the alphabet
    /// cannot be represented and are ignored.
    pub fn insert(&mut self, word: &str) {
        if let Some(letters) = alphabet::encode(word) {
            self.insert_letters(&letters);
        }
    }

    /// Insert an already-encoded word
    ///
    /// Returns `true` if the word was not present before.
    pub fn insert_letters(&mut self, letters: &[Letter]) -> bool {
        let mut node = 0usize;
        for &letter in letters {
            let slot = self.nodes[node].children[letter.index()];
            node = if slot == NO_CHILD {
                let id = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node].children[letter.index()] = id as u32;
                id
            } else {
                slot as usize
            };
        }

        let fresh = !self.nodes[node].terminal;
        if fresh {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
        fresh
    }

    fn walk(&self, word: &str) -> Option<NodeId> {
        word.chars().try_fold(self.root(), |node, c| {
            Letter::from_char(c).and_then(|letter| self.child(node, letter))
        })
    }

    /// Whether `word` was inserted
    ///
    /// # Examples
    /// ```
    /// use balda::dictionary::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("КОТ");
    /// trie.insert("КОД");
    /// assert!(trie.contains("КОТ"));
    /// assert!(!trie.contains("КО"));
    /// assert!(trie.has_prefix("КО"));
    /// assert!(!trie.contains("КОДА"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.is_word(node))
    }

    /// Whether some inserted word starts with `prefix`
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Walk `word` one prefix at a time
    ///
    /// Yields `(node, is_word)` for prefixes of length 1, 2, ... and stops
    /// at the first prefix with no matching node.
    #[must_use]
    pub fn prefix_nodes<'w>(&self, word: &'w str) -> PrefixNodes<'_, 'w> {
        PrefixNodes {
            trie: self,
            chars: word.chars(),
            node: Some(self.root()),
        }
    }

    /// Letters that start at least one word, in alphabet order
    #[must_use]
    pub fn root_letters(&self) -> Vec<Letter> {
        Letter::all()
            .filter(|&letter| self.child(self.root(), letter).is_some())
            .collect()
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of allocated nodes, root included
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Iterator returned by [`Trie::prefix_nodes`]
pub struct PrefixNodes<'t, 'w> {
    trie: &'t Trie,
    chars: Chars<'w>,
    node: Option<NodeId>,
}

impl Iterator for PrefixNodes<'_, '_> {
    type Item = (NodeId, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        let c = self.chars.next()?;
        let child = Letter::from_char(c).and_then(|letter| self.trie.child(node, letter));
        self.node = child;
        child.map(|id| (id, self.trie.is_word(id)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.node.is_none() {
            (0, Some(0))
        } else {
            (0, self.chars.size_hint().1)
        }
    }
}

impl FusedIterator for PrefixNodes<'_, '_> {}
