//! The context record passed to every rule.
//!
//! Rules address their neighbors by index into the whole cluster slice, so
//! a rule can rewrite the previous or next cluster without holding two
//! mutable borrows at once. Neighbors outside the word read as empty.

use super::cluster::{Cluster, EMPTY_CLUSTER};
use crate::lexer::Token;
use crate::symbols::Symbol;

static EMPTY_TOKEN: Token = Token::EMPTY;

/// Everything a rule may read (and the clusters it may write) at one position.
#[derive(Debug)]
pub struct RuleContext<'a> {
    /// Index of the current cluster.
    pub idx: usize,
    /// Distance of the current cluster from the last one.
    pub neg_idx: usize,
    /// True at the first cluster.
    pub isfirst: bool,
    /// True at the last cluster.
    pub islast: bool,
    /// True if the word contains a maqaf.
    pub has_maqaf: bool,
    /// True if any token carries an accent or a meteg.
    pub has_accents: bool,
    /// Index of the nearest previous non-empty cluster.
    pub prev: Option<usize>,
    /// Vowel of `prev`, or of the non-empty cluster before it.
    pub last_vowel: Option<Symbol>,
    /// The lexed tokens.
    pub tokens: &'a [Token],
    /// The clusters being rewritten.
    pub guesses: &'a mut [Cluster],
}

impl<'a> RuleContext<'a> {
    /// Cluster at `i`, or an empty cluster outside the word.
    #[inline]
    pub fn at(&self, i: usize) -> &Cluster {
        self.guesses.get(i).unwrap_or(&EMPTY_CLUSTER)
    }

    /// All clusters, read-only.
    #[inline]
    pub fn clusters(&self) -> &[Cluster] {
        self.guesses
    }

    /// Mutable cluster at `i`, if it exists.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Option<&mut Cluster> {
        self.guesses.get_mut(i)
    }

    /// The current cluster.
    #[inline]
    pub fn guess(&self) -> &Cluster {
        self.at(self.idx)
    }

    /// The current cluster, mutably.
    #[inline]
    pub fn guess_mut(&mut self) -> &mut Cluster {
        &mut self.guesses[self.idx]
    }

    /// The cluster after the current one.
    #[inline]
    pub fn next_guess(&self) -> &Cluster {
        self.at(self.idx + 1)
    }

    /// The cluster two after the current one.
    #[inline]
    pub fn next_guess2(&self) -> &Cluster {
        self.at(self.idx + 2)
    }

    /// Index of the next cluster if it is inside the word.
    #[inline]
    pub fn next_idx(&self) -> Option<usize> {
        let next = self.idx + 1;
        (next < self.guesses.len()).then_some(next)
    }

    /// The nearest previous non-empty cluster.
    #[inline]
    pub fn prev_guess(&self) -> &Cluster {
        self.prev.map_or(&EMPTY_CLUSTER, |p| self.at(p))
    }

    /// Mark the previous cluster as closing its syllable.
    pub fn close_prev(&mut self) {
        if let Some(p) = self.prev {
            self.guesses[p].isopen = false;
        }
    }

    /// The current token.
    #[inline]
    pub fn token(&self) -> &Token {
        self.token_at(self.idx)
    }

    /// The token after the current one.
    #[inline]
    pub fn next_token(&self) -> &Token {
        self.token_at(self.idx + 1)
    }

    /// The token before the current one.
    #[inline]
    pub fn prev_token(&self) -> &Token {
        match self.idx.checked_sub(1) {
            Some(i) => self.token_at(i),
            None => &EMPTY_TOKEN,
        }
    }

    /// Token at `i`, or an empty token outside the word.
    #[inline]
    pub fn token_at(&self, i: usize) -> &Token {
        self.tokens.get(i).unwrap_or(&EMPTY_TOKEN)
    }

    /// Tokens strictly before the current one.
    #[inline]
    pub fn tokens_before(&self) -> &[Token] {
        &self.tokens[..self.idx.min(self.tokens.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_reads_as_empty() {
        let tokens = vec![Token::with_letter('\u{05D0}')];
        let mut guesses = vec![Cluster::new(Some(Symbol::Alef), None, None)];
        let ctx = RuleContext {
            idx: 0,
            neg_idx: 0,
            isfirst: true,
            islast: true,
            has_maqaf: false,
            has_accents: false,
            prev: None,
            last_vowel: None,
            tokens: &tokens,
            guesses: &mut guesses,
        };
        assert!(ctx.next_guess().is_empty());
        assert!(ctx.next_guess2().is_empty());
        assert!(ctx.prev_guess().is_empty());
        assert!(ctx.next_token().is_empty());
        assert!(ctx.prev_token().is_empty());
        assert_eq!(ctx.next_idx(), None);
        assert!(ctx.tokens_before().is_empty());
    }
}
