use indexmap::IndexMap;

use crate::utils::math;

/// Splits normalized text into terms.
///
/// Case-folds, then splits on whitespace runs. Punctuation stays attached
/// to its token, so `"truck."` and `"truck"` are different terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// TermVector 構造体
/// Sparse term-frequency vector of one text.
///
/// Terms keep first-seen order. Absent terms count 0, present terms count >= 1.
/// Built once and never mutated, so the squared norm is cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    term_count: IndexMap<Box<str>, u32>,
    token_sum: u64,
    squared_norm: f64,
}

impl TermVector {
    /// Tokenizes `text` and counts every term.
    /// Empty or whitespace-only text gives an empty vector.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(&tokenize(text))
    }

    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut term_count: IndexMap<Box<str>, u32> = IndexMap::with_capacity(tokens.len());
        for token in tokens {
            *term_count.entry(token.as_ref().into()).or_insert(0) += 1;
        }
        let squared_norm = math::squared_norm(term_count.values().copied());
        Self {
            term_count,
            token_sum: tokens.len() as u64,
            squared_norm,
        }
    }

    /// count of `term`, 0 when absent
    #[inline]
    pub fn get(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_ref(), count))
    }

    /// number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// total number of tokens, repeats included
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.token_sum
    }

    /// Euclidean norm over the term counts
    #[inline]
    pub fn norm(&self) -> f64 {
        self.squared_norm.sqrt()
    }

    /// Σ self[t] * other[t] over the terms both vectors contain.
    pub fn dot(&self, other: &TermVector) -> f64 {
        // 小さい方を走査
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        math::dot(
            small
                .term_count
                .iter()
                .filter_map(|(term, &count)| large.term_count.get(term).map(|&c| (count, c))),
        )
    }

    /// cos(θ) = dot / (||a|| * ||b||), 0.0 when either vector is empty.
    /// Symmetric: `a.cosine_similarity(&b) == b.cosine_similarity(&a)`.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        math::cosine(self.dot(other), self.squared_norm, other.squared_norm)
    }
}
