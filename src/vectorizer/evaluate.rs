use std::{fmt, sync::Arc};

use crate::vectorizer::document::Document;

/// Structure to store ranked search results
pub struct Hits {
    /// (Document, Score)
    pub list: Vec<(Arc<Document>, f64)>,
}

impl Hits {
    pub fn new(list: Vec<(Arc<Document>, f64)>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score.
    /// Stable, so equal scores keep their training order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    /// best hit, if any
    pub fn top(&self) -> Option<&(Arc<Document>, f64)> {
        self.list.first()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Document, f64)> {
        self.list.iter().map(|(doc, score)| (doc.as_ref(), *score))
    }
}

impl fmt::Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for (doc, score) in &self.list {
                writeln!(f, "    {:?}: {:.6}", doc.class, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl fmt::Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (doc, score) in &self.list {
            writeln!(f, "{:.6}\t{}\t{}", score, doc.class, doc.sentence)?;
        }
        Ok(())
    }
}
