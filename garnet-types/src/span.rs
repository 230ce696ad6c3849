use serde::{Deserialize, Serialize};
use std::{cmp, fmt, sync::Arc};

/// Types that have a span of source attached to them.
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A byte range into a single shared, immutable source buffer.
///
/// The buffer is held behind an `Arc`, so a span can never outlive the text
/// it points into and cloning one is a refcount bump.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    src: Arc<str>,
    start: usize,
    end: usize,
}

impl Span {
    /// Returns `None` unless `start..end` is a valid range of `src` lying on
    /// char boundaries.
    pub fn new(src: Arc<str>, start: usize, end: usize) -> Option<Span> {
        if src.get(start..end).is_none() {
            return None;
        }
        Some(Span { src, start, end })
    }

    pub fn as_str(&self) -> &str {
        &self.src[self.start..self.end]
    }

    pub fn src(&self) -> &Arc<str> {
        &self.src
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Joins two spans of the same source into the smallest span covering
    /// both.
    pub fn join(lhs: Span, rhs: Span) -> Span {
        assert!(Arc::ptr_eq(&lhs.src, &rhs.src));
        Span {
            src: lhs.src,
            start: cmp::min(lhs.start, rhs.start),
            end: cmp::max(lhs.end, rhs.end),
        }
    }

    /// Whether `other` lies entirely within this span of the same source.
    pub fn contains(&self, other: &Span) -> bool {
        Arc::ptr_eq(&self.src, &other.src) && self.start <= other.start && other.end <= self.end
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        self.clone()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("as_str", &self.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn src(text: &str) -> Arc<str> {
        Arc::from(text)
    }

    #[test]
    fn new_rejects_ranges_off_the_source() {
        let src = src("redo");
        assert!(Span::new(src.clone(), 0, 4).is_some());
        assert!(Span::new(src.clone(), 4, 4).is_some());
        assert!(Span::new(src.clone(), 0, 5).is_none());
        assert!(Span::new(src, 3, 2).is_none());
    }

    #[test]
    fn new_rejects_ranges_off_char_boundaries() {
        let src = src("ß");
        assert!(Span::new(src.clone(), 0, 2).is_some());
        assert!(Span::new(src, 0, 1).is_none());
    }

    #[test]
    fn as_str_slices_the_source() {
        let src = src("x = 1");
        let span = Span::new(src, 4, 5).unwrap();
        assert_eq!(span.as_str(), "1");
        assert_eq!(span.len(), 1);
        assert!(!span.is_empty());
    }

    #[test]
    fn join_covers_both_spans() {
        let src = src("1 + 2");
        let lhs = Span::new(src.clone(), 0, 1).unwrap();
        let rhs = Span::new(src, 4, 5).unwrap();
        let joined = Span::join(lhs.clone(), rhs.clone());
        assert_eq!((joined.start(), joined.end()), (0, 5));
        assert!(joined.contains(&lhs));
        assert!(joined.contains(&rhs));
    }

    #[test]
    #[should_panic]
    fn join_requires_the_same_source() {
        let lhs = Span::new(src("a"), 0, 1).unwrap();
        let rhs = Span::new(src("b"), 0, 1).unwrap();
        let _ = Span::join(lhs, rhs);
    }

    #[test]
    fn contains_requires_the_same_source() {
        let outer = Span::new(src("xx"), 0, 2).unwrap();
        let other = Span::new(src("xx"), 0, 1).unwrap();
        assert!(!outer.contains(&other));
    }
}
