//! Ordered pairs of points.
//!
//! A [`Pair`] is a plain 2-tuple. Equality and hashing are order-dependent
//! (`(a, b) != (b, a)`), which makes it usable as a directed step. Its
//! [`sorted`](Pair::sorted) form is the canonical key for an undirected edge.

/// An ordered 2-tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<T> {
    /// First element.
    pub p0: T,
    /// Second element.
    pub p1: T,
}

impl<T: Copy + Ord> Pair<T> {
    /// Create a pair in the given order.
    #[inline]
    pub fn new(p0: T, p1: T) -> Self {
        Self { p0, p1 }
    }

    /// Create a pair with the smaller element first.
    #[inline]
    pub fn new_sorted(a: T, b: T) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// The canonical (sorted) form of this pair.
    #[inline]
    pub fn sorted(self) -> Self {
        Self::new_sorted(self.p0, self.p1)
    }

    /// The same elements in the opposite order.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.p1, self.p0)
    }

    /// Whether either element equals `p`.
    #[inline]
    pub fn contains(self, p: T) -> bool {
        self.p0 == p || self.p1 == p
    }

    /// Same elements in the same order.
    #[inline]
    pub fn is_exact(self, other: Pair<T>) -> bool {
        self == other
    }

    /// Same elements in either order.
    #[inline]
    pub fn is_like(self, other: Pair<T>) -> bool {
        self == other || self == other.reversed()
    }

    /// The element opposite `p`.
    ///
    /// Returns `p1` when `p` is `p0`, and `p0` otherwise.
    #[inline]
    pub fn next(self, p: T) -> T {
        if self.p0 == p {
            self.p1
        } else {
            self.p0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted() {
        let pair = Pair::new(5, 2);
        assert_eq!(pair.sorted(), Pair::new(2, 5));
        assert_eq!(Pair::new_sorted(9, 1), Pair::new(1, 9));
        assert_eq!(Pair::new_sorted(1, 9), Pair::new(1, 9));
    }

    #[test]
    fn test_exact_vs_like() {
        let a = Pair::new(1, 2);
        let b = Pair::new(2, 1);

        assert!(a.is_exact(a));
        assert!(!a.is_exact(b));
        assert!(a.is_like(b));
        assert!(!a.is_like(Pair::new(1, 3)));
    }

    #[test]
    fn test_next_and_contains() {
        let pair = Pair::new(4, 7);
        assert_eq!(pair.next(4), 7);
        assert_eq!(pair.next(7), 4);
        assert!(pair.contains(4));
        assert!(!pair.contains(5));
        assert_eq!(pair.reversed(), Pair::new(7, 4));
    }
}
