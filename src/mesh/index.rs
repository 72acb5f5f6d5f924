//! Index types for mesh elements.
//!
//! Every entity lives in its own table inside [`Topology`](super::Topology)
//! and is referred to by a type-safe index into that table. Relationships
//! between points, edges, faces, and vertices are stored as these indices, so
//! the object graph has no reference cycles.

use std::fmt::{self, Debug};

/// A type-safe point index (position in the input point list).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct PointId(u32);

/// A type-safe mesh edge index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EdgeId(u32);

/// A type-safe face index (discovery order).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

/// A type-safe rendering vertex index (creation order).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            ///
            /// # Panics
            /// Panics in debug builds if the value does not fit in 32 bits.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Get the raw 32-bit value.
            #[inline]
            pub fn raw(self) -> u32 {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(PointId, "P");
impl_index_type!(EdgeId, "E");
impl_index_type!(FaceId, "F");
impl_index_type!(VertexId, "V");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_id() {
        let p = PointId::new(42);
        assert_eq!(p.index(), 42);
        assert_eq!(p.raw(), 42);
    }

    #[test]
    fn test_ordering_follows_index() {
        assert!(PointId::new(1) < PointId::new(2));
        assert!(FaceId::new(7) > FaceId::new(3));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", PointId::new(3)), "P(3)");
        assert_eq!(format!("{:?}", EdgeId::new(4)), "E(4)");
        assert_eq!(format!("{:?}", FaceId::new(5)), "F(5)");
        assert_eq!(format!("{:?}", VertexId::new(6)), "V(6)");
    }
}
