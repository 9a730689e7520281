//! A `UnionFind` (Disjoint-Set Union) over a fixed universe of element ids, used to track
//! which open sites of a percolation grid are connected.
use std::cell::Cell;

use crate::error::InvalidArgument;

pub type SetId = usize;

/// A `UnionFind` data structure, also known as a Disjoint-Set Union (DSU).
///
/// The universe is fixed at construction: ids `0..size` start out as singleton components
/// and can only ever be merged, never split. Two techniques keep the trees shallow:
///
/// 1. **Union by size**: the root of the smaller component is hung under the root of the
///    larger one, bounding tree height by `log2(size)`.
/// 2. **Path splitting**: every node visited by [`UnionFind::find`] is re-pointed to its
///    grandparent. `Cell` makes this possible behind a shared reference, so queries do not
///    need `&mut self`.
///
/// Together they give amortized near-constant cost per operation.
///
/// # Example
/// ```
/// use percolation::union_find::UnionFind;
///
/// let mut uf = UnionFind::with_size(4).unwrap();
/// uf.union(0, 2).unwrap();
/// assert!(uf.connected(2, 0).unwrap());
/// assert!(!uf.connected(1, 3).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<Cell<SetId>>,
    /// Component sizes, only meaningful at roots.
    sizes: Vec<usize>,
    components: usize,
}

impl UnionFind {
    pub fn with_size(size: usize) -> Result<Self, InvalidArgument> {
        if size == 0 {
            return Err(InvalidArgument::EmptyUniverse);
        }

        Ok(Self {
            parents: (0..size).map(Cell::new).collect(),
            sizes: vec![1; size],
            components: size,
        })
    }

    pub fn size(&self) -> usize {
        self.parents.len()
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Number of elements in the component containing `id`.
    pub fn component_size(&self, id: SetId) -> Result<usize, InvalidArgument> {
        Ok(self.sizes[self.find(id)?])
    }

    /// Merges the components of `id_1` and `id_2`.
    ///
    /// Returns `true` if two distinct components were merged and `false` if both ids were
    /// already connected.
    pub fn union(&mut self, id_1: SetId, id_2: SetId) -> Result<bool, InvalidArgument> {
        let root_1 = self.find(id_1)?;
        let root_2 = self.find(id_2)?;
        if root_1 == root_2 {
            return Ok(false);
        }

        let (small, large) = if self.sizes[root_1] < self.sizes[root_2] {
            (root_1, root_2)
        } else {
            (root_2, root_1)
        };

        self.parents[small].set(large);
        self.sizes[large] += self.sizes[small];
        self.components -= 1;

        Ok(true)
    }

    /// Returns the canonical representative of the component containing `id`.
    pub fn find(&self, id: SetId) -> Result<SetId, InvalidArgument> {
        self.validate(id)?;
        Ok(self.root(id))
    }

    pub fn connected(&self, id_1: SetId, id_2: SetId) -> Result<bool, InvalidArgument> {
        Ok(self.find(id_1)? == self.find(id_2)?)
    }

    fn validate(&self, id: SetId) -> Result<(), InvalidArgument> {
        if id < self.size() {
            Ok(())
        } else {
            Err(InvalidArgument::Element {
                id,
                count: self.size(),
            })
        }
    }

    fn parent(&self, id: SetId) -> SetId {
        self.parents[id].get()
    }

    fn root(&self, mut id: SetId) -> SetId {
        loop {
            let parent = self.parent(id);
            if parent == id {
                return id;
            }

            let grandparent = self.parent(parent);
            self.parents[id].set(grandparent);
            id = parent;
        }
    }
}

/// Two union-finds are equal when they describe the same partition, regardless of tree shape.
impl PartialEq for UnionFind {
    fn eq(&self, other: &Self) -> bool {
        if self.size() != other.size() || self.components != other.components {
            return false;
        }

        // Same partition iff the mapping between roots is a bijection.
        let mut mapping = vec![None; self.size()];
        let mut reverse = vec![None; other.size()];
        for id in 0..self.size() {
            let (mine, theirs) = (self.root(id), other.root(id));
            match (mapping[mine], reverse[theirs]) {
                (None, None) => {
                    mapping[mine] = Some(theirs);
                    reverse[theirs] = Some(mine);
                }
                (Some(m), Some(r)) if m == theirs && r == mine => {}
                _ => return false,
            }
        }

        true
    }
}

impl Eq for UnionFind {}

#[cfg(test)]
mod tests {
    use super::UnionFind;
    use crate::error::InvalidArgument;

    #[test]
    fn creation() {
        let uf = UnionFind::with_size(10).unwrap();

        assert_eq!(uf.size(), 10);
        assert_eq!(uf.component_count(), 10);
        for id in 0..10 {
            assert_eq!(uf.find(id).unwrap(), id);
        }
    }

    #[test]
    fn empty_universe_is_rejected() {
        assert_eq!(
            UnionFind::with_size(0).unwrap_err(),
            InvalidArgument::EmptyUniverse
        );
    }

    #[test]
    fn union_and_find() {
        let mut uf = UnionFind::with_size(4).unwrap();
        uf.union(0, 2).unwrap();
        uf.union(3, 1).unwrap();
        uf.union(1, 0).unwrap();

        assert_eq!(uf.find(0), uf.find(1));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(0), uf.find(3));
        assert_eq!(uf.component_count(), 1);
        assert_eq!(uf.component_size(2).unwrap(), 4);
    }

    #[test]
    fn repeated_union_is_a_no_op() {
        let mut uf = UnionFind::with_size(3).unwrap();

        assert!(uf.union(0, 1).unwrap());
        assert!(!uf.union(1, 0).unwrap());
        assert!(!uf.union(2, 2).unwrap());
        assert_eq!(uf.component_count(), 2);
    }

    #[test]
    fn out_of_range_ids() {
        let mut uf = UnionFind::with_size(3).unwrap();
        let err = InvalidArgument::Element { id: 3, count: 3 };

        assert_eq!(uf.find(3), Err(err));
        assert_eq!(uf.connected(0, 3), Err(err));
        assert_eq!(uf.union(3, 0), Err(err));
        assert_eq!(uf.union(0, 3), Err(err));
        // A failed union leaves the partition untouched.
        assert_eq!(uf.component_count(), 3);
        assert_eq!(uf, UnionFind::with_size(3).unwrap());
    }

    #[test]
    fn smaller_component_joins_larger() {
        let mut uf = UnionFind::with_size(4).unwrap();
        uf.union(0, 1).unwrap();
        uf.union(0, 2).unwrap();
        let big_root = uf.find(0).unwrap();

        uf.union(3, 0).unwrap();

        assert_eq!(uf.find(3).unwrap(), big_root);
    }

    #[test]
    fn compression() {
        let mut uf = UnionFind::with_size(8).unwrap();
        // Build a tree of height 3 from four pairs.
        for i in (0..8).step_by(2) {
            uf.union(i, i + 1).unwrap();
        }
        uf.union(0, 2).unwrap();
        uf.union(4, 6).unwrap();
        uf.union(0, 4).unwrap();

        let root = uf.find(0).unwrap();
        let deepest = (0..8)
            .max_by_key(|&id| {
                let mut depth = 0;
                let mut current = id;
                while uf.parent(current) != current {
                    current = uf.parent(current);
                    depth += 1;
                }
                depth
            })
            .unwrap();
        let before = uf.parent(deepest);

        uf.find(deepest).unwrap();

        assert_ne!(uf.parent(deepest), before);
        assert_eq!(uf.find(deepest).unwrap(), root);
    }

    #[test]
    fn equality_ignores_tree_shape() {
        let mut a = UnionFind::with_size(4).unwrap();
        a.union(0, 1).unwrap();
        a.union(1, 2).unwrap();

        let mut b = UnionFind::with_size(4).unwrap();
        b.union(2, 1).unwrap();
        b.union(0, 2).unwrap();

        assert_eq!(a, b);

        b.union(3, 0).unwrap();
        assert_ne!(a, b);
    }
}
