/// Union-find (disjoint-set forest) with path halving and union by size.
///
/// Every element starts as its own singleton set. A fresh instance is built
/// for each spanning-tree pass; instances are never shared.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Create a union-find over elements `0..n`, each in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of the set containing `id`, with path halving.
    ///
    /// Panics if `id >= self.len()`.
    pub fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Union the sets containing `a` and `b`. Returns the new representative.
    ///
    /// The smaller tree is attached under the larger one; on equal sizes the
    /// root of `b` goes under the root of `a`.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        self.components -= 1;
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb;
            self.size[rb] += self.size[ra];
            rb
        } else {
            self.parent[rb] = ra;
            self.size[ra] += self.size[rb];
            ra
        }
    }

    /// Get the size of the set containing `id` (including `id` itself).
    pub fn set_size(&mut self, id: usize) -> usize {
        let r = self.find(id);
        self.size[r]
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_elements_are_roots() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.set_size(i), 1);
        }
        assert_eq!(uf.components(), 5);
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        assert!(uf.connected(0, 1));
        assert_eq!(uf.find(0), uf.find(1));
        assert_eq!(uf.components(), 4);
    }

    #[test]
    fn union_weighted_larger_becomes_root() {
        let mut uf = UnionFind::new(10);
        // Build a larger set {0,1,2}
        uf.union(0, 1);
        uf.union(0, 2);
        let r_large = uf.find(0);
        let root = uf.union(5, 0);
        assert_eq!(root, r_large);
        assert_eq!(uf.find(5), r_large);
    }

    #[test]
    fn equal_sizes_keep_first_root() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.union(2, 3), 2);
        assert_eq!(uf.union(1, 0), 1);
        // {2,3} and {0,1}: both size 2, root of the first argument survives
        assert_eq!(uf.union(3, 0), 2);
        assert_eq!(uf.find(1), 2);
    }

    #[test]
    fn set_size_correct() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.set_size(0), 1);
        uf.union(0, 1);
        assert_eq!(uf.set_size(0), 2);
        assert_eq!(uf.set_size(1), 2);
        uf.union(0, 2);
        assert_eq!(uf.set_size(0), 3);
    }

    #[test]
    fn path_halving_works() {
        let mut uf = UnionFind::new(10);
        // Create a chain: 0→1→2→3
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(2, 3);
        let root = uf.find(0);
        assert_eq!(uf.find(0), root);
        assert_eq!(uf.find(1), root);
        assert_eq!(uf.find(2), root);
        assert_eq!(uf.find(3), root);
    }

    #[test]
    fn disjoint_sets_stay_separate() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        assert!(!uf.connected(0, 2));
        assert_eq!(uf.components(), 2);
    }

    #[test]
    fn union_same_set_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        let r = uf.find(0);
        assert_eq!(uf.union(0, 1), r);
        assert_eq!(uf.set_size(0), 2);
        assert_eq!(uf.components(), 2);
    }

    #[test]
    #[should_panic]
    fn find_out_of_range_panics() {
        let mut uf = UnionFind::new(3);
        uf.find(3);
    }

    proptest! {
        #[test]
        fn unions_are_permanent_and_find_is_stable(
            pairs in proptest::collection::vec((0usize..20, 0usize..20), 0..60)
        ) {
            let mut uf = UnionFind::new(20);
            for (i, &(a, b)) in pairs.iter().enumerate() {
                uf.union(a, b);
                for &(x, y) in &pairs[..=i] {
                    prop_assert!(uf.connected(x, y));
                }
            }
            for x in 0..20 {
                let r = uf.find(x);
                prop_assert_eq!(uf.find(x), r);
                prop_assert_eq!(uf.find(r), r);
            }
            let roots: std::collections::HashSet<usize> = (0..20).map(|x| uf.find(x)).collect();
            prop_assert_eq!(roots.len(), uf.components());
            let total: usize = roots.iter().map(|&r| uf.set_size(r)).sum();
            prop_assert_eq!(total, 20);
        }
    }
}
