pub mod segtree_lazy {
    //! Segment tree with lazy propagation over a fixed-length sequence.
    //!
    //! Nodes live in pre-order: the root is slot 0, the left child of a node
    //! covering `[lo, hi]` is the next slot and the right child follows the
    //! whole left subtree. A tree over `n` elements uses exactly `2n - 1` slots.
    //!
    //! Every node keeps the aggregate of its range with its own pending action
    //! already applied. Pending actions are only kept on internal nodes, and are
    //! pushed to both children before any traversal descends past the node.

    use std::mem;

    use crate::error::{Error, Result};
    use crate::monoid::{MonoidAction, RangeAddSum};
    use crate::precondition;

    pub struct LazySegTree<M: MonoidAction> {
        n: usize,
        sum: Vec<M::X>,
        lazy: Vec<M::F>,
        width: Vec<u32>,
        ma: M,
    }

    /// Range add, range sum over `i64`.
    pub type SumSegTree = LazySegTree<RangeAddSum<i64>>;

    #[inline]
    fn children(node: usize, lo: usize, mid: usize) -> (usize, usize) {
        (node + 1, node + 2 * (mid - lo + 1))
    }

    impl<M> LazySegTree<M>
    where
        M: MonoidAction,
        M::X: Clone,
        M::F: Clone + PartialEq,
    {
        fn empty(ma: M) -> Self {
            Self {
                n: 0,
                sum: Vec::new(),
                lazy: Vec::new(),
                width: Vec::new(),
                ma,
            }
        }

        /// `n` elements, all equal to `default`. `n == 0` gives an empty tree.
        pub fn with_size(n: usize, default: M::X, ma: M) -> Self {
            let mut tree = Self::empty(ma);
            tree.rebuild(n, |_| default.clone());
            tree
        }

        pub fn from_slice(values: &[M::X], ma: M) -> Self {
            precondition!(
                !values.is_empty(),
                "LazySegTree::from_slice: cannot build from an empty array"
            );
            let mut tree = Self::empty(ma);
            tree.rebuild(values.len(), |i| values[i].clone());
            tree
        }

        pub fn try_from_slice(values: &[M::X], ma: M) -> Result<Self> {
            if values.is_empty() {
                return Err(Error::EmptyInput);
            }
            Ok(Self::from_slice(values, ma))
        }

        /// Discards every element and rebuilds the tree over `n` copies of
        /// `default`, keeping the operator set.
        pub fn reset(&mut self, n: usize, default: M::X) {
            log::trace!("LazySegTree::reset: {} -> {} elements", self.n, n);
            self.rebuild(n, |_| default.clone());
        }

        fn rebuild(&mut self, n: usize, mut leaf: impl FnMut(usize) -> M::X) {
            precondition!(
                n <= u32::MAX as usize,
                "LazySegTree: {n} elements exceed the supported width"
            );
            let slots = (2 * n).saturating_sub(1);
            self.n = n;
            self.sum.clear();
            self.sum.resize_with(slots, || self.ma.id());
            self.lazy.clear();
            self.lazy.resize_with(slots, || self.ma.id_action());
            self.width.clear();
            self.width.resize(slots, 0);
            if n > 0 {
                self.build(0, 0, n - 1, &mut leaf);
            }
            log::debug!("LazySegTree: built over {n} elements ({slots} nodes)");
        }

        fn build<L: FnMut(usize) -> M::X>(&mut self, node: usize, lo: usize, hi: usize, leaf: &mut L) {
            self.width[node] = (hi - lo + 1) as u32;
            if lo == hi {
                self.sum[node] = leaf(lo);
                return;
            }
            let mid = lo + (hi - lo) / 2;
            let (left, right) = children(node, lo, mid);
            self.build(left, lo, mid, leaf);
            self.build(right, mid + 1, hi, leaf);
            self.pull_sum(node, left, right);
        }

        pub fn len(&self) -> usize {
            self.n
        }

        pub fn is_empty(&self) -> bool {
            self.n == 0
        }

        pub fn action(&self) -> &M {
            &self.ma
        }

        fn apply(&mut self, node: usize, value: &M::F) {
            let width = self.width[node];
            self.sum[node] = self.ma.apply_to_sum(value, width, &self.sum[node]);
            if width > 1 {
                self.lazy[node] = self.ma.combine_action(value, &self.lazy[node]);
            }
        }

        fn push_lazy(&mut self, node: usize, left: usize, right: usize) {
            if self.lazy[node] == self.ma.id_action() {
                return;
            }
            let value = mem::replace(&mut self.lazy[node], self.ma.id_action());
            self.apply(left, &value);
            self.apply(right, &value);
        }

        fn pull_sum(&mut self, node: usize, left: usize, right: usize) {
            self.sum[node] = self.ma.combine(&self.sum[left], &self.sum[right]);
        }

        /// Applies `value` to every element of the inclusive range `[left, right]`.
        pub fn update(&mut self, left: usize, right: usize, value: M::F) {
            precondition!(
                left <= right && right < self.n,
                "LazySegTree::update: invalid range [{left}, {right}] for length {}",
                self.n
            );
            self.update_rec(0, 0, self.n.wrapping_sub(1), left, right, &value);
        }

        pub fn update_point(&mut self, idx: usize, value: M::F) {
            self.update(idx, idx, value);
        }

        pub fn try_update(&mut self, left: usize, right: usize, value: M::F) -> Result<()> {
            self.check_range(left, right)?;
            self.update(left, right, value);
            Ok(())
        }

        fn update_rec(
            &mut self,
            node: usize,
            lo: usize,
            hi: usize,
            left: usize,
            right: usize,
            value: &M::F,
        ) {
            if hi < left || right < lo {
                return;
            }
            if left <= lo && hi <= right {
                self.apply(node, value);
                return;
            }
            let mid = lo + (hi - lo) / 2;
            let (l, r) = children(node, lo, mid);
            self.push_lazy(node, l, r);
            self.update_rec(l, lo, mid, left, right, value);
            self.update_rec(r, mid + 1, hi, left, right, value);
            self.pull_sum(node, l, r);
        }

        /// Aggregate over the inclusive range `[left, right]`.
        pub fn query(&mut self, left: usize, right: usize) -> M::X {
            precondition!(
                left <= right && right < self.n,
                "LazySegTree::query: invalid range [{left}, {right}] for length {}",
                self.n
            );
            self.query_rec(0, 0, self.n.wrapping_sub(1), left, right)
        }

        pub fn try_query(&mut self, left: usize, right: usize) -> Result<M::X> {
            self.check_range(left, right)?;
            Ok(self.query(left, right))
        }

        fn query_rec(&mut self, node: usize, lo: usize, hi: usize, left: usize, right: usize) -> M::X {
            if hi < left || right < lo {
                return self.ma.id();
            }
            if left <= lo && hi <= right {
                return self.sum[node].clone();
            }
            let mid = lo + (hi - lo) / 2;
            let (l, r) = children(node, lo, mid);
            self.push_lazy(node, l, r);
            let result_left = self.query_rec(l, lo, mid, left, right);
            let result_right = self.query_rec(r, mid + 1, hi, left, right);
            self.ma.combine(&result_left, &result_right)
        }

        pub fn get(&mut self, idx: usize) -> M::X {
            self.query(idx, idx)
        }

        pub fn try_get(&mut self, idx: usize) -> Result<M::X> {
            if idx >= self.n {
                return Err(Error::IndexOutOfBounds { index: idx, len: self.n });
            }
            Ok(self.get(idx))
        }

        /// Flushes every pending action and returns the current elements.
        pub fn to_vec(&mut self) -> Vec<M::X> {
            let mut values = Vec::with_capacity(self.n);
            if self.n > 0 {
                self.collect_leaves(0, 0, self.n - 1, &mut values);
            }
            values
        }

        fn collect_leaves(&mut self, node: usize, lo: usize, hi: usize, values: &mut Vec<M::X>) {
            if lo == hi {
                values.push(self.sum[node].clone());
                return;
            }
            let mid = lo + (hi - lo) / 2;
            let (l, r) = children(node, lo, mid);
            self.push_lazy(node, l, r);
            self.collect_leaves(l, lo, mid, values);
            self.collect_leaves(r, mid + 1, hi, values);
        }

        fn check_range(&self, left: usize, right: usize) -> Result<()> {
            if left <= right && right < self.n {
                Ok(())
            } else {
                Err(Error::InvalidRange {
                    left,
                    right,
                    len: self.n,
                })
            }
        }
    }

    impl<T> LazySegTree<RangeAddSum<T>>
    where
        RangeAddSum<T>: MonoidAction<X = T, F = T>,
        T: Clone + PartialEq,
    {
        pub fn create(n: usize, default: T, neutral: T, neutral_action: T) -> Self {
            Self::with_size(n, default, RangeAddSum::new(neutral, neutral_action))
        }

        pub fn create_from_array(values: &[T], neutral: T, neutral_action: T) -> Self {
            Self::from_slice(values, RangeAddSum::new(neutral, neutral_action))
        }
    }

}
