use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Explore a tree best-first, by a priority computed for each node.
///
/// Return an iterator that produces nodes in order of non-decreasing priority,
/// starting with `start`, whose priority is `start_priority`. Each time the
/// iterator produces a node, it first calls `expand` on it to get the node's
/// children, paired with their priorities, and adds them to the set of pending
/// nodes. So the iterator always produces the pending node whose priority is
/// least; a caller who wants the greatest of something first should use
/// `std::cmp::Reverse` in its priorities.
///
/// This is a tree search: there is no check for nodes reached more than once.
/// The caller must ensure that `expand` eventually returns no children, or
/// simply stop consuming the iterator once it has what it wants.
///
/// Nodes with equal priorities come out in an unspecified order, but the same
/// order from one run to the next.
pub fn best_first<N, P, F, I>(start: N, start_priority: P, expand: F) -> BestFirst<N, P, F>
where
    P: Ord,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, P)>,
{
    let mut pending = BinaryHeap::new();
    pending.push(Prospect {
        node: start,
        priority: start_priority,
    });
    BestFirst { pending, expand }
}

/// A node awaiting exploration, along with its priority.
#[derive(Debug)]
pub struct Prospect<N, P> {
    pub node: N,
    pub priority: P,
}

pub struct BestFirst<N, P, F> {
    pending: BinaryHeap<Prospect<N, P>>,
    expand: F,
}

impl<N, P, F, I> Iterator for BestFirst<N, P, F>
where
    P: Ord,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, P)>,
{
    type Item = Prospect<N, P>;

    fn next(&mut self) -> Option<Prospect<N, P>> {
        let prospect = match self.pending.pop() {
            None => return None,
            Some(p) => p,
        };
        for (node, priority) in (self.expand)(&prospect.node) {
            self.pending.push(Prospect { node, priority });
        }
        Some(prospect)
    }
}

// `BinaryHeap` is a max-heap, so `Prospect`s are ordered backwards: A is
// 'greater than' B if A's priority is less than B's, making it the better
// prospect to explore next.
impl<N, P: Ord> PartialEq for Prospect<N, P> {
    fn eq(&self, other: &Prospect<N, P>) -> bool {
        self.priority == other.priority
    }
}

impl<N, P: Ord> Eq for Prospect<N, P> {}

impl<N, P: Ord> Ord for Prospect<N, P> {
    fn cmp(&self, other: &Prospect<N, P>) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

impl<N, P: Ord> PartialOrd for Prospect<N, P> {
    fn partial_cmp(&self, other: &Prospect<N, P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cmp::Reverse;

    /// The implicit binary tree in which node `n` has children `2n` and
    /// `2n + 1`, cut off at `limit`.
    fn children(n: u32, limit: u32) -> Vec<u32> {
        [2 * n, 2 * n + 1]
            .iter()
            .cloned()
            .filter(|&c| c < limit)
            .collect()
    }

    #[test]
    fn test_least_first() {
        let order = best_first(1, 1, |&n| children(n, 16).into_iter().map(|c| (c, c)))
            .map(|p| p.node)
            .collect::<Vec<_>>();
        assert_eq!(order, (1..16).collect::<Vec<_>>());
    }

    #[test]
    fn test_greatest_first() {
        // Priorities only order the pending nodes: 15 can't come out before
        // its ancestors 1, 3 and 7 have been expanded.
        let order = best_first(1, Reverse(1), |&n| {
            children(n, 16).into_iter().map(|c| (c, Reverse(c)))
        })
        .map(|p| p.node)
        .take(6)
        .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 3, 7, 15, 14, 6]);
    }

    #[test]
    fn test_composite_priority() {
        // Prefer deep nodes, then small ones.
        let depth = |n: u32| 32 - n.leading_zeros();
        let order = best_first(1, (Reverse(depth(1)), 1), |&n| {
            children(n, 8)
                .into_iter()
                .map(move |c| (c, (Reverse(depth(c)), c)))
        })
        .map(|p| p.node)
        .collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 4, 5, 3, 6, 7]);
    }
}
