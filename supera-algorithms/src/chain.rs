//! Root finding over parent-pointer chains.

#[derive(Clone, Copy)]
enum Mark {
    Unseen,
    OnPath,
    Done(Option<usize>),
}

/// Top-most reachable index for every node.
///
/// A chain ends at a node whose parent is missing, out of range or the node
/// itself. Nodes whose chain enters a cycle of two or more nodes map to
/// `None`. Runs in O(n): every node is walked once.
pub(crate) fn chain_roots(
    n: usize,
    parent_of: impl Fn(usize) -> Option<usize>,
) -> Vec<Option<usize>> {
    let mut marks = vec![Mark::Unseen; n];
    let mut path = Vec::new();

    for start in 0..n {
        if !matches!(marks[start], Mark::Unseen) {
            continue;
        }

        let mut node = start;
        let root = loop {
            match marks[node] {
                Mark::Done(root) => break root,
                Mark::OnPath => break None,
                Mark::Unseen => {}
            }
            marks[node] = Mark::OnPath;
            path.push(node);

            match parent_of(node).filter(|&p| p < n) {
                Some(p) if p != node => node = p,
                _ => break Some(node),
            }
        };

        for idx in path.drain(..) {
            marks[idx] = Mark::Done(root);
        }
    }

    marks
        .into_iter()
        .map(|mark| match mark {
            Mark::Done(root) => root,
            Mark::Unseen | Mark::OnPath => None,
        })
        .collect()
}

/// Flags the nodes that lie on a cycle of two or more nodes.
///
/// Nodes that merely lead into a cycle are not flagged, and neither are
/// self-references.
pub(crate) fn cycle_members(n: usize, parent_of: impl Fn(usize) -> Option<usize>) -> Vec<bool> {
    let mut marks = vec![Mark::Unseen; n];
    let mut on_cycle = vec![false; n];
    let mut path = Vec::new();

    for start in 0..n {
        if !matches!(marks[start], Mark::Unseen) {
            continue;
        }

        let mut node = start;
        loop {
            match marks[node] {
                Mark::Done(_) => break,
                Mark::OnPath => {
                    if let Some(pos) = path.iter().position(|&idx| idx == node) {
                        for &idx in &path[pos..] {
                            on_cycle[idx] = true;
                        }
                    }
                    break;
                }
                Mark::Unseen => {}
            }
            marks[node] = Mark::OnPath;
            path.push(node);

            match parent_of(node).filter(|&p| p < n) {
                Some(p) if p != node => node = p,
                _ => break,
            }
        }

        for idx in path.drain(..) {
            marks[idx] = Mark::Done(None);
        }
    }

    on_cycle
}
