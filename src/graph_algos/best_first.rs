use crate::config::SearchConfig;
use crate::errors::NavigationError;
use super::{Expansion, GraphNodeMap};

use std::{
    collections::BinaryHeap,
    hash::Hash,
    fmt::Debug,
    cmp::Ordering
};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use tracing::trace;



/// Entry on the open list
#[derive(Debug)]
struct Frontier<T> {
    index: usize, // index in the node map - maps to the Id of the node
    cost: T, // Cost to reach this node when it was pushed
    priority: T, // cost + h(n), equal to cost for Dijkstra
}

// BinaryHeap is a max-heap: invert so the lowest priority pops first,
// ties go to the node discovered earliest
impl<T: Ord> Ord for Frontier<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for Frontier<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for Frontier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.index == other.index
    }
}
impl<T: PartialEq> Eq for Frontier<T> {}


/// Priority-first expansion shared by Dijkstra and A*
/// Pops the lowest `cost + heuristic` entry until the goal is popped or the open list is empty.
/// There is no decrease-key: an improved node is pushed again and its older entry goes stale.
pub(crate) fn best_first<N, C, IT, NN, H, G>(
    start: N,
    neighbors: NN,
    heuristic_fn: H,
    goal_fn: G,
    config: &SearchConfig,
) -> Result<Expansion<N, C>, NavigationError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N) -> Result<C, NavigationError>, // estimated cost to the goal
    G: Fn(&N) -> bool, // Returns true if goal is met
{
    let mut open_list: BinaryHeap<Frontier<C>> = BinaryHeap::new();

    // Best known cost and parent for every node seen so far
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut node_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    let start_priority = heuristic_fn(&start)?;
    let start_index = node_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    open_list.push(Frontier {
        index: start_index,
        cost: Zero::zero(),
        priority: start_priority,
    });

    let mut iterations = 0usize;

    while let Some(Frontier { index, cost, priority }) = open_list.pop() {

        // indices on the open list always come from node_map
        let Some((node, &(_, best))) = node_map.get_index(index) else {
            continue;
        };

        // A better path to this node was pushed after this entry
        let stale = cost > best;
        if stale && !config.counts_stale() {
            continue;
        }

        iterations += 1;
        trace!(iteration = iterations, ?node, ?cost, ?priority, stale, "pop");

        if stale {
            continue;
        }

        if goal_fn(node) {
            return Ok(Expansion { node_map, goal_index: Some(index), iterations });
        }

        for (neighbor, edge_cost) in neighbors(node) {

            // confirmed cost through the current node, not heuristic
            let new_cost = best + edge_cost;

            let (neighbor_index, h_cost) = match node_map.entry(neighbor) {
                Vacant(e) => {
                    // first time we're seeing this neighbor
                    let h_cost = heuristic_fn(e.key())?;
                    let neighbor_index = e.index();
                    e.insert((index, new_cost));
                    (neighbor_index, h_cost)
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        // found a better path to this neighbor
                        let h_cost = heuristic_fn(e.key())?;
                        e.insert((index, new_cost));
                        (e.index(), h_cost)
                    } else {
                        continue;
                    }
                }
            };

            open_list.push(Frontier {
                index: neighbor_index,
                cost: new_cost,
                priority: new_cost + h_cost,
            });
        }
    }

    Ok(Expansion { node_map, goal_index: None, iterations })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaleEntries;
    use std::collections::HashMap;

    fn create_neighbor_fn<'a>(graph: &'a HashMap<&'static str, Vec<(&'static str, u32)>>) -> impl Fn(&&'static str) -> Vec<(&'static str, u32)> + 'a {
        move |node| graph.get(node).cloned().unwrap_or_default()
    }

    // A-C-B is cheaper than A-B, so the first entry pushed for B goes stale
    // D is far enough away that the stale entry is popped before it
    fn stale_graph() -> HashMap<&'static str, Vec<(&'static str, u32)>> {
        HashMap::from([
            ("A", vec![("B", 10), ("C", 1), ("D", 15)]),
            ("B", vec![("A", 10), ("C", 1)]),
            ("C", vec![("A", 1), ("B", 1)]),
            ("D", vec![("A", 15)]),
        ])
    }

    #[test]
    fn test_frontier_pops_lowest_priority_then_earliest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { index: 2, cost: 5u32, priority: 5 });
        heap.push(Frontier { index: 1, cost: 5, priority: 5 });
        heap.push(Frontier { index: 3, cost: 1, priority: 1 });
        heap.push(Frontier { index: 0, cost: 9, priority: 9 });

        let order: Vec<_> = std::iter::from_fn(|| heap.pop().map(|f| f.index)).collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_stale_pops_are_counted_by_default() {
        let graph = stale_graph();
        let expansion = best_first(
            "A",
            create_neighbor_fn(&graph),
            |_| Ok(0),
            |node| *node == "D",
            &SearchConfig::default(),
        ).unwrap();

        // A, C, B(2), B(10, stale), D
        assert_eq!(expansion.iterations, 5);
        assert_eq!(expansion.node_map["B"], (expansion.node_map.get_index_of("C").unwrap(), 2));
    }

    #[test]
    fn test_stale_pops_can_be_discarded() {
        let graph = stale_graph();
        let expansion = best_first(
            "A",
            create_neighbor_fn(&graph),
            |_| Ok(0),
            |node| *node == "D",
            &SearchConfig::new(StaleEntries::Discard),
        ).unwrap();

        assert_eq!(expansion.iterations, 4);
        let goal = expansion.goal_index.unwrap();
        assert_eq!(expansion.node_map[goal].1, 15);
    }

    #[test]
    fn test_goal_at_start_takes_one_iteration() {
        let graph = stale_graph();
        let expansion = best_first(
            "A",
            create_neighbor_fn(&graph),
            |_| Ok(0),
            |node| *node == "A",
            &SearchConfig::default(),
        ).unwrap();

        assert_eq!(expansion.iterations, 1);
        assert_eq!(expansion.goal_index, Some(0));
        assert_eq!(expansion.node_map.len(), 1);
    }

    #[test]
    fn test_exhausted_open_list() {
        let graph = stale_graph();
        let expansion = best_first(
            "A",
            create_neighbor_fn(&graph),
            |_| Ok(0),
            |node| *node == "Z",
            &SearchConfig::default(),
        ).unwrap();

        assert_eq!(expansion.goal_index, None);
        // every pushed entry is popped: A, C, B(2), B(10), D
        assert_eq!(expansion.iterations, 5);
        assert!(matches!(
            expansion.into_route(),
            Err(NavigationError::NoPathFound { iterations: 5 })
        ));
    }

    #[test]
    fn test_heuristic_error_is_propagated() {
        let graph = stale_graph();
        let result = best_first(
            "A",
            create_neighbor_fn(&graph),
            |node: &&str| {
                if *node == "D" {
                    Err(NavigationError::UnknownNode(node.to_string()))
                } else {
                    Ok(0)
                }
            },
            |node| *node == "B",
            &SearchConfig::default(),
        );

        assert!(matches!(result, Err(NavigationError::UnknownNode(n)) if n == "D"));
    }
}
