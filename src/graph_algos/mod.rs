pub mod dijkstra;
pub mod a_star;
mod best_first;
mod shortest_path;

use best_first::best_first;
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::NavigationError;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub(crate) type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Outcome of a successful search
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N, C> {
    pub path: Vec<N>, // start to goal, both inclusive
    pub cost: C,
    pub iterations: usize, // priority-queue pops performed
}


/// Everything the best-first loop learned before it stopped
#[derive(Debug)]
pub(crate) struct Expansion<N, C> {
    pub node_map: GraphNodeMap<N, C>,
    pub goal_index: Option<usize>,
    pub iterations: usize,
}

impl<N: Clone, C: Copy> Expansion<N, C> {

    /// Turn the expansion into a route, or `NoPathFound` if the goal was never popped
    pub fn into_route(self) -> Result<Route<N, C>, NavigationError> {
        let Expansion { node_map, goal_index, iterations } = self;

        let goal_index = goal_index.ok_or(NavigationError::NoPathFound { iterations })?;
        let path = shortest_path(&node_map, goal_index)
            .ok_or(NavigationError::NoPathFound { iterations })?;
        let cost = node_map[goal_index].1;

        Ok(Route { path, cost, iterations })
    }
}
