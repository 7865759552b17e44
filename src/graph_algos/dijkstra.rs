use crate::config::SearchConfig;
use crate::errors::NavigationError;
use super::{best_first, Route};

use std::{hash::Hash, fmt::Debug};
use num_traits::Zero;




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
/// Edge costs must be non-negative
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G, config: &SearchConfig) -> Result<Route<N, C>, NavigationError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Uninformed search: every node is ranked by its distance from the start alone
    best_first(start, neighbors, |_| Ok(Zero::zero()), goal, config)?.into_route()
}
