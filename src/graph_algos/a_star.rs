use crate::config::SearchConfig;
use crate::errors::NavigationError;
use super::{best_first, Route};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Zero;



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {

    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// From start Node, traverse through graph until node meets goal criteria
    /// The open list is ordered by f = g + h, relaxation compares g alone.
    /// The returned path is only guaranteed optimal if the heuristic is admissible
    /// (never overestimates the true cost to reach the goal)
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Route<N, C>, NavigationError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> Result<C, NavigationError>, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Zero + Ord + Copy + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        best_first(start, neighbors, heuristic_fn, goal_fn, &self.config)?.into_route()
    }
}
