use crate::config::SearchConfig;
use crate::errors::NavigationError;
use crate::graph::{Cost, StarGraph, StarId};
use crate::graph_algos::{Route, a_star::AStar, dijkstra::dijkstra};

use std::fmt;
use ordered_float::OrderedFloat;
use tracing::debug;


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "Dijkstra"),
            Algorithm::AStar => write!(f, "A*"),
        }
    }
}


/// Result of one query, owned by the caller
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub distance: f64,
    pub path: Vec<String>, // start to end inclusive, [start] when start == end
    pub iterations: usize, // priority-queue pops
}

impl SearchResult {
    /// Number of lanes travelled
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}


/// Both algorithms run on the same query
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub dijkstra: SearchResult,
    pub a_star: SearchResult,
}

impl Comparison {
    /// True if both algorithms agree on distance and path
    pub fn same_route(&self) -> bool {
        self.dijkstra.distance == self.a_star.distance && self.dijkstra.path == self.a_star.path
    }

    /// Pops A* saved over Dijkstra, negative if it needed more
    pub fn iterations_saved(&self) -> i64 {
        self.dijkstra.iterations as i64 - self.a_star.iterations as i64
    }
}


/// Runs shortest-path queries against a borrowed `StarGraph`
/// The graph is never written to, so any number of navigators may share one
#[derive(Clone, Copy, Debug)]
pub struct Navigator<'g> {
    graph: &'g StarGraph,
    config: SearchConfig,
}

impl<'g> Navigator<'g> {

    pub fn new(graph: &'g StarGraph) -> Self {
        Self::with_config(graph, SearchConfig::default())
    }

    pub fn with_config(graph: &'g StarGraph, config: SearchConfig) -> Self {
        Self { graph, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest route by lane distance, expanding stars in order of distance from `start`
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn dijkstra(&self, start: &str, end: &str) -> Result<SearchResult, NavigationError> {
        let (from, to) = self.endpoints(start, end)?;
        let graph = self.graph;

        let route = dijkstra(
            from,
            move |&id: &StarId| graph.neighbors_of(id).iter().copied(),
            move |&id: &StarId| id == to,
            &self.config,
        );

        self.finish(Algorithm::Dijkstra, start, end, route)
    }

    /// Shortest route by lane distance, guided by the straight-line distance to `end`
    /// Both stars, and every star the search reaches, need a coordinate
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn a_star(&self, start: &str, end: &str) -> Result<SearchResult, NavigationError> {
        let (from, to) = self.endpoints(start, end)?;
        let graph = self.graph;

        // Fail on a target without a position before any work is done
        graph.coordinate_of(to)?;

        let route = AStar::new(self.config).plan(
            from,
            move |&id: &StarId| graph.neighbors_of(id).iter().copied(),
            move |&id: &StarId| graph.straight_line(id, to).map(OrderedFloat),
            move |&id: &StarId| id == to,
        );

        self.finish(Algorithm::AStar, start, end, route)
    }

    /// Run both algorithms on the same query
    pub fn compare(&self, start: &str, end: &str) -> Result<Comparison, NavigationError> {
        let comparison = Comparison {
            dijkstra: self.dijkstra(start, end)?,
            a_star: self.a_star(start, end)?,
        };

        debug!(
            start,
            end,
            same_route = comparison.same_route(),
            iterations_saved = comparison.iterations_saved(),
            "compared"
        );
        Ok(comparison)
    }

    fn endpoints(&self, start: &str, end: &str) -> Result<(StarId, StarId), NavigationError> {
        Ok((self.graph.id(start)?, self.graph.id(end)?))
    }

    fn finish(
        &self,
        algorithm: Algorithm,
        start: &str,
        end: &str,
        route: Result<Route<StarId, Cost>, NavigationError>,
    ) -> Result<SearchResult, NavigationError> {
        let route = route.map_err(|err| match err {
            NavigationError::NoPathFound { iterations } => {
                debug!(%algorithm, iterations, "target unreachable");
                NavigationError::UnreachableTarget {
                    start: start.to_string(),
                    end: end.to_string(),
                    iterations,
                }
            }
            other => other,
        })?;

        // Lane sums past f64::MAX read as +inf, which means unreachable
        if !route.cost.into_inner().is_finite() {
            debug!(%algorithm, iterations = route.iterations, "route distance overflowed");
            return Err(NavigationError::UnreachableTarget {
                start: start.to_string(),
                end: end.to_string(),
                iterations: route.iterations,
            });
        }

        let path = route.path
            .iter()
            .map(|&id| {
                self.graph.name(id)
                    .map(str::to_string)
                    .ok_or_else(|| NavigationError::UnknownNode(format!("#{}", id.index())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = SearchResult {
            algorithm,
            distance: route.cost.into_inner(),
            path,
            iterations: route.iterations,
        };

        debug!(
            %algorithm,
            distance = result.distance,
            hops = result.hops(),
            iterations = result.iterations,
            "route found"
        );
        Ok(result)
    }
}
