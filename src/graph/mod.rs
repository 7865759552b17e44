use crate::catalog::{LaneRecord, StarRecord};
use crate::collections::FxIndexMap;
use crate::errors::NavigationError;
use crate::geometry::Point3;

use indexmap::map::Entry::{Occupied, Vacant};
use ordered_float::OrderedFloat;
use tracing::info;


/// Lane length, totally ordered so it can key the search heap
pub type Cost = OrderedFloat<f64>;

/// Index of a star inside one `StarGraph`
/// Only meaningful for the graph that handed it out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StarId(usize);

impl StarId {
    pub fn index(&self) -> usize {
        self.0
    }
}


/// A star and its outgoing lanes
#[derive(Clone, Debug, Default)]
struct Star {
    position: Option<Point3>, // None when the star only appears in the lane table
    lanes: Vec<(StarId, Cost)>,
}


/// Undirected, weighted graph of star systems
/// Built once from the input tables and read-only afterwards
#[derive(Clone, Debug, Default)]
pub struct StarGraph {
    stars: FxIndexMap<String, Star>,
    lane_count: usize,
}

impl StarGraph {

    /// Build the graph from a star table and a lane table
    /// Stars are inserted in table order, then every lane is added in both directions
    pub fn from_tables<S, L>(stars: S, lanes: L) -> Result<Self, NavigationError>
    where
        S: IntoIterator<Item = StarRecord>,
        L: IntoIterator<Item = LaneRecord>,
    {
        let mut graph = Self::default();

        for record in stars {
            graph.insert_star(record)?;
        }
        for record in lanes {
            graph.insert_lane(record)?;
        }

        info!(stars = graph.star_count(), lanes = graph.lane_count(), "star graph built");
        Ok(graph)
    }

    fn insert_star(&mut self, record: StarRecord) -> Result<StarId, NavigationError> {
        if !record.position.is_finite() {
            return Err(NavigationError::InvalidCoordinate(record.name));
        }

        match self.stars.entry(record.name) {
            Occupied(e) => Err(NavigationError::DuplicateNode(e.key().clone())),
            Vacant(e) => {
                let id = StarId(e.index());
                e.insert(Star { position: Some(record.position), lanes: Vec::new() });
                Ok(id)
            }
        }
    }

    /// Lookup or insert a star seen only through the lane table
    fn star_id_or_insert(&mut self, name: String) -> StarId {
        let entry = self.stars.entry(name);
        let id = StarId(entry.index());
        entry.or_default();
        id
    }

    fn insert_lane(&mut self, record: LaneRecord) -> Result<(), NavigationError> {
        let LaneRecord { source, destination, distance } = record;

        if !distance.is_finite() || distance < 0.0 {
            return Err(NavigationError::InvalidWeight {
                from: source,
                to: destination,
                weight: distance,
            });
        }

        let a = self.star_id_or_insert(source);
        let b = self.star_id_or_insert(destination);
        let cost = OrderedFloat(distance);

        // Parallel lanes are kept side by side
        self.stars[a.0].lanes.push((b, cost));
        self.stars[b.0].lanes.push((a, cost));
        self.lane_count += 1;

        Ok(())
    }

    /// Resolve a star name to its index
    pub fn id(&self, name: &str) -> Result<StarId, NavigationError> {
        self.stars
            .get_index_of(name)
            .map(StarId)
            .ok_or_else(|| NavigationError::UnknownNode(name.to_string()))
    }

    pub fn name(&self, id: StarId) -> Option<&str> {
        self.stars.get_index(id.0).map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stars.contains_key(name)
    }

    /// Neighbors of a star with the lane length to each
    /// A star with no lanes yields nothing, an unknown star is an error
    pub fn neighbors<'a>(&'a self, name: &str) -> Result<impl Iterator<Item = (&'a str, f64)> + use<'a>, NavigationError> {
        let id = self.id(name)?;
        Ok(self.neighbors_of(id).iter().filter_map(move |&(nb, cost)| {
            self.name(nb).map(|nb_name| (nb_name, cost.into_inner()))
        }))
    }

    /// Index-level neighbors, used by the search engine
    pub fn neighbors_of(&self, id: StarId) -> &[(StarId, Cost)] {
        self.stars
            .get_index(id.0)
            .map(|(_, star)| star.lanes.as_slice())
            .unwrap_or(&[])
    }

    pub fn coordinate(&self, name: &str) -> Result<Point3, NavigationError> {
        self.coordinate_of(self.id(name)?)
    }

    pub fn coordinate_of(&self, id: StarId) -> Result<Point3, NavigationError> {
        match self.stars.get_index(id.0) {
            Some((_, Star { position: Some(position), .. })) => Ok(*position),
            Some((name, _)) => Err(NavigationError::UnknownNode(name.clone())),
            None => Err(NavigationError::UnknownNode(format!("#{}", id.0))),
        }
    }

    /// Straight-line distance between two stars - the A* heuristic
    /// Not guaranteed admissible: nothing forces a lane to be at least as long as the gap it spans
    pub fn straight_line(&self, a: StarId, b: StarId) -> Result<f64, NavigationError> {
        Ok(self.coordinate_of(a)?.distance(&self.coordinate_of(b)?))
    }

    /// Star names in insertion order
    pub fn stars(&self) -> impl Iterator<Item = &str> + '_ {
        self.stars.keys().map(String::as_str)
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    /// Number of lane rows inserted, each stored in both directions
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }
}
