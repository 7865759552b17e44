use super::GraphNodeMap;

/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
/// None if the goal index or any parent link points outside the map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, the start node's parent is usize::MAX
    while current_index != usize::MAX {
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;

        // A parent chain longer than the map means the links form a cycle
        if path.len() > node_map.len() {
            return None;
        }
    }

    path.reverse();

    if path.is_empty() {
        return None;
    }

    Some(path)
}
