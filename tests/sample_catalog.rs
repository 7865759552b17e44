use starpath::{Navigator, NavigationError, StarGraph, sample_catalog};

use std::thread;


fn sample_graph() -> StarGraph {
    let (stars, lanes) = sample_catalog();
    StarGraph::from_tables(stars, lanes).unwrap()
}

fn to_strings(nodes: &[&str]) -> Vec<String> {
    nodes.iter().map(|s| s.to_string()).collect()
}

/// Every consecutive pair must be joined by a lane
fn assert_valid_path(graph: &StarGraph, path: &[String], start: &str, end: &str) {
    assert_eq!(path.first().map(String::as_str), Some(start));
    assert_eq!(path.last().map(String::as_str), Some(end));

    for pair in path.windows(2) {
        let joined = graph.neighbors(&pair[0]).unwrap().any(|(nb, _)| nb == pair[1]);
        assert!(joined, "no lane {} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn test_both_algorithms_on_sample_queries() {
    let graph = sample_graph();
    let navigator = Navigator::new(&graph);

    let upsilon = navigator.compare("Sun", "Upsilon Andromedae").unwrap();
    assert!(upsilon.same_route());
    assert_eq!(upsilon.a_star.distance, 2674.0);
    assert_eq!(upsilon.a_star.path, to_strings(&["Sun", "Proxima Centauri", "Upsilon Andromedae"]));

    let virginis = navigator.compare("Sun", "61 Virginis").unwrap();
    assert!(virginis.same_route());
    assert_eq!(virginis.a_star.distance, 4300.0);
    assert_eq!(virginis.a_star.path, to_strings(&["Sun", "YZ Ceti", "61 Virginis"]));
}

#[test]
fn test_all_pairs_agree_and_are_symmetric() {
    let graph = sample_graph();
    let navigator = Navigator::new(&graph);
    let stars: Vec<_> = graph.stars().collect();

    for &start in &stars {
        for &end in &stars {
            let comparison = navigator.compare(start, end).unwrap();
            let reverse = navigator.compare(end, start).unwrap();

            assert_eq!(comparison.dijkstra.distance, comparison.a_star.distance, "{start} -> {end}");
            assert_eq!(comparison.dijkstra.distance, reverse.dijkstra.distance, "{start} <-> {end}");
            // straight-line distance never beats a lane on this catalog
            assert!(comparison.a_star.iterations <= comparison.dijkstra.iterations, "{start} -> {end}");

            assert_valid_path(&graph, &comparison.dijkstra.path, start, end);
            assert_valid_path(&graph, &comparison.a_star.path, start, end);
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = sample_graph();
    let navigator = Navigator::new(&graph);

    let first = navigator.compare("Upsilon Andromedae", "61 Virginis").unwrap();
    let second = navigator.compare("Upsilon Andromedae", "61 Virginis").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.dijkstra.distance, 6401.0);
}

#[test]
fn test_graph_shared_between_threads() {
    let graph = &sample_graph();
    let expected = Navigator::new(graph).compare("Sun", "Upsilon Andromedae").unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || Navigator::new(graph).compare("Sun", "Upsilon Andromedae")))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn test_errors_are_descriptive() {
    let graph = sample_graph();
    let navigator = Navigator::new(&graph);

    let err = navigator.a_star("Sun", "Betelgeuse").unwrap_err();
    assert_eq!(err, NavigationError::UnknownNode("Betelgeuse".to_string()));
    assert_eq!(err.to_string(), "unknown star: Betelgeuse");
}
