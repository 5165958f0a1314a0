use searcher::graph::{Graph, GraphBuilder};
use searcher::{
    astar_search, breadth_first_search, depth_first_search, null_heuristic, uniform_cost_search,
    NullHeuristic, SearchError, SearchOptions, Strategy,
};

type Simple = Graph<char, &'static str, u32>;

fn all_strategies(graph: &Simple) -> Vec<Vec<&'static str>> {
    vec![
        depth_first_search(graph),
        breadth_first_search(graph),
        uniform_cost_search(graph),
        astar_search(graph, &NullHeuristic),
    ]
}

#[test]
fn single_edge() {
    let graph = GraphBuilder::new('A')
        .edge('A', "East", 'B', 1)
        .goal('B')
        .build();

    for path in all_strategies(&graph) {
        assert_eq!(path, vec!["East"]);
    }
}

#[test]
fn start_is_goal() {
    let graph = GraphBuilder::new('A')
        .edge('A', "East", 'B', 1)
        .goal('A')
        .goal('B')
        .build();

    for path in all_strategies(&graph) {
        assert!(path.is_empty());
    }

    for strategy in Strategy::all() {
        let solution = strategy
            .solve(&graph, &NullHeuristic, &SearchOptions::default())
            .unwrap();
        assert!(solution.actions.is_empty());
        assert_eq!(solution.stats.expanded, 0);
    }
}

#[test]
fn disconnected() {
    let graph = GraphBuilder::new('A')
        .edge('B', "West", 'A', 1)
        .goal('B')
        .build();

    for path in all_strategies(&graph) {
        assert!(path.is_empty());
    }

    // Only the configurable entry point tells "no path" apart from
    // "already there".
    for strategy in Strategy::all() {
        assert_eq!(
            strategy
                .solve(&graph, &NullHeuristic, &SearchOptions::default())
                .map(|s| s.actions),
            Err(SearchError::NoResultFound)
        );
    }
}

#[test]
fn cycles_terminate() {
    let graph = GraphBuilder::new('A')
        .edge('A', "North", 'B', 1)
        .edge('B', "East", 'C', 1)
        .edge('C', "South", 'D', 1)
        .edge('D', "West", 'A', 1)
        .goal('Z')
        .build();

    for path in all_strategies(&graph) {
        assert!(path.is_empty());
    }
}

#[test]
fn heuristic_function() {
    let graph = GraphBuilder::new('A')
        .edge('A', "East", 'B', 3)
        .edge('A', "North", 'C', 1)
        .edge('C', "East", 'B', 1)
        .goal('B')
        .build();

    assert_eq!(
        astar_search(&graph, &null_heuristic::<Simple>),
        vec!["North", "East"]
    );
    assert_eq!(
        astar_search(&graph, &|state: &char, _: &Simple| -> u32 {
            if *state == 'C' {
                1
            } else {
                0
            }
        }),
        vec!["North", "East"]
    );
}
