use graph_metrics::metrics::{
    betweenness, community_densities, compute_strength, louvain_partition, modularity,
    partition_with, CommunityStrategy, Partition,
};
use graph_metrics::report::{load_report, save_report, MetricsReport};
use graph_metrics::{parse_graph, Config, EdgeWeighting, NodeId, WeightedGraph};

/// Two dense groups of friends with one weak acquaintance between them
const FRIENDS_JSON: &str = r#"{
    "nodes": ["ann", "bob", "cat", "dan", "eli", "fay", "gus", "hal", "ivy"],
    "edges": [
        {"source": "ann", "target": "bob", "weight": 5},
        {"source": "ann", "target": "cat", "weight": 4},
        {"source": "bob", "target": "cat", "weight": 6},
        {"source": "cat", "target": "dan", "weight": 3},
        {"source": "bob", "target": "dan", "weight": 2},
        {"source": "dan", "target": "eli", "weight": 1},
        {"source": "eli", "target": "fay", "weight": 5},
        {"source": "eli", "target": "gus", "weight": 4},
        {"source": "fay", "target": "gus", "weight": 6},
        {"source": "gus", "target": "hal", "weight": 3},
        {"source": "fay", "target": "hal", "weight": 2},
        {"source": "ann", "target": "ivy", "weight": 0.5}
    ]
}"#;

fn friends() -> WeightedGraph {
    parse_graph(FRIENDS_JSON, 1.0).unwrap()
}

fn id(name: &str) -> NodeId {
    NodeId::from(name)
}

#[test]
fn test_strength() {
    let graph = parse_graph(
        r#"{"nodes": ["x", "a", "b", "c", "alone"], "edges": [
            {"source": "x", "target": "a", "weight": 2},
            {"source": "x", "target": "b", "weight": 3},
            {"source": "c", "target": "x", "weight": 5}
        ]}"#,
        1.0,
    )
    .unwrap();
    let strength = compute_strength(&graph);

    assert_eq!(strength[&id("x")], 10.0);
    assert_eq!(strength[&id("alone")], 0.0);
}

#[test]
fn test_strength_ignores_filtered_edges() {
    let strength = compute_strength(&friends());
    // ann-ivy (0.5) is below the threshold
    assert_eq!(strength[&id("ann")], 9.0);
    assert_eq!(strength[&id("ivy")], 0.0);
    assert_eq!(strength[&id("dan")], 6.0);
}

#[test]
fn test_betweenness_path_of_three() {
    let graph = parse_graph(
        r#"{"nodes": ["A", "B", "C"], "edges": [
            {"source": "A", "target": "B", "weight": 1},
            {"source": "B", "target": "C", "weight": 1}
        ]}"#,
        1.0,
    )
    .unwrap();
    let scores = betweenness(&graph, EdgeWeighting::Weighted);

    assert_eq!(scores[&id("A")], 0.0);
    assert_eq!(scores[&id("C")], 0.0);
    assert!(scores[&id("B")] > 0.0);
}

#[test]
fn test_betweenness_bridge_nodes_rank_highest() {
    let scores = betweenness(&friends(), EdgeWeighting::Unweighted);

    for value in scores.values() {
        assert!((0.0..=1.0).contains(value));
    }
    let dan = scores[&id("dan")];
    let eli = scores[&id("eli")];
    for (node, &value) in &scores {
        if *node != id("dan") && *node != id("eli") {
            assert!(value < dan.min(eli), "{node} = {value}");
        }
    }
}

#[test]
fn test_communities_split_friend_groups() {
    let graph = friends();
    for strategy in [CommunityStrategy::Louvain, CommunityStrategy::GreedyModularity] {
        let config = Config::default().with_strategy(strategy).with_seed(17);
        let partition = partition_with(&graph, &config).unwrap();

        assert_eq!(partition.len(), graph.node_count(), "{strategy:?}");
        let left = partition.get(&id("ann"));
        let right = partition.get(&id("fay"));
        for name in ["bob", "cat", "dan"] {
            assert_eq!(partition.get(&id(name)), left, "{strategy:?} {name}");
        }
        for name in ["eli", "gus", "hal"] {
            assert_eq!(partition.get(&id(name)), right, "{strategy:?} {name}");
        }
        assert_ne!(left, right);
        assert!(modularity(&graph, &partition, EdgeWeighting::Weighted) > 0.3);
    }
}

#[test]
fn test_louvain_partition_ids_contiguous_from_zero() {
    let partition = louvain_partition(&friends(), EdgeWeighting::Weighted).unwrap();
    let count = partition.community_count();
    let mut ids: Vec<usize> = partition.iter().map(|(_, c)| c).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, (0..count).collect::<Vec<_>>());
}

#[test]
fn test_single_community_density() {
    let graph = friends();
    let everyone = Partition::from_communities(vec![graph.nodes().cloned().collect::<Vec<_>>()]);
    let densities = community_densities(&graph, &everyone);

    let n = graph.node_count() as f64;
    let m = graph.edge_count() as f64;
    assert_eq!(densities.intra, vec![2.0 * m / (n * (n - 1.0))]);
    assert!(densities.inter.is_empty());
}

#[test]
fn test_disjoint_communities_inter_density_zero() {
    let graph = friends();
    let part = Partition::from_communities(vec![
        vec![id("ann"), id("bob"), id("cat")],
        vec![id("fay"), id("gus"), id("hal")],
    ]);
    let densities = community_densities(&graph, &part);

    assert_eq!(densities.intra, vec![1.0, 1.0]);
    assert_eq!(densities.inter, vec![0.0]);
}

#[test]
fn test_report_round_trip() {
    let graph = friends();
    let config = Config::default().with_seed(3);
    let report = MetricsReport::compute(&graph, &config).unwrap();

    assert_eq!(report.summary.node_count, 9);
    assert_eq!(report.summary.edge_count, 11);
    assert_eq!(report.densities.intra.len(), report.community_count);
    assert_eq!(
        report.densities.inter.len(),
        report.community_count * (report.community_count - 1) / 2
    );

    let dir = tempfile::tempdir().unwrap();
    let path = save_report(&report, dir.path()).unwrap();
    let loaded = load_report(path).unwrap();
    assert_eq!(loaded, report);
    assert_eq!(loaded.partition().len(), 9);
}
