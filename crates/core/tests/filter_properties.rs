use std::collections::HashSet;

use depfilter_core::dot::parse_document;
use depfilter_core::filter::{filter_document, Denylist};
use proptest::prelude::*;

const HEADER: &str = "digraph \"deps\" {\nnode [\n  fontsize = \"12\"\n];";

const LABEL_PREFIXES: [&str; 7] = ["pico_", "hardware_", "cyw43_", "app_", "lib", "my_pico_", ""];

/// Node labels (as prefix index + suffix) and edges as index pairs. Edge
/// indices may point past the declared nodes to produce undeclared endpoints.
fn graph_strategy() -> impl Strategy<Value = (Vec<(usize, String)>, Vec<(usize, usize)>)> {
    prop::collection::vec((0..LABEL_PREFIXES.len(), "[a-z][a-z_]{0,7}"), 0..12).prop_flat_map(
        |nodes| {
            let bound = nodes.len() + 3;
            let edges = prop::collection::vec((0..bound, 0..bound), 0..20);
            (Just(nodes), edges)
        },
    )
}

fn render_input(nodes: &[(usize, String)], edges: &[(usize, usize)]) -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for (i, (prefix, suffix)) in nodes.iter().enumerate() {
        text.push_str(&format!(
            "    \"node{i}\" [ label = \"{}{suffix}\", shape = octagon ];\n",
            LABEL_PREFIXES[*prefix]
        ));
    }
    for (source, target) in edges {
        text.push_str(&format!("    \"node{source}\" -> \"node{target}\" [ style = solid ]\n"));
    }
    text.push_str("}\n");
    text
}

proptest! {
    #[test]
    fn filtered_graph_upholds_invariants((nodes, edges) in graph_strategy()) {
        let denylist = Denylist::default();
        let input = parse_document(&render_input(&nodes, &edges)).expect("parse generated graph");
        let outcome = filter_document(&input, &denylist);
        let output = &outcome.document;

        // Header copied byte-for-byte.
        prop_assert_eq!(&output.header, HEADER);

        // Retained nodes come from the input and are not denied.
        let input_ids: HashSet<_> = input.nodes.iter().map(|n| &n.id).collect();
        for node in &output.nodes {
            prop_assert!(input_ids.contains(&node.id));
            prop_assert!(!denylist.is_denied(&node.label));
        }

        // Exactly the non-denied nodes survive.
        let expected_kept = input.nodes.iter().filter(|n| !denylist.is_denied(&n.label)).count();
        prop_assert_eq!(output.nodes.len(), expected_kept);

        // No dangling edges.
        let output_ids: HashSet<_> = output.nodes.iter().map(|n| &n.id).collect();
        for edge in &output.edges {
            prop_assert!(output_ids.contains(&edge.source));
            prop_assert!(output_ids.contains(&edge.target));
        }
        let expected_edges = input
            .edges
            .iter()
            .filter(|e| output_ids.contains(&e.source) && output_ids.contains(&e.target))
            .count();
        prop_assert_eq!(output.edges.len(), expected_edges);

        // Relative order preserved.
        prop_assert!(output.nodes.windows(2).all(|w| w[0].line_number < w[1].line_number));
        prop_assert!(output.edges.windows(2).all(|w| w[0].line_number < w[1].line_number));

        // Summary accounts for every edge.
        let summary = &outcome.summary;
        prop_assert_eq!(
            summary.edges_kept + summary.edges_dropped_denied + summary.edges_dropped_undeclared,
            summary.edges_total
        );
    }

    #[test]
    fn filtering_is_idempotent((nodes, edges) in graph_strategy()) {
        let denylist = Denylist::default();
        let input = parse_document(&render_input(&nodes, &edges)).expect("parse generated graph");
        let once = filter_document(&input, &denylist).document.render();

        let reparsed = parse_document(&once).expect("parse filtered graph");
        let twice = filter_document(&reparsed, &denylist);

        prop_assert_eq!(twice.summary.nodes_denied(), 0);
        prop_assert_eq!(twice.document.render(), once);
    }
}
