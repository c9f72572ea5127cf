//! Unit tests for exmas-graph.

#[cfg(test)]
mod helpers {
    use exmas_core::{RequestId, RideId};
    use crate::{GraphBuilder, RideEdgeKind, ShareabilityGraph};

    /// Requests 0..4. Edges: 0->1 (FIFO), 0->2 (LIFO), 1->2 (FIFO), 0->3 (FIFO, LIFO).
    pub fn sample_graph() -> ShareabilityGraph {
        let mut b = GraphBuilder::new(4);
        b.add_edge(RequestId(0), RequestId(1), RideId(10), RideEdgeKind::Fifo);
        b.add_edge(RequestId(0), RequestId(2), RideId(11), RideEdgeKind::Lifo);
        b.add_edge(RequestId(1), RequestId(2), RideId(12), RideEdgeKind::Fifo);
        b.add_edge(RequestId(0), RequestId(3), RideId(13), RideEdgeKind::Fifo);
        b.add_edge(RequestId(0), RequestId(3), RideId(14), RideEdgeKind::Lifo);
        b.build()
    }
}

#[cfg(test)]
mod neighbors {
    use exmas_core::RequestId;

    #[test]
    fn sorted_and_distinct() {
        let g = super::helpers::sample_graph();
        assert_eq!(
            g.sorted_out_neighbors(RequestId(0)),
            &[RequestId(1), RequestId(2), RequestId(3)]
        );
    }

    #[test]
    fn node_with_no_outgoing_edges_is_empty() {
        let g = super::helpers::sample_graph();
        assert!(g.sorted_out_neighbors(RequestId(3)).is_empty());
    }

    #[test]
    fn common_neighbors_intersects() {
        let g = super::helpers::sample_graph();
        // neighbors(0) = {1,2,3}, neighbors(1) = {2}
        let common = g.common_neighbors_sorted(&[RequestId(0), RequestId(1)]);
        assert_eq!(common, vec![RequestId(2)]);
    }

    #[test]
    fn common_neighbors_empty_input_is_empty() {
        let g = super::helpers::sample_graph();
        assert!(g.common_neighbors_sorted(&[]).is_empty());
    }

    #[test]
    fn common_neighbors_early_exit_on_disjoint() {
        let g = super::helpers::sample_graph();
        // neighbors(2) is empty, so the intersection is empty regardless of order.
        let common = g.common_neighbors_sorted(&[RequestId(2), RequestId(0)]);
        assert!(common.is_empty());
    }
}

#[cfg(test)]
mod edges {
    use exmas_core::{RequestId, RideId};
    use crate::RideEdgeKind;

    #[test]
    fn single_edge_lookup() {
        let g = super::helpers::sample_graph();
        let found = g.edges(RequestId(1), RequestId(2));
        assert_eq!(found, vec![(RideId(12), RideEdgeKind::Fifo)]);
    }

    #[test]
    fn multi_edge_lookup_returns_both_kinds() {
        let g = super::helpers::sample_graph();
        let mut found = g.edges(RequestId(0), RequestId(3));
        found.sort_by_key(|(ride, _)| ride.0);
        assert_eq!(
            found,
            vec![(RideId(13), RideEdgeKind::Fifo), (RideId(14), RideEdgeKind::Lifo)]
        );
    }

    #[test]
    fn missing_edge_is_empty() {
        let g = super::helpers::sample_graph();
        assert!(g.edges(RequestId(2), RequestId(0)).is_empty());
    }

    #[test]
    fn representative_edge_is_smallest_index() {
        let g = super::helpers::sample_graph();
        // 13 (FIFO) < 14 (LIFO) by index, so 13 wins regardless of kind order.
        assert_eq!(
            g.representative_edge(RequestId(0), RequestId(3)),
            Some((RideId(13), RideEdgeKind::Fifo))
        );
    }

    #[test]
    fn representative_edge_none_when_no_edge_exists() {
        let g = super::helpers::sample_graph();
        assert_eq!(g.representative_edge(RequestId(3), RequestId(0)), None);
    }
}

#[cfg(test)]
mod builder {
    use exmas_core::RequestId;
    use crate::GraphBuilder;

    #[test]
    fn empty_graph_has_no_edges() {
        let g = GraphBuilder::new(3).build();
        assert_eq!(g.request_count(), 3);
        assert_eq!(g.edge_count(), 0);
        assert!(g.sorted_out_neighbors(RequestId(0)).is_empty());
    }
}
