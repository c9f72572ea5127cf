//! Incremental construction of a [`ShareabilityGraph`].
//!
//! Incremental-build-then-freeze: accept edges in any order, then sort
//! once and derive CSR arrays in [`build`](GraphBuilder::build).

use exmas_core::{RequestId, RideId};

use crate::graph::{GraphArrays, RideEdgeKind, ShareabilityGraph};

struct RawEdge {
    source: RequestId,
    target: RequestId,
    ride: RideId,
    kind: RideEdgeKind,
}

/// Construct a [`ShareabilityGraph`] incrementally, then call [`build`](Self::build).
pub struct GraphBuilder {
    request_count: usize,
    raw_edges: Vec<RawEdge>,
}

impl GraphBuilder {
    /// `request_count` fixes the dense node space; every edge's `source` and
    /// `target` must be `< request_count`.
    pub fn new(request_count: usize) -> Self {
        Self { request_count, raw_edges: Vec::new() }
    }

    pub fn with_capacity(request_count: usize, edges: usize) -> Self {
        Self { request_count, raw_edges: Vec::with_capacity(edges) }
    }

    /// Add one edge, created from one accepted degree-2 ride: for each pair
    /// ride, an edge `requests[0] -> requests[1]`.
    pub fn add_edge(&mut self, source: RequestId, target: RequestId, ride: RideId, kind: RideEdgeKind) {
        debug_assert!(source.index() < self.request_count);
        debug_assert!(target.index() < self.request_count);
        self.raw_edges.push(RawEdge { source, target, ride, kind });
    }

    /// Consume the builder and produce a [`ShareabilityGraph`].
    pub fn build(self) -> ShareabilityGraph {
        let request_count = self.request_count;

        let mut raw = self.raw_edges;
        raw.sort_unstable_by_key(|e| (e.source.0, e.target.0, e.kind.tiebreak_rank()));

        let edge_target: Vec<RequestId> = raw.iter().map(|e| e.target).collect();
        let edge_ride: Vec<RideId> = raw.iter().map(|e| e.ride).collect();
        let edge_kind: Vec<RideEdgeKind> = raw.iter().map(|e| e.kind).collect();

        let mut edge_out_start = vec![0u32; request_count + 1];
        for e in &raw {
            edge_out_start[e.source.index() + 1] += 1;
        }
        for i in 1..=request_count {
            edge_out_start[i] += edge_out_start[i - 1];
        }
        debug_assert_eq!(edge_out_start[request_count] as usize, raw.len());

        // Deduplicated neighbor row: walk the sorted edges once per source,
        // keeping only the first occurrence of each target.
        let mut neighbor_out_start = vec![0u32; request_count + 1];
        let mut neighbor_targets = Vec::with_capacity(edge_target.len());
        for source in 0..request_count {
            let start = edge_out_start[source] as usize;
            let end = edge_out_start[source + 1] as usize;
            let mut last: Option<RequestId> = None;
            for &target in &edge_target[start..end] {
                if last != Some(target) {
                    neighbor_targets.push(target);
                    last = Some(target);
                }
            }
            neighbor_out_start[source + 1] = neighbor_targets.len() as u32;
        }

        ShareabilityGraph::from(GraphArrays {
            request_count,
            edge_out_start,
            edge_target,
            edge_ride,
            edge_kind,
            neighbor_out_start,
            neighbor_targets,
        })
    }
}
