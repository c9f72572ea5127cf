//! The shareability graph itself.
//!
//! # Data layout
//!
//! Represented as parallel integer arrays in **Compressed Sparse Row**
//! format over the dense `RequestId` space, with a per-source
//! sorted-neighbor index rather than a heap-linked graph. Two CSR views
//! share the same edge lists:
//!
//! - The full edge rows (`edge_target`, `edge_ride`, `edge_kind`), sorted by
//!   `(source, target, kind)`, answer [`ShareabilityGraph::edges`].
//! - A deduplicated, target-only row (`neighbor_targets`) answers
//!   [`ShareabilityGraph::common_neighbors_sorted`].
//!
//! Both are built once in [`crate::GraphBuilder::build`] and are immutable
//! thereafter — read-only after construction and safe to share across
//! threads by reference.

use exmas_core::{RequestId, RideId};

/// The two dropoff orderings a degree-2 ride — and therefore a graph edge —
/// can carry: each edge carries `(rideIndex, kind ∈ {FIFO, LIFO})`. `MIXED`
/// only arises at degree ≥ 3 and never labels a graph edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RideEdgeKind {
    Fifo,
    Lifo,
}

impl RideEdgeKind {
    /// FIFO before LIFO on a tie.
    #[inline]
    pub fn tiebreak_rank(self) -> u8 {
        match self {
            RideEdgeKind::Fifo => 0,
            RideEdgeKind::Lifo => 1,
        }
    }
}

/// Directed multigraph over request indices.
///
/// An edge `i -> j` exists for every accepted degree-2 ride that picks up
/// `i` then `j`; parallel edges occur when both a FIFO and a LIFO ride exist
/// for the same `(i, j)` pair.
pub struct ShareabilityGraph {
    request_count: usize,

    /// CSR row pointer into the edge arrays below. Length `request_count + 1`.
    edge_out_start: Vec<u32>,
    /// Target of each edge, sorted within a row by `(target, kind rank)`.
    edge_target: Vec<RequestId>,
    edge_ride: Vec<RideId>,
    edge_kind: Vec<RideEdgeKind>,

    /// CSR row pointer into `neighbor_targets`. Length `request_count + 1`.
    neighbor_out_start: Vec<u32>,
    /// Ascending, duplicate-free targets per source.
    neighbor_targets: Vec<RequestId>,
}

impl ShareabilityGraph {
    pub fn request_count(&self) -> usize {
        self.request_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_target.len()
    }

    /// The precomputed ascending, distinct outgoing neighbors of `source`.
    #[inline]
    pub fn sorted_out_neighbors(&self, source: RequestId) -> &[RequestId] {
        let start = self.neighbor_out_start[source.index()] as usize;
        let end = self.neighbor_out_start[source.index() + 1] as usize;
        &self.neighbor_targets[start..end]
    }

    /// Request IDs that are outgoing neighbors of *every* request in
    /// `requests` — the graph's notion of "common neighbors".
    ///
    /// Intersects the precomputed sorted neighbor lists with an early exit on
    /// an empty running intersection; linear in the total size of the lists.
    pub fn common_neighbors_sorted(&self, requests: &[RequestId]) -> Vec<RequestId> {
        let Some((first, rest)) = requests.split_first() else {
            return Vec::new();
        };

        let mut acc: Vec<RequestId> = self.sorted_out_neighbors(*first).to_vec();
        for &r in rest {
            if acc.is_empty() {
                break;
            }
            acc = intersect_sorted(&acc, self.sorted_out_neighbors(r));
        }
        acc
    }

    /// All `(rideIndex, kind)` edges directly connecting `source -> target`,
    /// ascending by ride index — used by the extender to recover the exact
    /// pair-ride and its kind. Usually zero, one, or two entries.
    pub fn edges(&self, source: RequestId, target: RequestId) -> Vec<(RideId, RideEdgeKind)> {
        let start = self.edge_out_start[source.index()] as usize;
        let end = self.edge_out_start[source.index() + 1] as usize;
        let row_targets = &self.edge_target[start..end];

        let lo = row_targets.partition_point(|t| *t < target);
        let hi = row_targets.partition_point(|t| *t <= target);

        (lo..hi)
            .map(|i| (self.edge_ride[start + i], self.edge_kind[start + i]))
            .collect()
    }

    /// The deterministic representative edge for `source -> target` used by
    /// [`crate`]'s consumer when classifying an insertion: smallest ride
    /// index, FIFO before LIFO on a tie.
    pub fn representative_edge(
        &self,
        source: RequestId,
        target: RequestId,
    ) -> Option<(RideId, RideEdgeKind)> {
        self.edges(source, target)
            .into_iter()
            .min_by_key(|(ride, kind)| (ride.0, kind.tiebreak_rank()))
    }
}

fn intersect_sorted(a: &[RequestId], b: &[RequestId]) -> Vec<RequestId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

pub(crate) struct GraphArrays {
    pub request_count: usize,
    pub edge_out_start: Vec<u32>,
    pub edge_target: Vec<RequestId>,
    pub edge_ride: Vec<RideId>,
    pub edge_kind: Vec<RideEdgeKind>,
    pub neighbor_out_start: Vec<u32>,
    pub neighbor_targets: Vec<RequestId>,
}

impl From<GraphArrays> for ShareabilityGraph {
    fn from(a: GraphArrays) -> Self {
        ShareabilityGraph {
            request_count: a.request_count,
            edge_out_start: a.edge_out_start,
            edge_target: a.edge_target,
            edge_ride: a.edge_ride,
            edge_kind: a.edge_kind,
            neighbor_out_start: a.neighbor_out_start,
            neighbor_targets: a.neighbor_targets,
        }
    }
}
