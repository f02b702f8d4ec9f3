//! Graph entities and the fixed example topologies.
//!
//! Nodes carry a deterministic 2-D layout position so a consumer can render
//! the graph without running any layout algorithm: plain circles around a
//! fixed center, with the Petersen graph using a double ring.

use serde::Serialize;

/// Center of the circular layouts, in canvas coordinates.
const CENTER: (f64, f64) = (400.0, 300.0);

/// Radius of the outer node ring.
const OUTER_RADIUS: f64 = 150.0;

/// Radius of the Petersen graph's inner ring.
const INNER_RADIUS: f64 = 75.0;

/// A graph node with its layout position and current color assignment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    /// Assigned color index, `None` while uncolored.
    pub color: Option<usize>,
}

/// An undirected edge between two node ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// A node set plus an undirected edge set.
///
/// Node ids equal their index in `nodes`. Duplicate and self edges are not
/// deduplicated here; that responsibility belongs to whoever builds the graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// The fixed example topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Fully connected 4-node graph (chromatic number 4).
    Complete4,
    /// One hub connected to four leaves (chromatic number 2).
    Star5,
    /// The 10-node 3-regular Petersen graph (chromatic number 3).
    Petersen,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Complete4, Topology::Star5, Topology::Petersen];

    pub fn name(self) -> &'static str {
        match self {
            Topology::Complete4 => "complete4",
            Topology::Star5 => "star5",
            Topology::Petersen => "petersen",
        }
    }
}

/// Places `count` uncolored nodes evenly on a circle, ids starting at `first_id`.
fn ring(count: usize, radius: f64, first_id: usize) -> Vec<Node> {
    (0..count)
        .map(|i| {
            let angle = (i as f64 / count as f64) * 2.0 * std::f64::consts::PI;
            Node {
                id: first_id + i,
                x: CENTER.0 + radius * angle.cos(),
                y: CENTER.1 + radius * angle.sin(),
                color: None,
            }
        })
        .collect()
}

/// Builds one of the fixed example graphs.
///
/// Pure factory: same topology in, byte-identical graph out.
pub fn example(topology: Topology) -> Graph {
    match topology {
        Topology::Complete4 => Graph {
            nodes: ring(4, OUTER_RADIUS, 0),
            edges: vec![
                Edge::new(0, 1),
                Edge::new(0, 2),
                Edge::new(0, 3),
                Edge::new(1, 2),
                Edge::new(1, 3),
                Edge::new(2, 3),
            ],
        },
        Topology::Star5 => {
            let mut nodes = ring(4, OUTER_RADIUS, 0);
            // the hub sits at the layout center
            nodes.push(Node {
                id: 4,
                x: CENTER.0,
                y: CENTER.1,
                color: None,
            });
            Graph {
                nodes,
                edges: vec![
                    Edge::new(0, 4),
                    Edge::new(1, 4),
                    Edge::new(2, 4),
                    Edge::new(3, 4),
                ],
            }
        }
        Topology::Petersen => {
            let mut nodes = ring(5, OUTER_RADIUS, 0);
            nodes.extend(ring(5, INNER_RADIUS, 5));
            Graph {
                nodes,
                edges: vec![
                    // outer pentagon
                    Edge::new(0, 1),
                    Edge::new(1, 2),
                    Edge::new(2, 3),
                    Edge::new(3, 4),
                    Edge::new(4, 0),
                    // spokes connecting the rings
                    Edge::new(0, 5),
                    Edge::new(1, 6),
                    Edge::new(2, 7),
                    Edge::new(3, 8),
                    Edge::new(4, 9),
                    // inner pentagram
                    Edge::new(5, 7),
                    Edge::new(6, 8),
                    Edge::new(7, 9),
                    Edge::new(8, 5),
                    Edge::new(9, 6),
                ],
            }
        }
    }
}
