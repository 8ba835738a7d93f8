//! Ready-made inputs for trying things out.
//!
//! ```no_run
//! use graphwork::{G, sample};
//!
//! G(sample::example_small_fixed(), sample::SMALL_FIXED_VERTICES.chars(), None, true)?;
//!
//! let (edges, vertices) = sample::example_large_random();
//! G(edges, vertices, None, true)?;
//! # Ok::<(), graphwork::Error>(())
//! ```

use rand::Rng;

use crate::descriptor::{Edge, Vertex};

/// Vertex ids of the small fixed example, one per character.
pub const SMALL_FIXED_VERTICES: &str = "STUVWXYZ";

const SMALL_FIXED_EDGES: [(&str, u32); 12] = [
    ("TS", 22),
    ("TU", 20),
    ("TV", 23),
    ("SU", 18),
    ("UV", 19),
    ("UW", 17),
    ("UX", 18),
    ("VW", 16),
    ("WX", 18),
    ("WZ", 18),
    ("XY", 17),
    ("ZY", 15),
];

/// Random vertex ids are drawn from `0..VERTEX_NAME_RANGE`.
pub const VERTEX_NAME_RANGE: u32 = 1000;
pub const NUM_VERTICES: usize = 100;
/// Far larger values (around 1000) make Graphviz layout painfully slow.
pub const NUM_EDGES: usize = 100;

/// Twelve weighted edges over the vertices `S` to `Z`.
///
/// Each pair like `"TS"` is tail `T`, head `S`.
pub fn example_small_fixed() -> Vec<Edge> {
    SMALL_FIXED_EDGES
        .iter()
        .map(|(pair, weight)| {
            let mut ends = pair.chars();
            let tail = ends.next().map(String::from).unwrap_or_default();
            let head = ends.next().map(String::from).unwrap_or_default();
            Edge::new(tail, head).with_attr("weight", weight.to_string())
        })
        .collect()
}

/// A larger random example using the thread-local RNG.
///
/// Returns `(edges, vertices)`. Vertex ids may repeat and edges may be
/// self-loops; the graph handle tolerates both.
pub fn example_large_random() -> (Vec<Edge>, Vec<Vertex>) {
    example_large_random_with(&mut rand::thread_rng())
}

/// Same as [`example_large_random`] with a caller-supplied RNG.
pub fn example_large_random_with<R: Rng>(rng: &mut R) -> (Vec<Edge>, Vec<Vertex>) {
    let names: Vec<String> = (0..NUM_VERTICES)
        .map(|_| rng.gen_range(0..VERTEX_NAME_RANGE).to_string())
        .collect();

    let edges = (0..NUM_EDGES)
        .map(|_| {
            let tail = &names[rng.gen_range(0..names.len())];
            let head = &names[rng.gen_range(0..names.len())];
            Edge::new(tail.as_str(), head.as_str()).with_attr("weight", "1")
        })
        .collect();

    let vertices = names.into_iter().map(Vertex::new).collect();
    (edges, vertices)
}
