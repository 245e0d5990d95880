//! Force-directed layout
//!
//! Fruchterman-Reingold spring layout. Connected players attract in
//! proportion to edge weight, every pair repels, and a linearly cooling
//! temperature caps how far a node moves per iteration. Starting positions
//! come from a seeded ChaCha RNG so the layout is reproducible.

use crate::graph::PassNetwork;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::debug;

const MIN_DISTANCE: f64 = 0.01;
const CONVERGENCE_THRESHOLD: f64 = 1e-4;

/// Layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// RNG seed for initial positions (default: 42)
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Optimal distance between nodes (default: 1.0; <= 0 means 1/sqrt(n))
    #[serde(default = "default_k")]
    pub k: f64,

    /// Maximum number of iterations (default: 50)
    #[serde(default = "default_iterations")]
    pub iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            k: default_k(),
            iterations: default_iterations(),
        }
    }
}

fn default_seed() -> u64 {
    42
}
fn default_k() -> f64 {
    1.0
}
fn default_iterations() -> usize {
    50
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Node positions, indexed like [`PassNetwork::nodes`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    positions: Vec<Point>,
}

impl Layout {
    pub fn get(&self, node: usize) -> Option<Point> {
        self.positions.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.positions.iter().copied()
    }
}

/// Compute a spring layout scaled into [-1, 1] and centered on the origin
pub fn spring_layout(network: &PassNetwork, config: &LayoutConfig) -> Layout {
    let n = network.node_count();
    match n {
        0 => return Layout::default(),
        1 => return Layout { positions: vec![Point::default()] },
        _ => {}
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point {
            x: rng.random::<f64>(),
            y: rng.random::<f64>(),
        })
        .collect();

    // Dense symmetric weight matrix
    let mut weights = vec![0.0f64; n * n];
    for (a, b, w) in network.edge_indices() {
        weights[a * n + b] = f64::from(w);
        weights[b * n + a] = f64::from(w);
    }

    let k = if config.k > 0.0 { config.k } else { (1.0 / n as f64).sqrt() };

    let (min_x, max_x, min_y, max_y) = bounds(&pos);
    let mut temperature = (max_x - min_x).max(max_y - min_y) * 0.1;
    let cooling = temperature / (config.iterations as f64 + 1.0);

    let mut iterations_run = 0;
    for _ in 0..config.iterations {
        iterations_run += 1;
        let mut displacement = vec![Point::default(); n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i].x - pos[j].x;
                let dy = pos[i].y - pos[j].y;
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - weights[i * n + j] * distance / k;
                displacement[i].x += dx * force;
                displacement[i].y += dy * force;
            }
        }

        let mut moved = 0.0;
        for (p, d) in pos.iter_mut().zip(&displacement) {
            let mut length = (d.x * d.x + d.y * d.y).sqrt();
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let step_x = d.x * temperature / length;
            let step_y = d.y * temperature / length;
            p.x += step_x;
            p.y += step_y;
            moved += step_x * step_x + step_y * step_y;
        }

        temperature -= cooling;
        if moved.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    debug!("Spring layout of {} nodes settled after {} iterations", n, iterations_run);

    rescale(&mut pos);
    Layout { positions: pos }
}

fn bounds(points: &[Point]) -> (f64, f64, f64, f64) {
    points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), p| (min_x.min(p.x), max_x.max(p.x), min_y.min(p.y), max_y.max(p.y)),
    )
}

/// Center on the mean and scale so the largest coordinate magnitude is 1
fn rescale(points: &mut [Point]) {
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
    for p in points.iter_mut() {
        p.x -= mean_x;
        p.y -= mean_y;
    }
    let limit = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0f64, f64::max);
    if limit > 0.0 {
        for p in points.iter_mut() {
            p.x /= limit;
            p.y /= limit;
        }
    }
}
