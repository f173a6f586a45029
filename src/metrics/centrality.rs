//! Betweenness centrality.
//!
//! Brandes' algorithm (2001) on the undirected graph. With
//! [`EdgeWeighting::Weighted`] shortest paths come from Dijkstra, so a lower
//! weight means a shorter edge; with [`EdgeWeighting::Unweighted`] they come
//! from BFS.
//!
//! Scores are normalized by `1 / ((n-1)(n-2))`. The raw sum counts every
//! unordered pair twice, so this equals dividing by the number of pairs.
//! Disconnected pairs contribute 0. For `n <= 2` every score is 0.

use crate::graph::{EdgeWeighting, NodeId, WeightedGraph};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, VecDeque};

/// Normalized betweenness centrality of every node
pub fn betweenness(graph: &WeightedGraph, weighting: EdgeWeighting) -> HashMap<NodeId, f64> {
    let n = graph.node_count();
    let (mut adjacency, _) = graph.dense_adjacency(weighting);

    for neighbors in &mut adjacency {
        for (_, w) in neighbors.iter_mut() {
            if *w < 0.0 {
                log::warn!("Negative edge weight {} treated as 0 for path lengths", w);
                *w = 0.0;
            }
        }
    }

    let mut scores = vec![0.0; n];
    let mut state = Brandes::new(n);

    for source in 0..n {
        match weighting {
            EdgeWeighting::Weighted => state.dijkstra(&adjacency, source),
            EdgeWeighting::Unweighted => state.bfs(&adjacency, source),
        }
        state.accumulate(source, &mut scores);
    }

    if n > 2 {
        let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
        for score in scores.iter_mut() {
            *score *= scale;
        }
    }

    graph.nodes().cloned().zip(scores).collect()
}

/// Per-source scratch buffers, reused across sources
struct Brandes {
    /// Nodes in order of non-decreasing distance from the source
    stack: Vec<usize>,
    pred: Vec<Vec<usize>>,
    sigma: Vec<f64>,
    dist: Vec<Option<f64>>,
    delta: Vec<f64>,
}

impl Brandes {
    fn new(n: usize) -> Self {
        Self {
            stack: Vec::with_capacity(n),
            pred: vec![Vec::new(); n],
            sigma: vec![0.0; n],
            dist: vec![None; n],
            delta: vec![0.0; n],
        }
    }

    fn reset(&mut self, source: usize) {
        self.stack.clear();
        for i in 0..self.pred.len() {
            self.pred[i].clear();
            self.sigma[i] = 0.0;
            self.dist[i] = None;
            self.delta[i] = 0.0;
        }
        self.sigma[source] = 1.0;
    }

    fn bfs(&mut self, adjacency: &[Vec<(usize, f64)>], source: usize) {
        self.reset(source);
        self.dist[source] = Some(0.0);

        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            self.stack.push(v);
            let next = self.dist[v].unwrap_or(0.0) + 1.0;

            for &(w, _) in &adjacency[v] {
                if self.dist[w].is_none() {
                    self.dist[w] = Some(next);
                    queue.push_back(w);
                }
                if self.dist[w] == Some(next) {
                    self.sigma[w] += self.sigma[v];
                    self.pred[w].push(v);
                }
            }
        }
    }

    fn dijkstra(&mut self, adjacency: &[Vec<(usize, f64)>], source: usize) {
        self.reset(source);

        // Tentative distances; `dist` is only set once a node is settled
        let mut seen: Vec<Option<f64>> = vec![None; adjacency.len()];
        seen[source] = Some(0.0);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse((OrderedFloat(0.0), source, source)));

        while let Some(Reverse((OrderedFloat(d), pred, v))) = heap.pop() {
            if self.dist[v].is_some() {
                continue;
            }
            if v != source {
                self.sigma[v] += self.sigma[pred];
            }
            self.stack.push(v);
            self.dist[v] = Some(d);

            for &(w, weight) in &adjacency[v] {
                let candidate = d + weight;
                if self.dist[w].is_some() {
                    continue;
                }
                match seen[w] {
                    Some(current) if candidate > current => {}
                    Some(current) if candidate == current => {
                        self.sigma[w] += self.sigma[v];
                        self.pred[w].push(v);
                    }
                    _ => {
                        seen[w] = Some(candidate);
                        heap.push(Reverse((OrderedFloat(candidate), v, w)));
                        self.sigma[w] = 0.0;
                        self.pred[w].clear();
                        self.pred[w].push(v);
                    }
                }
            }
        }
    }

    /// Back-propagate dependencies from the farthest node inwards
    fn accumulate(&mut self, source: usize, scores: &mut [f64]) {
        while let Some(w) = self.stack.pop() {
            let coeff = (1.0 + self.delta[w]) / self.sigma[w];
            for &v in &self.pred[w] {
                self.delta[v] += self.sigma[v] * coeff;
            }
            if w != source {
                scores[w] += self.delta[w];
            }
        }
    }
}
