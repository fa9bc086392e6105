//! Development benchmark for weighted-digraph-core: times loading, reachability
//! and minimum-weight path queries on synthetic topologies.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use weighted_digraph_core::{shortest_path, Digraph, GraphError};

const USAGE: &str = "\
Benchmark harness for weighted-digraph-core (development use only).
Generates synthetic graphs in memory; it does not read graph files.

Usage: weighted-digraph-bench [mode] [node_count]

Modes:
  all         Run all generators and benchmark each (default)
  lsystem     Fractal branching tree (deep paths)
  scalefree   Preferential attachment via edge sampling (hub-and-spoke)
  smallworld  Watts-Strogatz ring lattice + shortcuts
  random      Erdos-Renyi uniform random arcs
  barbell     Two dense cliques connected by a thin bridge
  dla         Diffusion-limited aggregation (organic branching)

Default node_count: 200000
Set RUST_LOG=debug to see loader events.
";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        print!("{}", USAGE);
        return;
    }

    println!("weighted-digraph-bench");
    println!("======================");
    println!();

    let generators: Vec<(&str, fn(usize) -> EdgeList)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(usize) -> EdgeList),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        if let Err(e) = run_benchmark(name, generator, node_count.max(2)) {
            eprintln!("{}: {}", name, e);
        }
    }
}

fn run_benchmark(
    name: &str,
    generator: fn(usize) -> EdgeList,
    node_count: usize,
) -> Result<(), GraphError> {
    println!("--- {} ---", name);
    println!("Target: {} vertices", node_count);

    let t = Instant::now();
    let description = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} arcs, {:.1}MB of text",
        gen_time.as_secs_f64(),
        description.arcs,
        description.text.len() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    let graph: Digraph = description.text.parse()?;
    let load_time = t.elapsed();
    println!(
        "Loaded in {:.2}s: {} vertices, {} arcs, ~{:.0}MB",
        load_time.as_secs_f64(),
        graph.vertex_count(),
        graph.arc_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let max_degree = graph
        .vertices()
        .map(|v| graph.out_degree(v))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .max()
        .unwrap_or(0);
    println!("Max out-degree: {}", max_degree);

    // Reachability from vertex 0 to targets spread across the index range
    let last = graph.vertex_count() - 1;
    println!();
    println!("{:>10} {:>10} {:>10}", "target", "reachable", "time");
    println!("{:->10} {:->10} {:->10}", "", "", "");
    for target in [1, last / 100, last / 10, last / 2, last] {
        let t = Instant::now();
        let reachable = graph.does_path_exist(0, target)?;
        let elapsed = t.elapsed();
        println!(
            "{:>10} {:>10} {:>8.1}ms",
            target,
            reachable,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    // Minimum-weight path: vertex 0 to last vertex
    println!();
    let t = Instant::now();
    let path = shortest_path(&graph, 0, last);
    let elapsed = t.elapsed();
    match path {
        Ok(p) => {
            println!(
                "Shortest path 0 → {}: {} hops, weight {:.3}, {} finalized in {:.1}ms",
                last,
                p.vertices.len() - 1,
                p.weight,
                p.finalized,
                elapsed.as_secs_f64() * 1000.0
            );
            let t = Instant::now();
            let check = graph.path_weight(&p.vertices)?;
            println!(
                "Path weight re-check: {:.3} ({:.1}ms)",
                check,
                t.elapsed().as_secs_f64() * 1000.0
            );
        }
        Err(GraphError::NoPath { .. }) => println!(
            "Shortest path 0 → {}: no path ({:.1}ms)",
            last,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => return Err(e),
    }
    println!();
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: O(n) or O(n + arcs), single-threaded, deterministic.
// Each returns edge-list description text so loading is part of the benchmark.
// ---------------------------------------------------------------------------

struct EdgeList {
    text: String,
    arcs: usize,
}

impl EdgeList {
    fn new(vertex_count: usize) -> Self {
        Self {
            text: format!("{}\n", vertex_count),
            arcs: 0,
        }
    }

    fn arc(&mut self, from: usize, to: usize, weight: f64) {
        // Writing into a String cannot fail.
        let _ = writeln!(self.text, "{} {} {:.3}", from, to, weight);
        self.arcs += 1;
    }
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Arc weight in [0.5, 10.5).
    fn weight(&mut self) -> f64 {
        0.5 + self.next_f64() * 10.0
    }
}

/// L-system fractal tree: deep branching with self-similar structure.
///
/// Each vertex spawns `branching` children. Produces deep paths (log depth)
/// with exponential width.
fn gen_lsystem(node_count: usize) -> EdgeList {
    let mut list = EdgeList::new(node_count);
    let mut rng = FastRng::new(42);

    let branching = 3;
    let mut next_id = 1;
    let mut frontier = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                list.arc(parent, child, rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    list
}

/// Scale-free via edge-list sampling (O(arcs), not O(n²)).
///
/// Preferential attachment by picking a random existing arc endpoint.
/// Arcs point from the established vertex to the newcomer so vertex 0 reaches
/// the whole graph.
fn gen_scale_free(node_count: usize) -> EdgeList {
    let arcs_per_node = 10;
    let mut list = EdgeList::new(node_count);
    let mut rng = FastRng::new(12345);

    let mut endpoints: Vec<usize> = Vec::with_capacity(node_count * arcs_per_node * 2);

    // Seed: small clique
    let seed = 5.min(node_count);
    for i in 0..seed {
        for j in (i + 1)..seed {
            list.arc(i, j, rng.weight());
            endpoints.push(i);
            endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        let attach = arcs_per_node.min(new_node);
        for _ in 0..attach {
            let target = endpoints[rng.next(endpoints.len())];
            if target != new_node {
                list.arc(target, new_node, rng.weight());
                endpoints.push(new_node);
                endpoints.push(target);
            }
        }
    }

    list
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
fn gen_small_world(node_count: usize) -> EdgeList {
    let k = 10; // neighbors ahead on the ring
    let p = 0.05; // rewire probability
    let mut list = EdgeList::new(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let weight = rng.weight();

            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    list.arc(i, rewired, weight);
                } else {
                    list.arc(i, neighbor, weight);
                }
            } else {
                list.arc(i, neighbor, weight);
            }
        }
    }

    list
}

/// Erdos-Renyi: ~10 uniform random arcs per vertex, no structure.
fn gen_random(node_count: usize) -> EdgeList {
    let target_arcs = node_count * 10;
    let mut list = EdgeList::new(node_count);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_arcs {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            list.arc(from, to, rng.weight());
        }
    }

    list
}

/// Barbell: two dense cliques connected by a single thin bridge.
///
/// Worst case for "find path through bottleneck". The bridge chain is cheap
/// so the minimum-weight path must squeeze through it.
fn gen_barbell(node_count: usize) -> EdgeList {
    let bridge_len = 10;
    let clique_size = (node_count.saturating_sub(bridge_len) / 2).max(2);
    let bridge_start = clique_size;
    let b_start = bridge_start + bridge_len;
    let mut list = EdgeList::new(b_start + clique_size);
    let mut rng = FastRng::new(99999);

    // Clique A: each vertex connected to ~20 random others in the clique
    for i in 0..clique_size {
        for _ in 0..20.min(clique_size - 1) {
            let target = rng.next(clique_size);
            if target != i {
                list.arc(i, target, rng.weight());
            }
        }
    }

    // Bridge: chain from last vertex of A into B
    list.arc(clique_size - 1, bridge_start, 0.1);
    for id in bridge_start + 1..b_start {
        list.arc(id - 1, id, 0.1);
    }
    list.arc(b_start - 1, b_start, 0.1);

    // Clique B
    for i in 0..clique_size {
        for _ in 0..20.min(clique_size - 1) {
            let target = rng.next(clique_size);
            if target != i {
                list.arc(b_start + i, b_start + target, rng.weight());
            }
        }
    }

    list
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new vertex hangs off a random recent "surface" vertex, with an
/// occasional second arc from anywhere earlier (loops and shortcuts).
fn gen_dla(node_count: usize) -> EdgeList {
    let mut list = EdgeList::new(node_count);
    let mut rng = FastRng::new(77777);

    // Recent additions; evicted oldest-first to keep growth at the frontier.
    let surface_max = 10000;
    let mut surface: VecDeque<usize> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len())];
        list.arc(attach_to, new_node, rng.weight());

        // 10% chance of a second arc
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                list.arc(other, new_node, rng.weight());
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    list
}
