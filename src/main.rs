use clap::Parser;
use mstree::{
    error::MstError,
    graph::{Graph, TotalWeight, VertexId, Weight, generate::random_connected},
    mst::{PrimBuilder, PrimObserver, SpanningTree, TracingObserver},
    statistics::Stats,
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};
use tqdm::tqdm;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Minimum spanning trees with Prim's algorithm
#[derive(Parser, Debug)]
#[command(name = "mstree")]
#[command(about = "Builds minimum spanning trees of weighted undirected graphs", long_about = None)]
struct Args {
    /// Path to a JSON graph file
    #[arg(short, long, required_unless_present = "random", conflicts_with = "random")]
    graph: Option<PathBuf>,

    /// Generate a random connected graph with this many vertices instead of reading one
    #[arg(long)]
    random: Option<usize>,

    /// Edges to add on top of the random graph's spanning tree
    #[arg(long, default_value_t = 0)]
    extra_edges: usize,

    /// Largest weight a random edge may get
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    max_weight: Weight,

    /// Seed for the random graph
    #[arg(long)]
    seed: Option<u64>,

    /// Write the input graph to this path as JSON
    #[arg(long)]
    dump_graph: Option<PathBuf>,

    /// Root vertices to grow trees from (comma-separated list, e.g., "0,3,7")
    #[arg(short, long, value_delimiter = ',')]
    roots: Vec<usize>,

    /// Grow a tree from every vertex and check that they all weigh the same
    #[arg(long, conflicts_with = "roots")]
    all_roots: bool,

    /// Report the tree of the root's component instead of failing on a disconnected graph
    #[arg(long)]
    allow_partial: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log every offer, poll and tree insertion
    #[arg(short, long)]
    trace: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    root: VertexId,
    weight: TotalWeight,
    reached: usize,
    total: usize,
    spanning: bool,
    tree: &'a SpanningTree,
}

fn load_graph(args: &Args) -> Result<Graph, MstError> {
    let graph = match (&args.graph, args.random) {
        (Some(path), _) => Graph::load_from_path(path)?,
        (None, Some(vertices)) => {
            random_connected(vertices, args.extra_edges, args.max_weight, args.seed)?
        }
        (None, None) => Graph::new(),
    };
    if let Some(path) = &args.dump_graph {
        graph.save_to_path(path)?;
        info!(path = %path.display(), "graph written");
    }
    Ok(graph)
}

fn build_from(
    graph: &Graph,
    root: VertexId,
    args: &Args,
    stats: &mut Stats,
) -> Result<SpanningTree, MstError> {
    if args.trace {
        let mut builder = PrimBuilder::new(graph).with_observer((stats, TracingObserver));
        grow(&mut builder, root, args.allow_partial)
    } else {
        let mut builder = PrimBuilder::new(graph).with_observer(stats);
        grow(&mut builder, root, args.allow_partial)
    }
}

fn grow<O: PrimObserver>(
    builder: &mut PrimBuilder<'_, O>,
    root: VertexId,
    allow_partial: bool,
) -> Result<SpanningTree, MstError> {
    if allow_partial {
        builder.build(root)
    } else {
        builder.build_spanning(root)
    }
}

fn print_tree(
    graph: &Graph,
    root: VertexId,
    tree: &SpanningTree,
    json: bool,
) -> Result<(), MstError> {
    if json {
        let report = Report {
            root,
            weight: tree.weight(),
            reached: tree.len(),
            total: graph.len(),
            spanning: tree.is_spanning(graph.len()),
            tree,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "root {root}: weight {} over {} edges, {}/{} vertices",
            tree.weight(),
            tree.edges().len(),
            tree.len(),
            graph.len()
        );
        println!("{tree}");
    }
    Ok(())
}

fn sweep_all_roots(graph: &Graph, args: &Args, stats: &mut Stats) -> Result<bool, MstError> {
    let roots: Vec<VertexId> = graph.vertices().map(|vertex| vertex.id()).collect();
    let mut weights: Vec<(VertexId, TotalWeight)> = Vec::with_capacity(roots.len());

    for root in tqdm(roots.into_iter()) {
        let tree = build_from(graph, root, args, stats)?;
        weights.push((root, tree.weight()));
    }

    let Some(&(first_root, expected)) = weights.first() else {
        println!("graph is empty, nothing to sweep");
        return Ok(true);
    };
    let mismatches: Vec<_> = weights.iter().filter(|(_, w)| *w != expected).collect();
    for (root, weight) in &mismatches {
        warn!(%root, weight, %first_root, expected, "weight differs between roots");
    }

    println!(
        "weight {expected} from {} roots, {} mismatching",
        weights.len(),
        mismatches.len()
    );
    Ok(mismatches.is_empty())
}

fn run(args: &Args) -> Result<bool, MstError> {
    let graph = load_graph(args)?;
    info!(
        vertices = graph.len(),
        edges = graph.edge_count(),
        "graph ready"
    );

    let mut stats = Stats::new();
    let consistent = if args.all_roots {
        sweep_all_roots(&graph, args, &mut stats)?
    } else {
        let roots: Vec<VertexId> = if args.roots.is_empty() {
            graph.vertices().map(|vertex| vertex.id()).take(1).collect()
        } else {
            args.roots.iter().map(|&id| VertexId::from(id)).collect()
        };

        for root in roots {
            let tree = build_from(&graph, root, args, &mut stats)?;
            print_tree(&graph, root, &tree, args.json)?;
        }
        true
    };

    info!("{stats}");
    Ok(consistent)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.trace { "mstree=trace" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
