use std::fs;
use std::process;

use sssp_trace::algorithm::path::{self, PathQuery, Target};
use sssp_trace::graph::parse_edge_list;
use sssp_trace::trace::JsonLinesSink;
use sssp_trace::{
    BellmanFord, Dijkstra, EdgeListGraph, Path, ShortestPathAlgorithm, ShortestPathResult,
};

fn usage() -> ! {
    eprintln!("usage: trace_paths <edge-list-file> <bellman-ford|dijkstra> <source> [target|all]");
    process::exit(2);
}

fn format_path(path: &Path) -> String {
    match path.vertices() {
        Some(vertices) => vertices
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> "),
        None => "unreachable".to_string(),
    }
}

fn print_paths(graph: &EdgeListGraph<i64>, result: &ShortestPathResult<i64>, target: Target) {
    match path::query(&result.predecessors, graph.vertices(), result.source, target) {
        PathQuery::Single(path) => println!("path: {}", format_path(&path)),
        PathQuery::All(paths) => {
            for (vertex, path) in &paths {
                println!("path to {}: {}", vertex, format_path(path));
            }
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        usage();
    }

    let content = match fs::read_to_string(&args[1]) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: cannot read {}: {}", args[1], err);
            process::exit(1);
        }
    };
    let graph = EdgeListGraph::from_edges(parse_edge_list::<i64>(&content));

    let Ok(source) = args[3].parse::<usize>() else {
        usage();
    };
    let target = match args.get(4).map(String::as_str) {
        None | Some("all") => Target::All,
        Some(raw) => match raw.parse::<usize>() {
            Ok(vertex) => Target::Vertex(vertex),
            Err(_) => usage(),
        },
    };

    let mut sink = JsonLinesSink::new(std::io::stdout().lock());
    let outcome = match args[2].as_str() {
        "bellman-ford" => BellmanFord::new().run(&graph, source, &mut sink),
        "dijkstra" => Dijkstra::new().run(&graph, source, &mut sink),
        _ => usage(),
    };

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    };

    for vertex in graph.vertices() {
        match result.distances.get(vertex) {
            Some(distance) => println!("dist[{}] = {}", vertex, distance),
            None => println!("dist[{}] = inf", vertex),
        }
    }

    if result.has_negative_cycle {
        // Distances above are unreliable; reconstructing paths from them
        // would be misleading.
        eprintln!("graph has a negative cycle reachable from {}", source);
        process::exit(1);
    }
    print_paths(&graph, &result, target);
}
