use std::{env, process};

use ahash::AHashMap;
use linkgraph::{
    LinkGraph, LinkGraphError, LoadReport,
    algo::{brandes_centrality, brandes_predecessors},
    bfs::{bfs_predecessors, bfs_trim},
    client::CommandLineConfig,
    lookup::load_titles_file,
};
use serde_json::json;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let (graph, report) = match LinkGraph::from_path(&config.graph, config.vertices) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    warn_skipped("graph", &report);

    let titles = match load_title_map(&config) {
        Ok(titles) => titles,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    if let Err(err) = run_command(&config, &graph, &report, &titles) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn load_title_map(config: &CommandLineConfig) -> Result<AHashMap<i64, String>, LinkGraphError> {
    let Some(path) = config.titles.as_ref() else {
        return Ok(AHashMap::new());
    };
    let (titles, report) = load_titles_file(path, config.vertices)?;
    warn_skipped("titles", &report);
    Ok(titles)
}

fn warn_skipped(source: &str, report: &LoadReport) {
    for skip in &report.skipped {
        eprintln!(
            "warning: {source} line {} is unparsable: {}",
            skip.line, skip.content
        );
    }
}

fn run_command(
    config: &CommandLineConfig,
    graph: &LinkGraph,
    report: &LoadReport,
    titles: &AHashMap<i64, String>,
) -> Result<(), LinkGraphError> {
    match config.command.as_str() {
        "status" => {
            println!(
                "graph={} vertices={} edges={} skipped_lines={}",
                config.graph,
                graph.vertex_count(),
                graph.edge_count(),
                report.skipped.len()
            );
            Ok(())
        }
        "trim" => {
            if config.seeds.is_empty() {
                return Err(LinkGraphError::invalid_input("trim requires --seeds"));
            }
            let mut kept: Vec<i64> = bfs_trim(graph, &config.seeds, config.bound)
                .into_iter()
                .collect();
            kept.sort_unstable();
            if config.format == "json" {
                println!("{}", json!({ "bound": config.bound, "vertices": kept }));
            } else {
                for id in kept {
                    println!("{}", labeled(id, titles));
                }
            }
            Ok(())
        }
        "centrality" => {
            let mut scores: Vec<(i64, f64)> = brandes_centrality(graph).into_iter().collect();
            scores.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
            if config.format == "json" {
                let rows: Vec<_> = scores
                    .iter()
                    .map(|(id, score)| json!({ "id": id, "score": score, "title": titles.get(id) }))
                    .collect();
                println!("{}", json!(rows));
            } else {
                for (id, score) in scores {
                    match titles.get(&id) {
                        Some(title) => println!("{id},{score},{title}"),
                        None => println!("{id},{score}"),
                    }
                }
            }
            Ok(())
        }
        "predecessors" => {
            let target = config
                .target
                .ok_or_else(|| LinkGraphError::invalid_input("predecessors requires --target"))?;
            let mut rows: Vec<(i64, Vec<i64>)> =
                brandes_predecessors(graph, target).into_iter().collect();
            rows.sort_unstable();
            if config.format == "json" {
                let rows: Vec<_> = rows
                    .iter()
                    .map(|(id, preds)| json!({ "id": id, "predecessors": preds }))
                    .collect();
                println!("{}", json!(rows));
            } else {
                for (id, preds) in rows {
                    let joined: Vec<String> = preds.iter().map(|p| p.to_string()).collect();
                    println!("{}:{}", id, joined.join(","));
                }
            }
            Ok(())
        }
        "path" => {
            let from = config
                .from
                .ok_or_else(|| LinkGraphError::invalid_input("path requires --from"))?;
            let target = config
                .target
                .ok_or_else(|| LinkGraphError::invalid_input("path requires --target"))?;
            match reconstruct_path(graph, from, target) {
                Some(path) => {
                    if config.format == "json" {
                        println!("{}", json!(path));
                    } else {
                        for id in path {
                            println!("{}", labeled(id, titles));
                        }
                    }
                }
                None => println!("no path from {from} to {target}"),
            }
            Ok(())
        }
        other => Err(LinkGraphError::invalid_input(format!(
            "unknown command {other}"
        ))),
    }
}

fn reconstruct_path(graph: &LinkGraph, from: i64, target: i64) -> Option<Vec<i64>> {
    if from == target {
        return Some(vec![from]);
    }
    let predecessors = bfs_predecessors(graph, from);
    let mut path = vec![target];
    let mut current = target;
    while let Some(&parent) = predecessors.get(&current) {
        path.push(parent);
        if parent == from {
            path.reverse();
            return Some(path);
        }
        current = parent;
    }
    None
}

fn labeled(id: i64, titles: &AHashMap<i64, String>) -> String {
    match titles.get(&id) {
        Some(title) => format!("{id} {title}"),
        None => id.to_string(),
    }
}
