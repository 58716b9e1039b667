use clap::Parser;
use grid_route::config::RunConfig;
use grid_route::load_graph;
use grid_route::report::ComparisonReport;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = RunConfig::parse();

    let graph = match load_graph(&config.graph_file) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (start, end) = match config.resolve_endpoints(&graph) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let square = |node| {
        graph
            .get_square(node)
            .map_or_else(|| "?".to_owned(), |square| square.to_string())
    };
    println!(
        "\nCalculating path from Node {start} (Sq: {}) to Node {end} (Sq: {})...\n",
        square(start),
        square(end)
    );
    print!("{}", ComparisonReport::run(&graph, start, end));
    ExitCode::SUCCESS
}
