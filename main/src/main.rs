mod report;
mod script;

use std::{fs, io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use matrix_graph::{DirectedGraph, GraphConfig};
use serde::Deserialize;

#[derive(Parser, Debug)]
struct CommandLine {
    #[clap(flatten)]
    command_line: Config,
    #[clap(long, value_name = "FILE")]
    /// Path to the config file
    config: Option<PathBuf>,
}

#[derive(clap::Args, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct Config {
    #[clap(short, long, value_name = "FILE")]
    /// Path to the graph script
    input: Option<PathBuf>,
    #[clap(long)]
    /// Initial number of vertex slots
    capacity: Option<usize>,
    #[clap(long)]
    /// Load factor that triggers growth
    threshold: Option<f64>,
    #[clap(long)]
    /// Multiplier applied to the capacity on growth
    growth_factor: Option<f64>,
    #[clap(long)]
    #[serde(default)]
    /// Print the internal state of the graph after the report
    dump: bool,
}

impl Config {
    fn merge(self, other: Self) -> Self {
        Self {
            input: self.input.or(other.input),
            capacity: self.capacity.or(other.capacity),
            threshold: self.threshold.or(other.threshold),
            growth_factor: self.growth_factor.or(other.growth_factor),
            dump: self.dump || other.dump,
        }
    }

    fn graph_config(&self) -> GraphConfig {
        let default = GraphConfig::default();
        GraphConfig {
            capacity: self.capacity.unwrap_or(default.capacity),
            threshold: self.threshold.unwrap_or(default.threshold),
            growth_factor: self.growth_factor.unwrap_or(default.growth_factor),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let command_line = CommandLine::parse();

    let config = if let Some(path) = command_line.config {
        let config = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&config)
            .with_context(|| format!("failed to parse config {}", path.display()))?
    } else {
        Config::default()
    };
    let config = command_line.command_line.merge(config);
    let input_path = config
        .input
        .clone()
        .unwrap_or_else(|| exit_with("input file is required"));

    let mut graph = DirectedGraph::from_config(config.graph_config())?;
    let input = fs::read_to_string(&input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;
    let statements = script::parse(&input)
        .with_context(|| format!("malformed script {}", input_path.display()))?;
    for statement in statements {
        let applied = statement.command.apply(&mut graph).with_context(|| {
            format!("{}:{}: `{}`", input_path.display(), statement.line, statement.command)
        })?;
        if !applied {
            log::info!("line {}: `{}` had no effect", statement.line, statement.command);
        }
    }

    report::write_report(&graph, config.dump, &mut io::stdout().lock())?;
    Ok(())
}

fn exit_with(message: &'static str) -> ! {
    <CommandLine as clap::CommandFactory>::command()
        .error(clap::error::ErrorKind::MissingRequiredArgument, message)
        .exit();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_command_line() {
        let command_line = CommandLine::parse_from(["dgraph", "--capacity", "4", "-i", "a.txt"]);
        let file: Config = toml::from_str("capacity = 20\nthreshold = 0.75\ndump = true").unwrap();
        let config = command_line.command_line.merge(file);
        assert_eq!(config.input, Some(PathBuf::from("a.txt")));
        assert!(config.dump);
        let graph_config = config.graph_config();
        assert_eq!(graph_config.capacity, 4);
        assert_eq!(graph_config.threshold, 0.75);
        assert_eq!(graph_config.growth_factor, 1.5);
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(toml::from_str::<Config>("capasity = 3").is_err());
    }
}
