//! CLI: Animate one algorithm in the terminal.
//!
//! Loads an array (`--input`, `--random`) or a graph (`--graph`, `--graph-file`), runs the
//! algorithm and prints every frame as it is published, then a metrics summary.
//!
//! Usage: `visualize --algorithm <NAME> [OPTIONS]`
//! Example: visualize --algorithm bubble --input "5, 3, 8, 1" --delay-ms 100
//!
//! Set RUST_LOG=algoviz_engine=trace for TRACE-level span enter/exit and events.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use algoviz_engine::config::{ARRAY_LEN_ENV, STEP_DELAY_ENV};
use algoviz_engine::types::Snapshot;
use algoviz_engine::{
  Algorithm, ChannelSurface, Frame, Metrics, Playback, ViewEvent, Visualizer, VisualizerConfig,
  VisualizerError,
};
use clap::Parser;
use futures::StreamExt;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Animate a sorting, searching or graph algorithm step by step.
#[derive(Parser, Debug)]
#[command(name = "visualize")]
#[command(
  after_help = r#"Environment variables (override the matching flags when set):
  ALGOVIZ_STEP_DELAY_MS   Delay between frames in milliseconds (default 500).
  ALGOVIZ_ARRAY_LEN       Length of random arrays (default 10).
  ALGOVIZ_MAX_VALUE       Exclusive upper bound of random values (default 100).

Algorithms:
  bubble-sort, selection-sort, insertion-sort, merge-sort, quick-sort,
  linear-search, binary-search, bfs, dfs, dijkstra

Examples:
  visualize --algorithm bubble --input "5, 3, 8, 1"
  visualize --algorithm binary-search --input "1,3,5,8,20" --target 8 --delay-ms 0
  visualize --algorithm dijkstra --graph "{A:[(B,1),(C,4)], B:[(C,2),(D,5)], C:[(D,1)], D:[]}" --start A"#
)]
struct Args {
  /// Algorithm to run
  #[arg(long, short, value_name = "NAME")]
  algorithm: Algorithm,

  /// Comma-separated integers (sorted automatically for binary search)
  #[arg(long, value_name = "LIST", conflicts_with_all = ["random", "graph", "graph_file"])]
  input: Option<String>,

  /// Random array of N values. Overridden by ALGOVIZ_ARRAY_LEN if set.
  #[arg(long, value_name = "N", conflicts_with_all = ["graph", "graph_file"])]
  random: Option<usize>,

  /// Graph as JSON (`{"A": ["B"]}`) or compact text (`{A:[(B,1)]}`)
  #[arg(long, value_name = "GRAPH", conflicts_with = "graph_file")]
  graph: Option<String>,

  /// File holding the graph text
  #[arg(long, value_name = "PATH")]
  graph_file: Option<PathBuf>,

  /// Start node for graph algorithms (default: first node by name)
  #[arg(long, value_name = "NODE")]
  start: Option<String>,

  /// Value to search for
  #[arg(long, value_name = "N", allow_negative_numbers = true, default_value_t = 0)]
  target: i64,

  /// Delay between frames in milliseconds. Overridden by ALGOVIZ_STEP_DELAY_MS if set.
  #[arg(long, value_name = "MS")]
  delay_ms: Option<u64>,

  /// Print every event as a JSON line
  #[arg(long)]
  json: bool,
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(std::io::stderr)
    .init();

  info!("visualize starting");
  let args = Args::parse();

  // Env vars override flags: only apply a flag when its variable is unset.
  let mut config = match VisualizerConfig::from_env() {
    Ok(c) => c,
    Err(e) => {
      eprintln!("Configuration error: {}", e);
      process::exit(1);
    }
  };
  if std::env::var_os(STEP_DELAY_ENV).is_none() {
    if let Some(ms) = args.delay_ms {
      config.step_delay = Duration::from_millis(ms);
    }
  }
  if std::env::var_os(ARRAY_LEN_ENV).is_none() {
    if let Some(n) = args.random {
      config.array_len = n;
    }
  }
  info!(algorithm = %args.algorithm, delay_ms = config.step_delay.as_millis() as u64, "options (env or flags)");

  let graph_text = match (&args.graph, &args.graph_file) {
    (Some(text), _) => Some(text.clone()),
    (None, Some(path)) => match fs::read_to_string(path) {
      Ok(s) => Some(s),
      Err(e) => {
        eprintln!("Error reading {}: {}", path.display(), e);
        process::exit(1);
      }
    },
    (None, None) => None,
  };

  let (surface, events) = ChannelSurface::new(64);
  let printer = tokio::spawn(print_events(events, args.json));
  let viz = Arc::new(Visualizer::new(args.algorithm, config, Arc::new(surface)));

  let ok = load(&viz, &args, graph_text.as_deref()).await;
  let outcome = if ok {
    let ctrl_c = {
      let viz = Arc::clone(&viz);
      tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
          viz.unmount();
        }
      })
    };
    let outcome = viz.start().await;
    ctrl_c.abort();
    let _ = ctrl_c.await;
    match outcome {
      Ok(playback) => Some(playback),
      // Interrupted before the first frame.
      Err(VisualizerError::Unmounted) => Some(Playback::Abandoned {
        frames_delivered: 0,
      }),
      Err(_) => None,
    }
  } else {
    None
  };

  let last_run = viz.last_run();
  // Closes the event stream so the printer drains and exits.
  drop(viz);
  if printer.await.is_err() {
    warn!("event printer failed");
  }

  match outcome {
    Some(Playback::Completed { frames_delivered }) => {
      info!(frames_delivered, "run completed");
      if !args.json {
        if let Some(run) = last_run {
          println!("Run {} completed.", run.id);
          println!("  Algorithm: {}", run.algorithm);
          println!("  Frames: {}", run.frame_count());
          print_summary(&run.metrics);
        }
      }
    }
    Some(Playback::Abandoned { frames_delivered }) => {
      info!(frames_delivered, "run abandoned");
      eprintln!("Interrupted after {} frames.", frames_delivered);
      process::exit(130);
    }
    None => process::exit(1),
  }
}

/// Applies the CLI inputs to the view. Errors were already shown by the surface.
async fn load(viz: &Visualizer, args: &Args, graph_text: Option<&str>) -> bool {
  let algorithm = viz.algorithm();
  let loaded = if algorithm.uses_graph() {
    let Some(text) = graph_text else {
      eprintln!("{} needs --graph or --graph-file", algorithm);
      return false;
    };
    viz.set_graph_input(text).await.is_ok()
  } else if let Some(input) = &args.input {
    viz.set_custom_input(input).await.is_ok()
  } else {
    viz.dataset().is_some() || viz.generate_random().await.is_ok()
  };
  if !loaded {
    return false;
  }

  if algorithm.uses_graph() {
    let start = args.start.clone().or_else(|| {
      viz
        .dataset()
        .and_then(|d| d.as_graph().and_then(|g| g.nodes().next().cloned()))
    });
    if let Some(start) = start {
      if viz.set_start_node(&start).await.is_err() {
        return false;
      }
    }
  }
  viz.set_target(args.target).await.is_ok()
}

async fn print_events(mut events: impl futures::Stream<Item = ViewEvent> + Unpin, json: bool) {
  while let Some(event) = events.next().await {
    if json {
      match serde_json::to_string(&event) {
        Ok(line) => println!("{}", line),
        Err(e) => warn!(error = %e, "could not serialize event"),
      }
      continue;
    }
    match event {
      ViewEvent::Frame(frame) => println!("{}", render_frame(&frame)),
      ViewEvent::ValidationError { kind, message } => eprintln!("Error ({}): {}", kind, message),
      ViewEvent::Metrics(_) | ViewEvent::RunComplete(_) => {}
    }
  }
}

fn render_frame(frame: &Frame) -> String {
  let body = match &frame.snapshot {
    Snapshot::Array { .. } => frame
      .elements()
      .iter()
      .map(|e| {
        if e.highlighted {
          format!("[{}]", e.value)
        } else {
          e.value.to_string()
        }
      })
      .collect::<Vec<_>>()
      .join(" "),
    Snapshot::Graph { frontier, .. } => format!(
      "frontier: [{}]  visited: [{}]",
      frontier.join(", "),
      frame.metrics.visited.join(", ")
    ),
  };
  format!(
    "{:>4} {:<8} {}  {}",
    frame.step,
    frame.kind.to_string(),
    body,
    frame.annotation.as_deref().unwrap_or("")
  )
}

fn print_summary(metrics: &Metrics) {
  println!("  Comparisons: {}", metrics.comparisons);
  println!("  Swaps: {}", metrics.swaps);
  if metrics.merges > 0 {
    println!("  Merges: {}", metrics.merges);
  }
  if metrics.writes > 0 {
    println!("  Writes: {}", metrics.writes);
  }
  if let Some(found) = metrics.found {
    println!("  Found: {}", found);
  }
  if !metrics.visited.is_empty() {
    println!("  Visited: {}", metrics.visited.join(" -> "));
  }
  if metrics.relaxations > 0 {
    println!("  Relaxations: {}", metrics.relaxations);
  }
  for (node, distance) in &metrics.distances {
    println!("  Distance {}: {}", node, distance);
  }
}
