use std::path::PathBuf;

use anyhow::{Context, Result};
use avl_store::traversal::render_levels;
use avl_store::workload::{parse_script, run_script, DEFAULT_SEED};
use avl_store::{AvlTree, HeightReport, KeyOrder, UnbalancedTree, WorkloadConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "avl-store", about = "Self-balancing ordered-key store built on an AVL tree")]
struct Cli {
    /// Log rebalancing decisions (overrides RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk through insertions, rotations and deletions step by step.
    Demo,
    /// Compare AVL and unbalanced tree heights on a generated workload.
    Compare {
        /// Number of distinct keys to insert.
        #[arg(long, default_value_t = 1000)]
        count: usize,
        /// Key order: ascending, descending or shuffled.
        #[arg(long, default_value = "ascending")]
        order: KeyOrder,
        /// Seed for the shuffled order.
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Run an operation script (`insert 10`, `delete 5`, `bfs`, ...) against one tree.
    Script {
        /// Script file, one operation per line.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Compare { count, order, seed } => run_compare(count, order, seed)?,
        Commands::Script { path } => run_script_file(path)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    println!("Insertions\n");

    let mut avl = AvlTree::new();
    println!("1. Basic insertion: 10, 5, 15");
    for key in [10, 5, 15] {
        avl.insert(key).context("basic insertion failed")?;
    }
    print_root(&avl);

    println!("\n2. Single rotation: 20, 30");
    for key in [20, 30] {
        avl.insert(key).context("rotation insertion failed")?;
    }
    print_root(&avl);

    println!("\n3. Duplicate: 10");
    match avl.insert(10) {
        Ok(()) => println!("ERROR: duplicate was accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    println!("\nHeight difference between BST and AVL");
    let mut bst = UnbalancedTree::new();
    let mut avl = AvlTree::new();
    for key in 1..=5 {
        bst.insert(key)?;
        avl.insert(key)?;
    }
    println!("BST: {}", join(bst.in_order()));
    println!("AVL: {}", join(avl.in_order()));
    println!("BST height: {}", bst.height());
    println!("AVL height: {}", avl.height());

    println!("\nDeletion with rotations");
    let mut avl = AvlTree::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        avl.insert(key)?;
    }
    println!("initial:      {}", avl.pre_order_annotated());
    println!("deleting 70...");
    avl.delete(&70)?;
    println!("after delete: {}", avl.pre_order_annotated());

    println!("\nBreadth-first");
    println!("{}", render_levels(&avl.breadth_first()));

    println!("\nPre-order");
    println!("{}", avl.pre_order_annotated());

    println!("\nRotations");
    let scenarios = [
        ("single right rotation", [30, 20, 10]),
        ("single left rotation", [10, 20, 30]),
        ("double left-right rotation", [10, 30, 20]),
        ("double right-left rotation", [30, 10, 20]),
    ];
    for (name, keys) in scenarios {
        let mut avl = AvlTree::new();
        for key in keys {
            avl.insert(key)?;
        }
        println!("{name} ({}): {}", join(keys.iter().collect()), avl.pre_order_annotated());
    }

    println!("\nFinal tree");
    print!("{avl}");

    Ok(())
}

fn run_compare(count: usize, order: KeyOrder, seed: u64) -> Result<()> {
    let config = WorkloadConfig::new(count, order).with_seed(seed);
    let report = HeightReport::measure(&config)
        .with_context(|| format!("failed to measure {count} {order} keys"))?;
    println!("{report}");
    Ok(())
}

fn run_script_file(path: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    let ops = parse_script(&text).with_context(|| format!("invalid script {}", path.display()))?;

    let mut tree = AvlTree::new();
    let stdout = std::io::stdout();
    let rejected = run_script(&mut tree, &ops, &mut stdout.lock())?;

    if rejected > 0 {
        eprintln!("{rejected} of {} operations rejected", ops.len());
    }
    Ok(())
}

fn print_root(tree: &AvlTree<i32>) {
    match tree.root() {
        Some(root) => println!("root: {root}"),
        None => println!("root: <empty>"),
    }
}

fn join(keys: Vec<&i32>) -> String {
    keys.iter()
        .map(|key| key.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
