//! Taxa CLI — query the bundled primate hierarchy
//!
//! Commands:
//!   taxa ancestors   — ancestor chain of a taxon up to the root
//!   taxa lca         — lowest common ancestor of two or more taxa
//!   taxa children    — immediate children of a taxon
//!   taxa descendants — everything below a taxon
//!   taxa tree        — indented view of the hierarchy
//!   taxa roots       — taxa without a parent
//!   taxa demo        — walk through the worked examples

use std::env;
use std::process::ExitCode;
use taxa_core::taxonomy::{
    primates, AncestorResolver, DescendantWalker, HierarchyStore, LcaEngine, TaxonomyError,
    TraversalConfig,
};

fn print_usage() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║        Taxa v0.1 — Taxonomic Hierarchy Explorer              ║
║        Ancestors · Descendants · Lowest Common Ancestors     ║
╚══════════════════════════════════════════════════════════════╝

Usage: taxa <command> [args...] [--json] [--max-depth N]

Commands:
  ancestors   <taxon>                 Ancestor chain up to the root
  lca         <taxon> <taxon>...      Lowest common ancestor (folded in order)
  children    <taxon>                 Immediate children
  descendants <taxon>                 All descendants, self-inclusive
  tree        [taxon]                 Indented tree (default: every root)
  roots                               Taxa without a parent
  demo                                Run the worked examples

Examples:
  taxa ancestors "Pongo abelii"
  taxa lca "Pan troglodytes" "Tarsius tarsier" "Pongo abelii"
  taxa tree Strepsirrhini
  RUST_LOG=debug taxa lca "Pan troglodytes" "Galago moholi" --json
"#
    );
}

/// Flags shared by every command
struct Options {
    json: bool,
    config: TraversalConfig,
}

fn split_options(args: &[String]) -> Result<(Vec<String>, Options), String> {
    let mut positional = Vec::new();
    let mut options = Options {
        json: false,
        config: TraversalConfig::default(),
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--max-depth" => {
                let value = iter.next().ok_or("--max-depth needs a value")?;
                let depth = value
                    .parse()
                    .map_err(|_| format!("--max-depth must be a number, got '{}'", value))?;
                options.config.max_depth = Some(depth);
            }
            _ => positional.push(arg.clone()),
        }
    }
    Ok((positional, options))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (args, options) = match split_options(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("  {}", e);
            return ExitCode::FAILURE;
        }
    };
    if args.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let store = match primates() {
        Ok(store) => store,
        Err(e) => {
            eprintln!("  Failed to build hierarchy: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let rest = &args[1..];
    let outcome = match args[0].as_str() {
        "ancestors" => cmd_ancestors(&store, rest, &options),
        "lca" => cmd_lca(&store, rest, &options),
        "children" => cmd_children(&store, rest, &options),
        "descendants" => cmd_descendants(&store, rest, &options),
        "tree" => cmd_tree(&store, rest),
        "roots" => cmd_roots(&store, &options),
        "demo" => cmd_demo(&store),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(usage)) => {
            eprintln!("Usage: {}", usage);
            ExitCode::FAILURE
        }
        Err(CliError::Taxonomy(e)) => {
            eprintln!("  Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

type CliResult = Result<(), CliError>;

enum CliError {
    Usage(&'static str),
    Taxonomy(TaxonomyError),
}

impl From<TaxonomyError> for CliError {
    fn from(e: TaxonomyError) -> Self {
        CliError::Taxonomy(e)
    }
}

fn first_arg<'s>(args: &'s [String], usage: &'static str) -> Result<&'s str, CliError> {
    args.first().map(String::as_str).ok_or(CliError::Usage(usage))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("  Failed to encode JSON: {}", e),
    }
}

fn cmd_ancestors(store: &HierarchyStore, args: &[String], options: &Options) -> CliResult {
    let taxon = first_arg(args, "taxa ancestors <taxon>")?;
    let resolver = AncestorResolver::with_config(store, &options.config);
    let chain = resolver.ancestors(taxon)?;
    if options.json {
        print_json(&chain.to_vec());
    } else {
        println!("\n  {}", chain.labels().join(" → "));
        println!("  depth {} below {}", chain.len() - 1, chain.root());
    }
    Ok(())
}

fn cmd_lca(store: &HierarchyStore, args: &[String], options: &Options) -> CliResult {
    if args.is_empty() {
        return Err(CliError::Usage("taxa lca <taxon> <taxon>..."));
    }
    let resolver = AncestorResolver::with_config(store, &options.config);
    let engine = LcaEngine::with_resolver(resolver);
    let (lca, steps) = engine.lca_with_steps(args)?;
    if options.json {
        print_json(&serde_json::json!({ "lca": lca, "steps": steps }));
    } else {
        println!();
        for step in &steps {
            println!("  LCA of {} and {} is {}", step.left, step.right, step.lca);
        }
        println!("  {}", "-".repeat(60));
        println!("  Lowest common ancestor: {}", lca);
    }
    Ok(())
}

fn cmd_children(store: &HierarchyStore, args: &[String], options: &Options) -> CliResult {
    let taxon = first_arg(args, "taxa children <taxon>")?;
    let children = store.children_of(taxon)?;
    if options.json {
        print_json(children);
    } else if children.is_empty() {
        println!("\n  {} has no children", taxon);
    } else {
        println!("\n  Children of {} ({}):", taxon, children.len());
        for child in children {
            println!("    {}", child);
        }
    }
    Ok(())
}

fn cmd_descendants(store: &HierarchyStore, args: &[String], options: &Options) -> CliResult {
    let taxon = first_arg(args, "taxa descendants <taxon>")?;
    let walker = DescendantWalker::new(store);
    let descendants = walker.descendants(taxon)?;
    if options.json {
        print_json(&descendants);
    } else {
        println!("\n  Descendants of {} ({}):", taxon, descendants.len() - 1);
        for t in descendants.iter().skip(1) {
            println!("    {}", t);
        }
    }
    Ok(())
}

fn cmd_tree(store: &HierarchyStore, args: &[String]) -> CliResult {
    let walker = DescendantWalker::new(store);
    let starts: Vec<&str> = match args.first() {
        Some(taxon) => vec![taxon.as_str()],
        None => store.roots().into_iter().map(|t| t.as_str()).collect(),
    };
    println!();
    for start in starts {
        for (depth, taxon) in walker.descendants_with_depth(start)? {
            println!("  {}{}", " ".repeat(depth * 4), taxon);
        }
    }
    Ok(())
}

fn cmd_roots(store: &HierarchyStore, options: &Options) -> CliResult {
    let roots = store.roots();
    if options.json {
        print_json(&roots);
    } else {
        println!("\n  Roots ({}):", roots.len());
        for root in roots {
            println!("    {}", root);
        }
    }
    Ok(())
}

fn cmd_demo(store: &HierarchyStore) -> CliResult {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║              Taxa v0.1 — Worked Examples                     ║
╚══════════════════════════════════════════════════════════════╝
"#
    );

    let resolver = AncestorResolver::new(store);
    let engine = LcaEngine::with_resolver(resolver);

    println!("Step 1: Ancestor chains");
    println!("{}", "-".repeat(60));
    for taxon in ["Pongo abelii", "Galago allenii"] {
        println!("  {}", resolver.ancestors(taxon)?.labels().join(" → "));
    }

    println!("\nStep 2: Pairwise lowest common ancestors");
    println!("{}", "-".repeat(60));
    let pairs = [
        ("Pan troglodytes", "Tarsius tarsier"),
        ("Pan troglodytes", "Pongo abelii"),
        ("Pan troglodytes", "Strepsirrhini"),
        ("Haplorrhini", "Pan troglodytes"),
    ];
    for (a, b) in pairs {
        println!("  LCA({}, {}) = {}", a, b, engine.lca(a, b)?);
    }

    println!("\nStep 3: Folding over a list");
    println!("{}", "-".repeat(60));
    let taxa = ["Pan troglodytes", "Tarsius tarsier", "Pongo abelii"];
    let (lca, steps) = engine.lca_with_steps(&taxa)?;
    for step in &steps {
        println!("  LCA of {} and {} is {}", step.left, step.right, step.lca);
    }
    println!("  Result: {}", lca);
    println!("  Recursive, from the end of the list: {}", engine.lca_of_set_recursive(&taxa)?);

    println!("\nStep 4: Unknown taxa are errors, not defaults");
    println!("{}", "-".repeat(60));
    match resolver.ancestors("primates") {
        Err(e) => println!("  ancestors(\"primates\") → {}", e),
        Ok(chain) => println!("  unexpected chain: {:?}", chain.labels()),
    }

    println!("\nStep 5: Descendants of Strepsirrhini");
    println!("{}", "-".repeat(60));
    let walker = DescendantWalker::new(store);
    for (depth, taxon) in walker.descendants_with_depth("Strepsirrhini")? {
        println!("  {}{}", " ".repeat(depth * 4), taxon);
    }
    Ok(())
}

