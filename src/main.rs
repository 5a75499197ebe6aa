//! CLI entry point for finch

use std::io;
use std::process;

use clap::Parser;
use finch::{owner, ConfigError, FilterConfig, OutputMode, Printer, TypeSet, Walker};

#[derive(Parser, Debug)]
#[command(name = "finch")]
#[command(about = "Walk a directory tree and print the entries matching the given filters")]
#[command(version)]
struct Args {
    /// Where to start the walk
    #[arg(default_value = ".")]
    root: String,

    /// Print matching paths (the default action; accepted for find compatibility)
    #[arg(long)]
    print: bool,

    /// Print long-form listings instead of bare paths
    #[arg(short = 'l', long)]
    ls: bool,

    /// Match entries of these types: any combination of b, c, d, p, f, l, s
    #[arg(short = 't', long = "type", value_name = "CHARS")]
    types: Option<String>,

    /// Match entries owned by this user (numeric uid tried first, then account name)
    #[arg(short = 'u', long, value_name = "NAME-OR-UID")]
    user: Option<String>,

    /// Match entries whose owning uid resolves to no known account
    #[arg(long, conflicts_with = "user")]
    nouser: bool,

    /// Match base names against this glob
    #[arg(short = 'n', long, value_name = "GLOB")]
    name: Option<String>,

    /// Match full paths against this glob
    #[arg(short = 'p', long = "path", value_name = "GLOB")]
    path_glob: Option<String>,
}

fn build_config(args: &Args) -> Result<FilterConfig, ConfigError> {
    let mut config = FilterConfig::new();
    if let Some(spec) = &args.types {
        config = config.with_types(TypeSet::parse(spec)?);
    }
    if let Some(user) = &args.user {
        config = config.with_owner(owner::resolve_user(user)?)?;
    }
    if args.nouser {
        config = config.with_unowned()?;
    }
    if let Some(pattern) = &args.name {
        config = config.with_name_pattern(pattern)?;
    }
    if let Some(pattern) = &args.path_glob {
        config = config.with_path_pattern(pattern)?;
    }
    Ok(config)
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("finch: {}", e);
            eprintln!("Try 'finch --help' for more information.");
            process::exit(1);
        }
    };

    let mode = OutputMode::from_flags(args.print, args.ls);
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut printer = Printer::new(mode, stdout.lock(), stderr.lock());

    // Per-node failures surface as diagnostics and never fail the walk;
    // only a broken output channel reaches this error path.
    if let Err(e) = Walker::new(config).walk(&args.root, &mut printer) {
        eprintln!("finch: error writing output: {}", e);
        process::exit(1);
    }
}
