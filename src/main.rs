//! Vision Forge CLI
//!
//! Usage:
//!   vision-forge [OPTIONS] [INDUSTRY]
//!
//! Options:
//!   -s, --scale <SCALE>     Scale label: Startup, Growth, or Enterprise
//!   -c, --catalog <FILE>    Custom catalog file (TOML format)
//!   -r, --raw               Print the diagram source without the code fence
//!   -l, --list              List the catalog's industry keys
//!   -h, --help              Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use vision_forge::{resolve_with, select, Catalog, ScaleTier};

#[derive(Parser)]
#[command(name = "vision-forge")]
#[command(about = "Industry-tailored architecture blueprints as Mermaid source")]
struct Cli {
    /// Industry text (reads from stdin if not provided)
    industry: Option<String>,

    /// Scale label: Startup, Growth, or Enterprise
    #[arg(short, long, default_value = "Enterprise")]
    scale: String,

    /// Custom catalog file (TOML format)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Print the diagram source without the code fence
    #[arg(short, long)]
    raw: bool,

    /// List the catalog's industry keys
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load catalog
    let catalog = match &cli.catalog {
        Some(path) => match Catalog::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Catalog::builtin().clone(),
    };

    if cli.list {
        for key in catalog.industries() {
            println!("{key}");
        }
        return;
    }

    // If no industry argument and stdin is a terminal (interactive), show intro help
    if cli.industry.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let industry = match cli.industry {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if cli.raw {
        let entry = select(&catalog, &industry);
        let tier = ScaleTier::parse(&cli.scale).unwrap_or(ScaleTier::Enterprise);
        let source = entry.variant(tier);
        println!("{}", source.strip_suffix('\n').unwrap_or(source));
    } else {
        println!("{}", resolve_with(&catalog, &industry, &cli.scale));
    }
}

fn print_intro() {
    println!(
        r#"Vision Forge - industry-tailored architecture blueprints

USAGE:
    vision-forge [OPTIONS] [INDUSTRY]
    echo '<industry>' | vision-forge

OPTIONS:
    -s, --scale      Scale label: Startup, Growth, or Enterprise (default)
    -c, --catalog    Custom catalog file (TOML format)
    -r, --raw        Print the diagram source without the code fence
    -l, --list       List the catalog's industry keys
    -h, --help       Print help

QUICK START:
    vision-forge fintech --scale Growth

This prints a fenced Mermaid block describing a growth-phase fintech
architecture. Any industry text works; unmatched industries get a generic
blueprint. Run --list to see the built-in industry keys."#
    );
}
