use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use datavec_legacy::{Family, LegacyNameRegistry, LegacyTagRewriter, ResolvedType, ResolverConfig};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "legacy-tool")]
#[command(about = "Inspect legacy type tags and upgrade legacy documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every family and the size of its legacy table
    Families,
    /// Print the legacy table of one family
    List { family: String },
    /// Resolve a single tag
    Lookup { family: String, tag: String },
    /// Rewrite a document (one node or an array of nodes) to canonical tags
    Upgrade {
        #[arg(long)]
        family: String,
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, default_value = datavec_legacy::DEFAULT_TYPE_KEY)]
        type_key: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Families => {
            for family in Family::ALL {
                let registry = LegacyNameRegistry::for_family(family);
                println!("{:<20} {:>3}  {}", family, registry.len(), family.base_type());
            }
            Ok(())
        }
        Command::List { family } => {
            let family = parse_family(&family)?;
            for (legacy, canonical) in LegacyNameRegistry::for_family(family).entries() {
                println!("{} -> {}", legacy, canonical);
            }
            Ok(())
        }
        Command::Lookup { family, tag } => {
            let family = parse_family(&family)?;
            match LegacyNameRegistry::for_family(family).resolve(&tag) {
                ResolvedType::Legacy { canonical, .. } => println!("{}", canonical),
                ResolvedType::Passthrough(tag) => {
                    println!("{} (not a legacy {} tag, unchanged)", tag, family)
                }
            }
            Ok(())
        }
        Command::Upgrade {
            family,
            input,
            out,
            type_key,
        } => upgrade(&family, &input, out.as_deref(), &type_key),
    }
}

fn parse_family(name: &str) -> Result<Family> {
    name.parse::<Family>().map_err(|_| {
        let known = Family::ALL
            .iter()
            .map(|family| family.name())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("Unknown family '{}'. Known families: {}", name, known)
    })
}

fn upgrade(family: &str, input: &Path, out: Option<&Path>, type_key: &str) -> Result<()> {
    let family = parse_family(family)?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;
    let document: JsonValue = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse '{}' as JSON", input.display()))?;

    let rewriter =
        LegacyTagRewriter::with_config(family, ResolverConfig::new().type_key(type_key));
    let upgraded = rewriter
        .normalize_all(&document)
        .with_context(|| format!("Failed to upgrade '{}'", input.display()))?;
    let rendered = serde_json::to_string_pretty(&upgraded)?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create parent directory '{}'", parent.display())
                })?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            println!("Upgraded document written to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
