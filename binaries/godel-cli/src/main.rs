//! Gödel Numbering Playground CLI
//!
//! Encode statements, decode numbers, and build self-referential paradoxes.

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use godel_config::ConfigLoader;
use godel_core::{EngineConfig, GodelEngine, TableProfile};
use godel_paradox::{analyze, ParadoxAnalysis, ParadoxGenerator, SelfReference, DEFAULT_PLACEHOLDER};

/// Statements run by `godel demo`
const DEMO_STATEMENTS: &[&str] = &[
    "0=0",
    "S(0)",
    "0+0=0",
    "x=0",
    "∀x(x=x)",
    "(x=0)→(x+x=0)",
    "S(S(0))=2",
    "∀x∀y(x+y=y+x)",
    "¬(0=1)",
    "∃x(x=0)",
];

#[derive(Parser)]
#[command(name = "godel")]
#[command(about = "Gödel numbering playground - statements as numbers, numbers as statements")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/godel/config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Symbol table profile: full or simplified
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Extra symbol binding, e.g. `q=71` (repeatable)
    #[arg(long = "add-symbol", global = true)]
    add_symbol: Vec<String>,

    /// Print records as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a statement to its Gödel number
    Encode {
        statement: String,
    },

    /// Decode a Gödel number back to a statement
    Decode {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },

    /// Show the symbol table
    Symbols,

    /// Build a paradox from a named template
    Paradox {
        /// Template key (see `godel templates`)
        template: String,

        /// Replace the template text
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Build a self-referential statement from your own text
    Custom {
        text: String,

        #[arg(short, long, default_value = DEFAULT_PLACEHOLDER)]
        placeholder: String,
    },

    /// List paradox templates
    Templates,

    /// Estimate the size of a Gödel number for a statement length
    Estimate {
        length: usize,
    },

    /// Encode and decode a set of demo statements
    Demo,
}

/// `godel` prefix-matches every godel_* crate target
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "godel=debug"
    } else {
        "godel=info"
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = default_directive(verbose);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let engine = build_engine(&cli)?;

    match cli.command {
        Commands::Encode { statement } => cmd_encode(&engine, &statement, cli.json),
        Commands::Decode { number } => cmd_decode(&engine, &number, cli.json),
        Commands::Symbols => cmd_symbols(&engine, cli.json),
        Commands::Paradox { template, text } => cmd_paradox(&engine, &template, text.as_deref(), cli.json),
        Commands::Custom { text, placeholder } => cmd_custom(&engine, &text, &placeholder, cli.json),
        Commands::Templates => cmd_templates(&engine, cli.json),
        Commands::Estimate { length } => cmd_estimate(&engine, length, cli.json),
        Commands::Demo => cmd_demo(&engine),
    }
}

fn build_engine(cli: &Cli) -> Result<GodelEngine> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::at_path(path),
        None => ConfigLoader::default_location(),
    };
    tracing::debug!(path = %loader.path().display(), "loading config");
    let mut config: EngineConfig = loader.load()?;

    if let Some(profile) = &cli.profile {
        let profile: TableProfile = profile.parse()?;
        config.profile = profile;
    }

    let mut engine = GodelEngine::new(config)?;
    for binding in &cli.add_symbol {
        let (symbol, code) = parse_binding(binding)?;
        engine.add_symbol(symbol, code)?;
    }
    Ok(engine)
}

/// `c=71` → ('c', 71)
fn parse_binding(binding: &str) -> Result<(char, u32)> {
    let Some((symbol, code)) = binding.rsplit_once('=') else {
        anyhow::bail!("Symbol binding must be 'symbol=code', got '{}'", binding);
    };

    let mut chars = symbol.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        anyhow::bail!("Symbol must be a single character, got '{}'", symbol);
    };

    Ok((c, code.trim().parse()?))
}

#[derive(Serialize)]
struct ParadoxReport<'a> {
    paradox: &'a SelfReference,
    analysis: &'a ParadoxAnalysis,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_encode(engine: &GodelEngine, statement: &str, json: bool) -> Result<()> {
    let (_, record) = engine.encode(statement)?;
    if json {
        return print_json(&*record);
    }

    println!("\n  ENCODE");
    println!("  ======\n");
    println!("{}", render::encoding(&record));
    Ok(())
}

fn cmd_decode(engine: &GodelEngine, number: &str, json: bool) -> Result<()> {
    let (_, record) = engine.decode_str(number)?;
    if json {
        return print_json(&*record);
    }

    println!("\n  DECODE");
    println!("  ======\n");
    println!("{}", render::decoding(&record));
    Ok(())
}

fn cmd_symbols(engine: &GodelEngine, json: bool) -> Result<()> {
    let entries = engine.symbol_table();
    if json {
        return print_json(&entries);
    }

    println!("\n  SYMBOL TABLE ({})", engine.config().profile.name());
    println!("  ============\n");
    println!("{}", render::symbol_table(&entries));
    if let Some(max) = engine.config().effective_max_length() {
        println!("\n  Maximum statement length: {}", max);
    }
    println!("  Unknown symbols encode with code {}", engine.config().fallback_code);
    Ok(())
}

fn cmd_paradox(engine: &GodelEngine, template: &str, text: Option<&str>, json: bool) -> Result<()> {
    let generator = ParadoxGenerator::new(engine);
    let record = generator.generate(template, text)?;
    let analysis = analyze(&record);

    if json {
        return print_json(&ParadoxReport { paradox: &record, analysis: &analysis });
    }

    println!("\n  PARADOX: {}", record.template.name);
    println!("  =========\n");
    println!("{}", render::self_reference(&record));
    println!("\n{}", render::analysis(&analysis));
    Ok(())
}

fn cmd_custom(engine: &GodelEngine, text: &str, placeholder: &str, json: bool) -> Result<()> {
    let generator = ParadoxGenerator::new(engine);
    let record = generator.build_self_referential(text, placeholder)?;
    let analysis = analyze(&record);

    if json {
        return print_json(&ParadoxReport { paradox: &record, analysis: &analysis });
    }

    println!("\n  CUSTOM SELF-REFERENCE");
    println!("  =====================\n");
    println!("{}", render::self_reference(&record));
    println!("\n{}", render::analysis(&analysis));
    Ok(())
}

fn cmd_templates(engine: &GodelEngine, json: bool) -> Result<()> {
    let generator = ParadoxGenerator::new(engine);
    if json {
        return print_json(&generator.templates());
    }

    println!("\n  PARADOX TEMPLATES");
    println!("  =================\n");
    for t in generator.templates() {
        println!("  {:<14} {}", t.key, t.name);
        println!("  {:<14} \"{}\"", "", t.template);
        println!("  {:<14} {}\n", "", t.description);
    }
    Ok(())
}

fn cmd_estimate(engine: &GodelEngine, length: usize, json: bool) -> Result<()> {
    let estimate = engine.estimate_size(length);
    if json {
        return print_json(&estimate);
    }

    println!("\n  SIZE ESTIMATE");
    println!("  =============\n");
    println!("  Statement length:   {}", estimate.statement_length);
    println!("  Average code:       {}", estimate.average_code);
    println!("  Approximate digits: {}", estimate.digits);
    println!("  Magnitude:          {}", estimate.scientific_notation);
    Ok(())
}

fn cmd_demo(engine: &GodelEngine) -> Result<()> {
    println!("\n  ROUND-TRIP DEMO ({})", engine.config().profile.name());
    println!("  ===============\n");

    let mut passed = 0;
    for &statement in DEMO_STATEMENTS {
        let encoded = engine.encode(statement);
        let (number, _) = match encoded {
            Ok(ok) => ok,
            Err(e) => {
                println!("  [SKIP] {:<16} {}", statement, e);
                continue;
            }
        };

        let (decoded, _) = engine.decode_natural(&number)?;
        let verdict = if decoded == statement {
            passed += 1;
            "OK  "
        } else {
            "DIFF"
        };
        println!("  [{}] {:<16} → {} digits → {}", verdict, statement, number.to_str_radix(10).len(), decoded);
    }

    println!("\n  {}/{} statements survived the round trip", passed, DEMO_STATEMENTS.len());
    Ok(())
}
