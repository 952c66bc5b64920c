mod cli;

use mediatitle::{config, metadata, scanner};
use mediatitle_parser::{ParsedTitle, Parser as TitleParser};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediatitle=debug,mediatitle_parser=trace".to_string()
        } else {
            "mediatitle=info,mediatitle_parser=warn".to_string()
        }
    });

    // Logs go to stderr so stdout stays clean for --json
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse { titles, json } => parse_titles(&titles, cli.config.as_deref(), json),
        Commands::Scan {
            dir,
            depth,
            files,
            json,
        } => scan_dir(&dir, cli.config.as_deref(), depth, files, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::InitConfig { path, force } => init_config(&path, force),
        Commands::Version => {
            println!("mediatitle {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn title_parser(config: &config::Config) -> TitleParser {
    TitleParser::new((&config.parser).into())
}

fn parse_titles(titles: &[String], config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let parser = title_parser(&config);

    let results: Vec<ParsedTitle> = titles.iter().map(|t| parser.parse(t)).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, parsed) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Input:  {}", parsed.original_title());
        println!("Title:  {}", parsed.clean_title());
        println!("Season: {}", display_or_dash(parsed.season_number()));
        println!("Year:   {}", display_or_dash(parsed.year()));
        if let Some(query) = metadata::search_query(parsed) {
            println!("Query:  {}", query);
        }
    }

    Ok(())
}

fn scan_dir(
    dir: &Path,
    config_path: Option<&Path>,
    depth: Option<usize>,
    files: bool,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags override the [scan] section
    if let Some(depth) = depth {
        config.scan.max_depth = depth;
    }
    if files {
        config.scan.include_files = true;
    }
    config::validate_config(&config)?;

    let scanner = scanner::Scanner::new(title_parser(&config), config.scan.clone());
    let entries = scanner.scan(dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let name = entry.path.strip_prefix(dir).unwrap_or(&entry.path);
        println!(
            "{}{} -> {} (season: {}, year: {})",
            name.display(),
            if entry.is_dir { "/" } else { "" },
            entry.parsed.clean_title(),
            display_or_dash(entry.parsed.season_number()),
            display_or_dash(entry.parsed.year()),
        );
    }
    println!("\n{} entries", entries.len());

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  Normalize underscores: {}", config.parser.normalize_underscores);
    println!("  Lenient numerals: {}", config.parser.lenient_numerals);
    println!("  Year scan: {}", config.parser.year_scan);
    println!(
        "  Year range: {}-{}",
        config.parser.min_year, config.parser.max_year
    );
    println!("  Scan depth: {}", config.scan.max_depth);
    println!("  Include files: {}", config.scan.include_files);
    if !config.scan.extensions.is_empty() {
        println!("  Extensions: {}", config.scan.extensions.join(", "));
    }

    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Config file already exists: {:?} (use --force to overwrite)", path);
    }

    config::save_config(path, &config::Config::default())?;
    println!("Wrote default config to {:?}", path);
    Ok(())
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
