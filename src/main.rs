use std::{net::SocketAddr, path::Path, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simscan::{
    cli::{Cli, Command, CompareArgs, ScanArgs, ServeArgs},
    corpus,
    engine::{self, EngineParams},
    error::{self, Error},
    render::{self, HtmlRenderer},
    scoring,
    server::{self, AppState},
    stopwords::StopWordSet,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("SIMSCAN_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Scan(args) => cmd_scan(&args),
        Command::Compare(args) => cmd_compare(&args),
        Command::Serve(args) => cmd_serve(&args),
        Command::Completions(args) => {
            args.generate();
            Ok(())
        }
    }
}

fn resolve_stop_words(
    file: Option<&Path>,
    disabled: bool,
) -> error::Result<StopWordSet> {
    if disabled {
        return Ok(StopWordSet::none());
    }
    match file {
        Some(path) => StopWordSet::from_file(path),
        None => Ok(StopWordSet::default()),
    }
}

fn build_include(
    pattern: Option<&str>,
) -> error::Result<Option<globset::GlobSet>> {
    let Some(pattern) = pattern else {
        return Ok(None);
    };
    let glob = globset::Glob::new(pattern).map_err(|e| {
        Error::Config(format!("invalid include pattern: {e}"))
    })?;
    let mut builder = globset::GlobSetBuilder::new();
    builder.add(glob);
    let set = builder.build().map_err(|e| {
        Error::Config(format!("invalid include pattern: {e}"))
    })?;
    Ok(Some(set))
}

fn cmd_scan(args: &ScanArgs) -> error::Result<()> {
    let include = build_include(args.include.as_deref())?;
    let stop_words =
        resolve_stop_words(args.stop_words.as_deref(), args.no_stop_words)?;

    let documents = corpus::load_corpus(&args.folder, include.as_ref())?;
    eprintln!(
        "Loaded {} document(s) from {}",
        documents.len(),
        args.folder.display()
    );

    let params = EngineParams {
        min_length: args.min_length,
        top_n: args.top,
        stop_words,
    };
    let report = engine::rank(&documents, &params);

    if let Some(ref path) = args.html {
        let renderer = HtmlRenderer::new("simscan report");
        let page = renderer
            .render_report(&args.folder.display().to_string(), &report);
        std::fs::write(path, page)?;
        eprintln!("Wrote HTML report to {}", path.display());
    }

    if args.json {
        println!("{}", render::format_json(&report)?);
    } else {
        render::format_human(&report, args.fragments);
    }

    Ok(())
}

fn cmd_compare(args: &CompareArgs) -> error::Result<()> {
    let stop_words =
        resolve_stop_words(args.stop_words.as_deref(), args.no_stop_words)?;

    let doc_a = corpus::load_document(&args.file_a)?;
    let doc_b = corpus::load_document(&args.file_b)?;

    let (similarity, fragments) = scoring::score_pair(
        &doc_a.text,
        &doc_b.text,
        args.min_length,
        &stop_words,
    );

    if args.json {
        println!(
            "{}",
            render::format_compare_json(
                &doc_a.id, &doc_b.id, similarity, &fragments
            )?
        );
    } else {
        println!(
            "{} <-> {}: {:.0}% similarity",
            doc_a.id, doc_b.id, similarity
        );
        for fragment in &fragments {
            println!("  | {}", fragment.text.trim());
        }
        println!("\n{} fragment(s)", fragments.len());
    }

    Ok(())
}

fn cmd_serve(args: &ServeArgs) -> error::Result<()> {
    let addr: SocketAddr = args.addr.parse().map_err(|e| {
        Error::Config(format!("invalid listen address {}: {e}", args.addr))
    })?;

    if !args.folder.is_dir() {
        return Err(Error::CorpusDir(args.folder.clone()));
    }

    let state = AppState {
        default_folder: args.folder.clone(),
        params: Arc::new(EngineParams {
            min_length: args.min_length,
            top_n: args.top,
            stop_words: StopWordSet::default(),
        }),
        renderer: Arc::new(HtmlRenderer::new("simscan report")),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            Error::Config(format!("failed to start tokio runtime: {e}"))
        })?;

    runtime.block_on(server::serve(addr, state))
}
