//! mdreader - render markdown documents to HTML.
//!
//! This binary provides the CLI interface to the mdreader crates: it picks a
//! document from a directory (or reads stdin), renders it and writes either
//! a standalone page or a bare fragment.

mod catalog;
mod cli;
mod page;

use catalog::{Catalog, Document};
use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use mdreader_config::Config;
use mdreader_core::Result;
use mdreader_render::Renderer;
use page::{page_file_name, Page};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    setup_logging(&cli.log_level);
    info!("mdreader v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    if cli.should_read_stdin() {
        return run_stdin(cli, &config);
    }

    let dir = cli.dir.as_deref().unwrap_or(config.reader.directory.as_path());
    let catalog = Catalog::scan(dir)?;

    if cli.list {
        let mut stdout = io::stdout().lock();
        for name in catalog.names() {
            writeln!(stdout, "{}", name)?;
        }
        return Ok(());
    }

    if let Some(out_dir) = &cli.all {
        return run_all(cli, &config, &catalog, out_dir);
    }

    let document = catalog.resolve(cli.file.as_deref(), &config.reader.default_document)?;
    info!("Rendering {}", document.path.display());
    let html = render_document(cli, &config, &catalog, &document)?;
    write_output(cli.output.as_deref(), &html)
}

/// Render one catalog document, as a page or a fragment.
fn render_document(
    cli: &Cli,
    config: &Config,
    catalog: &Catalog,
    document: &Document,
) -> Result<String> {
    let content = document.read()?;
    let fragment = mdreader_render::render(&content);

    if !cli.standalone(&config.page) {
        return Ok(fragment);
    }

    let page = Page {
        config: &config.page,
        name: &document.name,
        size: document.size()?,
        modified: Some(document.modified()?),
        documents: catalog.names(),
    };
    Ok(page.render(&fragment))
}

/// Render every catalog document into `out_dir`.
fn run_all(cli: &Cli, config: &Config, catalog: &Catalog, out_dir: &Path) -> Result<()> {
    if catalog.is_empty() {
        return Err(mdreader_core::ReaderError::NoDocuments(
            catalog.dir().to_path_buf(),
        ));
    }

    fs::create_dir_all(out_dir)?;

    for document in catalog.documents() {
        let html = render_document(cli, config, catalog, &document)?;
        let target = out_dir.join(page_file_name(&document.name));
        info!("Writing {}", target.display());
        fs::write(&target, html)?;
    }

    Ok(())
}

/// Process input from stdin.
///
/// Fragments are streamed line by line; a page needs the whole input first.
fn run_stdin(cli: &Cli, config: &Config) -> Result<()> {
    info!("Reading from stdin");
    let stdin = io::stdin();

    if !cli.standalone(&config.page) {
        let output: Box<dyn Write> = match &cli.output {
            Some(path) => Box::new(io::BufWriter::new(fs::File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        };

        let mut renderer = Renderer::new(output);
        for line in stdin.lock().lines() {
            renderer.render_line(&line?)?;
        }
        renderer.finish()?;
        debug!("Wrote {} block(s)", renderer.blocks_written());

        let mut output = renderer.into_inner();
        output.write_all(b"\n")?;
        output.flush()?;
        return Ok(());
    }

    let mut content = String::new();
    stdin.lock().read_to_string(&mut content)?;

    let page = Page {
        config: &config.page,
        name: "stdin",
        size: content.len() as u64,
        modified: None,
        documents: &[],
    };
    let html = page.render(&mdreader_render::render(&content));
    write_output(cli.output.as_deref(), &html)
}

/// Write rendered HTML to a file or stdout.
fn write_output(path: Option<&Path>, html: &str) -> Result<()> {
    match path {
        Some(path) => {
            info!("Writing {}", path.display());
            fs::write(path, html)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            if !html.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
