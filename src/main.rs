use clap::{Parser, Subcommand};
use simple_folio::catalog::CATALOG_FILENAME;
use simple_folio::config;
use simple_folio::generate::{self, ASSETS_DIR};
use simple_folio::output::{self, SourceFiles};
use simple_folio::types::Category;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error("Project not found: {category}/{slug}")]
    NotFound { category: Category, slug: String },
}

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup; called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for developer portfolios")]
#[command(long_about = "\
Static site generator for developer portfolios

One table of projects becomes a home page with a carousel per category and
a detail page per project. Optional fields simply hide their section.

Content structure:

  content/
  ├── config.toml      # Site, author and color settings (optional)
  ├── projects.toml    # Project table (optional, stock table if absent)
  └── assets/          # Images, favicon, etc. → copied to output root

Output:

  dist/
  ├── index.html                     # Hero + carousels
  ├── 404.html
  └── <category>/<slug>/index.html   # One per project

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build {
        /// Disable the build cache and rewrite every file
        #[arg(long)]
        no_cache: bool,
    },
    /// Validate config and projects without building
    Check,
    /// Print every project identifier as category/slug
    List {
        /// Only list projects in this category (fullstack, apps)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Print the sections a project's detail page will render
    Show {
        /// Project category (fullstack, apps)
        category: Category,
        /// Project slug
        slug: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { no_cache } => {
            println!("==> Loading {}", cli.source.display());
            let (site_config, catalog) = generate::load_site(&cli.source)?;
            init_thread_pool(&site_config.processing);

            println!("==> Generating HTML → {}", cli.output.display());
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_generate_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = generate::generate(
                &catalog,
                &site_config,
                &cli.source,
                &cli.output,
                !no_cache,
                Some(tx),
            );
            printer.join().ok();
            output::print_generate_summary(&result?);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (site_config, catalog) = generate::load_site(&cli.source)?;
            let files = SourceFiles {
                config_toml: cli.source.join("config.toml").is_file(),
                projects_toml: cli.source.join(CATALOG_FILENAME).is_file(),
                assets_dir: cli.source.join(ASSETS_DIR).is_dir(),
            };
            output::print_check_output(&catalog, &site_config, files);
            println!("==> Content is valid");
        }
        Command::List { category } => {
            let (_, catalog) = generate::load_site(&cli.source)?;
            output::print_list(&catalog, category);
        }
        Command::Show { category, slug } => {
            let (_, catalog) = generate::load_site(&cli.source)?;
            let project = catalog
                .find_by_slug(category, &slug)
                .ok_or_else(|| CliError::NotFound {
                    category,
                    slug: slug.clone(),
                })?;
            output::print_show(project);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores; the user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
