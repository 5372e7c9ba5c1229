use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use utildex::types::Utility;
use utildex::{discover, render};

#[derive(Parser)]
#[command(name = "utildex")]
#[command(about = "Build-time HTML index for a collection of deployed utilities")]
#[command(long_about = "\
Build-time HTML index for a collection of deployed utilities

Your filesystem is the data source. Each immediate child directory of the
root that contains a util.yaml file becomes one card on the index page.

Content structure:

  utilities/
  ├── color-picker/
  │   ├── util.yaml                # name, description, optional slug
  │   └── index.html               # the utility itself (not utildex's concern)
  ├── json-formatter/
  │   └── util.yaml
  └── scripts/                     # no util.yaml = not listed

Metadata keys:
  name          display name (required)
  description   display description (required)
  slug          URL path segment; defaults to the directory name

Links are built as <base-url>/<slug>/; with an empty --base-url the page
uses relative ./<slug>/ links instead.")]
#[command(version)]
struct Cli {
    /// Root directory to scan for utilities
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Public base URL for utilities; empty produces relative links
    #[arg(long, default_value = "", global = true)]
    base_url: String,

    /// Output HTML path
    #[arg(long, default_value = "site/index.html", global = true)]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover utilities and write the rendered index page
    Build,
    /// Discover and validate utilities without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Scanning {}", cli.root.display());
            let utils = discover::discover(&cli.root)?;
            print_listing(&utils, &cli.base_url);

            let index = render::render_index(&cli.base_url, &utils);
            if index.is_empty() {
                return Err("empty index output".into());
            }

            if let Some(parent) = cli.out.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(&cli.out, &index)?;

            println!("==> Wrote {} ({} utilities)", cli.out.display(), utils.len());
        }
        Command::Check => {
            println!("==> Checking {}", cli.root.display());
            let utils = discover::discover(&cli.root)?;
            print_listing(&utils, &cli.base_url);
            println!("==> {} utilities, all metadata valid", utils.len());
        }
    }

    Ok(())
}

fn print_listing(utils: &[Utility], base_url: &str) {
    for util in utils {
        println!("  {} → {}", util.name, render::link_for(base_url, &util.slug));
    }
}
