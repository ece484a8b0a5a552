use clap::{Parser, Subcommand};
use sidegen::{config, output, scan, tree};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sidegen")]
#[command(about = "Sidebar tree generator for VitePress documentation sites")]
#[command(long_about = "\
Sidebar tree generator for VitePress documentation sites

A hand-maintained structure table is the data source: dir rows announce
directories in display order, file rows list the documents inside them, and
the tool turns that flat sequence into the nested sidebar.gen.json the theme
renders.

Docs layout:

  docs/
  ├── config.toml                      # sidegen config (optional)
  ├── index.md                         # homepage (trailing entry, public mode)
  ├── about.md                         # root-level document
  ├── guide/
  │   ├── index.md                     # directory index (first entry of Guide)
  │   └── start.md
  └── .vitepress/
      ├── public_structure.csv         # structure table, public mode
      ├── private_structure.csv        # structure table, private mode
      └── sidebar.gen.json             # generated sidebar tree

Table format (public mode; private mode adds a _scopes column):

  _type,_path
  dir,guide
  file,guide/index.md
  file,guide/start.md
  file,about.md

Run 'sidegen gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Docs root directory
    #[arg(long, default_value = "docs", global = true)]
    docs: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sidebar tree from the structure table
    Build,
    /// Validate the structure table without writing anything
    Check,
    /// Walk the docs directory and regenerate the structure table
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let cfg = config::load_config(&cli.docs)?;
            let vp_dir = cli.docs.join(config::VITEPRESS_DIR);
            let table_path = vp_dir.join(cfg.mode.structure_filename());

            let forest = tree::build_from_path(&table_path, &cfg)?;

            std::fs::create_dir_all(&vp_dir)?;
            let json = serde_json::to_string_pretty(&forest)?;
            std::fs::write(vp_dir.join(config::SIDEBAR_FILENAME), json)?;

            output::print_build_output(&forest, cfg.mode);
            println!(
                "==> Wrote {}",
                vp_dir.join(config::SIDEBAR_FILENAME).display()
            );
        }
        Command::Check => {
            let cfg = config::load_config(&cli.docs)?;
            let table_path = cli
                .docs
                .join(config::VITEPRESS_DIR)
                .join(cfg.mode.structure_filename());

            let forest = tree::build_from_path(&table_path, &cfg)?;

            output::print_build_output(&forest, cfg.mode);
            println!("==> Structure table is valid");
        }
        Command::Scan => {
            let cfg = config::load_config(&cli.docs)?;
            let vp_dir = cli.docs.join(config::VITEPRESS_DIR);
            let table_path = vp_dir.join(cfg.mode.structure_filename());

            let records = scan::scan(&cli.docs)?;
            let table = scan::to_table(&records, cfg.mode);

            std::fs::create_dir_all(&vp_dir)?;
            std::fs::write(&table_path, table)?;

            output::print_scan_output(&records, cfg.mode, &table_path);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
