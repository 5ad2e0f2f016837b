//! icon-catalog CLI: reconcile a design library with local theme SVGs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use icon_catalog::assets::{AssetIndex, Theme};
use icon_catalog::config::CatalogConfig;
use icon_catalog::naming::{split_name_and_size, strip_theme_suffix, to_kebab_key, tokenize};
use icon_catalog::pipeline;
use icon_catalog::remote::FigmaClient;
use icon_catalog::variant::VariantProps;

#[derive(Parser)]
#[command(
    name = "icon-catalog",
    version,
    about = "Build an icon catalog from a design library and local SVGs"
)]
struct Cli {
    /// TOML config file. Flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the library, match local SVGs, and write icons.json and thumbnail tables.
    Build {
        /// Design file key (from the file URL).
        #[arg(long)]
        file_key: Option<String>,

        /// Directory to write the artifacts to.
        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Index local SVGs only and report per-theme and per-context counts.
    Index {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Show how names are tokenized, keyed, and split.
    Name {
        /// Names to inspect (component, set, or folder names).
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Directory containing both theme roots.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Light theme root, relative to the input directory.
    #[arg(long)]
    light_dir: Option<PathBuf>,

    /// Dark theme root, relative to the input directory.
    #[arg(long)]
    dark_dir: Option<PathBuf>,
}

impl InputArgs {
    fn apply(self, config: &mut CatalogConfig) {
        if let Some(dir) = self.input_dir {
            config.input_dir = dir;
        }
        if let Some(dir) = self.light_dir {
            config.light_dir = dir;
        }
        if let Some(dir) = self.dark_dir {
            config.dark_dir = dir;
        }
    }
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    match cli.command {
        Commands::Build {
            file_key,
            output_dir,
            inputs,
        } => {
            if let Some(key) = file_key {
                config.file_key = key;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            inputs.apply(&mut config);

            config.validate()?;
            let token = config.resolve_token()?;
            let client = FigmaClient::new(&config.api_base, &config.file_key, token);

            println!("=== Icon Catalog ===");
            let output = pipeline::run(&config, &client, |stage| println!("\n{stage}"))?;

            println!("\n=== Done ===");
            println!("{}", output.summary);
            println!("\nWrote {}", output.artifacts.icons.display());
        }

        Commands::Index { inputs } => {
            inputs.apply(&mut config);
            let index = AssetIndex::build(
                &config.light_root(),
                &config.dark_root(),
                &config.asset_extension,
            );

            for theme in [Theme::Light, Theme::Dark] {
                let counts = index.context_counts(theme);
                println!(
                    "{theme} SVGs: {} in {} contexts",
                    index.theme(theme).len(),
                    counts.len()
                );
                for (context, count) in &counts {
                    println!("  {context}: {count}");
                }
            }
        }

        Commands::Name { names } => {
            for name in &names {
                let split = split_name_and_size(name);
                let tokens = tokenize(name);
                let props = VariantProps::parse(name);
                let pairs: Vec<String> = props.iter().map(|(k, v)| format!("{k}={v}")).collect();
                println!("\"{name}\"");
                println!("  tokens:       {}", serde_json::to_string(&tokens).into_diagnostic()?);
                println!("  kebab key:    {}", to_kebab_key(name));
                println!("  name / size:  {} / {}", split.name, split.size_or_default());
                println!("  context:      {}", strip_theme_suffix(name));
                println!("  properties:   [{}]", pairs.join(", "));
                println!("  variant role: {}", props.classify());
            }
        }
    }

    Ok(())
}
