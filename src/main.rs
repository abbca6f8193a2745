use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use osf_core::config::{Config, OutputFormat};
use osf_core::{encoding, script, ExtendedFiltersBuilder, Mode};
use osf_ws::search::EXTENDED_FILTERS;
use osf_ws::{FunctionCall, GetEquivalentPropertiesFunction, GetSuperClassesFunction, SearchQuery};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "osf", about = "Build OSF search filters and web service parameters")]
struct Cli {
    /// Write debug logs to stderr (RUST_LOG overrides the level).
    #[arg(long, global = true)]
    debug: bool,

    /// Config file to use instead of ~/.config/osf/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the extended_filters value described by WORDS.
    ///
    /// Words: `attr <attribute> <value>`, `attr-uri <attribute> <uri>`,
    /// `any <attribute>`, `type <uri>`, `type+ <uri>`, `dataset <uri>`,
    /// `and`, `or`, `not`, `(`, `)`.
    Build {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print `extended_filters=<value>`.
        #[arg(long)]
        param: bool,
    },
    /// Print the parameters of a search call.
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 10)]
        items: u32,
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long)]
        json: bool,
    },
    /// Print the parameters of a getSuperClasses call.
    SuperClasses {
        #[arg(long)]
        uri: String,
        /// Request class descriptions instead of URIs.
        #[arg(long)]
        descriptions: bool,
        /// Request all super-classes, not only the direct ones.
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the parameters of a getEquivalentProperties call.
    EquivalentProperties {
        #[arg(long)]
        uri: String,
        /// Object properties instead of datatype properties.
        #[arg(long)]
        object: bool,
        #[arg(long)]
        descriptions: bool,
        /// Only direct equivalents.
        #[arg(long)]
        direct: bool,
        #[arg(long)]
        json: bool,
    },
    /// Percent-decode a wire value.
    Decode {
        value: String,
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Reject malformed expressions instead of printing them.
    #[arg(long)]
    strict: bool,
    #[arg(allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("osf debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;

    match cli.command {
        Command::Build { filters, param } => {
            let value = build_filters(&config, &filters)?;
            if param || config.output.show_parameter {
                println!("{EXTENDED_FILTERS}={value}");
            } else {
                println!("{value}");
            }
        }
        Command::Search { filters, query, items, page, json } => {
            let value = build_filters(&config, &filters)?;
            let call = SearchQuery::new().query(query).items(items).page(page).extended_filters(&value);
            print_call(&config, &call, json)?;
        }
        Command::SuperClasses { uri, descriptions, all, json } => {
            let mut call = GetSuperClassesFunction::new().uri(uri);
            if descriptions {
                call = call.get_classes_descriptions();
            }
            if all {
                call = call.all_super_classes();
            }
            print_call(&config, &call, json)?;
        }
        Command::EquivalentProperties { uri, object, descriptions, direct, json } => {
            let mut call = GetEquivalentPropertiesFunction::new().uri(uri);
            if object {
                call = call.get_object_properties();
            }
            if descriptions {
                call = call.get_properties_descriptions();
            }
            if direct {
                call = call.direct_equivalent_properties();
            }
            print_call(&config, &call, json)?;
        }
        Command::Decode { value, times } => {
            let mut decoded = value;
            for _ in 0..times {
                decoded = encoding::urldecode(&decoded)?;
            }
            println!("{decoded}");
        }
    }

    Ok(())
}

fn build_filters(config: &Config, args: &FilterArgs) -> anyhow::Result<String> {
    let mode = if args.strict { Mode::Strict } else { config.filters.mode };
    let steps = script::parse(&args.words)?;
    let builder = script::apply(ExtendedFiltersBuilder::with_mode(mode), &steps);
    Ok(builder.finish()?)
}

fn print_call(config: &Config, call: &dyn FunctionCall, json: bool) -> anyhow::Result<()> {
    call.validate()?;
    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(call.params())?);
    } else {
        println!("{}", call.params().to_query_string());
    }
    Ok(())
}
