use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{OutputArgs, RenderArgs};

#[derive(Parser)]
#[command(
    name = "graphqlviz",
    about = "Visualize GraphQL schemas as Graphviz diagrams",
    long_about = "graphqlviz reads the result of a GraphQL introspection query and writes a \
                  Graphviz DOT document describing the schema: one record node per type with \
                  a row per field, and edges for field references, argument inputs and the \
                  members of unions and interfaces. Pipe the output into `dot -Tpng` to get an \
                  image.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an introspection result as a DOT graph
    ///
    /// Reads the JSON result of an introspection query from a file or stdin.
    /// The `__schema` object may be nested anywhere inside the document, so
    /// raw HTTP responses with a `data` envelope work as they are.
    #[command(
        long_about = "Render an introspection result as a Graphviz DOT graph. INPUT is a JSON \
                      file holding the result of the introspection query printed by `graphqlviz \
                      query`; when INPUT is omitted or `-`, the document is read from stdin. \
                      The theme controls colors, grouping, labels and hidden categories and can \
                      be adjusted with a theme file and individual `--set` overrides."
    )]
    Render {
        /// Introspection result file (stdin if omitted or `-`)
        #[arg(value_name = "INPUT", env = "GRAPHQLVIZ_INPUT")]
        input: Option<PathBuf>,

        #[command(flatten)]
        render: RenderArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Echo the raw input to stderr when rendering fails
        #[arg(short, long, env = "GRAPHQLVIZ_VERBOSE")]
        verbose: bool,
    },

    /// Print the introspection query to send to a GraphQL server
    ///
    /// The query is wrapped in a JSON request body, ready for
    /// `curl -d @- -H 'Content-Type: application/json' <endpoint>`.
    Query {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the default theme
    ///
    /// Useful as a starting point for a theme file: save the output, edit the
    /// keys you care about and pass it to `render --theme`.
    Theme {
        /// Theme file format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_THEME_FORMAT,
            env = "GRAPHQLVIZ_THEME_FORMAT"
        )]
        format: ThemeFormat,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ThemeFormat {
    Json,
    Toml,
}
