//! Command line and environment configuration.
//!
//! Every flag can also be set through the environment, and a `.env` file in
//! the working directory is read before parsing.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::catalog::Catalog;
use crate::data;
use crate::error::DataError;
use crate::quiz::QuestionBank;
use crate::server::{DEFAULT_PORT, ServerConfig};

/// Deployment mode. Development mode exposes internal error details.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    #[default]
    Production,
    Development,
}

#[derive(Parser, Debug)]
#[command(version, about = "Browse Indian plants and quiz yourself on them")]
pub struct Cli {
    /// JSON file with the plant catalog (defaults to the bundled catalog)
    #[arg(long, env = "PLANTS_FILE", global = true)]
    pub plants: Option<PathBuf>,

    /// JSON file with the quiz questions (defaults to the bundled bank)
    #[arg(long, env = "QUIZ_FILE", global = true)]
    pub quiz: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web build and the JSON API
    Serve(ServeArgs),
    /// Browse the catalog and take the quiz in the terminal (default)
    Explore(ExploreArgs),
    /// Validate the data files and exit
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Directory containing the web build
    #[arg(long, env = "STATIC_DIR", default_value = "build")]
    pub static_dir: PathBuf,

    #[arg(long, env = "APP_ENV", value_enum, default_value_t = Mode::Production)]
    pub mode: Mode,
}

#[derive(Args, Debug, Default)]
pub struct ExploreArgs {
    /// Write logs to this file; the terminal UI otherwise discards them
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse the command line after loading `.env`, if present.
    pub fn load() -> Self {
        let _ = dotenvy::dotenv();
        Self::parse()
    }

    pub fn load_catalog(&self) -> Result<Catalog, DataError> {
        match &self.plants {
            Some(path) => data::load_catalog_from_json(path),
            None => data::bundled_catalog(),
        }
    }

    pub fn load_question_bank(&self) -> Result<QuestionBank, DataError> {
        match &self.quiz {
            Some(path) => data::load_question_bank_from_json(path),
            None => data::bundled_question_bank(),
        }
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            mode: args.mode,
        }
    }
}
