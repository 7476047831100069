use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "title-proper")]
#[command(about = "Apply title-case and other text filters to input values")]
pub struct CliConfig {
    /// Values to filter; reads stdin line by line when empty
    pub text: Vec<String>,

    #[arg(long, default_value = "title-proper")]
    pub filter: String,

    #[arg(
        long,
        help = "Parse each input as a JSON value; non-strings pass through unchanged"
    )]
    pub json: bool,

    #[arg(long, help = "List available filters and exit")]
    pub list: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
