//! CLI argument definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hebphonics")]
#[command(about = "Grammatical parser and syllabifier for vowel-pointed Hebrew")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable a rule for this run (repeatable)
    #[arg(long = "enable", value_name = "RULE", global = true)]
    pub enable: Vec<String>,

    /// Disable a rule for this run (repeatable)
    #[arg(long = "disable", value_name = "RULE", global = true)]
    pub disable: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse words and print their grammatical symbols
    Parse {
        /// Words to parse
        #[arg(required = true)]
        words: Vec<String>,

        /// Show the rules that fired
        #[arg(short, long)]
        trace: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Split words into syllables
    Syllabify {
        /// Words to syllabify
        #[arg(required = true)]
        words: Vec<String>,

        /// Never break right after a hataf vowel
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the full analysis record of each word as JSON
    Analyze {
        /// Words to analyze
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the numerical value of each word
    Gematria {
        /// Words to evaluate
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Report whether each word is one of the names of God
    Shemot {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Render grammatical names back into Hebrew text
    Render {
        /// Symbol names (spelling variants accepted)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List every rule with its stage and state
    Rules,

    /// Launch interactive REPL
    Repl {
        /// Never break right after a hataf vowel
        #[arg(short, long)]
        strict: bool,
    },

    /// Show or update the persisted rule configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the config file and its contents
    Show,
    /// Enable a rule in every run
    Enable {
        /// Rule name
        rule: String,
    },
    /// Disable a rule in every run
    Disable {
        /// Rule name
        rule: String,
    },
    /// Reset configuration to defaults
    Reset,
}
