use clap::{Parser, Subcommand};

use translit_cli::commands::{convert_ops, rules_ops};

#[derive(Parser)]
#[command(name = "translit", about = "Cyrillic to Latin transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text arguments, or stdin line by line
    Convert {
        /// Text to transliterate (reads stdin when omitted)
        texts: Vec<String>,
        /// Custom rules TOML file
        #[arg(long)]
        rules: Option<String>,
    },
    /// Show the buffer after each transliteration pass
    Explain {
        /// Text to explain
        text: String,
        /// Custom rules TOML file
        #[arg(long)]
        rules: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rule table operations
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Subcommand)]
enum RulesCommand {
    /// Print the default rules TOML
    Export,
    /// Validate a custom rules TOML file
    Validate {
        /// Rules TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { texts, rules } => convert_ops::convert_cmd(&texts, rules.as_deref()),
        Command::Explain { text, rules, json } => {
            convert_ops::explain_cmd(&text, rules.as_deref(), json)
        }
        Command::Rules { command } => match command {
            RulesCommand::Export => rules_ops::rules_export(),
            RulesCommand::Validate { file } => rules_ops::rules_validate(&file),
        },
    }
}
