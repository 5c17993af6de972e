//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use crate::gematria::gematria;
use crate::grammar::{flatten, rule_trace, Parser, Syllable};
use crate::lexer::strip;
use crate::rules::{all_rules, find_rule};
use crate::shemot::is_sacred_name;
use crate::symbols::{normalize_name, render, Symbol};
use crate::word::Word;

use super::args::{Cli, Commands, ConfigAction};
use super::paths::{config_file_path_with_override, PersistentConfig};
use super::repl;

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let Cli {
        config,
        enable,
        disable,
        command,
        ..
    } = cli;
    let custom = config.as_deref();

    match command {
        Commands::Parse { words, trace, json } => {
            let (parser, _) = load_parser(custom, &enable, &disable)?;
            cmd_parse(&parser, &words, trace, json)
        }
        Commands::Syllabify { words, strict } => {
            let (parser, persisted) = load_parser(custom, &enable, &disable)?;
            cmd_syllabify(&parser, &words, strict || persisted.strict.unwrap_or(false))
        }
        Commands::Analyze { words } => {
            let (parser, _) = load_parser(custom, &enable, &disable)?;
            cmd_analyze(&parser, &words)
        }
        Commands::Gematria { words } => {
            cmd_gematria(&words);
            Ok(())
        }
        Commands::Shemot { words } => {
            cmd_shemot(&words);
            Ok(())
        }
        Commands::Render { names } => cmd_render(&names),
        Commands::Rules => {
            let (parser, _) = load_parser(custom, &enable, &disable)?;
            cmd_rules(&parser);
            Ok(())
        }
        Commands::Repl { strict } => {
            let (parser, persisted) = load_parser(custom, &enable, &disable)?;
            repl::run(parser, strict || persisted.strict.unwrap_or(false))
        }
        Commands::Config { action } => cmd_config(action, custom),
    }
}

/// Build a parser from the persisted config and per-run overrides
pub fn load_parser(
    custom: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<(Parser, PersistentConfig)> {
    let persisted = PersistentConfig::load_from(custom)?;
    let parser = Parser::new(persisted.merge_with_cli(enable, disable));
    Ok((parser, persisted))
}

/// Space-separated symbol names
pub fn format_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.name()).collect::<Vec<_>>().join(" ")
}

/// Syllables as bracketed name groups followed by the dotted Hebrew form
pub fn format_syllables(syllables: &[Syllable]) -> String {
    let groups: Vec<String> = syllables
        .iter()
        .map(|s| format!("[{}]", format_symbols(s)))
        .collect();
    let hebrew: Vec<String> = syllables.iter().map(|s| render(s)).collect();
    format!("{}  {}", groups.join(" "), hebrew.join("\u{00B7}"))
}

/// Parse command
fn cmd_parse(parser: &Parser, words: &[String], trace: bool, json: bool) -> Result<()> {
    let mut records = Vec::new();

    for word in words {
        let parsed = parser
            .parse(word)
            .with_context(|| format!("Failed to parse {}", word))?;
        let symbols = flatten(&parsed);
        let rules = rule_trace(&parsed);

        if json {
            let names: Vec<&str> = symbols.iter().map(|s| s.name()).collect();
            let mut record = json!({ "word": word, "parsed": names });
            if trace {
                record["rules"] = json!(rules);
            }
            records.push(record);
            continue;
        }

        println!("{}  {}", word.cyan().bold(), format_symbols(&symbols));
        if trace {
            println!("  {} {}", "rules:".dimmed(), rules.join(", "));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }
    Ok(())
}

/// Syllabify command
fn cmd_syllabify(parser: &Parser, words: &[String], strict: bool) -> Result<()> {
    for word in words {
        let mut parsed = parser
            .parse(word)
            .with_context(|| format!("Failed to parse {}", word))?;
        let syllables = parser.syllabify(&mut parsed, strict);
        println!("{}  {}", word.cyan().bold(), format_syllables(&syllables));
    }
    Ok(())
}

/// Analyze command
fn cmd_analyze(parser: &Parser, words: &[String]) -> Result<()> {
    for word in words {
        match Word::analyze(parser, word).with_context(|| format!("Failed to parse {}", word))? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => eprintln!("  {}: {} has no letters or vowels", "Skipped".yellow(), word),
        }
    }
    Ok(())
}

/// Gematria command
fn cmd_gematria(words: &[String]) {
    for word in words {
        println!("{}  {}", word.cyan().bold(), gematria(word).to_string().green());
    }
}

/// Shemot command
fn cmd_shemot(words: &[String]) {
    for word in words {
        let status = if is_sacred_name(&strip(word)) {
            "shemot".yellow().bold()
        } else {
            "-".normal()
        };
        println!("{}  {}", word.cyan().bold(), status);
    }
}

/// Render command
fn cmd_render(names: &[String]) -> Result<()> {
    let symbols = names
        .iter()
        .map(|name| normalize_name(name).with_context(|| format!("Unknown symbol name: {}", name)))
        .collect::<Result<Vec<_>>>()?;
    println!("{}", render(&symbols));
    Ok(())
}

/// Rules command
fn cmd_rules(parser: &Parser) {
    let mut current_stage = "";
    for (stage, rule) in all_rules() {
        if stage != current_stage {
            if !current_stage.is_empty() {
                println!();
            }
            println!("{}", stage.bold().underline());
            current_stage = stage;
        }

        let state = if stage != "syllable" && !rule.is_implemented() {
            "open".dimmed()
        } else if parser.allows(rule) {
            "on".green()
        } else {
            "off".red()
        };
        let default = if rule.default_enabled { "" } else { " (off by default)" };
        println!("  {:<40} {}{}", rule.name, state, default.dimmed());
    }
}

/// Config command
fn cmd_config(action: ConfigAction, custom: Option<&Path>) -> Result<()> {
    let mut config = PersistentConfig::load_from(custom)?;

    match action {
        ConfigAction::Show => {}
        ConfigAction::Enable { rule } => {
            check_rule(&rule)?;
            config.parser = config.parser.enable(rule.clone());
            config.save_to(custom)?;
            println!("  Enabled {}", rule.green());
        }
        ConfigAction::Disable { rule } => {
            check_rule(&rule)?;
            config.parser = config.parser.disable(rule.clone());
            config.save_to(custom)?;
            println!("  Disabled {}", rule.red());
        }
        ConfigAction::Reset => {
            config = PersistentConfig::default();
            config.save_to(custom)?;
            println!("{}", "Configuration reset".green().bold());
        }
    }

    println!();
    print_config(&config, custom)
}

fn check_rule(name: &str) -> Result<()> {
    if find_rule(name).is_none() {
        bail!("Unknown rule: {} (see `hebphonics rules`)", name);
    }
    Ok(())
}

/// Print current configuration
fn print_config(config: &PersistentConfig, custom: Option<&Path>) -> Result<()> {
    println!("{}", "Current Configuration:".bold().underline());
    println!();

    let list = |names: &[String]| {
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    };
    println!("  Enabled:  {}", list(&config.parser.enabled).green());
    println!("  Disabled: {}", list(&config.parser.disabled).red());
    println!(
        "  Strict:   {}",
        if config.strict.unwrap_or(false) {
            "enabled".green()
        } else {
            "disabled".red()
        }
    );

    let unknown = config.parser.unknown_rules();
    if !unknown.is_empty() {
        println!("  {}: unknown rules {}", "Warning".yellow(), unknown.join(", "));
    }

    println!();
    let path = config_file_path_with_override(custom)?;
    println!("  Config file: {}", path.display().to_string().cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_syllables() {
        let parser = Parser::default();
        let mut parsed = parser.parse("בְּלִי").unwrap();
        let syllables = parser.syllabify(&mut parsed, false);
        let text = format_syllables(&syllables);
        assert!(text.starts_with("[bet dagesh-qal sheva-na] [lamed hiriq-male-yod eim-qria-yod]"));
        assert!(text.contains('\u{00B7}'));
    }

    #[test]
    fn test_check_rule() {
        assert!(check_rule("sheva-na-start").is_ok());
        assert!(check_rule("syllable-before-vowel").is_ok());
        assert!(check_rule("no-such-rule").is_err());
    }
}
