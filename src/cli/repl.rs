//! Interactive REPL
//!
//! Every line is a list of words to analyze. Lines starting with `:` are
//! commands that change how words are shown or which rules run.

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

use crate::gematria::gematria;
use crate::grammar::{flatten, rule_trace, Parser};
use crate::lexer::strip;
use crate::rules::find_rule;
use crate::shemot::is_sacred_name;

use super::commands::{format_symbols, format_syllables};
use super::paths::history_path;

const COMMANDS: &[&str] = &[
    ":help", ":quit", ":exit", ":strict", ":trace", ":enable", ":disable", ":rules",
];

/// Result of evaluating one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this and keep going
    Continue(String),
    /// Leave the REPL
    Quit,
}

/// REPL session state
#[derive(Debug, Clone)]
pub struct ReplState {
    /// Parser for the current rule configuration
    pub parser: Parser,
    /// Syllabify in strict mode
    pub strict: bool,
    /// Show the rules that fired
    pub trace: bool,
}

impl ReplState {
    /// Create a new session
    pub fn new(parser: Parser, strict: bool) -> Self {
        Self {
            parser,
            strict,
            trace: false,
        }
    }

    /// Evaluate one line of input
    pub fn eval(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        if line.is_empty() {
            return Outcome::Continue(String::new());
        }
        if line.starts_with(':') {
            return self.command(line);
        }

        let output: Vec<String> = line
            .split_whitespace()
            .map(|word| self.describe(word))
            .collect();
        Outcome::Continue(output.join("\n"))
    }

    fn describe(&self, word: &str) -> String {
        let mut parsed = match self.parser.parse(word) {
            Ok(parsed) => parsed,
            Err(e) => return format!("{}: {}", "Error".red().bold(), e),
        };

        let symbols = flatten(&parsed);
        let syllables = self.parser.syllabify(&mut parsed, self.strict);
        let clean = strip(word);

        let mut out = format!(
            "{}  {}\n  {}\n  gematria {}",
            word.cyan().bold(),
            format_symbols(&symbols),
            format_syllables(&syllables),
            gematria(&clean)
        );
        if is_sacred_name(&clean) {
            out.push_str(&format!("  {}", "shemot".yellow().bold()));
        }
        if self.trace {
            out.push_str(&format!("\n  {} {}", "rules:".dimmed(), rule_trace(&parsed).join(", ")));
        }
        out
    }

    fn command(&mut self, line: &str) -> Outcome {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let arg = parts.next();

        let message = match cmd {
            ":quit" | ":exit" | ":q" => return Outcome::Quit,
            ":help" | ":h" => help_text(),
            ":strict" => {
                self.strict = toggle(self.strict, arg);
                format!("strict syllables {}", on_off(self.strict))
            }
            ":trace" => {
                self.trace = toggle(self.trace, arg);
                format!("rule trace {}", on_off(self.trace))
            }
            ":enable" | ":disable" => match arg {
                Some(name) if find_rule(name).is_some() => {
                    let config = self.parser.config().clone();
                    let config = if cmd == ":enable" {
                        config.enable(name)
                    } else {
                        config.disable(name)
                    };
                    self.parser = Parser::new(config);
                    format!("{} {}", &cmd[1..], name)
                }
                Some(name) => format!("{}: unknown rule {}", "Error".red().bold(), name),
                None => format!("usage: {} <rule>", cmd),
            },
            ":rules" => {
                let config = self.parser.config();
                format!(
                    "enabled: {}\ndisabled: {}",
                    config.enabled.join(", "),
                    config.disabled.join(", ")
                )
            }
            _ => format!("{}: unknown command {} (try :help)", "Error".red().bold(), cmd),
        };
        Outcome::Continue(message)
    }
}

fn toggle(current: bool, arg: Option<&str>) -> bool {
    match arg {
        Some("on") => true,
        Some("off") => false,
        _ => !current,
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn help_text() -> String {
    [
        "Type one or more pointed Hebrew words to analyze them.",
        "",
        "  :strict [on|off]   never break after a hataf vowel",
        "  :trace [on|off]    show the rules that fired",
        "  :enable <rule>     run a rule for this session",
        "  :disable <rule>    skip a rule for this session",
        "  :rules             show rule overrides",
        "  :quit              leave",
    ]
    .join("\n")
}

/// REPL helper: command completion and history hints
pub struct HebphonicsHelper {
    hinter: HistoryHinter,
}

impl HebphonicsHelper {
    /// Create a new helper instance
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
        }
    }
}

impl Default for HebphonicsHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for HebphonicsHelper {}

impl Completer for HebphonicsHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let line = &line[..pos];
        if !line.starts_with(':') || line.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: format!("{} ", cmd),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for HebphonicsHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for HebphonicsHelper {}

impl Validator for HebphonicsHelper {}

/// Run the REPL until `:quit` or end of input
pub fn run(parser: Parser, strict: bool) -> Result<()> {
    print_banner();

    let rustyline_config = Config::builder()
        .auto_add_history(true)
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let mut editor: Editor<HebphonicsHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rustyline_config)?;
    editor.set_helper(Some(HebphonicsHelper::new()));

    let history = history_path().ok();
    if let Some(path) = history.as_ref().filter(|p| p.exists()) {
        let _ = editor.load_history(path);
    }

    let mut state = ReplState::new(parser, strict);
    let prompt = format!("{}> ", "hebphonics".bright_cyan().bold());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => match state.eval(&line) {
                Outcome::Quit => break,
                Outcome::Continue(output) if output.is_empty() => {}
                Outcome::Continue(output) => println!("{}", output),
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}: {:?}", "Readline error".red().bold(), err);
                break;
            }
        }
    }

    if let Some(path) = history {
        if let Err(e) = editor.save_history(&path) {
            eprintln!("{}: Failed to save history: {}", "Warning".yellow(), e);
        }
    }
    Ok(())
}

fn print_banner() {
    println!();
    println!(
        "{}",
        "   hebphonics - Hebrew grammar and syllables".bright_cyan().bold()
    );
    println!();
    println!("  Version: {}", env!("CARGO_PKG_VERSION").green());
    println!("  Type {} for available commands", "':help'".yellow().bold());
    println!(
        "  Type {} or press {} to exit",
        "':quit'".yellow().bold(),
        "Ctrl+D".yellow().bold()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ReplState {
        ReplState::new(Parser::default(), false)
    }

    #[test]
    fn test_quit() {
        assert_eq!(state().eval(":quit"), Outcome::Quit);
        assert_eq!(state().eval("  :exit "), Outcome::Quit);
    }

    #[test]
    fn test_word_output() {
        let Outcome::Continue(out) = state().eval("בְּלִי") else {
            panic!("expected output");
        };
        assert!(out.contains("[bet dagesh-qal sheva-na]"));
        assert!(!out.contains("rules:"));
    }

    #[test]
    fn test_trace_toggle() {
        let mut state = state();
        state.eval(":trace on");
        assert!(state.trace);
        let Outcome::Continue(out) = state.eval("בָּרָא") else {
            panic!("expected output");
        };
        assert!(out.contains("dagesh-qal-bgdkft"));
        state.eval(":trace");
        assert!(!state.trace);
    }

    #[test]
    fn test_disable_rebuilds_parser() {
        let mut state = state();
        state.eval(":disable vowel-holam-haser-default");
        assert!(state
            .parser
            .config()
            .disabled
            .contains(&"vowel-holam-haser-default".to_string()));

        let Outcome::Continue(out) = state.eval(":disable nope") else {
            panic!("expected output");
        };
        assert!(out.contains("unknown rule"));
    }

    #[test]
    fn test_lex_error_is_reported() {
        let Outcome::Continue(out) = state().eval("\u{05B8}") else {
            panic!("expected output");
        };
        assert!(out.contains("no base letter"));
    }
}
