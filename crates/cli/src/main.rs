//! EchoBiz command-line front end
//!
//! Reads transcripts (one per line on stdin, or a single transcript from the
//! arguments), interprets them and keeps an in-memory ledger history.
//!
//! Configuration priority: env vars > config/{env}.yaml > config/default.yaml > defaults.
//! `ECHOBIZ_CONFIG` points at a single settings file instead.

mod commands;

use anyhow::Context;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use echobiz_config::{load_settings, Settings};
use echobiz_core::{
    history_line, CaptureController, CaptureOutcome, Language, LedgerEntry, LedgerHistory,
    Notice, Rejection,
};
use echobiz_text_processing::{CommandInterpreter, InterpreterConfig, Lexicon};

use commands::{Command, ManualEntry, USAGE};

/// One line of machine-readable output
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Report<'a> {
    Recorded {
        entry: &'a LedgerEntry,
        notice: Notice,
    },
    Rejected {
        rejection: Rejection,
        notice: Notice,
    },
    Invalid {
        notice: Notice,
    },
}

struct Shell {
    settings: Settings,
    interpreter: CommandInterpreter,
    capture: CaptureController,
    history: LedgerHistory,
    json: bool,
}

impl Shell {
    fn handle(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let Some(command) = commands::parse(line) else {
            return Ok(());
        };

        match command {
            Command::Transcript(transcript) => self.transcript(&transcript, out),
            Command::Manual(entry) => self.manual(&entry, out),
            Command::History => self.print_history(out),
            Command::Balance => {
                writeln!(out, "Net balance: ₹{}", self.history.net_balance())?;
                Ok(())
            }
            Command::Stock(item) => {
                writeln!(out, "{}: {:+}", item, self.history.stock_delta(&item))?;
                Ok(())
            }
            Command::Examples => {
                for example in self.settings.engine.language.example_commands() {
                    writeln!(out, "  {}", example)?;
                }
                Ok(())
            }
            Command::Language(code) => self.switch_language(&code, out),
            Command::Help => {
                writeln!(out, "{}", USAGE)?;
                Ok(())
            }
            Command::Unknown(name) => {
                writeln!(out, "Unknown command /{}\n{}", name, USAGE)?;
                Ok(())
            }
        }
    }

    /// Run a typed transcript through a capture session, as a recogniser would
    fn transcript(&mut self, transcript: &str, out: &mut impl Write) -> anyhow::Result<()> {
        let session = match self.capture.start() {
            Ok(session) => session,
            Err(err) => return self.report(Report::Invalid { notice: Notice::capture_error(&err) }, out),
        };

        let text = match self
            .capture
            .finish(session, CaptureOutcome::Transcript(transcript.to_string()))
        {
            Some(CaptureOutcome::Transcript(text)) => text,
            Some(CaptureOutcome::Error(err)) => {
                return self.report(Report::Invalid { notice: Notice::capture_error(&err) }, out)
            }
            Some(CaptureOutcome::Ended) | None => return Ok(()),
        };

        match self.interpreter.interpret(&text) {
            Ok(entry) => {
                let notice = Notice::recorded(&entry);
                let entry = self.history.record(entry);
                let report = Report::Recorded { entry, notice };
                emit(&report, self.json, out)
            }
            Err(rejection) => {
                let notice = Notice::rejected(&rejection);
                self.report(Report::Rejected { rejection, notice }, out)
            }
        }
    }

    fn manual(&mut self, entry: &ManualEntry, out: &mut impl Write) -> anyhow::Result<()> {
        match entry.build() {
            Ok(entry) => {
                let notice = Notice::recorded(&entry);
                let entry = self.history.record(entry);
                emit(&Report::Recorded { entry, notice }, self.json, out)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Manual entry rejected");
                self.report(Report::Invalid { notice: Notice::error(&err) }, out)
            }
        }
    }

    fn switch_language(&mut self, code: &str, out: &mut impl Write) -> anyhow::Result<()> {
        match Language::from_code(code) {
            Some(language) => {
                self.settings.engine.language = language;
                writeln!(out, "{}", language.greeting())?;
            }
            None => {
                let known: Vec<&str> = Language::ALL.iter().map(Language::code).collect();
                writeln!(out, "Unknown language {:?}, choose one of {}", code, known.join(", "))?;
            }
        }
        Ok(())
    }

    fn report(&self, report: Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
        emit(&report, self.json, out)
    }

    fn print_history(&self, out: &mut impl Write) -> anyhow::Result<()> {
        let recent = self.history.recent(self.settings.engine.history_display_limit);
        if self.json {
            writeln!(out, "{}", serde_json::to_string(recent)?)?;
            return Ok(());
        }
        if recent.is_empty() {
            writeln!(out, "No transactions yet")?;
        }
        for entry in recent {
            writeln!(
                out,
                "{}  {}",
                entry.occurred_at().format("%H:%M"),
                history_line(entry)
            )?;
        }
        Ok(())
    }
}

fn emit(report: &Report<'_>, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
        return Ok(());
    }
    let notice = match report {
        Report::Recorded { notice, .. }
        | Report::Rejected { notice, .. }
        | Report::Invalid { notice } => notice,
    };
    writeln!(out, "{}", notice)?;
    Ok(())
}

fn load_config() -> (Settings, Option<String>) {
    let env = std::env::var("ECHOBIZ_ENV").ok();
    let loaded = match std::env::var("ECHOBIZ_CONFIG") {
        Ok(path) => Settings::from_file(&path),
        Err(_) => load_settings(env.as_deref()),
    };

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };
    (settings, env)
}

fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("echobiz={}", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    // Logs go to stderr; stdout carries acknowledgements
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(io::stderr).boxed()
    };
    subscriber.with(fmt_layer).init();
}

fn load_lexicon(settings: &Settings) -> anyhow::Result<Lexicon> {
    match &settings.engine.lexicon_path {
        Some(path) if Path::new(path).exists() => {
            let lexicon = Lexicon::load(path)
                .with_context(|| format!("loading lexicon from {}", path))?;
            tracing::info!(path = %path, "Loaded lexicon");
            Ok(lexicon)
        }
        _ => Ok(Lexicon::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let (settings, env) = load_config();
    init_tracing(&settings);

    tracing::info!(
        environment = ?settings.environment,
        config_path = env.as_deref().unwrap_or("default"),
        language = %settings.engine.language,
        "Configuration loaded"
    );

    let lexicon = load_lexicon(&settings)?;
    let interpreter = CommandInterpreter::new(
        lexicon,
        InterpreterConfig {
            fallbacks: settings.engine.fallbacks.clone(),
            devanagari_names: settings.engine.devanagari_names,
        },
    )
    .context("building command interpreter")?;

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    args.retain(|arg| arg != "--json");

    let mut shell = Shell {
        settings,
        interpreter,
        capture: CaptureController::default(),
        history: LedgerHistory::new(),
        json,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.is_empty() {
        return shell.handle(&args.join(" "), &mut out);
    }

    if !json {
        writeln!(out, "{}", shell.settings.engine.language.greeting())?;
    }
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        shell.handle(&line, &mut out)?;
    }

    if !json && !shell.history.is_empty() {
        writeln!(out, "\nRecent transactions")?;
        shell.print_history(&mut out)?;
    }
    Ok(())
}
