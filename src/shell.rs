//! Line-oriented search session over a leads file.
//!
//! Each input line is a query. Lines starting with `:` are commands:
//! `:history`, `:suggest <text>`, `:reload`, `:clear`, `:help`, `:quit`.
//! History lives as long as the session.

use crate::engine::LeadSearch;
use crate::lead::{LeadRecord, load_leads};
use crate::output::{print_matches, print_stats, print_suggestions};
use anyhow::Result;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorSpec, WriteColor};
use tracing::{info, warn};

const PROMPT: &str = "leadscan> ";

const HELP: &str = "\
Type a query to search. Commands:
  :history          show recent queries
  :suggest <text>   autocomplete suggestions
  :reload           re-read the leads file and rebuild the index
  :clear            forget search history
  :quit             leave the session";

enum Command<'a> {
    Search(&'a str),
    History,
    Suggest(&'a str),
    Reload,
    Clear,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line);
    };

    let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    match name {
        "history" | "h" => Command::History,
        "suggest" | "s" => Command::Suggest(arg.trim()),
        "reload" | "r" => Command::Reload,
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(name),
    }
}

pub struct Shell {
    engine: LeadSearch,
    leads_path: PathBuf,
    leads: Vec<LeadRecord>,
    limit: Option<usize>,
}

impl Shell {
    /// Load leads from `leads_path` and index them
    pub fn open(engine: LeadSearch, leads_path: &Path, limit: Option<usize>) -> Result<Self> {
        let mut shell = Self {
            engine,
            leads_path: leads_path.to_path_buf(),
            leads: Vec::new(),
            limit,
        };
        shell.reload()?;
        Ok(shell)
    }

    /// Re-read the leads file and rebuild the index
    pub fn reload(&mut self) -> Result<usize> {
        self.leads = load_leads(&self.leads_path)?;
        self.engine.build_index(&self.leads);
        info!(path = %self.leads_path.display(), leads = self.leads.len(), "leads loaded");
        Ok(self.leads.len())
    }

    pub fn engine(&self) -> &LeadSearch {
        &self.engine
    }

    /// Run until `:quit` or end of input
    pub fn run<R: BufRead, W: WriteColor>(&mut self, input: R, out: &mut W) -> Result<()> {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();

            if !line.is_empty() && !self.handle(line, out)? {
                break;
            }

            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Handle one line; returns false when the session should end
    fn handle<W: WriteColor>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        match parse_command(line) {
            Command::Search(query) => {
                let ranked = self.engine.search_ranked(query, &self.leads);
                if ranked.stats.is_some() {
                    print_matches(out, &ranked.matches, self.engine.highlighter_mut(), self.limit)?;
                }
                print_stats(out, ranked.stats.as_ref(), self.leads.len())?;
            }
            Command::History => {
                for (i, query) in self.engine.history().iter().enumerate() {
                    writeln!(out, "{:>3}  {}", i + 1, query)?;
                }
            }
            Command::Suggest(text) => {
                let suggestions = self.engine.suggestions(text);
                print_suggestions(out, &suggestions)?;
            }
            Command::Reload => match self.reload() {
                Ok(count) => writeln!(out, "reloaded {} leads", count)?,
                Err(e) => {
                    warn!(error = %e, "reload failed, keeping previous leads");
                    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                    writeln!(out, "reload failed: {:#}", e)?;
                    out.reset()?;
                }
            },
            Command::Clear => {
                self.engine.clear_history();
                writeln!(out, "history cleared")?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(name) => {
                writeln!(out, "unknown command :{} (try :help)", name)?;
            }
        }
        Ok(true)
    }
}
