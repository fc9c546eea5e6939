//! Command-line entry points for the enumerator and the table tooling.
use crate::cards::Card;
use crate::cards::Features;
use crate::clustering;
use crate::config::Config;
use crate::enumerate::Enumerator;
use crate::enumerate::Uniqueness;
use crate::strategy;
use crate::Chips;
use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CLI {
    /// Log DEBUG to the terminal as well as the log file.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Enumerate every unique preflop action sequence",
        alias = "enum"
    )]
    Enumerate {
        #[arg(short, long, default_value = "preflop_sequences.txt")]
        out: PathBuf,
        /// JSON table parameters; flags below override individual fields.
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        seats: Option<usize>,
        #[arg(long)]
        stack: Option<Chips>,
        #[arg(long)]
        sblind: Option<Chips>,
        #[arg(long)]
        bblind: Option<Chips>,
        #[arg(long)]
        raise: Option<Chips>,
    },
    #[command(about = "Report repeated lines in a sequence file", alias = "uniq")]
    Unique {
        #[arg(required = true)]
        file: PathBuf,
    },
    #[command(about = "Merge every strategy table in a directory", alias = "agg")]
    Aggregate {
        #[arg(required = true)]
        dir: PathBuf,
        #[arg(short, long, default_value = "aggregated_strategies.csv")]
        out: PathBuf,
    },
    #[command(about = "Append per-cluster mean equities to clustered hand tables")]
    Equity {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    #[command(about = "Print the feature vector of a hole and board", alias = "enc")]
    Encode {
        #[arg(long, required = true)]
        hole: String,
        #[arg(long, default_value = "")]
        board: String,
    },
}

impl CLI {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            true => log::LevelFilter::Debug,
            false => log::LevelFilter::Info,
        }
    }

    /// Runs the chosen command. `Ok(false)` means the command completed but
    /// found a problem worth a non-zero exit.
    pub fn run(self) -> anyhow::Result<bool> {
        match self.command {
            Command::Enumerate {
                out,
                config,
                seats,
                stack,
                sblind,
                bblind,
                raise,
            } => {
                let mut table = match config {
                    Some(path) => Config::load(path)?,
                    None => Config::default(),
                };
                table.seats = seats.unwrap_or(table.seats);
                table.stack = stack.unwrap_or(table.stack);
                table.sblind = sblind.unwrap_or(table.sblind);
                table.bblind = bblind.unwrap_or(table.bblind);
                table.raise = raise.unwrap_or(table.raise);
                log::info!("enumerating {:?}", table);
                let found = Enumerator::new(table)?.write_to(&out)?;
                println!("{}", found.to_string().green().bold());
                Ok(true)
            }
            Command::Unique { file } => {
                let report = Uniqueness::scan_file(&file)?;
                for (line, text) in report.duplicates() {
                    println!("{} line {}: {}", "duplicate".red(), line, text);
                }
                match report.is_unique() {
                    true => println!(
                        "{} {} lines, no duplicates",
                        "unique".green(),
                        report.lines()
                    ),
                    false => println!(
                        "{} {} of {} lines repeat",
                        "duplicates".red().bold(),
                        report.duplicates().len(),
                        report.lines()
                    ),
                }
                Ok(report.is_unique())
            }
            Command::Aggregate { dir, out } => {
                let merged = strategy::aggregate_dir(&dir, &out)?;
                println!(
                    "{} {} infosets to {} ({} rows skipped)",
                    "aggregated".green(),
                    merged.len(),
                    out.display(),
                    merged.skipped()
                );
                Ok(true)
            }
            Command::Equity { files } => {
                let mut clean = true;
                for file in files {
                    match clustering::average_file(&file) {
                        Ok(output) => println!("{} {}", "wrote".green(), output.display()),
                        Err(e) => {
                            clean = false;
                            log::error!("{:#}", e);
                        }
                    }
                }
                Ok(clean)
            }
            Command::Encode { hole, board } => {
                let hole = Card::parse_many(&hole)?;
                let board = Card::parse_many(&board)?;
                println!("{}", Features::from((hole.as_slice(), board.as_slice())));
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition() {
        CLI::command().debug_assert();
    }

    #[test]
    fn enumerate_overrides() {
        let cli = CLI::try_parse_from(["spingo", "enumerate", "--seats", "2", "--stack", "10"])
            .unwrap();
        match cli.command {
            Command::Enumerate { seats, stack, .. } => {
                assert_eq!(seats, Some(2));
                assert_eq!(stack, Some(10.));
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn verbose_anywhere() {
        let cli = CLI::try_parse_from(["spingo", "unique", "x.txt", "-v"]).unwrap();
        assert_eq!(cli.level(), log::LevelFilter::Debug);
    }

    #[test]
    fn encode_requires_hole() {
        assert!(CLI::try_parse_from(["spingo", "encode", "--board", "Ac"]).is_err());
    }
}
