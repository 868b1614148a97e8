//! Kellycalc CLI - Command-line interface for conservative Kelly stake sizing

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use kellycalc::core::dialogue::{ReplyKind, Session};
use kellycalc::core::kelly::{advise, render_advice, OddsSlip};

#[derive(Parser)]
#[command(name = "kellycalc")]
#[command(author, version, about = "Conservative Kelly stake calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a stake recommendation directly from odds
    Advise {
        /// Fair (or juice-free reference) odd
        #[arg(long)]
        fair: f64,

        /// Odd of the opposite market, when one is quoted
        #[arg(long, conflicts_with = "juice_free")]
        opposite: Option<f64>,

        /// The reference odd is already juice-free (single-sided markets)
        #[arg(long)]
        juice_free: bool,

        /// Value odd found at the bookmaker
        #[arg(long)]
        value: f64,
    },

    /// Show worked examples for each market shape
    Examples,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "Kellycalc v0.2.0".cyan().bold());
    println!();

    if cli.interactive {
        run_interactive()?;
    } else if let Some(command) = cli.command {
        match command {
            Commands::Advise {
                fair,
                opposite,
                juice_free,
                value,
            } => {
                run_advise(fair, opposite, juice_free, value)?;
            }
            Commands::Examples => {
                run_examples();
            }
        }
    } else {
        println!("Use --help for usage information or --interactive for interactive mode.");
    }

    Ok(())
}

/// One-shot recommendation from command-line odds
fn run_advise(fair: f64, opposite: Option<f64>, juice_free: bool, value: f64) -> Result<()> {
    for (name, odds) in [("--fair", Some(fair)), ("--opposite", opposite), ("--value", Some(value))] {
        if let Some(odds) = odds {
            if !odds.is_finite() || odds <= 1.0 {
                bail!("{} must be a decimal odd greater than 1.0 (got {})", name, odds);
            }
        }
    }

    let slip = match opposite {
        Some(opposite_odds) => OddsSlip::WithOpposite {
            fair_odds: fair,
            opposite_odds,
            value_odds: value,
        },
        None => OddsSlip::SingleSided {
            fair_odds: fair,
            juice_free,
            value_odds: value,
        },
    };

    let advice = advise(&slip);

    println!("{}", "Estimate:".yellow().bold());
    println!("  Real probability: {:>6.2}%", advice.real_probability * 100.0);
    println!("  Expected value:   {:>6.4}", advice.expected_value);
    println!("  Full Kelly:       {:>6.4}", advice.kelly_fraction);
    println!();

    print_result(&render_advice(&slip, &advice), advice.has_value);

    Ok(())
}

/// Interactive menu loop
fn run_interactive() -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!();

    let theme = ColorfulTheme::default();

    loop {
        let options = vec!["Calculate a stake", "Show examples", "Quit"];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => run_dialogue(&theme)?,
            1 => run_examples(),
            _ => break,
        }
    }

    Ok(())
}

/// Drive one dialogue session to its result
fn run_dialogue(theme: &ColorfulTheme) -> Result<()> {
    let (mut session, reply) = Session::begin();
    println!("{}", reply.text.yellow().bold());

    while !session.is_complete() {
        let answer: String = Input::with_theme(theme).with_prompt(">").interact_text()?;

        if answer.trim().eq_ignore_ascii_case("quit") {
            println!("{}", "Calculation abandoned.".dimmed());
            return Ok(());
        }

        let reply = session.submit(&answer);
        match reply.kind {
            ReplyKind::Prompt => println!("{}", reply.text.yellow().bold()),
            ReplyKind::Error => println!("{}", reply.text.red()),
            ReplyKind::Result => {
                println!();
                print_result(&reply.text, !reply.text.contains("NO VALUE"));
            }
        }
    }

    Ok(())
}

/// The three worked examples, computed live through the engine
fn run_examples() {
    let cases = [
        (
            "Opposite market quoted",
            OddsSlip::WithOpposite {
                fair_odds: 1.66,
                opposite_odds: 2.20,
                value_odds: 2.50,
            },
        ),
        (
            "Single-sided, quoted with juice",
            OddsSlip::SingleSided {
                fair_odds: 2.00,
                juice_free: false,
                value_odds: 3.25,
            },
        ),
        (
            "Single-sided, juice-free reference",
            OddsSlip::SingleSided {
                fair_odds: 2.38,
                juice_free: true,
                value_odds: 2.65,
            },
        ),
    ];

    println!("{}", "Worked examples".yellow().bold());

    for (label, slip) in cases {
        let advice = advise(&slip);
        println!();
        println!("{}", label.green().bold());
        println!("{}", render_advice(&slip, &advice));
    }
    println!();
}

fn print_result(text: &str, has_value: bool) {
    if has_value {
        println!("{}", text.green());
    } else {
        println!("{}", text.red());
    }
}
