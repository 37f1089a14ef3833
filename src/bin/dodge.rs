//! Interactive perceptron driver binary.
//!
//! Stands in for the host environment: maps terminal commands onto the
//! model's observation and trigger surface, and prints the stance the
//! controlled actor would take for each decision. All observability lives
//! here; the core stays silent.

use clap::Parser;
use dodge_perceptron::{DecisionSink, Session, Trigger};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dodge",
    about = "Drive the online dodge perceptron from the terminal"
)]
struct Args {
    /// Weights file used by the save and load commands
    #[arg(long, default_value = "weights.txt")]
    weights_file: PathBuf,

    /// Run the built-in linearly separable demo instead of the
    /// interactive loop
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Number of epochs for the demo run
    #[arg(long, default_value_t = 25)]
    epochs: usize,
}

/// Prints the actor-control contract for each decision.
struct StanceSink;

impl DecisionSink for StanceSink {
    fn on_decision(&mut self, decision: f64) {
        if decision == 0.0 {
            println!("decision=0  -> crouch, subject to physics");
        } else {
            println!("decision=1  -> kinematic lock");
        }
    }
}

fn main() {
    let args = Args::parse();

    eprintln!("Dodge perceptron driver");
    eprintln!("  Weights file: {}", args.weights_file.display());

    let mut session = Session::new(args.weights_file, Box::new(StanceSink));

    if args.demo {
        run_demo(&mut session, args.epochs);
    } else {
        run_interactive(&mut session);
    }
}

/// Repeatedly feed the linearly separable set {((1,1),1), ((-1,-1),0)}
/// and report when the model classifies both sides correctly.
fn run_demo(session: &mut Session, epochs: usize) {
    eprintln!("  Mode: demo ({} epochs)", epochs);

    for epoch in 0..epochs {
        session.observe(1.0, 1.0, 1.0);
        session.observe(-1.0, -1.0, 0.0);

        let high = session.evaluate(1.0, 1.0);
        let low = session.evaluate(-1.0, -1.0);
        println!(
            "epoch {:>3}: eval(1,1)={} eval(-1,-1)={} total_error={}",
            epoch,
            high,
            low,
            session.model().total_error()
        );
    }

    let converged = session.evaluate(1.0, 1.0) == 1.0 && session.evaluate(-1.0, -1.0) == 0.0;
    println!(
        "demo finished: {}",
        if converged { "converged" } else { "not converged" }
    );
}

/// Command loop over stdin. One command per line:
///
/// ```text
/// learn <i1> <i2> <desired>   feed a labeled observation
/// eval <i1> <i2>              classify without learning
/// reset | save | load         session triggers
/// quit                        exit
/// ```
fn run_interactive(session: &mut Session) {
    eprintln!("  Mode: interactive (learn/eval/reset/save/load/quit)");

    let stdin = io::stdin();
    print_prompt();
    for line in stdin.lock().lines() {
        let line = line.expect("Failed to read stdin");
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["reset"] => {
                session.handle_trigger(Trigger::Reset).expect("reset cannot fail");
                println!("session reset");
            }
            ["save"] => match session.handle_trigger(Trigger::Save) {
                Ok(()) => println!("saved to {}", session.weights_path().display()),
                Err(err) => eprintln!("save failed: {}", err),
            },
            ["load"] => match session.handle_trigger(Trigger::Load) {
                Ok(()) => println!("loaded from {}", session.weights_path().display()),
                Err(err) => eprintln!("load failed: {}", err),
            },
            ["learn", i1, i2, desired] => {
                match (i1.parse(), i2.parse(), desired.parse()) {
                    (Ok(i1), Ok(i2), Ok(desired)) => {
                        session.observe(i1, i2, desired);
                    }
                    _ => eprintln!("usage: learn <i1> <i2> <desired>"),
                }
            }
            ["eval", i1, i2] => match (i1.parse(), i2.parse()) {
                (Ok(i1), Ok(i2)) => println!("decision={}", session.evaluate(i1, i2)),
                _ => eprintln!("usage: eval <i1> <i2>"),
            },
            _ => eprintln!("unknown command: {}", line),
        }
        print_prompt();
    }
}

fn print_prompt() {
    print!("> ");
    io::stdout().flush().expect("Failed to flush stdout");
}
