//! # Toolbox CLI
//!
//! Terminal front-end for the engineering toolbox calculators. Presents
//! the built-in calculator menu, prompts for each declared input field,
//! runs the calculation through a [`Session`], and prints the result
//! block plus the growing history table.
//!
//! Blank input on an optional field takes its declared default; blank on
//! a required field is reported back by the validator.

use std::io::{self, BufRead, Write};

use toolbox_core::formula::{FormulaSpec, OutputValue, RawInputs};
use toolbox_core::history::HistoryEntry;
use toolbox_core::humor::{self, FAILURE_MESSAGES, SUCCESS_MESSAGES};
use toolbox_core::registry::BUILTIN;
use toolbox_core::session::{Session, SLOPE_HISTORY_FILE};

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    Some(line.trim().to_string())
}

fn prompt_fields(spec: &FormulaSpec) -> Option<RawInputs> {
    let mut raw = RawInputs::new();
    for field in &spec.fields {
        let hint = match field.default {
            Some(default) => format!(" [{default}]"),
            None if !field.required => " [blank to skip]".to_string(),
            None => String::new(),
        };
        let answer = prompt(&format!("  {}{}: ", field.label, hint))?;
        raw.set(field.name, answer);
    }
    Some(raw)
}

fn print_outputs(entry: &HistoryEntry) {
    println!();
    println!("=======================================");
    println!("  RESULTS");
    println!("=======================================");
    for (name, value) in entry.outputs.iter() {
        match value {
            OutputValue::Number(v) => println!("  {name:<32} {v:.4}"),
            OutputValue::Text(s) => println!("  {name:<32} {s}"),
        }
    }
    println!("=======================================");

    println!();
    println!("JSON output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&entry.outputs) {
        println!("{json}");
    }
}

fn print_history(session: &Session, calculator_id: &str) {
    let entries = session.history().list(calculator_id);
    if entries.is_empty() {
        return;
    }

    println!();
    println!("History ({} entries, oldest first):", entries.len());
    for entry in entries {
        let inputs: Vec<String> = entry
            .inputs
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect();
        let outputs: Vec<String> = entry
            .outputs
            .iter()
            .map(|(n, v)| format!("{n}={v}"))
            .collect();
        println!(
            "  #{} [{}] {} -> {}",
            entry.sequence,
            entry.recorded_at.format("%H:%M:%S"),
            inputs.join(", "),
            outputs.join(", ")
        );
    }
}

fn main() {
    println!("Engineering Toolbox - Tank & Coil Calculators");
    println!("=============================================");
    println!();

    // Slope history persists across runs; everything else is volatile.
    let mut session = match Session::with_slope_log(SLOPE_HISTORY_FILE) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Could not open {SLOPE_HISTORY_FILE}: {e}");
            eprintln!("Continuing with volatile history.");
            Session::new()
        }
    };
    let mut rng = rand::thread_rng();

    loop {
        println!();
        for (index, spec) in BUILTIN.specs().iter().enumerate() {
            println!("  {}. {}", index + 1, spec.title);
        }
        println!("  q. Quit");

        let Some(choice) = prompt("Choose a calculator: ") else {
            break;
        };
        if choice.eq_ignore_ascii_case("q") {
            break;
        }
        let spec = match choice
            .parse::<usize>()
            .ok()
            .and_then(|n| BUILTIN.specs().get(n.wrapping_sub(1)))
        {
            Some(spec) => spec,
            None => {
                println!("Not a menu entry: {choice}");
                continue;
            }
        };

        println!();
        println!("{}", spec.title);
        let Some(raw) = prompt_fields(spec) else {
            break;
        };

        // Clone the stored entry so the session borrow ends before the
        // history listing below.
        match session.calculate(&BUILTIN, spec.id, &raw).map(|e| e.clone()) {
            Ok(entry) => {
                print_outputs(&entry);
                if let Some(msg) = humor::pick(&mut rng, SUCCESS_MESSAGES) {
                    println!();
                    println!("{msg}");
                }
                print_history(&session, spec.id);
            }
            Err(e) => {
                println!();
                println!("Error: {e}");
                if e.is_input_error() {
                    if let Some(msg) = humor::pick(&mut rng, FAILURE_MESSAGES) {
                        println!("{msg}");
                    }
                }
            }
        }
    }

    println!("Bye.");
}
