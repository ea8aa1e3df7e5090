//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the model + feature list (fatal on failure)
//! - runs the estimation pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, CurveArgs, InitArgs, PredictArgs};
use crate::domain::UserInput;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pay` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `pay` to behave like `pay tui`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Predict(args) => handle_predict(args),
        Command::Curve(args) => handle_curve(args),
        Command::Tui(args) => crate::tui::run(args),
        Command::Init(args) => handle_init(args),
    }
}

fn handle_predict(args: PredictArgs) -> Result<(), AppError> {
    let (model_path, features_path) =
        crate::io::load::resolve_paths(args.model.clone(), args.features.clone());
    let (model, schema) = crate::io::load::load_bundle(&model_path, &features_path)?;

    let input = UserInput {
        age: args.age,
        experience: args.experience,
        education: args.education,
        role: args.role,
        location: args.location,
        company_tier: args.company_tier,
    };

    match pipeline::run_predict(&model, &schema, &input)? {
        pipeline::Outcome::Invalid(warning) => {
            // A violated invariant is a warning, not an error: report it and
            // exit cleanly without computing anything.
            println!("{}", crate::report::format_warning(&warning));
        }
        pipeline::Outcome::Estimate(estimate) => {
            println!("{}", crate::report::format_estimate(&estimate));

            if let Some(path) = &args.export {
                crate::io::export::write_estimate_json(path, &estimate)?;
                println!("Wrote estimate JSON: {}", path.display());
            }
        }
    }

    Ok(())
}

fn handle_curve(args: CurveArgs) -> Result<(), AppError> {
    let points = crate::curve::curve_points(args.max_years);
    println!("{}", crate::report::format_curve_table(&points));

    if let Some(path) = &args.export {
        crate::io::export::write_curve_json(path, args.max_years)?;
        println!("Wrote curve JSON: {}", path.display());
    }

    Ok(())
}

fn handle_init(args: InitArgs) -> Result<(), AppError> {
    let (model_path, features_path) = crate::io::starter::write_starter_files(&args.dir, args.force)?;
    println!("Wrote starter model: {}", model_path.display());
    println!("Wrote feature list : {}", features_path.display());
    Ok(())
}

/// Rewrite argv so `pay` defaults to `pay tui`.
///
/// Rules:
/// - `pay`                     -> `pay tui`
/// - `pay --model m.json ...`  -> `pay tui --model m.json ...`
/// - `pay --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "predict" | "curve" | "tui" | "init");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["pay"])), args(&["pay", "tui"]));
        assert_eq!(
            rewrite_args(args(&["pay", "--model", "m.json"])),
            args(&["pay", "tui", "--model", "m.json"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["pay", "predict", "-a", "30"])),
            args(&["pay", "predict", "-a", "30"])
        );
        assert_eq!(rewrite_args(args(&["pay", "--help"])), args(&["pay", "--help"]));
    }
}
