use anyhow::Result;
use clap::{CommandFactory, Parser};

use bumper::cli::{self, PlanArgs};
use bumper::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "bumper",
    about = "Bump semantic version declarations in source files"
)]
struct Args {
    #[arg(
        short = 'M',
        long,
        num_args = 0..,
        value_name = "FILES",
        help = "Bump `__version__` in FILES by major version"
    )]
    major: Option<Vec<String>>,

    #[arg(
        short = 'm',
        long,
        num_args = 0..,
        value_name = "FILES",
        help = "Bump `__version__` in FILES by minor version"
    )]
    minor: Option<Vec<String>>,

    #[arg(
        short = 'p',
        long,
        num_args = 0..,
        value_name = "FILES",
        help = "Bump `__version__` in FILES by patch version"
    )]
    patch: Option<Vec<String>>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Don't modify files and print resulting actions")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bumper {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let plan_args = PlanArgs {
        major: args.major,
        minor: args.minor,
        patch: args.patch,
    };

    // No bump level requested at all: show usage and exit
    if plan_args.is_empty() {
        Args::command().print_help()?;
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let plan = match cli::build_plan(&plan_args, &config) {
        Ok(plan) => plan,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if plan.is_empty() {
        ui::display_status("No versioned files matched the given selection");
        return Ok(());
    }

    let records = match cli::execute_plan(&plan, args.dry_run) {
        Ok(records) => records,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for record in &records {
        if args.dry_run {
            ui::display_dry_run_record(record);
        } else {
            ui::display_bump_record(record);
        }
    }

    Ok(())
}
