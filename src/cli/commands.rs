//! Command implementations and dispatch.

use console::style;

use crate::cli::args::Cli;
use crate::error::Result;
use crate::locator;
use crate::runner::{Invoker, RunOptions};

/// Dispatch the parsed CLI to a command and return the process exit code.
pub fn dispatch(cli: &Cli) -> Result<i32> {
    if cli.locate {
        locate_command(cli)
    } else {
        run_command(cli)
    }
}

/// `--locate`: print the descriptor without packaging or launching anything.
fn locate_command(cli: &Cli) -> Result<i32> {
    let app = locator::locate();

    if cli.json {
        let json = serde_json::to_string_pretty(&app).map_err(anyhow::Error::from)?;
        println!("{}", json);
    } else {
        println!("platform:   {}", app.platform);
        println!("found:      {}", app.found);
        println!("version:    {}", app.version);
        println!("path:       {}", app.path.display());
        println!("invocation: {}", app.invocation.join(" "));
    }

    Ok(0)
}

/// Default command: the full locate, package, invoke flow.
fn run_command(cli: &Cli) -> Result<i32> {
    // clap enforces the positional unless --locate was given.
    let Some(script) = cli.script.as_deref() else {
        return Ok(2);
    };

    let mut invoker = Invoker::new();
    if let Some(dir) = &cli.fallback_dir {
        invoker = invoker.with_fallback_dir(dir);
    }

    let opts = RunOptions {
        allow_fallback: !cli.no_fallback,
        auto_quit: cli.quit,
        timeout: cli.timeout,
    };

    let outcome = invoker.run(script, &opts)?;

    if let Some(instructions) = &outcome.instructions {
        if outcome.success {
            println!("{}", instructions);
        } else {
            eprintln!("{}", style(instructions).yellow());
        }
    }

    if outcome.success {
        if !cli.quiet && outcome.instructions.is_none() {
            println!("{}", style("Script handed to FontLab Studio.").green());
        }
        Ok(0)
    } else {
        Ok(1)
    }
}
