use std::{
    io::Write,
    path::{Path, PathBuf},
};

use clap::{Parser as ClapParser, Subcommand};
use l3_check::check_program;
use l3_profiling::Timings;
use l3_syntax::{PrettyPrint, Program};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

mod error;
mod manifest;
mod project;

use error::L3cError;
use manifest::{find_manifest, Project};
use project::{display_path, load_programs, program_files};

#[derive(ClapParser)]
#[command(version = "0.1", about = "Scope checker for L3 intermediate representation programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Check that every program in the project is well scoped")]
    Check {
        #[arg(long, help = "Path to the directory which contains the l3.toml manifest", default_value = ".")]
        path: PathBuf,
        #[arg(short = 'm', long, help = "Print the timings table")]
        time: bool,
    },
    #[command(about = "List the project's program documents")]
    Ls {
        #[arg(long, help = "Path to the directory which contains the l3.toml manifest", default_value = ".")]
        path: PathBuf,
    },
    #[command(about = "Print every program as an s-expression")]
    Print {
        #[arg(long, help = "Path to the directory which contains the l3.toml manifest", default_value = ".")]
        path: PathBuf,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    run(cli.command)?;
    Ok(())
}

fn run(command: Commands) -> Result<(), L3cError> {
    match command {
        Commands::Check { path, time } => {
            let mut timings = Timings::default();
            timings.start("full check");
            let result = check(&path, &mut timings);
            timings.end("full check");
            if time {
                println!("{}", timings.render());
            }
            result
        },
        Commands::Ls { path } => {
            let project = find_manifest(&path)?;
            for file in program_files(&project)? {
                println!("{}", display_path(&project, &file));
            }
            Ok(())
        },
        Commands::Print { path } => {
            let project = find_manifest(&path)?;
            for (file, program) in load_programs(&project)? {
                println!("; {}", display_path(&project, &file));
                println!("{}\n", program.pretty_print(0));
            }
            Ok(())
        },
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "program"
    } else {
        "programs"
    }
}

fn check(
    path: &Path,
    timings: &mut Timings,
) -> Result<(), L3cError> {
    let project = timings.time("find manifest", || find_manifest(path))?;
    let programs = timings.time("load programs", || load_programs(&project))?;

    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    status(
        &mut stdout,
        &format!("Checking {} {} for project {}", programs.len(), plural(programs.len()), project.manifest.name),
    )?;

    let summary = check_programs(&project, &programs, timings);
    if summary.failed > 0 {
        return Err(L3cError::CheckFailed {
            failed: summary.failed,
            total:  summary.checked,
        });
    }
    let total = summary.total;
    status(&mut stdout, &format!("All {total} {} are well scoped", plural(total)))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CheckSummary {
    /// programs loaded from the project
    total:   usize,
    /// programs actually checked; fewer than `total` when `fail_fast` stopped early
    checked: usize,
    failed:  usize,
}

/// Checks every program in order, reporting each failure to stderr.
fn check_programs(
    project: &Project,
    programs: &[(PathBuf, Program)],
    timings: &mut Timings,
) -> CheckSummary {
    let mut summary = CheckSummary {
        total:   programs.len(),
        checked: 0,
        failed:  0,
    };
    for (file, program) in programs {
        summary.checked += 1;
        let Err(err) = timings.time("check program", || check_program(program)) else {
            continue;
        };
        summary.failed += 1;
        report(project, file, err);
        if project.manifest.check.fail_fast {
            break;
        }
    }
    summary
}

fn status(
    stdout: &mut StandardStream,
    message: &str,
) -> Result<(), L3cError> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "{message}")?;
    stdout.reset()?;
    Ok(())
}

fn report(
    project: &Project,
    file: &Path,
    err: l3_check::ScopeError,
) {
    let report = miette::Report::new(err).wrap_err(format!("in {}", display_path(project, file)));
    eprintln!("{:?}", report);
}
