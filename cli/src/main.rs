use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use canvas::LineSegment;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a bitmap as a silhouette (1 = black pixel, 0 = anything else)
    Show { in_file: PathBuf },
    /// Toggle-paint line segments onto a bitmap and save the result
    Draw {
        in_file: PathBuf,
        out_file: PathBuf,
        /// Segment to draw, may be repeated
        #[arg(short, long = "line", value_name = "X1,Y1,X2,Y2", allow_hyphen_values = true)]
        lines: Vec<LineSegment>,
        /// CSV file with x1,y1,x2,y2 columns, drawn after any --line segments
        #[arg(long)]
        lines_file: Option<PathBuf>,
    },
    /// Write a blank black bitmap
    New {
        out_file: PathBuf,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
    },
    /// Prompt for file names and segment coordinates on stdin
    Interactive {
        #[arg(short, long, default_value = "2")]
        lines: usize,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Show { in_file } => commands::show(&in_file, &mut out),
        Commands::Draw {
            in_file,
            out_file,
            mut lines,
            lines_file,
        } => match lines_file.map(commands::read_lines_file).transpose() {
            Ok(from_file) => {
                lines.extend(from_file.unwrap_or_default());
                commands::draw(&in_file, &out_file, &lines, &mut out)
            }
            Err(err) => Err(err),
        },
        Commands::New {
            out_file,
            width,
            height,
        } => commands::create(&out_file, width, height),
        Commands::Interactive { lines } => {
            let stdin = io::stdin();
            commands::interactive(&mut stdin.lock(), &mut out, lines)
        }
    };

    let _ = out.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
