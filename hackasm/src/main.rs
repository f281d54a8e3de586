use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use hackasm::{assemble_with_stages, Stage, Stages};
use log::info;

/// Assembler for the Hack computer
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// `.asm` file to assemble
    input: PathBuf,

    /// Where to write the binary, defaults to the input with a `.hack` extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write every intermediate stage into a `build` directory next to the input
    #[arg(long)]
    stages: bool,
}

fn write_stages(input: &Path, stages: &Stages) -> Result<()> {
    let dir = input
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        .join("build");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let stem = input
        .file_stem()
        .with_context(|| format!("no file name in {}", input.display()))?
        .to_string_lossy();

    for stage in Stage::ALL {
        let path = dir.join(format!("{}.{}", stem, stage.suffix()));
        info!("writing {}", path.display());
        fs::write(&path, stages.render(stage))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    info!("assembling {}", args.input.display());
    let program_text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let stages = assemble_with_stages(&program_text)
        .with_context(|| format!("assembling {}", args.input.display()))?;

    if args.stages {
        write_stages(&args.input, &stages)?;
    }

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension(Stage::Binary.suffix()));
    fs::write(&output, stages.render(Stage::Binary))
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        "wrote {} instructions to {}",
        stages.binary.len(),
        output.display()
    );

    Ok(())
}
