use anyhow::{Context, Result};
use clap::Parser;
use fft::{CLIArgs, Fft, PHASE_COUNT};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut signal =
        fft::read_signal(args.input_path.as_deref()).context("Failed to read input signal.")?;

    let mut fft = Fft::new(signal.len());
    fft.process_n(&mut signal, PHASE_COUNT)?;

    let first_eight_digits = signal
        .message(0)
        .context("Failed to get the first eight digits of output signal.")?;
    println!(
        "After {} phases, the first eight signal digits are {}.",
        PHASE_COUNT, first_eight_digits
    );

    Ok(())
}
