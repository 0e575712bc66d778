use anyhow::{Context, Result};
use clap::Parser;
use fft::{CLIArgs, Fft, PHASE_COUNT, REPEAT_COUNT};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut signal = fft::read_signal(args.input_path.as_deref())
        .context("Failed to read input signal.")?
        .repeat(REPEAT_COUNT);

    let offset = signal
        .offset()
        .context("Failed to read message offset from signal.")?;
    // Check the message window before spending time on phases.
    signal.message_range(offset).with_context(|| {
        format!(
            "Message offset({}) doesn't fit in signal of length {}.",
            offset,
            signal.len()
        )
    })?;

    let mut fft = Fft::new(signal.len());
    fft.process_n(&mut signal, PHASE_COUNT)?;

    println!("{}", signal);
    println!("{}", signal.message(offset)?);

    Ok(())
}
