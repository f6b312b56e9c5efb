//! Interactive prompt loop.
//!
//! Reads one line, runs every command it matches, prints their output and
//! prompts again. Commands run one at a time, including their pauses; the loop
//! only ends when the input is closed.

use std::io::Write;

use log::{debug, error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::{commands::Commander, groupme::Requester, smiley::SmileySource};

/// Runs the prompt until `input` reaches end of file.
///
/// Lines that are not valid UTF-8 are skipped like any unrecognized input.
/// A failing command is logged and skips the remaining commands of its line;
/// the prompt keeps running.
///
/// # Errors
///
/// Returns an error only when reading input or writing output fails.
pub async fn run<R, S, I, W>(
    commander: &Commander<R, S>,
    mut input: I,
    output: &mut W,
) -> std::io::Result<()>
where
    R: Requester,
    S: SmileySource,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", commander.greeting())?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", commander.prompt())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            info!("input closed, exiting");
            writeln!(output)?;
            return Ok(());
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            debug!("ignoring line that is not valid UTF-8");
            continue;
        };
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        debug!("read line {:?}", line);

        for command in commander.parse(line) {
            match commander.execute(&command).await {
                Ok(result) if result.is_silent() => {}
                Ok(result) => writeln!(output, "{}", result.response)?,
                Err(e) => {
                    error!("{:?} failed: {}", command, e);
                    break;
                }
            }
        }
    }
}
