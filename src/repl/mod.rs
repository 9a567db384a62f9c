//! Interactive read-eval-print loop for browsing PokeAPI.
//!
//! The loop is generic over its input and output streams so it can be
//! driven by stdin/stdout in the binary and by in-memory buffers in tests.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{CommandOutcome, Pokedex};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Prompt shown before each command.
pub const PROMPT: &str = "pokedex > ";

/// Run the REPL until `exit` or end of input.
///
/// # Errors
/// Only I/O errors on `input` or `output` end the loop early; command
/// failures are reported to the user and the loop carries on.
pub async fn run_repl<R, W>(
    pokedex: &mut Pokedex,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("End of input, leaving REPL");
            output.write_all(b"\n").await?;
            break;
        };

        let outcome = pokedex.execute(Command::parse(&line)).await;
        output.write_all(outcome.output.as_bytes()).await?;

        if outcome.exit {
            break;
        }
    }

    output.flush().await
}
