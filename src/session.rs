//! Command session
//!
//! Reads commands line by line, applies them to the scoreboard and writes the
//! protocol output. Processing stops after `END` or at end of input.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{AppError, AppResult};
use crate::handlers::{Command, handle};
use crate::services::Scoreboard;

/// Counters for one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands: u64,
    pub skipped: u64,
    pub ended: bool,
}

/// Drive the scoreboard from `input` until `END` or end of input.
///
/// Output already produced is flushed even when reading or writing fails.
pub async fn run<R, W>(board: &mut Scoreboard, input: R, output: &mut W) -> AppResult<SessionSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut summary = SessionSummary::default();
    let result = drive(board, input, output, &mut summary).await;
    let flushed = output.flush().await;
    result?;
    flushed?;

    if !summary.ended {
        tracing::warn!("Input ended without END");
    }
    tracing::info!(
        commands = summary.commands,
        skipped = summary.skipped,
        "Session finished"
    );

    Ok(summary)
}

async fn drive<R, W>(
    board: &mut Scoreboard,
    mut input: R,
    output: &mut W,
    summary: &mut SessionSummary,
) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        line_no += 1;

        let command = match decode(&buf) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(line = line_no, code = e.error_code(), "Skipping input: {}", e);
                summary.skipped += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        summary.commands += 1;
        let reply = handle(board, command);
        for out in &reply.lines {
            output.write_all(out.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }

        if reply.terminate {
            summary.ended = true;
            return Ok(());
        }
    }
}

/// Raw input line to command; non UTF-8 lines are rejected like malformed ones
fn decode(raw: &[u8]) -> AppResult<Option<Command>> {
    let line = std::str::from_utf8(raw)
        .map_err(|e| AppError::InvalidCommand(format!("line is not valid UTF-8: {}", e)))?;
    Command::parse(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::io::BufReader;

    async fn run_script(script: &str) -> (String, SessionSummary) {
        let mut board = Scoreboard::default();
        let mut output = Vec::new();
        let summary = run(&mut board, script.as_bytes(), &mut output).await.unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[tokio::test]
    async fn test_stops_at_end() {
        let (out, summary) = run_script("ADDTEAM a\nEND\nADDTEAM b\n").await;
        assert_eq!(out, "[Info]Add successfully.\n[Info]Competition ends.\n");
        assert_eq!(summary.commands, 2);
        assert!(summary.ended);
    }

    #[tokio::test]
    async fn test_malformed_lines_produce_no_output() {
        let (out, summary) = run_script("HELLO\n\nADDTEAM\nADDTEAM a\n").await;
        assert_eq!(out, "[Info]Add successfully.\n");
        assert_eq!(summary.commands, 1);
        assert_eq!(summary.skipped, 2);
        assert!(!summary.ended);
    }

    #[tokio::test]
    async fn test_handles_crlf_input() {
        let (out, _) = run_script("ADDTEAM a\r\nFLUSH\r\nEND\r\n").await;
        assert_eq!(
            out,
            "[Info]Add successfully.\n[Info]Flush scoreboard.\n[Info]Competition ends.\n"
        );
    }

    #[tokio::test]
    async fn test_skips_line_with_invalid_utf8() {
        let mut board = Scoreboard::default();
        let mut output = Vec::new();
        let input: &[u8] = b"ADDTEAM a\nADDTEAM \xff\xfe\nADDTEAM b\nEND\n";
        let summary = run(&mut board, input, &mut output).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "[Info]Add successfully.\n[Info]Add successfully.\n[Info]Competition ends.\n"
        );
        assert_eq!(summary.skipped, 1);
        assert!(summary.ended);
        assert_eq!(board.teams().len(), 2);
    }

    #[tokio::test]
    async fn test_flushes_output_when_reading_fails() {
        let input = tokio_test::io::Builder::new()
            .read(b"ADDTEAM a\n")
            .read_error(std::io::Error::other("stdin closed"))
            .build();
        let mut output = tokio::io::BufWriter::new(Vec::new());

        let mut board = Scoreboard::default();
        let result = run(&mut board, BufReader::new(input), &mut output).await;

        assert!(matches!(result, Err(AppError::Io(_))));
        assert_eq!(output.get_ref().as_slice(), b"[Info]Add successfully.\n");
    }

    #[tokio::test]
    async fn test_writes_each_reply_in_order() {
        let input = tokio_test::io::Builder::new()
            .read(b"ADDTEAM a\nADDTEAM a\n")
            .read(b"QUERY_RANKING a\nEND\n")
            .build();
        let mut output = tokio_test::io::Builder::new()
            .write(b"[Info]Add successfully.\n")
            .write(b"[Error]Add failed: duplicated team name.\n")
            .write(b"[Info]Complete query ranking.\na NOW AT RANKING 1\n")
            .write(b"[Info]Competition ends.\n")
            .build();

        let mut board = Scoreboard::default();
        let summary = run(&mut board, BufReader::new(input), &mut output)
            .await
            .unwrap();
        assert_eq!(summary.commands, 4);
        assert!(summary.ended);
    }

    #[tokio::test]
    async fn test_reads_commands_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ADDTEAM alpha").unwrap();
        writeln!(file, "ADDTEAM beta").unwrap();
        writeln!(file, "START DURATION 300 PROBLEM 2").unwrap();
        writeln!(file, "SUBMIT A BY beta WITH Accepted AT 12").unwrap();
        writeln!(file, "FLUSH").unwrap();
        writeln!(file, "QUERY_RANKING beta").unwrap();
        writeln!(file, "QUERY_RANKING alpha").unwrap();
        writeln!(file, "END").unwrap();
        file.flush().unwrap();

        let source = tokio::fs::File::open(file.path()).await.unwrap();
        let mut board = Scoreboard::default();
        let mut output = Vec::new();
        let summary = run(&mut board, BufReader::new(source), &mut output)
            .await
            .unwrap();

        let out = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "[Info]Add successfully.",
                "[Info]Add successfully.",
                "[Info]Competition starts.",
                "[Info]Flush scoreboard.",
                "[Info]Complete query ranking.",
                "beta NOW AT RANKING 1",
                "[Info]Complete query ranking.",
                "alpha NOW AT RANKING 2",
                "[Info]Competition ends.",
            ]
        );
        assert_eq!(summary.commands, 8);
        assert!(summary.ended);
    }
}
