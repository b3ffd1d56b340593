//! Board-file reading and trace/report writing.
//!
//! The exchange formats are plain text: a board file is 8 lines of 8
//! symbols; a trace file is a sequence of snapshots separated by blank
//! lines, starting with the initial position. The report is JSON.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::board::Board;
use crate::error::SolverError;
use crate::game::GameReport;

fn io_error(stage: &'static str, path: &Path, error: impl ToString) -> SolverError {
    SolverError::Io {
        stage,
        path: path.display().to_string(),
        error: error.to_string(),
    }
}

/// Reads and validates a start position.
pub fn read_board_file(path: &Path) -> Result<Board, SolverError> {
    let text = fs::read_to_string(path).map_err(|e| io_error("read_board", path, e))?;
    Board::parse(&text)
}

/// Writes the trace: each board as 8 lines followed by a blank line.
pub fn write_trace(path: &Path, trace: &[Board]) -> Result<(), SolverError> {
    let file = fs::File::create(path).map_err(|e| io_error("write_trace", path, e))?;
    let mut writer = BufWriter::new(file);
    for board in trace {
        writeln!(writer, "{board}").map_err(|e| io_error("write_trace", path, e))?;
    }
    writer.flush().map_err(|e| io_error("write_trace", path, e))
}

/// Writes the playout report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &GameReport) -> Result<(), SolverError> {
    let file = fs::File::create(path).map_err(|e| io_error("write_report", path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| io_error("write_report", path, e))?;
    writer.flush().map_err(|e| io_error("write_report", path, e))
}
