//! Error taxonomy for editing operations.
//!
//! Every failure inside the core is an [`EditError`]. Each variant maps to
//! exactly one [`ExitCode`], which is what the command line front end hands
//! back to the shell. The numeric values are a fixed contract with callers
//! and scripts, so they must never be renumbered.

use thiserror::Error;

/// Process exit codes reported for failed invocations.
///
/// Success is always `0` and is not part of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Uncaught or unexpected failure.
    General = 40,
    /// Input file missing or not decodable as a supported raster format.
    FileFormat = 41,
    /// Missing, conflicting or malformed non-geometry, non-color arguments.
    CmdArgs = 42,
    /// Malformed color token or out-of-range component.
    Color = 43,
    /// Malformed point token or invalid coordinates.
    Coords = 44,
    /// Allocation failure.
    Memory = 45,
    /// Failure writing output, or output path equals input path.
    Io = 46,
    /// Invalid thickness, radius or angle, or fill without fill color.
    Draw = 47,
    /// Degenerate (zero-area) crop or rotate region.
    Trim = 48,
    /// Invariant violation not otherwise classified.
    Invariant = 49,
}

impl ExitCode {
    /// Numeric value passed to `std::process::exit`.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Errors produced while validating parameters or applying an operation.
#[derive(Debug, Error)]
pub enum EditError {
    /// Unexpected failure with no better classification.
    #[error("General error: {0}")]
    General(String),

    /// Input could not be opened or decoded.
    #[error("{0}")]
    FileFormat(String),

    /// Missing, conflicting or malformed command arguments.
    #[error("{0}")]
    Arguments(String),

    /// Malformed color token.
    #[error("{0}")]
    Color(String),

    /// Malformed point token or a point outside the image where one is required.
    #[error("{0}")]
    Coordinates(String),

    /// Rectangle corners in the wrong order.
    #[error("Invalid rectangle: left_up must be above and to the left of right_down")]
    Geometry,

    /// Buffer could not be allocated, or its size overflows.
    #[error("Memory error: {0}")]
    Memory(String),

    /// Output could not be written.
    #[error("{0}")]
    Io(String),

    /// Drawing parameters out of range.
    #[error("{0}")]
    Draw(String),

    /// Region collapsed to nothing after clamping.
    #[error("{0}")]
    Trim(String),

    /// Internal invariant broken, e.g. a pixel buffer of the wrong length.
    #[error("Invariant violation: {0}")]
    Invariant(String),
}

impl EditError {
    /// Exit code this error is reported with.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EditError::General(_) => ExitCode::General,
            EditError::FileFormat(_) => ExitCode::FileFormat,
            EditError::Arguments(_) => ExitCode::CmdArgs,
            EditError::Color(_) => ExitCode::Color,
            EditError::Coordinates(_) | EditError::Geometry => ExitCode::Coords,
            EditError::Memory(_) => ExitCode::Memory,
            EditError::Io(_) => ExitCode::Io,
            EditError::Draw(_) => ExitCode::Draw,
            EditError::Trim(_) => ExitCode::Trim,
            EditError::Invariant(_) => ExitCode::Invariant,
        }
    }

    pub(crate) fn args(msg: impl Into<String>) -> Self {
        EditError::Arguments(msg.into())
    }

    pub(crate) fn draw(msg: impl Into<String>) -> Self {
        EditError::Draw(msg.into())
    }
}

impl From<std::collections::TryReserveError> for EditError {
    fn from(err: std::collections::TryReserveError) -> Self {
        EditError::Memory(err.to_string())
    }
}
