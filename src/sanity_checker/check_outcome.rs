use std::io::{self, Write};

use bytes::Bytes;

pub const SUCCESS_STATUS: u16 = 200;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    Success { body: Bytes },
    Failure { status: u16 },
}

impl CheckOutcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            CheckOutcome::Success { .. } => EXIT_SUCCESS,
            CheckOutcome::Failure { .. } => EXIT_FAILURE,
        }
    }

    /// Writes the human readable report. The body is written byte for byte.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            CheckOutcome::Success { body } => {
                writeln!(out, "Request successful!")?;
                write!(out, "Response content: ")?;
                out.write_all(body)?;
                writeln!(out)?;
            }
            CheckOutcome::Failure { status } => {
                writeln!(out, "Request failed. Status code: {}", status)?;
            }
        }
        out.flush()
    }
}
