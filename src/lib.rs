//! Parse QuickTime VR (QTVR v1) movies and composite their sample tracks
//! into mosaic PNGs.
//!
//! ```no_run
//! use qtvr_mosaic::{run, Codecs};
//! use std::path::Path;
//!
//! fn main() -> Result<(), qtvr_mosaic::Error> {
//!     let outcome = run(Path::new("VIDEO.MOV"), Path::new("."), &Codecs::default())?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod atom;
pub mod atom_types;
pub mod codec;
pub mod error;
pub mod fixed;
pub mod fourcc;
pub mod mosaic;
pub mod palette;
pub mod qtvr;
pub mod reader;
pub mod sample_table;

use std::path::{Path, PathBuf};

use tracing::error;

pub use codec::Codecs;
pub use error::Error;
use error::Result;
use fourcc::FourCC;
use qtvr::QtvrKind;

/// What a single `run()` call produced, for the CLI to report and tests to
/// assert on without inspecting the filesystem blind.
#[derive(Debug)]
pub enum ExitOutcome {
    /// Mosaics were written for a recognized QTVR 1 movie.
    Wrote { kind: QtvrKind, paths: Vec<PathBuf> },
    /// The file parsed fine but `ctyp` is missing or unrecognized. Not a failure.
    NotQtvr,
    /// `ctyp` identified a QTVR version this crate doesn't implement (v2+). Not a failure.
    UnsupportedVersion(FourCC),
}

/// Parse `input`, classify it, and (if it is a QTVR 1 movie) render its
/// mosaics into `out_dir`. This is the library entry point `main` wraps;
/// tests call it directly so no scenario needs a spawned subprocess.
pub fn run(input: &Path, out_dir: &Path, codecs: &Codecs) -> Result<ExitOutcome> {
    let bytes = std::fs::read(input)?;
    let parsed = atom::parse_file(&bytes)?;

    let kind = match qtvr::classify(&parsed.root) {
        Ok(kind) => kind,
        Err(Error::NotQtvr) => return Ok(ExitOutcome::NotQtvr),
        Err(Error::UnsupportedQtvr(id)) => return Ok(ExitOutcome::UnsupportedVersion(id)),
        Err(e) => {
            error!(error = %e, "classification failed");
            return Err(e);
        }
    };

    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    match mosaic::generate_mosaics(&bytes, &parsed.root, kind, stem, codecs, out_dir) {
        Ok(paths) => Ok(ExitOutcome::Wrote { kind, paths }),
        Err(e) => {
            error!(error = %e, "mosaic generation failed");
            Err(e)
        }
    }
}
