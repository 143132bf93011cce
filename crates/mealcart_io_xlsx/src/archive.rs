//! Artifact plans packaged into a downloadable ZIP archive.

use std::fmt;
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use mealcart_manifest::run::SpecArtifactPlan;

use crate::writer::render_sheet_to_workbook_bytes;

/// "Archive assembly failed" errors.
#[derive(Debug)]
pub enum RenderArchiveError {
    /// One workbook failed to render.
    Workbook {
        /// Archive entry name of the failed workbook.
        file_name: String,
        /// Underlying error text.
        message: String,
    },
    /// ZIP container write failure.
    Zip {
        /// Underlying error text.
        message: String,
    },
}

impl fmt::Display for RenderArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workbook { file_name, message } => {
                write!(f, "Failed to render {file_name}: {message}")
            }
            Self::Zip { message } => write!(f, "Failed to assemble archive: {message}"),
        }
    }
}

impl std::error::Error for RenderArchiveError {}

/// Render every artifact plan and package them into one ZIP archive.
///
/// Entry timestamps are fixed so identical plans produce identical container
/// metadata.
pub fn render_archive(l_artifacts: &[SpecArtifactPlan]) -> Result<Vec<u8>, RenderArchiveError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for artifact in l_artifacts {
        let v_workbook = render_sheet_to_workbook_bytes(&artifact.sheet).map_err(|message| {
            RenderArchiveError::Workbook {
                file_name: artifact.file_name.clone(),
                message,
            }
        })?;

        zip.start_file(artifact.file_name.as_str(), file_options)
            .map_err(|err| RenderArchiveError::Zip {
                message: err.to_string(),
            })?;
        zip.write_all(&v_workbook)
            .map_err(|err| RenderArchiveError::Zip {
                message: err.to_string(),
            })?;
        tracing::debug!(
            file_name = artifact.file_name.as_str(),
            cnt_rows = artifact.sheet.l_rows.len(),
            "archive entry written"
        );
    }

    let cursor = zip.finish().map_err(|err| RenderArchiveError::Zip {
        message: err.to_string(),
    })?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use mealcart_manifest::run::SpecArtifactPlan;
    use mealcart_manifest::sheet::{EnumCellValue, SpecSheetPlan};

    use super::render_archive;

    fn derive_artifact(file_name: &str) -> SpecArtifactPlan {
        SpecArtifactPlan {
            file_name: file_name.to_string(),
            sheet: SpecSheetPlan {
                sheet_name: "Manifest".to_string(),
                l_rows_preamble: vec![],
                l_columns: vec!["D.O. No.".to_string()],
                l_rows: vec![vec![EnumCellValue::String("#1001".to_string())]],
                l_cols_idx_text_forced: vec![],
            },
        }
    }

    #[test]
    fn archive_contains_one_entry_per_artifact() {
        let l_artifacts = vec![
            derive_artifact("CM_Manifest.xlsx"),
            derive_artifact("CX_Manifest.xlsx"),
        ];
        let v_archive = render_archive(&l_artifacts).expect("render archive");

        let mut zip = zip::ZipArchive::new(Cursor::new(v_archive)).expect("open archive");
        let l_names: Vec<String> = (0..zip.len())
            .map(|n_idx| zip.by_index(n_idx).expect("entry").name().to_string())
            .collect();
        assert_eq!(l_names, vec!["CM_Manifest.xlsx", "CX_Manifest.xlsx"]);
    }

    #[test]
    fn archive_entries_hold_workbook_bytes() {
        use std::io::Read;

        let v_archive = render_archive(&[derive_artifact("CM_Manifest.xlsx")]).expect("render");
        let mut zip = zip::ZipArchive::new(Cursor::new(v_archive)).expect("open archive");

        let mut entry = zip.by_index(0).expect("entry");
        let mut v_entry = Vec::new();
        entry.read_to_end(&mut v_entry).expect("read entry");
        assert_eq!(&v_entry[..2], b"PK");
    }

    #[test]
    fn empty_plan_set_yields_empty_archive() {
        let v_archive = render_archive(&[]).expect("render archive");
        let zip = zip::ZipArchive::new(Cursor::new(v_archive)).expect("open archive");
        assert_eq!(zip.len(), 0);
    }
}
