use std::path::PathBuf;
use thiserror::Error;

pub type BoardResult<T> = Result<T, BoardError>;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("source workbook not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to open workbook {}: {source}", path.display())]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("sheet '{sheet}' in {}: {detail}", path.display())]
    SheetParse {
        path: PathBuf,
        sheet: String,
        detail: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
