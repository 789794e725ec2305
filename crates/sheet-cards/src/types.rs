use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardsError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Layout error: {0}")]
    Layout(#[from] sheet_layout::LayoutError),
}

pub type Result<T> = std::result::Result<T, CardsError>;
