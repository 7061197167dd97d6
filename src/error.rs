use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("date column `{column}` matches the date pattern but is not a valid YYYY-MM-DD date")]
    InvalidDateColumn { column: String },

    #[error("failed to load data: {0}")]
    Load(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<csv::Error> for ChartError {
    fn from(err: csv::Error) -> Self {
        Self::Load(format!("csv: {err}"))
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        Self::Load(format!("io: {err}"))
    }
}
