use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(String),
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),
    #[error("Edge not found")]
    EdgeNotFound,
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),
    #[error("No route from {from} to {to}")]
    NoRoute { from: String, to: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Snapshot error: {0}")]
    Snapshot(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
