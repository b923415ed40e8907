//! Request, result, and category models shared by every TruthLens crate.

pub mod bias;
pub mod catalog;
pub mod request;
pub mod result;
pub mod sentiment;
pub mod signals;
pub mod status;
pub mod technique;
pub mod verdict;

pub use bias::{BiasLevel, BiasType};
pub use catalog::SourceListing;
pub use request::AnalysisRequest;
pub use result::{AnalysisResult, ResultParts};
pub use sentiment::Sentiment;
pub use signals::{BiasSignal, ManipulationSignal, SentimentSignal, SourceAssessment};
pub use status::{EngineState, EngineStatus};
pub use technique::ManipulativeTechnique;
pub use verdict::Verdict;
