use crate::domain::model::QuoteRequest;
use crate::domain::report::QuoteOutcome;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn suggestion_count(&self) -> usize;
}

pub trait Pipeline {
    fn extract(&self) -> Result<QuoteRequest>;
    fn transform(&self, request: QuoteRequest) -> Result<QuoteOutcome>;
    fn load(&self, outcome: QuoteOutcome) -> Result<String>;
}
