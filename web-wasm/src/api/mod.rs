mod backend;

pub use backend::FetchClient;
