//! Boycott Check Common Library
//!
//! Web(WASM)とCLIで共有される型・画面状態・APIフロー

pub mod api;
pub mod autocomplete;
pub mod error;
pub mod messages;
pub mod panel;
pub mod recognition;
pub mod report;
pub mod transition;
pub mod types;
pub mod view;

pub use api::BoycottApi;
pub use autocomplete::{AutocompleteTracker, Suggestions, Ticket};
pub use error::{ClientError, Result};
pub use panel::{BoycottStatus, PanelBlock, ResultPanel, ResultSink};
pub use recognition::{process_image, search_product, RecognitionOutcome};
pub use transition::{PageTransition, TransitionAction, TransitionPhase};
pub use types::{
    AddProductRequest, AddProductResponse, Alternative, NameQuery, Product, ProductId,
    RecognitionResult, SearchResponse,
};
pub use view::{Chrome, Mode, ViewState};
