//! Public entry point: document text in, detection plus ranked suggestions out.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::detect::DocumentAnalyzer;
use crate::models::detection::Detection;
use crate::models::suggestion::Suggestion;
use crate::suggest::build_suggestions;

/// Source of "today" for the fallback entry date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Source of fallback piece identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random UUID implementation of [`IdGenerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Request accepted by the engine.
///
/// Only `text` is used today; the other fields are accepted from callers
/// for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseRequest {
    /// Raw document text. A missing field reads as the empty string.
    pub text: String,

    /// Caller locale, currently unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Caller currency, currently unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Caller document-type hint, currently unused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
}

impl ParseRequest {
    /// Request carrying only text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Engine response: what was read, and how it could be booked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Fields extracted from the text.
    pub detected: Detection,

    /// Candidate entries, best first.
    pub suggestions: Vec<Suggestion>,
}

/// Stateless inference engine tying the analyzer and the builder together.
///
/// Each call is pure given its text plus the injected clock and id source,
/// so one engine may serve any number of callers concurrently. The engine
/// never fails: missing data degrades to defaults and a low confidence
/// instead of an error.
pub struct SuggestionEngine {
    analyzer: DocumentAnalyzer,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl SuggestionEngine {
    /// Create an engine with the system clock and random piece identifiers.
    pub fn new() -> Self {
        Self {
            analyzer: DocumentAnalyzer::new(),
            clock: Box::new(SystemClock),
            ids: Box::new(UuidIds),
        }
    }

    /// Replace the document analyzer.
    pub fn with_analyzer(mut self, analyzer: DocumentAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the clock used for fallback entry dates.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the generator used for fallback piece identifiers.
    pub fn with_ids(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Analyze the request text and propose journal entries.
    pub fn parse_text(&self, request: &ParseRequest) -> ParseResponse {
        info!(
            "parsing document from {} characters of text",
            request.text.len()
        );

        let detected = self.analyzer.analyze(&request.text);

        let piece = detected
            .piece
            .clone()
            .unwrap_or_else(|| self.ids.generate());
        let date = detected
            .date
            .clone()
            .unwrap_or_else(|| self.clock.today().to_string());

        let suggestions = build_suggestions(&detected, &piece, &date);

        ParseResponse {
            detected,
            suggestions,
        }
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}
