//! Sentiment data models
//!
//! Wire types for the Cloud Natural Language `documents:analyzeSentiment`
//! method and the flattened result handed to callers.

use serde::{Deserialize, Serialize};

/// Sentiment of a whole document as returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSentiment {
    /// Overall score in `[-1, 1]`
    pub score: f64,
    /// Overall non-negative magnitude
    pub magnitude: f64,
    /// Language detected or echoed by the service
    pub language: Option<String>,
    /// Per-sentence breakdown in document order
    pub sentences: Vec<SentenceScore>,
}

/// Sentiment of one sentence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub content: String,
    pub score: f64,
    pub magnitude: f64,
}

// ============================================================================
// Request body
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeSentimentRequest<'a> {
    pub document: Document<'a>,
    pub encoding_type: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct Document<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'a str>,
}

impl<'a> AnalyzeSentimentRequest<'a> {
    pub(crate) const fn plain_text(content: &'a str, language: Option<&'a str>) -> Self {
        Self {
            document: Document {
                kind: "PLAIN_TEXT",
                content,
                language,
            },
            encoding_type: "UTF8",
        }
    }
}

// ============================================================================
// Response body
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AnalyzeSentimentResponse {
    pub document_sentiment: Option<Sentiment>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub sentences: Vec<Sentence>,
}

/// Missing numbers mean zero, as in the protobuf JSON mapping
#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub(crate) struct Sentiment {
    #[serde(default)]
    pub magnitude: f64,
    #[serde(default)]
    pub score: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Sentence {
    pub text: TextSpan,
    #[serde(default)]
    pub sentiment: Sentiment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextSpan {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl AnalyzeSentimentResponse {
    /// Flatten the wire response, requiring an overall sentiment
    pub(crate) fn into_document(self) -> Option<DocumentSentiment> {
        let overall = self.document_sentiment?;
        Some(DocumentSentiment {
            score: overall.score,
            magnitude: overall.magnitude,
            language: self.language,
            sentences: self
                .sentences
                .into_iter()
                .map(|sentence| SentenceScore {
                    content: sentence.text.content,
                    score: sentence.sentiment.score,
                    magnitude: sentence.sentiment.magnitude,
                })
                .collect(),
        })
    }
}
