pub mod lexicon;
pub mod overrides;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub use lexicon::LexiconTranscriber;
pub use overrides::{resolve_unknown, OverrideTable};

/// Character appended to a word the transcriber could not resolve.
pub const UNKNOWN_MARKER: char = '*';

/// Convenient alias for results returned by phoneme modules.
pub type Result<T> = std::result::Result<T, PhonemeError>;

/// Lightweight error type for lexicon parsing and loading.
#[derive(Debug, Clone)]
pub struct PhonemeError {
    message: Arc<str>,
}

impl PhonemeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }
}

impl Display for PhonemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PhonemeError {}

/// Grapheme-to-phoneme capability used by the pipeline.
///
/// Implementations return an IPA rendering of normalized text, keeping
/// whitespace and punctuation between words. A word that cannot be resolved
/// comes back as the original word followed by [`UNKNOWN_MARKER`].
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, text: &str) -> String;
}

/// Adapts a closure into a [`Transcriber`].
pub struct FnTranscriber<F>(F);

/// Wraps `f` so it can stand in for a transcription backend.
pub fn from_fn<F>(f: F) -> FnTranscriber<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    FnTranscriber(f)
}

impl<F> Transcriber for FnTranscriber<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transcribe(&self, text: &str) -> String {
        (self.0)(text)
    }
}

impl<T: Transcriber + ?Sized> Transcriber for &T {
    fn transcribe(&self, text: &str) -> String {
        (**self).transcribe(text)
    }
}

impl<T: Transcriber + ?Sized> Transcriber for Box<T> {
    fn transcribe(&self, text: &str) -> String {
        (**self).transcribe(text)
    }
}

impl<T: Transcriber + ?Sized> Transcriber for Arc<T> {
    fn transcribe(&self, text: &str) -> String {
        (**self).transcribe(text)
    }
}

/// Transcribes normalized text with the bundled lexicon.
pub fn transcribe(text: &str) -> String {
    LexiconTranscriber::shared().transcribe(text)
}

/// Appends the unknown-word marker to `word`.
pub fn mark_unknown(word: &str) -> String {
    let mut marked = String::with_capacity(word.len() + 1);
    marked.push_str(word);
    marked.push(UNKNOWN_MARKER);
    marked
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{from_fn, Transcriber};

    fn shout() -> impl Transcriber {
        from_fn(|text: &str| text.to_uppercase())
    }

    #[test]
    fn smart_pointers_forward_to_inner_transcriber() {
        let boxed: Box<dyn Transcriber> = Box::new(shout());
        let shared: Arc<dyn Transcriber> = Arc::new(shout());
        let borrowed = &shared;

        assert_eq!(boxed.transcribe("hi"), "HI");
        assert_eq!(shared.transcribe("hi"), "HI");
        assert_eq!(borrowed.transcribe("hi"), "HI");
    }
}
