//! Streaming delivery policy.
//!
//! Decides per request whether to forward live generator tokens or to emit
//! one buffered, translated chunk. Live streaming is only attempted when the
//! generator is configured and the request is in the base language, since a
//! token stream with unknown boundaries cannot be translated downstream.

use std::sync::Arc;

use async_stream::stream;
use futures_util::stream::BoxStream;
use futures_util::StreamExt;
use tracing::{debug, warn};

use crate::capability::TextGenerator;
use crate::composer::{persona_prompt, InsightComposer};
use crate::profile::BirthProfile;
use crate::translate::is_base_language;
use crate::vedic::VedicAttributes;
use crate::zodiac::ZodiacSign;

/// Finite, single-consumption sequence of insight chunks.
///
/// Concatenating the chunks in emission order yields the delivered insight
/// text. Dropping the stream before exhaustion cancels any in-flight
/// generation session.
pub type InsightStream = BoxStream<'static, String>;

/// Chooses between the live token stream and the buffered fallback.
pub struct StreamingOrchestrator {
    generator: Option<Arc<dyn TextGenerator>>,
    composer: Arc<InsightComposer>,
}

impl StreamingOrchestrator {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, composer: Arc<InsightComposer>) -> Self {
        Self {
            generator,
            composer,
        }
    }

    /// Produce the chunk sequence for one request.
    ///
    /// Live path: generator tokens forwarded in arrival order. A token is
    /// released only once its successor arrives, so a session that fails
    /// mid-stream never emits its error-adjacent token; on any stream error
    /// the live path is abandoned and the buffered path takes over. Buffered
    /// path: exactly one chunk from [`InsightComposer::compose`].
    pub fn stream(
        &self,
        profile: BirthProfile,
        zodiac: ZodiacSign,
        vedic: VedicAttributes,
    ) -> InsightStream {
        let generator = self
            .generator
            .clone()
            .filter(|_| is_base_language(&profile.language));
        let composer = Arc::clone(&self.composer);

        Box::pin(stream! {
            let mut live_done = false;
            if let Some(generator) = generator {
                let prompt = persona_prompt(&profile, zodiac, &vedic);
                match generator.stream_complete(&prompt).await {
                    Ok(mut tokens) => {
                        let mut held: Option<String> = None;
                        let mut failed = false;
                        loop {
                            match tokens.next().await {
                                Some(Ok(token)) => {
                                    if let Some(ready) = held.replace(token) {
                                        yield ready;
                                    }
                                }
                                Some(Err(e)) => {
                                    warn!(error = %e, "generation stream failed; switching to buffered fallback");
                                    failed = true;
                                    break;
                                }
                                None => break,
                            }
                        }
                        if !failed {
                            if let Some(last) = held {
                                yield last;
                            }
                            live_done = true;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "could not open generation stream; using buffered fallback");
                    }
                }
            } else {
                debug!(language = %profile.language, "live path unavailable for request; using buffered path");
            }

            if !live_done {
                yield composer.compose(&profile, zodiac, &vedic).await;
            }
        })
    }
}
