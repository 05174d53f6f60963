//! Starting and collecting generation runs
//!
//! A run is spawned on the tokio runtime and reports back through an
//! unbounded channel; the UI loop calls [`App::poll_generation`] every tick.

use std::time::Instant;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;

use crate::generator::{GenerationError, GenerationOutput, GenerationRequest, Generator};
use crate::history::HistoryEntry;

use super::*;

impl App {
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and spawn a run. Returns whether a run was started.
    pub fn start_generation(&mut self) -> bool {
        if !self.has_api_key() {
            self.focus = FormField::ApiKey;
            self.status = Some(StatusMessage::warning(API_KEY_WARNING));
            return false;
        }

        if self.is_generating() {
            return false;
        }

        if self.announcement.trim().is_empty() {
            self.focus = FormField::Announcement;
            self.status = Some(StatusMessage::warning(EMPTY_ANNOUNCEMENT_HINT));
            return false;
        }

        let provider = match (self.provider_factory)(self.api_key.trim()) {
            Ok(provider) => provider,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create content provider");
                self.status = Some(StatusMessage::error(format!("Could not create client: {}", e)));
                return false;
            }
        };

        let request = GenerationRequest::new(self.announcement.clone(), self.language);
        let generator = Generator::new(provider, self.policy);

        // Create channel for receiving the result
        let (tx, rx) = mpsc::unbounded_channel();
        let task_request = request.clone();
        self.tokio_handle.spawn(async move {
            let result = generator.run(&task_request).await;
            let _ = tx.send(result);
        });

        tracing::info!(language = %request.language, "Generation started");

        self.pending = Some(PendingGeneration {
            request,
            started: Instant::now(),
            rx,
        });
        self.spinner_frame = 0;
        self.status = Some(StatusMessage::info("Generating content..."));
        true
    }

    /// Collect the result of the running generation, if it has finished
    pub fn poll_generation(&mut self) {
        let received = match self.pending.as_mut() {
            Some(pending) => pending.rx.try_recv(),
            None => return,
        };

        match received {
            Ok(result) => {
                if let Some(pending) = self.pending.take() {
                    self.finish_generation(pending, result);
                }
            }
            Err(TryRecvError::Empty) => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                tracing::error!("Generation task ended without a result");
                self.status = Some(StatusMessage::error(
                    "Generation stopped unexpectedly; see the log for details.",
                ));
            }
        }
    }

    fn finish_generation(
        &mut self,
        pending: PendingGeneration,
        result: Result<GenerationOutput, GenerationError>,
    ) {
        let elapsed = pending.started.elapsed();

        match result {
            Ok(output) => {
                let has_image = output.image_url.is_some();
                let number = self.history.push(HistoryEntry::new(pending.request, output));
                self.show_entry(number);
                self.history_selected = 0;

                tracing::info!(
                    run = number,
                    elapsed_ms = elapsed.as_millis() as u64,
                    has_image,
                    "Generation finished"
                );

                self.status = Some(if has_image {
                    StatusMessage::success(format!(
                        "Generated posts and image in {:.1}s",
                        elapsed.as_secs_f32()
                    ))
                } else {
                    StatusMessage::warning("Posts generated, but image generation failed.")
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "Generation failed");
                self.status = Some(StatusMessage::error(format!("Generation failed: {}", e)));
            }
        }
    }

    /// Run shown in the results pane
    pub fn displayed(&self) -> Option<&HistoryEntry> {
        self.displayed_entry.and_then(|n| self.history.get(n))
    }
}
