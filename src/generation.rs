//! Contract with the generative-text service
//!
//! Transcription, style analysis, generation and refinement all share one
//! shape: check the inputs, build a prompt around upstream data, send it to
//! the service and wrap the reply in a [`Script`]. The service is anything
//! implementing [`TextGenerator`]; no client ships with this crate.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::script::{Script, ScriptKind};

static YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:\S*&)?v=|shorts/|embed/|live/)|youtu\.be/)[\w-]{6,}",
    )
    .unwrap()
});

/// A text-in, text-out completion service
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String, GenerationError>,
{
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self(prompt)
    }
}

/// One round trip to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction<'a> {
    Transcribe { video_url: &'a str },
    AnalyzeStyle { transcript: &'a str },
    Generate { style: &'a str, topic: &'a str },
    Refine { script: &'a str, instructions: &'a str },
}

impl<'a> ScriptAction<'a> {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptAction::Transcribe { .. } => "transcribe",
            ScriptAction::AnalyzeStyle { .. } => "analyze_style",
            ScriptAction::Generate { .. } => "generate",
            ScriptAction::Refine { .. } => "refine",
        }
    }

    pub fn output_kind(&self) -> ScriptKind {
        match self {
            ScriptAction::Transcribe { .. } => ScriptKind::Transcript,
            ScriptAction::AnalyzeStyle { .. } => ScriptKind::StyleAnalysis,
            ScriptAction::Generate { .. } => ScriptKind::Generated,
            ScriptAction::Refine { .. } => ScriptKind::Refined,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        fn required(value: &str, what: &str) -> Result<(), GenerationError> {
            if value.trim().is_empty() {
                Err(GenerationError::InvalidInput(format!("{} is required", what)))
            } else {
                Ok(())
            }
        }

        match self {
            ScriptAction::Transcribe { video_url } => {
                required(video_url, "video URL")?;
                if !is_youtube_url(video_url) {
                    return Err(GenerationError::InvalidInput(
                        "please enter a valid YouTube URL".to_string(),
                    ));
                }
                Ok(())
            }
            ScriptAction::AnalyzeStyle { transcript } => required(transcript, "transcript"),
            ScriptAction::Generate { style, topic } => {
                required(style, "style analysis")?;
                required(topic, "topic")
            }
            ScriptAction::Refine {
                script,
                instructions,
            } => {
                required(script, "script")?;
                required(instructions, "refinement instructions")
            }
        }
    }

    /// Prompt sent to the service, with the upstream data embedded
    pub fn prompt(&self) -> String {
        match self {
            ScriptAction::Transcribe { video_url } => format!(
                "Transcribe the spoken content of this YouTube video word for word. \
                 Return plain text only.\n\nVideo: {}",
                video_url.trim()
            ),
            ScriptAction::AnalyzeStyle { transcript } => format!(
                "Analyze the speaking style of this transcript: tone, pacing, hooks, \
                 vocabulary and structure.\n\nTranscript:\n{}",
                transcript.trim()
            ),
            ScriptAction::Generate { style, topic } => format!(
                "Write a YouTube video script about the topic below, matching the \
                 style analysis.\n\nStyle analysis:\n{}\n\nTopic: {}",
                style.trim(),
                topic.trim()
            ),
            ScriptAction::Refine {
                script,
                instructions,
            } => format!(
                "Revise this YouTube script following the instructions. Keep the \
                 same voice.\n\nInstructions: {}\n\nScript:\n{}",
                instructions.trim(),
                script.trim()
            ),
        }
    }
}

pub fn is_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url.trim())
}

/// Validate, prompt, call the service and wrap the reply
pub fn run_action<G>(generator: &G, action: &ScriptAction<'_>) -> Result<Script, GenerationError>
where
    G: TextGenerator + ?Sized,
{
    action.validate()?;

    let reply = generator.generate(&action.prompt()).map_err(|e| {
        warn!(action = action.name(), error = %e, "Generation failed");
        e
    })?;

    if reply.trim().is_empty() {
        warn!(action = action.name(), "Generation returned nothing");
        return Err(GenerationError::EmptyResponse);
    }

    info!(action = action.name(), chars = reply.len(), "Generation completed");
    Ok(Script::new(action.output_kind(), reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clean::{CleanMode, ScriptCleaner};
    use std::cell::RefCell;

    struct Recorder {
        prompts: RefCell<Vec<String>>,
        reply: Result<String, GenerationError>,
    }

    impl Recorder {
        fn replying(reply: Result<String, GenerationError>) -> Self {
            Self {
                prompts: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl TextGenerator for Recorder {
        fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.reply.clone()
        }
    }

    #[test]
    fn test_youtube_urls() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://m.youtube.com/shorts/abc123XYZ"));
        assert!(is_youtube_url("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"));
        assert!(!is_youtube_url("https://vimeo.com/123456"));
        assert!(!is_youtube_url("https://www.youtube.com/"));
    }

    #[test]
    fn test_invalid_input_never_reaches_service() {
        let service = Recorder::replying(Ok("unused".to_string()));
        let err = run_action(&service, &ScriptAction::Transcribe { video_url: "not a url" })
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidInput(_)));

        let err = run_action(
            &service,
            &ScriptAction::Refine {
                script: "Hello",
                instructions: "  ",
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidInput("refinement instructions is required".to_string())
        );
        assert!(service.prompts.borrow().is_empty());
    }

    #[test]
    fn test_prompt_embeds_upstream_data() {
        let service = Recorder::replying(Ok("**[0:00] Hook**\nHost: Big news today.".to_string()));
        let script = run_action(
            &service,
            &ScriptAction::Generate {
                style: "energetic, short sentences",
                topic: "budget travel",
            },
        )
        .unwrap();

        let prompts = service.prompts.borrow();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("energetic, short sentences"));
        assert!(prompts[0].contains("budget travel"));
        assert_eq!(script.kind(), ScriptKind::Generated);
        assert_eq!(
            script.cleaned(&ScriptCleaner::default(), CleanMode::Basic),
            "Big news today."
        );
    }

    #[test]
    fn test_service_failures_surface() {
        let service = Recorder::replying(Err(GenerationError::Quota("429".to_string())));
        let err = run_action(&service, &ScriptAction::AnalyzeStyle { transcript: "hi" })
            .unwrap_err();
        assert_eq!(err, GenerationError::Quota("429".to_string()));

        let service = Recorder::replying(Ok("   ".to_string()));
        let err = run_action(&service, &ScriptAction::AnalyzeStyle { transcript: "hi" })
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[test]
    fn test_closures_are_generators() {
        let echo = |prompt: &str| Ok::<_, GenerationError>(format!("echo: {}", prompt.len()));
        let script = run_action(
            &echo,
            &ScriptAction::Refine {
                script: "Old line.",
                instructions: "make it punchier",
            },
        )
        .unwrap();
        assert_eq!(script.kind(), ScriptKind::Refined);
        assert!(script.raw().starts_with("echo: "));
    }
}
