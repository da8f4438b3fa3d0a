//! Console front-end for the intake engine.
//!
//! A thin demonstration consumer of the engine contract: it renders each
//! payload's messages, offers the listed choices, and feeds raw lines
//! back into [`Session::process`] until the flow completes.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stylist_intake::adapters::{FileTranscriptSink, TracingTranscriptSink};
use stylist_intake::config::AppConfig;
use stylist_intake::domain::intake::{Expect, Session};
use stylist_intake::ports::TranscriptSink;

fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let transcript: Arc<dyn TranscriptSink> = match &config.logging.transcript_path {
        Some(path) => match FileTranscriptSink::new(path) {
            Ok(sink) => Arc::new(sink),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to tracing transcript");
                Arc::new(TracingTranscriptSink)
            }
        },
        None => Arc::new(TracingTranscriptSink),
    };

    let mut session = Session::with_transcript(transcript);
    session.enable_clean_debug(config.features.debug_clean);

    let stdin = io::stdin();
    let mut payload = session.process(None)?;

    loop {
        for message in &payload.messages {
            println!("{message}");
        }
        if payload.done {
            break;
        }
        if payload.expect == Expect::Choice && !payload.choices.is_empty() {
            println!("[{}]", payload.choices.join(" / "));
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF: stop without completing the flow
            break;
        }
        payload = session.process(Some(&line))?;
    }

    if payload.show_summary {
        if let Some(summary) = &payload.data.user_summary {
            println!();
            println!("{summary}");
        }
    }

    Ok(())
}
