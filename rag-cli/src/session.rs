//! Interactive session: load documents, answer questions over them.
//!
//! A [`DocSession`] owns the two collaborator clients and the only mutable
//! state in the program, the chunk vector. A load replaces the chunks
//! wholesale and only on success; a failed load or query reports its error
//! and leaves the session usable.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use thiserror::Error;
use tracing::debug;

use doc_store::{ObjectStoreClient, StoreError};
use inference_service::{CompletionService, InferenceError};
use rag_core::{build_prompt, chunk, select_relevant};

use crate::commands::{self, Command};

/// Soft chunk-size bound in characters.
const CHUNK_SIZE: usize = 1000;

/// Number of chunks fed to the model per question.
const MAX_CONTEXT_CHUNKS: usize = 3;

/// Errors raised while serving one command or question.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A question arrived before any document was loaded.
    #[error("no document has been processed yet")]
    NoDocument,

    /// Fetching the document from the object store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The model invocation failed.
    #[error(transparent)]
    Inference(#[from] InferenceError),

    /// The fetched object is not text.
    #[error("document is not valid UTF-8: {0}")]
    NotText(#[from] std::string::FromUtf8Error),
}

/// What a successful load did, for operator reporting.
pub struct LoadReport {
    pub bytes: usize,
    pub chunks: usize,
}

/// A successful answer together with the context that produced it.
#[derive(Debug)]
pub struct Answer {
    pub completion: String,
    pub context: Vec<String>,
}

/// A single-operator session over one loaded document.
pub struct DocSession {
    store: ObjectStoreClient,
    completions: CompletionService,
    chunks: Vec<String>,
}

impl DocSession {
    pub fn new(store: ObjectStoreClient, completions: CompletionService) -> Self {
        Self {
            store,
            completions,
            chunks: Vec::new(),
        }
    }

    /// Fetch `key` from the store, chunk it, and replace the session state.
    ///
    /// State is only touched after every fallible step succeeded.
    pub async fn load(&mut self, key: &str) -> Result<LoadReport, SessionError> {
        let bytes = self.store.get_object(key).await?;
        let text = String::from_utf8(bytes)?;
        let chunks = chunk(&text, CHUNK_SIZE);

        let report = LoadReport {
            bytes: text.len(),
            chunks: chunks.len(),
        };
        self.chunks = chunks;
        Ok(report)
    }

    /// Chunk count of the loaded document, or `None` while idle.
    pub fn status(&self) -> Option<usize> {
        if self.chunks.is_empty() {
            None
        } else {
            Some(self.chunks.len())
        }
    }

    /// Answer one question from the loaded document.
    ///
    /// Fails with [`SessionError::NoDocument`] before any network call when
    /// nothing is loaded.
    pub async fn query(&self, question: &str) -> Result<Answer, SessionError> {
        if self.chunks.is_empty() {
            return Err(SessionError::NoDocument);
        }

        let context = select_relevant(&self.chunks, question, MAX_CONTEXT_CHUNKS);
        let prompt = build_prompt(question, &context);

        debug!(context_chunks = context.len(), "invoking model");
        let completion = self.completions.complete(&prompt).await?;

        Ok(Answer {
            completion,
            context,
        })
    }

    /// One-shot mode: optionally load a key, optionally answer a question.
    pub async fn run_once(
        &mut self,
        key: Option<&str>,
        query: Option<&str>,
    ) -> anyhow::Result<()> {
        if let Some(key) = key {
            let report = self.load(key).await?;
            println!(
                "document loaded: {} bytes, {} chunks",
                report.bytes, report.chunks
            );
        }

        if let Some(question) = query {
            let answer = self.query(question).await?;
            println!("{}", answer.completion.trim());
        }

        Ok(())
    }

    /// Run the interactive loop until `/quit` or end-of-input.
    pub async fn run_interactive(&mut self) -> anyhow::Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline("rag> ") {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    match commands::parse(input) {
                        Command::Quit => break,
                        Command::Status => self.report_status(),
                        Command::Load(key) => self.handle_load(key).await,
                        Command::LoadMissingKey => {
                            println!("{} usage: /load <key>", "error:".red());
                        }
                        Command::Unknown(cmd) => {
                            println!("{} unknown command: {cmd}", "error:".red());
                        }
                        Command::Question(question) => self.handle_question(question).await,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C - just show a new prompt
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D - exit
                    println!();
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        println!("bye");
        Ok(())
    }

    fn print_welcome(&self) {
        println!("{}", "document Q&A session".bold());
        println!("commands:");
        println!("  /load <key>   load a document from the object store");
        println!("  /status       show session state");
        println!("  /quit         exit");
        println!("anything else is treated as a question about the loaded document.");
        println!();
    }

    fn report_status(&self) {
        match self.status() {
            Some(n) => println!("{} document loaded, {n} chunks", "ready:".green()),
            None => println!("no document loaded"),
        }
    }

    async fn handle_load(&mut self, key: &str) {
        println!("loading {key}...");
        match self.load(key).await {
            Ok(report) => println!(
                "{} {} bytes, {} chunks",
                "loaded:".green(),
                report.bytes,
                report.chunks
            ),
            Err(e) => println!("{} {e}", "error:".red()),
        }
    }

    async fn handle_question(&mut self, question: &str) {
        match self.query(question).await {
            Ok(answer) => {
                for (i, chunk) in answer.context.iter().enumerate() {
                    println!("{}", format!("--- context [{}] ---", i + 1).dimmed());
                    println!("{}", chunk.as_str().dimmed());
                }
                println!();
                println!("{}", answer.completion.trim());
                println!();
            }
            Err(SessionError::NoDocument) => {
                println!(
                    "{} load a document first with /load <key>",
                    "error:".red()
                );
            }
            Err(e) => println!("{} {e}", "error:".red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_store::StoreConfig;
    use inference_service::ModelConfig;

    fn session() -> DocSession {
        let store = ObjectStoreClient::new(StoreConfig {
            endpoint: "http://localhost:9000".into(),
            bucket: "docs".into(),
            timeout_secs: Some(1),
        })
        .unwrap();
        let completions = CompletionService::new(ModelConfig {
            region: "us-east-1".into(),
            model: "anthropic.claude-v2".into(),
            endpoint: "http://localhost:9001".into(),
            max_tokens: 100,
            temperature: 0.5,
            stop_sequences: vec!["\n\nHuman:".into()],
            timeout_secs: Some(1),
        })
        .unwrap();
        DocSession::new(store, completions)
    }

    #[tokio::test]
    async fn query_without_a_document_fails_before_any_network_call() {
        // Both clients point at unbound local ports; the early precondition
        // check must reject the question without ever reaching them.
        let session = session();
        let err = session.query("anything").await.unwrap_err();
        assert!(matches!(err, SessionError::NoDocument));
    }

    #[test]
    fn status_reflects_chunk_state() {
        let mut session = session();
        assert_eq!(session.status(), None);

        session.chunks = vec!["one".into(), "two".into()];
        assert_eq!(session.status(), Some(2));
    }
}
