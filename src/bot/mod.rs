//! The assistant bot: a line-oriented command loop over the address book.
//!
//! A [`Session`] loads the snapshot, answers one command at a time until
//! `close`/`exit` or end of input, and saves the snapshot once on the way out.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::Dispatcher;

use crate::models::ContactStore;
use crate::repositories::SnapshotRepository;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// One run of the bot, from snapshot load to snapshot save.
pub struct Session<R: SnapshotRepository> {
    repository: R,
    dispatcher: Dispatcher,
}

impl<R: SnapshotRepository> Session<R> {
    pub fn new(repository: R, dispatcher: Dispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Load the book, talk over `input`/`output`, then save the book.
    ///
    /// The book is saved even if reading input fails part-way.
    pub async fn run<I, O>(&self, input: I, output: O) -> Result<ContactStore>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut book = self
            .repository
            .load()
            .await
            .context("Failed to load the address book")?;

        let outcome = self.converse(&mut book, input, output).await;

        self.repository
            .save(&book)
            .await
            .context("Failed to save the address book")?;
        outcome?;

        Ok(book)
    }

    async fn converse<I, O>(
        &self,
        book: &mut ContactStore,
        mut input: I,
        mut output: O,
    ) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        write_line(&mut output, GREETING).await?;
        let mut buf = Vec::new();

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                info!("End of input, closing session");
                break;
            }
            // Invalid UTF-8 is replaced, not fatal
            let line = String::from_utf8_lossy(&buf);

            let command = match parse_input(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!(error = %e, "could not parse command");
                    write_line(&mut output, &e.to_string()).await?;
                    continue;
                }
            };

            let reply = self.dispatcher.dispatch(&command, book);
            write_line(&mut output, &reply).await?;

            if command.is_exit() {
                break;
            }
        }

        Ok(())
    }
}

async fn write_line<O: AsyncWrite + Unpin>(output: &mut O, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

/// Run `session` over the process's stdin and stdout.
pub async fn run_stdio<R: SnapshotRepository>(session: &Session<R>) -> Result<ContactStore> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await
}
