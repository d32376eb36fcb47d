//! Line-oriented terminal implementation of the [`Io`] port.
//!
//! Prompts are written as `Label: ` and answered with one line of input.
//! Inline validation messages are indented with `  ! `. Tables are rendered as
//! a title line followed by CSV so the output stays machine readable.

use crate::domain::ports::{Io, Table};
use crate::domain::user::Email;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

struct Console<R, W> {
    reader: R,
    writer: W,
}

pub struct ConsoleIo<R, W> {
    inner: Mutex<Console<R, W>>,
}

impl ConsoleIo<tokio::io::BufReader<tokio::io::Stdin>, tokio::io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(tokio::io::BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> ConsoleIo<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            inner: Mutex::new(Console { reader, writer }),
        }
    }

    /// Consumes the console and returns the underlying writer.
    pub fn into_writer(self) -> W {
        self.inner.into_inner().writer
    }

    async fn write(&self, text: &str) -> Result<()> {
        let mut console = self.inner.lock().await;
        console.writer.write_all(text.as_bytes()).await?;
        console.writer.flush().await?;
        Ok(())
    }

    async fn prompt(&self, label: &str) -> Result<String> {
        let mut console = self.inner.lock().await;
        console.writer.write_all(format!("{label}: ").as_bytes()).await?;
        console.writer.flush().await?;

        let mut line = String::new();
        if console.reader.read_line(&mut line).await? == 0 {
            return Err(AdminError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn render_table(title: &str, table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| AdminError::Internal(Box::new(e.into_error())))?;
    let body = String::from_utf8(body).map_err(|e| AdminError::Internal(Box::new(e)))?;
    Ok(format!("{title}\n{body}"))
}

#[async_trait]
impl<R, W> Io for ConsoleIo<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn text(&self, label: &str) -> Result<String> {
        self.prompt(label).await
    }

    async fn email(&self, label: &str) -> Result<Email> {
        loop {
            let answer = self.prompt(label).await?;
            match Email::parse(&answer) {
                Ok(email) => return Ok(email),
                Err(_) => {
                    self.field_error(label, "Please enter a valid email address.")
                        .await?
                }
            }
        }
    }

    async fn field_error(&self, _label: &str, message: &str) -> Result<()> {
        self.write(&format!("  ! {message}\n")).await
    }

    async fn markdown(&self, text: &str) -> Result<()> {
        self.write(&format!("{text}\n")).await
    }

    async fn table(&self, title: &str, table: &Table) -> Result<()> {
        let rendered = render_table(title, table)?;
        self.write(&rendered).await
    }

    async fn error(&self, message: &str) -> Result<()> {
        self.write(&format!("Error: {message}\n")).await
    }
}
