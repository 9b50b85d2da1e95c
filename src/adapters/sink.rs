use crate::domain::model::LifecycleEvent;
use crate::domain::ports::EventSink;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `1 A constructor`
    #[default]
    Text,
    /// `{"kind":"base","phase":"construct","value":1}`
    Json,
}

impl OutputFormat {
    pub fn render(self, event: &LifecycleEvent) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(event.to_string()),
            OutputFormat::Json => event.to_json(),
        }
    }
}

/// Writes one line per event.
pub struct ConsoleSink<W: Write> {
    out: RefCell<W>,
    format: OutputFormat,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out: RefCell::new(out),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_event(&self, event: &LifecycleEvent) -> Result<()> {
        let line = self.format.render(event)?;
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()?;
        Ok(())
    }
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn emit(&self, event: LifecycleEvent) {
        tracing::debug!("{}", event);
        if let Err(e) = self.write_event(&event) {
            tracing::error!("❌ Failed to write lifecycle event {}: {}", event, e);
        }
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<LifecycleEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn into_events(self) -> Vec<LifecycleEvent> {
        self.events.into_inner()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::EntityKind;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_console_sink_text_lines() {
        let sink = ConsoleSink::new(Vec::new(), OutputFormat::Text);
        sink.emit(LifecycleEvent::construct(EntityKind::Base, 1));
        sink.emit(LifecycleEvent::destruct(EntityKind::Derived, 2));

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "1 A constructor\n2 B destructor\n");
    }

    #[test]
    fn test_console_sink_json_lines() {
        let sink = ConsoleSink::new(Vec::new(), OutputFormat::Json);
        sink.emit(LifecycleEvent::construct(EntityKind::Derived, 3));

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "{\"kind\":\"derived\",\"phase\":\"construct\",\"value\":3}\n"
        );
    }

    #[test]
    fn test_console_sink_survives_write_errors() {
        let sink = ConsoleSink::new(BrokenPipe, OutputFormat::Text);
        sink.emit(LifecycleEvent::construct(EntityKind::Base, 0));
        assert!(sink.write_event(&LifecycleEvent::destruct(EntityKind::Base, 0)).is_err());
    }

    #[test]
    fn test_tee_feeds_both_sinks() {
        let recorder = RecordingSink::new();
        let console = ConsoleSink::new(Vec::new(), OutputFormat::Text);
        {
            let tee = (&console, &recorder);
            tee.emit(LifecycleEvent::construct(EntityKind::Base, 4));
        }
        assert_eq!(recorder.len(), 1);
        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            "4 A constructor\n"
        );
    }
}
