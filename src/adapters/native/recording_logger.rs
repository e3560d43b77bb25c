use crate::ports::LoggerPort;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Log,
    Warn,
    Error,
    Debug,
}

/// Logger that keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, line)| line.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lines.lock().push((level, message.to_string()));
    }
}

impl LoggerPort for RecordingLogger {
    fn log(&self, message: &str) {
        self.push(Level::Log, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }

    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_levels_in_order() {
        let logger = RecordingLogger::new();
        logger.log("a");
        logger.error("b");
        logger.warn("c");

        assert_eq!(
            logger.lines(),
            vec![
                (Level::Log, "a".to_string()),
                (Level::Error, "b".to_string()),
                (Level::Warn, "c".to_string()),
            ]
        );
        assert_eq!(logger.errors(), vec!["b".to_string()]);
    }
}
