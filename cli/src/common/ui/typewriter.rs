//! # Typewriter Renderer
//!
//! File: cli/src/common/ui/typewriter.rs
//!
//! Writes bot speech character by character, flushing and pausing after each
//! one. A zero delay turns the animation off and writes whole lines.
//!
use super::Renderer;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

#[derive(Debug)]
pub struct Typewriter<W: Write> {
    out: W,
    delay: Duration,
}

impl<W: Write> Typewriter<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for Typewriter<W> {
    fn say(&mut self, text: &str) -> io::Result<()> {
        if self.delay.is_zero() {
            return self.line(text);
        }
        let mut buf = [0u8; 4];
        for c in text.chars() {
            self.out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            self.out.flush()?;
            thread::sleep(self.delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn instant_output() {
        let mut renderer = Typewriter::new(Vec::new(), Duration::ZERO);
        renderer.say("Stay safe’").unwrap();
        renderer.line("--").unwrap();
        assert_eq!(
            String::from_utf8(renderer.into_inner()).unwrap(),
            "Stay safe’\n--\n"
        );
    }

    #[test]
    fn animated_output_is_identical_and_paced() {
        let mut renderer = Typewriter::new(Vec::new(), Duration::from_millis(2));
        let started = Instant::now();
        renderer.say("abcde").unwrap();
        assert!(started.elapsed() >= Duration::from_millis(10));
        assert_eq!(renderer.into_inner(), b"abcde\n");
    }

    /// Writer that fails every call.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let mut renderer = Typewriter::new(Broken, Duration::from_millis(1));
        let err = renderer.say("hi").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
