//! Line-oriented reading of the text inputs.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open `path` for buffered sequential reading.
pub fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| Error::open(path, e))
}

/// Feed every line of `reader` to `visit`, in order, and return how many
/// lines were read.
///
/// Lines are split on `\n` with a trailing `\r` removed. Bytes that are not
/// valid UTF-8 are replaced rather than rejected. A read failure aborts the
/// scan with [`Error::Read`]; `path` only labels that error.
pub fn for_each_line<R, F>(mut reader: R, path: &Path, mut visit: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| Error::read(path, line_no + 1, e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        visit(&String::from_utf8_lossy(&buf));
    }
    Ok(line_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn collect(input: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        for_each_line(Cursor::new(input), Path::new("mem"), |l| lines.push(l.to_string()))
            .unwrap();
        lines
    }

    #[test]
    fn splits_lines() {
        assert_eq!(collect(b"a\nb\r\n\nc"), vec!["a", "b", "", "c"]);
        assert!(collect(b"").is_empty());
    }

    #[test]
    fn lossy_utf8() {
        assert_eq!(collect(b"ok\n\xff\xfe x\n"), vec!["ok", "\u{fffd}\u{fffd} x"]);
    }

    struct FailAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.data.read(out)? {
                0 => Err(io::Error::other("device gone")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_error_is_fatal() {
        let reader = io::BufReader::new(FailAfter {
            data: Cursor::new(b"one\ntwo\nthr".to_vec()),
        });
        let mut seen = 0;
        let err = for_each_line(reader, Path::new("dump.txt"), |_| seen += 1).unwrap_err();
        match err {
            Error::Read { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn open_missing_file() {
        let err = open(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
    }
}
