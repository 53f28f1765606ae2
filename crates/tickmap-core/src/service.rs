//! Application-level equity queries over an owned [`EquityMap`].

use std::io::{self, BufRead};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    parse_equity, Equity, EquityMap, EquityQuery, Identifier, LoadError, LowestPe, PeRange,
    RecordError, Rejected,
};

/// Outcome of one ingestion pass.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records stored, counting overwrites.
    pub inserted: usize,
    /// Records that replaced an earlier record with the same identifier.
    pub replaced: usize,
    /// Lines skipped because they failed validation, in input order.
    pub rejected: Vec<Rejected>,
}

impl IngestReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Owns the equity store and answers queries against it.
#[derive(Debug, Default)]
pub struct EquityService {
    map: EquityMap,
}

impl EquityService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a buffered reader; see [`EquityService::ingest_lines`].
    ///
    /// Lines end at `\n` or `\r\n`. The header is skipped as raw bytes. A
    /// record line that is not valid UTF-8 is rejected with
    /// [`RecordError::Encoding`]; only a failing read aborts with
    /// [`LoadError::Io`].
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R) -> Result<IngestReport, LoadError> {
        let mut buf = Vec::new();
        if !read_raw_line(&mut reader, &mut buf)? {
            return Err(LoadError::MissingHeader);
        }

        let mut report = IngestReport::default();
        let mut line_number = 1;
        while read_raw_line(&mut reader, &mut buf)? {
            line_number += 1;
            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) => parse_equity(line),
                Err(error) => Err(Rejected::new(
                    String::from_utf8_lossy(&buf),
                    RecordError::Encoding {
                        valid_up_to: error.valid_up_to(),
                    },
                )),
            };
            self.accept(&mut report, line_number, parsed);
        }

        self.log_summary(&report);
        Ok(report)
    }

    /// Load records from a sequence of lines.
    ///
    /// The first line is a header and is discarded without inspection. A
    /// source without any line fails with [`LoadError::MissingHeader`]; bad
    /// record lines are skipped and listed in the report.
    pub fn ingest_lines<I, S>(&mut self, lines: I) -> Result<IngestReport, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        lines.next().ok_or(LoadError::MissingHeader)?;

        let mut report = IngestReport::default();
        // Header is line 1.
        for (offset, line) in lines.enumerate() {
            self.accept(&mut report, offset + 2, parse_equity(line.as_ref()));
        }

        self.log_summary(&report);
        Ok(report)
    }

    fn accept(
        &mut self,
        report: &mut IngestReport,
        line_number: usize,
        parsed: Result<Equity, Rejected>,
    ) {
        match parsed {
            Ok(equity) => {
                let identifier = equity.identifier().clone();
                if self.map.insert(equity).is_some() {
                    debug!(%identifier, line_number, "replaced equity");
                    report.replaced += 1;
                } else {
                    debug!(%identifier, line_number, "inserted equity");
                }
                report.inserted += 1;
            }
            Err(rejected) => {
                let rejected = rejected.at_line(line_number);
                warn!(
                    line_number,
                    error = %rejected.error(),
                    line = rejected.line(),
                    "skipping record"
                );
                report.rejected.push(rejected);
            }
        }
    }

    fn log_summary(&self, report: &IngestReport) {
        info!(
            inserted = report.inserted,
            replaced = report.replaced,
            rejected = report.rejected.len(),
            total = self.map.len(),
            "ingest complete"
        );
    }

    pub fn equities(&self) -> &EquityMap {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn lookup(&self, identifier: &str) -> Option<Arc<Equity>> {
        let found = self.map.find(identifier).cloned();
        if found.is_none() {
            debug!(identifier, "no such equity");
        }
        found
    }

    /// Every identifier in ascending order.
    pub fn all_keys(&self) -> Vec<Identifier> {
        self.map.keys().cloned().collect()
    }

    /// Every identifier in ascending order, one per line.
    pub fn all_security_codes(&self) -> String {
        self.map.keys().fold(String::new(), |mut codes, identifier| {
            codes.push_str(identifier.as_str());
            codes.push('\n');
            codes
        })
    }

    pub fn find_best<Q>(&self, comparator: &Q) -> Option<Arc<Equity>>
    where
        Q: EquityQuery + ?Sized,
    {
        self.map.reduce(comparator)
    }

    pub fn select<Q>(&self, predicate: &Q) -> EquityMap
    where
        Q: EquityQuery + ?Sized,
    {
        self.map.select(predicate)
    }

    /// Identifier of the equity with the lowest P/E, cheapest price first on ties.
    pub fn lowest_pe(&self) -> Option<Identifier> {
        self.find_best(&LowestPe)
            .map(|equity| equity.identifier().clone())
    }

    /// Equities with `min <= P/E <= max`.
    pub fn select_pe_range(&self, min: f64, max: f64) -> EquityMap {
        self.select(&PeRange::new(min, max))
    }
}

/// Read one line into `buf` without its `\n` or `\r\n` terminator.
///
/// Returns `false` at end of input.
fn read_raw_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(true)
}
