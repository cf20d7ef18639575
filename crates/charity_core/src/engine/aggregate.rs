//! Field totals across a collection.

use super::Engine;
use crate::error::CoreResult;
use charity_store::{Document, Value};
use std::fmt;
use tracing::{debug, warn};

/// Sum of a numeric field.
///
/// Stays integral while every summed value is an integer and the sum fits
/// in an `i64`; any double, or an overflow, turns it into a double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    /// Integral sum.
    Integer(i64),
    /// Floating-point sum.
    Double(f64),
}

impl Total {
    #[allow(clippy::cast_precision_loss)]
    fn as_f64(self) -> f64 {
        match self {
            Total::Integer(n) => n as f64,
            Total::Double(d) => d,
        }
    }

    /// Adds one value, returning `None` if it is not a number.
    #[allow(clippy::cast_precision_loss)]
    fn add(self, value: &Value) -> Option<Total> {
        let next = match (self, value) {
            (Total::Integer(acc), Value::Int32(_) | Value::Integer(_)) => {
                let n = value.as_integer()?;
                acc.checked_add(n)
                    .map_or(Total::Double(acc as f64 + n as f64), Total::Integer)
            }
            (Total::Double(acc), Value::Int32(_) | Value::Integer(_)) => {
                Total::Double(acc + value.as_integer()? as f64)
            }
            (acc, Value::Double(d)) => Total::Double(acc.as_f64() + d),
            _ => return None,
        };
        Some(next)
    }
}

impl Default for Total {
    fn default() -> Self {
        Total::Integer(0)
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Integer(n) => write!(f, "{n}"),
            Total::Double(d) => write!(f, "{d}"),
        }
    }
}

/// Result of [`Engine::total`].
#[derive(Debug, Clone, PartialEq)]
pub enum TotalOutcome {
    /// Every document was visited.
    Summed {
        /// The sum of the numeric values found.
        total: Total,
        /// Documents whose field was numeric.
        counted: usize,
        /// Documents where the field was missing or not a number.
        skipped: usize,
    },
    /// A store error stopped the scan; carries its text.
    Failed(String),
}

/// Running totals over a document scan.
#[derive(Debug, Default)]
struct Tally {
    total: Total,
    counted: usize,
    skipped: usize,
}

impl Tally {
    fn visit(&mut self, document: &Document, field: &str) {
        let next = document.get(field).and_then(|value| {
            let next = self.total.add(value);
            if next.is_none() {
                debug!(field, kind = value.kind(), "skipping non-numeric value");
            }
            next
        });
        match next {
            Some(total) => {
                self.total = total;
                self.counted += 1;
            }
            None => self.skipped += 1,
        }
    }
}

impl Engine<'_> {
    /// Sums one numeric field over every document of a collection.
    ///
    /// Documents where the field is missing or holds a non-number are
    /// skipped and counted.
    ///
    /// # Errors
    ///
    /// Only console shutdown conditions are returned as errors.
    pub fn total(&mut self, collection: &str) -> CoreResult<TotalOutcome> {
        self.say(format!("\n--- Total of a field in collection: {collection} ---"));
        let field = self.ask("Enter field name to total: ")?;

        let store = self.store;
        let documents = match store.iter_all(collection) {
            Ok(documents) => documents,
            Err(e) => return Ok(self.report_total_error(collection, &e)),
        };

        let mut tally = Tally::default();
        for next in documents {
            match next {
                Ok(document) => tally.visit(&document, &field),
                Err(e) => return Ok(self.report_total_error(collection, &e)),
            }
        }

        debug!(
            collection,
            %field,
            counted = tally.counted,
            skipped = tally.skipped,
            "summed field"
        );
        self.say(format!("Total {field}: {}", tally.total));
        if tally.skipped > 0 {
            self.say(format!(
                "Skipped {} documents without a numeric '{field}'.",
                tally.skipped
            ));
        }
        Ok(TotalOutcome::Summed {
            total: tally.total,
            counted: tally.counted,
            skipped: tally.skipped,
        })
    }

    fn report_total_error(
        &mut self,
        collection: &str,
        error: &charity_store::StoreError,
    ) -> TotalOutcome {
        warn!(collection, error = %error, "total failed");
        self.say(format!("Error: {error}"));
        TotalOutcome::Failed(error.to_string())
    }
}
