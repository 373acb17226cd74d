use crate::domain::report::{Mismatch, ValidationReport};
use std::io::{self, Write};

/// Writes a validation report as human-readable text.
///
/// Counts first, then one detail line per mismatch. The output is a
/// faithful rendering of the report; it adds no pass/fail judgement.
pub struct ReportWriter<W: Write> {
    out: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_report(&mut self, report: &ValidationReport) -> io::Result<()> {
        writeln!(self.out, "CHECKS:")?;
        writeln!(
            self.out,
            "- orders_missing_customers: {}",
            report.orders_missing_customers
        )?;
        writeln!(
            self.out,
            "- payments_missing_orders: {}",
            report.payments_missing_orders
        )?;
        writeln!(
            self.out,
            "- order_item_mismatches: {}",
            report.order_item_mismatch_count
        )?;
        self.write_mismatches(&report.order_item_mismatches)?;
        writeln!(
            self.out,
            "- payment_mismatches: {}",
            report.payment_mismatch_count
        )?;
        self.write_mismatches(&report.payment_mismatches)?;
        self.out.flush()
    }

    fn write_mismatches(&mut self, mismatches: &[Mismatch]) -> io::Result<()> {
        for m in mismatches {
            writeln!(
                self.out,
                "    order {}: expected {}, actual {}, delta {}",
                m.order_id, m.expected, m.actual, m.delta
            )?;
        }
        Ok(())
    }
}
