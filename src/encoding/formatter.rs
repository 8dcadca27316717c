// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON formatter for feed output.
//!
//! Wraps a serde_json formatter (pretty or compact) and writes doubles with
//! no fractional part as integers, so a volume of `2300.0` goes out as `2300`.

use std::io;

use serde_json::ser::Formatter;

/// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Formatter writing integral doubles without a fraction.
#[derive(Debug, Clone)]
pub struct WireFormatter<F> {
    inner: F,
}

impl<F: Formatter> WireFormatter<F> {
    /// Wrap a formatter.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Formatter> Formatter for WireFormatter<F> {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
            self.inner.write_i64(writer, value as i64)
        } else {
            self.inner.write_f64(writer, value)
        }
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;
    use serde_json::ser::{CompactFormatter, PrettyFormatter};

    fn write<F: Formatter>(value: &serde_json::Value, formatter: F) -> String {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, WireFormatter::new(formatter));
        value.serialize(&mut serializer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_integral_doubles_have_no_fraction() {
        let value = json!({ "volume_vph": 2300.0, "value": 10.0, "offset": -3.0 });
        assert_eq!(
            write(&value, CompactFormatter),
            r#"{"offset":-3,"value":10,"volume_vph":2300}"#
        );
    }

    #[test]
    fn test_fractional_doubles_unchanged() {
        let value = json!([89.4, 5.22, -93.77668405099996, 41.617961698000045]);
        assert_eq!(
            write(&value, CompactFormatter),
            "[89.4,5.22,-93.77668405099996,41.617961698000045]"
        );
    }

    #[test]
    fn test_huge_doubles_fall_back_to_float_text() {
        let value = json!([1e300]);
        assert_eq!(write(&value, CompactFormatter), "[1e300]");
    }

    #[test]
    fn test_pretty_layout_preserved() {
        let value = json!({ "order": 1, "widths": [10.0, 2.5] });
        let indent = b"    ";
        let text = write(&value, PrettyFormatter::with_indent(indent));
        assert_eq!(
            text,
            "{\n    \"order\": 1,\n    \"widths\": [\n        10,\n        2.5\n    ]\n}"
        );
    }
}
