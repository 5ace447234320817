//! Enum-valued request parameters.
//!
//! Every parameter here is a closed set of named variants, each with one
//! canonical string form — the form the gateway accepts on the wire.
//! Resolving a string to a variant is a lookup over the declared-order
//! variant table, never reflection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed, exhaustively enumerable request parameter.
///
/// `VARIANTS` is the declared-order table behind both string resolution and
/// the accepted-values listing in validation errors.
pub trait ParamEnum: Copy + Eq + fmt::Debug + 'static {
    /// Type name as it appears in validation errors.
    const NAME: &'static str;

    /// All variants, in declared order.
    const VARIANTS: &'static [Self];

    /// Canonical string form of this variant.
    fn as_str(&self) -> &'static str;

    /// Resolve a canonical string to a variant, if any.
    fn lookup(s: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == s)
    }
}

/// Record schema of the requested data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    Mbo,
    #[serde(rename = "mbp-1")]
    Mbp1,
    #[serde(rename = "mbp-10")]
    Mbp10,
    Tbbo,
    Trades,
    #[serde(rename = "ohlcv-1s")]
    Ohlcv1S,
    #[serde(rename = "ohlcv-1m")]
    Ohlcv1M,
    #[serde(rename = "ohlcv-1h")]
    Ohlcv1H,
    #[serde(rename = "ohlcv-1d")]
    Ohlcv1D,
    Definition,
    Statistics,
}

impl ParamEnum for Schema {
    const NAME: &'static str = "Schema";
    const VARIANTS: &'static [Self] = &[
        Schema::Mbo,
        Schema::Mbp1,
        Schema::Mbp10,
        Schema::Tbbo,
        Schema::Trades,
        Schema::Ohlcv1S,
        Schema::Ohlcv1M,
        Schema::Ohlcv1H,
        Schema::Ohlcv1D,
        Schema::Definition,
        Schema::Statistics,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Schema::Mbo => "mbo",
            Schema::Mbp1 => "mbp-1",
            Schema::Mbp10 => "mbp-10",
            Schema::Tbbo => "tbbo",
            Schema::Trades => "trades",
            Schema::Ohlcv1S => "ohlcv-1s",
            Schema::Ohlcv1M => "ohlcv-1m",
            Schema::Ohlcv1H => "ohlcv-1h",
            Schema::Ohlcv1D => "ohlcv-1d",
            Schema::Definition => "definition",
            Schema::Statistics => "statistics",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encoding of downloaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Binary,
    Csv,
    Json,
}

impl ParamEnum for Encoding {
    const NAME: &'static str = "Encoding";
    const VARIANTS: &'static [Self] = &[Encoding::Binary, Encoding::Csv, Encoding::Json];

    fn as_str(&self) -> &'static str {
        match self {
            Encoding::Binary => "binary",
            Encoding::Csv => "csv",
            Encoding::Json => "json",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compression applied to result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    None,
    Zstd,
    Gzip,
}

impl ParamEnum for Compression {
    const NAME: &'static str = "Compression";
    const VARIANTS: &'static [Self] = &[Compression::None, Compression::Zstd, Compression::Gzip];

    fn as_str(&self) -> &'static str {
        match self {
            Compression::None => "none",
            Compression::Zstd => "zstd",
            Compression::Gzip => "gzip",
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbology type used to interpret the `symbols` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SType {
    RawSymbol,
    InstrumentId,
    Continuous,
    Parent,
}

impl ParamEnum for SType {
    const NAME: &'static str = "SType";
    const VARIANTS: &'static [Self] = &[
        SType::RawSymbol,
        SType::InstrumentId,
        SType::Continuous,
        SType::Parent,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SType::RawSymbol => "raw_symbol",
            SType::InstrumentId => "instrument_id",
            SType::Continuous => "continuous",
            SType::Parent => "parent",
        }
    }
}

impl fmt::Display for SType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How batch result files are split along the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitDuration {
    Day,
    Week,
    Month,
    None,
}

impl ParamEnum for SplitDuration {
    const NAME: &'static str = "SplitDuration";
    const VARIANTS: &'static [Self] = &[
        SplitDuration::Day,
        SplitDuration::Week,
        SplitDuration::Month,
        SplitDuration::None,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            SplitDuration::Day => "day",
            SplitDuration::Week => "week",
            SplitDuration::Month => "month",
            SplitDuration::None => "none",
        }
    }
}

impl fmt::Display for SplitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archive packaging of batch result files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    None,
    Zip,
    Tar,
}

impl ParamEnum for Packaging {
    const NAME: &'static str = "Packaging";
    const VARIANTS: &'static [Self] = &[Packaging::None, Packaging::Zip, Packaging::Tar];

    fn as_str(&self) -> &'static str {
        match self {
            Packaging::None => "none",
            Packaging::Zip => "zip",
            Packaging::Tar => "tar",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery mechanism for batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delivery {
    Download,
    S3,
    Disk,
}

impl ParamEnum for Delivery {
    const NAME: &'static str = "Delivery";
    const VARIANTS: &'static [Self] = &[Delivery::Download, Delivery::S3, Delivery::Disk];

    fn as_str(&self) -> &'static str {
        match self {
            Delivery::Download => "download",
            Delivery::S3 => "s3",
            Delivery::Disk => "disk",
        }
    }
}

impl fmt::Display for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_strings_round_trip() {
        for &schema in Schema::VARIANTS {
            assert_eq!(Schema::lookup(schema.as_str()), Some(schema));
        }
        for &encoding in Encoding::VARIANTS {
            assert_eq!(Encoding::lookup(encoding.as_str()), Some(encoding));
        }
        for &stype in SType::VARIANTS {
            assert_eq!(SType::lookup(stype.as_str()), Some(stype));
        }
    }

    #[test]
    fn lookup_is_exact_match_only() {
        assert_eq!(Schema::lookup("MBO"), None);
        assert_eq!(Schema::lookup("mbp1"), None);
        assert_eq!(Encoding::lookup(""), None);
        assert_eq!(Compression::lookup("zstd "), None);
    }

    #[test]
    fn serde_form_matches_canonical_string() {
        // The wire form serde emits must be the same canonical string the
        // validation errors advertise.
        for &schema in Schema::VARIANTS {
            let json = serde_json::to_string(&schema).unwrap();
            assert_eq!(json, format!("\"{}\"", schema.as_str()));
        }
        for &delivery in Delivery::VARIANTS {
            let json = serde_json::to_string(&delivery).unwrap();
            assert_eq!(json, format!("\"{}\"", delivery.as_str()));
        }
    }

    #[test]
    fn display_uses_canonical_string() {
        assert_eq!(Schema::Mbp10.to_string(), "mbp-10");
        assert_eq!(SType::RawSymbol.to_string(), "raw_symbol");
        assert_eq!(SplitDuration::None.to_string(), "none");
    }
}
