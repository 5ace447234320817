//! Batch-job request parameters.
//!
//! `SubmitJobBuilder` collects everything needed to submit a batch job.
//! Enum-valued selectors accept either a variant or its canonical string;
//! `build` runs them through the validation layer, so a bad selector fails
//! before any request object exists.

use chrono::NaiveDate;
use histfeed_core::validation::{validate_enum, validate_maybe_enum, ParamValue};
use histfeed_core::{
    Compression, Delivery, Encoding, Error, Packaging, Result, SType, Schema, SplitDuration,
};

/// Builder for [`SubmitJobParams`].
#[derive(Debug, Clone, Default)]
pub struct SubmitJobBuilder {
    dataset: String,
    symbols: Vec<String>,
    schema: Option<ParamValue<Schema>>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    encoding: Option<ParamValue<Encoding>>,
    stype_in: Option<ParamValue<SType>>,
    compression: Option<ParamValue<Compression>>,
    split_duration: Option<ParamValue<SplitDuration>>,
    packaging: Option<ParamValue<Packaging>>,
    delivery: Option<ParamValue<Delivery>>,
}

impl SubmitJobBuilder {
    pub fn dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = dataset.into();
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    pub fn schema(mut self, schema: impl Into<ParamValue<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn encoding(mut self, encoding: impl Into<ParamValue<Encoding>>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    pub fn stype_in(mut self, stype_in: impl Into<ParamValue<SType>>) -> Self {
        self.stype_in = Some(stype_in.into());
        self
    }

    pub fn compression(mut self, compression: impl Into<ParamValue<Compression>>) -> Self {
        self.compression = Some(compression.into());
        self
    }

    pub fn split_duration(mut self, split_duration: impl Into<ParamValue<SplitDuration>>) -> Self {
        self.split_duration = Some(split_duration.into());
        self
    }

    pub fn packaging(mut self, packaging: impl Into<ParamValue<Packaging>>) -> Self {
        self.packaging = Some(packaging.into());
        self
    }

    pub fn delivery(mut self, delivery: impl Into<ParamValue<Delivery>>) -> Self {
        self.delivery = Some(delivery.into());
        self
    }

    /// Validate every parameter and produce the final submit params.
    ///
    /// Required: dataset, symbols, schema, date range. Encoding defaults to
    /// binary and symbology input to raw symbols; the remaining selectors
    /// stay absent unless set, and absence is always legal.
    pub fn build(self) -> Result<SubmitJobParams> {
        if self.dataset.is_empty() {
            return Err(invalid("dataset", "must not be empty"));
        }
        if self.symbols.is_empty() {
            return Err(invalid("symbols", "at least one symbol is required"));
        }
        let schema = match self.schema {
            Some(schema) => validate_enum(schema, "schema")?,
            None => return Err(invalid("schema", "a record schema is required")),
        };
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => (start, end),
            (Some(start), Some(end)) => {
                return Err(invalid(
                    "end",
                    format!("range end {end} precedes start {start}"),
                ));
            }
            _ => return Err(invalid("start", "a date range is required")),
        };

        let encoding = match self.encoding {
            Some(encoding) => validate_enum(encoding, "encoding")?,
            None => Encoding::Binary,
        };
        let stype_in = match self.stype_in {
            Some(stype_in) => validate_enum(stype_in, "stype_in")?,
            None => SType::RawSymbol,
        };

        Ok(SubmitJobParams {
            dataset: self.dataset,
            symbols: self.symbols,
            schema,
            start,
            end,
            encoding,
            stype_in,
            compression: validate_maybe_enum(self.compression, "compression")?,
            split_duration: validate_maybe_enum(self.split_duration, "split_duration")?,
            packaging: validate_maybe_enum(self.packaging, "packaging")?,
            delivery: validate_maybe_enum(self.delivery, "delivery")?,
        })
    }
}

fn invalid(param: &str, reason: impl Into<String>) -> Error {
    Error::InvalidParameter {
        param: param.to_string(),
        reason: reason.into(),
    }
}

/// Fully validated parameters for a batch-job submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitJobParams {
    pub dataset: String,
    pub symbols: Vec<String>,
    pub schema: Schema,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub encoding: Encoding,
    pub stype_in: SType,
    pub compression: Option<Compression>,
    pub split_duration: Option<SplitDuration>,
    pub packaging: Option<Packaging>,
    pub delivery: Option<Delivery>,
}

impl SubmitJobParams {
    pub fn builder() -> SubmitJobBuilder {
        SubmitJobBuilder::default()
    }

    /// Serialize to wire pairs for the submit endpoint. Absent optional
    /// selectors are omitted, not sent as empty strings.
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        let mut form = vec![
            ("dataset", self.dataset.clone()),
            ("symbols", self.symbols.join(",")),
            ("schema", self.schema.to_string()),
            ("start", self.start.to_string()),
            ("end", self.end.to_string()),
            ("encoding", self.encoding.to_string()),
            ("stype_in", self.stype_in.to_string()),
        ];
        if let Some(compression) = self.compression {
            form.push(("compression", compression.to_string()));
        }
        if let Some(split_duration) = self.split_duration {
            form.push(("split_duration", split_duration.to_string()));
        }
        if let Some(packaging) = self.packaging {
            form.push(("packaging", packaging.to_string()));
        }
        if let Some(delivery) = self.delivery {
            form.push(("delivery", delivery.to_string()));
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> SubmitJobBuilder {
        SubmitJobParams::builder()
            .dataset("XNAS.ITCH")
            .symbols(["AAPL", "MSFT"])
            .schema("trades")
            .date_range(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
    }

    #[test]
    fn builder_accepts_strings_and_members() {
        let params = base_builder()
            .encoding(Encoding::Csv)
            .compression("zstd")
            .build()
            .unwrap();
        assert_eq!(params.schema, Schema::Trades);
        assert_eq!(params.encoding, Encoding::Csv);
        assert_eq!(params.compression, Some(Compression::Zstd));
    }

    #[test]
    fn builder_applies_defaults() {
        let params = base_builder().build().unwrap();
        assert_eq!(params.encoding, Encoding::Binary);
        assert_eq!(params.stype_in, SType::RawSymbol);
        assert_eq!(params.compression, None);
        assert_eq!(params.delivery, None);
    }

    #[test]
    fn invalid_selector_fails_before_any_request_exists() {
        let err = base_builder().packaging("rar").build().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("`packaging`"));
        assert!(msg.contains("'rar'"));
        assert!(msg.contains("[none, zip, tar]"));
    }

    #[test]
    fn reversed_date_range_is_rejected() {
        let err = SubmitJobParams::builder()
            .dataset("XNAS.ITCH")
            .symbols(["AAPL"])
            .schema(Schema::Mbo)
            .date_range(
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("`end`"));
    }

    #[test]
    fn missing_schema_is_rejected() {
        let err = SubmitJobParams::builder()
            .dataset("XNAS.ITCH")
            .symbols(["AAPL"])
            .date_range(
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("`schema`"));
    }

    #[test]
    fn form_omits_absent_selectors() {
        let params = base_builder().build().unwrap();
        let form = params.to_form();
        assert!(form.iter().any(|(k, v)| *k == "schema" && v == "trades"));
        assert!(form.iter().any(|(k, v)| *k == "symbols" && v == "AAPL,MSFT"));
        assert!(!form.iter().any(|(k, _)| *k == "compression"));
    }

    #[test]
    fn form_includes_chosen_selectors() {
        let params = base_builder()
            .split_duration(SplitDuration::Week)
            .delivery("download")
            .build()
            .unwrap();
        let form = params.to_form();
        assert!(form.iter().any(|(k, v)| *k == "split_duration" && v == "week"));
        assert!(form.iter().any(|(k, v)| *k == "delivery" && v == "download"));
    }
}
