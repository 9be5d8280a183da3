//! Load college records from a Scorecard-style CSV export

use super::{CollegeRecord, IncomeBracket, Ownership};
use crate::error::LoadError;
use csv::Reader;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw CSV row. The five net price columns apply to the college's own ownership table.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
    ownership: String,
    #[serde(default)]
    tuition_in_state: Option<f64>,
    #[serde(default)]
    tuition_out_of_state: Option<f64>,
    #[serde(default)]
    room_and_board: Option<f64>,
    #[serde(default)]
    avg_net_price: Option<f64>,
    #[serde(rename = "net_price_0_30000", default)]
    net_price_under_30k: Option<f64>,
    #[serde(rename = "net_price_30001_48000", default)]
    net_price_30k_to_48k: Option<f64>,
    #[serde(rename = "net_price_48001_75000", default)]
    net_price_48k_to_75k: Option<f64>,
    #[serde(rename = "net_price_75001_110000", default)]
    net_price_75k_to_110k: Option<f64>,
    #[serde(rename = "net_price_110001_plus", default)]
    net_price_over_110k: Option<f64>,
    #[serde(default)]
    median_debt: Option<f64>,
    #[serde(default)]
    median_earnings_6yr: Option<f64>,
    #[serde(default)]
    median_earnings_10yr: Option<f64>,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<CollegeRecord, LoadError> {
        let ownership = Ownership::parse(&self.ownership).ok_or_else(|| LoadError::InvalidRow {
            row,
            message: format!("unknown ownership {:?}", self.ownership),
        })?;

        let net_prices: BTreeMap<IncomeBracket, f64> = [
            (IncomeBracket::Under30k, self.net_price_under_30k),
            (IncomeBracket::From30kTo48k, self.net_price_30k_to_48k),
            (IncomeBracket::From48kTo75k, self.net_price_48k_to_75k),
            (IncomeBracket::From75kTo110k, self.net_price_75k_to_110k),
            (IncomeBracket::Over110k, self.net_price_over_110k),
        ]
        .into_iter()
        .filter_map(|(bracket, price)| price.map(|p| (bracket, p)))
        .collect();

        let (net_price_public, net_price_private) = if ownership.is_public() {
            (net_prices, BTreeMap::new())
        } else {
            (BTreeMap::new(), net_prices)
        };

        Ok(CollegeRecord {
            id: self.id,
            name: self.name,
            city: self.city.filter(|c| !c.trim().is_empty()),
            state: self.state.filter(|s| !s.trim().is_empty()),
            ownership,
            tuition_in_state: self.tuition_in_state,
            tuition_out_of_state: self.tuition_out_of_state,
            room_and_board: self.room_and_board,
            net_price_public,
            net_price_private,
            avg_net_price: self.avg_net_price,
            median_debt: self.median_debt,
            median_earnings_6yr: self.median_earnings_6yr,
            median_earnings_10yr: self.median_earnings_10yr,
        })
    }
}

/// Load all colleges from a CSV file
pub fn load_colleges<P: AsRef<Path>>(path: P) -> Result<Vec<CollegeRecord>, LoadError> {
    let reader = Reader::from_path(path)?;
    read_colleges(reader)
}

/// Load colleges from any reader (e.g., string buffer, request body)
pub fn load_colleges_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<CollegeRecord>, LoadError> {
    read_colleges(Reader::from_reader(reader))
}

fn read_colleges<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<CollegeRecord>, LoadError> {
    let mut colleges = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Header is row 1
        colleges.push(row.into_record(idx + 2)?);
    }

    Ok(colleges)
}
