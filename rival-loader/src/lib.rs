//! Parses the flat product/competitor-price data file into a [`Catalog`].
//!
//! Format:
//! - line 1: product line count P
//! - P lines: `<productName> <supplyFlag> <demandFlag>`
//! - next line: price line count C
//! - C lines: `<productName> <competitorName> <price>`

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rival_catalog::{Catalog, CatalogError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read data file: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: expected more input, file ended early")]
    MissingLine { line: usize },

    #[error("Line {line}: malformed record: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Line {line}: price recorded for unknown product: {product}")]
    UnknownProduct { line: usize, product: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Load and parse a data file into a populated catalog
pub fn load_catalog(path: impl AsRef<Path>) -> LoadResult<Catalog> {
    let file = File::open(path.as_ref())?;
    let catalog = parse_catalog(BufReader::new(file))?;
    tracing::info!(
        path = %path.as_ref().display(),
        products = catalog.product_count(),
        competitors = catalog.competitor_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse the data format from any buffered reader
pub fn parse_catalog(reader: impl BufRead) -> LoadResult<Catalog> {
    let mut lines = LineSource::new(reader);
    let mut catalog = Catalog::new();

    let product_lines = lines.next_count()?;
    for _ in 0..product_lines {
        let (line_no, line) = lines.next_line()?;
        parse_product_line(&mut catalog, line_no, &line)?;
    }

    let price_lines = lines.next_count()?;
    for _ in 0..price_lines {
        let (line_no, line) = lines.next_line()?;
        parse_price_line(&mut catalog, line_no, &line)?;
    }

    Ok(catalog)
}

fn parse_product_line(catalog: &mut Catalog, line_no: usize, line: &str) -> LoadResult<()> {
    let [name, supply, demand] = split_record(line_no, line)?;
    let code = format!("{supply} {demand}");
    let product = catalog.create_product(name, &code)?;
    catalog.add_product(product);
    Ok(())
}

fn parse_price_line(catalog: &mut Catalog, line_no: usize, line: &str) -> LoadResult<()> {
    let [product_name, competitor_name, price] = split_record(line_no, line)?;

    let product = catalog
        .product(product_name)
        .cloned()
        .ok_or_else(|| LoadError::UnknownProduct {
            line: line_no,
            product: product_name.to_string(),
        })?;

    let price: f64 = price.parse().map_err(|_| LoadError::MalformedRecord {
        line: line_no,
        reason: format!("price is not a number: '{price}'"),
    })?;

    catalog
        .get_or_create_competitor(competitor_name)
        .record_price(&product, price);
    Ok(())
}

// Records are exactly three tokens separated by single spaces; a doubled
// space or a tab produces a token that fails here or downstream.
fn split_record(line_no: usize, line: &str) -> LoadResult<[&str; 3]> {
    let mut tokens = line.split(' ');
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), Some(c), None) => Ok([a, b, c]),
        _ => Err(LoadError::MalformedRecord {
            line: line_no,
            reason: format!("expected 3 space-separated tokens, got: '{line}'"),
        }),
    }
}

/// Line reader that tracks 1-based line numbers for error reporting
struct LineSource<R> {
    lines: io::Lines<R>,
    current: usize,
}

impl<R: BufRead> LineSource<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: 0,
        }
    }

    fn next_line(&mut self) -> LoadResult<(usize, String)> {
        self.current += 1;
        match self.lines.next() {
            Some(line) => Ok((self.current, line?)),
            None => Err(LoadError::MissingLine { line: self.current }),
        }
    }

    fn next_count(&mut self) -> LoadResult<usize> {
        let (line_no, line) = self.next_line()?;
        line.trim()
            .parse()
            .map_err(|_| LoadError::MalformedRecord {
                line: line_no,
                reason: format!("expected a record count, got: '{line}'"),
            })
    }
}
