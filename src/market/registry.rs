use std::collections::HashSet;

use crate::error::AppError;

/// Instruments shown on the dashboard, keyed by display name.
const DEFAULT_INSTRUMENTS: &[(&str, &str)] = &[
    ("covestro", "COV.DE"),
    ("bayer", "BAYN.DE"),
    ("bmw", "BMW.DE"),
    ("continental", "CON.DE"),
    ("porsche", "P911.DE"),
    ("msci world", "MSCI"),
    ("mtu", "MTU.DE"),
    ("infineon", "IFX.DE"),
    ("linde", "LIN.DE"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    pub name: String,
    pub symbol: String,
}

impl Instrument {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Ordered, read-only mapping from display names to provider tickers.
///
/// Iteration follows insertion order, so responses built from the registry
/// list instruments in a stable order.
#[derive(Debug, Clone)]
pub struct SymbolRegistry {
    instruments: Vec<Instrument>,
}

impl SymbolRegistry {
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, AppError> {
        validate(&instruments)?;
        Ok(Self { instruments })
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self, AppError> {
        Self::new(
            pairs
                .iter()
                .map(|(name, symbol)| Instrument::new(*name, *symbol))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

fn validate(instruments: &[Instrument]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(instruments.len());

    for instrument in instruments {
        if instrument.name.trim().is_empty() {
            return Err(AppError::ConfigError("Instrument name must not be empty".into()));
        }
        if instrument.symbol.trim().is_empty() {
            return Err(AppError::ConfigError(format!(
                "Instrument '{}' has no ticker symbol",
                instrument.name
            )));
        }
        if !seen.insert(instrument.name.as_str()) {
            return Err(AppError::ConfigError(format!(
                "Duplicate instrument name '{}'",
                instrument.name
            )));
        }
    }

    Ok(())
}

impl Default for SymbolRegistry {
    fn default() -> Self {
        Self {
            instruments: DEFAULT_INSTRUMENTS
                .iter()
                .map(|(name, symbol)| Instrument::new(*name, *symbol))
                .collect(),
        }
    }
}
