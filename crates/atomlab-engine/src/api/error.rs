use crate::assets::registry::RegistryError;

/// Errors raised while starting a lab session.
///
/// Runtime operations (queries, classification, event handling) never fail;
/// everything that can go wrong is caught here, once, at startup.
#[derive(Debug, thiserror::Error)]
pub enum LabError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid lab config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid bond atom {symbol:?}: {reason}")]
    InvalidBondAtom { symbol: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, LabError>;
