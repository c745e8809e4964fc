use crate::domain::PriceList;
use std::fs;
use std::path::Path;

pub struct PriceRepository;

impl PriceRepository {
    pub fn save_prices(prices: &PriceList, path: &Path) -> Result<(), String> {
        match serde_json::to_string_pretty(prices) {
            Ok(json) => fs::write(path, json).map_err(|e| e.to_string()),
            Err(e) => Err(format!("Serialization failed: {}", e)),
        }
    }

    pub fn load_prices(path: &Path) -> Result<PriceList, String> {
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<PriceList>(&content) {
                Ok(prices) => {
                    tracing::debug!(path = %path.display(), "loaded price list");
                    Ok(prices)
                }
                Err(e) => Err(format!("Invalid file format - {}", e)),
            },
            Err(e) => Err(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.json");
        let prices = PriceList {
            small: 7,
            big: 9,
            surcharge: 1,
        };

        PriceRepository::save_prices(&prices, &path).unwrap();
        let loaded = PriceRepository::load_prices(&path).unwrap();

        assert_eq!(loaded, prices);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = PriceRepository::load_prices(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prices.json");
        fs::write(&path, "not json").unwrap();

        let err = PriceRepository::load_prices(&path).unwrap_err();
        assert!(err.contains("Invalid file format"));
    }
}
