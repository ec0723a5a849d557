use std::fs;
use std::path::{Path, PathBuf};

use arbscout::testkit::config::toml_with_bookmakers;
use serde_json::{json, Value};

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

/// A feed file with one 1X2 market for Liverpool vs Chelsea.
pub fn one_x_two_feed(home: f64, draw: f64, away: f64) -> String {
    json!([{
        "home_team": "Liverpool",
        "away_team": "Chelsea",
        "league": "Premier League",
        "start_time": "2024-05-01T15:00:00Z",
        "markets": [{
            "market_type": "1X2",
            "odds": [
                {"outcome": "1", "value": home},
                {"outcome": "X", "value": draw},
                {"outcome": "2", "value": away}
            ]
        }]
    }])
    .to_string()
}

/// Three bookmakers whose best prices form a 1X2 arbitrage (≈ 3.84 %).
pub fn write_arbitrage_setup(dir: &Path) -> PathBuf {
    write(dir, "a.json", &one_x_two_feed(2.10, 3.20, 3.60));
    write(dir, "b.json", &one_x_two_feed(1.95, 3.80, 3.90));
    write(dir, "c.json", &one_x_two_feed(2.00, 3.30, 4.50));
    let config = toml_with_bookmakers(&[("A", "a.json"), ("B", "b.json"), ("C", "c.json")]);
    write(dir, "config.toml", &config)
}

pub fn parse_json_lines(stdout: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}
