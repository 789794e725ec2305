use crate::types::Result;
use sheet_layout::CardContent;
use sheet_layout::constants::DEFAULT_COLOR;
use std::path::Path;

pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<Vec<CardContent>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    // CSV parsing is CPU-bound, spawn blocking
    let cards = tokio::task::spawn_blocking(move || parse_cards(&contents)).await??;

    log::debug!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Parse `title, body[, color]` rows. A leading header row is skipped.
pub fn parse_cards(contents: &str) -> Result<Vec<CardContent>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());
    let mut cards = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        if index == 0 && is_header(&record) {
            continue;
        }
        if record.len() < 2 {
            log::warn!("Skipping CSV row {}: expected title and body", index + 1);
            continue;
        }

        let color = record
            .get(2)
            .map(str::trim)
            .filter(|color| !color.is_empty())
            .unwrap_or(DEFAULT_COLOR);

        cards.push(CardContent {
            id: format!("card-{}", index + 1),
            title: record[0].trim().to_string(),
            body: record[1].to_string(),
            color: color.to_string(),
        });
    }

    Ok(cards)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .get(0)
        .is_some_and(|field| field.trim().eq_ignore_ascii_case("title"))
}
