use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::trace;

use crate::model::{AggregatedArticle, HeaderPos, Sheet};

/// Read the order lines under a header pair and sum quantities per article.
///
/// Reading starts on the row after the header and ends at the first row where
/// both the quantity and the article cell are blank. Articles keep the order
/// in which they were first seen.
pub fn aggregate_lines(sheet: &Sheet, header: HeaderPos) -> Vec<AggregatedArticle> {
    let mut articles: Vec<AggregatedArticle> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in header.row + 1..sheet.height() {
        let qty_text = sheet.cell(row, header.col);
        let article = sheet.cell(row, header.col + 1);

        if qty_text.is_empty() && article.is_empty() {
            break;
        }
        if article.is_empty() {
            continue;
        }

        let quantity = parse_quantity(qty_text);
        let slot = *index.entry(article.to_string()).or_insert_with(|| {
            articles.push(AggregatedArticle {
                article: article.to_string(),
                quantity: 0,
            });
            articles.len() - 1
        });
        articles[slot].quantity = articles[slot].quantity.saturating_add(quantity);
    }

    articles
}

/// Parse an order quantity, handling Swedish comma notation.
///
/// Fractions are truncated toward zero. Text that is not an exact decimal
/// (exponents, more digits than `Decimal` holds) is read as a float instead;
/// values beyond `i64` saturate. Blank or unparseable text counts as 0.
pub fn parse_quantity(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    let normalized = text.replace(',', ".");
    let exact = Decimal::from_str(&normalized)
        .ok()
        .and_then(|d| d.trunc().to_i64());
    let quantity = exact.or_else(|| {
        normalized
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.trunc() as i64)
    });

    match quantity {
        Some(n) => n,
        None => {
            trace!(quantity = text, "unparseable quantity, counting as 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_at_top(rows: Vec<Vec<&str>>) -> Vec<AggregatedArticle> {
        let mut all = vec![vec!["Antal", "Artikel"]];
        all.extend(rows);
        let sheet = Sheet::from_rows("test", all);
        aggregate_lines(&sheet, HeaderPos { row: 0, col: 0 })
    }

    fn article(name: &str, quantity: i64) -> AggregatedArticle {
        AggregatedArticle {
            article: name.into(),
            quantity,
        }
    }

    #[test]
    fn test_sums_and_keeps_first_seen_order() {
        let agg = header_at_top(vec![
            vec!["2", "Coffee"],
            vec!["1", "Cake"],
            vec!["1", "Coffee"],
        ]);
        assert_eq!(agg, vec![article("Coffee", 3), article("Cake", 1)]);
    }

    #[test]
    fn test_stops_at_first_fully_blank_row() {
        let agg = header_at_top(vec![
            vec!["1", "Kaffe"],
            vec!["", ""],
            vec!["5", "Bulle"],
        ]);
        assert_eq!(agg, vec![article("Kaffe", 1)]);
    }

    #[test]
    fn test_quantity_without_article_is_skipped() {
        let agg = header_at_top(vec![
            vec!["1", "Kaffe"],
            vec!["3", ""],
            vec!["2", "Te"],
        ]);
        assert_eq!(agg, vec![article("Kaffe", 1), article("Te", 2)]);
    }

    #[test]
    fn test_blank_quantity_counts_zero() {
        let agg = header_at_top(vec![vec!["", "Kaffe"], vec!["abc", "Te"]]);
        assert_eq!(agg, vec![article("Kaffe", 0), article("Te", 0)]);
    }

    #[test]
    fn test_header_in_inner_column() {
        let sheet = Sheet::from_rows(
            "test",
            vec![
                vec!["x", "Antal", "Artikel"],
                vec!["", "2", "TOSCAMAZARIN 40kr"],
                vec!["ignored", "1", "KAFFE 35kr"],
            ],
        );
        let agg = aggregate_lines(&sheet, HeaderPos { row: 0, col: 1 });
        assert_eq!(
            agg,
            vec![article("TOSCAMAZARIN 40kr", 2), article("KAFFE 35kr", 1)]
        );
    }

    #[test]
    fn test_runs_to_end_of_sheet() {
        let agg = header_at_top(vec![vec!["1", "Kaffe"]]);
        assert_eq!(agg, vec![article("Kaffe", 1)]);
    }

    #[test]
    fn test_parse_quantity_truncates() {
        assert_eq!(parse_quantity("2,5"), 2);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity("-1,5"), -1);
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 4 "), 4);
    }

    #[test]
    fn test_parse_quantity_absorbs_garbage() {
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("1.234,5"), 0);
        assert_eq!(parse_quantity("inf"), 0);
        assert_eq!(parse_quantity("NaN"), 0);
    }

    #[test]
    fn test_parse_quantity_falls_back_to_float() {
        assert_eq!(parse_quantity("1e2"), 100);
        assert_eq!(parse_quantity("2,5e1"), 25);
        assert_eq!(parse_quantity("123456789012345678901234567890"), i64::MAX);
        assert_eq!(parse_quantity("-123456789012345678901234567890"), i64::MIN);
    }

    #[test]
    fn test_huge_quantities_saturate_instead_of_overflowing() {
        let agg = header_at_top(vec![
            vec!["9000000000000000000", "Kaffe"],
            vec!["9000000000000000000", "Kaffe"],
            vec!["1", "Te"],
        ]);
        assert_eq!(agg, vec![article("Kaffe", i64::MAX), article("Te", 1)]);
    }
}
