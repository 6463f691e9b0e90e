use crate::model::{AggregatedArticle, Block, OutputRow, TimeSlot};

/// Render aggregated articles as "2st Kaffe, 1st Bulle".
///
/// Articles whose total is zero or negative are left out.
pub fn format_articles(articles: &[AggregatedArticle]) -> String {
    articles
        .iter()
        .filter(|a| a.quantity > 0)
        .map(|a| format!("{}st {}", a.quantity, a.article))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_row(block: &Block, articles: &[AggregatedArticle]) -> OutputRow {
    OutputRow {
        name: block.guest.clone(),
        count: 1,
        articles: format_articles(articles),
        table: block.table.clone(),
        time_slot: TimeSlot::from_table_label(&block.table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeaderPos;

    fn article(name: &str, quantity: i64) -> AggregatedArticle {
        AggregatedArticle {
            article: name.into(),
            quantity,
        }
    }

    fn block(table: &str) -> Block {
        Block {
            header: HeaderPos { row: 3, col: 0 },
            table: table.into(),
            guest: "Svensson, Eva".into(),
        }
    }

    #[test]
    fn test_format_articles() {
        let s = format_articles(&[article("Coffee", 3), article("Cake", 1)]);
        assert_eq!(s, "3st Coffee, 1st Cake");
    }

    #[test]
    fn test_format_skips_non_positive_totals() {
        let s = format_articles(&[article("Te", 0), article("Kaffe", 2), article("Saft", -1)]);
        assert_eq!(s, "2st Kaffe");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_articles(&[]), "");
        assert_eq!(format_articles(&[article("Te", 0)]), "");
    }

    #[test]
    fn test_time_slot_classification() {
        assert_eq!(TimeSlot::from_table_label("Bord: 5 (paus)"), TimeSlot::Paus);
        assert_eq!(TimeSlot::from_table_label("Bord: 5 PAUS"), TimeSlot::Paus);
        assert_eq!(TimeSlot::from_table_label("Bord: 5"), TimeSlot::Innan);
        assert_eq!(TimeSlot::from_table_label(""), TimeSlot::Innan);
    }

    #[test]
    fn test_build_row() {
        let row = build_row(&block("Bord: 2 Paus"), &[article("Kaffe", 0)]);
        assert_eq!(row.name, "Svensson, Eva");
        assert_eq!(row.count, 1);
        assert_eq!(row.articles, "");
        assert_eq!(row.table, "Bord: 2 Paus");
        assert_eq!(row.time_slot, TimeSlot::Paus);
        assert_eq!(row.time_slot.to_string(), "paus");
    }
}
