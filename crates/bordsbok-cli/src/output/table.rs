use bordsbok_core::export::EXPORT_COLUMNS;
use bordsbok_core::model::OutputRow;

pub fn print(rows: &[OutputRow], limit: usize) {
    let shown = if limit == 0 {
        rows
    } else {
        &rows[..rows.len().min(limit)]
    };

    let cells: Vec<[String; 5]> = shown
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.count.to_string(),
                r.articles.clone(),
                r.table.clone(),
                r.time_slot.to_string(),
            ]
        })
        .collect();

    // Widths in chars so Swedish letters line up
    let mut widths = EXPORT_COLUMNS.map(|h| h.chars().count());
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    print_line(&EXPORT_COLUMNS.map(String::from), &widths);
    println!("  {}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &cells {
        print_line(row, &widths);
    }

    if shown.len() < rows.len() {
        println!("\n  ... {} more row(s), use --limit 0 to show all", rows.len() - shown.len());
    }
    println!("\n  {} row(s)", rows.len());
}

fn print_line(cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect();
    println!("  {}", line.join("  ").trim_end());
}
