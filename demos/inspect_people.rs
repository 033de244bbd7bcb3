use people_table::api::get_people;
use people_table::config::AppConfig;
use people_table::relations::{resolve_rows, PersonCell};
use std::env;
use std::time::Duration;

fn describe(cell: &PersonCell) -> String {
    match cell {
        PersonCell::Link { text, href, female } => {
            format!("{} -> {}{}", text, href, if *female { " (f)" } else { "" })
        }
        PersonCell::Text(text) => format!("{} (unresolved)", text),
        PersonCell::Missing => "-".to_string(),
    }
}

fn year(y: Option<i32>) -> String {
    y.map(|y| y.to_string()).unwrap_or_else(|| "?".to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig {
        fetch_delay: Duration::ZERO,
        ..AppConfig::default()
    };
    if let Some(url) = env::args().nth(1) {
        config.api_url = url;
    }

    println!("Fetching from: {}", config.api_url);
    let people = get_people(&config).await?;
    println!("Fetched {} people.", people.len());

    let rows = resolve_rows(&people);
    let mut unresolved = 0;
    for row in &rows {
        println!("--- {} [{}] {}-{}", row.slug, row.sex, year(row.born), year(row.died));
        println!("  mother: {}", describe(&row.mother));
        println!("  father: {}", describe(&row.father));
        unresolved += [&row.mother, &row.father]
            .iter()
            .filter(|c| matches!(c, PersonCell::Text(_)))
            .count();
    }

    println!("\n{} parent names did not resolve to a record.", unresolved);
    Ok(())
}
