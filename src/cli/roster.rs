use tabled::Table;

use crate::{config, types::RosterTableRow};

pub fn roster() {
    let mut entries = config::artist_roster();
    entries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    let table_rows: Vec<RosterTableRow> = entries
        .into_iter()
        .map(|a| RosterTableRow {
            name: a.name,
            id: a.id,
            market: a.market,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
