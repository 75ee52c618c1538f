use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::table::Table;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum DisplayStyle {
    Table,
    Json,
}

pub trait TerminalDisplay {
    fn table_titles() -> Vec<&'static str>;
    fn table_row(self) -> Vec<String>;
}

pub fn display_json<T: Serialize>(o: T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&o)?);
    Ok(())
}

pub fn render_table<T: TerminalDisplay>(list: Vec<T>) -> String {
    if list.is_empty() {
        return String::from("<empty list>");
    }
    let mut table = Table::with_capacity(list.len() + 1);
    table.add(T::table_titles().iter().map(|s| s.to_string()).collect());
    for item in list {
        table.add(item.table_row());
    }
    table.render()
}
