use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::record::RecordState;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::or_placeholder;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { state } = cmd {
        let mut ledger = open_ledger(cfg)?;
        let roster = ledger.snapshot()?;
        let filter: Option<RecordState> = state.map(Into::into);

        let mut table = Table::new(
            ["ID", "Name", "Branch", "State", "Entry", "Exit"]
                .iter()
                .map(|h| Column::new(h))
                .collect(),
        );

        for r in roster
            .records()
            .iter()
            .filter(|r| filter.is_none_or(|s| r.state() == s))
        {
            table.add_row(vec![
                r.id.clone(),
                r.name.clone(),
                r.branch.clone(),
                r.state().label().to_string(),
                or_placeholder(&r.entry_time, "--"),
                or_placeholder(&r.exit_time, "--"),
            ]);
        }

        if table.rows.is_empty() {
            warning("No records match.");
            return Ok(());
        }

        print!("{}", table.render(&cfg.separator_char));
        info(format!("{} record(s)", table.rows.len()));
    }
    Ok(())
}
