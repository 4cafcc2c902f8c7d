//! Named timing events for the L3 tools, rendered as a table.

use std::{collections::BTreeMap, time::Duration};

use cli_table::{format::Justify, Cell, Row, RowStruct, Style};

#[derive(Default)]
pub struct Timings {
    /// event name, in first-seen order, with every completed run of it
    entries: Vec<(&'static str, Vec<Duration>)>,
    pending: BTreeMap<&'static str, Vec<std::time::Instant>>,
}

impl Timings {
    pub fn start(
        &mut self,
        key: &'static str,
    ) {
        self.pending.entry(key).or_default().push(std::time::Instant::now());
    }

    pub fn end(
        &mut self,
        key: &'static str,
    ) {
        let Some(start) = self.pending.get_mut(key).and_then(Vec::pop) else {
            eprintln!("Profiling error: tried to end event `{key}` that was never started");
            return;
        };
        self.record(key, start.elapsed());
    }

    /// Times `f` under `key`. Starts and ends always match, even when `f` returns early.
    pub fn time<T>(
        &mut self,
        key: &'static str,
        f: impl FnOnce() -> T,
    ) -> T {
        let start = std::time::Instant::now();
        let result = f();
        self.record(key, start.elapsed());
        result
    }

    #[cfg(test)]
    fn runs(
        &self,
        key: &str,
    ) -> usize {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, runs)| runs.len()).unwrap_or(0)
    }

    fn record(
        &mut self,
        key: &'static str,
        elapsed: Duration,
    ) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, runs)) => runs.push(elapsed),
            None => self.entries.push((key, vec![elapsed])),
        }
    }

    pub fn render(&self) -> String {
        let unended = self.pending.iter().filter(|(_, v)| !v.is_empty()).map(|(k, _)| *k).collect::<Vec<_>>();
        if !unended.is_empty() {
            eprintln!("Profiling error: some events were not ended: {}", unended.join(", "));
        }

        use cli_table::Table;

        let mut table = vec![];

        for (key, runs) in &self.entries {
            let total: Duration = runs.iter().sum();
            let row: RowStruct = vec![
                key.to_string().cell().bold(true),
                runs.len().cell().justify(Justify::Right),
                format_duration(total).cell().justify(Justify::Right),
            ]
            .row();
            table.push(row);
        }

        match table
            .table()
            .title(vec!["Event".cell().bold(true), "Runs".cell().bold(true), "Total Duration".cell().bold(true)])
            .display()
        {
            Ok(rendered) => format!("{}", rendered),
            Err(err) => format!("failed to render profiles table: {err}"),
        }
    }
}

fn format_duration(duration: Duration) -> String {
    use num_format::{Locale, ToFormattedString};

    match duration.as_millis() {
        x if x < 10 => format!("{} ns", duration.as_nanos().to_formatted_string(&Locale::en)),
        otherwise => format!("{} ms", otherwise.to_formatted_string(&Locale::en)),
    }
}
