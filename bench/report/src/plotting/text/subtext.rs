use crate::report::BenchmarkReport;
use human_repr::HumanCount;

impl BenchmarkReport {
    pub fn subtext(&self) -> String {
        let mut lines = vec![self.params.pretty_name.clone(), self.format_totals()];
        if let Some(best) = &self.best {
            lines.push(format!(
                "Fastest: {:.2} Mbps with {}",
                best.throughput_mbps.unwrap_or_default(),
                best.config
            ));
        }
        if let Some(identifier) = &self.hardware.identifier {
            lines.push(format!(
                "{} ({}, {} cores, {} MB RAM)",
                identifier,
                self.hardware.cpu_name,
                self.hardware.cpu_cores,
                self.hardware.total_memory_mb
            ));
        }
        lines.join("\n")
    }

    fn format_totals(&self) -> String {
        let transferred: u64 = self
            .results
            .measured()
            .map(|run| run.subject_size_bytes)
            .sum();
        let failed = self.results.failed().count();
        let mut totals = format!(
            "{} runs, {} transferred",
            self.results.len(),
            transferred.human_count_bytes()
        );
        if failed > 0 {
            totals.push_str(&format!(", {failed} failed"));
        }
        totals
    }
}
